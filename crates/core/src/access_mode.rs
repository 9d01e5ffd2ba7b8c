//! Logical access intent of a connection

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Whether a caller needs the primary (read/write) server or can be served
/// by a read replica
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AccessMode {
    /// Read-only work, routed to the replica host
    Read,
    /// Read/write work, routed to the primary host
    #[default]
    Write,
}

impl AccessMode {
    /// Converts an external mode label into an `AccessMode`.
    ///
    /// Only the exact strings `"read"` and `"write"` map to their variants, and
    /// only the empty label selects [`AccessMode::Write`] by default. Anything
    /// else, including padded or differently cased labels, is rejected rather
    /// than silently treated as a write.
    pub fn from_label(label: &str) -> Result<Self> {
        if label.is_empty() {
            return Ok(Self::default());
        }
        Self::from_str(label).map_err(|_| {
            Error::invalid_input(format!(
                "Unknown access mode '{label}', expected 'read' or 'write'"
            ))
        })
    }
}
