//! Core types for graphconn
//!
//! This crate provides the configuration side of the connection provider:
//!
//! - **Access modes**: read (replica) versus write (primary) intent
//! - **Configuration**: `NEO4J_*` variables resolved into a [`ConnectionConfig`]
//! - **Driver options**: the sparse option mapping passed to the driver
//! - **Error handling**: Unified error types
//!

pub mod access_mode;
pub mod config;
pub mod error;
pub mod options;

// Re-export main types for convenience
pub use access_mode::AccessMode;
pub use config::{ConnectionConfig, Layered, ProcessEnv, VariableSource};
pub use error::{Error, Result, ResultExt};
pub use options::{DriverOption, DriverOptions, OptionValue};

/// Version of the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
