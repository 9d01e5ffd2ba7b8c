//! Connection configuration for the graph database
//!
//! Configuration is resolved from `NEO4J_*` variables. The process environment
//! is the normal source; an optional TOML file can supply values underneath it,
//! and tests can hand in any [`VariableSource`] instead.

mod defaults;
mod loading;
mod source;


use crate::access_mode::AccessMode;
use crate::error::{Error, Result};
use crate::options::DriverOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use defaults::{
    ENV_DATABASE, ENV_ENTERPRISE, ENV_HOST, ENV_PASSWORD, ENV_PORT, ENV_PREFIX, ENV_PROTOCOL,
    ENV_REPLICA_HOST, ENV_USER,
};
pub use source::{Layered, ProcessEnv, VariableSource};

/// Returns the path to the default configuration file
///
/// The file lives at `~/.graphconn/config.toml` and is optional.
pub fn global_config_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| Error::config("Unable to determine home directory".to_string()))?;
    Ok(home_dir.join(".graphconn").join("config.toml"))
}

/// Everything needed to open a primary or replica connection
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Primary server URI, `protocol://host:port`
    pub uri: String,

    /// Replica server URI; shares protocol and port with `uri`
    pub replica_uri: String,

    /// Username for basic auth
    pub user: String,

    /// Password for basic auth; never serialized
    #[serde(skip_serializing, default)]
    pub password: String,

    /// Target database name
    pub database: String,

    /// Whether the server is an enterprise edition deployment
    pub enterprise: bool,

    /// Driver options, populated only from variables that were set
    #[serde(default)]
    pub options: DriverOptions,
}

impl ConnectionConfig {
    /// URI a connection for `mode` should target
    pub fn uri_for(&self, mode: AccessMode) -> &str {
        match mode {
            AccessMode::Read => &self.replica_uri,
            AccessMode::Write => &self.uri,
        }
    }
}

impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("uri", &self.uri)
            .field("replica_uri", &self.replica_uri)
            .field("user", &self.user)
            .field("password", &"***REDACTED***")
            .field("database", &self.database)
            .field("enterprise", &self.enterprise)
            .field("options", &self.options)
            .finish()
    }
}
