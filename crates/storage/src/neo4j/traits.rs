use async_trait::async_trait;
use graphconn_core::{AccessMode, ConnectionConfig, DriverOptions};

use crate::error::StorageError;

/// Everything a connector needs to open one handle
#[derive(Debug, Clone, Copy)]
pub struct ConnectParams<'a> {
    pub mode: AccessMode,
    pub uri: &'a str,
    pub user: &'a str,
    pub password: &'a str,
    pub database: &'a str,
    pub options: &'a DriverOptions,
}

impl<'a> ConnectParams<'a> {
    /// Selects the URI for `mode` and borrows credentials and options from `config`
    pub fn for_mode(config: &'a ConnectionConfig, mode: AccessMode) -> Self {
        Self {
            mode,
            uri: config.uri_for(mode),
            user: &config.user,
            password: &config.password,
            database: &config.database,
            options: &config.options,
        }
    }
}

/// Construction entrypoint of a graph database driver
///
/// Implementations own option coercion and validation; the provider hands
/// options over exactly as they were configured.
#[async_trait]
pub trait GraphConnector: Send + Sync {
    /// Client handle produced by this connector
    type Handle: Send + Sync + 'static;

    /// Opens a client handle for the given parameters
    async fn connect(&self, params: ConnectParams<'_>) -> Result<Self::Handle, StorageError>;
}
