#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

//! Cached graph database connections routed by access mode
//!
//! [`ConnectionProvider`] keeps one primary and one replica handle and builds
//! each on first use. [`get_connection`] serves the process-wide provider,
//! configured from `NEO4J_*` environment variables.

pub mod error;
pub mod neo4j;
mod provider;

/// The underlying driver library, for callers that need its own types such as
/// `ConfigBuilder`, `query` or `Graph`
pub use neo4rs as driver;

pub use error::StorageError;
pub use neo4j::{ConnectParams, GraphConnector, Neo4jConnector};
pub use provider::ConnectionProvider;

use graphconn_core::{AccessMode, ConnectionConfig};
use neo4rs::Graph;
use std::sync::{Arc, OnceLock};

static GLOBAL_PROVIDER: OnceLock<ConnectionProvider<Neo4jConnector>> = OnceLock::new();

/// The process-wide provider, created on first access
///
/// Each slot reads the environment when it is first filled, so variables set
/// after that point do not affect the handle already built.
pub fn global_provider() -> &'static ConnectionProvider<Neo4jConnector> {
    GLOBAL_PROVIDER.get_or_init(|| ConnectionProvider::from_env(Neo4jConnector::new()))
}

/// Returns the process-wide handle for `mode`, connecting on first use
pub async fn get_connection(mode: AccessMode) -> Result<Arc<Graph>, StorageError> {
    global_provider().get_connection(mode).await
}

/// Same as [`get_connection`] for an external mode label
///
/// Only `"read"` selects the replica; `"write"` and the empty label select the
/// primary. Any other label is rejected before a connection is attempted.
pub async fn get_connection_for(label: &str) -> Result<Arc<Graph>, StorageError> {
    global_provider().get_connection_for(label).await
}

/// Configuration as currently described by the process environment
///
/// Recomputed on every call.
pub fn environment_config() -> Result<ConnectionConfig, StorageError> {
    ConnectionConfig::from_env().map_err(StorageError::from)
}
