//! Lazily initialized, mode-routed connection cache

use graphconn_core::{AccessMode, ConnectionConfig};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::error::StorageError;
use crate::neo4j::{ConnectParams, GraphConnector};

/// Where a provider gets its configuration when a slot is first filled
#[derive(Debug, Clone)]
enum ConfigSource {
    Fixed(ConnectionConfig),
    /// Read `NEO4J_*` from the process environment at construction time
    Environment,
}

impl ConfigSource {
    fn resolve(&self) -> Result<ConnectionConfig, StorageError> {
        match self {
            Self::Fixed(config) => Ok(config.clone()),
            Self::Environment => ConnectionConfig::from_env().map_err(StorageError::from),
        }
    }
}

/// Holds one primary and one replica handle, each built at most once
///
/// The slots are independent: filling one never touches the other. Once a
/// slot holds a handle it is returned as-is for the provider's lifetime, with
/// no health check. A failed construction leaves the slot empty so the next
/// call tries again.
pub struct ConnectionProvider<C: GraphConnector> {
    connector: C,
    source: ConfigSource,
    write: OnceCell<Arc<C::Handle>>,
    read: OnceCell<Arc<C::Handle>>,
}

impl<C: GraphConnector> ConnectionProvider<C> {
    /// Creates a provider that connects with an explicit configuration
    pub fn new(connector: C, config: ConnectionConfig) -> Self {
        Self::with_source(connector, ConfigSource::Fixed(config))
    }

    /// Creates a provider that reads the environment when each slot is first used
    pub fn from_env(connector: C) -> Self {
        Self::with_source(connector, ConfigSource::Environment)
    }

    fn with_source(connector: C, source: ConfigSource) -> Self {
        Self {
            connector,
            source,
            write: OnceCell::new(),
            read: OnceCell::new(),
        }
    }

    fn slot(&self, mode: AccessMode) -> &OnceCell<Arc<C::Handle>> {
        match mode {
            AccessMode::Read => &self.read,
            AccessMode::Write => &self.write,
        }
    }

    /// Returns the handle for `mode`, connecting on first use
    ///
    /// Concurrent first calls for the same mode share a single construction.
    /// Every caller receives a clone of the same `Arc`.
    pub async fn get_connection(&self, mode: AccessMode) -> Result<Arc<C::Handle>, StorageError> {
        let slot = self.slot(mode);

        if let Some(handle) = slot.get() {
            debug!(%mode, "Reusing cached connection");
            return Ok(Arc::clone(handle));
        }

        let handle = slot
            .get_or_try_init(|| async {
                let config = self.source.resolve()?;
                let params = ConnectParams::for_mode(&config, mode);
                info!(%mode, uri = %params.uri, "Opening graph connection");
                let handle = self.connector.connect(params).await?;
                Ok::<_, StorageError>(Arc::new(handle))
            })
            .await?;

        Ok(Arc::clone(handle))
    }

    /// Same as [`get_connection`](Self::get_connection) for an external mode label
    ///
    /// `"read"` selects the replica, `"write"` or an empty label the primary.
    /// Unknown labels are rejected before anything is constructed.
    pub async fn get_connection_for(&self, label: &str) -> Result<Arc<C::Handle>, StorageError> {
        let mode = AccessMode::from_label(label)?;
        self.get_connection(mode).await
    }

    /// Whether the slot for `mode` already holds a handle
    pub fn is_initialized(&self, mode: AccessMode) -> bool {
        self.slot(mode).initialized()
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neo4j::mock::MockConnector;
    use std::collections::HashMap;
    use std::time::Duration;

    fn test_config() -> ConnectionConfig {
        let vars: HashMap<String, String> = [
            ("NEO4J_HOST", "primary.test"),
            ("NEO4J_REPLICA_HOST", "replica.test"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        ConnectionConfig::from_source(&vars).unwrap()
    }

    #[tokio::test]
    async fn test_same_mode_returns_same_handle() {
        let provider = ConnectionProvider::new(MockConnector::new(), test_config());

        let first = provider.get_connection(AccessMode::Write).await.unwrap();
        let second = provider.get_connection(AccessMode::Write).await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(provider.connector().connect_count(), 1);
    }

    #[tokio::test]
    async fn test_modes_use_independent_slots() {
        let provider = ConnectionProvider::new(MockConnector::new(), test_config());

        let write = provider.get_connection(AccessMode::Write).await.unwrap();
        assert!(provider.is_initialized(AccessMode::Write));
        assert!(!provider.is_initialized(AccessMode::Read));
        assert_eq!(provider.connector().connect_count_for(AccessMode::Read), 0);

        let read = provider.get_connection(AccessMode::Read).await.unwrap();
        assert!(!Arc::ptr_eq(&write, &read));
        assert_eq!(write.uri, "bolt://primary.test:7687");
        assert_eq!(read.uri, "bolt://replica.test:7687");

        // Filling the read slot left the write handle alone
        let write_again = provider.get_connection(AccessMode::Write).await.unwrap();
        assert!(Arc::ptr_eq(&write, &write_again));
        assert_eq!(provider.connector().connect_count(), 2);
    }

    #[tokio::test]
    async fn test_failed_construction_leaves_slot_empty() {
        let provider = ConnectionProvider::new(MockConnector::new(), test_config());
        provider.connector().fail_next();

        let err = provider.get_connection(AccessMode::Read).await.unwrap_err();
        assert!(matches!(err, StorageError::ConnectionFailed(_)));
        assert!(!provider.is_initialized(AccessMode::Read));

        let handle = provider.get_connection(AccessMode::Read).await.unwrap();
        assert_eq!(handle.serial, 1);
        assert_eq!(provider.connector().connect_count_for(AccessMode::Read), 2);
    }

    #[tokio::test]
    async fn test_label_dispatch() {
        let provider = ConnectionProvider::new(MockConnector::new(), test_config());

        let read = provider.get_connection_for("read").await.unwrap();
        let write = provider.get_connection_for("write").await.unwrap();
        let default = provider.get_connection_for("").await.unwrap();

        assert_eq!(read.mode, AccessMode::Read);
        assert!(Arc::ptr_eq(&write, &default));
    }

    #[tokio::test]
    async fn test_unknown_label_constructs_nothing() {
        let provider = ConnectionProvider::new(MockConnector::new(), test_config());

        for label in ["primary", " read ", "read\n"] {
            let err = provider.get_connection_for(label).await.unwrap_err();
            assert!(matches!(
                err,
                StorageError::Config(graphconn_core::Error::InvalidInput(_))
            ));
        }
        assert_eq!(provider.connector().connect_count(), 0);
        assert!(!provider.is_initialized(AccessMode::Read));
    }

    #[tokio::test]
    async fn test_concurrent_first_calls_construct_once() {
        let provider = Arc::new(ConnectionProvider::new(
            MockConnector::with_delay(Duration::from_millis(20)),
            test_config(),
        ));

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let provider = Arc::clone(&provider);
                tokio::spawn(async move { provider.get_connection(AccessMode::Write).await })
            })
            .collect();

        let mut handles = Vec::new();
        for task in tasks {
            handles.push(task.await.unwrap().unwrap());
        }

        assert_eq!(provider.connector().connect_count(), 1);
        assert!(handles.iter().all(|h| Arc::ptr_eq(h, &handles[0])));
    }

    #[tokio::test]
    async fn test_handle_carries_credentials_and_options() {
        let vars: HashMap<String, String> = [
            ("NEO4J_USER", "reader"),
            ("NEO4J_DATABASE", "movies"),
            ("NEO4J_MAX_CONNECTION_POOLSIZE", "50"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let config = ConnectionConfig::from_source(&vars).unwrap();
        let provider = ConnectionProvider::new(MockConnector::new(), config);

        let handle = provider.get_connection(AccessMode::Read).await.unwrap();
        assert_eq!(handle.user, "reader");
        assert_eq!(handle.database, "movies");
        assert_eq!(
            handle
                .options
                .get_by_key("maxConnectionPoolSize")
                .and_then(|v| v.as_str()),
            Some("50")
        );
    }
}
