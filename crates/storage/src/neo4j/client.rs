use async_trait::async_trait;
use graphconn_core::{DriverOption, OptionValue};
use neo4rs::{ConfigBuilder, Graph};
use tracing::{debug, info, warn};

use super::traits::{ConnectParams, GraphConnector};
use crate::error::StorageError;

/// Connector backed by the `neo4rs` driver
#[derive(Debug, Clone, Copy, Default)]
pub struct Neo4jConnector;

impl Neo4jConnector {
    pub fn new() -> Self {
        Self
    }

    /// Translate connection parameters into a driver configuration
    ///
    /// Only options the driver can express are applied. The pool size is the
    /// one numeric option coerced here; a value that does not parse is an
    /// error rather than being silently dropped.
    pub fn driver_config(params: &ConnectParams<'_>) -> Result<neo4rs::Config, StorageError> {
        let mut builder = ConfigBuilder::default()
            .uri(params.uri)
            .user(params.user)
            .password(params.password)
            .db(params.database);

        for (option, value) in params.options.iter() {
            match (option, value) {
                (DriverOption::MaxConnectionPoolSize, OptionValue::Text(raw)) => {
                    let max = raw.trim().parse::<usize>().map_err(|e| {
                        StorageError::InvalidOption {
                            key: option.key().to_string(),
                            value: raw.clone(),
                            reason: e.to_string(),
                        }
                    })?;
                    builder = builder.max_connections(max);
                }
                (DriverOption::TrustedCertificates, OptionValue::List(paths)) => {
                    if let Some((first, rest)) = paths.split_first() {
                        builder = builder.with_client_certificate(first);
                        if !rest.is_empty() {
                            warn!(
                                used = %first,
                                ignored = rest.len(),
                                "neo4rs accepts a single trusted certificate; ignoring the rest"
                            );
                        }
                    }
                }
                _ => {
                    debug!(option = %option, "Driver option not supported by neo4rs, ignoring");
                }
            }
        }

        builder.build().map_err(|source| StorageError::Connection {
            uri: params.uri.to_string(),
            source,
        })
    }
}

#[async_trait]
impl GraphConnector for Neo4jConnector {
    type Handle = Graph;

    async fn connect(&self, params: ConnectParams<'_>) -> Result<Graph, StorageError> {
        let config = Self::driver_config(&params)?;

        info!(mode = %params.mode, "Connecting to Neo4j at {}", params.uri);

        Graph::connect(config)
            .await
            .map_err(|source| StorageError::Connection {
                uri: params.uri.to_string(),
                source,
            })
    }
}
