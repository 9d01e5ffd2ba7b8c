use graphconn_core::Error as CoreError;
use thiserror::Error;

/// Storage-specific error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// The driver could not open a connection; the driver error is kept as the source
    #[error("Failed to connect to Neo4j at {uri}: {source}")]
    Connection {
        uri: String,
        #[source]
        source: neo4rs::Error,
    },

    #[error("Invalid value '{value}' for driver option {key}: {reason}")]
    InvalidOption {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error(transparent)]
    Config(#[from] CoreError),
}
