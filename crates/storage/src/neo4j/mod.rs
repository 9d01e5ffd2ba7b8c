//! Neo4j connectors

pub(crate) mod client;
pub mod mock;
pub(crate) mod traits;

pub use client::Neo4jConnector;
pub use traits::{ConnectParams, GraphConnector};
