//! Default values and variable names for connection configuration

pub(crate) const DEFAULT_PROTOCOL: &str = "bolt";
pub(crate) const DEFAULT_HOST: &str = "localhost";
pub(crate) const DEFAULT_REPLICA_HOST: &str = "localhost";
pub(crate) const DEFAULT_PORT: &str = "7687";
pub(crate) const DEFAULT_USER: &str = "neo4j";
pub(crate) const DEFAULT_PASSWORD: &str = "leeto";
pub(crate) const DEFAULT_DATABASE: &str = "neo4j";

/// Prefix shared by every recognized variable
pub const ENV_PREFIX: &str = "NEO4J_";

pub const ENV_PROTOCOL: &str = "NEO4J_PROTOCOL";
pub const ENV_HOST: &str = "NEO4J_HOST";
pub const ENV_REPLICA_HOST: &str = "NEO4J_REPLICA_HOST";
pub const ENV_PORT: &str = "NEO4J_PORT";
pub const ENV_USER: &str = "NEO4J_USER";
pub const ENV_PASSWORD: &str = "NEO4J_PASSWORD";
pub const ENV_ENTERPRISE: &str = "NEO4J_ENTERPRISE";
pub const ENV_DATABASE: &str = "NEO4J_DATABASE";

/// Table in the config file that holds connection settings
pub(crate) const FILE_TABLE: &str = "neo4j";
