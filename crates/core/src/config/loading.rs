//! Configuration loading from the environment and config files

use crate::error::{Error, Result, ResultExt};
use crate::options::{DriverOption, DriverOptions};
use config::{Config as ConfigLib, ConfigError, File, FileFormat};
use std::collections::HashMap;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::debug;

use super::defaults::*;
use super::source::{Layered, ProcessEnv, VariableSource};
use super::{global_config_path, ConnectionConfig};

/// Reads `name` from `source`, falling back to `default` when unset
fn var_or<S: VariableSource + ?Sized>(source: &S, name: &str, default: &str) -> Result<String> {
    Ok(source.var(name)?.unwrap_or_else(|| default.to_string()))
}

impl ConnectionConfig {
    /// Derives configuration from the process environment
    ///
    /// Nothing is cached; each call reads the environment again.
    pub fn from_env() -> Result<Self> {
        Self::from_source(&ProcessEnv)
    }

    /// Derives configuration from an arbitrary variable source
    ///
    /// Host, port, user, password and database fall back to their defaults.
    /// The enterprise flag is set only by the exact string `"true"`. Driver
    /// options are copied for the recognized variables that are present and
    /// omitted otherwise.
    pub fn from_source<S: VariableSource + ?Sized>(source: &S) -> Result<Self> {
        let protocol = var_or(source, ENV_PROTOCOL, DEFAULT_PROTOCOL)?;
        let host = var_or(source, ENV_HOST, DEFAULT_HOST)?;
        let replica_host = var_or(source, ENV_REPLICA_HOST, DEFAULT_REPLICA_HOST)?;
        let port = var_or(source, ENV_PORT, DEFAULT_PORT)?;
        let user = var_or(source, ENV_USER, DEFAULT_USER)?;
        let password = var_or(source, ENV_PASSWORD, DEFAULT_PASSWORD)?;
        let database = var_or(source, ENV_DATABASE, DEFAULT_DATABASE)?;
        let enterprise = source.var(ENV_ENTERPRISE)?.as_deref() == Some("true");

        let mut options = DriverOptions::new();
        for option in DriverOption::iter() {
            if let Some(raw) = source.var(option.env_var())? {
                options.insert(option, option.parse_value(&raw));
            }
        }

        let config = Self {
            uri: format!("{protocol}://{host}:{port}"),
            replica_uri: format!("{protocol}://{replica_host}:{port}"),
            user,
            password,
            database,
            enterprise,
            options,
        };

        debug!(
            uri = %config.uri,
            replica_uri = %config.replica_uri,
            database = %config.database,
            options = config.options.len(),
            "Resolved connection configuration"
        );

        Ok(config)
    }

    /// Loads configuration from a TOML file with environment variable overrides
    ///
    /// The file's `[neo4j]` table uses the variable names without the `NEO4J_`
    /// prefix, in lower case:
    ///
    /// ```toml
    /// [neo4j]
    /// host = "graph.internal"
    /// port = 7687
    /// max_connection_poolsize = 50
    /// ```
    ///
    /// Any variable set in the process environment overrides the file. A
    /// missing file is treated as empty.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file_vars = read_file_variables(path)?;
        Self::from_source(&Layered::new(ProcessEnv, file_vars))
    }

    /// Load configuration from a single file
    ///
    /// Precedence (lowest to highest):
    /// 1. Hardcoded defaults
    /// 2. Config file (~/.graphconn/config.toml or a custom path)
    /// 3. Environment variables (NEO4J_*)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => global_config_path()?,
        };
        Self::from_file(&path)
    }
}

/// Reads the `[neo4j]` table of a config file as `NEO4J_*` variables
pub(crate) fn read_file_variables(path: &Path) -> Result<HashMap<String, String>> {
    let mut builder = ConfigLib::builder();

    if path.exists() {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml));
    }

    let settings = builder
        .build()
        .context(format!("Failed to load config file {}", path.display()))?;

    let table = match settings.get_table(FILE_TABLE) {
        Ok(table) => table,
        Err(ConfigError::NotFound(_)) => return Ok(HashMap::new()),
        Err(e) => {
            return Err(Error::with_context(
                format!("Failed to read [{FILE_TABLE}] table"),
                e,
            ))
        }
    };

    table
        .into_iter()
        .map(|(key, value)| {
            let name = format!("{ENV_PREFIX}{}", key.to_uppercase());
            let value = value
                .into_string()
                .map_err(|e| Error::config(format!("Invalid value for {FILE_TABLE}.{key}: {e}")))?;
            Ok((name, value))
        })
        .collect()
}
