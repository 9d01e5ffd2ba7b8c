//! Driver tuning options assembled from explicitly set variables
//!
//! Only variables that are actually present end up in [`DriverOptions`]; there
//! are no placeholder entries for absent keys. Values are passed through as raw
//! strings except for the two documented conversions, leaving numeric coercion
//! to the driver adapter.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Recognized driver option keys
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::AsRefStr,
    strum_macros::IntoStaticStr,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
pub enum DriverOption {
    #[serde(rename = "encrypted")]
    #[strum(serialize = "encrypted")]
    Encrypted,
    #[serde(rename = "trust")]
    #[strum(serialize = "trust")]
    Trust,
    #[serde(rename = "trustedCertificates")]
    #[strum(serialize = "trustedCertificates")]
    TrustedCertificates,
    #[serde(rename = "knownHosts")]
    #[strum(serialize = "knownHosts")]
    KnownHosts,
    #[serde(rename = "maxConnectionPoolSize")]
    #[strum(serialize = "maxConnectionPoolSize")]
    MaxConnectionPoolSize,
    #[serde(rename = "maxTransactionRetryTime")]
    #[strum(serialize = "maxTransactionRetryTime")]
    MaxTransactionRetryTime,
    #[serde(rename = "loadBalancingStrategy")]
    #[strum(serialize = "loadBalancingStrategy")]
    LoadBalancingStrategy,
    #[serde(rename = "maxConnectionLifetime")]
    #[strum(serialize = "maxConnectionLifetime")]
    MaxConnectionLifetime,
    #[serde(rename = "connectionTimeout")]
    #[strum(serialize = "connectionTimeout")]
    ConnectionTimeout,
    #[serde(rename = "disableLosslessIntegers")]
    #[strum(serialize = "disableLosslessIntegers")]
    DisableLosslessIntegers,
    #[serde(rename = "logging")]
    #[strum(serialize = "logging")]
    Logging,
}

impl DriverOption {
    /// Name of the environment variable that carries this option
    pub fn env_var(self) -> &'static str {
        match self {
            Self::Encrypted => "NEO4J_ENCRYPTION",
            Self::Trust => "NEO4J_TRUST",
            Self::TrustedCertificates => "NEO4J_TRUSTED_CERTIFICATES",
            Self::KnownHosts => "NEO4J_KNOWN_HOSTS",
            Self::MaxConnectionPoolSize => "NEO4J_MAX_CONNECTION_POOLSIZE",
            Self::MaxTransactionRetryTime => "NEO4J_MAX_TRANSACTION_RETRY_TIME",
            Self::LoadBalancingStrategy => "NEO4J_LOAD_BALANCING_STRATEGY",
            Self::MaxConnectionLifetime => "NEO4J_MAX_CONNECTION_LIFETIME",
            Self::ConnectionTimeout => "NEO4J_CONNECTION_TIMEOUT",
            Self::DisableLosslessIntegers => "NEO4J_DISABLE_LOSSLESS_INTEGERS",
            Self::Logging => "NEO4J_LOGGING_LEVEL",
        }
    }

    /// Key used by the driver for this option
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Applies the per-key conversion to a raw variable value
    pub fn parse_value(self, raw: &str) -> OptionValue {
        match self {
            Self::TrustedCertificates => {
                OptionValue::List(raw.split(',').map(str::to_string).collect())
            }
            Self::DisableLosslessIntegers => OptionValue::Flag(raw == "true"),
            _ => OptionValue::Text(raw.to_string()),
        }
    }
}

/// A single option value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Text(String),
    List(Vec<String>),
    Flag(bool),
}

impl OptionValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

/// Sparse option mapping, ordered by key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverOptions {
    entries: BTreeMap<DriverOption, OptionValue>,
}

impl DriverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returning the previous one for the key
    pub fn insert(&mut self, option: DriverOption, value: OptionValue) -> Option<OptionValue> {
        self.entries.insert(option, value)
    }

    pub fn get(&self, option: DriverOption) -> Option<&OptionValue> {
        self.entries.get(&option)
    }

    /// Looks up a value by its driver key name, e.g. `"maxConnectionPoolSize"`
    pub fn get_by_key(&self, key: &str) -> Option<&OptionValue> {
        DriverOption::from_str(key)
            .ok()
            .and_then(|option| self.get(option))
    }

    pub fn contains(&self, option: DriverOption) -> bool {
        self.entries.contains_key(&option)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DriverOption, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }
}

impl FromIterator<(DriverOption, OptionValue)> for DriverOptions {
    fn from_iter<I: IntoIterator<Item = (DriverOption, OptionValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
