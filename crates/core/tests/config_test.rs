//! Process environment integration for connection configuration
//!
//! Everything that mutates the real environment lives in a single test so the
//! steps cannot race each other.

use graphconn_core::{ConnectionConfig, DriverOption, OptionValue};
use pretty_assertions::assert_eq;
use std::io::Write;

const TOUCHED: &[&str] = &[
    "NEO4J_HOST",
    "NEO4J_REPLICA_HOST",
    "NEO4J_PORT",
    "NEO4J_ENTERPRISE",
    "NEO4J_TRUSTED_CERTIFICATES",
    "NEO4J_LOGGING_LEVEL",
];

fn clear_env() {
    for name in TOUCHED {
        std::env::remove_var(name);
    }
}

#[test]
fn test_from_env_reads_process_environment() {
    clear_env();

    std::env::set_var("NEO4J_HOST", "primary.test");
    std::env::set_var("NEO4J_REPLICA_HOST", "replica.test");
    std::env::set_var("NEO4J_ENTERPRISE", "true");
    std::env::set_var("NEO4J_TRUSTED_CERTIFICATES", "/a.pem,/b.pem");

    let config = ConnectionConfig::from_env().expect("config from env");
    assert_eq!(config.uri, "bolt://primary.test:7687");
    assert_eq!(config.replica_uri, "bolt://replica.test:7687");
    assert!(config.enterprise);
    assert_eq!(
        config.options.get(DriverOption::TrustedCertificates),
        Some(&OptionValue::List(vec![
            "/a.pem".to_string(),
            "/b.pem".to_string()
        ]))
    );
    assert!(config.options.get(DriverOption::Logging).is_none());

    // Not cached: a later change is visible on the next call
    std::env::set_var("NEO4J_LOGGING_LEVEL", "info");
    let config = ConnectionConfig::from_env().expect("config from env");
    assert_eq!(
        config.options.get(DriverOption::Logging),
        Some(&OptionValue::Text("info".to_string()))
    );

    // Environment overrides the file, the file fills the rest
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    file.write_all(b"[neo4j]\nhost = \"file.test\"\nport = 7999\n")
        .expect("write temp file");
    file.flush().expect("flush temp file");

    let config = ConnectionConfig::load(Some(file.path())).expect("config from file");
    assert_eq!(config.uri, "bolt://primary.test:7999");
    assert_eq!(config.replica_uri, "bolt://replica.test:7999");

    clear_env();
}
