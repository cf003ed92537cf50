//! Configuration file round trips.

use multichain_config::{ConfigError, ConnectionConfig, DEFAULT_RPC_PORT};
use std::time::Duration;

#[test]
fn save_then_load_preserves_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("multichain.toml");

    let config = ConnectionConfig::new("192.168.1.20", 6740, "multichainrpc", "pw")
        .with_chain_name("chain1")
        .with_timeout_secs(30);
    config.save_to_file(&path).unwrap();

    let loaded = ConnectionConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.timeout(), Some(Duration::from_secs(30)));
    assert_eq!(
        loaded.endpoint_url().unwrap().as_str(),
        "http://192.168.1.20:6740/"
    );
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ConnectionConfig::load_from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn malformed_toml_is_parse_error() {
    let err = ConnectionConfig::from_toml_str("port = \"not a number\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn loaded_config_is_validated() {
    let err = ConnectionConfig::from_toml_str("host = \"   \"").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "host", .. }));
}

#[test]
fn empty_document_yields_defaults() {
    let config = ConnectionConfig::from_toml_str("").unwrap();
    assert_eq!(config.port, DEFAULT_RPC_PORT);
    assert!(config.chain_name.is_none());
}
