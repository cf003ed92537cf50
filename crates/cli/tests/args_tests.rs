//! CLI argument parsing tests.

use clap::Parser;
use multichain_cli::args::{parse_arg, CliArgs};
use multichain_cli::{command_listing, render_result};
use multichain_config::ConnectionConfig;
use serde_json::{json, Value};
use std::path::PathBuf;

#[test]
fn command_and_args_are_collected() {
    let args = CliArgs::try_parse_from([
        "multichain-cli",
        "--rpc-port",
        "9000",
        "getaddressbalances",
        "1AbC",
        "0",
    ])
    .unwrap();
    assert_eq!(args.port, Some(9000));
    assert_eq!(args.command.as_deref(), Some("getaddressbalances"));
    assert_eq!(args.params(), vec![json!("1AbC"), json!(0)]);
}

#[test]
fn command_is_required_unless_listing() {
    assert!(CliArgs::try_parse_from(["multichain-cli"]).is_err());
    let args = CliArgs::try_parse_from(["multichain-cli", "--list-commands"]).unwrap();
    assert!(args.list_commands);
    assert!(args.command.is_none());
}

#[test]
fn hyphenated_values_pass_through() {
    let args = CliArgs::try_parse_from(["multichain-cli", "getnetworkhashps", "-1"]).unwrap();
    assert_eq!(args.params(), vec![json!(-1)]);
}

#[test]
fn json_literals_and_strings() {
    assert_eq!(parse_arg("true"), json!(true));
    assert_eq!(parse_arg("[{\"txid\":\"ab\",\"vout\":0}]"), json!([{"txid": "ab", "vout": 0}]));
    assert_eq!(parse_arg("0100ff"), json!("0100ff"));
    assert_eq!(parse_arg("\"1234\""), json!("1234"));
    assert_eq!(parse_arg("1Xyz"), json!("1Xyz"));
}

#[test]
fn flags_override_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("multichain.toml");
    let mut file_config = ConnectionConfig::new("10.0.0.5", 4410, "multichainrpc", "secret");
    file_config.chain_name = Some("chain1".to_string());
    file_config.save_to_file(&path).unwrap();

    let args = CliArgs::try_parse_from([
        "multichain-cli".to_string(),
        "--config".to_string(),
        path.display().to_string(),
        "--rpc-port".to_string(),
        "4420".to_string(),
        "getinfo".to_string(),
    ])
    .unwrap();
    assert_eq!(args.config, Some(PathBuf::from(&path)));

    let config = args.connection_config().unwrap();
    assert_eq!(config.port, 4420);
    assert_eq!(config.rpc_user, "multichainrpc");
    assert_eq!(config.chain_name.as_deref(), Some("chain1"));
}

#[test]
fn missing_config_file_is_an_error() {
    let args =
        CliArgs::try_parse_from(["multichain-cli", "-c", "/nonexistent/multichain.toml", "getinfo"])
            .unwrap();
    assert!(args.connection_config().is_err());
}

#[test]
fn rendering() {
    assert_eq!(render_result(&Value::Null), None);
    assert_eq!(render_result(&json!("txid")).as_deref(), Some("txid"));
    assert_eq!(
        render_result(&json!({"a": 1})).as_deref(),
        Some("{\n  \"a\": 1\n}")
    );
}

#[test]
fn listing_covers_every_command() {
    let lines = command_listing();
    assert_eq!(lines.len(), multichain_rpc_client::Command::ALL.len());
    assert!(lines.iter().any(|line| line.starts_with("getwalletinfo")));
}
