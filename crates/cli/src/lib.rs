//! MultiChain CLI Library
//!
//! Argument parsing and output rendering for the `multichain-cli` binary.

use multichain_rpc_client::{Command, CommandArea};
use serde_json::Value;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod args;

pub use args::CliArgs;

/// Renders a raw result for the terminal: strings bare, `null` as nothing,
/// everything else as pretty JSON.
pub fn render_result(result: &Value) -> Option<String> {
    match result {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string())),
    }
}

/// One line per known command, grouped by area.
pub fn command_listing() -> Vec<String> {
    let areas = [
        CommandArea::Control,
        CommandArea::Wallet,
        CommandArea::RawTransactions,
        CommandArea::Assets,
        CommandArea::Permissions,
        CommandArea::Blockchain,
        CommandArea::Network,
        CommandArea::Mining,
    ];
    let mut lines = Vec::with_capacity(Command::ALL.len());
    for area in areas {
        for command in Command::ALL.iter().filter(|c| c.area() == area) {
            let spec = command.spec();
            lines.push(format!(
                "{:<24} {:<16} args {}..={}",
                command.as_str(),
                format!("{area:?}"),
                spec.min_params,
                spec.max_params
            ));
        }
    }
    lines
}
