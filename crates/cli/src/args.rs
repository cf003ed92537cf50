use clap::Parser;
use multichain_config::{ConfigError, ConnectionConfig};
use serde_json::Value;
use std::path::PathBuf;

/// Command-line arguments for the MultiChain CLI
#[derive(Parser, Debug, Clone)]
#[command(
    name = "multichain-cli",
    version = env!("CARGO_PKG_VERSION"),
    about = "Run MultiChain daemon JSON-RPC commands",
    long_about = "Sends one JSON-RPC command to a MultiChain daemon and prints the result. \
                  Arguments are parsed as JSON literals; anything that is not valid JSON is \
                  sent as a string."
)]
pub struct CliArgs {
    /// Connection settings file (TOML)
    #[arg(short = 'c', long = "config", env = "MULTICHAIN_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Daemon host
    #[arg(long = "rpc-host", value_name = "HOST")]
    pub host: Option<String>,

    /// Daemon RPC port
    #[arg(long = "rpc-port", value_name = "PORT")]
    pub port: Option<u16>,

    /// RPC user
    #[arg(short = 'u', long = "rpc-user", value_name = "USER")]
    pub user: Option<String>,

    /// RPC password
    #[arg(short = 'p', long = "rpc-password", value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Chain name sent with each request
    #[arg(long = "chain", value_name = "NAME")]
    pub chain_name: Option<String>,

    /// Request timeout
    #[arg(long = "timeout", value_name = "SECONDS")]
    pub timeout_secs: Option<u64>,

    /// Connect over HTTPS
    #[arg(long = "tls")]
    pub use_tls: bool,

    /// List every known command and exit
    #[arg(long = "list-commands")]
    pub list_commands: bool,

    /// Command to run, e.g. getinfo
    #[arg(value_name = "COMMAND", required_unless_present = "list_commands")]
    pub command: Option<String>,

    /// Positional command arguments
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl CliArgs {
    /// Resolves connection settings: file (or defaults), then environment,
    /// then flags.
    pub fn connection_config(&self) -> Result<ConnectionConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ConnectionConfig::load_from_file(path)?,
            None => ConnectionConfig::default(),
        };
        config.apply_env_overrides()?;
        self.apply_flags(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply_flags(&self, config: &mut ConnectionConfig) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(user) = &self.user {
            config.rpc_user = user.clone();
        }
        if let Some(password) = &self.password {
            config.rpc_password = password.clone();
        }
        if let Some(chain_name) = &self.chain_name {
            config.chain_name = Some(chain_name.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout_secs = Some(secs);
        }
        if self.use_tls {
            config.use_tls = true;
        }
    }

    /// Command arguments as JSON values.
    pub fn params(&self) -> Vec<Value> {
        self.args.iter().map(|raw| parse_arg(raw)).collect()
    }
}

/// Parses one argument as a JSON literal, falling back to a plain string.
/// Quote a value (`'"1234"'`) to force a string that would parse as JSON.
pub fn parse_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
