//! MultiChain Connection Configuration
//!
//! Connection settings for talking to a MultiChain daemon over JSON-RPC:
//! endpoint, basic-auth credentials, the optional chain name and the
//! transport timeout. Settings can be built in code, read from TOML and
//! overridden from the environment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Default daemon host.
pub const DEFAULT_RPC_HOST: &str = "127.0.0.1";

/// Default JSON-RPC port. Every chain picks its own `default-rpc-port` in
/// `params.dat`; this value only applies when nothing else is configured.
pub const DEFAULT_RPC_PORT: u16 = 8570;

/// Environment variables consulted by [`ConnectionConfig::apply_env_overrides`].
pub const ENV_RPC_HOST: &str = "MULTICHAIN_RPC_HOST";
pub const ENV_RPC_PORT: &str = "MULTICHAIN_RPC_PORT";
pub const ENV_RPC_USER: &str = "MULTICHAIN_RPC_USER";
pub const ENV_RPC_PASSWORD: &str = "MULTICHAIN_RPC_PASSWORD";
pub const ENV_CHAIN_NAME: &str = "MULTICHAIN_CHAIN_NAME";

/// Errors raised while loading or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML document could not be parsed.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Host/port do not form a valid URL.
    #[error("Invalid endpoint: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A field holds an unusable value.
    #[error("Invalid value for '{field}': {reason}")]
    Invalid {
        /// Offending field.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

impl ConfigError {
    fn invalid<S: Into<String>>(field: &'static str, reason: S) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Connection settings for one MultiChain daemon.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Daemon host name or IP address.
    pub host: String,
    /// Daemon JSON-RPC port.
    pub port: u16,
    /// `rpcuser` from the chain's `multichain.conf`.
    pub rpc_user: String,
    /// `rpcpassword` from the chain's `multichain.conf`.
    pub rpc_password: String,
    /// Chain name sent with every call, for endpoints serving several chains.
    pub chain_name: Option<String>,
    /// Use `https` instead of `http`.
    pub use_tls: bool,
    /// Per-request timeout. `None` keeps the HTTP client's default.
    pub timeout_secs: Option<u64>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
            rpc_user: String::new(),
            rpc_password: String::new(),
            chain_name: None,
            use_tls: false,
            timeout_secs: None,
        }
    }
}

// The password never shows up in logs.
impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("rpc_user", &self.rpc_user)
            .field("rpc_password", &"<redacted>")
            .field("chain_name", &self.chain_name)
            .field("use_tls", &self.use_tls)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ConnectionConfig {
    /// Creates a configuration for the given endpoint and credentials.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        rpc_user: impl Into<String>,
        rpc_password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            rpc_user: rpc_user.into(),
            rpc_password: rpc_password.into(),
            ..Self::default()
        }
    }

    /// Sets the chain name sent in each request envelope.
    #[must_use]
    pub fn with_chain_name(mut self, chain_name: impl Into<String>) -> Self {
        self.chain_name = Some(chain_name.into());
        self
    }

    /// Sets the per-request timeout in seconds.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Request timeout as a [`Duration`], if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Whether basic-auth credentials are configured.
    pub fn has_credentials(&self) -> bool {
        !self.rpc_user.is_empty()
    }

    /// Checks that the settings can produce a usable endpoint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::invalid("host", "host is empty"));
        }
        if self.port == 0 {
            return Err(ConfigError::invalid("port", "port must be non-zero"));
        }
        if self.rpc_user.is_empty() && !self.rpc_password.is_empty() {
            return Err(ConfigError::invalid(
                "rpc_user",
                "a password is set without a user",
            ));
        }
        if let Some(chain) = &self.chain_name {
            if chain.trim().is_empty() {
                return Err(ConfigError::invalid("chain_name", "chain name is empty"));
            }
        }
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::invalid(
                "timeout_secs",
                "timeout must be at least one second",
            ));
        }
        Ok(())
    }

    /// Builds the daemon endpoint URL (`http://host:port/`).
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        self.validate()?;
        let scheme = if self.use_tls { "https" } else { "http" };
        let url = Url::parse(&format!("{scheme}://{}:{}/", self.host.trim(), self.port))?;
        Ok(url)
    }

    /// Parses a configuration from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ConnectionConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a TOML file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Saves the configuration as TOML.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Applies `MULTICHAIN_*` environment variables on top of the current values.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup. Keys are the `ENV_*` names.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_RPC_HOST) {
            self.host = host;
        }
        if let Some(port) = lookup(ENV_RPC_PORT) {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid("port", format!("not a port number: {port}")))?;
        }
        if let Some(user) = lookup(ENV_RPC_USER) {
            self.rpc_user = user;
        }
        if let Some(password) = lookup(ENV_RPC_PASSWORD) {
            self.rpc_password = password;
        }
        if let Some(chain) = lookup(ENV_CHAIN_NAME) {
            self.chain_name = if chain.is_empty() { None } else { Some(chain) };
        }
        Ok(())
    }
}
