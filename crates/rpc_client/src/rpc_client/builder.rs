use super::{RpcClient, RpcClientHooks};
use crate::error::RpcResult;
use crate::transport::HttpTransport;
use multichain_config::ConnectionConfig;
use reqwest::Url;
use std::sync::Arc;
use std::time::Duration;

/// Configures and builds an [`RpcClient`] over HTTP.
#[derive(Debug, Clone)]
pub struct RpcClientBuilder {
    url: Url,
    credentials: Option<(String, String)>,
    timeout: Option<Duration>,
    chain_name: Option<String>,
    hooks: RpcClientHooks,
}

impl RpcClientBuilder {
    /// Starts a builder for `url` with no credentials, timeout or chain name.
    pub fn new(url: Url) -> Self {
        Self {
            url,
            credentials: None,
            timeout: None,
            chain_name: None,
            hooks: RpcClientHooks::default(),
        }
    }

    /// Starts from connection settings.
    pub fn from_config(config: &ConnectionConfig) -> RpcResult<Self> {
        let mut builder = Self::new(config.endpoint_url()?);
        if config.has_credentials() {
            builder = builder.basic_auth(&config.rpc_user, &config.rpc_password);
        }
        builder.timeout = config.timeout();
        builder.chain_name = config.chain_name.clone();
        Ok(builder)
    }

    /// Sends HTTP basic-auth credentials with every request.
    #[must_use]
    pub fn basic_auth(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some((user.into(), password.into()));
        self
    }

    /// Sets credentials only when both parts are present.
    #[must_use]
    pub fn with_optional_auth(self, user: Option<String>, password: Option<String>) -> Self {
        match (user, password) {
            (Some(user), Some(password)) => self.basic_auth(user, password),
            _ => self,
        }
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the chain name carried in every envelope.
    #[must_use]
    pub fn chain_name(mut self, chain_name: impl Into<String>) -> Self {
        self.chain_name = Some(chain_name.into());
        self
    }

    /// Installs observers notified after each call.
    #[must_use]
    pub fn hooks(mut self, hooks: RpcClientHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Builds the client over an [`HttpTransport`].
    pub fn build(self) -> RpcResult<RpcClient> {
        let credentials = self
            .credentials
            .as_ref()
            .map(|(user, password)| (user.as_str(), password.as_str()));
        let transport = HttpTransport::new(self.url, credentials, self.timeout)?;
        Ok(RpcClient::with_transport_config(
            Arc::new(transport),
            self.chain_name,
            self.hooks,
            self.timeout,
        ))
    }
}
