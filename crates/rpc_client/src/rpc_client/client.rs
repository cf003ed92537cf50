use super::builder::RpcClientBuilder;
use super::hooks::RpcRequestOutcome;
use super::{RpcClient, RpcClientHooks};
use crate::command::Command;
use crate::error::{RpcError, RpcResult};
use crate::models::RpcRequest;
use crate::params::Params;
use crate::transport::Transport;
use multichain_config::ConnectionConfig;
use reqwest::Url;
use serde_json::Value;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

impl RpcClient {
    /// Creates a configurable builder for the RPC client.
    #[must_use]
    pub fn builder(url: Url) -> RpcClientBuilder {
        RpcClientBuilder::new(url)
    }

    /// Creates an HTTP client from connection settings.
    pub fn new(config: &ConnectionConfig) -> RpcResult<Self> {
        RpcClientBuilder::from_config(config)?.build()
    }

    /// Creates a client over any transport.
    pub fn with_transport(transport: Arc<dyn Transport>, chain_name: Option<String>) -> Self {
        Self::with_transport_config(transport, chain_name, RpcClientHooks::default(), None)
    }

    /// Creates a client over any transport with hook/timeout configuration.
    pub fn with_transport_config(
        transport: Arc<dyn Transport>,
        chain_name: Option<String>,
        hooks: RpcClientHooks,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            transport,
            chain_name,
            next_id: AtomicU64::new(1),
            request_timeout: timeout,
            hooks,
        }
    }

    /// Chain name sent with every envelope, if any.
    pub fn chain_name(&self) -> Option<&str> {
        self.chain_name.as_deref()
    }

    fn as_rpc_request(&self, command: Command, params: Vec<Value>) -> RpcRequest {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        RpcRequest::new(id, command.as_str(), params).with_chain_name(self.chain_name.clone())
    }

    /// Runs `command` with positional `params` and returns the raw result.
    ///
    /// The argument list is checked against the command's table entry first;
    /// a rejected list never reaches the transport. A daemon-reported error
    /// becomes [`RpcError::Daemon`] and the result field is not read.
    pub async fn execute(&self, command: Command, params: Vec<Value>) -> RpcResult<Value> {
        command.spec().check(command, &params)?;

        let request = self.as_rpc_request(command, params);
        trace!(
            target: "multichain::rpc",
            method = command.as_str(),
            id = request.id,
            params = request.params.len(),
            "dispatching request"
        );

        let start = Instant::now();
        let result = match self.transport.send(&request).await {
            Ok(response) => response.into_result(),
            Err(err) => Err(RpcError::from(err)),
        };
        let elapsed = start.elapsed();

        debug!(
            target: "multichain::rpc",
            method = command.as_str(),
            id = request.id,
            elapsed_ms = elapsed.as_millis() as u64,
            success = result.is_ok(),
            "request completed"
        );

        if !self.hooks.is_empty() {
            self.hooks.notify(RpcRequestOutcome {
                method: command.as_str(),
                elapsed,
                success: result.is_ok(),
                timeout: self.request_timeout,
                error_code: result.as_ref().err().and_then(RpcError::daemon_code),
            });
        }

        result
    }

    /// [`execute`](Self::execute) with a [`Params`] builder.
    pub async fn execute_params(&self, command: Command, params: Params) -> RpcResult<Value> {
        self.execute(command, params.into_vec()).await
    }

    /// Runs a command given by wire name.
    pub async fn execute_named(&self, method: &str, params: Vec<Value>) -> RpcResult<Value> {
        let command: Command = method.parse()?;
        self.execute(command, params).await
    }
}

impl fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcClient")
            .field("chain_name", &self.chain_name)
            .field("request_timeout", &self.request_timeout)
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::models::RpcResponse;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        requests: Mutex<Vec<RpcRequest>>,
    }

    #[async_trait]
    impl Transport for Recorder {
        async fn send(&self, request: &RpcRequest) -> Result<RpcResponse, TransportError> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(RpcResponse::success(request.id, Value::Null))
        }
    }

    #[tokio::test]
    async fn ids_increase_and_chain_name_is_attached() {
        let recorder = Arc::new(Recorder::default());
        let client = RpcClient::with_transport(recorder.clone(), Some("chain1".into()));

        client.execute(Command::GetInfo, vec![]).await.unwrap();
        client.execute(Command::GetInfo, vec![]).await.unwrap();

        let requests = recorder.requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].id < requests[1].id);
        assert_eq!(requests[0].chain_name.as_deref(), Some("chain1"));
        assert_eq!(requests[0].method, "getinfo");
    }

    #[tokio::test]
    async fn hooks_see_daemon_error_code() {
        struct Failing;

        #[async_trait]
        impl Transport for Failing {
            async fn send(&self, request: &RpcRequest) -> Result<RpcResponse, TransportError> {
                Ok(RpcResponse::failure(request.id, -708, "Wallet locked"))
            }
        }

        let seen = Arc::new(AtomicUsize::new(0));
        let observed = seen.clone();
        let hooks = RpcClientHooks::new().on_request(move |outcome| {
            assert!(!outcome.success);
            assert_eq!(outcome.error_code, Some(-708));
            observed.fetch_add(1, Ordering::SeqCst);
        });
        let client = RpcClient::with_transport_config(Arc::new(Failing), None, hooks, None);

        let err = client.execute(Command::WalletLock, vec![]).await.unwrap_err();
        assert_eq!(err.daemon_code(), Some(-708));
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unknown_method_name_is_rejected_locally() {
        let recorder = Arc::new(Recorder::default());
        let client = RpcClient::with_transport(recorder.clone(), None);

        let err = client.execute_named("nosuch", vec![json!(1)]).await.unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(recorder.requests.lock().unwrap().is_empty());
    }
}
