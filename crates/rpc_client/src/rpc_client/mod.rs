//! The generic call path shared by every command.

mod builder;
mod client;
mod hooks;

pub use builder::RpcClientBuilder;
pub use hooks::{RpcClientHooks, RpcRequestOutcome};

use crate::transport::Transport;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use std::time::Duration;

/// Client for a MultiChain daemon's JSON-RPC endpoint.
///
/// Cheap to share behind an `Arc`; calls are independent and may run
/// concurrently.
pub struct RpcClient {
    transport: Arc<dyn Transport>,
    chain_name: Option<String>,
    next_id: AtomicU64,
    request_timeout: Option<Duration>,
    hooks: RpcClientHooks,
}
