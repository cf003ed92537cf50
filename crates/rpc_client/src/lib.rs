//! MultiChain RPC Client Library
//!
//! Typed access to a MultiChain daemon's JSON-RPC interface. Every call goes
//! through [`RpcClient::execute`], which checks the argument list against the
//! command table, sends one JSON-RPC envelope and maps a daemon-reported
//! error to [`RpcError::Daemon`]. The per-area APIs ([`WalletApi`],
//! [`RawTransactionApi`], ...) add typed arguments and typed results on top.

pub mod command;
pub mod error;
pub mod formatter;
pub mod models;
pub mod params;
mod rpc_client;
pub mod transport;
pub mod validation;

mod asset_api;
mod blockchain_api;
mod control_api;
mod mining_api;
mod network_api;
mod permission_api;
mod raw_transaction_api;
mod wallet_api;

pub use command::{Command, CommandArea, CommandSpec};
pub use error::{RpcError, RpcResult, TransportError};
pub use params::Params;
pub use rpc_client::{RpcClient, RpcClientBuilder, RpcClientHooks, RpcRequestOutcome};
pub use transport::{HttpTransport, Transport};

pub use asset_api::AssetApi;
pub use blockchain_api::{BlockRef, BlockchainApi};
pub use control_api::{ControlApi, NodeTask};
pub use mining_api::MiningApi;
pub use network_api::{AddNodeCommand, NetworkApi};
pub use permission_api::PermissionApi;
pub use raw_transaction_api::{RawOutcome, RawTransactionApi};
pub use wallet_api::WalletApi;

// Re-export commonly used types
pub use models::{RpcRequest, RpcResponse, RpcResponseError};
pub use multichain_config::ConnectionConfig;
