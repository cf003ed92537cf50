//! # multichain-rs: MultiChain daemon JSON-RPC client
//!
//! Typed access to the JSON-RPC interface of a MultiChain node.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use multichain_rs::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConnectionConfig::new("127.0.0.1", 8570, "multichainrpc", "secret")
//!         .with_chain_name("chain1");
//!     let client = Arc::new(RpcClient::new(&config)?);
//!
//!     let info = WalletApi::new(client.clone()).get_wallet_info().await?;
//!     println!("balance: {}", info.balance);
//!
//!     let height = BlockchainApi::new(client).get_block_count().await?;
//!     println!("height: {height}");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`config`] - connection settings loaded from TOML, environment or flags
//! - [`rpc_client`] - transport, command dispatch, validation, formatting and
//!   the per-area command APIs

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use multichain_config as config;
pub use multichain_rpc_client as rpc_client;

/// Common imports for MultiChain clients
pub mod prelude {
    pub use crate::config::{ConfigError, ConnectionConfig};
    pub use crate::rpc_client::{
        AssetApi, BlockchainApi, Command, ControlApi, MiningApi, NetworkApi, PermissionApi,
        RawTransactionApi, RpcClient, RpcError, RpcResult, WalletApi,
    };
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn prelude_builds_a_client() {
        let config = ConnectionConfig::new("127.0.0.1", 8570, "multichainrpc", "secret");
        let client = RpcClient::new(&config).unwrap();
        assert!(client.chain_name().is_none());
        assert_eq!(Command::GetInfo.as_str(), "getinfo");
    }
}
