//! Wire envelopes, result records and caller-built arguments.

mod asset;
mod block;
mod inputs;
mod network;
mod node_info;
mod permission;
mod rpc_request;
mod rpc_response;
mod transaction;
mod wallet;

pub use asset::{AssetInfo, BalanceAsset};
pub use block::{Block, BlockchainInfo, MempoolInfo};
pub use inputs::{
    AddressBalance, IssueParams, Permission, PrevTxOut, RawAction, SigHashType, TxIdVout,
};
pub use network::{LocalAddress, NetTotals, NetworkInfo, PeerInfo};
pub use node_info::{MiningInfo, NodeInfo};
pub use permission::PermissionEntry;
pub use rpc_request::RpcRequest;
pub use rpc_response::{RpcResponse, RpcResponseError};
pub use transaction::{
    RawTransaction, ScriptPubKey, ScriptSig, SignedTransaction, TxIn, TxOut, TxOutInfo,
};
pub use wallet::{
    AddressValidation, UnspentOutput, WalletAddress, WalletBalance, WalletInfo,
    WalletTransaction,
};
