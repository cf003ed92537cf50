use super::BalanceAsset;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of `getwalletinfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletInfo {
    #[serde(rename = "walletversion")]
    pub wallet_version: i64,

    /// Native currency balance
    pub balance: f64,

    #[serde(rename = "walletdbversion")]
    pub wallet_db_version: i64,

    #[serde(rename = "txcount")]
    pub tx_count: u64,

    #[serde(rename = "utxocount")]
    pub utxo_count: u64,

    /// Timestamp of the oldest pre-generated key
    #[serde(rename = "keypoololdest")]
    pub keypool_oldest: i64,

    #[serde(rename = "keypoolsize")]
    pub keypool_size: i64,

    /// Unlock expiry when the wallet is encrypted
    #[serde(rename = "unlocked_until", skip_serializing_if = "Option::is_none")]
    pub unlocked_until: Option<i64>,
}

/// Result of `validateaddress`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressValidation {
    #[serde(rename = "isvalid")]
    pub is_valid: bool,

    pub address: String,

    #[serde(rename = "ismine")]
    pub is_mine: bool,

    #[serde(rename = "iswatchonly")]
    pub is_watch_only: bool,

    #[serde(rename = "isscript")]
    pub is_script: bool,

    #[serde(rename = "pubkey", skip_serializing_if = "Option::is_none")]
    pub pub_key: Option<String>,

    #[serde(rename = "iscompressed")]
    pub is_compressed: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    pub synchronized: bool,
}

/// Wallet address as listed by `listaddresses`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletAddress {
    pub address: String,

    #[serde(rename = "ismine")]
    pub is_mine: bool,
}

/// One entry of `listunspent`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnspentOutput {
    pub txid: String,
    pub vout: u32,
    pub address: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    #[serde(rename = "scriptPubKey")]
    pub script_pub_key: String,

    /// Native currency amount
    pub amount: f64,

    pub confirmations: i64,

    #[serde(rename = "cansend")]
    pub can_send: bool,

    pub spendable: bool,

    pub assets: Vec<BalanceAsset>,

    pub permissions: Vec<Value>,
}

/// Net balance change of a wallet transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletBalance {
    pub amount: f64,
    pub assets: Vec<BalanceAsset>,
}

/// Result of `getwallettransaction` and entries of `listwallettransactions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletTransaction {
    pub balance: WalletBalance,

    #[serde(rename = "myaddresses")]
    pub my_addresses: Vec<String>,

    pub addresses: Vec<String>,

    pub permissions: Vec<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<Value>,

    pub data: Vec<Value>,

    pub confirmations: i64,

    #[serde(rename = "blockhash", skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,

    #[serde(rename = "blockindex", skip_serializing_if = "Option::is_none")]
    pub block_index: Option<u32>,

    #[serde(rename = "blocktime", skip_serializing_if = "Option::is_none")]
    pub block_time: Option<i64>,

    pub txid: String,

    pub valid: bool,

    pub time: i64,

    #[serde(rename = "timereceived")]
    pub time_received: i64,
}
