use serde::{Deserialize, Serialize};

/// Result of `getinfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeInfo {
    pub version: String,

    #[serde(rename = "nodeversion")]
    pub node_version: i64,

    #[serde(rename = "protocolversion")]
    pub protocol_version: i64,

    #[serde(rename = "chainname")]
    pub chain_name: String,

    pub description: String,

    pub protocol: String,

    pub port: u16,

    #[serde(rename = "setupblocks")]
    pub setup_blocks: u64,

    #[serde(rename = "nodeaddress")]
    pub node_address: String,

    #[serde(rename = "burnaddress")]
    pub burn_address: String,

    #[serde(rename = "incomingpaused")]
    pub incoming_paused: bool,

    #[serde(rename = "miningpaused")]
    pub mining_paused: bool,

    #[serde(rename = "walletversion")]
    pub wallet_version: i64,

    pub balance: f64,

    #[serde(rename = "walletdbversion")]
    pub wallet_db_version: i64,

    pub blocks: u64,

    #[serde(rename = "timeoffset")]
    pub time_offset: i64,

    pub connections: u64,

    pub proxy: String,

    pub difficulty: f64,

    pub testnet: bool,

    #[serde(rename = "keypoololdest")]
    pub keypool_oldest: i64,

    #[serde(rename = "keypoolsize")]
    pub keypool_size: i64,

    #[serde(rename = "paytxfee")]
    pub pay_tx_fee: f64,

    #[serde(rename = "relayfee")]
    pub relay_fee: f64,

    pub errors: String,
}

/// Result of `getmininginfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningInfo {
    pub blocks: u64,

    #[serde(rename = "currentblocksize")]
    pub current_block_size: u64,

    #[serde(rename = "currentblocktx")]
    pub current_block_tx: u64,

    pub difficulty: f64,

    pub errors: String,

    /// `-1` when unlimited
    #[serde(rename = "genproclimit")]
    pub gen_proc_limit: i64,

    #[serde(rename = "networkhashps")]
    pub network_hash_ps: f64,

    #[serde(rename = "pooledtx")]
    pub pooled_tx: u64,

    pub testnet: bool,

    pub chain: String,

    pub generate: bool,

    #[serde(rename = "hashespersec")]
    pub hashes_per_sec: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn node_info_reads_daemon_keys() {
        let info: NodeInfo = serde_json::from_value(json!({
            "version": "1.0.2",
            "nodeversion": 10002901,
            "chainname": "chain1",
            "port": 8571,
            "nodeaddress": "chain1@10.0.0.1:8571",
            "miningpaused": true
        }))
        .unwrap();
        assert_eq!(info.chain_name, "chain1");
        assert_eq!(info.port, 8571);
        assert!(info.mining_paused);
        assert!(!info.incoming_paused);
    }

    #[test]
    fn mining_info_unlimited_proc_limit() {
        let info: MiningInfo =
            serde_json::from_value(json!({"genproclimit": -1, "networkhashps": 12.5})).unwrap();
        assert_eq!(info.gen_proc_limit, -1);
        assert_eq!(info.network_hash_ps, 12.5);
    }
}
