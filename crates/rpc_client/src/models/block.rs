use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of verbose `getblock` and entries of `listblocks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Block {
    pub hash: String,

    /// Address of the miner, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miner: Option<String>,

    pub confirmations: i64,

    pub size: u64,

    pub height: u64,

    pub version: i64,

    #[serde(rename = "merkleroot")]
    pub merkle_root: String,

    /// Transaction IDs, or full transactions at higher verbosity
    pub tx: Vec<Value>,

    pub time: i64,

    pub nonce: u64,

    pub bits: String,

    pub difficulty: f64,

    #[serde(rename = "chainwork")]
    pub chain_work: String,

    #[serde(rename = "previousblockhash", skip_serializing_if = "Option::is_none")]
    pub previous_block_hash: Option<String>,

    #[serde(rename = "nextblockhash", skip_serializing_if = "Option::is_none")]
    pub next_block_hash: Option<String>,

    /// Transaction count, reported by `listblocks`
    #[serde(rename = "txcount", skip_serializing_if = "Option::is_none")]
    pub tx_count: Option<u64>,
}

/// Result of `getblockchaininfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockchainInfo {
    pub chain: String,

    #[serde(rename = "chainname")]
    pub chain_name: String,

    pub description: String,

    pub protocol: String,

    #[serde(rename = "setupblocks")]
    pub setup_blocks: u64,

    pub blocks: u64,

    pub headers: u64,

    #[serde(rename = "bestblockhash")]
    pub best_block_hash: String,

    pub difficulty: f64,

    #[serde(rename = "verificationprogress")]
    pub verification_progress: f64,

    #[serde(rename = "chainwork")]
    pub chain_work: String,
}

/// Result of `getmempoolinfo`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MempoolInfo {
    /// Transaction count
    pub size: u64,
    pub bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn genesis_block_has_no_previous_hash() {
        let block: Block = serde_json::from_value(json!({
            "hash": "00aa",
            "miner": "1M",
            "confirmations": 10,
            "size": 250,
            "height": 0,
            "version": 1,
            "merkleroot": "ab",
            "tx": ["ab"],
            "time": 1500000000,
            "nonce": 7,
            "bits": "2000ffff",
            "difficulty": 0.0000001,
            "chainwork": "0002",
            "nextblockhash": "00bb"
        }))
        .unwrap();
        assert_eq!(block.height, 0);
        assert!(block.previous_block_hash.is_none());
        assert_eq!(block.next_block_hash.as_deref(), Some("00bb"));
        assert_eq!(block.tx, vec![json!("ab")]);
    }

    #[test]
    fn blockchain_info_reads_daemon_keys() {
        let info: BlockchainInfo = serde_json::from_value(json!({
            "chain": "main",
            "chainname": "chain1",
            "protocol": "multichain",
            "setupblocks": 60,
            "blocks": 120,
            "bestblockhash": "00cc"
        }))
        .unwrap();
        assert_eq!(info.chain_name, "chain1");
        assert_eq!(info.setup_blocks, 60);
        assert_eq!(info.headers, 0);
    }
}
