use super::BalanceAsset;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Decoded transaction, as returned by `decoderawtransaction` and verbose
/// `getrawtransaction`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTransaction {
    pub txid: String,

    pub version: i64,

    #[serde(rename = "locktime")]
    pub lock_time: u64,

    pub vin: Vec<TxIn>,

    pub vout: Vec<TxOut>,

    /// Metadata outputs, hex or JSON
    pub data: Vec<Value>,

    /// Serialized transaction; present in verbose `getrawtransaction`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,

    #[serde(rename = "blockhash", skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmations: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,

    #[serde(rename = "blocktime", skip_serializing_if = "Option::is_none")]
    pub block_time: Option<i64>,
}

/// Transaction input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxIn {
    pub txid: String,

    pub vout: u32,

    #[serde(rename = "scriptSig")]
    pub script_sig: ScriptSig,

    pub sequence: u64,

    /// Set instead of `txid`/`vout` on coinbase inputs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coinbase: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptSig {
    pub asm: String,
    pub hex: String,
}

/// Transaction output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxOut {
    pub value: f64,

    pub n: u32,

    #[serde(rename = "scriptPubKey")]
    pub script_pub_key: ScriptPubKey,

    pub assets: Vec<BalanceAsset>,

    pub permissions: Vec<Value>,

    pub items: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptPubKey {
    pub asm: String,

    pub hex: String,

    #[serde(rename = "reqSigs")]
    pub req_sigs: u32,

    #[serde(rename = "type")]
    pub script_type: String,

    pub addresses: Vec<String>,
}

/// Result of `signrawtransaction`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignedTransaction {
    /// Transaction hex with whatever signatures could be added
    pub hex: String,

    /// Whether every input is now signed
    pub complete: bool,
}

/// Result of `gettxout` for an unspent output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxOutInfo {
    #[serde(rename = "bestblock")]
    pub best_block: String,

    pub confirmations: i64,

    pub value: f64,

    #[serde(rename = "scriptPubKey")]
    pub script_pub_key: ScriptPubKey,

    pub version: i64,

    pub coinbase: bool,

    pub assets: Vec<BalanceAsset>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decoded_transaction() {
        let tx: RawTransaction = serde_json::from_value(json!({
            "txid": "t1",
            "version": 1,
            "locktime": 0,
            "vin": [{
                "txid": "t0",
                "vout": 2,
                "scriptSig": {"asm": "", "hex": ""},
                "sequence": 4294967295u64
            }],
            "vout": [{
                "value": 0.5,
                "n": 0,
                "scriptPubKey": {
                    "asm": "OP_DUP",
                    "hex": "76a9",
                    "reqSigs": 1,
                    "type": "pubkeyhash",
                    "addresses": ["1A"]
                },
                "assets": []
            }],
            "data": ["48656c6c6f"]
        }))
        .unwrap();
        assert_eq!(tx.vin[0].vout, 2);
        assert_eq!(tx.vin[0].sequence, 4294967295);
        assert_eq!(tx.vout[0].script_pub_key.script_type, "pubkeyhash");
        assert_eq!(tx.vout[0].script_pub_key.req_sigs, 1);
        assert_eq!(tx.data.len(), 1);
        assert!(tx.hex.is_none());
    }

    #[test]
    fn coinbase_input() {
        let input: TxIn = serde_json::from_value(json!({"coinbase": "04ff", "sequence": 1})).unwrap();
        assert_eq!(input.coinbase.as_deref(), Some("04ff"));
        assert!(input.txid.is_empty());
    }
}
