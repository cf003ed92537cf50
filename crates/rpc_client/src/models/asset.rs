use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Asset quantity held by an address or carried by an output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceAsset {
    pub name: String,

    #[serde(rename = "assetref")]
    pub asset_ref: String,

    pub qty: f64,

    /// Raw integer units, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<i64>,
}

/// One entry of `listassets`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetInfo {
    pub name: String,

    #[serde(rename = "issuetxid")]
    pub issue_txid: String,

    #[serde(rename = "assetref")]
    pub asset_ref: String,

    pub multiple: u64,

    pub units: f64,

    /// Whether follow-on issues are allowed
    pub open: bool,

    /// Custom fields stored with the issue
    pub details: Map<String, Value>,

    #[serde(rename = "issueqty")]
    pub issue_qty: f64,

    #[serde(rename = "issueraw")]
    pub issue_raw: u64,

    pub subscribed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn asset_info_reads_daemon_keys() {
        let asset: AssetInfo = serde_json::from_value(json!({
            "name": "gold",
            "issuetxid": "aa",
            "assetref": "5-266-43690",
            "multiple": 100,
            "units": 0.01,
            "open": true,
            "details": {"origin": "mine"},
            "issueqty": 1000.0,
            "issueraw": 100000
        }))
        .unwrap();
        assert_eq!(asset.asset_ref, "5-266-43690");
        assert_eq!(asset.issue_raw, 100000);
        assert!(asset.open);
        assert_eq!(asset.details["origin"], "mine");
        assert!(!asset.subscribed);
    }
}
