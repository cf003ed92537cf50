use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 1.0 request envelope as the MultiChain daemon expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Command name
    pub method: String,

    /// Positional parameters
    #[serde(default)]
    pub params: Vec<Value>,

    /// Request ID
    pub id: u64,

    /// Target chain, when the daemon hosts more than one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_name: Option<String>,
}

impl RpcRequest {
    /// Creates a new RPC request
    pub fn new(id: u64, method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            method: method.into(),
            params,
            id,
            chain_name: None,
        }
    }

    /// Sets the chain name
    #[must_use]
    pub fn with_chain_name(mut self, chain_name: Option<String>) -> Self {
        self.chain_name = chain_name;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_shape() {
        let req = RpcRequest::new(7, "getblock", vec![json!("0abc"), json!(true)]);
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(
            body,
            json!({"method": "getblock", "params": ["0abc", true], "id": 7})
        );
        assert!(body.get("chain_name").is_none());
    }

    #[test]
    fn chain_name_is_sent_when_set() {
        let req = RpcRequest::new(1, "getinfo", Vec::new())
            .with_chain_name(Some("chain1".to_string()));
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["chain_name"], "chain1");
        assert_eq!(body["params"], json!([]));
    }
}
