use crate::error::{RpcError, RpcResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 1.0 response envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Command result; `null` when the call failed or returns nothing
    #[serde(default)]
    pub result: Value,

    /// Error reported by the daemon
    #[serde(default)]
    pub error: Option<RpcResponseError>,

    /// Echo of the request ID
    #[serde(default)]
    pub id: Value,
}

/// Error object carried by a failed response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcResponseError {
    /// Daemon error code
    pub code: i64,

    /// Error message
    #[serde(default)]
    pub message: String,

    /// Additional error data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcResponse {
    /// Successful response carrying `result`.
    pub fn success(id: u64, result: Value) -> Self {
        Self {
            result,
            error: None,
            id: Value::from(id),
        }
    }

    /// Failed response carrying a daemon error.
    pub fn failure(id: u64, code: i64, message: impl Into<String>) -> Self {
        Self {
            result: Value::Null,
            error: Some(RpcResponseError {
                code,
                message: message.into(),
                data: None,
            }),
            id: Value::from(id),
        }
    }

    /// The result, or the daemon's error.
    pub fn into_result(self) -> RpcResult<Value> {
        match self.error {
            Some(err) => Err(RpcError::daemon(err.code, err.message)),
            None => Ok(self.result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_body_yields_result() {
        let response: RpcResponse =
            serde_json::from_value(json!({"result": {"balance": 1.5}, "error": null, "id": 3}))
                .unwrap();
        assert_eq!(response.into_result().unwrap(), json!({"balance": 1.5}));
    }

    #[test]
    fn error_body_yields_daemon_error() {
        let response: RpcResponse = serde_json::from_value(json!({
            "result": null,
            "error": {"code": -8, "message": "Invalid parameter"},
            "id": 3
        }))
        .unwrap();
        let err = response.into_result().unwrap_err();
        assert_eq!(err.daemon_code(), Some(-8));
    }

    #[test]
    fn missing_fields_default() {
        let response: RpcResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.into_result().unwrap(), Value::Null);
    }
}
