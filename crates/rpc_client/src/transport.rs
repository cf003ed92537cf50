//! One HTTP round trip per call.

use crate::error::{RpcResult, TransportError};
use crate::models::{RpcRequest, RpcResponse};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use multichain_config::ConnectionConfig;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use std::time::Duration;

/// Delivers one request envelope to the daemon and returns its response.
///
/// Implementations make a single attempt; retry policy belongs to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the decoded response envelope.
    async fn send(&self, request: &RpcRequest) -> Result<RpcResponse, TransportError>;
}

/// [`Transport`] over HTTP POST with basic auth.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: Url,
    http_client: Client,
}

impl HttpTransport {
    /// Creates a transport for `endpoint`, adding a basic-auth header when
    /// credentials are given.
    pub fn new(
        endpoint: Url,
        credentials: Option<(&str, &str)>,
        timeout: Option<Duration>,
    ) -> Result<Self, TransportError> {
        let mut builder = Client::builder();

        if let Some((user, password)) = credentials {
            let encoded = general_purpose::STANDARD.encode(format!("{user}:{password}"));
            let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))?;
            value.set_sensitive(true);
            let mut headers = HeaderMap::new();
            headers.insert(AUTHORIZATION, value);
            builder = builder.default_headers(headers);
        }

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            endpoint,
            http_client: builder.build()?,
        })
    }

    /// Creates a transport from connection settings.
    pub fn from_config(config: &ConnectionConfig) -> RpcResult<Self> {
        config.validate()?;
        let credentials = config
            .has_credentials()
            .then(|| (config.rpc_user.as_str(), config.rpc_password.as_str()));
        Ok(Self::new(config.endpoint_url()?, credentials, config.timeout())?)
    }

    /// Wraps an existing HTTP client.
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self {
            endpoint,
            http_client: client,
        }
    }

    /// Daemon endpoint requests are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &RpcRequest) -> Result<RpcResponse, TransportError> {
        let body = serde_json::to_vec(request).map_err(|e| TransportError::request(e.to_string()))?;

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let content = response.text().await?;
        decode_response(status, &content)
    }
}

/// The daemon reports failed commands with a non-2xx status and a JSON-RPC
/// error body; those are returned as responses. Any other non-2xx is a
/// transport failure.
fn decode_response(status: StatusCode, content: &str) -> Result<RpcResponse, TransportError> {
    match parse_envelope(content) {
        Ok(response) if status.is_success() || response.error.is_some() => Ok(response),
        Err(err) if status.is_success() => Err(err),
        _ => Err(TransportError::Status {
            status: status.as_u16(),
            body: content.to_string(),
        }),
    }
}

/// A response body must be an object carrying `result` or `error`.
fn parse_envelope(content: &str) -> Result<RpcResponse, TransportError> {
    let body: Value =
        serde_json::from_str(content).map_err(|e| TransportError::decode(e.to_string()))?;
    match &body {
        Value::Object(fields) if fields.contains_key("result") || fields.contains_key("error") => {
            serde_json::from_value(body).map_err(|e| TransportError::decode(e.to_string()))
        }
        _ => Err(TransportError::decode(
            "body is not a JSON-RPC response object",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_status_with_result() {
        let response = decode_response(StatusCode::OK, r#"{"result":5,"error":null,"id":1}"#).unwrap();
        assert_eq!(response.result, json!(5));
    }

    #[test]
    fn error_status_with_rpc_error_is_a_response() {
        let response = decode_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"result":null,"error":{"code":-5,"message":"Invalid address"},"id":1}"#,
        )
        .unwrap();
        assert_eq!(response.error.map(|e| e.code), Some(-5));
    }

    #[test]
    fn error_status_without_rpc_error() {
        let err = decode_response(StatusCode::UNAUTHORIZED, "").unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 401, .. }));
    }

    #[test]
    fn malformed_body() {
        let err = decode_response(StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, TransportError::Decode { .. }));
    }

    #[test]
    fn body_without_result_or_error_is_malformed() {
        for body in ["[]", "{}", r#"{"id":1}"#, "5"] {
            let err = decode_response(StatusCode::OK, body).unwrap_err();
            assert!(matches!(err, TransportError::Decode { .. }), "body {body}");
        }
        let err = decode_response(StatusCode::INTERNAL_SERVER_ERROR, "{}").unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 500, .. }));
    }

    #[test]
    fn null_result_is_still_a_response() {
        let response = decode_response(StatusCode::OK, r#"{"result":null,"error":null,"id":2}"#).unwrap();
        assert_eq!(response.result, Value::Null);
        assert!(response.error.is_none());
    }

    #[test]
    fn credentials_become_basic_auth() {
        let endpoint = Url::parse("http://127.0.0.1:8570").unwrap();
        assert!(HttpTransport::new(endpoint, Some(("user", "pass")), None).is_ok());
    }
}
