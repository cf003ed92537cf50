//! Error types for MultiChain RPC calls.

use multichain_config::ConfigError;
use thiserror::Error;

/// Failures of the HTTP round trip itself.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The daemon could not be reached.
    #[error("Connection failed: {message}")]
    Connect {
        /// Error message.
        message: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("Request timed out: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// The daemon answered with a non-2xx status and no JSON-RPC error body.
    #[error("HTTP status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The response body was not a JSON-RPC response.
    #[error("Malformed response: {message}")]
    Decode {
        /// Error message.
        message: String,
    },

    /// Any other failure while sending or reading.
    #[error("Request failed: {message}")]
    Request {
        /// Error message.
        message: String,
    },

    /// A header value (e.g. credentials) could not be encoded.
    #[error("Invalid header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl TransportError {
    /// Create a decode error.
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a request error.
    pub fn request<S: Into<String>>(message: S) -> Self {
        Self::Request {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                message: err.to_string(),
            }
        } else if err.is_connect() {
            Self::Connect {
                message: err.to_string(),
            }
        } else if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::request(err.to_string())
        }
    }
}

/// Errors surfaced by every client call.
#[derive(Error, Debug)]
pub enum RpcError {
    /// The caller supplied a missing, empty or malformed argument.
    /// Raised before any network traffic.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter (or field) name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Network or HTTP level failure.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The daemon executed the call and reported an error.
    #[error("Daemon error {code}: {message}")]
    Daemon {
        /// Daemon error code.
        code: i64,
        /// Daemon error message.
        message: String,
    },

    /// The client could not be built from its configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RpcError {
    /// Create an invalid parameter error.
    pub fn invalid_parameter<N: Into<String>, S: Into<String>>(name: N, reason: S) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a daemon error.
    pub fn daemon<S: Into<String>>(code: i64, message: S) -> Self {
        Self::Daemon {
            code,
            message: message.into(),
        }
    }

    /// The daemon error code, if the daemon reported this error.
    pub fn daemon_code(&self) -> Option<i64> {
        match self {
            Self::Daemon { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Whether the failure happened before anything was sent.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

/// Result type for RPC operations.
pub type RpcResult<T> = std::result::Result<T, RpcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daemon_error_exposes_code() {
        let err = RpcError::daemon(-5, "Invalid address");
        assert_eq!(err.daemon_code(), Some(-5));
        assert_eq!(err.to_string(), "Daemon error -5: Invalid address");
    }

    #[test]
    fn invalid_parameter_names_the_field() {
        let err = RpcError::invalid_parameter("address", "is empty");
        assert!(err.is_invalid_parameter());
        assert_eq!(err.daemon_code(), None);
        assert_eq!(err.to_string(), "Invalid parameter 'address': is empty");
    }

    #[test]
    fn transport_errors_convert() {
        let err: RpcError = TransportError::Status {
            status: 401,
            body: String::new(),
        }
        .into();
        assert!(matches!(
            err,
            RpcError::Transport(TransportError::Status { status: 401, .. })
        ));
    }
}
