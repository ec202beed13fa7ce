//! Network-related error types.
//!
//! Errors raised while talking to the scenario runner over HTTP. A failure
//! here means no response was obtained at all; HTTP error statuses are
//! ordinary responses and never reach this type.

use thiserror::Error;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    /// Connection to the server failed.
    #[error("Connection failed to '{url}': {message}")]
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    #[error("{operation} timed out")]
    Timeout { operation: String },

    /// The request URL could not be built or parsed.
    #[error("Invalid URL '{url}'")]
    InvalidUrl { url: String },

    /// The response body could not be read.
    #[error("Failed to read response body: {message}")]
    BodyRead { message: String },

    /// Generic network error.
    #[error("Network error: {message}")]
    Other { message: String },
}

impl NetworkError {
    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::BodyRead { .. } => true,
            NetworkError::InvalidUrl { .. } => false,
            NetworkError::Other { .. } => false,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::BodyRead { .. } => "E_NET_BODY",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

/// Classify a reqwest error into a NetworkError.
pub fn classify_reqwest_error(err: &reqwest::Error, url: &str) -> NetworkError {
    if err.is_connect() {
        NetworkError::ConnectionFailed {
            url: url.to_string(),
            message: err.to_string(),
        }
    } else if err.is_timeout() {
        NetworkError::Timeout {
            operation: format!("POST {}", url),
        }
    } else if err.is_builder() {
        NetworkError::InvalidUrl {
            url: url.to_string(),
        }
    } else if err.is_body() || err.is_decode() {
        NetworkError::BodyRead {
            message: err.to_string(),
        }
    } else {
        NetworkError::Other {
            message: err.to_string(),
        }
    }
}
