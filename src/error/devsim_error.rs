//! Unified error type for devsim.

use thiserror::Error;

use super::config::ConfigError;
use super::network::NetworkError;
use crate::websocket::WsError;

/// Unified error type consolidating the domain-specific errors.
#[derive(Debug, Error)]
pub enum DevsimError {
    /// HTTP transport errors.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Live incident stream errors.
    #[error(transparent)]
    Stream(#[from] WsError),

    /// Startup configuration errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Terminal and filesystem errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DevsimError {
    /// Whether retrying the failed operation could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            DevsimError::Network(err) => err.is_retryable(),
            DevsimError::Stream(err) => err.is_retryable(),
            DevsimError::Config(_) => false,
            DevsimError::Io(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let err: DevsimError = ConfigError::EmptyScenarioList.into();
        assert!(matches!(err, DevsimError::Config(_)));
        assert!(!err.is_retryable());

        let err: DevsimError = WsError::ReadFailed("reset".to_string()).into();
        assert!(err.is_retryable());

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: DevsimError = io_err.into();
        assert_eq!(err.to_string(), "I/O error: gone");
    }

    #[test]
    fn test_transparent_display() {
        let err: DevsimError = NetworkError::Other {
            message: "boom".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Network error: boom");
    }
}
