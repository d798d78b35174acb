//! Error types for moviedeck.
//!
//! This module defines the crate-wide error type [`MovieDeckError`], the remote
//! data client error [`ApiError`], and a [`Result`] alias. All errors are
//! implemented with `thiserror`.

use thiserror::Error;

/// Failure of a single request against the movie metadata service.
///
/// The client never retries or recovers; every variant is surfaced unchanged
/// to the page controller that issued the request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received (DNS, connect, TLS, or body transfer failure).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service error ({status}): {message}")]
    Service {
        /// HTTP status code returned by the service.
        status: u16,
        /// Status message or response body excerpt.
        message: String,
    },

    /// The request was valid but the resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Returns `true` for failures where no response was received.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// The main error type for moviedeck operations.
///
/// Consolidates storage, configuration, and remote failures. Most variants
/// wrap an underlying error via `#[from]`.
///
/// # Examples
///
/// ```
/// use moviedeck::MovieDeckError;
///
/// fn read_state() -> Result<(), MovieDeckError> {
///     Err(MovieDeckError::Storage("state file is locked".to_string()))
/// }
/// assert!(read_state().is_err());
/// ```
#[derive(Debug, Error)]
pub enum MovieDeckError {
    /// Reading or writing the persisted state failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted state could not be serialized or parsed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration file could not be parsed.
    #[error("Failed to parse config TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The metadata service request failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for moviedeck operations.
pub type Result<T> = std::result::Result<T, MovieDeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_reports_status() {
        let err = ApiError::Service {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "service error (503): Service Unavailable");
        assert!(!err.is_transport());
    }

    #[test]
    fn api_error_converts_transparently() {
        let err: MovieDeckError = ApiError::NotFound("/movie/1".to_string()).into();
        assert_eq!(err.to_string(), "not found: /movie/1");
    }
}
