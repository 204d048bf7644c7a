use std::time::Duration;
use thiserror::Error;

/// Result type alias for Melissa operations
pub type Result<T> = std::result::Result<T, MelissaError>;

/// Errors that can occur when talking to the GlobalAddress service
#[derive(Error, Debug)]
pub enum MelissaError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out after the configured deadline
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// Ping received something other than 200 OK
    #[error("invalid response code, {status}, received for ping")]
    Unreachable {
        /// HTTP status code
        status: u16,
    },

    /// Query received a non-success status
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the service, or the raw body
        message: String,
    },

    /// Response body was not valid JSON or did not match the schema
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Query parameter rejected before sending
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl MelissaError {
    /// Returns true if the request never produced an HTTP response
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Timeout(_) | Self::Connection(_)
        )
    }

    /// Returns true if the body could not be decoded
    #[must_use]
    pub const fn is_decode_error(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    /// Returns the HTTP status code if the service answered with one
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unreachable { status } => Some(*status),
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
