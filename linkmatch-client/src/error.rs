//! Error types for the client layer.
//!
//! The retry loop keys off `is_retryable()`, an explicit classification,
//! rather than inspecting message text at the retry site. Server-reported
//! messages are classified once, at the single point where response text is
//! interpreted (`from_server_message`).

use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// License key failed the local format gate. Local, no network call.
    #[error("license key is required")]
    MissingKey,

    /// The server rejected the license key. Deterministic, never retried.
    #[error("license rejected: {0}")]
    License(String),

    /// The request exceeded its hard timeout and was cancelled.
    #[error("request timeout")]
    Timeout,

    /// Connection-level failure (DNS, refused, reset, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// The server reported a non-license failure.
    #[error("API error: {0}")]
    Api(String),

    /// Payload could not be serialized or parsed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Classifies a server-reported failure message.
    ///
    /// Messages mentioning the license are deterministic rejections and
    /// must not consume the retry budget; everything else is a transient
    /// server failure.
    #[must_use]
    pub fn from_server_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains("license") || message.contains("Invalid") {
            Self::License(message)
        } else {
            Self::Api(message)
        }
    }

    /// Returns true if a retry could plausibly succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout | Self::Network(_) | Self::Api(_))
    }
}
