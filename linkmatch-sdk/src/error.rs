//! Error types for the SDK surface.

use linkmatch_client::ClientError;
use thiserror::Error;

/// Result type for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;

/// Errors surfaced by the public SDK operations.
#[derive(Debug, Error)]
pub enum SdkError {
    /// The session has not been (successfully) initialized.
    #[error("please call initialize() first")]
    NotInitialized,

    /// A client-layer failure (format gate, validation, transport, server).
    #[error(transparent)]
    Client(#[from] ClientError),
}
