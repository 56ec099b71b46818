//! Sharing client error types.

use thiserror::Error;

/// Result type for sharing operations.
pub type ShareResult<T> = Result<T, ShareError>;

/// Errors that can occur in sharing operations.
///
/// Crypto failures pass through unchanged: a failed unwrap or a failed
/// authentication is deterministic, so the protocol never retries them.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("crypto error: {0}")]
    Crypto(#[from] sealdrop_crypto::CryptoError),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("API request failed: {0}")]
    Api(String),
}
