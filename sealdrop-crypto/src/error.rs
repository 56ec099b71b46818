//! Crypto error types.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur in envelope encryption operations.
///
/// `Authentication`, `Wrap`, and `Unwrap` are deliberately unit variants:
/// they carry no detail about which internal check failed, so callers
/// cannot be turned into a padding or tag oracle.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("invalid key encoding: {0}")]
    InvalidKeyEncoding(String),

    #[error("invalid base64 input: {0}")]
    InvalidEncoding(String),

    #[error("encryption failed: {0}")]
    Encryption(String),

    #[error("authentication failed (tampered data or wrong key)")]
    Authentication,

    #[error("key wrap failed")]
    Wrap,

    #[error("key unwrap failed (wrong key or corrupted data)")]
    Unwrap,
}
