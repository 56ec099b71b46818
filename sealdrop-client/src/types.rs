//! Shared types for sharing operations.

use sealdrop_crypto::NONCE_SIZE;
use serde::{Deserialize, Serialize};

/// Everything the backend needs to store one encrypted file.
///
/// Assembled atomically by the upload flow: either all fields are present
/// or nothing is sent. Binary fields stay raw here; base64 framing is
/// applied at the HTTP boundary.
#[derive(Debug)]
pub struct UploadPackage {
    /// AES-256-GCM ciphertext with the 16-byte tag appended.
    pub ciphertext: Vec<u8>,
    /// The 12-byte nonce used for this ciphertext.
    pub iv: [u8; NONCE_SIZE],
    /// File key wrapped under the recipient's RSA public key (256 bytes).
    pub wrapped_key: Vec<u8>,
    /// Original filename; the backend stores it as `originalName`.
    pub filename: String,
}

/// Backend response to a successful upload.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    pub file_id: String,
}

/// Per-file metadata returned by the backend.
///
/// `iv` and `wrapped_key` are base64 text on the wire. The record is
/// immutable once created.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    pub iv: String,
    pub wrapped_key: String,
    #[serde(default)]
    pub original_name: Option<String>,
}

/// Plaintext recovered by the download flow.
#[derive(Debug)]
pub struct RecoveredFile {
    pub bytes: Vec<u8>,
    pub original_name: String,
}
