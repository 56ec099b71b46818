//! Base64 framing at the core/transport boundary.
//!
//! Binary values (ciphertext, nonce, wrapped key, exported key material)
//! cross the REST boundary as standard padded base64 text. Keeping the
//! encoding here means the cryptographic modules only ever see raw bytes.

use crate::error::{CryptoError, CryptoResult};
use base64::{Engine, engine::general_purpose::STANDARD};

/// Encodes raw bytes as standard padded base64.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes standard padded base64 back to raw bytes.
pub fn decode(text: &str) -> CryptoResult<Vec<u8>> {
    STANDARD
        .decode(text)
        .map_err(|e| CryptoError::InvalidEncoding(e.to_string()))
}
