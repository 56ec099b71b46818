//! Per-file authenticated encryption with AES-256-GCM.
//!
//! Each upload gets a fresh random 256-bit file key and each encryption
//! call a fresh random 96-bit nonce. Nonce uniqueness relies on the OS
//! RNG; a file key is used for exactly one file, so the random-nonce
//! regime stays far below any collision bound.

use crate::error::{CryptoError, CryptoResult};
use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use rand::RngCore;
use rand::rngs::OsRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// File key size in bytes (AES-256).
pub const KEY_SIZE: usize = 32;
/// Nonce size in bytes (96-bit GCM nonce).
pub const NONCE_SIZE: usize = 12;
/// GCM authentication tag size, appended to the ciphertext.
pub const TAG_SIZE: usize = 16;

/// A 256-bit per-file symmetric key, zeroed on drop.
///
/// Created fresh for each upload and discarded once the operation
/// completes. The raw bytes leave process memory only in wrapped form.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct FileKey([u8; KEY_SIZE]);

impl std::fmt::Debug for FileKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FileKey([REDACTED])")
    }
}

impl FileKey {
    /// Exports the raw key material.
    pub fn to_bytes(&self) -> [u8; KEY_SIZE] {
        self.0
    }

    /// Imports raw key material, rejecting anything but exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut key = [0u8; KEY_SIZE];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

/// Output of [`encrypt`]: GCM ciphertext (tag appended) plus the nonce.
///
/// The nonce is not secret and travels next to the ciphertext; the
/// backend stores it in the file record verbatim.
pub struct EncryptedFile {
    pub ciphertext: Vec<u8>,
    pub nonce: [u8; NONCE_SIZE],
}

/// Generates a uniformly random 256-bit file key.
pub fn generate_key() -> CryptoResult<FileKey> {
    let mut bytes = [0u8; KEY_SIZE];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| CryptoError::KeyGeneration(e.to_string()))?;
    Ok(FileKey(bytes))
}

/// Encrypts file bytes under the given key with a fresh random nonce.
pub fn encrypt(plaintext: &[u8], key: &FileKey) -> CryptoResult<EncryptedFile> {
    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng
        .try_fill_bytes(&mut nonce_bytes)
        .map_err(|e| CryptoError::Encryption(e.to_string()))?;

    let cipher = Aes256Gcm::new_from_slice(key.as_slice())
        .map_err(|e| CryptoError::Encryption(e.to_string()))?;

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), plaintext)
        .map_err(|e| CryptoError::Encryption(e.to_string()))?;

    Ok(EncryptedFile {
        ciphertext,
        nonce: nonce_bytes,
    })
}

/// Decrypts and authenticates ciphertext produced by [`encrypt`].
///
/// Any tag mismatch (tampered ciphertext or nonce, wrong key) surfaces
/// as the opaque [`CryptoError::Authentication`]; no partial plaintext
/// is ever returned.
pub fn decrypt(
    ciphertext: &[u8],
    key: &FileKey,
    nonce: &[u8; NONCE_SIZE],
) -> CryptoResult<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_slice())
        .map_err(|_| CryptoError::Authentication)?;

    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| CryptoError::Authentication)
}
