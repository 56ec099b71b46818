//! RSA-OAEP wrapping of file keys.
//!
//! Encrypts exactly the 32 raw bytes of a [`FileKey`] under the
//! recipient's public key. Wrap and unwrap failures are opaque unit
//! errors; distinguishing padding failures from length failures would
//! hand an attacker a decryption oracle.

use crate::cipher::{FileKey, KEY_SIZE};
use crate::error::{CryptoError, CryptoResult};
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use zeroize::Zeroizing;

/// Wrapped key size for a 2048-bit modulus.
pub const WRAPPED_KEY_SIZE: usize = 256;

/// OAEP/SHA-256 overhead: 2 * hash_len + 2.
const OAEP_OVERHEAD: usize = 2 * 32 + 2;

/// Wraps a file key under the recipient's public key.
///
/// The output length equals the RSA modulus size (256 bytes for 2048-bit
/// keys). A 32-byte key always fits under OAEP/SHA-256, but the payload
/// bound is checked against the actual modulus anyway.
pub fn wrap_key(key: &FileKey, recipient: &RsaPublicKey) -> CryptoResult<Vec<u8>> {
    if KEY_SIZE + OAEP_OVERHEAD > recipient.size() {
        return Err(CryptoError::Wrap);
    }

    let mut rng = rand::rngs::OsRng;
    recipient
        .encrypt(&mut rng, Oaep::new::<Sha256>(), &key.to_bytes())
        .map_err(|_| CryptoError::Wrap)
}

/// Unwraps a wrapped file key with the holder's private key.
///
/// Fails with [`CryptoError::Unwrap`] on any decryption failure (wrong
/// private key, corrupted wrapped key) or if the recovered payload is
/// not exactly 32 bytes.
pub fn unwrap_key(wrapped: &[u8], holder: &RsaPrivateKey) -> CryptoResult<FileKey> {
    let bytes = Zeroizing::new(
        holder
            .decrypt(Oaep::new::<Sha256>(), wrapped)
            .map_err(|_| CryptoError::Unwrap)?,
    );

    FileKey::from_bytes(&bytes).map_err(|_| CryptoError::Unwrap)
}
