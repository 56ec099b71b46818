//! RSA keypair handling for key wrapping.
//!
//! Generates 2048-bit RSA keypairs used exclusively to wrap and unwrap
//! file keys (OAEP/SHA-256, see [`crate::wrap`]). Public keys serialize
//! as SPKI DER so any party can fetch them from the directory service;
//! private keys serialize as PKCS#8 DER and never leave the holder's
//! storage through this crate.

use crate::codec;
use crate::error::{CryptoError, CryptoResult};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};

/// RSA modulus size in bits.
pub const RSA_BITS: usize = 2048;

/// An RSA-2048 keypair for wrapping file keys.
///
/// The public half is shareable with anyone; the private half is
/// exclusively owned by its holder.
pub struct ShareKeyPair {
    pub private: RsaPrivateKey,
    pub public: RsaPublicKey,
}

impl ShareKeyPair {
    /// Reconstructs a keypair from a PKCS#8 DER private key.
    pub fn from_private_key_der(der: &[u8]) -> CryptoResult<Self> {
        let private = import_private_key(der)?;
        let public = RsaPublicKey::from(&private);
        Ok(Self { private, public })
    }
}

/// Generates a fresh RSA-2048 keypair.
pub fn generate_keypair() -> CryptoResult<ShareKeyPair> {
    let mut rng = rand::rngs::OsRng;
    let private = RsaPrivateKey::new(&mut rng, RSA_BITS)
        .map_err(|e| CryptoError::KeyGeneration(e.to_string()))?;
    let public = RsaPublicKey::from(&private);
    Ok(ShareKeyPair { private, public })
}

/// Exports a public key as SPKI DER.
pub fn export_public_key(public: &RsaPublicKey) -> CryptoResult<Vec<u8>> {
    public
        .to_public_key_der()
        .map(|doc| doc.as_bytes().to_vec())
        .map_err(|e| CryptoError::InvalidKeyEncoding(e.to_string()))
}

/// Exports a private key as PKCS#8 DER.
pub fn export_private_key(private: &RsaPrivateKey) -> CryptoResult<Vec<u8>> {
    private
        .to_pkcs8_der()
        .map(|doc| doc.as_bytes().to_vec())
        .map_err(|e| CryptoError::InvalidKeyEncoding(e.to_string()))
}

/// Imports a public key from SPKI DER.
pub fn import_public_key(der: &[u8]) -> CryptoResult<RsaPublicKey> {
    RsaPublicKey::from_public_key_der(der)
        .map_err(|e| CryptoError::InvalidKeyEncoding(e.to_string()))
}

/// Imports a private key from PKCS#8 DER.
pub fn import_private_key(der: &[u8]) -> CryptoResult<RsaPrivateKey> {
    RsaPrivateKey::from_pkcs8_der(der)
        .map_err(|e| CryptoError::InvalidKeyEncoding(e.to_string()))
}

/// Exports a public key as base64-encoded SPKI DER (directory format).
pub fn export_public_key_base64(public: &RsaPublicKey) -> CryptoResult<String> {
    Ok(codec::encode(&export_public_key(public)?))
}

/// Exports a private key as base64-encoded PKCS#8 DER.
pub fn export_private_key_base64(private: &RsaPrivateKey) -> CryptoResult<String> {
    Ok(codec::encode(&export_private_key(private)?))
}

/// Imports a public key from base64-encoded SPKI DER.
pub fn import_public_key_base64(text: &str) -> CryptoResult<RsaPublicKey> {
    import_public_key(&codec::decode(text)?)
}

/// Imports a private key from base64-encoded PKCS#8 DER.
pub fn import_private_key_base64(text: &str) -> CryptoResult<RsaPrivateKey> {
    import_private_key(&codec::decode(text)?)
}
