//! Envelope encryption core for sealdrop.
//!
//! Provides client-side hybrid encryption for file sharing:
//! - AES-256-GCM for authenticated encryption of file contents
//! - RSA-2048 OAEP/SHA-256 for wrapping the per-file key to a recipient
//! - Base64 framing at the transport boundary
//!
//! # Architecture
//!
//! Every shared file gets its own random 256-bit key (the file key).
//! The file bytes are encrypted under that key with a fresh 96-bit nonce,
//! then the raw key is wrapped under the recipient's RSA public key.
//! The storage backend only ever sees ciphertext, nonce, and wrapped key;
//! only the holder of the matching private key can recover the file.
//!
//! This crate is purely computational: no I/O, no async, no network types.
//! All primitives operate on raw byte buffers; text encoding lives in
//! [`codec`] and is applied only where values cross the transport boundary.

pub mod cipher;
pub mod codec;
mod error;
pub mod keyring;
pub mod wrap;

pub use cipher::{
    EncryptedFile, FileKey, decrypt, encrypt, generate_key, KEY_SIZE, NONCE_SIZE, TAG_SIZE,
};
pub use error::{CryptoError, CryptoResult};
pub use keyring::{
    ShareKeyPair, export_private_key_base64, export_public_key_base64, generate_keypair,
    import_private_key_base64, import_public_key_base64,
};
pub use wrap::{unwrap_key, wrap_key, WRAPPED_KEY_SIZE};
