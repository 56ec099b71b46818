//! Sharing client for sealdrop.
//!
//! Drives the end-to-end encrypted sharing flows against an untrusted
//! storage backend:
//! - Upload: generate file key, encrypt, wrap for the recipient, package
//! - Download: fetch metadata, unwrap with the caller's private key, decrypt
//! - Storage API client for the file and key-directory endpoints
//!
//! The backend only ever receives ciphertext, the nonce, and the wrapped
//! key; all cryptography happens in `sealdrop-crypto` before anything
//! touches the network.

pub mod api_client;
pub mod config;
pub mod error;
pub mod protocol;
pub mod types;

pub use api_client::StorageApiClient;
pub use config::ClientConfig;
pub use error::{ShareError, ShareResult};
pub use protocol::FileSharing;
pub use types::*;
