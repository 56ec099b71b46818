//! Upload and download flows for end-to-end encrypted sharing.
//!
//! Upload: generate file key -> encrypt -> fetch recipient public key ->
//! wrap -> package -> send. Download: fetch meta -> unwrap -> fetch
//! ciphertext -> decrypt. Each step depends on the previous one, any
//! failure aborts the whole sequence, and the package reaches the backend
//! exactly once at the end, so an abandoned flow leaves no remote state.

use crate::api_client::StorageApiClient;
use crate::error::{ShareError, ShareResult};
use crate::types::{RecoveredFile, UploadPackage, UploadReceipt};
use rsa::RsaPrivateKey;
use sealdrop_crypto::{
    NONCE_SIZE, codec, decrypt, encrypt, generate_key, import_public_key_base64, unwrap_key,
    wrap_key,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Name used when the backend has no original name on record.
const FALLBACK_FILENAME: &str = "downloaded_file";

/// Orchestrates encrypted upload and download against the storage backend.
///
/// Holds no key material between operations: every upload generates a
/// fresh file key that is dropped (and zeroed) when the flow completes,
/// and download private keys are supplied by the caller per call.
pub struct FileSharing {
    api: Arc<StorageApiClient>,
}

impl FileSharing {
    pub fn new(api: Arc<StorageApiClient>) -> Self {
        Self { api }
    }

    /// Encrypts a file for a recipient and assembles the upload package.
    ///
    /// Nothing is sent to the backend. Any failure (entropy, directory
    /// lookup, wrap) aborts with no partial package.
    pub async fn prepare_upload(
        &self,
        file_bytes: &[u8],
        filename: &str,
        recipient_id: &str,
    ) -> ShareResult<UploadPackage> {
        let key = generate_key()?;
        let encrypted = encrypt(file_bytes, &key)?;
        debug!("encrypted {} bytes for recipient {recipient_id}", file_bytes.len());

        let recipient_pk_base64 = self.api.get_public_key_base64(recipient_id).await?;
        let recipient_pk = import_public_key_base64(&recipient_pk_base64)?;

        let wrapped_key = wrap_key(&key, &recipient_pk)?;

        Ok(UploadPackage {
            ciphertext: encrypted.ciphertext,
            iv: encrypted.nonce,
            wrapped_key,
            filename: filename.to_string(),
        })
    }

    /// Full upload flow: prepare the package, then hand it to the backend.
    pub async fn share_file(
        &self,
        file_bytes: &[u8],
        filename: &str,
        recipient_id: &str,
    ) -> ShareResult<UploadReceipt> {
        let package = self.prepare_upload(file_bytes, filename, recipient_id).await?;
        let receipt = self.api.upload_encrypted_file(&package).await?;
        info!("shared {filename} with {recipient_id} as file {}", receipt.file_id);
        Ok(receipt)
    }

    /// Full download flow: fetch metadata, unwrap the file key with the
    /// caller's private key, fetch the ciphertext, decrypt.
    ///
    /// `Unwrap` and `Authentication` failures propagate unchanged; they
    /// are deterministic, so no retry is attempted.
    pub async fn recover_download(
        &self,
        file_id: &str,
        private_key: &RsaPrivateKey,
    ) -> ShareResult<RecoveredFile> {
        let meta = self.api.get_file_meta(file_id).await?;

        let wrapped = codec::decode(&meta.wrapped_key)?;
        let key = unwrap_key(&wrapped, private_key)?;

        let ciphertext = self.api.get_encrypted_file_data(file_id).await?;

        let iv_bytes = codec::decode(&meta.iv)?;
        let iv: [u8; NONCE_SIZE] = iv_bytes
            .as_slice()
            .try_into()
            .map_err(|_| ShareError::Api(format!("invalid iv length: {}", iv_bytes.len())))?;

        let bytes = decrypt(&ciphertext, &key, &iv)?;
        info!("recovered file {file_id} ({} bytes)", bytes.len());

        Ok(RecoveredFile {
            bytes,
            original_name: meta
                .original_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| FALLBACK_FILENAME.to_string()),
        })
    }
}
