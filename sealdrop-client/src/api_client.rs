//! HTTP client for the storage backend and key directory.
//!
//! Implements the collaborator contracts of the sharing protocol: file
//! upload/meta/download plus public-key directory lookup and publish.
//! Uses reqwest with JSON bodies; the encrypted blob itself goes up as
//! one multipart form together with its nonce and wrapped key, so no
//! partial record can exist on the backend.

use crate::config::ClientConfig;
use crate::error::{ShareError, ShareResult};
use crate::types::{FileMeta, UploadPackage, UploadReceipt};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use sealdrop_crypto::codec;
use serde::Deserialize;
use tracing::debug;

/// HTTP client for the sealdrop storage backend.
pub struct StorageApiClient {
    client: Client,
    config: ClientConfig,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PublicKeyResponse {
    public_key_base64: String,
}

impl StorageApiClient {
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self { client, config }
    }

    /// Persists one encrypted file record: ciphertext, nonce, and wrapped
    /// key in a single multipart request.
    pub async fn upload_encrypted_file(
        &self,
        package: &UploadPackage,
    ) -> ShareResult<UploadReceipt> {
        let url = format!("{}/api/files/upload", self.config.api_base_url);

        let form = Form::new()
            .part(
                "file",
                Part::bytes(package.ciphertext.clone())
                    .file_name(format!("{}.enc", package.filename)),
            )
            .text("iv", codec::encode(&package.iv))
            .text("wrappedKey", codec::encode(&package.wrapped_key));

        let resp = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| ShareError::Api(e.to_string()))?;

        let receipt: UploadReceipt = resp.json().await?;
        debug!("uploaded encrypted file, assigned id {}", receipt.file_id);
        Ok(receipt)
    }

    /// Fetches the metadata record for a file.
    pub async fn get_file_meta(&self, file_id: &str) -> ShareResult<FileMeta> {
        let url = format!("{}/api/files/{file_id}/meta", self.config.api_base_url);
        let resp = self.client.get(&url).send().await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(ShareError::NotFound(format!("file {file_id}")));
        }

        let resp = resp
            .error_for_status()
            .map_err(|e| ShareError::Api(e.to_string()))?;
        Ok(resp.json().await?)
    }

    /// Fetches the raw ciphertext blob for a file.
    pub async fn get_encrypted_file_data(&self, file_id: &str) -> ShareResult<Vec<u8>> {
        let url = format!("{}/api/files/{file_id}/download", self.config.api_base_url);
        let resp = self.client.get(&url).send().await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(ShareError::NotFound(format!("file {file_id}")));
        }

        let resp = resp
            .error_for_status()
            .map_err(|e| ShareError::Api(e.to_string()))?;
        Ok(resp.bytes().await?.to_vec())
    }

    /// Directory lookup: a user's public key as base64 SPKI DER.
    pub async fn get_public_key_base64(&self, user_id: &str) -> ShareResult<String> {
        let url = format!("{}/api/users/{user_id}/publicKey", self.config.api_base_url);
        let resp = self.client.get(&url).send().await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(ShareError::NotFound(format!("user {user_id}")));
        }

        let resp = resp
            .error_for_status()
            .map_err(|e| ShareError::Api(e.to_string()))?;
        let data: PublicKeyResponse = resp.json().await?;
        Ok(data.public_key_base64)
    }

    /// Publishes the caller's public key to the directory.
    pub async fn publish_public_key(&self, public_key_base64: &str) -> ShareResult<()> {
        let url = format!("{}/api/users/publicKey", self.config.api_base_url);
        self.client
            .post(&url)
            .json(&serde_json::json!({ "publicKeyBase64": public_key_base64 }))
            .send()
            .await?
            .error_for_status()
            .map_err(|e| ShareError::Api(e.to_string()))?;
        Ok(())
    }
}
