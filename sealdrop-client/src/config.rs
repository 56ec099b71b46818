//! Sharing client configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the storage API client.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL for the storage backend (e.g., "https://api.sealdrop.io").
    pub api_base_url: String,

    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.sealdrop.io".to_string(),
            request_timeout_secs: 30,
        }
    }
}
