// Daemon client implementation
//
// HTTP client that communicates with the kestreld control API.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::config::ClientConfig;

use super::error::{process_error_body, ClientError};
use super::types::StatusResponse;

/// Fixed path of the daemon's aggregated status endpoint
const STATUS_PATH: &str = "/healthz";

/// Configuration for daemon connection
#[derive(Debug, Clone)]
pub struct DaemonConfig {
    /// Daemon bind address (e.g., "127.0.0.1:7133")
    pub bind_address: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:7133".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl DaemonConfig {
    /// Create DaemonConfig from ClientConfig settings
    pub fn from_client_config(client_config: &ClientConfig) -> Self {
        Self {
            bind_address: client_config.daemon_address.clone(),
            timeout_seconds: client_config.timeout_seconds,
        }
    }
}

/// HTTP client for communicating with the kestreld daemon
pub struct DaemonClient {
    base_url: String,
    client: Client,
}

impl DaemonClient {
    /// Create a new daemon client bound to the configured endpoint
    pub fn new(config: &DaemonConfig) -> Result<Self> {
        let base_url = format!("http://{}", config.bind_address);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { base_url, client })
    }

    /// Query the daemon's aggregated status.
    ///
    /// Sends a single GET to the status endpoint and classifies the outcome:
    /// transport failures, non-200 responses and undecodable bodies each map
    /// to their own [`ClientError`] variant. No retries, no partial results.
    pub async fn global_status(&self) -> Result<StatusResponse, ClientError> {
        let url = format!("{}{}", self.base_url, STATUS_PATH);
        debug!(url = %url, "Querying daemon status");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ClientError::Connection { source })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| ClientError::Connection { source })?;

        if status != StatusCode::OK {
            return Err(process_error_body(status, &body));
        }

        serde_json::from_slice(&body).map_err(|source| ClientError::Decode { source })
    }

    /// Get base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daemon_config_default() {
        let config = DaemonConfig::default();
        assert_eq!(config.bind_address, "127.0.0.1:7133");
        assert_eq!(config.timeout_seconds, 10);
    }

    #[test]
    fn test_base_url_includes_scheme() {
        let client = DaemonClient::new(&DaemonConfig::default()).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:7133");
    }
}
