//! HTTP client for the shiftsync API.

pub mod health;
pub mod schedule;

use shiftsync_core::session::ErrorResponse;

use crate::error::{ClientError, Result};

/// Default server address when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// HTTP client for the shiftsync API.
#[derive(Debug, Clone)]
pub struct ShiftsyncClient {
    client: reqwest::Client,
    base_url: String,
    key: String,
}

impl ShiftsyncClient {
    /// Create a new client with the given base URL and access key.
    pub fn new(base_url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            key: key.into(),
        }
    }

    /// Create from environment (SHIFTSYNC_URL or default, SHIFTSYNC_KEY or empty).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("SHIFTSYNC_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let key = std::env::var("SHIFTSYNC_KEY").unwrap_or_default();
        Self::new(base_url, key)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the access key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Handle error responses.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(ClientError::from);
        }

        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = serde_json::from_str::<ErrorResponse>(&text)
            .map(|body| body.error)
            .unwrap_or(text);

        match status.as_u16() {
            status @ (401 | 403) => Err(ClientError::Unauthorized { status, message }),
            status => Err(ClientError::ServerError { status, message }),
        }
    }
}
