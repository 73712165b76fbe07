//! Health check operations.

use serde::{Deserialize, Serialize};

use super::ShiftsyncClient;
use crate::error::Result;

/// Server health status.
#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
}

impl ShiftsyncClient {
    /// Check server health.
    pub async fn health(&self) -> Result<Health> {
        let response = self.client.get(self.url("/health")).send().await?;
        self.handle_response(response).await
    }
}
