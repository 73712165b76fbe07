//! The seam between the sync controller and the schedule store.

use async_trait::async_trait;
use shiftsync_core::calendar::Scope;
use shiftsync_core::session::{FetchResponse, RemoteError, SavePayload};

use crate::client::ShiftsyncClient;
use crate::error::ClientError;

/// A store that holds one schedule document per month.
#[async_trait]
pub trait ScheduleRemote: Send + Sync {
    /// Fetches a month's schedule and the role granted to the credential.
    async fn fetch(&self, credential: &str, scope: Scope) -> Result<FetchResponse, RemoteError>;

    /// Replaces a month's schedule.
    async fn save(
        &self,
        credential: &str,
        scope: Scope,
        payload: &SavePayload,
    ) -> Result<(), RemoteError>;
}

#[async_trait]
impl ScheduleRemote for ShiftsyncClient {
    async fn fetch(&self, credential: &str, scope: Scope) -> Result<FetchResponse, RemoteError> {
        self.fetch_schedule_as(credential, scope)
            .await
            .map_err(RemoteError::from)
    }

    async fn save(
        &self,
        credential: &str,
        scope: Scope,
        payload: &SavePayload,
    ) -> Result<(), RemoteError> {
        self.save_schedule_as(credential, scope, payload)
            .await
            .map_err(RemoteError::from)
    }
}

impl From<ClientError> for RemoteError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Unauthorized { status, .. } => RemoteError::Unauthorized { status },
            other => RemoteError::Transport(other.to_string()),
        }
    }
}
