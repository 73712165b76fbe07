//! Schedule operations.

use shiftsync_core::calendar::Scope;
use shiftsync_core::schedule::ScheduleList;
use shiftsync_core::session::{FetchResponse, SavePayload, SaveResponse};

use super::ShiftsyncClient;
use crate::error::{ClientError, Result};

impl ShiftsyncClient {
    /// Fetch the stored schedule of a month with this client's key.
    pub async fn fetch_schedule(&self, scope: Scope) -> Result<FetchResponse> {
        self.fetch_schedule_as(&self.key, scope).await
    }

    /// Replace the stored schedule of a month with this client's key.
    pub async fn save_schedule(&self, scope: Scope, schedule: &ScheduleList) -> Result<()> {
        let payload = SavePayload {
            schedule: schedule.clone(),
        };
        self.save_schedule_as(&self.key, scope, &payload).await
    }

    pub(crate) async fn fetch_schedule_as(&self, key: &str, scope: Scope) -> Result<FetchResponse> {
        let response = self
            .client
            .get(self.url("/api/schedule"))
            .query(&schedule_query(key, scope))
            .send()
            .await?;
        self.handle_response(response).await
    }

    pub(crate) async fn save_schedule_as(
        &self,
        key: &str,
        scope: Scope,
        payload: &SavePayload,
    ) -> Result<()> {
        let response = self
            .client
            .post(self.url("/api/schedule"))
            .query(&schedule_query(key, scope))
            .json(payload)
            .send()
            .await?;
        let body: SaveResponse = self.handle_response(response).await?;
        if body.success {
            Ok(())
        } else {
            Err(ClientError::InvalidResponse(
                "server did not confirm the save".to_string(),
            ))
        }
    }
}

fn schedule_query(key: &str, scope: Scope) -> [(&'static str, String); 3] {
    [
        ("key", key.to_string()),
        ("month", scope.month().to_string()),
        ("year", scope.year().to_string()),
    ]
}
