use async_trait::async_trait;

use crate::calendar::Scope;
use crate::schedule::ScheduleList;

use super::Result;

/// Repository for per-month schedule documents.
///
/// Each scope holds at most one document. Writes replace the whole document.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Gets the stored schedule for a month, or `None` if nothing was saved yet.
    async fn get_schedule(&self, scope: Scope) -> Result<Option<ScheduleList>>;

    /// Stores the schedule for a month, replacing any previous document.
    async fn put_schedule(&self, scope: Scope, schedule: &ScheduleList) -> Result<()>;
}
