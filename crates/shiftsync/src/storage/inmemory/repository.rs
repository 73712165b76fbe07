//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use shiftsync_core::calendar::Scope;
use shiftsync_core::schedule::ScheduleList;
use shiftsync_core::storage::{Result, ScheduleRepository};

/// A stored month, as the document store keeps it.
#[derive(Debug, Clone)]
struct StoredSchedule {
    data: ScheduleList,
    updated_at: DateTime<Utc>,
}

/// In-memory storage backend.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    documents: Arc<RwLock<HashMap<String, StoredSchedule>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// When the month was last saved.
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn updated_at(&self, scope: Scope) -> Option<DateTime<Utc>> {
        let documents = self.documents.read().await;
        documents.get(&scope.storage_id()).map(|doc| doc.updated_at)
    }
}

#[async_trait]
impl ScheduleRepository for InMemoryRepository {
    async fn get_schedule(&self, scope: Scope) -> Result<Option<ScheduleList>> {
        let documents = self.documents.read().await;
        Ok(documents.get(&scope.storage_id()).map(|doc| doc.data.clone()))
    }

    async fn put_schedule(&self, scope: Scope, schedule: &ScheduleList) -> Result<()> {
        let mut documents = self.documents.write().await;
        documents.insert(
            scope.storage_id(),
            StoredSchedule {
                data: schedule.clone(),
                updated_at: Utc::now(),
            },
        );
        Ok(())
    }
}
