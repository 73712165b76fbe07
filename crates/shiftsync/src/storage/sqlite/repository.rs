//! SQLite repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use tokio_rusqlite::Connection;

use shiftsync_core::calendar::Scope;
use shiftsync_core::schedule::ScheduleList;
use shiftsync_core::storage::{RepositoryError, Result, ScheduleRepository};

use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based schedule storage.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens (or creates) a file-based database and its schema.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a repository over an in-memory database.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    /// When the month was last saved, as stored (RFC 3339).
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn updated_at(&self, scope: Scope) -> Result<Option<String>> {
        self.select_column(schema::SELECT_UPDATED_AT, scope.storage_id())
            .await
    }

    async fn select_column(&self, sql: &'static str, id: String) -> Result<Option<String>> {
        let doc_id = id.clone();
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
                match stmt.query_row([&id], |row| row.get::<_, String>(0)) {
                    Ok(value) => Ok(Some(value)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, &doc_id))
    }
}

#[async_trait]
impl ScheduleRepository for SqliteRepository {
    async fn get_schedule(&self, scope: Scope) -> Result<Option<ScheduleList>> {
        let data = self
            .select_column(schema::SELECT_SCHEDULE, scope.storage_id())
            .await?;

        data.map(|json| {
            serde_json::from_str::<ScheduleList>(&json)
                .map_err(|e| RepositoryError::Serialization(e.to_string()))
        })
        .transpose()
    }

    async fn put_schedule(&self, scope: Scope, schedule: &ScheduleList) -> Result<()> {
        let id = scope.storage_id();
        let doc_id = id.clone();
        let data = serde_json::to_string(schedule)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        let updated_at = Utc::now().to_rfc3339();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::UPSERT_SCHEDULE,
                    rusqlite::params![id, data, updated_at],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, &doc_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiftsync_core::schedule::{
        apply_day_edit, default_schedule, DayEdit, Location, PartnerCode, DEFAULT_SCOPE,
    };

    #[tokio::test]
    async fn test_missing_month_is_none() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        assert_eq!(repo.get_schedule(DEFAULT_SCOPE).await.unwrap(), None);
        assert_eq!(repo.updated_at(DEFAULT_SCOPE).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_then_get_round_trips() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let schedule = default_schedule();

        repo.put_schedule(DEFAULT_SCOPE, &schedule).await.unwrap();

        assert_eq!(
            repo.get_schedule(DEFAULT_SCOPE).await.unwrap(),
            Some(schedule)
        );
        assert!(repo.updated_at(DEFAULT_SCOPE).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_second_put_replaces_the_row() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        repo.put_schedule(DEFAULT_SCOPE, &default_schedule())
            .await
            .unwrap();

        let mut edited = default_schedule();
        apply_day_edit(
            &mut edited,
            DEFAULT_SCOPE.date_key(3).unwrap(),
            &DayEdit::work(Location::Saryarka, PartnerCode::G),
        );
        repo.put_schedule(DEFAULT_SCOPE, &edited).await.unwrap();

        assert_eq!(
            repo.get_schedule(DEFAULT_SCOPE).await.unwrap(),
            Some(edited)
        );
    }

    #[tokio::test]
    async fn test_months_do_not_share_rows() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        repo.put_schedule(DEFAULT_SCOPE, &default_schedule())
            .await
            .unwrap();

        assert_eq!(repo.get_schedule(DEFAULT_SCOPE.next()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_row_is_serialization_error() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        repo.conn
            .call(|conn| {
                conn.execute(
                    schema::UPSERT_SCHEDULE,
                    rusqlite::params!["dec_2025", "{not json", "2025-12-01T00:00:00Z"],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .unwrap();

        assert!(matches!(
            repo.get_schedule(DEFAULT_SCOPE).await,
            Err(RepositoryError::Serialization(_))
        ));
    }
}
