//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError`
//! from `shiftsync_core::storage`.

use shiftsync_core::storage::RepositoryError;

/// Maps a rusqlite error to a RepositoryError.
///
/// - Connection errors → `RepositoryError::ConnectionFailed`
/// - All other errors → `RepositoryError::QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error, id: &str) -> RepositoryError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if matches!(
                sqlite_err.code,
                rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
            ) =>
        {
            RepositoryError::ConnectionFailed(format!("Database unavailable: {err}"))
        }
        _ => RepositoryError::QueryFailed(format!("schedule {id}: {err}")),
    }
}

/// Maps a tokio_rusqlite error for the schedule document `id`.
pub fn map_tokio_rusqlite_error(err: tokio_rusqlite::Error, id: &str) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => map_rusqlite_error(rusqlite_err, id),
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite_failure(code: rusqlite::ErrorCode, extended_code: i32) -> tokio_rusqlite::Error {
        let sqlite_err = rusqlite::ffi::Error {
            code,
            extended_code,
        };
        tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, None))
    }

    #[test]
    fn test_cannot_open_maps_to_connection_failed() {
        let err = sqlite_failure(
            rusqlite::ErrorCode::CannotOpen,
            rusqlite::ffi::SQLITE_CANTOPEN,
        );

        let result = map_tokio_rusqlite_error(err, "dec_2025");

        assert!(matches!(result, RepositoryError::ConnectionFailed(_)));
    }

    #[test]
    fn test_busy_maps_to_connection_failed() {
        let err = sqlite_failure(
            rusqlite::ErrorCode::DatabaseBusy,
            rusqlite::ffi::SQLITE_BUSY,
        );

        let result = map_tokio_rusqlite_error(err, "dec_2025");

        assert!(matches!(result, RepositoryError::ConnectionFailed(_)));
    }

    #[test]
    fn test_other_failures_name_the_document() {
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::InvalidQuery);

        match map_tokio_rusqlite_error(err, "jan_2026") {
            RepositoryError::QueryFailed(message) => assert!(message.contains("jan_2026")),
            other => panic!("Expected QueryFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_connection_closed_maps_to_connection_failed() {
        let result = map_tokio_rusqlite_error(tokio_rusqlite::Error::ConnectionClosed, "dec_2025");

        assert!(matches!(result, RepositoryError::ConnectionFailed(_)));
    }

    #[test]
    fn test_other_error_maps_to_query_failed() {
        let err = tokio_rusqlite::Error::Other(Box::new(std::io::Error::other("test error")));

        let result = map_tokio_rusqlite_error(err, "dec_2025");

        assert!(matches!(result, RepositoryError::QueryFailed(_)));
    }
}
