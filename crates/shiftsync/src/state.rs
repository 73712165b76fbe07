//! Application state with repository-based storage.
//!
//! The storage backend is chosen at compile time via feature flags; handlers
//! only see the `ScheduleRepository` trait object.

use std::{sync::Arc, time::Duration};

use shiftsync_core::access::AccessKeys;
use shiftsync_core::storage::ScheduleRepository;

use crate::config::Config;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!("Cannot enable both 'sqlite' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "sqlite")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'sqlite'");

/// Shared application state, cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Monthly schedule documents.
    pub schedules: Arc<dyn ScheduleRepository>,
    /// Keys that map a credential to a role.
    pub keys: Arc<AccessKeys>,
    /// Upper bound for a single request.
    pub request_timeout: Duration,
}

impl AppState {
    fn build(schedules: Arc<dyn ScheduleRepository>, config: &Config) -> Self {
        let keys = config.access_keys();
        if keys.is_empty() {
            tracing::warn!("neither ADMIN_KEY nor USER_KEY is set, every request will be rejected");
        }

        Self {
            schedules,
            keys: Arc::new(keys),
            request_timeout: config.request_timeout(),
        }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite_backend {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState backed by a SQLite database file.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            tracing::info!(path = %config.sqlite_path, "using SQLite storage");
            Ok(Self::build(repo, config))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage. Data is lost on restart.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!("using in-memory storage");
            Ok(Self::build(Arc::new(InMemoryRepository::new()), config))
        }
    }
}

// ============================================================================
// Test support
// ============================================================================
