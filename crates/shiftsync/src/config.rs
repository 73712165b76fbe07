use std::{env, time::Duration};

use shiftsync_core::access::AccessKeys;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Key granting the admin role (read and save).
    pub admin_key: Option<String>,
    /// Key granting the user role (read only).
    pub user_key: Option<String>,
    /// Path to SQLite database file (default: "shiftsync.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ADMIN_KEY` - Admin access key (unset: nobody is admin)
    /// - `USER_KEY` - Read-only access key (unset: nobody is user)
    /// - `SQLITE_PATH` - SQLite database path (default: "shiftsync.db")
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self {
            admin_key: env::var("ADMIN_KEY").ok(),
            user_key: env::var("USER_KEY").ok(),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "shiftsync.db".to_string()),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    pub fn access_keys(&self) -> AccessKeys {
        AccessKeys::new(self.admin_key.clone(), self.user_key.clone())
    }

    /// Get request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
