//! Storage backend implementations.
//!
//! Concrete implementations of `shiftsync_core::storage::ScheduleRepository`,
//! selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): documents live in a `HashMap`, lost on restart
//! - `sqlite`: SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//!
//! Build with SQLite:
//! ```bash
//! cargo build -p shiftsync --no-default-features --features sqlite
//! ```

// The in-memory backend also backs the router tests of every build.
#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(any(feature = "inmemory", test))]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
