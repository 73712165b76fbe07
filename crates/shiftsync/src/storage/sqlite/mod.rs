//! SQLite storage backend implementation.
//!
//! Uses `rusqlite` for synchronous operations and `tokio-rusqlite` for async
//! wrapping. Each month is one row holding the schedule as a JSON array.

mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
