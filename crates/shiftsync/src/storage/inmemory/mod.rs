//! In-memory storage backend.
//!
//! Stores one document per month in a `HashMap` keyed by the storage id
//! (`dec_2025`). Data is not persisted.

mod repository;

pub use repository::InMemoryRepository;
