use thiserror::Error;

/// Errors that can occur when constructing or parsing a month scope or date key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScopeError {
    #[error("Month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
    #[error("Year must be between {min} and {max}, got {year}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },
    #[error("Invalid month format (expected YYYY-MM): {0}")]
    InvalidFormat(String),
    #[error("Invalid date key (expected YYYY-MM-DD): {0}")]
    InvalidDateKey(String),
}
