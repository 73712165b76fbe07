use crate::calendar::{Scope, ScopeError};

/// Earliest year the persistence endpoint accepts.
pub const MIN_YEAR: i32 = 2020;
/// Latest year the persistence endpoint accepts.
pub const MAX_YEAR: i32 = 2100;

/// Validates a month/year pair received over the wire.
pub fn validate_remote_scope(month: u32, year: i32) -> Result<Scope, ScopeError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ScopeError::YearOutOfRange {
            year,
            min: MIN_YEAR,
            max: MAX_YEAR,
        });
    }
    Scope::new(year, month)
}
