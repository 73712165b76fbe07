mod error;
mod grid;
mod operations;
mod types;

pub use error::ScopeError;
pub use grid::{build_month_grid, DayCell, GridCell, MonthGrid};
pub use operations::{
    days_in_month, first_weekday_offset, is_same_day, is_today, month_name, next_month,
    prev_month, WEEKDAY_LABELS,
};
pub use types::{DateKey, Scope};
