mod bulk;
mod edit;
mod error;
mod index;
mod list;
mod seed;
mod selection;
mod stats;
mod types;

pub use bulk::{apply_bulk, delete_selected, BulkTemplate};
pub use edit::{apply_day_edit, DayEdit};
pub use error::ScheduleError;
pub use index::ScheduleIndex;
pub use list::ScheduleList;
pub use seed::{default_schedule, fallback_schedule, DEFAULT_SCOPE};
pub use selection::SelectionSet;
pub use stats::compute_stats;
pub use types::{DayStats, Location, PartnerCode, ScheduleEntry, WorkStatus};
