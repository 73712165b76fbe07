//! Built-in schedule data.
//!
//! The December 2025 schedule ships with the application and is used whenever
//! that month has nothing stored remotely.

use crate::calendar::{DateKey, Scope};

use super::list::ScheduleList;
use super::types::{Location, PartnerCode, ScheduleEntry};

/// The month the built-in schedule covers.
pub const DEFAULT_SCOPE: Scope = Scope::from_parts_unchecked(2025, 12);

/// One seed row: day, then site and partner for working days.
type SeedDay = (u32, Option<(Location, PartnerCode)>);

const SEED_DAYS: [SeedDay; 31] = {
    use Location::{Saryarka as S, Tastak as T};
    use PartnerCode::{Man, A, G, MD};
    [
        (1, Some((T, Man))),
        (2, Some((T, A))),
        (3, None),
        (4, None),
        (5, Some((S, MD))),
        (6, Some((S, MD))),
        (7, Some((T, A))),
        (8, Some((T, Man))),
        (9, None),
        (10, None),
        (11, Some((S, G))),
        (12, Some((S, MD))),
        (13, Some((T, Man))),
        (14, Some((T, A))),
        (15, None),
        (16, None),
        (17, Some((S, MD))),
        (18, Some((S, MD))),
        (19, Some((T, A))),
        (20, Some((T, Man))),
        (21, None),
        (22, None),
        (23, Some((S, MD))),
        (24, Some((S, MD))),
        (25, Some((T, Man))),
        (26, Some((T, A))),
        (27, None),
        (28, None),
        (29, Some((S, G))),
        (30, Some((S, MD))),
        (31, Some((T, A))),
    ]
};

/// Returns the built-in December 2025 schedule (31 entries).
pub fn default_schedule() -> ScheduleList {
    SEED_DAYS
        .iter()
        .filter_map(|(day, work)| {
            let date = DEFAULT_SCOPE.date_key(*day)?;
            Some(seed_entry(date, *work))
        })
        .collect()
}

/// The schedule to show when a month has no remote data or cannot be fetched:
/// the built-in data for [`DEFAULT_SCOPE`], an empty schedule otherwise.
pub fn fallback_schedule(scope: Scope) -> ScheduleList {
    if scope == DEFAULT_SCOPE {
        default_schedule()
    } else {
        ScheduleList::new()
    }
}

fn seed_entry(date: DateKey, work: Option<(Location, PartnerCode)>) -> ScheduleEntry {
    match work {
        Some((location, partner)) => ScheduleEntry::work(date, location, partner),
        None => ScheduleEntry::off(date),
    }
}
