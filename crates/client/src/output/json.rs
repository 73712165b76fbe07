//! JSON output formatting.

use serde::Serialize;
use shiftsync_core::access::Role;
use shiftsync_core::calendar::DateKey;
use shiftsync_core::schedule::{DayStats, ScheduleEntry, ScheduleList};
use shiftsync_core::session::ScheduleSession;

/// Format a value as JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Machine-readable snapshot of the month being viewed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthView<'a> {
    pub month: u32,
    pub year: i32,
    pub role: Option<Role>,
    pub dirty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<&'a str>,
    pub schedule: &'a ScheduleList,
    pub stats: DayStats,
}

impl<'a> MonthView<'a> {
    pub fn from_session(session: &'a ScheduleSession) -> Self {
        let scope = session.scope();
        Self {
            month: scope.month(),
            year: scope.year(),
            role: session.role(),
            dirty: session.is_dirty(),
            banner: session.banner(),
            schedule: session.list(),
            stats: session.stats(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DayView<'a> {
    pub date: DateKey,
    pub entry: Option<&'a ScheduleEntry>,
}
