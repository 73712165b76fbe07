//! Output formatting functions.

pub mod json;
pub mod pretty;

use chrono::NaiveDate;
use shiftsync_core::calendar::DateKey;
use shiftsync_core::session::ScheduleSession;

use crate::cli::OutputFormat;

/// Format a value for output.
pub fn format_output<T: serde::Serialize>(value: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value).unwrap_or_default(),
    }
}

/// The month view: calendar grid, legend and statistics.
pub fn render_month(session: &ScheduleSession, today: NaiveDate, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(&json::MonthView::from_session(session)),
        OutputFormat::Pretty => pretty::format_month(session, today),
    }
}

/// Details of one day of the session's month.
pub fn render_day(session: &ScheduleSession, date: DateKey, format: OutputFormat) -> String {
    let entry = session.list().get(&date);
    match format {
        OutputFormat::Json => json::format_json(&json::DayView { date, entry }),
        OutputFormat::Pretty => pretty::format_day(date, entry),
    }
}

pub fn render_stats(session: &ScheduleSession, format: OutputFormat) -> String {
    let stats = session.stats();
    match format {
        OutputFormat::Json => json::format_json(&stats),
        OutputFormat::Pretty => pretty::format_stats(&stats),
    }
}
