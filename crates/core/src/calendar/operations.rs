//! Pure date arithmetic for the month view.
//!
//! Everything here is deterministic for its inputs. The only function that
//! reads the wall clock is [`is_today`], and it delegates to [`is_same_day`].

use chrono::{Datelike, Local, NaiveDate};

/// Russian month names, 1-indexed through [`month_name`].
const MONTH_NAMES: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

/// Column headers for a Monday-first week.
pub const WEEKDAY_LABELS: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];

/// Returns the number of days in the given month.
///
/// Computed as the day before the first of the following month, so leap years
/// fall out of the Gregorian rules in chrono. Returns 0 for a month outside 1-12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    if !(1..=12).contains(&month) {
        return 0;
    }
    let (next_year, next_month) = next_month(year, month);
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

/// Number of blank leading cells so the first grid column is Monday.
///
/// Monday maps to 0 and Sunday to 6. Returns 0 for an invalid month.
pub fn first_weekday_offset(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| first.weekday().num_days_from_monday())
        .unwrap_or(0)
}

/// Returns the localized month name for a 1-indexed month.
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
}

/// Returns the (year, month) after the given one, rolling December into January.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Returns the (year, month) before the given one, rolling January into December.
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Returns true if `today` falls on the given calendar day.
pub fn is_same_day(today: NaiveDate, year: i32, month: u32, day: u32) -> bool {
    today.year() == year && today.month() == month && today.day() == day
}

/// Returns true if the given calendar day is the current local date.
pub fn is_today(year: i32, month: u32, day: u32) -> bool {
    is_same_day(Local::now().date_naive(), year, month, day)
}
