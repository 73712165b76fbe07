use std::{fmt, ops::RangeInclusive, str::FromStr};

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::ScopeError;
use super::operations::{
    days_in_month, first_weekday_offset, month_name, next_month, prev_month,
};

/// A calendar day identifying one schedule entry.
///
/// Serialized as a zero-padded `YYYY-MM-DD` string. Ordering is chronological,
/// which matches the lexicographic order of the serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Creates a key for the given calendar day, if it exists.
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Wraps an existing date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the month scope this day belongs to.
    pub fn scope(&self) -> Scope {
        Scope {
            year: self.0.year(),
            month: self.0.month(),
        }
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DateKey {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ScopeError::InvalidDateKey(s.to_string()))
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// A (year, month) pair identifying one independently persisted schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Scope {
    year: i32,
    month: u32,
}

impl Scope {
    /// Creates a scope, validating that the month is within 1-12.
    pub fn new(year: i32, month: u32) -> Result<Self, ScopeError> {
        if !(1..=12).contains(&month) {
            return Err(ScopeError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// Builds a scope from parts already known to be valid.
    pub(crate) const fn from_parts_unchecked(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Returns the scope containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the scope of the current local month.
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the following month, rolling over the year boundary.
    pub fn next(&self) -> Self {
        let (year, month) = next_month(self.year, self.month);
        Self { year, month }
    }

    /// Returns the preceding month, rolling over the year boundary.
    pub fn prev(&self) -> Self {
        let (year, month) = prev_month(self.year, self.month);
        Self { year, month }
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn first_weekday_offset(&self) -> u32 {
        first_weekday_offset(self.year, self.month)
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month).unwrap_or_default()
    }

    /// Day numbers valid in this month.
    pub fn days(&self) -> RangeInclusive<u32> {
        1..=self.days_in_month()
    }

    /// Returns the key for a day of this month, or `None` if the day does not exist.
    pub fn date_key(&self, day: u32) -> Option<DateKey> {
        DateKey::new(self.year, self.month, day)
    }

    /// Identifier of this month's persisted document, e.g. `dec_2025`.
    pub fn storage_id(&self) -> String {
        crate::storage::schedule_doc_id(*self)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Scope {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScopeError::InvalidFormat(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}
