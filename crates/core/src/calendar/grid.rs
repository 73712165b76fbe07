//! Monday-first month grid for rendering.

use chrono::NaiveDate;
use serde::Serialize;

use crate::schedule::{ScheduleEntry, ScheduleIndex};

use super::operations::is_same_day;
use super::types::{DateKey, Scope};

/// One rendered day of the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell<'a> {
    pub day: u32,
    pub date: DateKey,
    pub entry: Option<&'a ScheduleEntry>,
    pub is_today: bool,
}

/// A grid position: leading padding or a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GridCell<'a> {
    Blank,
    Day(DayCell<'a>),
}

impl<'a> GridCell<'a> {
    pub fn as_day(&self) -> Option<&DayCell<'a>> {
        match self {
            GridCell::Blank => None,
            GridCell::Day(cell) => Some(cell),
        }
    }
}

/// The cells of one month, row-major with seven columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid<'a> {
    pub scope: Scope,
    pub cells: Vec<GridCell<'a>>,
}

impl<'a> MonthGrid<'a> {
    /// Rows of at most seven cells. The last row is not padded.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell<'a>]> {
        self.cells.chunks(7)
    }

    /// Only the day cells, in day order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell<'a>> {
        self.cells.iter().filter_map(GridCell::as_day)
    }
}

/// Lays out the month: `first_weekday_offset` blanks, then one cell per day.
pub fn build_month_grid<'a>(
    scope: Scope,
    index: &ScheduleIndex<'a>,
    today: NaiveDate,
) -> MonthGrid<'a> {
    let blanks = (0..scope.first_weekday_offset()).map(|_| GridCell::Blank);
    let days = scope.days().filter_map(|day| {
        let date = scope.date_key(day)?;
        Some(GridCell::Day(DayCell {
            day,
            date,
            entry: index.get(&date),
            is_today: is_same_day(today, scope.year(), scope.month(), day),
        }))
    });

    MonthGrid {
        scope,
        cells: blanks.chain(days).collect(),
    }
}
