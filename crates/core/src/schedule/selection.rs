use std::collections::BTreeSet;

use crate::calendar::{DateKey, Scope};

use super::error::ScheduleError;

/// Day numbers picked for a bulk edit, bound to one month.
///
/// A selection never spans months; switching months means starting a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet {
    scope: Scope,
    days: BTreeSet<u32>,
}

impl SelectionSet {
    /// Creates an empty selection for the given month.
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            days: BTreeSet::new(),
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Adds the day if absent, removes it if present.
    ///
    /// Returns whether the day is selected afterwards.
    pub fn toggle(&mut self, day: u32) -> Result<bool, ScheduleError> {
        self.check_day(day)?;
        if self.days.remove(&day) {
            Ok(false)
        } else {
            self.days.insert(day);
            Ok(true)
        }
    }

    /// Replaces the selection with every day from 1 to `total_days`.
    pub fn select_all(&mut self, total_days: u32) {
        let total_days = total_days.min(self.scope.days_in_month());
        self.days = (1..=total_days).collect();
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        self.days.clear();
    }

    pub fn contains(&self, day: u32) -> bool {
        self.days.contains(&day)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Selected day numbers in ascending order.
    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.days.iter().copied()
    }

    /// Date keys of the selected days in this selection's month.
    pub fn date_keys(&self) -> impl Iterator<Item = DateKey> + '_ {
        self.days.iter().filter_map(|day| self.scope.date_key(*day))
    }

    fn check_day(&self, day: u32) -> Result<(), ScheduleError> {
        let days_in_month = self.scope.days_in_month();
        if day == 0 || day > days_in_month {
            return Err(ScheduleError::DayOutOfRange { day, days_in_month });
        }
        Ok(())
    }
}
