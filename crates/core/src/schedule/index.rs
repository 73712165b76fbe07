use std::collections::HashMap;

use crate::calendar::DateKey;

use super::types::ScheduleEntry;

/// Read-only lookup from date to schedule entry.
///
/// Always built from scratch over a sequence of entries and never patched, so
/// it cannot go stale relative to the list it was built from.
#[derive(Debug, Clone, Default)]
pub struct ScheduleIndex<'a> {
    by_date: HashMap<DateKey, &'a ScheduleEntry>,
}

impl<'a> ScheduleIndex<'a> {
    /// Builds the index. If a date appears more than once, the last entry wins.
    pub fn build(entries: impl IntoIterator<Item = &'a ScheduleEntry>) -> Self {
        let by_date = entries.into_iter().map(|entry| (entry.date, entry)).collect();
        Self { by_date }
    }

    pub fn get(&self, date: &DateKey) -> Option<&'a ScheduleEntry> {
        self.by_date.get(date).copied()
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
