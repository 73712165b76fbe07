//! Map-backed schedule collection.
//!
//! Entries are keyed by [`DateKey`], so a list can never hold two entries for
//! the same day. Iteration and serialization are always in ascending date
//! order, which keeps persisted documents deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::calendar::DateKey;

use super::index::ScheduleIndex;
use super::types::ScheduleEntry;

/// The schedule of one month (or any set of days), at most one entry per day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleList {
    entries: BTreeMap<DateKey, ScheduleEntry>,
}

impl ScheduleList {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a schedule from an ordered sequence of entries.
    ///
    /// When a date appears more than once, the last entry wins.
    pub fn from_entries(entries: impl IntoIterator<Item = ScheduleEntry>) -> Self {
        let mut list = Self::new();
        for entry in entries {
            list.upsert(entry);
        }
        list
    }

    /// Inserts an entry, replacing any existing entry for the same date.
    ///
    /// Returns the replaced entry, if any.
    pub fn upsert(&mut self, entry: ScheduleEntry) -> Option<ScheduleEntry> {
        self.entries.insert(entry.date, entry)
    }

    /// Removes the entry for a date.
    pub fn remove(&mut self, date: &DateKey) -> Option<ScheduleEntry> {
        self.entries.remove(date)
    }

    pub fn get(&self, date: &DateKey) -> Option<&ScheduleEntry> {
        self.entries.get(date)
    }

    pub fn contains(&self, date: &DateKey) -> bool {
        self.entries.contains_key(date)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in ascending date order.
    pub fn entries(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.values()
    }

    /// Builds a fresh date index over the current entries.
    pub fn index(&self) -> ScheduleIndex<'_> {
        ScheduleIndex::build(self.entries.values())
    }
}

impl FromIterator<ScheduleEntry> for ScheduleList {
    fn from_iter<I: IntoIterator<Item = ScheduleEntry>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl Serialize for ScheduleList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.values())
    }
}

impl<'de> Deserialize<'de> for ScheduleList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<ScheduleEntry>::deserialize(deserializer)?;
        Ok(Self::from_entries(entries))
    }
}
