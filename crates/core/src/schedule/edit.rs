use serde::{Deserialize, Serialize};

use crate::calendar::DateKey;

use super::list::ScheduleList;
use super::types::{Location, PartnerCode, ScheduleEntry, WorkStatus};

/// Status, location and partner picked for a single day.
///
/// Location and partner are kept even while the status is `Off`, so switching
/// back to `Work` restores the previous choice. They are dropped when the
/// entry is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEdit {
    pub status: WorkStatus,
    pub location: Location,
    pub partner: PartnerCode,
}

impl Default for DayEdit {
    fn default() -> Self {
        Self {
            status: WorkStatus::Off,
            location: Location::Tastak,
            partner: PartnerCode::Man,
        }
    }
}

impl DayEdit {
    /// Pre-fills the edit from the day's current entry, or the defaults when
    /// the day has none.
    pub fn from_entry(entry: Option<&ScheduleEntry>) -> Self {
        let defaults = Self::default();
        match entry {
            Some(entry) => Self {
                status: entry.status,
                location: entry.location.unwrap_or(defaults.location),
                partner: entry.partner.unwrap_or(defaults.partner),
            },
            None => defaults,
        }
    }

    pub fn work(location: Location, partner: PartnerCode) -> Self {
        Self {
            status: WorkStatus::Work,
            location,
            partner,
        }
    }

    pub fn off() -> Self {
        Self::default()
    }

    /// Builds the entry this edit produces for the given day.
    pub fn to_entry(&self, date: DateKey) -> ScheduleEntry {
        ScheduleEntry::from_template(
            date,
            self.status,
            Some(self.location),
            Some(self.partner),
        )
    }
}

/// Writes exactly one entry for the given day, replacing any existing one.
///
/// Returns the entry that was replaced, if any. Applying the same edit twice
/// leaves the list as after the first application.
pub fn apply_day_edit(
    list: &mut ScheduleList,
    date: DateKey,
    edit: &DayEdit,
) -> Option<ScheduleEntry> {
    list.upsert(edit.to_entry(date))
}
