//! Bulk edits over a day selection.

use serde::{Deserialize, Serialize};

use crate::calendar::DateKey;

use super::error::ScheduleError;
use super::list::ScheduleList;
use super::selection::SelectionSet;
use super::types::{Location, PartnerCode, ScheduleEntry, WorkStatus};

/// The (status, location, partner) triple applied to every selected day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkTemplate {
    pub status: WorkStatus,
    pub location: Option<Location>,
    pub partner: Option<PartnerCode>,
}

impl Default for BulkTemplate {
    fn default() -> Self {
        Self::work(Location::Tastak, PartnerCode::Man)
    }
}

impl BulkTemplate {
    pub fn work(location: Location, partner: PartnerCode) -> Self {
        Self {
            status: WorkStatus::Work,
            location: Some(location),
            partner: Some(partner),
        }
    }

    pub fn off() -> Self {
        Self {
            status: WorkStatus::Off,
            location: None,
            partner: None,
        }
    }

    fn entry_for(&self, date: DateKey) -> ScheduleEntry {
        ScheduleEntry::from_template(date, self.status, self.location, self.partner)
    }
}

/// Writes the template to every selected day of the selection's month.
///
/// Existing entries for those days are replaced, missing ones are added.
/// Returns the number of days written, which equals the selection size.
pub fn apply_bulk(
    list: &mut ScheduleList,
    selection: &SelectionSet,
    template: &BulkTemplate,
) -> Result<usize, ScheduleError> {
    if selection.is_empty() {
        return Err(ScheduleError::EmptySelection);
    }

    let mut applied = 0;
    for date in selection.date_keys() {
        list.upsert(template.entry_for(date));
        applied += 1;
    }
    Ok(applied)
}

/// Removes the entries of every selected day of the selection's month.
///
/// Returns the number of entries actually removed. Days without an entry are
/// skipped.
pub fn delete_selected(
    list: &mut ScheduleList,
    selection: &SelectionSet,
) -> Result<usize, ScheduleError> {
    if selection.is_empty() {
        return Err(ScheduleError::EmptySelection);
    }

    Ok(selection
        .date_keys()
        .filter(|date| list.remove(date).is_some())
        .count())
}
