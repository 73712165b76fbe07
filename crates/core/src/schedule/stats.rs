use super::types::{DayStats, Location, ScheduleEntry, WorkStatus};

/// Counts work, off and per-site days in a single pass.
///
/// A working day without a recognised location only counts towards
/// `work_days`. Malformed entries never cause an error.
pub fn compute_stats<'a>(entries: impl IntoIterator<Item = &'a ScheduleEntry>) -> DayStats {
    entries
        .into_iter()
        .fold(DayStats::default(), |mut stats, entry| {
            match entry.status {
                WorkStatus::Off => stats.off_days += 1,
                WorkStatus::Work => {
                    stats.work_days += 1;
                    match entry.location {
                        Some(Location::Tastak) => stats.tastak_days += 1,
                        Some(Location::Saryarka) => stats.saryarka_days += 1,
                        None => {}
                    }
                }
            }
            stats
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::DateKey;
    use crate::schedule::default_schedule;

    #[test]
    fn test_seed_dataset_stats() {
        let stats = compute_stats(default_schedule().entries());

        assert_eq!(stats.work_days, 21);
        assert_eq!(stats.off_days, 10);
        assert_eq!(stats.tastak_days + stats.saryarka_days, stats.work_days);
        assert_eq!(stats.tastak_days, 11);
        assert_eq!(stats.saryarka_days, 10);
    }

    #[test]
    fn test_empty_schedule() {
        let entries: Vec<ScheduleEntry> = Vec::new();
        assert_eq!(compute_stats(&entries), DayStats::default());
    }

    #[test]
    fn test_work_without_location_counts_only_work_days() {
        let entries = vec![ScheduleEntry {
            date: DateKey::new(2025, 12, 1).unwrap(),
            status: WorkStatus::Work,
            location: None,
            partner: None,
        }];

        let stats = compute_stats(&entries);

        assert_eq!(stats.work_days, 1);
        assert_eq!(stats.tastak_days, 0);
        assert_eq!(stats.saryarka_days, 0);
        assert_eq!(stats.off_days, 0);
    }
}
