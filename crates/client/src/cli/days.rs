//! Day lists given on the command line: `all`, `5`, `1,2,10-14`.

use std::collections::BTreeSet;
use std::str::FromStr;

/// A set of day numbers, or every day of the month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DaySpec {
    All,
    Days(BTreeSet<u32>),
}

impl DaySpec {
    /// Day numbers that exist in a month of `days_in_month` days.
    pub fn resolve(&self, days_in_month: u32) -> Vec<u32> {
        match self {
            DaySpec::All => (1..=days_in_month).collect(),
            DaySpec::Days(days) => days
                .iter()
                .copied()
                .filter(|day| (1..=days_in_month).contains(day))
                .collect(),
        }
    }
}

impl FromStr for DaySpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(DaySpec::All);
        }

        let mut days = BTreeSet::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part.split_once('-') {
                Some((start, end)) => {
                    let start = parse_day(start)?;
                    let end = parse_day(end)?;
                    if start > end {
                        return Err(format!("range {part} is reversed"));
                    }
                    days.extend(start..=end);
                }
                None => {
                    days.insert(parse_day(part)?);
                }
            }
        }

        if days.is_empty() {
            return Err("no days given".to_string());
        }
        Ok(DaySpec::Days(days))
    }
}

fn parse_day(s: &str) -> Result<u32, String> {
    let day: u32 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid day: {s}"))?;
    if !(1..=31).contains(&day) {
        return Err(format!("day must be between 1 and 31, got {day}"));
    }
    Ok(day)
}
