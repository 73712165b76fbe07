use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::calendar::DateKey;
use crate::serde::deserialize_lenient_option;

/// Whether a day is a working day or a day off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkStatus {
    Work,
    Off,
}

impl WorkStatus {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            WorkStatus::Work => "Рабочий день",
            WorkStatus::Off => "Выходной",
        }
    }

    pub fn is_work(&self) -> bool {
        matches!(self, WorkStatus::Work)
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkStatus::Work => f.write_str("work"),
            WorkStatus::Off => f.write_str("off"),
        }
    }
}

impl FromStr for WorkStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "work" | "w" => Ok(WorkStatus::Work),
            "off" | "o" => Ok(WorkStatus::Off),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

/// The site a working day takes place at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "Тастак")]
    Tastak,
    #[serde(rename = "Сарыарка")]
    Saryarka,
}

impl Location {
    pub const ALL: [Location; 2] = [Location::Tastak, Location::Saryarka];

    /// The name as stored in schedule documents.
    pub fn label(&self) -> &'static str {
        match self {
            Location::Tastak => "Тастак",
            Location::Saryarka => "Сарыарка",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Тастак" => Ok(Location::Tastak),
            "Сарыарка" => Ok(Location::Saryarka),
            other => match other.to_lowercase().as_str() {
                "tastak" | "a" => Ok(Location::Tastak),
                "saryarka" | "b" => Ok(Location::Saryarka),
                _ => Err(format!("unknown location: {other}")),
            },
        }
    }
}

/// Short code of the colleague sharing a working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartnerCode {
    #[serde(rename = "Ман")]
    Man,
    #[serde(rename = "А")]
    A,
    #[serde(rename = "М.Д.")]
    MD,
    #[serde(rename = "Г")]
    G,
}

impl PartnerCode {
    pub const ALL: [PartnerCode; 4] = [
        PartnerCode::Man,
        PartnerCode::A,
        PartnerCode::MD,
        PartnerCode::G,
    ];

    /// The code as stored in schedule documents.
    pub fn code(&self) -> &'static str {
        match self {
            PartnerCode::Man => "Ман",
            PartnerCode::A => "А",
            PartnerCode::MD => "М.Д.",
            PartnerCode::G => "Г",
        }
    }

    /// Full name shown in day details.
    pub fn display_name(&self) -> &'static str {
        match self {
            PartnerCode::Man => "Маншук",
            PartnerCode::A => "Аида",
            PartnerCode::MD => "Марина",
            PartnerCode::G => "Гульнара",
        }
    }
}

impl fmt::Display for PartnerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PartnerCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(partner) = PartnerCode::ALL.into_iter().find(|p| p.code() == trimmed) {
            return Ok(partner);
        }
        match trimmed.to_lowercase().as_str() {
            "man" | "manshuk" => Ok(PartnerCode::Man),
            "a" | "aida" => Ok(PartnerCode::A),
            "md" | "m.d." | "marina" => Ok(PartnerCode::MD),
            "g" | "gulnara" => Ok(PartnerCode::G),
            other => Err(format!("unknown partner: {other}")),
        }
    }
}

/// One day of the schedule.
///
/// An `Off` entry never carries location or partner. A `Work` entry normally
/// carries both, but documents without them are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date: DateKey,
    pub status: WorkStatus,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_lenient_option"
    )]
    pub location: Option<Location>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_lenient_option"
    )]
    pub partner: Option<PartnerCode>,
}

impl ScheduleEntry {
    /// Creates a working day at the given site with the given partner.
    pub fn work(date: DateKey, location: Location, partner: PartnerCode) -> Self {
        Self {
            date,
            status: WorkStatus::Work,
            location: Some(location),
            partner: Some(partner),
        }
    }

    /// Creates a day off.
    pub fn off(date: DateKey) -> Self {
        Self {
            date,
            status: WorkStatus::Off,
            location: None,
            partner: None,
        }
    }

    /// Builds an entry from a (status, location, partner) selection.
    ///
    /// Location and partner are dropped for `Off`, even if the selection still
    /// holds values from an earlier `Work` choice.
    pub fn from_template(
        date: DateKey,
        status: WorkStatus,
        location: Option<Location>,
        partner: Option<PartnerCode>,
    ) -> Self {
        match status {
            WorkStatus::Off => Self::off(date),
            WorkStatus::Work => Self {
                date,
                status,
                location,
                partner,
            },
        }
    }

    pub fn is_work(&self) -> bool {
        self.status.is_work()
    }
}

/// Per-category day counts over one schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStats {
    pub work_days: u32,
    pub off_days: u32,
    pub tastak_days: u32,
    pub saryarka_days: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(day: u32) -> DateKey {
        DateKey::new(2025, 12, day).unwrap()
    }

    #[test]
    fn test_entry_wire_format_work() {
        let entry = ScheduleEntry::work(key(1), Location::Tastak, PartnerCode::Man);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "date": "2025-12-01",
                "status": "work",
                "location": "Тастак",
                "partner": "Ман"
            })
        );
    }

    #[test]
    fn test_entry_wire_format_off_omits_metadata() {
        let entry = ScheduleEntry::off(key(3));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "date": "2025-12-03", "status": "off" })
        );
    }

    #[test]
    fn test_entry_with_unknown_location_decodes_leniently() {
        let json = r#"{"date":"2025-12-05","status":"work","location":"Алматы","partner":"М.Д."}"#;
        let entry: ScheduleEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.status, WorkStatus::Work);
        assert_eq!(entry.location, None);
        assert_eq!(entry.partner, Some(PartnerCode::MD));
    }

    #[test]
    fn test_entry_with_non_string_metadata_decodes_leniently() {
        let json = r#"{"date":"2025-12-05","status":"work","location":5,"partner":{"code":"Г"}}"#;
        let entry: ScheduleEntry = serde_json::from_str(json).unwrap();
        assert!(entry.is_work());
        assert_eq!(entry.location, None);
        assert_eq!(entry.partner, None);
    }

    #[test]
    fn test_work_entry_without_metadata_is_accepted() {
        let json = r#"{"date":"2025-12-05","status":"work"}"#;
        let entry: ScheduleEntry = serde_json::from_str(json).unwrap();
        assert!(entry.is_work());
        assert_eq!(entry.location, None);
        assert_eq!(entry.partner, None);
    }

    #[test]
    fn test_from_template_off_strips_metadata() {
        let entry = ScheduleEntry::from_template(
            key(2),
            WorkStatus::Off,
            Some(Location::Saryarka),
            Some(PartnerCode::G),
        );
        assert_eq!(entry, ScheduleEntry::off(key(2)));
    }

    #[test]
    fn test_partner_display_names() {
        assert_eq!(PartnerCode::G.display_name(), "Гульнара");
        assert_eq!(PartnerCode::A.display_name(), "Аида");
        assert_eq!(PartnerCode::MD.display_name(), "Марина");
        assert_eq!(PartnerCode::Man.display_name(), "Маншук");
    }

    #[test]
    fn test_parse_accepts_wire_and_ascii_names() {
        assert_eq!("Сарыарка".parse::<Location>(), Ok(Location::Saryarka));
        assert_eq!("tastak".parse::<Location>(), Ok(Location::Tastak));
        assert_eq!("М.Д.".parse::<PartnerCode>(), Ok(PartnerCode::MD));
        assert_eq!("md".parse::<PartnerCode>(), Ok(PartnerCode::MD));
        assert_eq!("WORK".parse::<WorkStatus>(), Ok(WorkStatus::Work));
        assert!("elsewhere".parse::<Location>().is_err());
    }

    #[test]
    fn test_day_stats_wire_format() {
        let stats = DayStats {
            work_days: 2,
            off_days: 1,
            tastak_days: 1,
            saryarka_days: 1,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "workDays": 2,
                "offDays": 1,
                "tastakDays": 1,
                "saryarkaDays": 1
            })
        );
    }
}
