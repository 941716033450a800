//! Schedule document model and related types.
//!
//! This module defines the structured weekly schedule produced by the
//! schedule text parser: a location header, a week date range, and one
//! entry per employee mapping days of the week to shift time ranges.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// A day of the scheduling week, Monday-first.
///
/// The ordering is significant: day slots in a parsed employee row are
/// assigned Monday through Sunday, and [`DayOfWeek::offset_from_monday`]
/// anchors each day to a concrete date relative to the week start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    /// Monday, offset 0 from the week start.
    Monday,
    /// Tuesday, offset 1.
    Tuesday,
    /// Wednesday, offset 2.
    Wednesday,
    /// Thursday, offset 3.
    Thursday,
    /// Friday, offset 4.
    Friday,
    /// Saturday, offset 5.
    Saturday,
    /// Sunday, offset 6.
    Sunday,
}

impl DayOfWeek {
    /// All seven days in natural Monday-first order.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Returns the day offset from a Monday week start (Monday=0..Sunday=6).
    pub fn offset_from_monday(self) -> i64 {
        match self {
            DayOfWeek::Monday => 0,
            DayOfWeek::Tuesday => 1,
            DayOfWeek::Wednesday => 2,
            DayOfWeek::Thursday => 3,
            DayOfWeek::Friday => 4,
            DayOfWeek::Saturday => 5,
            DayOfWeek::Sunday => 6,
        }
    }

    /// Parses a day name, accepting full names and common abbreviations
    /// ("Monday", "monday", "Mon", "Tues", ...). Returns `None` for
    /// anything that is not a day name.
    pub fn from_prefix(token: &str) -> Option<DayOfWeek> {
        let token = token.trim().trim_end_matches('.').to_ascii_lowercase();
        let day = match token.as_str() {
            "monday" | "mon" => DayOfWeek::Monday,
            "tuesday" | "tue" | "tues" => DayOfWeek::Tuesday,
            "wednesday" | "wed" => DayOfWeek::Wednesday,
            "thursday" | "thu" | "thur" | "thurs" => DayOfWeek::Thursday,
            "friday" | "fri" => DayOfWeek::Friday,
            "saturday" | "sat" => DayOfWeek::Saturday,
            "sunday" | "sun" => DayOfWeek::Sunday,
            _ => return None,
        };
        Some(day)
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for DayOfWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayOfWeek::from_prefix(s).ok_or_else(|| format!("not a day name: '{}'", s))
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

/// A single shift's start and end time within one day's column.
///
/// Both times are always present. An overnight range (`end <= start` in
/// minute-of-day terms) is a valid and expected state, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// The shift start time (already normalized to 24-hour form).
    pub start_time: NaiveTime,
    /// The shift end time (already normalized to 24-hour form).
    pub end_time: NaiveTime,
}

impl TimeRange {
    /// Returns true when the range crosses midnight, i.e. the end minute
    /// of day is at or before the start minute of day.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::models::TimeRange;
    /// use chrono::NaiveTime;
    ///
    /// let overnight = TimeRange {
    ///     start_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///     end_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    /// };
    /// assert!(overnight.is_overnight());
    /// ```
    pub fn is_overnight(&self) -> bool {
        minute_of_day(self.end_time) <= minute_of_day(self.start_time)
    }
}

/// Returns the minute-of-day (0..=1439) for a time.
pub(crate) fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// One employee's parsed weekly schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSchedule {
    /// The employee name as it appeared in the schedule text.
    pub name: String,
    /// The role section the employee was listed under (e.g. "Cook").
    pub role: String,
    /// Day-to-time-range entries; a missing day means no shift that day.
    pub schedule: BTreeMap<DayOfWeek, TimeRange>,
}

/// A fully parsed weekly schedule document.
///
/// Created once per parse and immutable afterwards; downstream stages
/// only read from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDocument {
    /// The location name from the schedule header.
    pub location: String,
    /// The numeric location code from the schedule header.
    pub location_code: String,
    /// The Monday the scheduling week starts on.
    pub week_start: NaiveDate,
    /// The Sunday the scheduling week ends on.
    pub week_end: NaiveDate,
    /// One entry per recognized employee row.
    pub employees: Vec<EmployeeSchedule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_day_offsets_are_monday_first() {
        assert_eq!(DayOfWeek::Monday.offset_from_monday(), 0);
        assert_eq!(DayOfWeek::Sunday.offset_from_monday(), 6);
        for (i, day) in DayOfWeek::ALL.iter().enumerate() {
            assert_eq!(day.offset_from_monday(), i as i64);
        }
    }

    #[test]
    fn test_from_prefix_accepts_full_names_and_abbreviations() {
        assert_eq!(DayOfWeek::from_prefix("Monday"), Some(DayOfWeek::Monday));
        assert_eq!(DayOfWeek::from_prefix("mon"), Some(DayOfWeek::Monday));
        assert_eq!(DayOfWeek::from_prefix("Tues"), Some(DayOfWeek::Tuesday));
        assert_eq!(DayOfWeek::from_prefix("WED."), Some(DayOfWeek::Wednesday));
        assert_eq!(DayOfWeek::from_prefix("Thur"), Some(DayOfWeek::Thursday));
        assert_eq!(DayOfWeek::from_prefix("sun"), Some(DayOfWeek::Sunday));
        assert_eq!(DayOfWeek::from_prefix("Monring"), None);
        assert_eq!(DayOfWeek::from_prefix(""), None);
    }

    #[test]
    fn test_day_of_week_display() {
        assert_eq!(DayOfWeek::Monday.to_string(), "Monday");
        assert_eq!(DayOfWeek::Sunday.to_string(), "Sunday");
    }

    #[test]
    fn test_day_of_week_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&DayOfWeek::Wednesday).unwrap(),
            "\"wednesday\""
        );
        let day: DayOfWeek = serde_json::from_str("\"saturday\"").unwrap();
        assert_eq!(day, DayOfWeek::Saturday);
    }

    #[test]
    fn test_day_of_week_from_chrono_weekday() {
        assert_eq!(DayOfWeek::from(Weekday::Mon), DayOfWeek::Monday);
        assert_eq!(DayOfWeek::from(Weekday::Sun), DayOfWeek::Sunday);
    }

    #[test]
    fn test_overnight_detection() {
        let same_day = TimeRange {
            start_time: time(9, 0),
            end_time: time(17, 0),
        };
        assert!(!same_day.is_overnight());

        let overnight = TimeRange {
            start_time: time(22, 0),
            end_time: time(6, 0),
        };
        assert!(overnight.is_overnight());

        // Equal start and end counts as overnight per the minute-of-day rule.
        let zero_length = TimeRange {
            start_time: time(9, 0),
            end_time: time(9, 0),
        };
        assert!(zero_length.is_overnight());
    }

    #[test]
    fn test_time_range_serializes_to_hms_strings() {
        let range = TimeRange {
            start_time: time(6, 30),
            end_time: time(14, 0),
        };
        let json = serde_json::to_string(&range).unwrap();
        assert!(json.contains("\"start_time\":\"06:30:00\""));
        assert!(json.contains("\"end_time\":\"14:00:00\""));
    }

    #[test]
    fn test_schedule_document_round_trip() {
        let mut schedule = BTreeMap::new();
        schedule.insert(
            DayOfWeek::Monday,
            TimeRange {
                start_time: time(11, 0),
                end_time: time(19, 0),
            },
        );
        let document = ScheduleDocument {
            location: "Riverside".to_string(),
            location_code: "4821".to_string(),
            week_start: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            week_end: NaiveDate::from_ymd_opt(2025, 6, 8).unwrap(),
            employees: vec![EmployeeSchedule {
                name: "Maria Lopez".to_string(),
                role: "Cook".to_string(),
                schedule,
            }],
        };

        let json = serde_json::to_string(&document).unwrap();
        let deserialized: ScheduleDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(document, deserialized);
    }

    #[test]
    fn test_schedule_map_iterates_monday_first() {
        let mut schedule = BTreeMap::new();
        schedule.insert(
            DayOfWeek::Friday,
            TimeRange {
                start_time: time(9, 0),
                end_time: time(17, 0),
            },
        );
        schedule.insert(
            DayOfWeek::Monday,
            TimeRange {
                start_time: time(9, 0),
                end_time: time(17, 0),
            },
        );
        let days: Vec<DayOfWeek> = schedule.keys().copied().collect();
        assert_eq!(days, vec![DayOfWeek::Monday, DayOfWeek::Friday]);
    }
}
