//! Schedule text parsing.
//!
//! Scans raw text extracted from a schedule PDF line by line, recognizing
//! a location header, a week date range, an optional day header, role
//! section headers, and per-employee time rows. Lines that match none of
//! the recognized patterns (titles, page breaks, column headers) are
//! skipped, so interleaved non-schedule content is tolerated.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::error::{EngineError, EngineResult};
use crate::models::{DayOfWeek, EmployeeSchedule, ScheduleDocument, TimeRange};

use super::normalize::to_military;
use super::trace::{NullObserver, ParseEvent, ParseObserver};

/// Location header: `<name> <code>'s schedule for ...`.
static LOCATION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.*?)\s+(\d+)'s\s+schedule\s+for\b").expect("valid location pattern")
});

/// A loose `M/D/YYYY` (or two-digit year) date occurrence.
static DATE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{2,4})\b").expect("valid date pattern"));

/// A day name followed by a day-of-month number, as printed in the day
/// header row.
static DAY_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(monday|mon|tuesday|tues|tue|wednesday|wed|thursday|thurs|thur|thu|friday|fri|saturday|sat|sunday|sun)\b\.?\s*(\d{1,2})\b",
    )
    .expect("valid day header pattern")
});

/// Role section header: `<Role> Deployment`.
static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(.+?)\s+deployment\b").expect("valid section pattern"));

/// Pure column-header rows, skipped without ending the current section.
static COLUMN_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(name|employee|team\s*member|position|shift\s*times?)\b")
        .expect("valid column header pattern")
});

/// A 12-hour time token (`h:mm[a|p]`) anywhere in a line.
static TIME_TOKEN_SCAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}:\d{2}[ap]").expect("valid time scan pattern"));

/// The parser's explicit scan state, threaded over the line loop.
#[derive(Debug, Default)]
struct ParserState {
    /// Location name and code from the schedule header.
    location: Option<(String, String)>,
    /// Week start seeded from the date range, possibly corrected by the
    /// day header's first day-of-month.
    week_start: Option<NaiveDate>,
    /// Week end seeded from the date range.
    week_end: Option<NaiveDate>,
    /// The literal day order printed in the day header, captured once.
    day_order: Option<Vec<DayOfWeek>>,
    /// The role section the scan is currently inside.
    current_section: Option<String>,
}

/// Parses schedule text into a structured document.
///
/// Equivalent to [`parse_schedule_with_observer`] with a discarding
/// observer.
///
/// # Errors
///
/// Returns [`EngineError::ScheduleParse`] when no employee rows are
/// recoverable or when no week date range is present, and
/// [`EngineError::MalformedTime`] when a time token inside an accepted
/// employee row cannot be normalized.
pub fn parse_schedule(text: &str) -> EngineResult<ScheduleDocument> {
    parse_schedule_with_observer(text, &mut NullObserver)
}

/// Parses schedule text, reporting checkpoints to the given observer.
///
/// The scan is a single forward pass over non-empty trimmed lines. Per
/// line, in order of precedence: the location header, the week date
/// range, the day header (once), role section headers, column-header
/// rows, and finally employee time rows within the current section. The
/// location header does not consume its line, since real documents print
/// the week date range on the same line.
///
/// Time tokens in an employee row are paired sequentially into day slots
/// following the day header's printed order (natural Monday-first order
/// when the document has no day header); an odd trailing token is
/// dropped.
pub fn parse_schedule_with_observer(
    text: &str,
    observer: &mut dyn ParseObserver,
) -> EngineResult<ScheduleDocument> {
    let mut state = ParserState::default();
    let mut employees: Vec<EmployeeSchedule> = Vec::new();

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        // Location header. Falls through: the date range usually shares
        // this line.
        if state.location.is_none() {
            if let Some(caps) = LOCATION_HEADER.captures(line) {
                let name = caps[1].trim().to_string();
                let code = caps[2].to_string();
                observer.on_event(&ParseEvent::LocationFound {
                    name: name.clone(),
                    code: code.clone(),
                });
                state.location = Some((name, code));
            }
        }

        // Week date range: the first line carrying two date occurrences.
        if state.week_start.is_none() {
            let dates: Vec<NaiveDate> = DATE_TOKEN
                .captures_iter(line)
                .filter_map(|caps| parse_date(&caps[1], &caps[2], &caps[3]))
                .collect();
            if dates.len() >= 2 {
                observer.on_event(&ParseEvent::WeekRangeFound {
                    start: dates[0],
                    end: dates[1],
                });
                state.week_start = Some(dates[0]);
                state.week_end = Some(dates[1]);
                continue;
            }
        }

        // Day header, captured once. Its first day-of-month is
        // authoritative over the date-range guess: on disagreement only
        // the day-of-month component of the week start is rewritten.
        if state.day_order.is_none() {
            if let Some(pairs) = extract_day_header(line) {
                let (first_day, day_of_month) = pairs[0];
                observer.on_event(&ParseEvent::DayHeaderFound {
                    first_day,
                    day_of_month,
                });
                if let Some(start) = state.week_start {
                    if start.day() != day_of_month {
                        if let Some(corrected) = start.with_day(day_of_month) {
                            state.week_start = Some(corrected);
                        }
                    }
                }
                state.day_order = Some(pairs.into_iter().map(|(day, _)| day).collect());
                continue;
            }
        }

        // Role section header.
        if let Some(caps) = SECTION_HEADER.captures(line) {
            let role = caps[1].trim().to_string();
            observer.on_event(&ParseEvent::SectionFound { role: role.clone() });
            state.current_section = Some(role);
            continue;
        }

        // Column-header rows carry no times; skip without leaving the
        // section.
        if COLUMN_HEADER.is_match(line) && !TIME_TOKEN_SCAN.is_match(line) {
            continue;
        }

        // Employee time row, only recognized inside a known section.
        if let Some(role) = state.current_section.clone() {
            if let Some(employee) =
                extract_employee_row(line, &role, state.day_order.as_deref())?
            {
                observer.on_event(&ParseEvent::EmployeeAdded {
                    name: employee.name.clone(),
                    days: employee.schedule.len(),
                });
                employees.push(employee);
            }
        }
    }

    if employees.is_empty() {
        return Err(EngineError::ScheduleParse {
            message: "no employee rows recognized in schedule text".to_string(),
        });
    }

    let (week_start, week_end) = match (state.week_start, state.week_end) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            return Err(EngineError::ScheduleParse {
                message: "no week date range found in schedule text".to_string(),
            });
        }
    };

    let (location, location_code) = state
        .location
        .unwrap_or_else(|| ("Unknown".to_string(), String::new()));

    Ok(ScheduleDocument {
        location,
        location_code,
        week_start,
        week_end,
        employees,
    })
}

/// Parses a loose month/day/year occurrence; two-digit years are taken
/// as 2000-based.
fn parse_date(month: &str, day: &str, year: &str) -> Option<NaiveDate> {
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    let mut year: i32 = year.parse().ok()?;
    if year < 100 {
        year += 2000;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Extracts the day header's (day, day-of-month) pairs. A line counts as
/// a day header only when it carries at least two such pairs.
fn extract_day_header(line: &str) -> Option<Vec<(DayOfWeek, u32)>> {
    let pairs: Vec<(DayOfWeek, u32)> = DAY_NUMBER
        .captures_iter(line)
        .filter_map(|caps| {
            let day = DayOfWeek::from_prefix(&caps[1])?;
            let day_of_month: u32 = caps[2].parse().ok()?;
            (1..=31).contains(&day_of_month).then_some((day, day_of_month))
        })
        .collect();
    (pairs.len() >= 2).then_some(pairs)
}

/// Attempts to read an employee time row.
///
/// A row qualifies only when it carries at least two time tokens and the
/// text before the first token survives the name guards (more than two
/// characters, no `"of "`, no leading digit). Tokens are then paired
/// sequentially into day slots, up to seven; an odd trailing token is
/// dropped.
fn extract_employee_row(
    line: &str,
    role: &str,
    day_order: Option<&[DayOfWeek]>,
) -> EngineResult<Option<EmployeeSchedule>> {
    let tokens: Vec<regex::Match<'_>> = TIME_TOKEN_SCAN.find_iter(line).collect();
    if tokens.len() < 2 {
        return Ok(None);
    }

    let name = line[..tokens[0].start()].trim();
    if name.chars().count() <= 2
        || name.contains("of ")
        || name.starts_with(|c: char| c.is_ascii_digit())
    {
        return Ok(None);
    }

    let order = day_order.unwrap_or(&DayOfWeek::ALL);
    let slots = order.len().min(7);

    let mut schedule = BTreeMap::new();
    for (slot, pair) in tokens.chunks(2).take(slots).enumerate() {
        let [start_token, end_token] = pair else {
            break;
        };
        let range = TimeRange {
            start_time: to_military(start_token.as_str())?,
            end_time: to_military(end_token.as_str())?,
        };
        schedule.insert(order[slot], range);
    }

    Ok(Some(EmployeeSchedule {
        name: name.to_string(),
        role: role.to_string(),
        schedule,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::trace::RecordingObserver;
    use chrono::NaiveTime;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const FULL_WEEK_DOCUMENT: &str = "\
Riverside 4821's schedule for the week of 6/2/2025 - 6/8/2025
Name Mon 2 Tue 3 Wed 4 Thu 5 Fri 6 Sat 7 Sun 8
Cook Deployment
Maria Lopez 8:00a 4:00p 8:00a 4:00p 8:00a 4:00p 8:00a 4:00p 8:00a 4:00p 8:00a 4:00p 8:00a 4:00p
";

    // ==========================================================================
    // SP-001: full-week round trip
    // ==========================================================================
    #[test]
    fn test_sp_001_full_week_employee_row() {
        let document = parse_schedule(FULL_WEEK_DOCUMENT).unwrap();

        assert_eq!(document.location, "Riverside");
        assert_eq!(document.location_code, "4821");
        assert_eq!(document.week_start, date(2025, 6, 2));
        assert_eq!(document.week_end, date(2025, 6, 8));
        assert_eq!(document.employees.len(), 1);

        let employee = &document.employees[0];
        assert_eq!(employee.name, "Maria Lopez");
        assert_eq!(employee.role, "Cook");
        assert_eq!(employee.schedule.len(), 7);
        let monday = &employee.schedule[&DayOfWeek::Monday];
        assert_eq!(monday.start_time, time(8, 0));
        assert_eq!(monday.end_time, time(16, 0));
    }

    // ==========================================================================
    // SP-002: zero qualifying rows is a parse error
    // ==========================================================================
    #[test]
    fn test_sp_002_no_employee_rows_is_parse_error() {
        let text = "\
Riverside 4821's schedule for the week of 6/2/2025 - 6/8/2025
Cook Deployment
Name Mon Tue Wed
";
        match parse_schedule(text) {
            Err(EngineError::ScheduleParse { message }) => {
                assert!(message.contains("no employee rows"));
            }
            other => panic!("expected ScheduleParse, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_week_range_is_parse_error() {
        let text = "\
Cook Deployment
Maria Lopez 8:00a 4:00p 8:00a 4:00p
";
        match parse_schedule(text) {
            Err(EngineError::ScheduleParse { message }) => {
                assert!(message.contains("no week date range"));
            }
            other => panic!("expected ScheduleParse, got {:?}", other),
        }
    }

    #[test]
    fn test_rows_outside_any_section_are_ignored() {
        let text = "\
Riverside 4821's schedule for the week of 6/2/2025 - 6/8/2025
Maria Lopez 8:00a 4:00p 8:00a 4:00p
";
        // The only time row appears before any section header.
        assert!(parse_schedule(text).is_err());
    }

    #[test]
    fn test_partial_week_pairs_days_in_order() {
        let text = "\
Riverside 4821's schedule for the week of 6/2/2025 - 6/8/2025
Service Deployment
Devon Carter 11:00a 7:00p 4:00p 11:00p
";
        let document = parse_schedule(text).unwrap();
        let employee = &document.employees[0];
        assert_eq!(employee.role, "Service");
        assert_eq!(employee.schedule.len(), 2);
        assert_eq!(
            employee.schedule[&DayOfWeek::Monday],
            TimeRange {
                start_time: time(11, 0),
                end_time: time(19, 0),
            }
        );
        assert_eq!(
            employee.schedule[&DayOfWeek::Tuesday],
            TimeRange {
                start_time: time(16, 0),
                end_time: time(23, 0),
            }
        );
    }

    #[test]
    fn test_odd_trailing_token_is_dropped() {
        let text = "\
Riverside 4821's schedule for the week of 6/2/2025 - 6/8/2025
Cook Deployment
Devon Carter 8:00a 4:00p 10:00a
";
        let document = parse_schedule(text).unwrap();
        assert_eq!(document.employees[0].schedule.len(), 1);
    }

    #[test]
    fn test_single_time_token_is_not_an_employee_row() {
        let text = "\
Riverside 4821's schedule for the week of 6/2/2025 - 6/8/2025
Cook Deployment
Open at 6:00a daily
Maria Lopez 8:00a 4:00p
";
        let document = parse_schedule(text).unwrap();
        assert_eq!(document.employees.len(), 1);
        assert_eq!(document.employees[0].name, "Maria Lopez");
    }

    #[test]
    fn test_name_guards_reject_header_fragments() {
        let text = "\
Riverside 4821's schedule for the week of 6/2/2025 - 6/8/2025
Cook Deployment
Al 8:00a 4:00p 8:00a 4:00p
Week of June 8:00a 4:00p
6/2 shift 8:00a 4:00p
Maria Lopez 8:00a 4:00p
";
        // "Al" is too short, "Week of June" contains "of ", and the last
        // junk row starts with a digit; only the real row survives.
        let document = parse_schedule(text).unwrap();
        assert_eq!(document.employees.len(), 1);
        assert_eq!(document.employees[0].name, "Maria Lopez");
    }

    #[test]
    fn test_interleaved_junk_lines_are_tolerated() {
        let text = "\
WEEKLY DEPLOYMENT REPORT
Page 1 of 3
Riverside 4821's schedule for the week of 6/2/2025 - 6/8/2025
--- generated by export tool ---
Cook Deployment
Maria Lopez 8:00a 4:00p 8:00a 4:00p
Grill station notes follow.
Service Deployment
Devon Carter 4:00p 11:00p 4:00p 11:00p
";
        let document = parse_schedule(text).unwrap();
        assert_eq!(document.employees.len(), 2);
        assert_eq!(document.employees[0].role, "Cook");
        assert_eq!(document.employees[1].role, "Service");
    }

    #[test]
    fn test_no_day_header_defaults_to_monday_first() {
        let text = "\
Riverside 4821's schedule for the week of 6/2/2025 - 6/8/2025
Cook Deployment
Maria Lopez 8:00a 4:00p 9:00a 5:00p
";
        let document = parse_schedule(text).unwrap();
        let employee = &document.employees[0];
        assert!(employee.schedule.contains_key(&DayOfWeek::Monday));
        assert!(employee.schedule.contains_key(&DayOfWeek::Tuesday));
    }

    #[test]
    fn test_day_header_corrects_week_start_day_of_month() {
        // The date range guess disagrees with the day header: only the
        // day-of-month is rewritten, never month or year.
        let text = "\
Riverside 4821's schedule for the week of 6/1/2025 - 6/8/2025
Name Mon 2 Tue 3 Wed 4 Thu 5 Fri 6 Sat 7 Sun 8
Cook Deployment
Maria Lopez 8:00a 4:00p 9:00a 5:00p
";
        let document = parse_schedule(text).unwrap();
        assert_eq!(document.week_start, date(2025, 6, 2));
        assert_eq!(document.week_end, date(2025, 6, 8));
    }

    #[test]
    fn test_day_header_order_overrides_monday_first_pairing() {
        let text = "\
Riverside 4821's schedule for the week of 6/4/2025 - 6/10/2025
Name Wed 4 Thu 5 Fri 6 Sat 7 Sun 8 Mon 9 Tue 10
Cook Deployment
Maria Lopez 8:00a 4:00p 9:00a 5:00p
";
        let document = parse_schedule(text).unwrap();
        let employee = &document.employees[0];
        assert!(employee.schedule.contains_key(&DayOfWeek::Wednesday));
        assert!(employee.schedule.contains_key(&DayOfWeek::Thursday));
        assert!(!employee.schedule.contains_key(&DayOfWeek::Monday));
    }

    #[test]
    fn test_malformed_time_in_accepted_row_aborts_parse() {
        // "13:00p" matches the token form but cannot normalize; the
        // document-level policy is to abort, not skip the row.
        let text = "\
Riverside 4821's schedule for the week of 6/2/2025 - 6/8/2025
Cook Deployment
Maria Lopez 13:00p 4:00p
";
        match parse_schedule(text) {
            Err(EngineError::MalformedTime { token }) => assert_eq!(token, "13:00p"),
            other => panic!("expected MalformedTime, got {:?}", other),
        }
    }

    #[test]
    fn test_reparsing_is_idempotent() {
        let first = parse_schedule(FULL_WEEK_DOCUMENT).unwrap();
        let second = parse_schedule(FULL_WEEK_DOCUMENT).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_observer_receives_checkpoints_in_document_order() {
        let mut observer = RecordingObserver::default();
        parse_schedule_with_observer(FULL_WEEK_DOCUMENT, &mut observer).unwrap();

        let events = &observer.events;
        assert_eq!(events.len(), 5);
        assert!(matches!(&events[0], ParseEvent::LocationFound { name, code }
            if name == "Riverside" && code == "4821"));
        assert!(matches!(&events[1], ParseEvent::WeekRangeFound { start, end }
            if *start == date(2025, 6, 2) && *end == date(2025, 6, 8)));
        assert!(matches!(&events[2], ParseEvent::DayHeaderFound { first_day, day_of_month }
            if *first_day == DayOfWeek::Monday && *day_of_month == 2));
        assert!(matches!(&events[3], ParseEvent::SectionFound { role } if role == "Cook"));
        assert!(matches!(&events[4], ParseEvent::EmployeeAdded { name, days }
            if name == "Maria Lopez" && *days == 7));
    }

    #[test]
    fn test_two_digit_years_are_two_thousand_based() {
        let text = "\
Riverside 4821's schedule for the week of 6/2/25 - 6/8/25
Cook Deployment
Maria Lopez 8:00a 4:00p
";
        let document = parse_schedule(text).unwrap();
        assert_eq!(document.week_start, date(2025, 6, 2));
    }

    #[test]
    fn test_missing_location_header_defaults() {
        let text = "\
Week of 6/2/2025 - 6/8/2025
Cook Deployment
Maria Lopez 8:00a 4:00p
";
        let document = parse_schedule(text).unwrap();
        assert_eq!(document.location, "Unknown");
        assert_eq!(document.location_code, "");
    }
}
