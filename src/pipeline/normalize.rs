//! Time and date normalization.
//!
//! Converts the 12-hour time tokens found in schedule text ("11:00a",
//! "7:30p") to 24-hour times, and anchors a day-of-week name to a
//! concrete calendar date relative to the week start.

use std::sync::LazyLock;

use chrono::{Duration, NaiveDate, NaiveTime};
use regex::Regex;

use crate::error::{EngineError, EngineResult};
use crate::models::DayOfWeek;

static TIME_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})([ap])$").expect("valid time token pattern"));

/// Converts a 12-hour time token to a 24-hour time.
///
/// Accepts the `h:mm[a|p]` form the schedule text uses. Noon and midnight
/// follow the 12-hour convention: "12:00a" is 00:00 and "12:00p" stays
/// 12:00; every other `p` hour gains 12.
///
/// # Errors
///
/// Returns [`EngineError::MalformedTime`] when the token does not match
/// the expected form, or when it normalizes to an impossible 24-hour time
/// (e.g. "13:00p").
///
/// # Examples
///
/// ```
/// use roster_engine::pipeline::to_military;
/// use chrono::NaiveTime;
///
/// assert_eq!(
///     to_military("12:00a").unwrap(),
///     NaiveTime::from_hms_opt(0, 0, 0).unwrap()
/// );
/// assert_eq!(
///     to_military("6:30p").unwrap(),
///     NaiveTime::from_hms_opt(18, 30, 0).unwrap()
/// );
/// ```
pub fn to_military(token: &str) -> EngineResult<NaiveTime> {
    let malformed = || EngineError::MalformedTime {
        token: token.to_string(),
    };

    let caps = TIME_TOKEN.captures(token.trim()).ok_or_else(malformed)?;
    let hour: u32 = caps[1].parse().map_err(|_| malformed())?;
    let minute: u32 = caps[2].parse().map_err(|_| malformed())?;

    let hour = match (&caps[3], hour) {
        ("a", 12) => 0,
        ("p", 12) => 12,
        ("p", h) => h + 12,
        (_, h) => h,
    };

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(malformed)
}

/// Returns the calendar date of a weekday within the scheduling week.
///
/// Uses a fixed Monday=0..Sunday=6 offset from `week_start`, crossing
/// month boundaries naturally.
///
/// # Examples
///
/// ```
/// use roster_engine::pipeline::date_for_day;
/// use roster_engine::models::DayOfWeek;
/// use chrono::NaiveDate;
///
/// let week_start = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
/// assert_eq!(
///     date_for_day(week_start, DayOfWeek::Sunday),
///     NaiveDate::from_ymd_opt(2025, 6, 8).unwrap()
/// );
/// ```
pub fn date_for_day(week_start: NaiveDate, day: DayOfWeek) -> NaiveDate {
    week_start + Duration::days(day.offset_from_monday())
}
