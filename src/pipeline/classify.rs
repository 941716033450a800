//! Shift category classification.
//!
//! Maps a start/end time pair to a day/night/both category using a fixed
//! threshold ladder. The ladder is encoded business policy and is
//! preserved exactly, including its fallback branch.

use chrono::NaiveTime;

use crate::models::{minute_of_day, ShiftType};

/// End-of-daytime cutoff: shifts ending at or before 18:00 are day shifts.
const DAY_END_CUTOFF: u32 = 18 * 60;
/// Start-of-evening cutoff: starts after 15:00 lean night.
const NIGHT_START_CUTOFF: u32 = 15 * 60;
/// Late-evening cutoff: ends after 22:00 are unambiguously night.
const LATE_END_CUTOFF: u32 = 22 * 60;

/// Classifies a shift into a day/night/both category.
///
/// Works in minutes since midnight; a shift is overnight when its end
/// minute is at or before its start minute. The rules apply in order:
///
/// 1. ends at or before 18:00 and not overnight → day
/// 2. starts after 15:00 and (ends after 22:00 or overnight) → night
/// 3. starts before 15:00 and ends in (18:00, 22:00] → both
/// 4. starts after 15:00 and ends at or before 22:00, not overnight → night
/// 5. anything else → day
///
/// Inputs are assumed well-formed; validation happens upstream in the
/// time normalizer.
///
/// # Examples
///
/// ```
/// use roster_engine::pipeline::classify_shift;
/// use roster_engine::models::ShiftType;
/// use chrono::NaiveTime;
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
///
/// assert_eq!(classify_shift(t(9, 0), t(18, 0)), ShiftType::Day);
/// assert_eq!(classify_shift(t(16, 0), t(23, 0)), ShiftType::Night);
/// assert_eq!(classify_shift(t(14, 0), t(19, 0)), ShiftType::Both);
/// assert_eq!(classify_shift(t(22, 0), t(6, 0)), ShiftType::Night);
/// ```
pub fn classify_shift(start_time: NaiveTime, end_time: NaiveTime) -> ShiftType {
    let start = minute_of_day(start_time);
    let end = minute_of_day(end_time);
    let overnight = end <= start;

    if end <= DAY_END_CUTOFF && !overnight {
        ShiftType::Day
    } else if start > NIGHT_START_CUTOFF && (end > LATE_END_CUTOFF || overnight) {
        ShiftType::Night
    } else if start < NIGHT_START_CUTOFF && end > DAY_END_CUTOFF && end <= LATE_END_CUTOFF {
        ShiftType::Both
    } else if start > NIGHT_START_CUTOFF && end <= LATE_END_CUTOFF && !overnight {
        ShiftType::Night
    } else {
        ShiftType::Day
    }
}
