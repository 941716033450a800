//! Deployment record derivation.
//!
//! Turns a parsed schedule document into one deployment record per
//! (employee, day) pair, and aggregates deployment sets into the context
//! the staffing rule engine evaluates against.

use chrono::{Datelike, NaiveDate};

use crate::models::{
    DeploymentContext, DeploymentRecord, DriveThruType, ScheduleDocument, ShiftType,
};

use super::classify::classify_shift;
use super::normalize::date_for_day;

/// Derives deployment records from a parsed schedule document.
///
/// One record per (employee, day) pair that had a time range. The date
/// comes from the week start and the day's fixed offset; the shift
/// category is always derived by the classifier, never set directly.
///
/// Records are ordered by employee (document order), then day.
pub fn build_deployments(document: &ScheduleDocument) -> Vec<DeploymentRecord> {
    let mut records = Vec::new();
    for employee in &document.employees {
        for (day, range) in &employee.schedule {
            records.push(DeploymentRecord {
                employee_name: employee.name.clone(),
                role: employee.role.clone(),
                date: date_for_day(document.week_start, *day),
                start_time: range.start_time,
                end_time: range.end_time,
                shift_type: classify_shift(range.start_time, range.end_time),
            });
        }
    }
    records
}

/// Aggregates a deployment set into a rule evaluation context.
///
/// The cook head-count counts records on `date` whose role is "Cook"
/// (case-insensitive) and whose shift category covers the requested one
/// (`both` covers day and night). The day of week comes from the date
/// itself.
pub fn context_for(
    records: &[DeploymentRecord],
    dt_type: DriveThruType,
    date: NaiveDate,
    shift_type: ShiftType,
) -> DeploymentContext {
    let num_cooks = records
        .iter()
        .filter(|record| record.date == date)
        .filter(|record| record.role.eq_ignore_ascii_case("cook"))
        .filter(|record| covers(record.shift_type, shift_type))
        .count() as u32;

    DeploymentContext {
        dt_type,
        num_cooks,
        shift_type,
        day_of_week: date.weekday().into(),
    }
}

/// Returns true when a record's shift category covers the requested one.
fn covers(recorded: ShiftType, requested: ShiftType) -> bool {
    recorded == requested || recorded == ShiftType::Both
}
