//! Deployment record model and rule-evaluation context.
//!
//! A deployment is an employee's assigned shift on a specific date with a
//! derived shift category. Deployment records are candidate rows for the
//! persistence layer; the engine never mutates persisted records.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::schedule::DayOfWeek;

/// The shift category derived from a start/end time pair.
///
/// Always derived by the time classifier, never set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// A shift that ends within the daytime window.
    Day,
    /// A shift confined to the evening/overnight window.
    Night,
    /// A shift spanning both the day and night windows.
    Both,
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftType::Day => write!(f, "day"),
            ShiftType::Night => write!(f, "night"),
            ShiftType::Both => write!(f, "both"),
        }
    }
}

/// The drive-thru layout of a site, used as a rule condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveThruType {
    /// A single order lane.
    SingleLane,
    /// Two parallel order lanes.
    DualLane,
    /// No drive-thru at this site.
    None,
}

impl fmt::Display for DriveThruType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriveThruType::SingleLane => write!(f, "single-lane"),
            DriveThruType::DualLane => write!(f, "dual-lane"),
            DriveThruType::None => write!(f, "none"),
        }
    }
}

/// One employee's assigned shift on a concrete calendar date.
///
/// Derived from a [`ScheduleDocument`](super::ScheduleDocument): one record
/// per (employee, day) pair that had a time range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    /// The employee name as parsed from the schedule.
    pub employee_name: String,
    /// The role section the employee was listed under.
    pub role: String,
    /// The concrete calendar date of the shift.
    pub date: NaiveDate,
    /// The shift start time.
    pub start_time: NaiveTime,
    /// The shift end time.
    pub end_time: NaiveTime,
    /// The derived shift category.
    pub shift_type: ShiftType,
}

/// The evaluation context a staffing rule's conditions are checked against.
///
/// Derived from deployment aggregates plus site attributes; rules only read
/// from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentContext {
    /// The site's drive-thru layout.
    pub dt_type: DriveThruType,
    /// The number of cooks deployed for the date/shift under evaluation.
    pub num_cooks: u32,
    /// The shift category under evaluation.
    pub shift_type: ShiftType,
    /// The day of week under evaluation.
    pub day_of_week: DayOfWeek,
}
