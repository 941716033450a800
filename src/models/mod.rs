//! Core data models for the Deployment Roster Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod deployment;
mod rule;
mod schedule;
mod staff;

pub(crate) use schedule::minute_of_day;

pub use deployment::{DeploymentContext, DeploymentRecord, DriveThruType, ShiftType};
pub use rule::{ActionExpr, ConditionExpr, ConditionTerm, CookCountBounds, StaffingRule};
pub use schedule::{DayOfWeek, EmployeeSchedule, ScheduleDocument, TimeRange};
pub use staff::StaffRecord;
