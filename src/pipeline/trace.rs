//! Parse trace observation.
//!
//! The schedule parser reports progress through an injected observer
//! rather than writing to a global log stream, so tests can assert on the
//! emitted events and the server path can route them into `tracing`.

use chrono::NaiveDate;

use crate::models::DayOfWeek;

/// A checkpoint event emitted by the schedule parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent {
    /// The location header was recognized.
    LocationFound {
        /// The location name.
        name: String,
        /// The numeric location code.
        code: String,
    },
    /// A week date range was recognized.
    WeekRangeFound {
        /// The week start date.
        start: NaiveDate,
        /// The week end date.
        end: NaiveDate,
    },
    /// The day header row was recognized.
    DayHeaderFound {
        /// The first day listed in the header.
        first_day: DayOfWeek,
        /// The day-of-month printed under the first day.
        day_of_month: u32,
    },
    /// A role section header was recognized.
    SectionFound {
        /// The role name (e.g. "Cook").
        role: String,
    },
    /// An employee row was accepted into the current section.
    EmployeeAdded {
        /// The employee name.
        name: String,
        /// How many day entries the row produced.
        days: usize,
    },
}

/// Receives parse checkpoint events.
pub trait ParseObserver {
    /// Called once per recognized checkpoint, in document order.
    fn on_event(&mut self, event: &ParseEvent);
}

/// An observer that discards every event.
#[derive(Debug, Default)]
pub struct NullObserver;

impl ParseObserver for NullObserver {
    fn on_event(&mut self, _event: &ParseEvent) {}
}

/// An observer that keeps every event, for assertions in tests and for
/// building parse summaries.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    /// The events received so far, in order.
    pub events: Vec<ParseEvent>,
}

impl ParseObserver for RecordingObserver {
    fn on_event(&mut self, event: &ParseEvent) {
        self.events.push(event.clone());
    }
}

/// An observer that forwards events to `tracing` at debug level.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl ParseObserver for TracingObserver {
    fn on_event(&mut self, event: &ParseEvent) {
        match event {
            ParseEvent::LocationFound { name, code } => {
                tracing::debug!(location = %name, code = %code, "Location header found");
            }
            ParseEvent::WeekRangeFound { start, end } => {
                tracing::debug!(week_start = %start, week_end = %end, "Week range found");
            }
            ParseEvent::DayHeaderFound {
                first_day,
                day_of_month,
            } => {
                tracing::debug!(first_day = %first_day, day_of_month, "Day header found");
            }
            ParseEvent::SectionFound { role } => {
                tracing::debug!(role = %role, "Role section found");
            }
            ParseEvent::EmployeeAdded { name, days } => {
                tracing::debug!(employee = %name, days, "Employee row added");
            }
        }
    }
}
