//! Staff record reconciliation.
//!
//! Matches schedule-parsed employee names against the canonical staff
//! list so deployment rows can carry staff metadata such as the
//! minor-worker flag. Exact name equality wins; otherwise the first staff
//! record related by case-insensitive substring containment is taken.
//! Substring containment is knowingly permissive with short or nested
//! names; the behavior is kept for compatibility with existing rosters.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{EmployeeSchedule, ScheduleDocument, StaffRecord};

/// A schedule employee with the outcome of staff matching attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedEmployee {
    /// The employee name as parsed from the schedule.
    pub name: String,
    /// The role section the employee was listed under.
    pub role: String,
    /// The matched staff record's id, when a match was found.
    pub staff_id: Option<String>,
    /// Whether any staff record matched.
    pub matched: bool,
    /// The matched record's minor-worker flag; false when unmatched.
    pub is_under_18: bool,
}

/// Aggregate matching statistics for one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStats {
    /// How many employees matched a staff record.
    pub matched: usize,
    /// How many employees matched nothing.
    pub unmatched: usize,
    /// Percentage of employees matched, rounded to one decimal; zero for
    /// an empty roster.
    pub match_rate: Decimal,
}

/// The result of reconciling a schedule against the staff list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedRoster {
    /// One entry per schedule employee, in document order.
    pub employees: Vec<LinkedEmployee>,
    /// Aggregate matching statistics.
    pub stats: LinkStats,
}

/// Reconciles every schedule employee against the staff list.
///
/// Matching order per employee: exact case-insensitive
/// whitespace-trimmed equality first, then the first staff record whose
/// name is a case-insensitive substring of the schedule name or vice
/// versa. Unmatched employees keep `staff_id = None` and default
/// `is_under_18 = false`.
pub fn link_staff(document: &ScheduleDocument, staff: &[StaffRecord]) -> LinkedRoster {
    let employees: Vec<LinkedEmployee> = document
        .employees
        .iter()
        .map(|employee| link_one(employee, staff))
        .collect();

    let matched = employees.iter().filter(|e| e.matched).count();
    let total = employees.len();
    let match_rate = if total == 0 {
        Decimal::ZERO
    } else {
        (Decimal::from(matched) * Decimal::from(100) / Decimal::from(total)).round_dp(1)
    };

    LinkedRoster {
        employees,
        stats: LinkStats {
            matched,
            unmatched: total - matched,
            match_rate,
        },
    }
}

fn link_one(employee: &EmployeeSchedule, staff: &[StaffRecord]) -> LinkedEmployee {
    let wanted = employee.name.trim().to_lowercase();

    let exact = staff
        .iter()
        .find(|record| record.name.trim().to_lowercase() == wanted);

    let found = exact.or_else(|| {
        staff.iter().find(|record| {
            let candidate = record.name.trim().to_lowercase();
            // An empty staff name would contain-match everything.
            !candidate.is_empty()
                && (candidate.contains(&wanted) || wanted.contains(&candidate))
        })
    });

    match found {
        Some(record) => LinkedEmployee {
            name: employee.name.clone(),
            role: employee.role.clone(),
            staff_id: Some(record.id.clone()),
            matched: true,
            is_under_18: record.is_under_18,
        },
        None => LinkedEmployee {
            name: employee.name.clone(),
            role: employee.role.clone(),
            staff_id: None,
            matched: false,
            is_under_18: false,
        },
    }
}
