//! Human-readable rendering of rule conditions and actions.
//!
//! Produces the English sentence fragments the rule list UI displays,
//! e.g. `["at least 2 cooks", "Drive-Thru is dual-lane", "on Saturday"]`.
//! Pure formatting; no evaluation happens here.

use crate::models::{ActionExpr, ConditionExpr, ConditionTerm};

/// Renders a condition as a list of sentence fragments.
///
/// An empty condition renders as an empty list.
pub fn describe_condition(condition: &ConditionExpr) -> Vec<String> {
    let mut fragments = Vec::new();
    for term in condition.terms() {
        match term {
            ConditionTerm::DriveThru(dt_type) => {
                fragments.push(format!("Drive-Thru is {}", dt_type));
            }
            ConditionTerm::CookCount(bounds) => {
                if let Some(n) = bounds.gte {
                    fragments.push(format!("at least {} cooks", n));
                }
                if let Some(n) = bounds.lte {
                    fragments.push(format!("at most {} cooks", n));
                }
                if let Some(n) = bounds.eq {
                    fragments.push(format!("exactly {} cooks", n));
                }
            }
            ConditionTerm::Shift(shift_type) => {
                fragments.push(format!("during {} shifts", shift_type));
            }
            ConditionTerm::Day(day) => {
                fragments.push(format!("on {}", day));
            }
        }
    }
    fragments
}

/// Renders an action as a list of sentence fragments.
pub fn describe_action(action: &ActionExpr) -> Vec<String> {
    match action {
        ActionExpr::RequirePosition { position, count } => {
            vec![format!("require {} {}(s)", count, position)]
        }
        ActionExpr::ExcludePosition(position) => {
            vec![format!("exclude {}", position)]
        }
        ActionExpr::AdjustPositionCount(counts) => counts
            .iter()
            .map(|(position, count)| format!("set {} to {}", position, count))
            .collect(),
    }
}

/// Renders a condition/action pair as one fragment list, condition
/// fragments first.
pub fn describe_rule(condition: &ConditionExpr, action: &ActionExpr) -> Vec<String> {
    let mut fragments = describe_condition(condition);
    fragments.extend(describe_action(action));
    fragments
}
