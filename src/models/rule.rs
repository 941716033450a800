//! Staffing rule model: condition and action expressions.
//!
//! Conditions and actions are structured, serializable objects — never
//! code. The serialized form is the wire format shared with the rule
//! authoring UI: condition keys `dt_type`, `num_cooks.{gte,lte,eq}`,
//! `shift_type`, `day_of_week`; action keys `require_position`,
//! `exclude_position`, `adjust_position_count`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::deployment::{DeploymentContext, DriveThruType, ShiftType};
use super::schedule::DayOfWeek;

/// Bounds on the cook head-count, checked conjunctively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookCountBounds {
    /// Matches when the cook count is greater than or equal to this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gte: Option<u32>,
    /// Matches when the cook count is less than or equal to this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte: Option<u32>,
    /// Matches when the cook count equals this exactly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eq: Option<u32>,
}

impl CookCountBounds {
    /// Returns true when every present bound holds for `count`.
    ///
    /// Bounds that are absent do not constrain the count; an entirely
    /// empty bounds object is satisfied by any count.
    pub fn satisfied_by(&self, count: u32) -> bool {
        self.gte.is_none_or(|n| count >= n)
            && self.lte.is_none_or(|n| count <= n)
            && self.eq.is_none_or(|n| count == n)
    }
}

/// A single recognized condition, one variant per condition kind.
///
/// A [`ConditionExpr`] decomposes into these terms for evaluation, so each
/// kind carries its own matcher instead of an open-ended bag of optional
/// keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionTerm {
    /// The site's drive-thru layout must equal this value.
    DriveThru(DriveThruType),
    /// The cook head-count must satisfy these bounds.
    CookCount(CookCountBounds),
    /// The shift category must equal this value.
    Shift(ShiftType),
    /// The day of week must equal this value.
    Day(DayOfWeek),
}

impl ConditionTerm {
    /// Returns true when this term holds for the given context.
    pub fn matches(&self, context: &DeploymentContext) -> bool {
        match self {
            ConditionTerm::DriveThru(dt_type) => context.dt_type == *dt_type,
            ConditionTerm::CookCount(bounds) => bounds.satisfied_by(context.num_cooks),
            ConditionTerm::Shift(shift_type) => context.shift_type == *shift_type,
            ConditionTerm::Day(day) => context.day_of_week == *day,
        }
    }
}

/// A rule condition: every present key must hold (AND semantics).
///
/// The serialized form is a single object with optional keys, as authored
/// by the rule builder UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionExpr {
    /// Required drive-thru layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dt_type: Option<DriveThruType>,
    /// Required cook head-count bounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_cooks: Option<CookCountBounds>,
    /// Required shift category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_type: Option<ShiftType>,
    /// Required day of week.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<DayOfWeek>,
}

impl ConditionExpr {
    /// Returns true when no condition keys are present.
    pub fn is_empty(&self) -> bool {
        self.terms().is_empty()
    }

    /// Decomposes the condition into its recognized terms.
    pub fn terms(&self) -> Vec<ConditionTerm> {
        let mut terms = Vec::new();
        if let Some(dt_type) = self.dt_type {
            terms.push(ConditionTerm::DriveThru(dt_type));
        }
        if let Some(bounds) = self.num_cooks {
            terms.push(ConditionTerm::CookCount(bounds));
        }
        if let Some(shift_type) = self.shift_type {
            terms.push(ConditionTerm::Shift(shift_type));
        }
        if let Some(day) = self.day_of_week {
            terms.push(ConditionTerm::Day(day));
        }
        terms
    }

    /// Returns true when the condition matches the given context.
    ///
    /// A condition with no recognized keys matches nothing. This is the
    /// fail-closed policy: an empty or unrecognized condition never
    /// matches everything.
    pub fn matches(&self, context: &DeploymentContext) -> bool {
        let terms = self.terms();
        !terms.is_empty() && terms.iter().all(|term| term.matches(context))
    }
}

/// A rule action, one variant per action kind.
///
/// Serializes externally tagged, which is exactly the wire format: e.g.
/// `{"require_position": {"position": "Presenter", "count": 2}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionExpr {
    /// Require at least `count` of `position` on the deployment.
    RequirePosition {
        /// The position name (e.g. "Presenter").
        position: String,
        /// The required head-count.
        count: u32,
    },
    /// Exclude a position from the deployment entirely.
    ExcludePosition(String),
    /// Set position head-counts to the given values.
    ///
    /// When several matching rules adjust the same position, later actions
    /// in the evaluated order take precedence when the caller merges them.
    AdjustPositionCount(BTreeMap<String, u32>),
}

/// A staffing rule: a named, prioritized condition/action pair.
///
/// Rules are authored externally and handed to the engine as pure
/// evaluation input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffingRule {
    /// The rule's display name.
    pub name: String,
    /// Evaluation priority; lower numbers are applied first.
    pub priority: i32,
    /// Inactive rules are skipped entirely.
    pub is_active: bool,
    /// The condition; absent or empty means the rule never matches.
    #[serde(default)]
    pub condition: ConditionExpr,
    /// The action emitted when the condition matches.
    pub action: ActionExpr,
}
