//! Staffing rule evaluation.

use crate::models::{ActionExpr, DeploymentContext, StaffingRule};

/// Evaluates rules against a deployment context.
///
/// Returns the actions of every *active* rule whose condition fully
/// matches, ordered by ascending priority and then declaration order
/// (stable sort). Lower priority numbers are applied first; when two
/// matching rules adjust the same position, the later action in the
/// returned order takes precedence when the caller merges them.
///
/// Malformed conditions never fail evaluation: a rule whose condition has
/// no recognized keys simply matches nothing.
///
/// # Examples
///
/// ```
/// use roster_engine::models::{
///     ActionExpr, ConditionExpr, DeploymentContext, DriveThruType, DayOfWeek, ShiftType,
///     StaffingRule,
/// };
/// use roster_engine::rules::evaluate;
///
/// let rule = StaffingRule {
///     name: "saturday_night_presenters".to_string(),
///     priority: 10,
///     is_active: true,
///     condition: ConditionExpr {
///         day_of_week: Some(DayOfWeek::Saturday),
///         ..ConditionExpr::default()
///     },
///     action: ActionExpr::RequirePosition {
///         position: "Presenter".to_string(),
///         count: 2,
///     },
/// };
/// let context = DeploymentContext {
///     dt_type: DriveThruType::DualLane,
///     num_cooks: 2,
///     shift_type: ShiftType::Night,
///     day_of_week: DayOfWeek::Saturday,
/// };
///
/// let actions = evaluate(&[rule], &context);
/// assert_eq!(actions.len(), 1);
/// ```
pub fn evaluate(rules: &[StaffingRule], context: &DeploymentContext) -> Vec<ActionExpr> {
    let mut matching: Vec<&StaffingRule> = rules
        .iter()
        .filter(|rule| rule.is_active && rule.condition.matches(context))
        .collect();
    matching.sort_by_key(|rule| rule.priority);
    matching.into_iter().map(|rule| rule.action.clone()).collect()
}
