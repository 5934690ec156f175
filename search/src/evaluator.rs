//! State evaluator: distance-to-goal as unsatisfied goal literals.

use mrw_kernel::carrier::condition::ConditionV1;
use mrw_kernel::carrier::state::StateV1;

/// Goal-positive fluents absent from `state` plus goal-negative fluents
/// present in it. Zero iff the goal holds.
#[must_use]
pub fn unsatisfied_literals(state: &StateV1, goal: &ConditionV1) -> usize {
    goal.unsatisfied_count(state.fluents())
}

/// Weighted heuristic score. Lower is better.
///
/// Only ranks non-goal walk endpoints; goal satisfaction is always checked
/// directly.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn evaluate(state: &StateV1, goal: &ConditionV1, weight: f64) -> f64 {
    weight * unsatisfied_literals(state, goal) as f64
}
