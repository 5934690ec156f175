//! `validate_plan()`: re-execute a plan from the initial state.
//!
//! Replay is independent of the search: it only reads the compiled
//! problem. Any plan the search reports as reaching the goal must replay
//! to [`PlanVerdict::GoalReached`].

use crate::operators::action::ActionId;
use crate::problem::problem::ProblemV1;

/// Outcome of replaying a well-formed plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanVerdict {
    /// Every step applied and the final state satisfies the goal.
    GoalReached,
    /// Every step applied but the final state misses `unsatisfied` goal literals.
    GoalNotReached { unsatisfied: usize },
    /// Step `step_index` was not applicable in the state reached before it.
    InapplicableStep { step_index: usize, action: ActionId },
}

impl PlanVerdict {
    #[must_use]
    pub const fn is_goal_reached(&self) -> bool {
        matches!(self, Self::GoalReached)
    }
}

/// Error during replay (distinct from a negative verdict).
///
/// A `ReplayError` means the plan could not be replayed at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    /// The plan references an action id outside the catalog.
    #[error("plan step {step_index} references unknown action {action}")]
    UnknownAction { step_index: usize, action: ActionId },
    /// A named plan references an action name that is not in the catalog.
    #[error("plan step {step_index} references unknown action name {name:?}")]
    UnknownActionName { step_index: usize, name: String },
}

/// Result type for plan replay.
pub type ReplayResult = Result<PlanVerdict, ReplayError>;

/// Replay `plan` from the problem's initial state and judge it.
///
/// Stops at the first inapplicable step.
///
/// # Errors
///
/// Returns [`ReplayError::UnknownAction`] if a step is not in the catalog.
pub fn validate_plan(problem: &ProblemV1, plan: &[ActionId]) -> ReplayResult {
    let mut state = problem.initial_state().clone();
    for (step_index, &id) in plan.iter().enumerate() {
        let action = problem
            .action(id)
            .ok_or(ReplayError::UnknownAction {
                step_index,
                action: id,
            })?;
        if !action.is_applicable(&state) {
            return Ok(PlanVerdict::InapplicableStep {
                step_index,
                action: id,
            });
        }
        state.apply(action.effect());
    }
    let unsatisfied = problem.goal().unsatisfied_count(state.fluents());
    if unsatisfied == 0 {
        Ok(PlanVerdict::GoalReached)
    } else {
        Ok(PlanVerdict::GoalNotReached { unsatisfied })
    }
}

/// Resolve action names against the catalog, then [`validate_plan`].
///
/// # Errors
///
/// Returns [`ReplayError::UnknownActionName`] for a name not in the catalog.
pub fn validate_named_plan<S: AsRef<str>>(problem: &ProblemV1, names: &[S]) -> ReplayResult {
    let plan = names
        .iter()
        .enumerate()
        .map(|(step_index, name)| {
            problem
                .actions()
                .lookup(name.as_ref())
                .ok_or_else(|| ReplayError::UnknownActionName {
                    step_index,
                    name: name.as_ref().to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    validate_plan(problem, &plan)
}
