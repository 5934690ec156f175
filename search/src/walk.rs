//! Walk executor: one bounded random walk from a start state.

use rand::Rng;

use mrw_kernel::carrier::condition::ConditionV1;
use mrw_kernel::carrier::state::StateV1;
use mrw_kernel::operators::action::ActionId;

use crate::contract::PlanningModelV1;
use crate::error::SelectionError;
use crate::selector::{select, Strategy};
use crate::stats::{StatisticsTracker, StepOutcome};

/// How a walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkTermination {
    /// The goal holds in the final state. A start state that already
    /// satisfies the goal ends the walk here with no steps.
    GoalReached,
    /// No action was applicable.
    DeadEnd,
    /// The step budget ran out.
    StepBudgetExhausted,
}

/// Everything a walk produced.
#[derive(Debug, Clone)]
pub struct WalkResult {
    pub actions: Vec<ActionId>,
    pub final_state: StateV1,
    pub termination: WalkTermination,
    /// Sum of applicable-action counts over the steps examined, including
    /// the zero of a dead end.
    pub branching: u64,
    /// Strategy read from the tracker at walk start. Every step of the walk
    /// selected under it.
    pub strategy: Strategy,
}

impl WalkResult {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.termination == WalkTermination::GoalReached
    }

    #[must_use]
    pub fn hit_dead_end(&self) -> bool {
        self.termination == WalkTermination::DeadEnd
    }
}

/// Run one walk of at most `max_steps` steps from a copy of `start`.
///
/// Each step is recorded in `tracker` as it happens, so later steps of the
/// same walk select against updated counters. The walk-level outcome is
/// NOT recorded; the driver does that.
pub fn run_walk<M, R>(
    model: &M,
    start: &StateV1,
    goal: &ConditionV1,
    max_steps: usize,
    tracker: &mut StatisticsTracker,
    rng: &mut R,
) -> WalkResult
where
    M: PlanningModelV1 + ?Sized,
    R: Rng + ?Sized,
{
    let strategy = tracker.strategy();
    let mut state = start.clone();
    let mut actions = Vec::new();
    let mut branching = 0u64;
    let mut applicable = Vec::new();

    let end = |actions, final_state, termination, branching| WalkResult {
        actions,
        final_state,
        termination,
        branching,
        strategy,
    };

    if state.satisfies(goal) {
        return end(actions, state, WalkTermination::GoalReached, branching);
    }

    for _ in 0..max_steps {
        model.applicable_actions(&state, &mut applicable);
        branching += applicable.len() as u64;
        if applicable.is_empty() {
            return end(actions, state, WalkTermination::DeadEnd, branching);
        }

        let action = match select(&applicable, tracker, strategy, rng) {
            Ok(action) => action,
            // Raised only for an empty set, which is handled above.
            Err(SelectionError::NoApplicableActions) => {
                return end(actions, state, WalkTermination::DeadEnd, branching);
            }
        };
        model.apply(action, &mut state);
        actions.push(action);

        if state.satisfies(goal) {
            tracker.record_step(action, StepOutcome::SucceededWalk);
            return end(actions, state, WalkTermination::GoalReached, branching);
        }
        tracker.record_step(action, StepOutcome::FailedStep);
    }

    end(actions, state, WalkTermination::StepBudgetExhausted, branching)
}
