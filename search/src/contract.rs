//! Planning model contract trait.

use mrw_kernel::carrier::condition::ConditionV1;
use mrw_kernel::carrier::state::StateV1;
use mrw_kernel::operators::action::ActionId;
use mrw_kernel::problem::problem::ProblemV1;
use mrw_kernel::problem::requirement::Requirement;

/// What the engine reads from a planning problem.
///
/// # Contract
///
/// - The action set is fixed for the whole search: ids `0..action_count()`
///   are valid and stable.
/// - `is_applicable` and `apply` are pure with respect to the model; only
///   the passed state changes.
/// - Implementations are shared read-only across worker threads.
pub trait PlanningModelV1: Sync {
    /// Number of actions. Valid ids are `ActionId(0)..ActionId(n)`.
    fn action_count(&self) -> usize;

    /// Whether `action` may be applied in `state`.
    fn is_applicable(&self, action: ActionId, state: &StateV1) -> bool;

    /// Apply `action`'s effect to `state` in place.
    fn apply(&self, action: ActionId, state: &mut StateV1);

    fn initial_state(&self) -> &StateV1;

    fn goal(&self) -> &ConditionV1;

    /// Declared requirements the engine cannot handle.
    fn unsupported_requirements(&self) -> Vec<Requirement>;

    /// Fill `out` with the actions applicable in `state`, in id order.
    ///
    /// O(|actions|); this filter dominates walk cost.
    fn applicable_actions(&self, state: &StateV1, out: &mut Vec<ActionId>) {
        out.clear();
        #[allow(clippy::cast_possible_truncation)]
        out.extend(
            (0..self.action_count())
                .map(|i| ActionId(i as u32))
                .filter(|&id| self.is_applicable(id, state)),
        );
    }
}

impl PlanningModelV1 for ProblemV1 {
    fn action_count(&self) -> usize {
        self.actions().len()
    }

    fn is_applicable(&self, action: ActionId, state: &StateV1) -> bool {
        self.action(action).is_some_and(|a| a.is_applicable(state))
    }

    fn apply(&self, action: ActionId, state: &mut StateV1) {
        if let Some(a) = self.action(action) {
            state.apply(a.effect());
        }
    }

    fn initial_state(&self) -> &StateV1 {
        ProblemV1::initial_state(self)
    }

    fn goal(&self) -> &ConditionV1 {
        ProblemV1::goal(self)
    }

    fn unsupported_requirements(&self) -> Vec<Requirement> {
        ProblemV1::unsupported_requirements(self)
    }

    // Iterates the catalog directly instead of re-resolving each id.
    fn applicable_actions(&self, state: &StateV1, out: &mut Vec<ActionId>) {
        out.clear();
        out.extend(
            self.actions()
                .iter()
                .filter(|(_, a)| a.is_applicable(state))
                .map(|(id, _)| id),
        );
    }
}
