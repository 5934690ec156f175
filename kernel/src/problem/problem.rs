//! `ProblemV1`: a compiled, grounded planning problem.

use std::collections::BTreeSet;

use crate::carrier::condition::ConditionV1;
use crate::carrier::state::StateV1;
use crate::operators::action::{ActionId, ActionV1};
use crate::operators::action_registry::ActionRegistryV1;
use crate::problem::requirement::Requirement;
use crate::proof::hash::ContentHash;

/// A compiled planning problem: actions, initial state, goal and declared
/// requirements over one fluent universe.
///
/// Built only by [`crate::problem::compile::compile`]; immutable afterwards.
/// The search reads it concurrently from every walk.
#[derive(Debug, Clone)]
pub struct ProblemV1 {
    pub(crate) name: String,
    pub(crate) fluent_names: Vec<String>,
    pub(crate) actions: ActionRegistryV1,
    pub(crate) initial_state: StateV1,
    pub(crate) goal: ConditionV1,
    pub(crate) requirements: BTreeSet<Requirement>,
    pub(crate) digest: ContentHash,
}

impl ProblemV1 {
    /// Problem name from the payload.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of grounded fluents.
    #[must_use]
    pub fn fluent_count(&self) -> usize {
        self.fluent_names.len()
    }

    /// Name of fluent `index`.
    #[must_use]
    pub fn fluent_name(&self, index: usize) -> Option<&str> {
        self.fluent_names.get(index).map(String::as_str)
    }

    /// The ordered action catalog.
    #[must_use]
    pub const fn actions(&self) -> &ActionRegistryV1 {
        &self.actions
    }

    /// Look up one action.
    #[must_use]
    pub fn action(&self, id: ActionId) -> Option<&ActionV1> {
        self.actions.get(id)
    }

    #[must_use]
    pub const fn initial_state(&self) -> &StateV1 {
        &self.initial_state
    }

    #[must_use]
    pub const fn goal(&self) -> &ConditionV1 {
        &self.goal
    }

    /// Declared requirement keys.
    #[must_use]
    pub const fn requirements(&self) -> &BTreeSet<Requirement> {
        &self.requirements
    }

    /// Declared keys the engine cannot handle, in key order.
    #[must_use]
    pub fn unsupported_requirements(&self) -> Vec<Requirement> {
        self.requirements
            .iter()
            .copied()
            .filter(|r| !r.is_supported())
            .collect()
    }

    /// Digest of the canonical problem payload.
    #[must_use]
    pub const fn digest(&self) -> &ContentHash {
        &self.digest
    }

    /// Grounded names for a plan. Unknown ids render as their `#n` handle.
    #[must_use]
    pub fn action_names(&self, plan: &[ActionId]) -> Vec<String> {
        plan.iter()
            .map(|&id| {
                self.action(id)
                    .map_or_else(|| id.to_string(), |a| a.name().to_string())
            })
            .collect()
    }
}
