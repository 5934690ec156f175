//! Grounded actions and their opaque handles.

use crate::carrier::condition::{ConditionV1, EffectV1};
use crate::carrier::state::StateV1;

/// Opaque handle for an action: its position in the problem's ordered
/// action list.
///
/// The search core compares, hashes and indexes by `ActionId`; it never
/// looks inside an [`ActionV1`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionId(pub u32);

impl ActionId {
    /// The list index this handle refers to.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A grounded action: precondition plus unconditional effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionV1 {
    name: String,
    precondition: ConditionV1,
    effect: EffectV1,
}

impl ActionV1 {
    #[must_use]
    pub fn new(name: String, precondition: ConditionV1, effect: EffectV1) -> Self {
        Self {
            name,
            precondition,
            effect,
        }
    }

    /// Grounded name, e.g. `"pick ball1 rooma left"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn precondition(&self) -> &ConditionV1 {
        &self.precondition
    }

    #[must_use]
    pub const fn effect(&self) -> &EffectV1 {
        &self.effect
    }

    /// True if the precondition holds in `state`.
    #[must_use]
    pub fn is_applicable(&self, state: &StateV1) -> bool {
        state.satisfies(&self.precondition)
    }
}
