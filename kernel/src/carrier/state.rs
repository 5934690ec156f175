//! `StateV1`: the mutable world snapshot a walk evolves.
//!
//! A state is the set of grounded fluents currently true. Walks clone the
//! problem's initial state once and then mutate their copy in place with
//! [`StateV1::apply`]; states are never shared between walks.

use crate::carrier::condition::{ConditionV1, EffectV1};
use crate::carrier::fluent_set::FluentSet;
use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// The set of fluents true in a world snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateV1 {
    fluents: FluentSet,
}

impl StateV1 {
    /// A state over `fluent_count` fluents with nothing true.
    #[must_use]
    pub fn new(fluent_count: usize) -> Self {
        Self {
            fluents: FluentSet::new(fluent_count),
        }
    }

    /// Wrap an existing fluent set.
    #[must_use]
    pub const fn from_fluents(fluents: FluentSet) -> Self {
        Self { fluents }
    }

    /// The true fluents.
    #[must_use]
    pub const fn fluents(&self) -> &FluentSet {
        &self.fluents
    }

    /// Number of addressable fluents.
    #[must_use]
    pub const fn fluent_count(&self) -> usize {
        self.fluents.len()
    }

    /// True if fluent `index` holds.
    #[must_use]
    pub fn holds(&self, index: usize) -> bool {
        self.fluents.contains(index)
    }

    /// True if this state satisfies `condition`.
    #[must_use]
    pub fn satisfies(&self, condition: &ConditionV1) -> bool {
        condition.is_satisfied_by(&self.fluents)
    }

    /// Apply an effect in place.
    pub fn apply(&mut self, effect: &EffectV1) {
        effect.apply_to(&mut self.fluents);
    }

    /// Identity bytes for hashing (universe size + member words, LE).
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        self.fluents.to_le_bytes()
    }

    /// Content digest of [`StateV1::identity_bytes`].
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        canonical_hash(HashDomain::StateIdentity, &self.identity_bytes())
    }
}
