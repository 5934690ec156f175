//! Goal/precondition literals and action effects.

use crate::carrier::fluent_set::FluentSet;

/// A conjunction of literals: fluents that must hold and fluents that must
/// not hold.
///
/// Used for both action preconditions and the problem goal. Immutable once
/// compiled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConditionV1 {
    positive: FluentSet,
    negative: FluentSet,
}

impl ConditionV1 {
    /// The empty condition (satisfied by every state) over `fluent_count` fluents.
    #[must_use]
    pub fn empty(fluent_count: usize) -> Self {
        Self {
            positive: FluentSet::new(fluent_count),
            negative: FluentSet::new(fluent_count),
        }
    }

    /// Build from explicit literal sets.
    ///
    /// Both sets must share the same universe size.
    #[must_use]
    pub fn new(positive: FluentSet, negative: FluentSet) -> Self {
        debug_assert_eq!(positive.len(), negative.len());
        Self { positive, negative }
    }

    /// Fluents that must hold.
    #[must_use]
    pub const fn positive(&self) -> &FluentSet {
        &self.positive
    }

    /// Fluents that must not hold.
    #[must_use]
    pub const fn negative(&self) -> &FluentSet {
        &self.negative
    }

    /// Total number of literals (positive + negative).
    #[must_use]
    pub fn literal_count(&self) -> usize {
        self.positive.count() + self.negative.count()
    }

    /// True if `fluents` satisfies every literal.
    #[must_use]
    pub fn is_satisfied_by(&self, fluents: &FluentSet) -> bool {
        self.positive.is_subset_of(fluents) && self.negative.is_disjoint_from(fluents)
    }

    /// Number of literals `fluents` violates: positive literals absent plus
    /// negative literals present.
    #[must_use]
    pub fn unsatisfied_count(&self, fluents: &FluentSet) -> usize {
        self.positive.count_missing_from(fluents) + self.negative.count_present_in(fluents)
    }
}

/// Unconditional add/delete effect of an action.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EffectV1 {
    add: FluentSet,
    delete: FluentSet,
}

impl EffectV1 {
    /// Build from add and delete lists sharing one universe size.
    #[must_use]
    pub fn new(add: FluentSet, delete: FluentSet) -> Self {
        debug_assert_eq!(add.len(), delete.len());
        Self { add, delete }
    }

    /// Fluents made true.
    #[must_use]
    pub const fn add(&self) -> &FluentSet {
        &self.add
    }

    /// Fluents made false.
    #[must_use]
    pub const fn delete(&self) -> &FluentSet {
        &self.delete
    }

    /// Apply to `fluents` in place: delete list first, then add list.
    pub fn apply_to(&self, fluents: &mut FluentSet) {
        fluents.difference_with(&self.delete);
        fluents.union_with(&self.add);
    }
}
