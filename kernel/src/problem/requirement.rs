//! PDDL requirement keys and the subset the random-walk engine supports.

use serde::{Deserialize, Serialize};

/// A PDDL `:requirements` key declared by a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Requirement {
    Strips,
    Typing,
    NegativePreconditions,
    DisjunctivePreconditions,
    Equality,
    ExistentialPreconditions,
    UniversalPreconditions,
    QuantifiedPreconditions,
    ConditionalEffects,
    Adl,
    ActionCosts,
    Constraints,
    ContinuousEffects,
    DerivedPredicates,
    DurativeActions,
    DurationInequalities,
    Fluents,
    GoalUtilities,
    MethodConstraints,
    NumericFluents,
    ObjectFluents,
    Preferences,
    TimedInitialLiterals,
    Hierarchy,
}

impl Requirement {
    /// Every key, in declaration order.
    pub const ALL: &'static [Requirement] = &[
        Self::Strips,
        Self::Typing,
        Self::NegativePreconditions,
        Self::DisjunctivePreconditions,
        Self::Equality,
        Self::ExistentialPreconditions,
        Self::UniversalPreconditions,
        Self::QuantifiedPreconditions,
        Self::ConditionalEffects,
        Self::Adl,
        Self::ActionCosts,
        Self::Constraints,
        Self::ContinuousEffects,
        Self::DerivedPredicates,
        Self::DurativeActions,
        Self::DurationInequalities,
        Self::Fluents,
        Self::GoalUtilities,
        Self::MethodConstraints,
        Self::NumericFluents,
        Self::ObjectFluents,
        Self::Preferences,
        Self::TimedInitialLiterals,
        Self::Hierarchy,
    ];

    /// The PDDL spelling, including the leading colon.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strips => ":strips",
            Self::Typing => ":typing",
            Self::NegativePreconditions => ":negative-preconditions",
            Self::DisjunctivePreconditions => ":disjunctive-preconditions",
            Self::Equality => ":equality",
            Self::ExistentialPreconditions => ":existential-preconditions",
            Self::UniversalPreconditions => ":universal-preconditions",
            Self::QuantifiedPreconditions => ":quantified-preconditions",
            Self::ConditionalEffects => ":conditional-effects",
            Self::Adl => ":adl",
            Self::ActionCosts => ":action-costs",
            Self::Constraints => ":constraints",
            Self::ContinuousEffects => ":continuous-effects",
            Self::DerivedPredicates => ":derived-predicates",
            Self::DurativeActions => ":durative-actions",
            Self::DurationInequalities => ":duration-inequalities",
            Self::Fluents => ":fluents",
            Self::GoalUtilities => ":goal-utilities",
            Self::MethodConstraints => ":method-constraints",
            Self::NumericFluents => ":numeric-fluents",
            Self::ObjectFluents => ":object-fluents",
            Self::Preferences => ":preferences",
            Self::TimedInitialLiterals => ":timed-initial-literals",
            Self::Hierarchy => ":hierarchy",
        }
    }

    /// Parse the PDDL spelling. The leading colon is optional.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let key = s.strip_prefix(':').unwrap_or(s);
        Self::ALL
            .iter()
            .copied()
            .find(|r| &r.as_str()[1..] == key)
    }

    /// False for keys that need numeric, temporal, preference or
    /// hierarchical reasoning the engine does not do.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(
            self,
            Self::ActionCosts
                | Self::Constraints
                | Self::ContinuousEffects
                | Self::DerivedPredicates
                | Self::DurativeActions
                | Self::DurationInequalities
                | Self::Fluents
                | Self::GoalUtilities
                | Self::MethodConstraints
                | Self::NumericFluents
                | Self::ObjectFluents
                | Self::Preferences
                | Self::TimedInitialLiterals
                | Self::Hierarchy
        )
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Requirement {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or(value)
    }
}

impl From<Requirement> for String {
    fn from(value: Requirement) -> Self {
        value.as_str().to_string()
    }
}
