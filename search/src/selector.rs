//! Action selector: the three strategies and uniform tie-breaking.

use rand::Rng;
use serde::{Deserialize, Serialize};

use mrw_kernel::operators::action::ActionId;

use crate::error::SelectionError;
use crate::stats::StatisticsTracker;

/// The action-selection strategy in force at a walk step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Uniform over the applicable actions.
    PureRandom,
    /// Uniform over the applicable actions with the fewest failures (MDA).
    DeadEndAvoiding,
    /// Uniform over applicable actions with positive helpful count, or
    /// over all of them if none has one (MHA).
    HelpfulBiased,
}

impl Strategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PureRandom => "pure_random",
            Self::DeadEndAvoiding => "dead_end_avoiding",
            Self::HelpfulBiased => "helpful_biased",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the next action from `applicable` under `strategy`.
///
/// Ties are broken uniformly at random, never by position.
///
/// # Errors
///
/// Returns [`SelectionError::NoApplicableActions`] if `applicable` is empty.
pub fn select<R: Rng + ?Sized>(
    applicable: &[ActionId],
    stats: &StatisticsTracker,
    strategy: Strategy,
    rng: &mut R,
) -> Result<ActionId, SelectionError> {
    if applicable.is_empty() {
        return Err(SelectionError::NoApplicableActions);
    }
    let chosen = match strategy {
        Strategy::PureRandom => applicable[rng.gen_range(0..applicable.len())],
        Strategy::DeadEndAvoiding => {
            let min = applicable
                .iter()
                .map(|&a| stats.action(a).failures)
                .min()
                .unwrap_or(0);
            pick_where(applicable, rng, |a| stats.action(a).failures == min)
        }
        Strategy::HelpfulBiased => {
            if applicable.iter().any(|&a| stats.action(a).helpful > 0) {
                pick_where(applicable, rng, |a| stats.action(a).helpful > 0)
            } else {
                applicable[rng.gen_range(0..applicable.len())]
            }
        }
    };
    Ok(chosen)
}

// Uniform choice among the actions matching `keep`. Caller guarantees at
// least one match.
fn pick_where<R: Rng + ?Sized>(
    applicable: &[ActionId],
    rng: &mut R,
    keep: impl Fn(ActionId) -> bool,
) -> ActionId {
    let count = applicable.iter().filter(|&&a| keep(a)).count();
    let nth = rng.gen_range(0..count.max(1));
    applicable
        .iter()
        .copied()
        .filter(|&a| keep(a))
        .nth(nth)
        .unwrap_or(applicable[0])
}
