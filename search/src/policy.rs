//! Search policy types.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Walk budgets, randomness and strategy-activation thresholds.
///
/// Validated eagerly by [`SearchPolicyV1::validate`]; the driver refuses to
/// start on an invalid policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPolicyV1 {
    /// Hard cap on walks per search.
    pub num_walks: u64,
    /// Step cap per walk.
    pub max_steps_per_walk: usize,
    /// Fixed seed for reproducible runs. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Multiplier on the unsatisfied-literal count used to rank attempts.
    pub heuristic_weight: f64,
    /// Activation thresholds are evaluated every this many walks.
    pub activation_interval: u64,
    /// Dead-end avoidance latches when `dead_ends / walks >= threshold`.
    pub dead_end_rate_threshold: f64,
    /// Helpful-action bias latches when `branching_sum / walks > threshold`
    /// (integer average).
    pub branching_threshold: u64,
    /// Walks run concurrently per batch. `1` is the sequential algorithm.
    pub workers: usize,
}

impl SearchPolicyV1 {
    /// Reject out-of-range fields.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidConfiguration`] for zero budgets, a
    /// non-finite or non-positive heuristic weight, a zero activation
    /// interval, a dead-end threshold outside `[0, 1]`, or zero workers.
    pub fn validate(&self) -> Result<(), SearchError> {
        let invalid = |detail: &str| {
            Err(SearchError::InvalidConfiguration {
                detail: detail.into(),
            })
        };
        if self.num_walks == 0 {
            return invalid("num_walks must be positive");
        }
        if self.max_steps_per_walk == 0 {
            return invalid("max_steps_per_walk must be positive");
        }
        if !self.heuristic_weight.is_finite() || self.heuristic_weight <= 0.0 {
            return invalid("heuristic_weight must be finite and positive");
        }
        if self.activation_interval == 0 {
            return invalid("activation_interval must be positive");
        }
        if !(0.0..=1.0).contains(&self.dead_end_rate_threshold) {
            return invalid("dead_end_rate_threshold must lie in [0, 1]");
        }
        if self.workers == 0 {
            return invalid("workers must be positive");
        }
        Ok(())
    }

    /// Same policy with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            num_walks: 4000,
            max_steps_per_walk: 30,
            seed: None,
            heuristic_weight: 1.0,
            activation_interval: 100,
            dead_end_rate_threshold: 0.5,
            branching_threshold: 1000,
            workers: 1,
        }
    }
}
