//! Statistics tracker: per-action counters, walk counters, and the
//! one-way strategy latches they drive.

use serde::{Deserialize, Serialize};

use mrw_kernel::operators::action::ActionId;

use crate::policy::SearchPolicyV1;
use crate::selector::Strategy;
use crate::walk::{WalkResult, WalkTermination};

/// Counters for one action. All start at zero and only grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionStatsV1 {
    pub successes: u64,
    pub failures: u64,
    pub helpful: u64,
}

/// What happened at one executed walk step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step reached the goal; the walk succeeded.
    SucceededWalk,
    /// The step did not reach the goal.
    FailedStep,
}

/// Walk-level counters for one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkCountersV1 {
    pub total_walks: u64,
    pub dead_ends: u64,
    /// Sum over all walk steps of the applicable-action count.
    pub branching_sum: u64,
}

/// Statistics for one search call.
///
/// Owned by the driver and passed by exclusive reference to the walk
/// executor and selector. Never shared across searches.
#[derive(Debug, Clone)]
pub struct StatisticsTracker {
    actions: Vec<ActionStatsV1>,
    counters: WalkCountersV1,
    dead_end_avoidance: bool,
    helpful_bias: bool,
    dead_end_rate_threshold: f64,
    branching_threshold: u64,
}

impl StatisticsTracker {
    /// Zeroed statistics for `action_count` actions with the given
    /// activation thresholds.
    #[must_use]
    pub fn new(action_count: usize, dead_end_rate_threshold: f64, branching_threshold: u64) -> Self {
        Self {
            actions: vec![ActionStatsV1::default(); action_count],
            counters: WalkCountersV1::default(),
            dead_end_avoidance: false,
            helpful_bias: false,
            dead_end_rate_threshold,
            branching_threshold,
        }
    }

    /// Zeroed statistics with thresholds from `policy`.
    #[must_use]
    pub fn for_policy(action_count: usize, policy: &SearchPolicyV1) -> Self {
        Self::new(
            action_count,
            policy.dead_end_rate_threshold,
            policy.branching_threshold,
        )
    }

    /// Counters for `action`. Unknown ids read as zero.
    #[must_use]
    pub fn action(&self, action: ActionId) -> ActionStatsV1 {
        self.actions
            .get(action.index())
            .copied()
            .unwrap_or_default()
    }

    #[must_use]
    pub fn actions(&self) -> &[ActionStatsV1] {
        &self.actions
    }

    #[must_use]
    pub const fn counters(&self) -> WalkCountersV1 {
        self.counters
    }

    /// Record one executed step.
    ///
    /// A goal-reaching step credits success and helpfulness to that action
    /// only; earlier actions of the same walk are not credited.
    pub fn record_step(&mut self, action: ActionId, outcome: StepOutcome) {
        let Some(entry) = self.actions.get_mut(action.index()) else {
            return;
        };
        match outcome {
            StepOutcome::SucceededWalk => {
                entry.successes += 1;
                entry.helpful += 1;
            }
            StepOutcome::FailedStep => entry.failures += 1,
        }
    }

    /// Record a finished walk's branching total and dead-end flag.
    pub fn record_walk_outcome(&mut self, branching: u64, hit_dead_end: bool) {
        self.counters.total_walks += 1;
        self.counters.branching_sum += branching;
        if hit_dead_end {
            self.counters.dead_ends += 1;
        }
    }

    /// Replay a walk produced against a private snapshot: every step, then
    /// the walk outcome. Used to merge parallel walks in walk order.
    pub fn merge_walk(&mut self, walk: &WalkResult) {
        let last = walk.actions.len().saturating_sub(1);
        for (i, &action) in walk.actions.iter().enumerate() {
            let outcome = if i == last && walk.termination == WalkTermination::GoalReached {
                StepOutcome::SucceededWalk
            } else {
                StepOutcome::FailedStep
            };
            self.record_step(action, outcome);
        }
        self.record_walk_outcome(walk.branching, walk.termination == WalkTermination::DeadEnd);
    }

    /// Check the activation thresholds and latch any strategy they cross.
    ///
    /// Returns the strategies that became active in this call, in
    /// activation order. Latches never reset.
    pub fn evaluate_activation(&mut self) -> Vec<Strategy> {
        let mut activated = Vec::new();
        let total = self.counters.total_walks;
        if total == 0 {
            return activated;
        }
        #[allow(clippy::cast_precision_loss)]
        let dead_end_rate = self.counters.dead_ends as f64 / total as f64;
        if !self.dead_end_avoidance && dead_end_rate >= self.dead_end_rate_threshold {
            self.dead_end_avoidance = true;
            activated.push(Strategy::DeadEndAvoiding);
        }
        if !self.helpful_bias && self.counters.branching_sum / total > self.branching_threshold {
            self.helpful_bias = true;
            activated.push(Strategy::HelpfulBiased);
        }
        activated
    }

    #[must_use]
    pub const fn dead_end_avoidance_active(&self) -> bool {
        self.dead_end_avoidance
    }

    #[must_use]
    pub const fn helpful_bias_active(&self) -> bool {
        self.helpful_bias
    }

    /// The strategy in force. Helpful-biased overrides dead-end-avoiding.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        if self.helpful_bias {
            Strategy::HelpfulBiased
        } else if self.dead_end_avoidance {
            Strategy::DeadEndAvoiding
        } else {
            Strategy::PureRandom
        }
    }
}
