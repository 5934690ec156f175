//! Search entry points and the walk loop.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use mrw_kernel::carrier::condition::ConditionV1;
use mrw_kernel::operators::action::ActionId;

use crate::cancel::CancelToken;
use crate::contract::PlanningModelV1;
use crate::error::SearchError;
use crate::evaluator::unsatisfied_literals;
use crate::observer::{NoopObserver, SearchObserver, WalkSummaryV1};
use crate::policy::SearchPolicyV1;
use crate::selector::Strategy;
use crate::stats::{ActionStatsV1, StatisticsTracker, WalkCountersV1};
use crate::walk::{run_walk, WalkResult};

/// The plan a search hands back, tagged by what it is worth.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    /// A walk reached the goal; `plan` replays to a goal state.
    GoalReached { plan: Vec<ActionId> },
    /// No walk reached the goal. `plan` is the lowest-heuristic failed walk
    /// and does NOT reach the goal.
    ClosestAttempt {
        plan: Vec<ActionId>,
        heuristic: f64,
        unsatisfied: usize,
    },
    /// Nothing worth returning.
    NoPlan,
}

/// Why the walk loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReasonV1 {
    GoalReached,
    WalkBudgetExhausted,
    Cancelled,
}

/// A strategy latch and the walk after which it fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationV1 {
    pub strategy: Strategy,
    pub walk_index: u64,
}

/// Final statistics of one search call.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStatsV1 {
    pub counters: WalkCountersV1,
    pub actions: Vec<ActionStatsV1>,
    pub activations: Vec<ActivationV1>,
    pub final_strategy: Strategy,
}

/// Result of a search execution.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub outcome: PlanOutcome,
    pub termination: TerminationReasonV1,
    pub stats: SearchStatsV1,
}

impl SearchResult {
    /// The returned action sequence, goal-reaching or not.
    #[must_use]
    pub fn plan(&self) -> Option<&[ActionId]> {
        match &self.outcome {
            PlanOutcome::GoalReached { plan } | PlanOutcome::ClosestAttempt { plan, .. } => {
                Some(plan)
            }
            PlanOutcome::NoPlan => None,
        }
    }

    #[must_use]
    pub const fn is_goal_reached(&self) -> bool {
        matches!(self.outcome, PlanOutcome::GoalReached { .. })
    }
}

/// Run a search with defaults for everything but the policy and return the
/// plan, if any. A closest attempt counts as a plan.
///
/// # Errors
///
/// See [`search`].
pub fn solve<M>(model: &M, policy: &SearchPolicyV1) -> Result<Option<Vec<ActionId>>, SearchError>
where
    M: PlanningModelV1 + ?Sized,
{
    let result = search(model, policy, &mut NoopObserver, &CancelToken::new())?;
    Ok(result.plan().map(<[ActionId]>::to_vec))
}

/// Run a search seeded from `policy.seed`, or from OS entropy if unset.
///
/// A search that finds nothing returns `Ok` with [`PlanOutcome::NoPlan`].
///
/// # Errors
///
/// Returns [`SearchError::InvalidConfiguration`] for an invalid policy,
/// [`SearchError::UnsupportedProblem`] if the model declares requirements
/// the engine cannot handle, and [`SearchError::WorkerPool`] if parallel
/// workers cannot be started.
pub fn search<M>(
    model: &M,
    policy: &SearchPolicyV1,
    observer: &mut dyn SearchObserver,
    cancel: &CancelToken,
) -> Result<SearchResult, SearchError>
where
    M: PlanningModelV1 + ?Sized,
{
    policy.validate()?;
    let mut rng = policy
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    search_with_rng(model, policy, &mut rng, observer, cancel)
}

/// Run a search drawing all randomness from `rng`. `policy.seed` is ignored.
///
/// # Errors
///
/// See [`search`].
pub fn search_with_rng<M, R>(
    model: &M,
    policy: &SearchPolicyV1,
    rng: &mut R,
    observer: &mut dyn SearchObserver,
    cancel: &CancelToken,
) -> Result<SearchResult, SearchError>
where
    M: PlanningModelV1 + ?Sized,
    R: Rng + ?Sized,
{
    policy.validate()?;
    let unsupported = model.unsupported_requirements();
    if !unsupported.is_empty() {
        return Err(SearchError::UnsupportedProblem {
            requirements: unsupported,
        });
    }

    tracing::info!(
        actions = model.action_count(),
        num_walks = policy.num_walks,
        max_steps = policy.max_steps_per_walk,
        workers = policy.workers,
        "search started"
    );

    let mut driver = Driver::new(model.action_count(), model.goal(), policy, observer);
    let termination = if policy.workers == 1 {
        run_sequential(model, policy, rng, cancel, &mut driver)
    } else {
        run_parallel(model, policy, rng, cancel, &mut driver)?
    };
    let result = driver.finish(termination);

    tracing::info!(
        termination = ?result.termination,
        goal_reached = result.is_goal_reached(),
        plan_length = ?result.plan().map(<[_]>::len),
        walks = result.stats.counters.total_walks,
        dead_ends = result.stats.counters.dead_ends,
        "search finished"
    );
    driver.observer.search_finished(&result);
    Ok(result)
}

fn run_sequential<M, R>(
    model: &M,
    policy: &SearchPolicyV1,
    rng: &mut R,
    cancel: &CancelToken,
    driver: &mut Driver<'_>,
) -> TerminationReasonV1
where
    M: PlanningModelV1 + ?Sized,
    R: Rng + ?Sized,
{
    for _ in 0..policy.num_walks {
        if cancel.is_cancelled() {
            return TerminationReasonV1::Cancelled;
        }
        let walk = run_walk(
            model,
            model.initial_state(),
            model.goal(),
            policy.max_steps_per_walk,
            &mut driver.tracker,
            rng,
        );
        driver
            .tracker
            .record_walk_outcome(walk.branching, walk.hit_dead_end());
        if driver.absorb(walk) {
            return TerminationReasonV1::GoalReached;
        }
    }
    TerminationReasonV1::WalkBudgetExhausted
}

// Batches of `workers` walks run against a snapshot of the statistics taken
// at batch start, each with a seed drawn in order from `rng`. Results are
// merged in walk order, so a fixed seed gives a fixed outcome.
fn run_parallel<M, R>(
    model: &M,
    policy: &SearchPolicyV1,
    rng: &mut R,
    cancel: &CancelToken,
    driver: &mut Driver<'_>,
) -> Result<TerminationReasonV1, SearchError>
where
    M: PlanningModelV1 + ?Sized,
    R: Rng + ?Sized,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(policy.workers)
        .build()
        .map_err(|e| SearchError::WorkerPool {
            detail: e.to_string(),
        })?;

    let mut remaining = policy.num_walks;
    while remaining > 0 {
        if cancel.is_cancelled() {
            return Ok(TerminationReasonV1::Cancelled);
        }
        let batch = remaining.min(policy.workers as u64);
        let seeds: Vec<u64> = (0..batch).map(|_| rng.next_u64()).collect();
        let snapshot = &driver.tracker;
        let walks: Vec<WalkResult> = pool.install(|| {
            seeds
                .par_iter()
                .map(|&seed| {
                    let mut local = snapshot.clone();
                    let mut walk_rng = StdRng::seed_from_u64(seed);
                    run_walk(
                        model,
                        model.initial_state(),
                        model.goal(),
                        policy.max_steps_per_walk,
                        &mut local,
                        &mut walk_rng,
                    )
                })
                .collect()
        });
        remaining -= batch;

        for walk in walks {
            driver.tracker.merge_walk(&walk);
            if driver.absorb(walk) {
                return Ok(TerminationReasonV1::GoalReached);
            }
        }
    }
    Ok(TerminationReasonV1::WalkBudgetExhausted)
}

// Bookkeeping shared by both loops.
struct Driver<'a> {
    goal: &'a ConditionV1,
    policy: &'a SearchPolicyV1,
    observer: &'a mut dyn SearchObserver,
    tracker: StatisticsTracker,
    activations: Vec<ActivationV1>,
    success: Option<Vec<ActionId>>,
    best_plan: Vec<ActionId>,
    best_heuristic: f64,
    best_unsatisfied: usize,
}

impl<'a> Driver<'a> {
    fn new(
        action_count: usize,
        goal: &'a ConditionV1,
        policy: &'a SearchPolicyV1,
        observer: &'a mut dyn SearchObserver,
    ) -> Self {
        Self {
            goal,
            policy,
            observer,
            tracker: StatisticsTracker::for_policy(action_count, policy),
            activations: Vec::new(),
            success: None,
            best_plan: Vec::new(),
            best_heuristic: f64::INFINITY,
            best_unsatisfied: 0,
        }
    }

    /// Handle a walk whose outcome is already in the tracker. Returns true
    /// when the walk reached the goal and the search should stop.
    fn absorb(&mut self, walk: WalkResult) -> bool {
        let walk_index = self.tracker.counters().total_walks.saturating_sub(1);
        let unsatisfied =
            (!walk.succeeded()).then(|| unsatisfied_literals(&walk.final_state, self.goal));
        #[allow(clippy::cast_precision_loss)]
        let heuristic = unsatisfied.map(|u| self.policy.heuristic_weight * u as f64);

        self.observer.walk_completed(&WalkSummaryV1 {
            walk_index,
            length: walk.actions.len(),
            termination: walk.termination,
            branching: walk.branching,
            heuristic,
            strategy: walk.strategy,
        });

        if (walk_index + 1) % self.policy.activation_interval == 0 {
            for strategy in self.tracker.evaluate_activation() {
                tracing::info!(%strategy, walk = walk_index, "strategy activated");
                self.activations.push(ActivationV1 {
                    strategy,
                    walk_index,
                });
                self.observer.strategy_activated(strategy, walk_index);
            }
        }

        match (unsatisfied, heuristic) {
            (Some(unsatisfied), Some(heuristic)) => {
                if heuristic < self.best_heuristic {
                    self.best_heuristic = heuristic;
                    self.best_unsatisfied = unsatisfied;
                    self.best_plan = walk.actions;
                }
                false
            }
            _ => {
                self.success = Some(walk.actions);
                true
            }
        }
    }

    fn finish(&mut self, termination: TerminationReasonV1) -> SearchResult {
        let outcome = if let Some(plan) = self.success.take() {
            PlanOutcome::GoalReached { plan }
        } else if self.best_plan.is_empty() {
            PlanOutcome::NoPlan
        } else {
            PlanOutcome::ClosestAttempt {
                plan: std::mem::take(&mut self.best_plan),
                heuristic: self.best_heuristic,
                unsatisfied: self.best_unsatisfied,
            }
        };
        SearchResult {
            outcome,
            termination,
            stats: SearchStatsV1 {
                counters: self.tracker.counters(),
                actions: self.tracker.actions().to_vec(),
                activations: self.activations.clone(),
                final_strategy: self.tracker.strategy(),
            },
        }
    }
}
