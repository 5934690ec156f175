//! Helpers that compile worlds, build explicit policies, and record
//! observer events.
//!
//! Tests should build policies through [`seeded_policy`] so every knob is
//! set explicitly and default drift cannot change a lock test silently.

use mrw_harness::worlds::world_by_name;
use mrw_kernel::problem::compile::compile;
use mrw_kernel::problem::problem::ProblemV1;
use mrw_search::cancel::CancelToken;
use mrw_search::observer::{SearchObserver, WalkSummaryV1};
use mrw_search::policy::SearchPolicyV1;
use mrw_search::search::{search, SearchResult};
use mrw_search::selector::Strategy;

/// Compile a world spec such as `"gripper:3"`.
///
/// # Panics
///
/// Panics if the spec is unknown or the payload does not compile. These are
/// test-only invariants.
#[must_use]
pub fn compile_world(spec: &str) -> ProblemV1 {
    let world = world_by_name(spec).unwrap_or_else(|e| panic!("world {spec}: {e}"));
    let payload = world
        .encode_payload()
        .unwrap_or_else(|e| panic!("encode {spec}: {e}"));
    compile(&payload).unwrap_or_else(|e| panic!("compile {spec}: {e}"))
}

/// Explicit policy: every knob set, seeded.
#[must_use]
pub fn seeded_policy(num_walks: u64, max_steps_per_walk: usize, seed: u64) -> SearchPolicyV1 {
    SearchPolicyV1 {
        num_walks,
        max_steps_per_walk,
        seed: Some(seed),
        heuristic_weight: 1.0,
        activation_interval: 100,
        dead_end_rate_threshold: 0.5,
        branching_threshold: 1000,
        workers: 1,
    }
}

/// Search with a fresh token, recording every event.
///
/// # Panics
///
/// Panics if pre-flight validation fails.
#[must_use]
pub fn recorded_search(
    problem: &ProblemV1,
    policy: &SearchPolicyV1,
) -> (SearchResult, RecordingObserver) {
    let mut observer = RecordingObserver::default();
    let result = search(problem, policy, &mut observer, &CancelToken::new())
        .unwrap_or_else(|e| panic!("search {}: {e}", problem.name()));
    (result, observer)
}

/// Observer that keeps every event in arrival order. Optionally cancels a
/// token once a given walk index completes.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub walks: Vec<WalkSummaryV1>,
    pub activations: Vec<(Strategy, u64)>,
    pub finished: usize,
    cancel_after: Option<(u64, CancelToken)>,
}

impl RecordingObserver {
    /// Cancel `token` as soon as walk `walk_index` completes.
    #[must_use]
    pub fn cancelling_after(walk_index: u64, token: CancelToken) -> Self {
        Self {
            cancel_after: Some((walk_index, token)),
            ..Self::default()
        }
    }
}

impl SearchObserver for RecordingObserver {
    fn walk_completed(&mut self, walk: &WalkSummaryV1) {
        self.walks.push(*walk);
        if let Some((index, token)) = &self.cancel_after {
            if walk.walk_index == *index {
                token.cancel();
            }
        }
    }

    fn strategy_activated(&mut self, strategy: Strategy, walk_index: u64) {
        self.activations.push((strategy, walk_index));
    }

    fn search_finished(&mut self, _result: &SearchResult) {
        self.finished += 1;
    }
}
