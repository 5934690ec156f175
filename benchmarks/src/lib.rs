//! Shared helpers for MRW benchmark suites.

use mrw_harness::config::RunConfigV1;
use mrw_harness::contract::WorldV1;
use mrw_harness::worlds::world_by_name;
use mrw_kernel::problem::compile::compile;
use mrw_kernel::problem::problem::ProblemV1;
use mrw_kernel::proof::hash::{canonical_hash, ContentHash};
use mrw_kernel::proof::hash_domain::HashDomain;
use mrw_search::cancel::CancelToken;
use mrw_search::observer::NoopObserver;
use mrw_search::policy::SearchPolicyV1;
use mrw_search::report::SearchReportV1;
use mrw_search::search::{search, SearchResult};

/// A world plus the seeded policy it is benchmarked under.
pub struct Regime {
    pub name: &'static str,
    pub world: Box<dyn WorldV1>,
    pub problem: ProblemV1,
    pub policy: SearchPolicyV1,
}

impl Regime {
    /// Run config equivalent to `policy`, for end-to-end harness runs.
    #[must_use]
    pub fn run_config(&self) -> RunConfigV1 {
        RunConfigV1 {
            num_walks: self.policy.num_walks,
            max_steps_per_walk: self.policy.max_steps_per_walk,
            seed: self.policy.seed,
            heuristic_weight: self.policy.heuristic_weight,
            activation_interval: self.policy.activation_interval,
            dead_end_rate_threshold: self.policy.dead_end_rate_threshold,
            branching_threshold: self.policy.branching_threshold,
            workers: self.policy.workers,
            ..RunConfigV1::default()
        }
    }
}

/// Compile `spec` once and pair it with a seeded policy.
///
/// # Panics
///
/// Panics if the world is unknown or fails to compile. Benchmark setup
/// failures are fatal.
#[must_use]
pub fn regime(name: &'static str, spec: &str, num_walks: u64, workers: usize) -> Regime {
    let world = world_by_name(spec).expect("known world");
    let payload = world.encode_payload().expect("encode_payload");
    let problem = compile(&payload).expect("compile");
    let policy = SearchPolicyV1 {
        num_walks,
        seed: Some(0x5eed),
        workers,
        ..SearchPolicyV1::default()
    };
    Regime {
        name,
        world,
        problem,
        policy,
    }
}

/// The standard regime set.
///
/// - `gripper_small`: goal found quickly, exercises the first-success exit.
/// - `gripper_large`: budget-limited, closest attempt returned.
/// - `trapdoor`: dead-end heavy, latches dead-end avoidance.
/// - `fanout`: wide branching, latches helpful bias.
/// - `gripper_parallel`: `gripper_large` on four workers.
#[must_use]
pub fn standard_regimes() -> Vec<Regime> {
    vec![
        regime("gripper_small", "gripper:2", 2_000, 1),
        regime("gripper_large", "gripper:8", 500, 1),
        regime("trapdoor", "trapdoor:16", 500, 1),
        regime("fanout", "fanout:1200", 200, 1),
        regime("gripper_parallel", "gripper:8", 500, 4),
    ]
}

/// Run `search()` on a prepared regime.
///
/// # Panics
///
/// Panics if `search()` returns an error. Benchmark runs are expected to succeed.
#[must_use]
pub fn run_search_only(regime: &Regime) -> SearchResult {
    search(
        &regime.problem,
        &regime.policy,
        &mut NoopObserver,
        &CancelToken::new(),
    )
    .expect("search should succeed in benchmarks")
}

/// Digest binding a benchmark run to its search report. Timed iterations
/// of a seeded regime must all produce the same guard, otherwise the
/// numbers measure different work.
///
/// # Panics
///
/// Panics if the report cannot be canonicalized.
#[must_use]
pub fn determinism_guard(regime: &Regime, result: &SearchResult) -> ContentHash {
    let report = SearchReportV1::new(&regime.problem, &regime.policy, result);
    let bytes = report.canonical_bytes().expect("canonical report bytes");
    canonical_hash(HashDomain::BenchGuard, &bytes)
}
