//! Harness runner: compile, search, replay-validate, report.
//!
//! # Pipeline
//!
//! ```text
//! encode_payload() → compile()
//!   → search() under a deadline-bound CancelToken (rejects unsupported requirements)
//!   → validate_plan() → SearchReportV1 → RunReportV1
//! ```
//!
//! The runner implements no search or proof logic itself.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use mrw_kernel::operators::action::ActionId;
use mrw_kernel::problem::compile::{compile, CompilationFailure};
use mrw_kernel::problem::problem::ProblemV1;
use mrw_kernel::proof::canon::{to_canonical_json_bytes, CanonError};
use mrw_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use mrw_kernel::proof::replay::{validate_plan, PlanVerdict, ReplayError};
use mrw_search::cancel::CancelToken;
use mrw_search::error::SearchError;
use mrw_search::observer::SearchObserver;
use mrw_search::report::{OutcomeKindV1, SearchReportV1};
use mrw_search::search::search;

use crate::config::RunConfigV1;
use crate::contract::{WorldError, WorldV1};

pub const RUN_REPORT_SCHEMA_VERSION: &str = "mrw.run_report.v1";

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    World(#[from] WorldError),
    #[error(transparent)]
    Compilation(#[from] CompilationFailure),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Replay(#[from] ReplayError),
    #[error(transparent)]
    Canon(#[from] CanonError),
    /// The engine claimed a goal-reaching plan that does not replay to the
    /// goal. Always an engine bug.
    #[error("goal plan failed replay: {verdict:?}")]
    GoalPlanRejected { verdict: VerdictV1 },
}

/// Replay verdict in report form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VerdictV1 {
    GoalReached,
    GoalNotReached { unsatisfied: usize },
    InapplicableStep { step_index: usize, action: String },
    /// No plan was returned.
    NoPlan,
}

impl VerdictV1 {
    fn from_verdict(problem: &ProblemV1, verdict: &PlanVerdict) -> Self {
        match verdict {
            PlanVerdict::GoalReached => Self::GoalReached,
            PlanVerdict::GoalNotReached { unsatisfied } => Self::GoalNotReached {
                unsatisfied: *unsatisfied,
            },
            PlanVerdict::InapplicableStep { step_index, action } => Self::InapplicableStep {
                step_index: *step_index,
                action: name_of(problem, *action),
            },
        }
    }
}

fn name_of(problem: &ProblemV1, id: ActionId) -> String {
    problem
        .action(id)
        .map_or_else(|| id.to_string(), |a| a.name().to_string())
}

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReportV1 {
    pub schema_version: String,
    /// World id or problem file name.
    pub source: String,
    pub problem_digest: String,
    pub outcome: OutcomeKindV1,
    pub plan: Vec<String>,
    pub verdict: VerdictV1,
    pub search: SearchReportV1,
    /// Wall-clock time for compile + search + replay. Not part of
    /// [`RunReportV1::deterministic_digest`].
    pub elapsed_ms: u64,
}

impl RunReportV1 {
    /// A plan was returned, goal-reaching or closest attempt.
    #[must_use]
    pub fn has_plan(&self) -> bool {
        self.outcome != OutcomeKindV1::NoPlan
    }

    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.outcome == OutcomeKindV1::GoalReached
    }

    #[must_use]
    pub fn plan_length(&self) -> usize {
        self.plan.len()
    }

    /// Digest over the report with `elapsed_ms` zeroed, so equal seeds
    /// give equal digests across runs and processes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn deterministic_digest(&self) -> Result<ContentHash, CanonError> {
        let basis = Self {
            elapsed_ms: 0,
            ..self.clone()
        };
        Ok(canonical_hash(
            HashDomain::RunReport,
            &to_canonical_json_bytes(&basis)?,
        ))
    }
}

/// Run a world through the full pipeline.
///
/// # Errors
///
/// Returns [`RunError`] if encoding, compilation or pre-flight search
/// validation fails, or if a goal plan does not replay.
pub fn run_world(
    world: &dyn WorldV1,
    config: &RunConfigV1,
    observer: &mut dyn SearchObserver,
) -> Result<RunReportV1, RunError> {
    let payload = world.encode_payload()?;
    run_problem(world.world_id(), &payload, config, observer)
}

/// Run a JSON problem payload through the full pipeline.
///
/// # Errors
///
/// See [`run_world`].
pub fn run_problem(
    source: &str,
    payload: &[u8],
    config: &RunConfigV1,
    observer: &mut dyn SearchObserver,
) -> Result<RunReportV1, RunError> {
    let started = Instant::now();
    let problem = compile(payload)?;
    tracing::info!(
        source,
        problem = problem.name(),
        digest = %problem.digest(),
        fluents = problem.fluent_count(),
        actions = problem.actions().len(),
        "problem compiled"
    );

    let policy = config.to_policy();
    let cancel = CancelToken::with_timeout(config.timeout());
    let result = search(&problem, &policy, observer, &cancel)?;

    let verdict = match result.plan() {
        Some(plan) => VerdictV1::from_verdict(&problem, &validate_plan(&problem, plan)?),
        None => VerdictV1::NoPlan,
    };
    if result.is_goal_reached() && verdict != VerdictV1::GoalReached {
        return Err(RunError::GoalPlanRejected { verdict });
    }

    let search_report = SearchReportV1::new(&problem, &policy, &result);
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    tracing::info!(
        source,
        outcome = ?search_report.outcome,
        plan_length = search_report.plan_length,
        elapsed_ms,
        "run finished"
    );

    Ok(RunReportV1 {
        schema_version: RUN_REPORT_SCHEMA_VERSION.into(),
        source: source.into(),
        problem_digest: problem.digest().as_str().into(),
        outcome: search_report.outcome,
        plan: search_report.plan.clone(),
        verdict,
        search: search_report,
        elapsed_ms,
    })
}
