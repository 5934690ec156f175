//! `SearchReportV1`: a serializable, digestible summary of one search.
//!
//! Floats are left out (the heuristic value, the weight) so the report has
//! canonical JSON bytes; `unsatisfied` carries the same ranking information
//! as an integer.

use serde::{Deserialize, Serialize};

use mrw_kernel::problem::problem::ProblemV1;
use mrw_kernel::proof::canon::{to_canonical_json_bytes, CanonError};
use mrw_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use mrw_kernel::proof::plan_hash::plan_digest;

use crate::policy::SearchPolicyV1;
use crate::search::{ActivationV1, PlanOutcome, SearchResult, TerminationReasonV1};
use crate::selector::Strategy;

pub const SEARCH_REPORT_SCHEMA_VERSION: &str = "mrw.search_report.v1";

/// Kind of plan a search returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKindV1 {
    GoalReached,
    ClosestAttempt,
    NoPlan,
}

impl From<&PlanOutcome> for OutcomeKindV1 {
    fn from(outcome: &PlanOutcome) -> Self {
        match outcome {
            PlanOutcome::GoalReached { .. } => Self::GoalReached,
            PlanOutcome::ClosestAttempt { .. } => Self::ClosestAttempt,
            PlanOutcome::NoPlan => Self::NoPlan,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReportV1 {
    pub schema_version: String,
    pub problem_name: String,
    pub problem_digest: String,
    pub outcome: OutcomeKindV1,
    /// Action names in order. Empty for `no_plan`.
    pub plan: Vec<String>,
    pub plan_length: usize,
    /// `None` for `no_plan`.
    pub plan_digest: Option<String>,
    /// Goal literals the closest attempt misses. `None` otherwise.
    pub unsatisfied: Option<usize>,
    pub termination: TerminationReasonV1,
    pub walks_executed: u64,
    pub dead_ends: u64,
    pub branching_sum: u64,
    pub activations: Vec<ActivationV1>,
    pub final_strategy: Strategy,
    pub num_walks: u64,
    pub max_steps_per_walk: usize,
    pub seed: Option<u64>,
    pub workers: usize,
}

impl SearchReportV1 {
    #[must_use]
    pub fn new(problem: &ProblemV1, policy: &SearchPolicyV1, result: &SearchResult) -> Self {
        let plan = result.plan();
        let unsatisfied = match &result.outcome {
            PlanOutcome::ClosestAttempt { unsatisfied, .. } => Some(*unsatisfied),
            _ => None,
        };
        let counters = result.stats.counters;
        Self {
            schema_version: SEARCH_REPORT_SCHEMA_VERSION.into(),
            problem_name: problem.name().into(),
            problem_digest: problem.digest().as_str().into(),
            outcome: OutcomeKindV1::from(&result.outcome),
            plan: plan.map(|p| problem.action_names(p)).unwrap_or_default(),
            plan_length: plan.map_or(0, <[_]>::len),
            plan_digest: plan.map(|p| plan_digest(problem, p).as_str().to_string()),
            unsatisfied,
            termination: result.termination,
            walks_executed: counters.total_walks,
            dead_ends: counters.dead_ends,
            branching_sum: counters.branching_sum,
            activations: result.stats.activations.clone(),
            final_strategy: result.stats.final_strategy,
            num_walks: policy.num_walks,
            max_steps_per_walk: policy.max_steps_per_walk,
            seed: policy.seed,
            workers: policy.workers,
        }
    }

    /// Canonical JSON bytes of the report.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, CanonError> {
        to_canonical_json_bytes(self)
    }

    /// Digest of [`SearchReportV1::canonical_bytes`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            HashDomain::SearchReport,
            &self.canonical_bytes()?,
        ))
    }
}
