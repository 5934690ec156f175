//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. A search that finds
//! nothing is not an error: it returns [`crate::search::PlanOutcome::NoPlan`].
//! Dead ends and failed steps are recorded in statistics, never surfaced.

use mrw_kernel::problem::requirement::Requirement;

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before the first walk runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A policy field is out of range.
    #[error("invalid search configuration: {detail}")]
    InvalidConfiguration { detail: String },
    /// The problem declares requirements the engine cannot handle.
    #[error("unsupported problem requirements: {}", format_requirements(.requirements))]
    UnsupportedProblem { requirements: Vec<Requirement> },
    /// The worker pool could not be built.
    #[error("worker pool: {detail}")]
    WorkerPool { detail: String },
}

fn format_requirements(requirements: &[Requirement]) -> String {
    requirements
        .iter()
        .map(|r| r.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The selector was called with nothing to choose from.
///
/// Callers check for an empty applicable set first; a walk step with no
/// applicable action is a dead end, not a selection failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("no applicable actions to select from")]
    NoApplicableActions,
}
