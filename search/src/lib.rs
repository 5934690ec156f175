//! MRW Search: adaptive Monte-Carlo random-walk planning.
//!
//! This crate provides the search layer. It depends only on `mrw_kernel`;
//! it does NOT depend on `mrw_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! mrw_kernel  ←  mrw_search  ←  mrw_harness
//! (planning      (walks, stats,   (worlds, runner,
//!  model)         strategies)      result files)
//! ```
//!
//! # Key types
//!
//! - [`PlanningModelV1`]: what the engine needs from a planning problem
//! - [`SearchPolicyV1`]: walk budgets, seed, activation thresholds, workers
//! - [`StatisticsTracker`]: per-action counters and strategy latches
//! - [`Strategy`]: the action-selection strategy in force
//! - [`SearchResult`]: tagged plan outcome plus termination and counters
//! - [`SearchObserver`]: instrumentation hooks
//! - [`CancelToken`]: cooperative cancellation checked between walks

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cancel;
pub mod contract;
pub mod error;
pub mod evaluator;
pub mod observer;
pub mod policy;
pub mod report;
pub mod search;
pub mod selector;
pub mod stats;
pub mod walk;

pub use cancel::CancelToken;
pub use contract::PlanningModelV1;
pub use error::{SearchError, SelectionError};
pub use observer::{NoopObserver, SearchObserver, TracingObserver, WalkSummaryV1};
pub use policy::SearchPolicyV1;
pub use report::SearchReportV1;
pub use search::{
    search, search_with_rng, solve, ActivationV1, PlanOutcome, SearchResult, SearchStatsV1,
    TerminationReasonV1,
};
pub use selector::Strategy;
pub use stats::{ActionStatsV1, StatisticsTracker, StepOutcome};
pub use walk::{WalkResult, WalkTermination};
