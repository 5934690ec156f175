//! Instrumentation hooks.

use crate::search::SearchResult;
use crate::selector::Strategy;
use crate::walk::WalkTermination;

/// What an observer learns about one completed walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkSummaryV1 {
    /// Zero-based walk index within the search.
    pub walk_index: u64,
    pub length: usize,
    pub termination: WalkTermination,
    pub branching: u64,
    /// Weighted heuristic at the final state. `None` for successful walks.
    pub heuristic: Option<f64>,
    pub strategy: Strategy,
}

/// Receives search events. All methods default to no-ops.
///
/// Events arrive in walk order on the driver's thread, also in
/// parallel mode.
pub trait SearchObserver {
    fn walk_completed(&mut self, _walk: &WalkSummaryV1) {}

    /// `strategy` latched after `walk_index + 1` walks.
    fn strategy_activated(&mut self, _strategy: Strategy, _walk_index: u64) {}

    fn search_finished(&mut self, _result: &SearchResult) {}
}

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Forwards events to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn walk_completed(&mut self, walk: &WalkSummaryV1) {
        tracing::debug!(
            walk = walk.walk_index,
            length = walk.length,
            termination = ?walk.termination,
            branching = walk.branching,
            heuristic = ?walk.heuristic,
            strategy = %walk.strategy,
            "walk completed"
        );
    }

    fn strategy_activated(&mut self, strategy: Strategy, walk_index: u64) {
        tracing::debug!(%strategy, walk = walk_index, "strategy activated");
    }

    fn search_finished(&mut self, result: &SearchResult) {
        tracing::debug!(
            termination = ?result.termination,
            plan_length = ?result.plan().map(<[_]>::len),
            walks = result.stats.counters.total_walks,
            "search finished"
        );
    }
}
