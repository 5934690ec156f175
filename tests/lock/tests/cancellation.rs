//! Cancellation is checked before every walk (sequential) or batch
//! (parallel). A walk already running is never interrupted.

use std::time::Duration;

use lock_tests::search_test_helpers::{compile_world, seeded_policy, RecordingObserver};
use mrw_search::cancel::CancelToken;
use mrw_search::search::{search, PlanOutcome, TerminationReasonV1};

// Three steps never move four balls, so no walk ends the search early.
const WORLD: &str = "gripper:4";

#[test]
fn sequential_stops_after_the_cancelling_walk() {
    let problem = compile_world(WORLD);
    let token = CancelToken::new();
    let mut observer = RecordingObserver::cancelling_after(9, token.clone());
    let result = search(&problem, &seeded_policy(500, 3, 1), &mut observer, &token).unwrap();

    assert_eq!(result.termination, TerminationReasonV1::Cancelled);
    assert_eq!(result.stats.counters.total_walks, 10);
    assert_eq!(observer.walks.len(), 10);
    assert_eq!(observer.finished, 1);
    // Partial results still carry the closest attempt.
    assert!(matches!(result.outcome, PlanOutcome::ClosestAttempt { .. }));
}

#[test]
fn parallel_finishes_the_running_batch() {
    let problem = compile_world(WORLD);
    let policy = {
        let mut p = seeded_policy(500, 3, 1);
        p.workers = 4;
        p
    };
    let token = CancelToken::new();
    let mut observer = RecordingObserver::cancelling_after(9, token.clone());
    let result = search(&problem, &policy, &mut observer, &token).unwrap();

    // Walk 9 sits in the third batch (8..12), which is merged whole.
    assert_eq!(result.termination, TerminationReasonV1::Cancelled);
    assert_eq!(result.stats.counters.total_walks, 12);
    assert_eq!(observer.walks.len(), 12);
}

#[test]
fn expired_deadline_runs_no_walks() {
    let problem = compile_world(WORLD);
    let token = CancelToken::with_timeout(Duration::ZERO);
    let mut observer = RecordingObserver::default();
    let result = search(&problem, &seeded_policy(500, 3, 1), &mut observer, &token).unwrap();

    assert_eq!(result.termination, TerminationReasonV1::Cancelled);
    assert_eq!(result.stats.counters.total_walks, 0);
    assert_eq!(result.outcome, PlanOutcome::NoPlan);
    assert!(observer.walks.is_empty());
    assert_eq!(observer.finished, 1);
}

#[test]
fn cancelled_before_start_is_not_an_error() {
    let problem = compile_world("one_step");
    let token = CancelToken::new();
    token.cancel();
    let result = search(
        &problem,
        &seeded_policy(10, 5, 0),
        &mut RecordingObserver::default(),
        &token,
    )
    .unwrap();
    assert_eq!(result.termination, TerminationReasonV1::Cancelled);
    assert!(result.plan().is_none());
}
