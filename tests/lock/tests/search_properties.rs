//! End-to-end properties of the random-walk search on compiled worlds.

use lock_tests::search_test_helpers::{compile_world, recorded_search, seeded_policy};
use mrw_kernel::operators::action::ActionId;
use mrw_kernel::proof::replay::{validate_plan, PlanVerdict};
use mrw_search::search::{solve, PlanOutcome, TerminationReasonV1};
use mrw_search::walk::WalkTermination;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Worked examples
// ---------------------------------------------------------------------------

#[test]
fn one_step_world_single_walk_single_step() {
    let problem = compile_world("one_step");
    let plan = solve(&problem, &seeded_policy(1, 1, 0)).unwrap();
    assert_eq!(plan, Some(vec![ActionId(0)]));
}

#[test]
fn stranded_world_dead_ends_every_walk() {
    let problem = compile_world("stranded");
    let (result, observer) = recorded_search(&problem, &seeded_policy(40, 30, 0));
    assert_eq!(result.outcome, PlanOutcome::NoPlan);
    assert_eq!(result.termination, TerminationReasonV1::WalkBudgetExhausted);
    assert_eq!(observer.walks.len(), 40);
    assert!(observer
        .walks
        .iter()
        .all(|w| w.termination == WalkTermination::DeadEnd && w.length == 0));
}

#[test]
fn gripper_plan_reaches_goal() {
    let problem = compile_world("gripper:2");
    let (result, observer) = recorded_search(&problem, &seeded_policy(4000, 30, 11));
    assert!(result.is_goal_reached());
    let plan = result.plan().unwrap();
    assert_eq!(validate_plan(&problem, plan).unwrap(), PlanVerdict::GoalReached);
    // First success stops the search.
    let last = observer.walks.last().unwrap();
    assert_eq!(last.termination, WalkTermination::GoalReached);
    assert_eq!(last.length, plan.len());
    assert_eq!(observer.finished, 1);
}

// ---------------------------------------------------------------------------
// Observer event stream
// ---------------------------------------------------------------------------

#[test]
fn walk_events_arrive_in_order_with_heuristics_on_failures() {
    let problem = compile_world("gripper:3");
    let (result, observer) = recorded_search(&problem, &seeded_policy(300, 8, 5));
    let indices: Vec<u64> = observer.walks.iter().map(|w| w.walk_index).collect();
    let expected: Vec<u64> = (0..result.stats.counters.total_walks).collect();
    assert_eq!(indices, expected);
    for walk in &observer.walks {
        assert_eq!(
            walk.heuristic.is_none(),
            walk.termination == WalkTermination::GoalReached
        );
        assert!(walk.length <= 8);
    }
}

#[test]
fn counters_match_event_stream() {
    let problem = compile_world("trapdoor:6");
    let (result, observer) = recorded_search(&problem, &seeded_policy(250, 30, 3));
    let counters = result.stats.counters;
    assert_eq!(counters.total_walks, observer.walks.len() as u64);
    assert_eq!(
        counters.dead_ends,
        observer
            .walks
            .iter()
            .filter(|w| w.termination == WalkTermination::DeadEnd)
            .count() as u64
    );
    assert_eq!(
        counters.branching_sum,
        observer.walks.iter().map(|w| w.branching).sum::<u64>()
    );
    let steps: u64 = observer.walks.iter().map(|w| w.length as u64).sum();
    let recorded: u64 = result
        .stats
        .actions
        .iter()
        .map(|s| s.failures + s.successes)
        .sum();
    assert_eq!(steps, recorded);
}

// ---------------------------------------------------------------------------
// Plans always replay to what the outcome claims
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn outcome_tag_matches_replay(seed in any::<u64>(), max_steps in 1usize..12) {
        let problem = compile_world("gripper:2");
        let (result, _) = recorded_search(&problem, &seeded_policy(60, max_steps, seed));
        match &result.outcome {
            PlanOutcome::GoalReached { plan } => {
                prop_assert_eq!(validate_plan(&problem, plan).unwrap(), PlanVerdict::GoalReached);
                prop_assert!(plan.len() <= max_steps);
            }
            PlanOutcome::ClosestAttempt { plan, unsatisfied, heuristic } => {
                prop_assert_eq!(
                    validate_plan(&problem, plan).unwrap(),
                    PlanVerdict::GoalNotReached { unsatisfied: *unsatisfied }
                );
                #[allow(clippy::cast_precision_loss)]
                let expected = *unsatisfied as f64;
                prop_assert!((heuristic - expected).abs() < f64::EPSILON);
            }
            PlanOutcome::NoPlan => prop_assert!(false, "gripper always offers a first step"),
        }
    }
}
