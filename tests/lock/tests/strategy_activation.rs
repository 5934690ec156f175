//! Strategy latches fire on the worlds built to trip them, at the first
//! activation check, and never fire twice.

use lock_tests::search_test_helpers::{compile_world, recorded_search, seeded_policy};
use mrw_search::search::ActivationV1;
use mrw_search::selector::Strategy;

#[test]
fn trapdoor_latches_dead_end_avoidance() {
    let problem = compile_world("trapdoor:16");
    let (result, observer) = recorded_search(&problem, &seeded_policy(300, 30, 8));
    assert_eq!(
        result.stats.activations.first(),
        Some(&ActivationV1 {
            strategy: Strategy::DeadEndAvoiding,
            walk_index: 99
        })
    );
    assert_eq!(observer.activations[0], (Strategy::DeadEndAvoiding, 99));
    // Walks after the latch run under the new strategy.
    assert!(observer.walks[..100]
        .iter()
        .all(|w| w.strategy == Strategy::PureRandom));
    assert!(observer.walks[100..]
        .iter()
        .all(|w| w.strategy == Strategy::DeadEndAvoiding));
}

#[test]
fn parallel_batch_walks_keep_their_snapshot_strategy() {
    let problem = compile_world("trapdoor:16");
    let mut policy = seeded_policy(300, 30, 8);
    policy.workers = 3;
    let (result, observer) = recorded_search(&problem, &policy);
    assert_eq!(
        result.stats.activations.first(),
        Some(&ActivationV1 {
            strategy: Strategy::DeadEndAvoiding,
            walk_index: 99
        })
    );
    // Walks 99..=101 form one batch run against a pure-random snapshot;
    // the latch firing at walk 99 does not relabel its batch mates.
    for index in 99..=101 {
        assert_eq!(observer.walks[index].strategy, Strategy::PureRandom, "walk {index}");
    }
    assert!(observer.walks[102..]
        .iter()
        .all(|w| w.strategy == Strategy::DeadEndAvoiding));
}

#[test]
fn fanout_latches_helpful_bias() {
    let problem = compile_world("fanout:1200");
    let (result, observer) = recorded_search(&problem, &seeded_policy(150, 30, 8));
    assert_eq!(
        result.stats.activations,
        vec![ActivationV1 {
            strategy: Strategy::HelpfulBiased,
            walk_index: 99
        }]
    );
    assert_eq!(result.stats.final_strategy, Strategy::HelpfulBiased);
    assert_eq!(result.stats.counters.dead_ends, 0);
    assert!(observer.walks.iter().all(|w| w.branching > 1000 * w.length as u64));
}

#[test]
fn below_thresholds_nothing_latches() {
    let problem = compile_world("gripper:4");
    let (result, observer) = recorded_search(&problem, &seeded_policy(250, 3, 8));
    assert!(result.stats.activations.is_empty());
    assert!(observer.activations.is_empty());
    assert_eq!(result.stats.final_strategy, Strategy::PureRandom);
}

#[test]
fn latches_fire_once_per_search() {
    let problem = compile_world("trapdoor:16");
    let (result, _) = recorded_search(&problem, &seeded_policy(600, 30, 21));
    let dead_end_latches = result
        .stats
        .activations
        .iter()
        .filter(|a| a.strategy == Strategy::DeadEndAvoiding)
        .count();
    assert_eq!(dead_end_latches, 1);
    let walk_indices: Vec<u64> = result.stats.activations.iter().map(|a| a.walk_index).collect();
    assert!(walk_indices.iter().all(|i| (i + 1) % 100 == 0));
}
