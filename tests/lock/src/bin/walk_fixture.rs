//! Binary that runs `gripper:3` through the harness pipeline, sequential
//! and parallel, and prints deterministic output lines for cross-process
//! verification.
//!
//! Usage: `walk_fixture`
//!
//! Output: key=value lines (see source for format).

use mrw_harness::config::RunConfigV1;
use mrw_harness::runner::run_world;
use mrw_harness::worlds::world_by_name;
use mrw_kernel::problem::compile::compile;
use mrw_search::observer::NoopObserver;

fn main() {
    let world = world_by_name("gripper:3").expect("gripper world");
    let payload = world.encode_payload().expect("encode payload");
    let problem = compile(&payload).expect("compile payload");

    println!("problem_digest={}", problem.digest());
    println!(
        "registry_digest={}",
        problem.actions().digest().expect("registry digest")
    );
    println!("initial_state_digest={}", problem.initial_state().digest());

    for workers in [1usize, 4] {
        let config = RunConfigV1 {
            num_walks: 2000,
            seed: Some(42),
            workers,
            ..RunConfigV1::default()
        };
        let report = run_world(world.as_ref(), &config, &mut NoopObserver).expect("run");
        let tag = format!("workers{workers}");
        println!("{tag}.outcome={:?}", report.outcome);
        println!("{tag}.plan_length={}", report.plan_length());
        println!(
            "{tag}.plan_digest={}",
            report.search.plan_digest.as_deref().unwrap_or("none")
        );
        println!("{tag}.walks={}", report.search.walks_executed);
        println!("{tag}.dead_ends={}", report.search.dead_ends);
        println!("{tag}.branching_sum={}", report.search.branching_sum);
        println!(
            "{tag}.search_report_digest={}",
            report.search.digest().expect("search report digest")
        );
        println!(
            "{tag}.run_report_digest={}",
            report.deterministic_digest().expect("run report digest")
        );
    }
}
