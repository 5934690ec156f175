//! Result files written by the harness: semicolon-appended logs and the
//! pretty-printed run report.

use lock_tests::search_test_helpers::seeded_policy;
use mrw_harness::config::RunConfigV1;
use mrw_harness::results::{write_report, ResultFilesV1, RUN_REPORT_FILENAME};
use mrw_harness::runner::{run_world, RunReportV1};
use mrw_harness::worlds::world_by_name;
use mrw_search::observer::NoopObserver;

fn run(spec: &str, num_walks: u64, max_steps: usize) -> RunReportV1 {
    let policy = seeded_policy(num_walks, max_steps, 9);
    let config = RunConfigV1 {
        num_walks: policy.num_walks,
        max_steps_per_walk: policy.max_steps_per_walk,
        seed: policy.seed,
        ..RunConfigV1::default()
    };
    let world = world_by_name(spec).unwrap();
    run_world(world.as_ref(), &config, &mut NoopObserver).unwrap()
}

#[test]
fn appends_one_field_per_run() {
    let dir = tempfile::tempdir().unwrap();
    let files = ResultFilesV1::new(dir.path().join("time.txt"), dir.path().join("len.txt"));

    let found = run("one_step", 1, 1);
    let stranded = run("stranded", 5, 5);
    files.record(&found).unwrap();
    files.record(&stranded).unwrap();
    files.record(&found).unwrap();

    let time = std::fs::read_to_string(&files.time_file).unwrap();
    let length = std::fs::read_to_string(&files.length_file).unwrap();
    assert_eq!(length, ";1;;1");
    let fields: Vec<&str> = time.split(';').skip(1).collect();
    assert_eq!(fields.len(), 3);
    assert!(fields[0].parse::<u64>().is_ok());
    assert_eq!(fields[1], "");
    assert!(fields[2].parse::<u64>().is_ok());
}

#[test]
fn closest_attempt_counts_as_plan() {
    let dir = tempfile::tempdir().unwrap();
    let files = ResultFilesV1::new(dir.path().join("t"), dir.path().join("l"));
    let report = run("gripper:4", 20, 3);
    assert!(report.has_plan());
    assert!(!report.is_goal_reached());

    files.record(&report).unwrap();
    let length = std::fs::read_to_string(&files.length_file).unwrap();
    assert_eq!(length, format!(";{}", report.plan_length()));
}

#[test]
fn report_written_as_pretty_json() {
    let dir = tempfile::tempdir().unwrap();
    let report = run("gripper:2", 3000, 30);
    let path = write_report(&dir.path().join("nested/out"), &report).unwrap();
    assert!(path.ends_with(RUN_REPORT_FILENAME));

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.ends_with('\n'));
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["schema_version"], "mrw.run_report.v1");
    assert_eq!(json["source"], "gripper:2");
    assert_eq!(json["plan"].as_array().unwrap().len(), report.plan_length());
    assert_eq!(json["search"]["schema_version"], "mrw.search_report.v1");
}
