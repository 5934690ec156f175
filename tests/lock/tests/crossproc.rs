//! Cross-process determinism: spawns the `walk_fixture` binary under
//! several environment variants and asserts identical output. Seeded
//! search results must not depend on cwd, locale, or thread count hints.

use std::path::Path;
use std::process::Command;

/// `cargo test` puts test binaries in `target/<profile>/deps/`; the
/// fixture binary lives one level up.
fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("walk_fixture");
    path.to_string_lossy().to_string()
}

fn run_variant(work_dir: &Path, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();
    let mut command = Command::new(&bin);
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir:?}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "walk_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn workspace_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

#[test]
fn crossproc_walks_agree_across_env_variants() {
    let baseline = run_variant(workspace_root(), &[]);
    let tmp = tempfile::tempdir().expect("tempdir");

    let variants: Vec<(String, String)> = vec![
        (
            "tmp cwd + C locale".into(),
            run_variant(tmp.path(), &[("LC_ALL", "C"), ("LANG", "C")]),
        ),
        (
            "de_DE locale".into(),
            run_variant(workspace_root(), &[("LC_ALL", "de_DE.UTF-8")]),
        ),
        (
            "rayon thread hint".into(),
            run_variant(tmp.path(), &[("RAYON_NUM_THREADS", "1")]),
        ),
    ];
    for (label, output) in &variants {
        assert_eq!(&baseline, output, "variant {label} diverged from baseline");
    }
}

#[test]
fn crossproc_output_is_complete() {
    let output = run_variant(workspace_root(), &[]);
    let keys: Vec<&str> = output
        .lines()
        .filter_map(|line| line.split_once('=').map(|(k, _)| k))
        .collect();

    for key in ["problem_digest", "registry_digest", "initial_state_digest"] {
        assert!(keys.contains(&key), "missing {key}");
    }
    for workers in [1, 4] {
        for field in ["outcome", "plan_length", "walks", "run_report_digest"] {
            let key = format!("workers{workers}.{field}");
            assert!(keys.contains(&key.as_str()), "missing {key}");
        }
    }
    assert!(output
        .lines()
        .filter(|l| l.contains("_digest="))
        .all(|l| l.contains("=sha256:") || l.ends_with("=none")));
}
