//! `mrw`: run the adaptive random-walk planner on a problem file or a
//! generated world.
//!
//! ```text
//! mrw --world gripper:6 --seed 1 --time-file time.txt --length-file length.txt
//! mrw --problem problem.json --config run.json --report-dir out/
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser};
use tracing_subscriber::{fmt, EnvFilter};

use mrw_harness::config::RunConfigV1;
use mrw_harness::results::{write_report, ResultFilesV1};
use mrw_harness::runner::{run_problem, run_world, RunReportV1};
use mrw_harness::worlds::world_by_name;
use mrw_search::observer::TracingObserver;
use mrw_search::report::OutcomeKindV1;

#[derive(Parser)]
#[command(name = "mrw")]
#[command(about = "Adaptive Monte-Carlo random-walk planner", version)]
#[command(group(ArgGroup::new("input").required(true).args(["problem", "world"])))]
struct Cli {
    /// Grounded JSON problem file
    #[arg(long)]
    problem: Option<PathBuf>,

    /// Generated world, e.g. `gripper:4`, `trapdoor:12`, `one_step`
    #[arg(long)]
    world: Option<String>,

    /// JSON run configuration; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of walks
    #[arg(short = 'n', long)]
    walks: Option<u64>,

    /// Maximum steps per walk
    #[arg(short = 'l', long)]
    max_steps: Option<usize>,

    /// Random seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Heuristic weight (> 0)
    #[arg(short = 'w', long)]
    weight: Option<f64>,

    /// Walks run concurrently per batch
    #[arg(long)]
    workers: Option<usize>,

    /// Wall-clock limit in seconds
    #[arg(short, long)]
    timeout_secs: Option<u64>,

    /// Append `;<elapsed_ms>` (or `;`) to this file
    #[arg(long, requires = "length_file")]
    time_file: Option<PathBuf>,

    /// Append `;<plan_length>` (or `;`) to this file
    #[arg(long, requires = "time_file")]
    length_file: Option<PathBuf>,

    /// Write `run_report.json` into this directory
    #[arg(long)]
    report_dir: Option<PathBuf>,

    /// Verbose output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn run_config(&self) -> Result<RunConfigV1> {
        let mut config = match &self.config {
            Some(path) => RunConfigV1::load(path)?,
            None => RunConfigV1::default(),
        };
        if let Some(n) = self.walks {
            config.num_walks = n;
        }
        if let Some(l) = self.max_steps {
            config.max_steps_per_walk = l;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(w) = self.weight {
            config.heuristic_weight = w;
        }
        if let Some(w) = self.workers {
            config.workers = w;
        }
        if let Some(t) = self.timeout_secs {
            config.timeout_secs = t;
        }
        Ok(config)
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_plan(report: &RunReportV1) {
    match report.outcome {
        OutcomeKindV1::GoalReached => println!("found plan ({} steps):", report.plan_length()),
        OutcomeKindV1::ClosestAttempt => println!(
            "no goal-reaching plan; closest attempt ({} steps, verdict {:?}):",
            report.plan_length(),
            report.verdict
        ),
        OutcomeKindV1::NoPlan => {
            println!("no plan found");
            return;
        }
    }
    for (i, action) in report.plan.iter().enumerate() {
        println!("{i:>4}: ({action})");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = cli.run_config()?;
    let mut observer = TracingObserver;

    let report = match (&cli.problem, &cli.world) {
        (Some(path), None) => {
            let payload =
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let source = path.display().to_string();
            run_problem(&source, &payload, &config, &mut observer)?
        }
        (None, Some(spec)) => {
            let world = world_by_name(spec)?;
            run_world(world.as_ref(), &config, &mut observer)?
        }
        _ => bail!("exactly one of --problem or --world is required"),
    };

    if let (Some(time), Some(length)) = (&cli.time_file, &cli.length_file) {
        ResultFilesV1::new(time, length).record(&report)?;
    }
    if let Some(dir) = &cli.report_dir {
        let path = write_report(dir, &report)?;
        tracing::info!(path = %path.display(), "report written");
    }
    print_plan(&report);
    Ok(())
}
