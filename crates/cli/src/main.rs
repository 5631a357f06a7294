use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use hullstep::engine::{Driver, HullEngine, TickOutcome};
use hullstep::geom2::Point;
use hullstep::sample::{draw_points, ReplayToken, SampleCfg};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod view;

use provenance::Payload;
use view::TracingView;

#[derive(Parser)]
#[command(name = "hullstep")]
#[command(about = "Build a convex hull one visible step at a time")]
struct Cmd {
    /// Log every hull insertion
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Sample points and grow the hull on a timer until finished
    Run(RunArgs),
    /// Perform a number of manual steps and print each intermediate hull
    Step(StepArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug, Serialize)]
struct SampleArgs {
    /// Number of points to sample (2 or more)
    #[arg(long, default_value_t = 50)]
    points: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 700)]
    width: u32,
    #[arg(long, default_value_t = 700)]
    height: u32,
    /// Marker diameter; points stay this far from the right and bottom edges
    #[arg(long, default_value_t = 10)]
    diameter: u32,
}

#[derive(Args, Clone, Debug, Serialize)]
struct RunArgs {
    #[command(flatten)]
    sample: SampleArgs,
    /// Timer delay between ticks in milliseconds (1 or more)
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,
    /// Pause after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,
    /// Write the final hull as JSON here (plus a provenance sidecar)
    #[arg(long)]
    out: Option<String>,
}

#[derive(Args, Clone, Debug, Serialize)]
struct StepArgs {
    #[command(flatten)]
    sample: SampleArgs,
    /// Number of manual steps
    #[arg(long, default_value_t = 1)]
    count: u32,
    /// Single raw engine steps (empty work items show up as `Consumed`)
    #[arg(long)]
    raw: bool,
}

/// Final state of a `run`.
#[derive(Debug, Serialize)]
struct HullReport {
    finished: bool,
    ticks: u64,
    points: Vec<[f64; 2]>,
    hull: Vec<[f64; 2]>,
}

/// One line of `step` output.
#[derive(Debug, Serialize)]
struct StepSnapshot {
    step: u32,
    outcome: String,
    pending: usize,
    hull: Vec<[f64; 2]>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Run(args) => {
            let report = run(&args)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Action::Step(args) => {
            for snap in step(&args)? {
                println!("{}", serde_json::to_string(&snap)?);
            }
            Ok(())
        }
        Action::Report => report(),
    }
}

fn sample_points(args: &SampleArgs) -> Result<Vec<Point>> {
    if args.points < 2 {
        bail!("use a higher amount of points (2 or more), got {}", args.points);
    }
    let cfg = SampleCfg {
        count: args.points,
        width: args.width,
        height: args.height,
        diameter: args.diameter,
    };
    let points = draw_points(cfg, ReplayToken { seed: args.seed, index: 0 })
        .context("sampling points")?;
    Ok(points)
}

fn run(args: &RunArgs) -> Result<HullReport> {
    if args.delay_ms < 1 {
        bail!("use a higher amount of milliseconds for the timer delay (1 or more)");
    }
    let points = sample_points(&args.sample)?;
    tracing::info!(
        points = points.len(),
        seed = args.sample.seed,
        delay_ms = args.delay_ms,
        "run"
    );

    let mut driver = Driver::new(HullEngine::with_view(points, TracingView::default()));
    driver.start().context("initializing hull")?;
    let delay = Duration::from_millis(args.delay_ms);
    let mut ticks = 0u64;
    let finished = loop {
        if args.max_ticks.is_some_and(|max| ticks >= max) {
            driver.pause();
            tracing::info!(ticks, "paused");
            break false;
        }
        std::thread::sleep(delay);
        let outcome = driver.tick().context("advancing hull")?;
        ticks += 1;
        match outcome {
            TickOutcome::Grew { hull_len } => tracing::info!(ticks, hull_len, "tick"),
            TickOutcome::Finished => break true,
            other => tracing::debug!(ticks, outcome = ?other, "tick"),
        }
    };

    let engine = driver.engine();
    tracing::info!(
        hull_len = engine.hull().len(),
        inserted = engine.view().inserted,
        finished,
        "done"
    );
    let report = HullReport {
        finished,
        ticks,
        points: engine.input_points().iter().map(|p| [p.x, p.y]).collect(),
        hull: engine.hull().iter().map(|p| [p.x, p.y]).collect(),
    };

    if let Some(out) = &args.out {
        write_report(out, &report, args)?;
    }
    Ok(report)
}

fn write_report(out: &str, report: &HullReport, args: &RunArgs) -> Result<()> {
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {out}"))?;
    let payload = Payload::new(serde_json::to_value(args)?).with_summary(serde_json::json!({
        "finished": report.finished,
        "ticks": report.ticks,
        "hull_len": report.hull.len()
    }));
    let sidecar = provenance::write_sidecar(out_path, &payload)?;
    tracing::info!(out, sidecar = %sidecar.display(), "wrote");
    Ok(())
}

fn step(args: &StepArgs) -> Result<Vec<StepSnapshot>> {
    let points = sample_points(&args.sample)?;
    let mut driver = Driver::new(HullEngine::with_view(points, TracingView::default()));
    let mut snapshots = Vec::with_capacity(args.count as usize);
    for i in 1..=args.count {
        let outcome = if args.raw {
            driver.step_once()
        } else {
            driver.next_step()
        }
        .context("advancing hull")?;
        let engine = driver.engine();
        snapshots.push(StepSnapshot {
            step: i,
            outcome: format!("{outcome:?}"),
            pending: engine.pending().len(),
            hull: engine.hull().iter().map(|p| [p.x, p.y]).collect(),
        });
        if outcome == TickOutcome::Finished {
            break;
        }
    }
    Ok(snapshots)
}

fn report() -> Result<()> {
    let doc = provenance::provenance_doc(&Payload::new(serde_json::json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    fn sample(points: usize) -> SampleArgs {
        SampleArgs {
            points,
            seed: 7,
            width: 200,
            height: 200,
            diameter: 10,
        }
    }

    #[test]
    fn run_finishes_and_writes_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("hull.json");
        let args = RunArgs {
            sample: sample(25),
            delay_ms: 1,
            max_ticks: None,
            out: Some(out.to_string_lossy().into_owned()),
        };
        let report = run(&args).unwrap();
        assert!(report.finished);
        assert_eq!(report.points.len(), 25);
        assert!(report.hull.len() >= 2);

        let parsed: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["hull"].as_array().unwrap().len(), report.hull.len());
        let sidecar = dir.path().join("hull.provenance.json");
        let prov: Value = serde_json::from_slice(&std::fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(prov["params"]["sample"]["points"], 25);
        assert_eq!(prov["summary"]["finished"], true);
    }

    #[test]
    fn run_pauses_at_max_ticks() {
        let args = RunArgs {
            sample: sample(100),
            delay_ms: 1,
            max_ticks: Some(1),
            out: None,
        };
        let report = run(&args).unwrap();
        assert_eq!(report.ticks, 1);
        assert!(!report.finished);
        assert_eq!(report.hull.len(), 3);
    }

    #[test]
    fn bootstrap_parameters_validated() {
        let too_few = RunArgs {
            sample: sample(1),
            delay_ms: 10,
            max_ticks: None,
            out: None,
        };
        assert!(run(&too_few).is_err());
        let no_delay = RunArgs {
            sample: sample(10),
            delay_ms: 0,
            max_ticks: None,
            out: None,
        };
        let err = run(&no_delay).unwrap_err();
        assert!(err.to_string().contains("timer delay"));
    }

    #[test]
    fn manual_steps_start_with_initialization() {
        let args = StepArgs {
            sample: sample(30),
            count: 3,
            raw: false,
        };
        let snaps = step(&args).unwrap();
        assert_eq!(snaps[0].outcome, "Initialized { hull_len: 2 }");
        assert_eq!(snaps[0].hull.len(), 2);
        assert_eq!(snaps[0].pending, 2);
        assert!(snaps.len() <= 3);
    }

    #[test]
    fn cli_parses_run_flags() {
        let cmd = Cmd::try_parse_from([
            "hullstep", "run", "--points", "12", "--delay-ms", "5", "--seed", "3",
        ])
        .unwrap();
        match cmd.action {
            Action::Run(args) => {
                assert_eq!(args.sample.points, 12);
                assert_eq!(args.sample.seed, 3);
                assert_eq!(args.delay_ms, 5);
                assert!(args.out.is_none());
            }
            _ => panic!("expected run"),
        }
    }
}
