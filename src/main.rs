use trajsim::{DimensionConfig, RotatingFrame, Scenario, ScenarioConfig, Trajectory, TrajectoryRecord};
use trajsim::{velocity_grid, velocity_sweep, DEFAULT_SWEEP_SPEEDS};

use anyhow::{bail, Context, Result};
use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Run a trajectory scenario and optionally write the result as YAML")]
struct Args {
    /// Scenario file; bare names are looked up in the crate's scenarios/ directory
    #[arg(short, default_value = "station.yaml")]
    file_name: String,

    /// Write the trajectory here
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Re-run a 2D scenario over the default launch-velocity grid instead
    #[arg(long)]
    sweep: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

fn report<const D: usize>(trajectory: &Trajectory<D>) {
    if let Some(last) = trajectory.last() {
        for (i, b) in last.bodies.iter().enumerate() {
            log::info!("body {i}: final x = {:?}, v = {:?}", b.x.as_slice(), b.v.as_slice());
        }
    }
}

fn run<const D: usize>(cfg: &ScenarioConfig, output: Option<&PathBuf>) -> Result<()> {
    let scenario = Scenario::<D>::build_scenario(cfg).context("invalid scenario")?;
    let trajectory = scenario.run().context("simulation failed")?;
    report(&trajectory);

    if let Some(path) = output {
        let frame = scenario.parameters.angular_speed.map(RotatingFrame::new).transpose()?;
        TrajectoryRecord::from_trajectory(&trajectory, frame).write_yaml(path)?;
        log::info!("wrote {} states to {}", trajectory.len(), path.display());
    }
    Ok(())
}

fn sweep(cfg: &ScenarioConfig) -> Result<()> {
    if cfg.engine.dimension != DimensionConfig::Two {
        bail!("--sweep needs a 2D scenario");
    }
    let scenario = Scenario::<2>::build_scenario(cfg).context("invalid scenario")?;
    let grid = velocity_grid(&DEFAULT_SWEEP_SPEEDS, &DEFAULT_SWEEP_SPEEDS);

    for (v0, result) in velocity_sweep(&scenario, &grid) {
        match result {
            Ok(t) => log::info!(
                "v0 = ({:+.1}, {:+.1}): {} states, t_end = {:.4}, {:?}",
                v0.x,
                v0.y,
                t.len(),
                t.last().map_or(0.0, |s| s.time),
                t.stop_reason()
            ),
            Err(e) => log::warn!("v0 = ({:+.1}, {:+.1}): {e}", v0.x, v0.y),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let path = scenario_path(&args.file_name);
    let cfg = ScenarioConfig::from_yaml_file(&path)?;
    log::info!("loaded scenario {} ({:?})", path.display(), cfg.engine.dimension);

    if args.sweep {
        return sweep(&cfg);
    }

    match cfg.engine.dimension {
        DimensionConfig::Two => run::<2>(&cfg, args.output.as_ref()),
        DimensionConfig::Three => run::<3>(&cfg, args.output.as_ref()),
    }
}
