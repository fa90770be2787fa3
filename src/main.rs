use three_body_sim::{Bounds, ScenarioConfig, Simulation};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Runs the simulation headless and prints where every body ends up.
#[derive(Parser, Debug)]
struct Args {
    /// YAML scenario; the randomized three-body demo is used when omitted.
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Frames to run; overrides the scenario's own count.
    #[arg(short, long)]
    frames: Option<usize>,

    /// Canvas width for the demo layout.
    #[arg(long, default_value_t = Simulation::DEFAULT_WIDTH)]
    width: f64,

    /// Canvas height for the demo layout.
    #[arg(long, default_value_t = Simulation::DEFAULT_HEIGHT)]
    height: f64,

    /// Seed for the demo layout.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

const DEFAULT_FRAMES: usize = 600;

// load here to keep main clean
fn load_simulation(args: &Args) -> Result<(Simulation, usize)> {
    let Some(path) = &args.scenario else {
        let bounds = Bounds::new(args.width, args.height)?;
        let sim = Simulation::demo(bounds, args.seed);
        return Ok((sim, args.frames.unwrap_or(DEFAULT_FRAMES)));
    };

    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let cfg = ScenarioConfig::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    let frames = args.frames.or(cfg.frames).unwrap_or(DEFAULT_FRAMES);
    let sim = cfg.build().context("invalid scenario")?;
    Ok((sim, frames))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (mut sim, frames) = load_simulation(&args)?;
    info!(
        "running {} bodies for {frames} frames in {}x{}",
        sim.bodies.len(),
        sim.bounds().width,
        sim.bounds().height
    );

    for _ in 0..frames {
        sim.step();
    }

    println!("frame {}", sim.frame);
    for (i, body) in sim.bodies.iter().enumerate() {
        println!(
            "body {i}: pos ({:.3}, {:.3}) vel ({:.3}, {:.3}) mass {:.1} radius {:.3} max_speed {}",
            body.pos.x,
            body.pos.y,
            body.vel.x,
            body.vel.y,
            body.mass(),
            body.radius(),
            body.max_speed
        );
    }

    Ok(())
}
