use anyhow::{Result, bail};
use clap::Parser;
use sim_core::{SceneConfig, SceneDirector};
use serde::Serialize;

/// Headless soak runner: drives the scene for a fixed number of ticks,
/// checking run-time invariants every tick, and prints a JSON report.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 2_000)]
    ticks: u64,
    #[arg(long)]
    grid_width: Option<i32>,
    #[arg(long)]
    grid_height: Option<i32>,
    #[arg(long)]
    max_agents: Option<usize>,
    #[arg(long)]
    spawn_chance: Option<f64>,
}

#[derive(Serialize)]
struct SoakReport {
    seed: u64,
    ticks: u64,
    segments_drawn: u64,
    fades: u64,
    mazes_started: u64,
    peak_live_mazes: usize,
    peak_live_agents: usize,
    final_live_mazes: usize,
    final_live_agents: usize,
    final_claimed_cells: usize,
    snapshot_hash: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let defaults = SceneConfig::default();
    let config = SceneConfig {
        grid_width: args.grid_width.unwrap_or(defaults.grid_width),
        grid_height: args.grid_height.unwrap_or(defaults.grid_height),
        max_agents: args.max_agents.unwrap_or(defaults.max_agents),
        spawn_chance: args.spawn_chance.unwrap_or(defaults.spawn_chance),
        ..defaults
    };
    let bounds = config.bounds();

    let mut director = SceneDirector::new(config, args.seed)?;

    let mut segments_drawn = 0u64;
    let mut fades = 0u64;
    let mut mazes_started = 1u64;
    let mut peak_live_mazes = 0usize;
    let mut peak_live_agents = 0usize;

    for tick in 0..args.ticks {
        let output = director.tick();
        segments_drawn += output.draws.len() as u64;
        if output.fade {
            fades += 1;
            mazes_started += 1;
        }

        for draw in &output.draws {
            if !bounds.contains(draw.segment.from) || !bounds.contains(draw.segment.to) {
                bail!("tick {tick}: out-of-bounds segment {:?}", draw.segment);
            }
        }
        for maze in director.mazes() {
            if maze.agent_count() > config.max_agents {
                bail!(
                    "tick {tick}: live agents {} exceed the cap {}",
                    maze.agent_count(),
                    config.max_agents
                );
            }
        }

        let stats = director.stats();
        peak_live_mazes = peak_live_mazes.max(stats.live_mazes);
        peak_live_agents = peak_live_agents.max(stats.live_agents);
    }

    let stats = director.stats();
    let report = SoakReport {
        seed: args.seed,
        ticks: args.ticks,
        segments_drawn,
        fades,
        mazes_started,
        peak_live_mazes,
        peak_live_agents,
        final_live_mazes: stats.live_mazes,
        final_live_agents: stats.live_agents,
        final_claimed_cells: stats.claimed_cells,
        snapshot_hash: format!("0x{:016x}", director.snapshot_hash()),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
