//! Outbreak Simulation Engine
//!
//! Driver binary: builds the model from the tuning file plus CLI
//! overrides, advances it tick by tick, and writes census data and world
//! snapshots for the external visualization tooling.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use sim_core::config::{Config, DEFAULT_TUNING_PATH};
use sim_core::output::{self, census::CensusCollector};
use sim_core::OutbreakModel;

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "outbreak_sim")]
#[command(about = "A grid-based outbreak simulation engine")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of ticks to simulate (defaults to the tuning file value)
    #[arg(long)]
    ticks: Option<u64>,

    /// Initial population size override
    #[arg(long)]
    population: Option<u32>,

    /// Grid width override
    #[arg(long)]
    width: Option<u32>,

    /// Grid height override
    #[arg(long)]
    height: Option<u32>,

    /// Interval between world snapshots (in ticks)
    #[arg(long)]
    snapshot_interval: Option<u64>,

    /// Path to the tuning file
    #[arg(long, default_value = DEFAULT_TUNING_PATH)]
    tuning: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = if args.tuning == DEFAULT_TUNING_PATH {
        Config::load_or_default()
    } else {
        match Config::load(&args.tuning) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("could not load {}: {}", args.tuning, e);
                std::process::exit(1);
            }
        }
    };

    if let Some(population) = args.population {
        config.population.initial_population = population;
    }
    if let Some(width) = args.width {
        config.grid.width = width;
    }
    if let Some(height) = args.height {
        config.grid.height = height;
    }

    let ticks = args.ticks.unwrap_or(config.simulation.default_ticks);
    let snapshot_interval = args
        .snapshot_interval
        .unwrap_or(config.simulation.snapshot_interval)
        .max(1);

    let run_id = Uuid::new_v4();
    tracing::info!(
        %run_id,
        seed = args.seed,
        ticks,
        population = config.population.initial_population,
        width = config.grid.width,
        height = config.grid.height,
        "starting outbreak simulation"
    );

    let mut model = match OutbreakModel::new(config, args.seed) {
        Ok(model) => model,
        Err(e) => {
            tracing::error!("invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let mut collector = CensusCollector::new(run_id, args.seed);

    // Initial snapshot before any tick has run.
    let initial = output::generate_snapshot(&model, run_id, 0, "simulation_start");
    if let Err(e) = output::write_snapshot_to_dir(&initial) {
        tracing::warn!("could not write initial snapshot: {}", e);
    }
    if let Err(e) = output::write_current_state(&initial) {
        tracing::warn!("could not write current state: {}", e);
    }

    let mut sequence = 1;
    for _ in 0..ticks {
        model.step();
        collector.record(&model);

        if model.tick() % snapshot_interval == 0 {
            let snapshot = output::generate_snapshot(&model, run_id, sequence, "periodic");
            sequence += 1;
            if let Err(e) = output::write_snapshot_to_dir(&snapshot) {
                tracing::warn!("could not write snapshot at tick {}: {}", model.tick(), e);
            }
            if let Err(e) = output::write_current_state(&snapshot) {
                tracing::warn!("could not write current state at tick {}: {}", model.tick(), e);
            }
        }

        if model.tick() % 10 == 0 {
            tracing::info!(
                tick = model.tick(),
                census = model.census(),
                infected_alive = model.infected_alive_count(),
                infected_dead = model.infected_dead_count(),
                total = model.agents().len(),
                "progress"
            );
        }
    }

    let final_snapshot = output::generate_snapshot(&model, run_id, sequence, "simulation_end");
    if let Err(e) = output::write_snapshot_to_dir(&final_snapshot) {
        tracing::warn!("could not write final snapshot: {}", e);
    }
    if let Err(e) = output::write_current_state(&final_snapshot) {
        tracing::warn!("could not write final current state: {}", e);
    }
    if let Err(e) = output::census::write_series(collector.series()) {
        tracing::warn!("could not write census series: {}", e);
    }

    tracing::info!(
        ticks = model.tick(),
        census = model.census(),
        total = model.agents().len(),
        "simulation complete"
    );
}
