//! Closed-Economy Simulation Runner
//!
//! Batch driver for the economy engine: builds a population from CLI flags
//! or a TOML file, advances a fixed number of turns, and writes snapshots,
//! an event log, and end-of-run statistics to the output directory.
//!
//! Examples:
//!   cargo run -p econ-core --bin econ_sim -- --turns 200 --seed 7
//!   cargo run -p econ-core --bin econ_sim -- --config economy.toml

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;

use econ_core::config::ConfigError;
use econ_core::events::EventLogger;
use econ_core::output::{self, StatsCollector};
use econ_core::{EconomyEngine, SimulationConfig};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "econ_sim")]
#[command(about = "A closed-economy simulation engine")]
struct Args {
    /// Number of citizens
    #[arg(long, default_value_t = 10)]
    citizens: u32,

    /// Number of companies
    #[arg(long, default_value_t = 3)]
    companies: u32,

    /// Citizen tax rate in [0, 1]
    #[arg(long, default_value_t = 0.1)]
    tax_rate: f64,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of turns to simulate
    #[arg(long, default_value_t = 100)]
    turns: u64,

    /// Interval between snapshot files (in turns)
    #[arg(long, default_value_t = 10)]
    snapshot_interval: u64,

    /// Output directory for snapshots, events, and stats
    #[arg(long, default_value = "output")]
    output: PathBuf,

    /// TOML config file; replaces the population flags when given
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<SimulationConfig, ConfigError> {
    match &args.config {
        Some(path) => SimulationConfig::from_file(path),
        None => {
            let config = SimulationConfig {
                citizens: args.citizens,
                companies: args.companies,
                tax_rate: args.tax_rate,
                seed: args.seed,
                ..SimulationConfig::default()
            };
            config.validate()?;
            Ok(config)
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let snapshot_interval = args.snapshot_interval.max(1);

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    println!("Closed-Economy Simulation");
    println!("=========================");
    println!("Citizens: {}", config.citizens);
    println!("Companies: {}", config.companies);
    println!("Tax rate: {}", config.tax_rate);
    println!("Seed: {}", config.seed);
    println!("Turns: {}", args.turns);
    println!();

    let mut engine = match EconomyEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = fs::create_dir_all(&args.output) {
        eprintln!("Warning: could not create output directory: {}", e);
    }
    let mut logger = EventLogger::new(args.output.join("events.jsonl")).unwrap_or_else(|e| {
        eprintln!("Warning: could not open event log: {}", e);
        EventLogger::null()
    });
    let mut stats = StatsCollector::new();

    // Initial snapshot (turn 0)
    let initial = engine.snapshot();
    if let Err(e) = output::write_snapshot_to_dir(&initial, &args.output) {
        eprintln!("Warning: could not write initial snapshot: {}", e);
    }
    if let Err(e) = output::write_current_state(&initial, &args.output) {
        eprintln!("Warning: could not write current state: {}", e);
    }

    println!("Starting simulation...");
    for _ in 0..args.turns {
        let snapshot = engine.advance_turn();

        let events = engine.drain_events();
        stats.record_batch(&events);
        if let Err(e) = logger.log_batch(&events) {
            eprintln!("Warning: could not log events: {}", e);
        }

        if snapshot.turn % snapshot_interval == 0 {
            if let Err(e) = output::write_snapshot_to_dir(&snapshot, &args.output) {
                eprintln!(
                    "Warning: could not write snapshot at turn {}: {}",
                    snapshot.turn, e
                );
            }
            if let Err(e) = output::write_current_state(&snapshot, &args.output) {
                eprintln!(
                    "Warning: could not write current state at turn {}: {}",
                    snapshot.turn, e
                );
            }
        }

        if snapshot.turn % 10 == 0 {
            println!(
                "[Turn {:>4}] citizens: {:.2}, companies: {:.2}, total: {:.2}",
                snapshot.turn,
                snapshot.summary.citizens.total_money,
                snapshot.summary.companies.total_money,
                snapshot.total_money()
            );
        }
    }

    let final_snapshot = engine.snapshot();
    if let Err(e) = output::write_current_state(&final_snapshot, &args.output) {
        eprintln!("Warning: could not write final current state: {}", e);
    }
    let run_stats = stats.finish(
        engine.turn(),
        initial.summary.clone(),
        final_snapshot.summary.clone(),
    );
    if let Err(e) = output::write_stats(&run_stats, &args.output) {
        eprintln!("Warning: could not write stats: {}", e);
    }
    if let Err(e) = logger.flush() {
        eprintln!("Warning: could not flush event log: {}", e);
    }

    println!();
    println!(
        "Simulation complete. Ran {} turns, logged {} events.",
        engine.turn(),
        run_stats.total_events
    );
}
