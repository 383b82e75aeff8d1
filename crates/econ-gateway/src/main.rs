//! Gateway entry point.
//!
//! Run with: cargo run -p econ-gateway
//!
//! Serves the engine behind `/api/state`, `/api/advance-turn`, and
//! `/api/reset`. The simulation configuration comes from a TOML file or
//! falls back to defaults.

use clap::Parser;
use rocket::launch;
use std::path::PathBuf;
use std::process;

use econ_core::{EconomyEngine, SimulationConfig};
use econ_gateway::build_rocket;

/// Command line arguments for the gateway
#[derive(Parser, Debug)]
#[command(name = "econ_gateway")]
#[command(about = "HTTP facade for the closed-economy simulation")]
struct Args {
    /// TOML config file for the simulation; defaults are used when absent
    #[arg(long)]
    config: Option<PathBuf>,
}

#[launch]
fn rocket() -> _ {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimulationConfig::from_file(path),
        None => Ok(SimulationConfig::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    let engine = match EconomyEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    build_rocket(engine)
}
