//! # Gilded Rose Simulation
//!
//! Ages the shop's inventory day by day and prints each day's stock.
//!
//! ## Usage
//! ```bash
//! # Standard fixture, 2 days
//! cargo run -p gilded-sim
//!
//! # 30 days of a custom inventory
//! cargo run -p gilded-sim -- --days 30 --inventory ./stock.json
//!
//! # Verbose logging (stderr)
//! RUST_LOG=debug cargo run -p gilded-sim
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Load configuration (env, then flags)
//! 3. Stock the inventory (file or standard fixture)
//! 4. Print one block per day to stdout

mod config;
mod error;
mod fixture;
mod report;

use std::fs;
use std::path::Path;

use gilded_core::Inventory;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{Invocation, SimConfig, USAGE};
use crate::error::{SimError, SimResult};

fn main() -> SimResult<()> {
    init_tracing();

    let config = match SimConfig::load()?.with_args(std::env::args().skip(1))? {
        Invocation::Run(config) => config,
        Invocation::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
    };
    info!(
        days = config.days,
        inventory = ?config.inventory_path,
        "Configuration loaded"
    );

    let mut inventory = match &config.inventory_path {
        Some(path) => load_inventory(path)?,
        None => fixture::standard_inventory(),
    };
    info!(items = inventory.len(), "Inventory stocked");

    let stdout = std::io::stdout();
    report::run(&mut inventory, config.days, &mut stdout.lock())?;

    info!(days = config.days, "Simulation complete");
    Ok(())
}

fn load_inventory(path: &Path) -> SimResult<Inventory> {
    let contents = fs::read_to_string(path).map_err(|source| SimError::ReadInventory {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Inventory::from_json(&contents)?)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show per-day debug messages
/// - Default: INFO, DEBUG for this binary
///
/// Logs go to stderr so the report on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,gilded_sim=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
