//! Dungeon simulation binary.
//!
//! ```bash
//! # Bundled content, default seed
//! cargo run -p dungeon-sim
//!
//! # Custom seed and verbose AI logs
//! SIM_SEED=7 RUST_LOG=runtime=debug cargo run -p dungeon-sim
//! ```

use anyhow::Result;
use dungeon_sim::{SimConfig, Simulation, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = SimConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref());

    tracing::info!("Starting dungeon simulation");
    let mut sim = Simulation::load(&config)?;
    println!("{}", sim.world().level().render());

    let reports = sim.run();
    for report in &reports {
        for event in &report.events {
            tracing::debug!("turn {}: {:?}", report.turn, event);
        }
    }

    println!("{}", sim.world().level().render());
    tracing::info!(
        "Finished after {} turns with {} enemies",
        reports.len(),
        sim.world().enemies().len()
    );
    Ok(())
}
