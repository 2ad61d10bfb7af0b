//! Application
//!
//! Wires configuration, setup, the engine and reporting into one run.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::Write;
use tracing::{debug, info, warn};

use invasion_events::SurvivorReport;

use crate::config::SimConfig;
use crate::error::InvasionError;
use crate::events::{EventLogger, NoticePrinter, Tee};
use crate::output::{banner, render_remaining, survivor_report};
use crate::setup::{create_agents, load_world, name_agents};
use crate::simulation::Simulation;

/// Heading printed above the final city list
pub const COMPLETION_BANNER: &str = "Invasion Completed Cities left";

/// What a finished run hands back to its caller
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Seed of the random stream, for replaying the run
    pub seed: u64,
    pub report: SurvivorReport,
}

/// Run one invasion. Destruction notices, the banner and the remaining
/// cities are written to `out` as they happen.
pub fn run<W: Write>(config: &SimConfig, out: &mut W) -> Result<RunOutcome, InvasionError> {
    config.validate()?;
    let world = load_world(&config.world_file)?;

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed, "seeded random stream");
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut agents = create_agents(config.aliens, &mut rng);
    if config.names_file.exists() {
        if let Err(e) = name_agents(&mut agents, &config.names_file) {
            warn!("Could not name aliens, keeping generated names: {}", e);
        }
    } else {
        debug!(path = %config.names_file.display(), "no alien name file");
    }

    let logger = match &config.events_out {
        Some(path) => Some(EventLogger::new(path).map_err(|source| InvasionError::Output {
            path: path.clone(),
            source,
        })?),
        None => None,
    };

    let mut sim = Simulation::new(rng, config.round_limit, world, agents);
    let completion = {
        let mut sink = Tee(NoticePrinter::new(&mut *out), logger);
        sim.run(&mut sink)?
    };

    write!(out, "{}", banner(COMPLETION_BANNER))?;
    write!(out, "{}", render_remaining(sim.world()))?;
    out.flush()?;

    let report = survivor_report(&sim, completion);
    if let Some(path) = &config.report_json {
        std::fs::write(path, report.to_json()?).map_err(|source| InvasionError::Output {
            path: path.clone(),
            source,
        })?;
    }

    info!(
        rounds = completion.rounds(),
        cities_left = report.cities.len(),
        survivors = report.survivors(),
        "invasion complete"
    );
    Ok(RunOutcome { seed, report })
}
