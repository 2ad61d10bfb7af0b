//! Agent Spawning
//!
//! Aliens get a generated name from the shared random stream; an optional
//! name file can overwrite those names by position.

use rand::rngs::SmallRng;
use rand::Rng;
use std::path::Path;
use tracing::debug;

use super::SetupError;
use crate::components::{Agent, AgentId};

/// Generate a name like `Alien-3141592653`
fn generate_name(rng: &mut SmallRng) -> String {
    format!("Alien-{}", rng.gen::<u32>())
}

/// Spawn `count` live, unplaced aliens. Consumes one draw per alien.
pub fn create_agents(count: usize, rng: &mut SmallRng) -> Vec<Agent> {
    (0..count)
        .map(|i| Agent::new(AgentId(i), generate_name(rng)))
        .collect()
}

/// Overwrite names by position, up to the shorter of the two lists.
/// Returns how many aliens were renamed.
pub fn apply_names<'a>(agents: &mut [Agent], names: impl IntoIterator<Item = &'a str>) -> usize {
    let mut renamed = 0;
    for (agent, name) in agents.iter_mut().zip(names) {
        agent.set_name(name);
        renamed += 1;
    }
    renamed
}

/// Read one name per line from `path` and apply them. Blank lines are skipped.
pub fn name_agents(agents: &mut [Agent], path: impl AsRef<Path>) -> Result<usize, SetupError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| SetupError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let names = content.lines().map(str::trim).filter(|l| !l.is_empty());
    let renamed = apply_names(agents, names);
    debug!(renamed, path = %path.display(), "applied alien names");
    Ok(renamed)
}
