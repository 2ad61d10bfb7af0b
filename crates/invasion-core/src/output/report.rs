//! Survivor Report
//!
//! Which cities are left standing once the invasion is over.

use std::collections::HashSet;

use invasion_events::{AgentSnapshot, CitySnapshot, Completion, SurvivorReport};

use crate::components::{CityId, Direction, World};
use crate::simulation::Simulation;

/// Neighbor order used when a destroyed city hands over to its survivors
const SURVIVOR_ORDER: [Direction; 4] = [
    Direction::East,
    Direction::West,
    Direction::North,
    Direction::South,
];

/// Walk the declared cities in file order. A live city reports itself; a
/// destroyed one reports its live neighbors instead. Each name appears once.
pub fn remaining_cities(world: &World) -> Vec<CityId> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for &id in world.declared() {
        let Some(city) = world.city(id) else {
            continue;
        };
        if seen.contains(&id) {
            continue;
        }
        if !city.is_destroyed() {
            seen.insert(id);
            out.push(id);
            continue;
        }
        for direction in SURVIVOR_ORDER {
            if let Some(n) = city.neighbor(direction) {
                if world.is_live(n) && seen.insert(n) {
                    out.push(n);
                }
            }
        }
    }

    out
}

/// One [`crate::components::City::describe`] line per remaining city
pub fn render_remaining(world: &World) -> String {
    remaining_cities(world)
        .into_iter()
        .filter_map(|id| world.city(id))
        .map(|city| format!("{}\n", city.describe(world)))
        .collect()
}

/// Frame `msg` between two rows of `+`
pub fn banner(msg: &str) -> String {
    let line = "+".repeat(msg.chars().count());
    format!("\n{}\n{}\n{}\n", line, msg, line)
}

/// Serializable summary of the final state
pub fn survivor_report(sim: &Simulation, completion: Completion) -> SurvivorReport {
    let world = sim.world();
    let mut report = SurvivorReport::new(completion);

    for id in remaining_cities(world) {
        let Some(city) = world.city(id) else {
            continue;
        };
        let snapshot = world
            .live_neighbors(id)
            .into_iter()
            .filter_map(|(direction, n)| world.city(n).map(|c| (direction, c.name())))
            .fold(CitySnapshot::new(city.name()), |s, (direction, name)| {
                s.with_link(direction.as_str(), name)
            });
        report.cities.push(snapshot);
    }

    report.agents = sim
        .agents()
        .iter()
        .map(|agent| AgentSnapshot {
            name: agent.name().to_string(),
            dead: agent.is_dead(),
            city: agent
                .city()
                .and_then(|id| world.city(id))
                .map(|c| c.name().to_string()),
        })
        .collect();

    report
}
