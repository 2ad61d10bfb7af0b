//! Simulation Engine
//!
//! Owns the world, the aliens and the random stream, and drives the
//! round-based invasion until it reaches the round limit or goes quiet.
//!
//! The stream is consumed in a fixed order: one shuffle per round, then one
//! draw per alien that lands or moves. Same seed and same inputs give the
//! same run, destruction for destruction.

mod collision;
mod movement;

pub use movement::MoveOutcome;

use invasion_events::{Completion, NoOpReason};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::components::{Agent, AgentId, World};
use crate::error::SimError;
use crate::events::EventSink;

/// Tally of one round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundSummary {
    pub round: u32,
    pub moves: u32,
    pub destructions: u32,
    pub skipped_dead: u32,
    pub skipped_trapped: u32,
    pub skipped_no_city: u32,
}

impl RoundSummary {
    fn new(round: u32) -> Self {
        Self {
            round,
            ..Self::default()
        }
    }

    fn record(&mut self, outcome: MoveOutcome) {
        match outcome {
            MoveOutcome::Moved { destroyed, .. } => {
                self.moves += 1;
                if destroyed {
                    self.destructions += 1;
                }
            }
            MoveOutcome::Skipped(NoOpReason::AlienDead) => self.skipped_dead += 1,
            MoveOutcome::Skipped(NoOpReason::AlienTrapped) => self.skipped_trapped += 1,
            MoveOutcome::Skipped(NoOpReason::WorldDestroyed) => self.skipped_no_city += 1,
        }
    }

    /// At least one alien landed or moved
    pub fn any_moved(&self) -> bool {
        self.moves > 0
    }
}

/// A running invasion
#[derive(Debug)]
pub struct Simulation {
    rng: SmallRng,
    round: u32,
    round_limit: u32,
    world: World,
    agents: Vec<Agent>,
    events_emitted: u64,
}

impl Simulation {
    /// Take ownership of the world and the aliens for the whole run.
    ///
    /// Alien ids are reassigned to their list positions.
    pub fn new(rng: SmallRng, round_limit: u32, world: World, mut agents: Vec<Agent>) -> Self {
        for (i, agent) in agents.iter_mut().enumerate() {
            agent.set_id(AgentId(i));
        }
        Self {
            rng,
            round: 0,
            round_limit,
            world,
            agents,
            events_emitted: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.0)
    }

    /// Rounds completed with at least one move
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn round_limit(&self) -> u32 {
        self.round_limit
    }

    pub fn events_emitted(&self) -> u64 {
        self.events_emitted
    }

    pub fn into_parts(self) -> (World, Vec<Agent>) {
        (self.world, self.agents)
    }

    /// Attempt one move for every alien, in a freshly shuffled order
    pub fn step_round(&mut self, sink: &mut dyn EventSink) -> Result<RoundSummary, SimError> {
        let mut order: Vec<usize> = (0..self.agents.len()).collect();
        order.shuffle(&mut self.rng);

        let mut summary = RoundSummary::new(self.round);
        for index in order {
            let outcome = self.move_agent(AgentId(index), sink)?;
            summary.record(outcome);
        }
        Ok(summary)
    }

    /// Run rounds until the limit is hit or a round moves nobody
    pub fn run(&mut self, sink: &mut dyn EventSink) -> Result<Completion, SimError> {
        info!(
            cities = self.world.len(),
            aliens = self.agents.len(),
            round_limit = self.round_limit,
            "invasion started"
        );

        while self.round < self.round_limit {
            let summary = self.step_round(sink)?;
            debug!(
                round = summary.round,
                moves = summary.moves,
                destructions = summary.destructions,
                dead = summary.skipped_dead,
                trapped = summary.skipped_trapped,
                "round finished"
            );

            if !summary.any_moved() {
                let completion = Completion::Quiescent { rounds: self.round };
                info!(rounds = self.round, "no alien can move, invasion over");
                return Ok(completion);
            }
            self.round += 1;
        }

        info!(rounds = self.round, "round limit reached");
        Ok(Completion::RoundLimit { rounds: self.round })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Direction;
    use crate::events::NullSink;
    use invasion_events::DestructionEvent;
    use rand::SeedableRng;

    fn agents(count: usize) -> Vec<Agent> {
        (0..count)
            .map(|i| Agent::new(AgentId(i), format!("a{}", i)))
            .collect()
    }

    fn two_city_world() -> World {
        let mut world = World::new();
        let foo = world.add_city("Foo");
        let bar = world.add_city("Bar");
        world.declare(foo);
        world.declare(bar);
        world.connect(foo, Direction::East, bar);
        world
    }

    fn ring_world() -> World {
        let mut world = World::new();
        let a = world.add_city("A");
        let b = world.add_city("B");
        let c = world.add_city("C");
        let d = world.add_city("D");
        world.connect(a, Direction::East, b);
        world.connect(b, Direction::South, c);
        world.connect(c, Direction::West, d);
        world.connect(d, Direction::North, a);
        world
    }

    #[test]
    fn test_isolated_city_single_alien() {
        let mut world = World::new();
        let foo = world.add_city("Foo");
        world.declare(foo);

        let mut sim = Simulation::new(SmallRng::seed_from_u64(1), 10_000, world, agents(1));
        let mut events: Vec<DestructionEvent> = Vec::new();
        let completion = sim.run(&mut events).unwrap();

        assert_eq!(completion, Completion::Quiescent { rounds: 1 });
        assert!(events.is_empty());
        assert_eq!(sim.agents()[0].city(), Some(foo));
        assert!(!sim.agents()[0].is_dead());
        assert!(sim.world().is_live(foo));
    }

    #[test]
    fn test_two_aliens_two_cities_always_collide() {
        for seed in 0..20 {
            let mut sim =
                Simulation::new(SmallRng::seed_from_u64(seed), 10_000, two_city_world(), agents(2));
            let mut events: Vec<DestructionEvent> = Vec::new();
            let completion = sim.run(&mut events).unwrap();

            assert!(completion.is_early(), "seed {}", seed);
            assert_eq!(events.len(), 1, "seed {}", seed);
            assert_eq!(events[0].agents.len(), 2);
            assert!(sim.agents().iter().all(Agent::is_dead));
            assert_eq!(sim.world().live_cities().len(), 1);
        }
    }

    #[test]
    fn test_placed_aliens_move_toward_each_other() {
        let mut world = two_city_world();
        let foo = world.get("Foo").unwrap();
        let bar = world.get("Bar").unwrap();
        let mut aliens = agents(2);
        aliens[0].invade(&mut world, foo).unwrap();
        aliens[1].invade(&mut world, bar).unwrap();

        let mut sim = Simulation::new(SmallRng::seed_from_u64(3), 10_000, world, aliens);
        let mut events: Vec<DestructionEvent> = Vec::new();
        let completion = sim.run(&mut events).unwrap();

        // The first mover walks into the other's city; the second is dead by its turn
        assert_eq!(completion, Completion::Quiescent { rounds: 1 });
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].round, 0);
        assert!(sim.agents().iter().all(Agent::is_dead));
        assert_eq!(sim.world().live_cities().len(), 1);
    }

    #[test]
    fn test_round_limit_reached() {
        let mut sim = Simulation::new(SmallRng::seed_from_u64(5), 25, ring_world(), agents(1));
        let completion = sim.run(&mut NullSink).unwrap();

        assert_eq!(completion, Completion::RoundLimit { rounds: 25 });
        assert_eq!(sim.round(), 25);
        assert!(!sim.agents()[0].is_dead());
        assert_eq!(sim.world().live_cities().len(), 4);
    }

    #[test]
    fn test_zero_round_limit() {
        let mut sim = Simulation::new(SmallRng::seed_from_u64(5), 0, ring_world(), agents(3));
        let completion = sim.run(&mut NullSink).unwrap();

        assert_eq!(completion, Completion::RoundLimit { rounds: 0 });
        assert!(sim.agents().iter().all(|a| !a.is_placed()));
    }

    #[test]
    fn test_empty_world_is_quiescent() {
        let mut sim = Simulation::new(SmallRng::seed_from_u64(5), 100, World::new(), agents(2));
        let completion = sim.run(&mut NullSink).unwrap();
        assert_eq!(completion, Completion::Quiescent { rounds: 0 });
    }

    #[test]
    fn test_no_aliens_is_quiescent() {
        let mut sim = Simulation::new(SmallRng::seed_from_u64(5), 100, ring_world(), Vec::new());
        let completion = sim.run(&mut NullSink).unwrap();
        assert_eq!(completion, Completion::Quiescent { rounds: 0 });
    }

    #[test]
    fn test_step_round_summary() {
        let mut sim = Simulation::new(SmallRng::seed_from_u64(9), 100, ring_world(), agents(1));
        let summary = sim.step_round(&mut NullSink).unwrap();

        assert_eq!(summary.round, 0);
        assert_eq!(summary.moves, 1);
        assert!(summary.any_moved());
        assert_eq!(summary.skipped_dead + summary.skipped_trapped, 0);
    }

    #[test]
    fn test_ids_reassigned_to_positions() {
        let aliens = vec![
            Agent::new(AgentId(7), "x"),
            Agent::new(AgentId(7), "y"),
        ];
        let sim = Simulation::new(SmallRng::seed_from_u64(0), 1, World::new(), aliens);
        assert_eq!(sim.agents()[0].id(), AgentId(0));
        assert_eq!(sim.agents()[1].id(), AgentId(1));
    }
}
