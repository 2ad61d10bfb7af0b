//! Collision Resolution
//!
//! More than one alien in a city destroys the city and everyone in it.

use invasion_events::{generate_event_id, DestructionEvent};
use tracing::info;

use super::Simulation;
use crate::components::CityId;
use crate::error::SimError;
use crate::events::EventSink;

impl Simulation {
    /// Destroy `city` and kill all its occupants if it holds more than one.
    /// Returns whether a destruction happened.
    pub(super) fn resolve_collision(
        &mut self,
        city: CityId,
        sink: &mut dyn EventSink,
    ) -> Result<bool, SimError> {
        let target = self
            .world
            .city_mut(city)
            .ok_or(SimError::UnknownCity(city))?;
        if target.occupants().len() <= 1 {
            return Ok(false);
        }

        target.destroy();
        let city_name = target.name().to_string();
        let victims = target.occupants().to_vec();

        let mut names = Vec::with_capacity(victims.len());
        for victim in victims {
            let agent = self
                .agents
                .get_mut(victim.0)
                .ok_or(SimError::UnknownAgent(victim))?;
            agent.kill();
            names.push(agent.name().to_string());
        }

        self.events_emitted += 1;
        let event = DestructionEvent::new(
            generate_event_id(self.events_emitted),
            self.round,
            city_name,
            names,
        );
        info!(
            round = event.round,
            city = %event.city,
            killed = event.agents.len(),
            "city destroyed"
        );
        sink.record(&event)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Agent, AgentId, World};
    use crate::events::NullSink;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn crowded(count: usize) -> (Simulation, CityId) {
        let mut world = World::new();
        let foo = world.add_city("Foo");
        world.add_city("Bar");
        let mut agents: Vec<Agent> = (0..count)
            .map(|i| Agent::new(AgentId(i), format!("a{}", i)))
            .collect();
        for agent in &mut agents {
            agent.invade(&mut world, foo).unwrap();
        }
        (
            Simulation::new(SmallRng::seed_from_u64(0), 10, world, agents),
            foo,
        )
    }

    #[test]
    fn test_single_occupant_is_safe() {
        let (mut sim, foo) = crowded(1);
        let mut events: Vec<DestructionEvent> = Vec::new();

        assert!(!sim.resolve_collision(foo, &mut events).unwrap());
        assert!(sim.world().is_live(foo));
        assert!(!sim.agents()[0].is_dead());
        assert!(events.is_empty());
    }

    #[test]
    fn test_empty_city_is_safe() {
        let (mut sim, _) = crowded(0);
        let bar = sim.world().get("Bar").unwrap();
        assert!(!sim.resolve_collision(bar, &mut NullSink).unwrap());
    }

    #[test]
    fn test_three_way_collision_kills_all() {
        let (mut sim, foo) = crowded(3);
        let mut events: Vec<DestructionEvent> = Vec::new();

        assert!(sim.resolve_collision(foo, &mut events).unwrap());
        assert!(!sim.world().is_live(foo));
        assert!(sim.agents().iter().all(Agent::is_dead));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_id, "evt_00000001");
        assert_eq!(events[0].agents, vec!["a0", "a1", "a2"]);
        assert_eq!(sim.events_emitted(), 1);
    }

    #[test]
    fn test_unknown_city_is_a_fault() {
        let (mut sim, _) = crowded(1);
        let err = sim
            .resolve_collision(CityId(42), &mut NullSink)
            .unwrap_err();
        assert!(matches!(err, SimError::UnknownCity(CityId(42))));
    }
}
