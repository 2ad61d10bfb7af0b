//! Move Selection
//!
//! Decides where an alien goes this round, then applies the move.

use invasion_events::NoOpReason;
use rand::Rng;
use tracing::trace;

use super::Simulation;
use crate::components::{AgentId, CityId};
use crate::error::SimError;
use crate::events::EventSink;

/// Result of one alien's turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The alien landed (`from` is `None`) or travelled
    Moved {
        from: Option<CityId>,
        to: CityId,
        /// The arrival set off a collision
        destroyed: bool,
    },
    Skipped(NoOpReason),
}

impl MoveOutcome {
    pub fn is_move(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

enum Pick {
    Go { from: Option<CityId>, to: CityId },
    Stay(NoOpReason),
}

impl Simulation {
    /// Take one turn for `id`: pick a destination, move, resolve collisions
    pub fn move_agent(
        &mut self,
        id: AgentId,
        sink: &mut dyn EventSink,
    ) -> Result<MoveOutcome, SimError> {
        let (from, to) = match self.pick_move(id)? {
            Pick::Go { from, to } => (from, to),
            Pick::Stay(reason) => {
                trace!(alien = %id, %reason, "no move");
                return Ok(MoveOutcome::Skipped(reason));
            }
        };

        let agent = self.agents.get_mut(id.0).ok_or(SimError::UnknownAgent(id))?;
        // Leave first so a road that loops back to the same city keeps the
        // alien registered there.
        if let Some(previous) = from {
            agent.leave(&mut self.world, previous)?;
        }
        agent.invade(&mut self.world, to)?;
        trace!(alien = %id, from = ?from, to = %to, "moved");

        let destroyed = self.resolve_collision(to, sink)?;
        Ok(MoveOutcome::Moved {
            from,
            to,
            destroyed,
        })
    }

    fn pick_move(&mut self, id: AgentId) -> Result<Pick, SimError> {
        let agent = self.agents.get(id.0).ok_or(SimError::UnknownAgent(id))?;
        if agent.is_dead() {
            return Ok(Pick::Stay(NoOpReason::AlienDead));
        }

        let Some(from) = agent.city() else {
            return Ok(self
                .pick_any_city()
                .map_or(Pick::Stay(NoOpReason::WorldDestroyed), |to| Pick::Go {
                    from: None,
                    to,
                }));
        };

        if self.world.city(from).is_none() {
            return Err(SimError::UnknownCity(from));
        }
        if agent.is_trapped(&self.world) {
            return Ok(Pick::Stay(NoOpReason::AlienTrapped));
        }

        Ok(self
            .pick_connected_city(from)
            .map_or(Pick::Stay(NoOpReason::WorldDestroyed), |to| Pick::Go {
                from: Some(from),
                to,
            }))
    }

    /// Uniform pick among all live cities, enumerated in name order
    fn pick_any_city(&mut self) -> Option<CityId> {
        let live = self.world.live_cities();
        if live.is_empty() {
            return None;
        }
        let pick = self.rng.gen_range(0..live.len());
        Some(live[pick])
    }

    /// Uniform pick among live roads out of `from`, in east, west, south,
    /// north order. The road list is rebuilt on every call.
    fn pick_connected_city(&mut self, from: CityId) -> Option<CityId> {
        let roads = self.world.live_neighbors(from);
        if roads.is_empty() {
            return None;
        }
        let pick = self.rng.gen_range(0..roads.len());
        Some(roads[pick].1)
    }
}
