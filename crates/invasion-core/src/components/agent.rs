//! Agent Components
//!
//! An alien: a name, a dead flag and the city it currently stands in.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::city::CityId;
use super::world::World;
use crate::error::SimError;

/// Position of an alien in the engine's alien list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub usize);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alien#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Agent {
    id: AgentId,
    name: String,
    dead: bool,
    /// `None` only until the first move
    city: Option<CityId>,
}

impl Agent {
    pub fn new(id: AgentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            dead: false,
            city: None,
        }
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: AgentId) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn kill(&mut self) {
        self.dead = true;
    }

    pub fn city(&self) -> Option<CityId> {
        self.city
    }

    pub fn is_placed(&self) -> bool {
        self.city.is_some()
    }

    /// Placed, and every road out of the current city is missing or leads
    /// to a destroyed city. An alien that has not landed is never trapped.
    pub fn is_trapped(&self, world: &World) -> bool {
        match self.city {
            Some(city) => world.live_neighbors(city).is_empty(),
            None => false,
        }
    }

    /// Move into `city` and register as one of its occupants
    pub fn invade(&mut self, world: &mut World, city: CityId) -> Result<(), SimError> {
        world
            .city_mut(city)
            .ok_or(SimError::UnknownCity(city))?
            .add_occupant(self.id);
        self.city = Some(city);
        Ok(())
    }

    /// Drop out of `city`'s occupant list. The current city is left as is;
    /// the engine follows up with [`Agent::invade`].
    pub fn leave(&self, world: &mut World, city: CityId) -> Result<(), SimError> {
        world
            .city_mut(city)
            .ok_or(SimError::UnknownCity(city))?
            .remove_occupant(self.id);
        Ok(())
    }
}
