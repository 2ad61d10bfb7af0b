//! City Components
//!
//! A city is a graph node with up to four roads and a list of occupying aliens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::agent::AgentId;
use super::world::World;

/// Stable handle of a city inside a [`World`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CityId(pub usize);

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "city#{}", self.0)
    }
}

/// Compass direction of a road
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Order in which roads are offered to a moving alien
    pub const MOVE_ORDER: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    fn slot(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a road name is not a compass direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDirection(pub String);

impl fmt::Display for UnknownDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown direction '{}'", self.0)
    }
}

impl std::error::Error for UnknownDirection {}

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "north" => Ok(Direction::North),
            "south" => Ok(Direction::South),
            "east" => Ok(Direction::East),
            "west" => Ok(Direction::West),
            other => Err(UnknownDirection(other.to_string())),
        }
    }
}

/// A node of the world graph
#[derive(Debug, Clone)]
pub struct City {
    name: String,
    destroyed: bool,
    /// Indexed by [`Direction::slot`]
    roads: [Option<CityId>; 4],
    occupants: Vec<AgentId>,
}

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            destroyed: false,
            roads: [None; 4],
            occupants: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Mark the city destroyed. Never reversed.
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    /// The city on the other end of the road in `direction`, destroyed or not
    pub fn neighbor(&self, direction: Direction) -> Option<CityId> {
        self.roads[direction.slot()]
    }

    pub(crate) fn set_neighbor(&mut self, direction: Direction, city: Option<CityId>) {
        self.roads[direction.slot()] = city;
    }

    pub fn occupants(&self) -> &[AgentId] {
        &self.occupants
    }

    pub fn add_occupant(&mut self, agent: AgentId) {
        self.occupants.push(agent);
    }

    /// Remove every occurrence of `agent`
    pub fn remove_occupant(&mut self, agent: AgentId) {
        self.occupants.retain(|a| *a != agent);
    }

    /// `Name east=A west=B south=C north=D`, listing only live neighbors
    pub fn describe(&self, world: &World) -> String {
        let mut out = self.name.clone();
        for direction in Direction::MOVE_ORDER {
            let live = self
                .neighbor(direction)
                .and_then(|id| world.city(id))
                .filter(|city| !city.is_destroyed());
            if let Some(city) = live {
                out.push(' ');
                out.push_str(direction.as_str());
                out.push('=');
                out.push_str(city.name());
            }
        }
        out
    }
}
