//! Event Types
//!
//! Records emitted by the engine while a run is in progress.

use serde::{Deserialize, Serialize};

/// Generates an event ID with the given sequence number.
pub fn generate_event_id(sequence: u64) -> String {
    format!("evt_{:08}", sequence)
}

/// A city was destroyed because more than one alien occupied it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestructionEvent {
    pub event_id: String,
    /// Zero-based round in which the collision happened
    pub round: u32,
    pub city: String,
    /// Every occupant killed, in the order they arrived
    pub agents: Vec<String>,
}

impl DestructionEvent {
    pub fn new(
        event_id: impl Into<String>,
        round: u32,
        city: impl Into<String>,
        agents: Vec<String>,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            round,
            city: city.into(),
            agents,
        }
    }

    /// Human-readable notice, e.g.
    /// `City named Foo has been destroyed by alien A and alien B!`
    pub fn notice(&self) -> String {
        let killers = self
            .agents
            .iter()
            .map(|name| format!("alien {}", name))
            .collect::<Vec<_>>()
            .join(" and ");
        format!("City named {} has been destroyed by {}!", self.city, killers)
    }
}

/// Why an alien did not move this round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoOpReason {
    AlienDead,
    AlienTrapped,
    /// No live city left to move into
    WorldDestroyed,
}

impl std::fmt::Display for NoOpReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoOpReason::AlienDead => write!(f, "alien is dead"),
            NoOpReason::AlienTrapped => write!(f, "alien is trapped"),
            NoOpReason::WorldDestroyed => write!(f, "no live city reachable"),
        }
    }
}

/// Terminal state of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Completion {
    /// The configured round limit was reached
    RoundLimit { rounds: u32 },
    /// A full round produced no successful move
    Quiescent { rounds: u32 },
}

impl Completion {
    /// Number of rounds that produced at least one move
    pub fn rounds(&self) -> u32 {
        match self {
            Completion::RoundLimit { rounds } | Completion::Quiescent { rounds } => *rounds,
        }
    }

    pub fn is_early(&self) -> bool {
        matches!(self, Completion::Quiescent { .. })
    }
}
