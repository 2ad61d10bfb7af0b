//! Shared event types and serialization for the alien invasion simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! The engine produces these records; reporting layers consume them.

pub mod event;
pub mod snapshot;

// Re-export event types
pub use event::{generate_event_id, Completion, DestructionEvent, NoOpReason};

// Re-export snapshot types
pub use snapshot::{AgentSnapshot, CitySnapshot, LinkSnapshot, SurvivorReport};
