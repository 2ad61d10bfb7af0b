//! Alien Invasion Simulation Engine Library
//!
//! Aliens land on a map of cities joined by north/south/east/west roads and
//! wander at random. Whenever two or more meet in a city, the city and
//! everyone in it are destroyed. The run ends at a round limit, or earlier
//! when a whole round passes without anyone moving.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod events;
pub mod output;
pub mod setup;
pub mod simulation;

pub use components::{Agent, AgentId, City, CityId, Direction, World};
pub use config::{ConfigError, FileConfig, SimConfig};
pub use error::{InvasionError, SimError};
pub use events::{EventLogger, EventSink, NoticePrinter, NullSink, SinkError, Tee};
pub use simulation::{MoveOutcome, RoundSummary, Simulation};

// Re-export setup and output functions explicitly
pub use output::{banner, remaining_cities, render_remaining, survivor_report};
pub use setup::{create_agents, load_world, name_agents, parse_world, ParseError, SetupError};
