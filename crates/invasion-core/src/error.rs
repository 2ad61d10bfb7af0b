//! Error Types
//!
//! Engine faults and the top-level error the binary reports.

use std::path::PathBuf;
use thiserror::Error;

use crate::components::{AgentId, CityId};
use crate::config::ConfigError;
use crate::events::SinkError;
use crate::setup::SetupError;

/// Faults that abort a run already in progress
#[derive(Debug, Error)]
pub enum SimError {
    #[error("engine referenced {0}, which is not in the world")]
    UnknownCity(CityId),
    #[error("engine referenced {0}, which is not in the alien list")]
    UnknownAgent(AgentId),
    #[error("could not record destruction event: {0}")]
    Sink(#[from] SinkError),
}

/// Anything that stops the invasion binary
#[derive(Debug, Error)]
pub enum InvasionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error("simulation aborted: {0}")]
    Simulation(#[from] SimError),
    #[error("could not write {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not write report: {0}")]
    Report(#[from] std::io::Error),
    #[error("could not serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl InvasionError {
    /// Errors caused by bad input, which warrant printing usage
    pub fn is_usage(&self) -> bool {
        matches!(self, InvasionError::Config(_) | InvasionError::Setup(_))
    }
}
