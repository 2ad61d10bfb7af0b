//! World Setup
//!
//! Reading the world description, spawning aliens and naming them.

pub mod agents;
pub mod world;

pub use agents::*;
pub use world::*;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building the inputs of a run
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("world file {path} is malformed: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}
