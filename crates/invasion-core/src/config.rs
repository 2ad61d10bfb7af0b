//! Configuration
//!
//! Everything a run needs, folded into one [`SimConfig`] value: compiled-in
//! defaults, then an optional TOML file, then command-line values.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Rounds before the invasion is called off
pub const DEFAULT_ROUND_LIMIT: u32 = 10_000;
/// World description read when no other path is configured
pub const DEFAULT_WORLD_FILE: &str = "./inputs/worldmap.txt";
/// Optional alien names, one per line
pub const DEFAULT_NAMES_FILE: &str = "./inputs/aliennames.txt";

/// Errors that can occur while building or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("number of aliens must be a positive integer, got {0}")]
    InvalidAlienCount(usize),
    #[error("round limit must be a positive integer")]
    InvalidRoundLimit,
    #[error("world file {0} does not exist")]
    MissingWorldFile(PathBuf),
    #[error("could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config file is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Optional overrides read from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub round_limit: Option<u32>,
    pub world_file: Option<PathBuf>,
    pub names_file: Option<PathBuf>,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Complete settings for one invasion run
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub aliens: usize,
    pub round_limit: u32,
    pub world_file: PathBuf,
    pub names_file: PathBuf,
    /// Seed of the random stream; drawn from entropy when absent
    pub seed: Option<u64>,
    /// Where to append destruction events as JSON lines
    pub events_out: Option<PathBuf>,
    /// Where to write the final survivor report as JSON
    pub report_json: Option<PathBuf>,
}

impl SimConfig {
    pub fn new(aliens: usize) -> Self {
        Self {
            aliens,
            round_limit: DEFAULT_ROUND_LIMIT,
            world_file: PathBuf::from(DEFAULT_WORLD_FILE),
            names_file: PathBuf::from(DEFAULT_NAMES_FILE),
            seed: None,
            events_out: None,
            report_json: None,
        }
    }

    pub fn with_file_config(mut self, file: FileConfig) -> Self {
        if let Some(limit) = file.round_limit {
            self.round_limit = limit;
        }
        if let Some(path) = file.world_file {
            self.world_file = path;
        }
        if let Some(path) = file.names_file {
            self.names_file = path;
        }
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_world_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.world_file = path.into();
        self
    }

    pub fn with_names_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.names_file = path.into();
        self
    }

    /// Reject settings that cannot start a run
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.aliens == 0 {
            return Err(ConfigError::InvalidAlienCount(self.aliens));
        }
        if self.round_limit == 0 {
            return Err(ConfigError::InvalidRoundLimit);
        }
        if !self.world_file.is_file() {
            return Err(ConfigError::MissingWorldFile(self.world_file.clone()));
        }
        Ok(())
    }
}
