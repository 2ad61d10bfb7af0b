//! World Loading
//!
//! One line per city: `Name dir=Other dir=Other ...` with `dir` one of
//! `north`, `south`, `east`, `west`.

use std::path::Path;
use thiserror::Error;
use tracing::debug;

use super::SetupError;
use crate::components::{Direction, World};

/// A malformed world description. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: road '{token}' has no '=' separator")]
    MissingSeparator { line: usize, token: String },
    #[error("line {line}: unknown direction '{direction}'")]
    UnknownDirection { line: usize, direction: String },
    #[error("line {line}: road '{token}' names no city")]
    EmptyCityName { line: usize, token: String },
}

/// Build a world from its textual description.
///
/// Any malformed road aborts the whole parse.
pub fn parse_world(input: &str) -> Result<World, ParseError> {
    let mut world = World::new();

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let mut tokens = raw.split_whitespace();
        let Some(name) = tokens.next() else {
            continue;
        };

        let city = world.add_city(name);
        world.declare(city);

        for token in tokens {
            let (direction, other) = parse_road(line, token)?;
            let other = world.add_city(other);
            world.connect(city, direction, other);
        }
    }

    Ok(world)
}

fn parse_road(line: usize, token: &str) -> Result<(Direction, &str), ParseError> {
    let (direction, other) = token
        .split_once('=')
        .ok_or_else(|| ParseError::MissingSeparator {
            line,
            token: token.to_string(),
        })?;
    let direction = direction
        .parse::<Direction>()
        .map_err(|e| ParseError::UnknownDirection {
            line,
            direction: e.0,
        })?;
    if other.is_empty() {
        return Err(ParseError::EmptyCityName {
            line,
            token: token.to_string(),
        });
    }
    Ok((direction, other))
}

/// Read and parse a world description file
pub fn load_world(path: impl AsRef<Path>) -> Result<World, SetupError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| SetupError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let world = parse_world(&content).map_err(|source| SetupError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(cities = world.len(), path = %path.display(), "loaded world");
    Ok(world)
}
