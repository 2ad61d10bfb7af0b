//! Components
//!
//! The world graph (cities and roads) and the aliens that roam it.

pub mod agent;
pub mod city;
pub mod world;

pub use agent::*;
pub use city::*;
pub use world::*;
