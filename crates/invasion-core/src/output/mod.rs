//! Output
//!
//! End-of-run reporting over the final world state.

pub mod report;

pub use report::*;
