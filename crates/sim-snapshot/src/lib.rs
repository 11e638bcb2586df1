//! Shared snapshot types and serialization for the outbreak simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is the read-only boundary consumed by external visualizers and
//! time-series plotters.

pub mod census;
pub mod snapshot;

// Re-export snapshot types
pub use snapshot::{generate_snapshot_id, AgentSnapshot, WorldSnapshot};

// Re-export census types
pub use census::{CensusPoint, CensusSeries};
