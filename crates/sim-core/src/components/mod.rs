//! Simulation components: agents and the spatial grid.

pub mod agent;
pub mod grid;

pub use agent::{Agent, AgentId, Category};
pub use grid::{Coord, Grid};
