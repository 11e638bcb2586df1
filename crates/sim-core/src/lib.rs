//! Core outbreak simulation: grid, agents, population, tick scheduler.

pub mod components;
pub mod config;
pub mod model;
pub mod output;
pub mod systems;

pub use components::{Agent, AgentId, Category, Coord, Grid};
pub use config::{Config, ConfigError};
pub use model::OutbreakModel;
