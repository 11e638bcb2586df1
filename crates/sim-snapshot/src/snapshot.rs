//! Snapshot Types
//!
//! Serialization structs for world snapshots.
//!
//! Snapshots capture the complete state of the simulation at a point in
//! time. Consumers derive their own presentation from the raw fields
//! (marker size and color for the grid view are the visualizer's business,
//! not encoded here).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a snapshot ID with the given sequence number.
pub fn generate_snapshot_id(sequence: u64) -> String {
    format!("snap_{:06}", sequence)
}

/// One agent, as seen from outside the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub agent_id: usize,
    /// "susceptible" or "infected"
    pub category: String,
    pub alive: bool,
    pub x: u32,
    pub y: u32,
    pub shots_left: u32,
}

/// Complete world snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub snapshot_id: String,
    /// Identifies the run this snapshot belongs to
    pub run_id: Uuid,
    pub tick: u64,
    pub triggered_by: String,
    pub grid_width: u32,
    pub grid_height: u32,
    /// Count of agents never infected
    pub census: usize,
    pub infected_alive: usize,
    pub infected_dead: usize,
    pub total_agents: usize,
    pub agents: Vec<AgentSnapshot>,
}

impl WorldSnapshot {
    /// Finds an agent by ID.
    pub fn find_agent(&self, agent_id: usize) -> Option<&AgentSnapshot> {
        self.agents.iter().find(|a| a.agent_id == agent_id)
    }

    /// Returns the number of living agents (every susceptible plus the
    /// infected that have not been shot).
    pub fn living_agent_count(&self) -> usize {
        self.agents.iter().filter(|a| a.alive).count()
    }

    /// Returns agents occupying a specific cell.
    pub fn agents_at(&self, x: u32, y: u32) -> Vec<&AgentSnapshot> {
        self.agents.iter().filter(|a| a.x == x && a.y == y).collect()
    }

    /// Serializes the snapshot to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the snapshot to compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
