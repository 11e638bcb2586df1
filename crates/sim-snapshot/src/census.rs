//! Census Series Types
//!
//! Per-tick population counts, one row per completed tick. This is the
//! feed for time-series plotting of the outbreak's progress.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Population counts after one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensusPoint {
    pub tick: u64,
    /// Agents never infected
    pub susceptible: usize,
    pub infected_alive: usize,
    pub infected_dead: usize,
    pub total: usize,
}

/// The full census history of one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CensusSeries {
    pub run_id: Uuid,
    pub seed: u64,
    pub points: Vec<CensusPoint>,
}

impl CensusSeries {
    pub fn new(run_id: Uuid, seed: u64) -> Self {
        Self {
            run_id,
            seed,
            points: Vec::new(),
        }
    }

    pub fn push(&mut self, point: CensusPoint) {
        self.points.push(point);
    }

    /// The most recent census value, if any tick has completed.
    pub fn latest(&self) -> Option<&CensusPoint> {
        self.points.last()
    }
}
