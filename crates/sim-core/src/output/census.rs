//! Census Output
//!
//! The aggregate population metric and its per-tick time series. The
//! census is a pure function of the agent collection: it counts agents
//! whose category was never set to Infected. Converted-then-killed agents
//! are not re-added.

use std::fs;
use std::path::Path;

use uuid::Uuid;

use sim_snapshot::{CensusPoint, CensusSeries};

use crate::components::{Agent, Category};
use crate::model::OutbreakModel;

/// Census series output path
pub const CENSUS_OUTPUT_PATH: &str = "output/census.json";

/// Count of never-infected agents.
pub fn census(agents: &[Agent]) -> usize {
    agents
        .iter()
        .filter(|a| a.category != Category::Infected)
        .count()
}

/// Accumulates one census point per completed tick.
pub struct CensusCollector {
    series: CensusSeries,
}

impl CensusCollector {
    pub fn new(run_id: Uuid, seed: u64) -> Self {
        Self {
            series: CensusSeries::new(run_id, seed),
        }
    }

    /// Records the state of the model after a completed tick.
    pub fn record(&mut self, model: &OutbreakModel) {
        self.series.push(CensusPoint {
            tick: model.tick(),
            susceptible: model.census(),
            infected_alive: model.infected_alive_count(),
            infected_dead: model.infected_dead_count(),
            total: model.agents().len(),
        });
    }

    pub fn series(&self) -> &CensusSeries {
        &self.series
    }

    pub fn into_series(self) -> CensusSeries {
        self.series
    }
}

/// Write the census series to the output file
pub fn write_series(series: &CensusSeries) -> std::io::Result<()> {
    let output_dir = Path::new("output");
    if !output_dir.exists() {
        fs::create_dir_all(output_dir)?;
    }

    let json = serde_json::to_string_pretty(series)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    fs::write(CENSUS_OUTPUT_PATH, json)?;
    Ok(())
}
