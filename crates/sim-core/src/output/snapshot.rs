//! Snapshot Output
//!
//! Builds `WorldSnapshot`s from the live model and writes them under the
//! output directory for external visualizers. Snapshots are read-only
//! copies; generating one never touches simulation state.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use sim_snapshot::{generate_snapshot_id, AgentSnapshot, WorldSnapshot};

use crate::model::OutbreakModel;

/// Directory for the per-tick snapshot files
pub const SNAPSHOT_DIR: &str = "output/snapshots";

/// Path of the rolling latest-state file
pub const CURRENT_STATE_PATH: &str = "output/current_state.json";

/// Captures the current model state.
pub fn generate_snapshot(
    model: &OutbreakModel,
    run_id: Uuid,
    sequence: u64,
    triggered_by: &str,
) -> WorldSnapshot {
    let agents = model
        .agents()
        .iter()
        .map(|a| AgentSnapshot {
            agent_id: a.id.0,
            category: a.category.as_str().to_string(),
            alive: a.alive,
            x: a.pos.x,
            y: a.pos.y,
            shots_left: a.shots_left,
        })
        .collect();

    WorldSnapshot {
        snapshot_id: generate_snapshot_id(sequence),
        run_id,
        tick: model.tick(),
        triggered_by: triggered_by.to_string(),
        grid_width: model.grid().width(),
        grid_height: model.grid().height(),
        census: model.census(),
        infected_alive: model.infected_alive_count(),
        infected_dead: model.infected_dead_count(),
        total_agents: model.agents().len(),
        agents,
    }
}

/// Write a snapshot into the snapshots directory
pub fn write_snapshot_to_dir(snapshot: &WorldSnapshot) -> std::io::Result<()> {
    let dir = Path::new(SNAPSHOT_DIR);
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let path: PathBuf = dir.join(format!("{}.json", snapshot.snapshot_id));
    let json = snapshot
        .to_json_pretty()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    fs::write(path, json)?;
    Ok(())
}

/// Overwrite the rolling latest-state file
pub fn write_current_state(snapshot: &WorldSnapshot) -> std::io::Result<()> {
    let json = snapshot
        .to_json_pretty()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    if let Some(parent) = Path::new(CURRENT_STATE_PATH).parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(CURRENT_STATE_PATH, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_snapshot_matches_model() {
        let mut config = Config::default();
        config.population.initial_population = 10;
        config.grid.width = 5;
        config.grid.height = 5;
        let mut model = OutbreakModel::new(config, 42).unwrap();
        for _ in 0..3 {
            model.step();
        }

        let snapshot = generate_snapshot(&model, Uuid::nil(), 1, "periodic");

        assert_eq!(snapshot.snapshot_id, "snap_000001");
        assert_eq!(snapshot.tick, 3);
        assert_eq!(snapshot.total_agents, 10);
        assert_eq!(snapshot.agents.len(), 10);
        assert_eq!(
            snapshot.census + snapshot.infected_alive + snapshot.infected_dead,
            snapshot.total_agents
        );
        for agent in &snapshot.agents {
            assert!(agent.x < snapshot.grid_width);
            assert!(agent.y < snapshot.grid_height);
        }
    }
}
