//! Movement
//!
//! Every living agent relocates once per turn to a uniformly random cell
//! of its Moore neighborhood. No movement cost, no speed variation.

use rand::seq::SliceRandom;

use crate::components::AgentId;
use crate::model::OutbreakModel;

/// Relocates the agent to a random neighboring cell. On a degenerate grid
/// with no distinct neighbor the agent stays put.
pub(crate) fn wander(model: &mut OutbreakModel, id: AgentId) {
    let from = model.agents[id.0].pos;
    let neighbors = model.grid.neighborhood(from);
    if let Some(&to) = neighbors.choose(&mut model.rng) {
        model.grid.relocate(id, from, to);
        model.agents[id.0].pos = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_wander_moves_to_adjacent_cell() {
        let mut config = Config::default();
        config.population.initial_population = 1;
        config.grid.width = 5;
        config.grid.height = 5;
        config.population.infected_fraction = 0.0;
        let mut model = OutbreakModel::new(config, 42).unwrap();

        for _ in 0..50 {
            let from = model.agents[0].pos;
            wander(&mut model, AgentId(0));
            let to = model.agents[0].pos;

            assert_ne!(from, to);
            assert!(model.grid.neighborhood(from).contains(&to));
            assert!(model.grid.contains(to));
            assert_eq!(model.grid.occupants(to), &[AgentId(0)]);
            assert!(model.grid.occupants(from).is_empty());
        }
    }

    #[test]
    fn test_wander_on_single_cell_grid_stays_put() {
        let mut config = Config::default();
        config.population.initial_population = 1;
        config.grid.width = 1;
        config.grid.height = 1;
        config.population.infected_fraction = 0.0;
        let mut model = OutbreakModel::new(config, 42).unwrap();

        let from = model.agents[0].pos;
        wander(&mut model, AgentId(0));
        assert_eq!(model.agents[0].pos, from);
        assert_eq!(model.grid.occupants(from), &[AgentId(0)]);
    }
}
