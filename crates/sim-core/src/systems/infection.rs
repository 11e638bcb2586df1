//! Spread
//!
//! An infected agent sharing its cell with anyone converts one random
//! susceptible cellmate, then may leave behind an ammo cache for one of
//! the susceptible agents still standing there.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::{AgentId, Coord};
use crate::model::OutbreakModel;

/// The infected agent's turn after moving.
pub(crate) fn spread(model: &mut OutbreakModel, id: AgentId) {
    let pos = model.agents[id.0].pos;
    if model.grid.occupants(pos).len() <= 1 {
        return;
    }

    let healthy = susceptible_occupants(model, pos);
    if let Some(&target) = healthy.choose(&mut model.rng) {
        model.agents[target.0].infect();
        tracing::debug!(agent = id.0, target = target.0, "infection spread");
    }

    if model.rng.gen_bool(model.config.infection.supply_drop_chance) {
        // Recomputed after the conversion: a just-converted agent is no
        // longer susceptible and cannot receive the cache.
        let healthy = susceptible_occupants(model, pos);
        if let Some(&lucky) = healthy.choose(&mut model.rng) {
            model.agents[lucky.0].shots_left += model.config.infection.supply_drop_shots;
        }
    }
}

fn susceptible_occupants(model: &OutbreakModel, pos: Coord) -> Vec<AgentId> {
    model
        .grid
        .occupants(pos)
        .iter()
        .copied()
        .filter(|aid| model.agents[aid.0].is_susceptible())
        .collect()
}
