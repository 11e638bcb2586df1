//! Combat
//!
//! A susceptible agent with ammunition fires at one random living infected
//! cellmate. The shot costs a round whether or not it connects; already
//! dead infected are never targeted.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::AgentId;
use crate::model::OutbreakModel;

/// The susceptible agent's combat step after moving.
pub(crate) fn engage(model: &mut OutbreakModel, id: AgentId) {
    if model.agents[id.0].shots_left == 0 {
        return;
    }

    let pos = model.agents[id.0].pos;
    let targets: Vec<AgentId> = model
        .grid
        .occupants(pos)
        .iter()
        .copied()
        .filter(|aid| model.agents[aid.0].is_infected_alive())
        .collect();

    if let Some(&target) = targets.choose(&mut model.rng) {
        if model.rng.gen_bool(model.config.combat.hit_chance) {
            model.agents[target.0].kill();
            tracing::debug!(agent = id.0, target = target.0, "infected agent shot down");
        }
        model.agents[id.0].shots_left -= 1;
    }
}
