//! Step Scheduler and per-agent transition systems.
//!
//! Each tick runs every agent exactly once, in a freshly shuffled order
//! drawn from the model RNG. There is no isolation inside a tick: an agent
//! observes every mutation made by agents ordered before it and none made
//! by agents ordered after it.

pub mod combat;
pub mod infection;
pub mod movement;
pub mod scavenging;

use rand::seq::SliceRandom;

use crate::components::{AgentId, Category};
use crate::model::OutbreakModel;

/// Runs one tick: shuffle the whole arena (dead agents included, they
/// no-op) and give every agent its turn.
pub fn run_tick(model: &mut OutbreakModel) {
    let mut order: Vec<AgentId> = (0..model.agents.len()).map(AgentId).collect();
    order.shuffle(&mut model.rng);
    for id in order {
        step_agent(model, id);
    }
}

/// One agent's transition, dispatched by its current state. An agent
/// converted earlier in the same tick takes its turn as infected.
pub fn step_agent(model: &mut OutbreakModel, id: AgentId) {
    if model.agents[id.0].is_dead() {
        return;
    }

    movement::wander(model, id);

    match model.agents[id.0].category {
        Category::Infected => infection::spread(model, id),
        Category::Susceptible => {
            combat::engage(model, id);
            scavenging::scavenge(model, id);
        }
    }
}
