//! Scavenging
//!
//! Passive resupply: independent of location, a susceptible agent has a
//! small chance of finding a spare round each turn.

use rand::Rng;

use crate::components::AgentId;
use crate::model::OutbreakModel;

pub(crate) fn scavenge(model: &mut OutbreakModel, id: AgentId) {
    if model.rng.gen_bool(model.config.scavenging.find_chance) {
        model.agents[id.0].shots_left += 1;
    }
}
