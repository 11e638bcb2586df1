//! Agent Components
//!
//! The per-agent record and its one-way state transitions. An agent is
//! addressed by a stable arena index; peers mutate each other through the
//! arena, never through free-floating references.

use serde::{Deserialize, Serialize};

use crate::components::grid::Coord;

/// Stable handle for an agent: its index into the population arena.
/// Handles are never reused; agents are never removed from the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub usize);

/// Disease category. The only transition is Susceptible -> Infected;
/// there is no recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    Susceptible,
    Infected,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Susceptible => "susceptible",
            Category::Infected => "infected",
        }
    }
}

/// A single agent in the population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub category: Category,
    /// Only infected agents can die; a dead agent stays in the arena and
    /// in its grid cell but no longer moves or interacts.
    pub alive: bool,
    /// Ammunition. Unsigned, so it can never go negative; every decrement
    /// is gated on a positive value.
    pub shots_left: u32,
    pub pos: Coord,
}

impl Agent {
    /// Creates a new susceptible agent at a position with the given
    /// starting ammunition.
    pub fn new(id: AgentId, pos: Coord, shots_left: u32) -> Self {
        Self {
            id,
            category: Category::Susceptible,
            alive: true,
            shots_left,
            pos,
        }
    }

    pub fn is_susceptible(&self) -> bool {
        self.category == Category::Susceptible
    }

    /// An infected agent that can still move and spread.
    pub fn is_infected_alive(&self) -> bool {
        self.category == Category::Infected && self.alive
    }

    pub fn is_dead(&self) -> bool {
        !self.alive
    }

    /// Converts the agent to Infected. Position and ammunition are
    /// untouched. Idempotent once infected.
    pub fn infect(&mut self) {
        self.category = Category::Infected;
    }

    /// Marks an infected agent as dead. Terminal: the agent never moves
    /// or interacts again.
    pub fn kill(&mut self) {
        debug_assert_eq!(self.category, Category::Infected);
        self.alive = false;
    }
}
