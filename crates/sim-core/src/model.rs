//! Population Registry
//!
//! `OutbreakModel` owns everything: the grid, the agent arena, the tick
//! counter and the single seeded RNG every random draw is taken from.
//! Agents are appended at construction or by the reinforcement event and
//! never removed, so an `AgentId` stays valid for the life of the run.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::components::{Agent, AgentId, Grid};
use crate::config::{Config, ConfigError};
use crate::output::census;
use crate::systems;

/// The complete simulation state.
pub struct OutbreakModel {
    pub(crate) config: Config,
    pub(crate) grid: Grid,
    pub(crate) agents: Vec<Agent>,
    pub(crate) tick: u64,
    pub(crate) rng: SmallRng,
}

impl OutbreakModel {
    /// Builds the grid, seeds the initial population at independent random
    /// coordinates (multiple agents may share a starting cell) and converts
    /// the creation-order prefix of size round(N * infected_fraction) to
    /// infected.
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = Grid::new(config.grid.width, config.grid.height);
        let mut model = Self {
            grid,
            agents: Vec::with_capacity(config.population.initial_population as usize),
            tick: 0,
            rng: SmallRng::seed_from_u64(seed),
            config,
        };

        for _ in 0..model.config.population.initial_population {
            model.spawn_agent();
        }

        let n = model.agents.len();
        let infected = ((n as f64) * model.config.population.infected_fraction + 0.5).floor()
            as usize;
        for agent in &mut model.agents[..infected.min(n)] {
            agent.infect();
        }

        Ok(model)
    }

    /// Advances the simulation by one tick: every agent takes its turn in
    /// a freshly shuffled order, then the reinforcement trigger is checked.
    pub fn step(&mut self) {
        systems::run_tick(self);
        self.tick += 1;

        if self.tick == self.config.population.reinforcement_tick {
            let count = self.config.population.reinforcement_count;
            for _ in 0..count {
                self.spawn_agent();
            }
            tracing::info!(
                tick = self.tick,
                count,
                "reinforcements arrived"
            );
        }
    }

    /// Appends one susceptible agent at a uniformly random coordinate.
    fn spawn_agent(&mut self) {
        let id = AgentId(self.agents.len());
        let pos = self.grid.random_coord(&mut self.rng);
        let agent = Agent::new(id, pos, self.config.population.initial_shots);
        self.grid.place(id, pos);
        self.agents.push(agent);
    }

    /// Number of completed ticks.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The full agent arena, in creation order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> &Agent {
        &self.agents[id.0]
    }

    /// Count of agents never infected.
    pub fn census(&self) -> usize {
        census::census(&self.agents)
    }

    pub fn infected_alive_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_infected_alive()).count()
    }

    pub fn infected_dead_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_dead()).count()
    }
}
