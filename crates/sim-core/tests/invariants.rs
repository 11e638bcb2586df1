//! Invariant sweep over a long seeded run.
//!
//! Checks after every tick: positions stay on the grid, the grid and the
//! arena agree about who stands where, category and liveness transitions
//! are one-way, dead agents are frozen, and the census stays consistent.

use sim_core::{Category, Config, Coord, OutbreakModel};

fn check_grid_coherence(model: &OutbreakModel) {
    let mut seen = 0;
    for y in 0..model.grid().height() {
        for x in 0..model.grid().width() {
            let cell = Coord { x, y };
            for id in model.grid().occupants(cell) {
                assert_eq!(model.agent(*id).pos, cell, "grid/arena position mismatch");
                seen += 1;
            }
        }
    }
    assert_eq!(seen, model.agents().len(), "every agent occupies exactly one cell");
}

#[test]
fn test_invariants_hold_over_long_run() {
    let config = Config::default();
    let reinforcement_tick = config.population.reinforcement_tick;
    let initial = config.population.initial_population as usize;
    let reinforcements = config.population.reinforcement_count as usize;

    let mut model = OutbreakModel::new(config, 20260823).unwrap();
    let mut prev: Vec<(Category, bool, Coord)> = model
        .agents()
        .iter()
        .map(|a| (a.category, a.alive, a.pos))
        .collect();

    for _ in 0..60 {
        model.step();

        // Population only ever grows, by exactly one reinforcement batch.
        let expected = if model.tick() >= reinforcement_tick {
            initial + reinforcements
        } else {
            initial
        };
        assert_eq!(model.agents().len(), expected);

        for agent in model.agents() {
            assert!(model.grid().contains(agent.pos), "position escaped the grid");
            if agent.is_susceptible() {
                assert!(agent.alive, "susceptible agents never die");
            }
        }
        check_grid_coherence(&model);

        // Per-agent monotonicity against the previous tick.
        for (agent, (was_category, was_alive, was_pos)) in
            model.agents().iter().zip(prev.iter())
        {
            if *was_category == Category::Infected {
                assert_eq!(agent.category, Category::Infected, "no recovery");
            }
            if !was_alive {
                assert!(!agent.alive, "no resurrection");
                assert_eq!(agent.pos, *was_pos, "dead agents do not move");
                assert_eq!(agent.category, *was_category);
            }
        }
        prev = model
            .agents()
            .iter()
            .map(|a| (a.category, a.alive, a.pos))
            .collect();

        // Census agrees with a direct recount and never exceeds the total.
        let recount = model
            .agents()
            .iter()
            .filter(|a| a.category != Category::Infected)
            .count();
        assert_eq!(model.census(), recount);
        assert!(model.census() <= model.agents().len());
    }
}

#[test]
fn test_census_scenario_small_population() {
    let mut config = Config::default();
    config.population.initial_population = 10;
    config.grid.width = 5;
    config.grid.height = 5;

    let model = OutbreakModel::new(config, 99).unwrap();

    // round(10 * 0.10) = 1 initial infected, census 9 before any tick.
    assert_eq!(model.tick(), 0);
    assert_eq!(model.census(), 9);
    assert_eq!(model.infected_alive_count(), 1);
    assert_eq!(model.infected_dead_count(), 0);
}
