//! Spatial Grid
//!
//! A bounded 2-D grid with toroidal wraparound and multiple occupancy per
//! cell. The grid tracks which agents stand in which cell; agent records
//! keep their own coordinate, and the model keeps the two in sync.

use rand::rngs::SmallRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::agent::AgentId;

/// A cell coordinate. Always within [0, width) x [0, height) for the grid
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

/// The toroidal grid. Moving off one edge wraps to the opposite edge.
#[derive(Debug, Clone)]
pub struct Grid {
    width: u32,
    height: u32,
    /// Occupant lists, row-major: cells[y * width + x].
    cells: Vec<Vec<AgentId>>,
}

impl Grid {
    /// Creates an empty grid. Dimensions must be positive; the
    /// configuration layer validates them before any model is built, so a
    /// zero here is a caller bug and panics.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![Vec::new(); (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, pos: Coord) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    fn index(&self, pos: Coord) -> usize {
        debug_assert!(self.contains(pos));
        (pos.y as usize) * (self.width as usize) + (pos.x as usize)
    }

    /// Wraps a possibly out-of-range offset coordinate back onto the torus.
    fn wrap(&self, x: i64, y: i64) -> Coord {
        Coord {
            x: x.rem_euclid(self.width as i64) as u32,
            y: y.rem_euclid(self.height as i64) as u32,
        }
    }

    /// The Moore neighborhood of a cell: the 8 surrounding cells, wrapped,
    /// self excluded. On degenerate dimensions wrapped neighbors collapse
    /// onto the same cell, so the result is deduplicated; it can even be
    /// empty on a 1x1 grid.
    pub fn neighborhood(&self, pos: Coord) -> Vec<Coord> {
        let mut neighbors = Vec::with_capacity(8);
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let wrapped = self.wrap(pos.x as i64 + dx, pos.y as i64 + dy);
                if wrapped != pos && !neighbors.contains(&wrapped) {
                    neighbors.push(wrapped);
                }
            }
        }
        neighbors
    }

    /// All agents standing in a cell, in placement order.
    pub fn occupants(&self, pos: Coord) -> &[AgentId] {
        &self.cells[self.index(pos)]
    }

    /// Puts a newly created agent into a cell.
    pub fn place(&mut self, id: AgentId, pos: Coord) {
        let idx = self.index(pos);
        self.cells[idx].push(id);
    }

    /// Moves an agent between cells.
    pub fn relocate(&mut self, id: AgentId, from: Coord, to: Coord) {
        let from_idx = self.index(from);
        self.cells[from_idx].retain(|&occupant| occupant != id);
        let to_idx = self.index(to);
        self.cells[to_idx].push(id);
    }

    /// A uniformly random cell coordinate.
    pub fn random_coord(&self, rng: &mut SmallRng) -> Coord {
        Coord {
            x: rng.gen_range(0..self.width),
            y: rng.gen_range(0..self.height),
        }
    }
}
