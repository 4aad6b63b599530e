use tracing::debug;

use crate::config::GridConfig;
use crate::error::EngineError;
use crate::grid::Grid;

/// A grid plus a generation counter.
///
/// The driver (a timer in a host application, a loop in a test) calls
/// [`step`](Self::step) once per tick; ticks never overlap because every call
/// runs to completion before returning.
pub struct Automaton {
    grid: Grid,
    generation: u64,
}

impl Automaton {
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        Ok(Self {
            grid: Grid::new(rows, cols)?,
            generation: 0,
        })
    }

    pub fn from_config(config: &GridConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Self::new(config.rows, config.cols)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access, for seeding cells before or between runs.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advances the grid by one generation.
    pub fn step(&mut self) {
        self.grid.step();
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.grid.population(),
            "advanced generation"
        );
    }

    /// Kills every cell and resets the generation counter.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }
}
