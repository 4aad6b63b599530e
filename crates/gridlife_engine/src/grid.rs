//! Rectangular cell grid and the generation-step algorithm

use tracing::trace;

use crate::cell::Cell;
use crate::error::EngineError;

/// A `rows x cols` grid of cells, row-major. Dimensions are fixed at
/// construction; cells are owned exclusively by the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every cell dead.
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        let index = self.index(row, col)?;
        Ok(self.cells[index])
    }

    pub fn set(&mut self, row: usize, col: usize, state: Cell) -> Result<(), EngineError> {
        let index = self.index(row, col)?;
        self.cells[index] = state;
        Ok(())
    }

    /// Sets every cell to dead.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Advances the grid by one generation.
    ///
    /// Next states are computed against a snapshot of the current generation
    /// and applied only once the full scan is done, so a cell never sees a
    /// neighbor that has already been updated this tick. Survival on 2 or 3
    /// live neighbors, birth on exactly 3, death otherwise.
    pub fn step(&mut self) {
        let mut next = vec![Cell::Dead; self.cells.len()];
        for row in 0..self.rows {
            for col in 0..self.cols {
                let alive = self.cells[row * self.cols + col].is_alive();
                let neighbors = self.live_neighbors(row, col);
                next[row * self.cols + col] = match (alive, neighbors) {
                    (true, 2) | (true, 3) | (false, 3) => Cell::Alive,
                    _ => Cell::Dead,
                };
            }
        }
        self.cells = next;
        trace!(population = self.population(), "generation applied");
    }

    /// Live cells among the up-to-8 neighbors of `(row, col)`.
    ///
    /// The 3x3 window is clipped to `[0, rows) x [0, cols)`: edges do not
    /// wrap, and off-grid positions contribute nothing to the count.
    fn live_neighbors(&self, row: usize, col: usize) -> usize {
        let row_end = (row + 1).min(self.rows - 1);
        let col_end = (col + 1).min(self.cols - 1);
        let mut count = 0;
        for r in row.saturating_sub(1)..=row_end {
            for c in col.saturating_sub(1)..=col_end {
                if (r, c) != (row, col) && self.cells[r * self.cols + c].is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, EngineError> {
        if row >= self.rows || col >= self.cols {
            return Err(EngineError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(rows, cols).unwrap();
        for &(row, col) in alive {
            grid.set(row, col, Cell::Alive).unwrap();
        }
        grid
    }

    fn live_cells(grid: &Grid) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                if grid.get(row, col).unwrap().is_alive() {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    #[test]
    fn test_new_grid_starts_all_dead() {
        let grid = Grid::new(4, 6).unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 6);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(EngineError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert_eq!(
            Grid::new(5, 0),
            Err(EngineError::InvalidDimensions { rows: 5, cols: 0 })
        );
    }

    #[test]
    fn test_out_of_bounds_access_is_rejected() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert_eq!(
            grid.get(3, 0),
            Err(EngineError::OutOfBounds {
                row: 3,
                col: 0,
                rows: 3,
                cols: 3
            })
        );
        assert_eq!(
            grid.set(0, 3, Cell::Alive),
            Err(EngineError::OutOfBounds {
                row: 0,
                col: 3,
                rows: 3,
                cols: 3
            })
        );
    }

    #[test]
    fn test_clear_kills_every_cell() {
        let mut grid = grid_with(3, 3, &[(0, 0), (1, 1), (2, 2)]);
        grid.clear();
        assert_eq!(grid.population(), 0);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(grid.get(row, col), Ok(Cell::Dead));
            }
        }
    }

    #[test]
    fn test_lone_center_cell_dies_and_corners_stay_dead() {
        let mut grid = grid_with(3, 3, &[(1, 1)]);
        grid.step();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_block_is_a_still_life() {
        let mut grid = grid_with(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let before = grid.clone();
        grid.step();
        assert_eq!(grid, before);
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let mut grid = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        grid.step();
        assert_eq!(live_cells(&grid), vec![(1, 2), (2, 2), (3, 2)]);
        grid.step();
        assert_eq!(live_cells(&grid), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        // Vertical line hugging the left edge. With a toroidal topology the
        // column would behave like a blinker against the far edge; clipped
        // counting gives exactly these two survivors.
        let mut grid = grid_with(3, 3, &[(0, 0), (1, 0), (2, 0)]);
        grid.step();
        assert_eq!(live_cells(&grid), vec![(1, 0), (1, 1)]);
    }

    #[test]
    fn test_step_is_deterministic() {
        let seed = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2), (3, 3), (0, 0)]);
        let mut first = seed.clone();
        let mut second = seed.clone();
        first.step();
        second.step();
        assert_eq!(first, second);
    }
}
