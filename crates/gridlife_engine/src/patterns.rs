//! Named seed patterns
//!
//! Cell coordinates are relative to the pattern's top-left corner; placement
//! translates them by an offset and is bounds-checked against the target
//! grid.

use crate::cell::Cell;
use crate::error::EngineError;
use crate::grid::Grid;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const PATTERNS: &[&Pattern] = &[&BLOCK, &BLINKER, &TOAD, &BEACON, &GLIDER];

impl Pattern {
    /// Marks the pattern's cells alive, translated by `(row_offset,
    /// col_offset)`. Placement is validated up front, so a failed call
    /// leaves the grid unchanged.
    pub fn place(
        &self,
        grid: &mut Grid,
        row_offset: usize,
        col_offset: usize,
    ) -> Result<(), EngineError> {
        for &(row, col) in self.cells {
            let (row, col) = (row + row_offset, col + col_offset);
            if row >= grid.rows() || col >= grid.cols() {
                return Err(EngineError::OutOfBounds {
                    row,
                    col,
                    rows: grid.rows(),
                    cols: grid.cols(),
                });
            }
        }
        for &(row, col) in self.cells {
            grid.set(row + row_offset, col + col_offset, Cell::Alive)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_marks_exactly_the_pattern_cells() {
        let mut grid = Grid::new(6, 6).unwrap();
        BLOCK.place(&mut grid, 2, 3).unwrap();
        assert_eq!(grid.population(), 4);
        assert!(grid.get(2, 3).unwrap().is_alive());
        assert!(grid.get(3, 4).unwrap().is_alive());
    }

    #[test]
    fn test_out_of_bounds_placement_leaves_grid_unchanged() {
        let mut grid = Grid::new(3, 3).unwrap();
        let result = BEACON.place(&mut grid, 0, 0);
        assert!(result.is_err());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_placed_blinker_oscillates() {
        let mut grid = Grid::new(5, 5).unwrap();
        BLINKER.place(&mut grid, 2, 1).unwrap();
        let seeded = grid.clone();
        grid.step();
        grid.step();
        assert_eq!(grid, seeded);
    }

    #[test]
    fn test_pattern_table_is_indexable_by_name() {
        assert!(PATTERNS.iter().any(|pattern| pattern.name == "Glider"));
    }
}
