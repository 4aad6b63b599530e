use serde::{Deserialize, Serialize};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_default_to_dead() {
        assert_eq!(Cell::default(), Cell::Dead);
        assert!(!Cell::default().is_alive());
        assert!(Cell::Alive.is_alive());
    }
}
