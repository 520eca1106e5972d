//! A carved puzzle and its fixed-clue mask.

use crate::{CellMask, Grid, Position};

/// A playable puzzle: working values plus the fixed-clue mask.
///
/// `values` is the player's mutable working copy; carved cells start empty
/// and may transiently hold conflicting digits during play. Positions in
/// `fixed` were filled at carve time and must never be edited — at creation,
/// a position is in `fixed` exactly when its cell is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// The working grid, with carved cells empty.
    pub values: Grid,
    /// The positions of the clue cells.
    pub fixed: CellMask,
}

impl Puzzle {
    /// Wraps a grid, marking every currently filled cell as a fixed clue.
    #[must_use]
    pub fn from_grid(values: Grid) -> Self {
        let fixed = Position::ALL
            .into_iter()
            .filter(|&pos| values[pos].is_some())
            .collect();
        Self { values, fixed }
    }

    /// Number of carved (initially empty) cells.
    #[must_use]
    pub fn blank_count(&self) -> usize {
        81 - self.fixed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Digit;

    #[test]
    fn fixed_mask_tracks_filled_cells() {
        let mut grid = Grid::new();
        grid[Position::new(0, 0)] = Some(Digit::D1);
        grid[Position::new(4, 4)] = Some(Digit::D5);
        grid[Position::new(8, 8)] = Some(Digit::D9);

        let puzzle = Puzzle::from_grid(grid);
        assert_eq!(puzzle.fixed.len(), 3);
        assert_eq!(puzzle.blank_count(), 78);
        for pos in Position::ALL {
            assert_eq!(puzzle.fixed.contains(pos), puzzle.values[pos].is_some());
        }
    }

    #[test]
    fn empty_grid_has_no_clues() {
        let puzzle = Puzzle::from_grid(Grid::new());
        assert!(puzzle.fixed.is_empty());
        assert_eq!(puzzle.blank_count(), 81);
    }
}
