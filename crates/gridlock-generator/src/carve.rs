//! Clue removal: turning a solved grid into a playable puzzle.

use gridlock_core::{Grid, Position, Puzzle};
use log::trace;

use crate::Mulberry32;

/// Number of cells cleared by default.
pub const DEFAULT_BLANKS: usize = 40;

/// Precondition violations for [`carve`].
///
/// These indicate integration bugs in the caller, so they are reported
/// rather than silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CarveError {
    /// More blanks were requested than the board has cells.
    #[display("cannot carve {requested} blanks from an 81-cell grid")]
    TooManyBlanks {
        /// The rejected blank count.
        requested: usize,
    },
    /// The input grid was not a complete, conflict-free solution.
    #[display("carving requires a complete, conflict-free grid")]
    IncompleteGrid,
}

/// Clears exactly `blanks` distinct cells from a solved grid.
///
/// Cells are picked by rejection sampling: a uniform row draw and a uniform
/// column draw, retried whenever the chosen cell is already empty. The draws
/// are part of the seeded stream, so a seed fully determines which cells are
/// carved. In the result, a position is a fixed clue exactly when its cell is
/// still filled.
///
/// No check is made that the carved puzzle keeps a unique solution; two
/// different completions may both satisfy the remaining clues.
///
/// # Errors
///
/// Returns [`CarveError::TooManyBlanks`] if `blanks` exceeds 81, and
/// [`CarveError::IncompleteGrid`] if `grid` is not a complete, valid
/// solution.
pub fn carve(grid: &Grid, rng: &mut Mulberry32, blanks: usize) -> Result<Puzzle, CarveError> {
    if blanks > 81 {
        return Err(CarveError::TooManyBlanks { requested: blanks });
    }
    if !grid.is_complete() {
        return Err(CarveError::IncompleteGrid);
    }

    let mut values = grid.clone();
    let mut removed = 0;
    while removed < blanks {
        #[expect(clippy::cast_possible_truncation)]
        let pos = Position::new(rng.index(9) as u8, rng.index(9) as u8);
        if values[pos].is_some() {
            trace!("carving cell {pos}");
            values[pos] = None;
            removed += 1;
        }
    }
    Ok(Puzzle::from_grid(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fill_grid;

    fn solved() -> Grid {
        fill_grid(&mut Mulberry32::new(42))
    }

    #[test]
    fn carves_exactly_the_requested_count() {
        let solution = solved();
        for blanks in [0, 1, 40, 80, 81] {
            let mut rng = Mulberry32::new(7);
            let puzzle = carve(&solution, &mut rng, blanks).unwrap();
            assert_eq!(puzzle.blank_count(), blanks);
            assert_eq!(puzzle.values.filled_count(), 81 - blanks);

            // Every surviving cell matches the solution; every carved cell
            // is empty.
            let mut differing = 0;
            for pos in Position::ALL {
                match puzzle.values[pos] {
                    Some(digit) => assert_eq!(Some(digit), solution[pos]),
                    None => differing += 1,
                }
            }
            assert_eq!(differing, blanks);
        }
    }

    #[test]
    fn fixed_mask_matches_surviving_cells() {
        let solution = solved();
        let puzzle = carve(&solution, &mut Mulberry32::new(7), DEFAULT_BLANKS).unwrap();
        assert_eq!(puzzle.fixed.len(), 81 - DEFAULT_BLANKS);
        for pos in Position::ALL {
            assert_eq!(puzzle.fixed.contains(pos), puzzle.values[pos].is_some());
        }
    }

    #[test]
    fn same_seed_carves_the_same_cells() {
        let solution = solved();
        let first = carve(&solution, &mut Mulberry32::new(123), DEFAULT_BLANKS).unwrap();
        let second = carve(&solution, &mut Mulberry32::new(123), DEFAULT_BLANKS).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_too_many_blanks() {
        let err = carve(&solved(), &mut Mulberry32::new(0), 82).unwrap_err();
        assert_eq!(err, CarveError::TooManyBlanks { requested: 82 });
        assert_eq!(
            err.to_string(),
            "cannot carve 82 blanks from an 81-cell grid"
        );
    }

    #[test]
    fn rejects_incomplete_grids() {
        let mut grid = solved();
        grid[Position::new(0, 0)] = None;
        let err = carve(&grid, &mut Mulberry32::new(0), 40).unwrap_err();
        assert_eq!(err, CarveError::IncompleteGrid);
    }
}
