//! Complete-grid synthesis.

use gridlock_core::{Digit, Grid, Position};

use crate::Mulberry32;

/// Builds a fully populated, rule-valid grid.
///
/// Randomized constructive backtracking: cells are visited in row-major
/// order, and at each cell the candidate digits 1-9 are shuffled before
/// being tried, so the seed picks which of the many valid completions is
/// reached. A digit is placed only if it is absent from the cell's row,
/// column, and box; when no candidate fits, the previous cell reverts and
/// tries its next candidate.
///
/// The search always terminates with a solution for the standard 9×9
/// structure, so no failure path is surfaced. Recursion depth is bounded by
/// the 81 cells.
#[must_use]
pub fn fill_grid(rng: &mut Mulberry32) -> Grid {
    let mut grid = Grid::new();
    let filled = fill_from(&mut grid, 0, rng);
    debug_assert!(filled, "9x9 synthesis cannot fail");
    grid
}

fn fill_from(grid: &mut Grid, cell: usize, rng: &mut Mulberry32) -> bool {
    if cell == 81 {
        return true;
    }
    let pos = Position::ALL[cell];

    let mut candidates = Digit::ALL;
    rng.shuffle(&mut candidates);

    for digit in candidates {
        if grid.placement_ok(pos, Some(digit)) {
            grid[pos] = Some(digit);
            if fill_from(grid, cell + 1, rng) {
                return true;
            }
            grid[pos] = None;
        }
    }
    false
}
