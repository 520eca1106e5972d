use gridlock_core::{CellMask, Digit, Grid, Position};
use gridlock_generator::GeneratedPuzzle;

/// The state of one board cell as seen by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// A clue cell, present since carve time and immutable.
    Given(Digit),
    /// A digit entered by the player; possibly conflicting.
    Filled(Digit),
    /// No digit.
    Empty,
}

impl CellState {
    /// The digit held by this cell, if any.
    #[must_use]
    pub const fn digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Empty => None,
        }
    }

    /// Whether this cell is an immutable clue.
    #[must_use]
    pub const fn is_given(self) -> bool {
        matches!(self, Self::Given(_))
    }
}

/// Errors from play-session edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The player tried to edit a clue cell.
    #[display("cell {position} is a fixed clue and cannot be edited")]
    FixedCell {
        /// The clue cell that was targeted.
        position: Position,
    },
}

/// A single-player session over one generated puzzle.
///
/// The session owns the mutable working grid exclusively; the fixed-clue
/// mask never changes for the puzzle's lifetime. Conflict and win queries
/// are evaluated against the live working grid, so the intended pattern is
/// to call them right after each edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    values: Grid,
    fixed: CellMask,
    solution: Grid,
    seed: u32,
}

impl Game {
    /// Starts a session over a generated puzzle.
    ///
    /// Carved cells start empty; every clue cell is immutable from here on.
    #[must_use]
    pub fn new(generated: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            puzzle,
            solution,
            seed,
        } = generated;
        Self {
            values: puzzle.values,
            fixed: puzzle.fixed,
            solution,
            seed,
        }
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        match self.values[pos] {
            Some(digit) if self.fixed.contains(pos) => CellState::Given(digit),
            Some(digit) => CellState::Filled(digit),
            None => CellState::Empty,
        }
    }

    /// The player's working grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.values
    }

    /// The solved grid this puzzle was carved from.
    #[must_use]
    pub const fn solution(&self) -> &Grid {
        &self.solution
    }

    /// The seed that reproduces this puzzle.
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// Writes `value` at `pos`, with `None` clearing the cell.
    ///
    /// Conflicting digits are accepted and left for [`Self::is_conflict`] to
    /// flag; rejecting them here would block legitimate trial-and-error play.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::FixedCell`] if `pos` is a clue cell.
    pub fn set_cell(&mut self, pos: Position, value: Option<Digit>) -> Result<(), GameError> {
        if self.fixed.contains(pos) {
            return Err(GameError::FixedCell { position: pos });
        }
        self.values[pos] = value;
        Ok(())
    }

    /// Whether the cell at `pos` currently clashes with one of its peers.
    ///
    /// Empty cells never conflict. This drives per-cell error highlighting
    /// after each edit.
    #[must_use]
    pub fn is_conflict(&self, pos: Position) -> bool {
        !self.values.placement_ok(pos, self.values[pos])
    }

    /// Whether the board is completely and consistently filled.
    ///
    /// Any complete, conflict-free fill wins, not just the generator's own
    /// solution.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.values.is_complete()
    }
}
