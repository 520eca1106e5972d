//! The 9×9 board and its constraint checks.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{Digit, Position};

/// A 9×9 Sudoku board; `None` marks an empty cell.
///
/// A grid makes no validity promises by itself: during play it is the
/// player's working copy and may transiently hold conflicting digits. The
/// constraint checks ([`placement_ok`] and [`is_complete`]) are pure queries
/// over the current state.
///
/// [`placement_ok`]: Self::placement_ok
/// [`is_complete`]: Self::is_complete
///
/// # Examples
///
/// ```
/// use gridlock_core::{Digit, Grid, Position};
///
/// let mut grid = Grid::new();
/// let pos = Position::new(2, 3);
/// grid[pos] = Some(Digit::D9);
/// assert_eq!(grid[pos], Some(Digit::D9));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Builds a grid from a raw digit matrix, with 0 meaning empty.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ValueOutOfRange`] for any entry greater than 9.
    pub fn try_from_values(values: [[u8; 9]; 9]) -> Result<Self, GridError> {
        let mut grid = Self::new();
        for pos in Position::ALL {
            let raw = values[pos.row() as usize][pos.col() as usize];
            if raw == 0 {
                continue;
            }
            let Some(digit) = Digit::new(raw) else {
                return Err(GridError::ValueOutOfRange {
                    position: pos,
                    value: raw,
                });
            };
            grid[pos] = Some(digit);
        }
        Ok(grid)
    }

    /// Returns the raw digit matrix, with 0 meaning empty.
    #[must_use]
    pub fn values(&self) -> [[u8; 9]; 9] {
        let mut values = [[0; 9]; 9];
        for pos in Position::ALL {
            if let Some(digit) = self[pos] {
                values[pos.row() as usize][pos.col() as usize] = digit.value();
            }
        }
        values
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Whether `cell` may sit at `pos` without clashing with another cell in
    /// the same row, column, or box.
    ///
    /// An empty cell never conflicts. The cell at `pos` itself is excluded
    /// from all three scans, so a digit already written at `pos` is checked
    /// only against its peers. The grid is not mutated; `cell` need not match
    /// the current content of `pos`.
    #[must_use]
    pub fn placement_ok(&self, pos: Position, cell: Option<Digit>) -> bool {
        let Some(digit) = cell else {
            return true;
        };
        let clash = |p: Position| p != pos && self[p] == Some(digit);
        !(pos.row_positions().any(clash)
            || pos.col_positions().any(clash)
            || pos.box_positions().any(clash))
    }

    /// Whether the board is completely and consistently filled.
    ///
    /// True only when every cell holds a digit and every digit passes
    /// [`Self::placement_ok`] at its own position. This is the win condition
    /// during play: a board with an empty cell or a duplicate anywhere is not
    /// complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Position::ALL
            .iter()
            .all(|&pos| self[pos].is_some() && self.placement_ok(pos, self[pos]))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.index()]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row != 0 && row % 3 == 0 {
                writeln!(f, "------+-------+------")?;
            }
            for col in 0..9 {
                if col != 0 && col % 3 == 0 {
                    write!(f, "| ")?;
                }
                match self[Position::new(row, col)] {
                    Some(digit) => write!(f, "{digit} ")?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses an 81-character grid string in row-major order.
    ///
    /// `1`-`9` are digits; `0` and `.` are empty cells; whitespace is
    /// ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut cells = 0;
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            if cells == 81 {
                return Err(GridError::BadCellCount { cells: 82 });
            }
            let pos = Position::ALL[cells];
            grid[pos] = match character {
                '0' | '.' => None,
                '1'..='9' => Digit::new(character as u8 - b'0'),
                _ => return Err(GridError::BadCharacter { character }),
            };
            cells += 1;
        }
        if cells != 81 {
            return Err(GridError::BadCellCount { cells });
        }
        Ok(grid)
    }
}

/// Errors from building a [`Grid`] out of untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A raw matrix entry was outside 0-9.
    #[display("cell {position} holds {value}, expected 0-9")]
    ValueOutOfRange {
        /// Position of the offending entry.
        position: Position,
        /// The rejected raw value.
        value: u8,
    },
    /// A grid string did not describe exactly 81 cells.
    #[display("grid string has {cells} cells, expected 81")]
    BadCellCount {
        /// Number of cells found (82 means "more than 81").
        cells: usize,
    },
    /// A grid string held a character with no cell meaning.
    #[display("unexpected character {character:?} in grid string")]
    BadCharacter {
        /// The rejected character.
        character: char,
    },
}
