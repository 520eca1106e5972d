//! Board coordinates and the row/column/box structure.

use std::fmt::{self, Display};

/// A cell coordinate on the 9×9 board.
///
/// Rows and columns are both 0-8, with row 0 at the top and column 0 on the
/// left. The board is partitioned into nine 3×3 boxes, numbered 0-8 in
/// row-major order.
///
/// # Examples
///
/// ```
/// use gridlock_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.box_of(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order (row 0 col 0 through row 8 col 8).
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from row and column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    #[must_use]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "position out of range: ({row}, {col})");
        Self { row, col }
    }

    /// Row coordinate (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column coordinate (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Index of the 3×3 box containing this cell (0-8, row-major).
    #[must_use]
    pub const fn box_of(self) -> u8 {
        self.row / 3 * 3 + self.col / 3
    }

    /// Row-major cell index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Every position in this cell's row, left to right.
    pub fn row_positions(self) -> impl Iterator<Item = Self> {
        (0..9).map(move |col| Self { row: self.row, col })
    }

    /// Every position in this cell's column, top to bottom.
    pub fn col_positions(self) -> impl Iterator<Item = Self> {
        (0..9).map(move |row| Self { row, col: self.col })
    }

    /// Every position in this cell's 3×3 box, in row-major order.
    pub fn box_positions(self) -> impl Iterator<Item = Self> {
        let row0 = self.row / 3 * 3;
        let col0 = self.col / 3 * 3;
        (0..9).map(move |i| Self {
            row: row0 + i / 3,
            col: col0 + i % 3,
        })
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
