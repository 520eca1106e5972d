//! Board data model and constraint validation for Sudoku.
//!
//! This crate holds the types shared by puzzle generation and play:
//!
//! - [`digit`]: type-safe cell values 1-9 (an empty cell is `Option<Digit>`)
//! - [`position`]: board coordinates and the row/column/box structure
//! - [`grid`]: the 9×9 board, including placement validation and the
//!   completion check used as the win condition
//! - [`mask`]: an 81-bit position set, used for the fixed-clue mask
//! - [`puzzle`]: a carved puzzle paired with its fixed-clue mask
//!
//! Everything here is synchronous and allocation-free; validation is a pure
//! query over the current board state.
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! grid[Position::new(0, 0)] = Some(Digit::D5);
//!
//! // 5 now clashes with the rest of row 0
//! assert!(!grid.placement_ok(Position::new(0, 3), Some(Digit::D5)));
//! // a different digit is fine
//! assert!(grid.placement_ok(Position::new(0, 3), Some(Digit::D7)));
//! ```

pub mod digit;
pub mod grid;
pub mod mask;
pub mod position;
pub mod puzzle;

pub use self::{
    digit::Digit,
    grid::{Grid, GridError},
    mask::CellMask,
    position::Position,
    puzzle::Puzzle,
};
