//! Play-session state for a generated puzzle.
//!
//! A [`Game`] owns the player's working grid and the immutable fixed-clue
//! mask. Edits to carved cells are always accepted — even conflicting digits,
//! which are flagged through [`Game::is_conflict`] rather than rejected —
//! while edits to clue cells are refused with [`GameError::FixedCell`]. The
//! win condition is a completely and consistently filled working grid.
//!
//! # Examples
//!
//! ```
//! use gridlock_core::Position;
//! use gridlock_game::{CellState, Game};
//! use gridlock_generator::PuzzleGenerator;
//!
//! let generated = PuzzleGenerator::new().generate_with_seed(42);
//! let mut game = Game::new(generated);
//!
//! // Fill every carved cell with the known solution.
//! for pos in Position::ALL {
//!     if game.cell(pos) == CellState::Empty {
//!         let digit = game.solution()[pos].expect("solution is complete");
//!         game.set_cell(pos, Some(digit)).unwrap();
//!     }
//! }
//! assert!(game.is_won());
//! ```

pub use self::game::{CellState, Game, GameError};

mod game;
