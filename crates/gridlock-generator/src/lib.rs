//! Seeded Sudoku puzzle generation.
//!
//! Generation runs in three stages, all driven by one deterministic stream:
//!
//! 1. [`Mulberry32`] — a seedable random stream; every randomized decision
//!    downstream consumes its draws in a fixed order.
//! 2. [`fill_grid`] — randomized backtracking that synthesizes a complete,
//!    rule-valid grid.
//! 3. [`carve`] — clears a requested number of cells from the solution,
//!    producing the playable [`Puzzle`](gridlock_core::Puzzle) and its
//!    fixed-clue mask.
//!
//! [`PuzzleGenerator`] ties the stages together. Randomness is always
//! injected: `generate` draws a fresh seed from OS entropy and hands it to
//! `generate_with_seed`, so any puzzle can be reproduced from its seed
//! alone.
//!
//! # Examples
//!
//! ```
//! use gridlock_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::new();
//! let generated = generator.generate_with_seed(42);
//!
//! assert!(generated.solution.is_complete());
//! assert_eq!(generated.puzzle.blank_count(), 40);
//!
//! // The same seed always reproduces the same puzzle.
//! assert_eq!(generator.generate_with_seed(42), generated);
//! ```

use gridlock_core::{Grid, Puzzle};
use log::debug;
use rand::RngExt as _;

pub use self::{
    carve::{CarveError, DEFAULT_BLANKS, carve},
    fill::fill_grid,
    rng::Mulberry32,
};

mod carve;
mod fill;
mod rng;

/// A generated puzzle together with its solution and seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The carved, playable puzzle.
    pub puzzle: Puzzle,
    /// The solved grid the puzzle was carved from.
    pub solution: Grid,
    /// The seed that reproduces this puzzle exactly.
    pub seed: u32,
}

/// Entry point for puzzle generation.
///
/// Each generation call owns a private [`Mulberry32`] instance and a private
/// grid buffer, so concurrent callers never share state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    blanks: usize,
}

impl PuzzleGenerator {
    /// Creates a generator that carves the default 40 blanks.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            blanks: DEFAULT_BLANKS,
        }
    }

    /// Creates a generator that carves `blanks` cells per puzzle.
    ///
    /// # Panics
    ///
    /// Panics if `blanks` exceeds 81.
    #[must_use]
    pub fn with_blanks(blanks: usize) -> Self {
        assert!(blanks <= 81, "blanks out of range 0-81: {blanks}");
        Self { blanks }
    }

    /// Number of cells carved per puzzle.
    #[must_use]
    pub const fn blanks(&self) -> usize {
        self.blanks
    }

    /// Generates a puzzle from a fresh entropy seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        let seed = rand::rng().random_range(0..=u32::MAX);
        debug!("drew entropy seed {seed}");
        self.generate_with_seed(seed)
    }

    /// Generates the puzzle fully determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: u32) -> GeneratedPuzzle {
        let mut rng = Mulberry32::new(seed);
        let solution = fill_grid(&mut rng);
        let puzzle = match carve(&solution, &mut rng, self.blanks) {
            Ok(puzzle) => puzzle,
            // blanks <= 81 is enforced at construction and the solution is
            // complete by construction.
            Err(err) => unreachable!("carving a fresh solution cannot fail: {err}"),
        };
        debug!("generated puzzle: seed={seed} blanks={}", self.blanks);
        GeneratedPuzzle {
            puzzle,
            solution,
            seed,
        }
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}
