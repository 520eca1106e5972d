//! A set of board positions.

use crate::Position;

/// A set of cell positions, stored as an 81-bit mask.
///
/// Bit `i` corresponds to `Position::ALL[i]`, i.e. row-major order. The main
/// use is the fixed-clue mask of a [`Puzzle`](crate::Puzzle).
///
/// # Examples
///
/// ```
/// use gridlock_core::{CellMask, Position};
///
/// let mut mask = CellMask::new();
/// mask.insert(Position::new(0, 0));
/// mask.insert(Position::new(8, 8));
///
/// assert_eq!(mask.len(), 2);
/// assert!(mask.contains(Position::new(8, 8)));
/// assert!(!mask.contains(Position::new(4, 4)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellMask {
    bits: u128,
}

impl CellMask {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set of all 81 positions.
    pub const FULL: Self = Self {
        bits: (1u128 << 81) - 1,
    };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Adds a position to the set.
    pub fn insert(&mut self, pos: Position) {
        self.bits |= 1 << pos.index();
    }

    /// Removes a position from the set.
    pub fn remove(&mut self, pos: Position) {
        self.bits &= !(1 << pos.index());
    }

    /// Whether the set contains `pos`.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        self.bits >> pos.index() & 1 == 1
    }

    /// Number of positions in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterates over the contained positions in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Position> {
        Position::ALL.into_iter().filter(move |pos| self.contains(*pos))
    }
}

impl FromIterator<Position> for CellMask {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut mask = Self::new();
        for pos in iter {
            mask.insert(pos);
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_contains() {
        let mut mask = CellMask::new();
        let pos = Position::new(3, 5);
        assert!(!mask.contains(pos));
        mask.insert(pos);
        assert!(mask.contains(pos));
        assert_eq!(mask.len(), 1);
        mask.insert(pos);
        assert_eq!(mask.len(), 1);
        mask.remove(pos);
        assert!(mask.is_empty());
    }

    #[test]
    fn full_and_empty() {
        assert_eq!(CellMask::EMPTY.len(), 0);
        assert_eq!(CellMask::FULL.len(), 81);
        for pos in Position::ALL {
            assert!(CellMask::FULL.contains(pos));
            assert!(!CellMask::EMPTY.contains(pos));
        }
    }

    #[test]
    fn iteration_is_row_major() {
        let mask: CellMask = [Position::new(8, 0), Position::new(0, 8), Position::new(4, 4)]
            .into_iter()
            .collect();
        let collected: Vec<_> = mask.iter().collect();
        assert_eq!(
            collected,
            vec![Position::new(0, 8), Position::new(4, 4), Position::new(8, 0)]
        );
    }
}
