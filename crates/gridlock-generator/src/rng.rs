//! Deterministic random stream for puzzle generation.

/// A mulberry32 pseudo-random stream.
///
/// Small, fast, and deliberately non-cryptographic: generation only needs
/// reproducibility and reasonable statistical spread. The state is a single
/// 32-bit accumulator; the same seed always yields the same draw sequence,
/// which makes every generated puzzle replayable from its seed alone.
///
/// Each draw advances the accumulator by a fixed odd constant and runs two
/// rounds of multiply/XOR mixing (all arithmetic mod 2^32), then maps the
/// mixed word into `[0, 1)`.
///
/// # Examples
///
/// ```
/// use gridlock_generator::Mulberry32;
///
/// let mut a = Mulberry32::new(42);
/// let mut b = Mulberry32::new(42);
/// assert_eq!(a.next_f64(), b.next_f64());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Creates a stream seeded with `seed`.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Draws the next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }

    /// Draws a uniform index in `0..bound`.
    pub fn index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_precision_loss,
            clippy::cast_sign_loss
        )]
        let index = (self.next_f64() * bound as f64) as usize;
        index
    }

    /// Shuffles `items` in place with a Fisher–Yates pass driven by this
    /// stream.
    ///
    /// Consumes exactly `items.len() - 1` draws (none for empty or
    /// single-element slices), so shuffles of equal length keep seeded
    /// streams in lockstep.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Mulberry32::new(0xDEAD_BEEF);
        let mut b = Mulberry32::new(0xDEAD_BEEF);
        for _ in 0..1000 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn draws_stay_in_unit_interval() {
        let mut rng = Mulberry32::new(7);
        for _ in 0..10_000 {
            let value = rng.next_f64();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Mulberry32::new(1);
        let mut b = Mulberry32::new(2);
        let a_draws: Vec<_> = (0..16).map(|_| a.next_f64().to_bits()).collect();
        let b_draws: Vec<_> = (0..16).map(|_| b.next_f64().to_bits()).collect();
        assert_ne!(a_draws, b_draws);
    }

    #[test]
    fn index_respects_bound() {
        let mut rng = Mulberry32::new(99);
        for _ in 0..10_000 {
            assert!(rng.index(9) < 9);
        }
    }

    #[test]
    fn shuffle_is_a_deterministic_permutation() {
        let mut a = Mulberry32::new(42);
        let mut b = Mulberry32::new(42);

        let mut first = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        let mut second = first;
        a.shuffle(&mut first);
        b.shuffle(&mut second);
        assert_eq!(first, second);

        let mut sorted = first;
        sorted.sort_unstable();
        assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn shuffle_draw_count_is_len_minus_one() {
        let mut shuffling = Mulberry32::new(5);
        let mut counting = Mulberry32::new(5);

        let mut items = [0u8; 9];
        shuffling.shuffle(&mut items);
        for _ in 0..8 {
            let _ = counting.next_f64();
        }
        assert_eq!(shuffling, counting);

        let mut empty: [u8; 0] = [];
        let before = shuffling;
        shuffling.shuffle(&mut empty);
        assert_eq!(shuffling, before);
    }
}
