//! Random sources consumed by graph shuffling and the generators.
//!
//! The core only depends on [`RandomSource`]; [`SeededRandom`] is the
//! reproducible implementation used by the CLI and the tests. A single source
//! is owned by the caller and lent out by `&mut` for each operation.

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

/// Sequential source of uniform integers and permutations.
pub trait RandomSource {
    /// Returns an integer drawn uniformly from `[0, bound)`.
    ///
    /// A `bound` of zero yields `0`.
    fn uniform(&mut self, bound: usize) -> usize;

    /// Returns an integer drawn uniformly from `[low, high]`.
    ///
    /// Returns `low` when `high < low`.
    fn range_inclusive(&mut self, low: i64, high: i64) -> i64;

    /// Returns `true` with probability one half.
    fn coin_flip(&mut self) -> bool {
        self.uniform(2) == 1
    }

    /// Returns a uniformly random permutation of `0..n`.
    fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..n).collect();
        for position in (1..n).rev() {
            let other = self.uniform(position + 1);
            order.swap(position, other);
        }
        order
    }
}

/// [`RandomSource`] backed by a seedable [`SmallRng`].
///
/// # Examples
/// ```
/// use gauntlet_core::{RandomSource, SeededRandom};
///
/// let mut left = SeededRandom::new(42);
/// let mut right = SeededRandom::new(42);
/// assert_eq!(left.permutation(8), right.permutation(8));
/// assert!(left.uniform(10) < 10);
/// ```
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: SmallRng,
}

impl SeededRandom {
    /// Creates a source whose sequence is fully determined by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Creates a source seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }

    fn range_inclusive(&mut self, low: i64, high: i64) -> i64 {
        if high < low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }

    fn coin_flip(&mut self) -> bool {
        self.rng.r#gen()
    }

    fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(&mut self.rng);
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    struct Counter(usize);

    impl RandomSource for Counter {
        fn uniform(&mut self, bound: usize) -> usize {
            self.0 += 1;
            if bound == 0 { 0 } else { self.0 % bound }
        }

        fn range_inclusive(&mut self, low: i64, _high: i64) -> i64 {
            low
        }
    }

    fn assert_permutation(order: &[usize]) {
        let mut sorted = order.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..order.len()).collect::<Vec<_>>());
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(17)]
    fn permutations_cover_every_index(#[case] n: usize) {
        assert_permutation(&SeededRandom::new(3).permutation(n));
        assert_permutation(&Counter(0).permutation(n));
    }

    #[test]
    fn zero_bound_yields_zero() {
        assert_eq!(SeededRandom::new(1).uniform(0), 0);
    }

    #[test]
    fn inclusive_range_stays_in_bounds() {
        let mut rng = SeededRandom::new(9);
        for _ in 0..64 {
            let value = rng.range_inclusive(-3, 3);
            assert!((-3..=3).contains(&value));
        }
        assert_eq!(rng.range_inclusive(5, 1), 5);
    }
}
