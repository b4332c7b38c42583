//! Injectable randomness for secret generation and length sampling.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

/// Small seeded PRNG behind every sampling decision in a session.
///
/// Tests construct it with a fixed seed to pin exact secrets; interactive
/// callers use [`ChanceSource::from_entropy`].
#[derive(Debug)]
pub struct ChanceSource {
    rng: Box<ChaCha8Rng>,
}

impl ChanceSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Box::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Box::new(ChaCha8Rng::from_entropy()),
        }
    }

    /// Uniform pick from a non-empty slice.
    pub(crate) fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        assert!(!items.is_empty(), "cannot pick from an empty slice");
        &items[self.rng.gen_range(0..items.len())]
    }

    /// Uniform sample in `min..=max`.
    pub(crate) fn sample_len(&mut self, min: usize, max: usize) -> usize {
        debug_assert!(min <= max);
        self.rng.gen_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_picks() {
        let items = ["a", "b", "c", "d", "e"];
        let mut c1 = ChanceSource::seeded(42);
        let mut c2 = ChanceSource::seeded(42);
        for _ in 0..100 {
            assert_eq!(c1.pick(&items), c2.pick(&items));
        }
    }

    #[test]
    fn sample_len_stays_in_bounds() {
        let mut chance = ChanceSource::seeded(7);
        for _ in 0..200 {
            let len = chance.sample_len(3, 6);
            assert!((3..=6).contains(&len));
        }
    }

    #[test]
    fn pick_from_singleton() {
        let mut chance = ChanceSource::seeded(0);
        assert_eq!(*chance.pick(&[9u8]), 9);
    }
}
