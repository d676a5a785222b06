//! Injectable randomness for agent decisions.
//!
//! The agent only ever needs uniform picks from short lists, so the seam is a
//! single method. Production code uses [`GameRng`]; tests script the picks.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform random choices.
pub trait RandomSource {
    /// Returns an index uniformly distributed in `[0, len)`.
    ///
    /// Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Chooses an element uniformly, or `None` for an empty slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            None
        } else {
            items.get(self.pick_index(items.len()))
        }
    }
}

/// Deterministic RNG backed by ChaCha8.
///
/// Same seed, same sequence of picks.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Creates an RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().r#gen())
    }

    /// The seed this RNG started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_picks() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        let picks_a: Vec<_> = (0..20).map(|_| a.pick_index(9)).collect();
        let picks_b: Vec<_> = (0..20).map(|_| b.pick_index(9)).collect();
        assert_eq!(picks_a, picks_b);
        assert!(picks_a.iter().all(|&i| i < 9));
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(7);
        let empty: [u8; 0] = [];
        assert_eq!(rng.choose(&empty), None);
        assert_eq!(rng.choose(&[5]), Some(&5));
        assert_eq!(rng.seed(), 7);
    }
}
