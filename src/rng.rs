//! Deterministic random number generation for reproducible games.
//!
//! Same seed produces the same shuffle, so an entire game unfolds
//! identically across runs — required for tests and replays.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seedable deterministic RNG backing the deck shuffle.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_shuffle() {
        let mut a = GameRng::new(0);
        let mut b = GameRng::new(0);

        let mut xs: Vec<u8> = (0..52).collect();
        let mut ys: Vec<u8> = (0..52).collect();
        a.shuffle(&mut xs);
        b.shuffle(&mut ys);

        assert_eq!(xs, ys);
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = GameRng::new(1);
        let mut b = GameRng::new(2);

        let mut xs: Vec<u8> = (0..52).collect();
        let mut ys: Vec<u8> = (0..52).collect();
        a.shuffle(&mut xs);
        b.shuffle(&mut ys);

        assert_ne!(xs, ys);
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut rng = GameRng::new(7);
        let mut xs: Vec<u8> = (0..52).collect();
        rng.shuffle(&mut xs);

        let mut sorted = xs.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..52).collect::<Vec<u8>>());
    }
}
