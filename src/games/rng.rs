//=========================================================================
// Game RNG
//=========================================================================
//
// Seedable randomness for entity placement and part ordering.
//
// A fixed seed reproduces the same layout across runs; without one the
// generator is seeded from OS entropy.
//
//=========================================================================

//=== External Dependencies ===============================================

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

//=== GameRng =============================================================

/// ChaCha8-backed generator owned by a game controller.
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Deterministic generator for `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uses `seed` when given, OS entropy otherwise.
    #[must_use]
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self {
                inner: ChaCha8Rng::from_entropy(),
            },
        }
    }

    /// Picks one element uniformly; `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Shuffles `slice` in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
