//! Thread-safe 64-bit word source.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// A mutex-guarded wrapper around a seeded 64-bit pseudo-random generator.
///
/// Hands out one uniformly distributed 64-bit word per call, safe for any
/// number of concurrent callers. Every access mutates the underlying
/// generator (drawing advances its state), so access is fully serialized:
/// no two callers ever observe overlapping or duplicated draws.
///
/// The lock is held only across a single draw — never across any caller
/// logic — to keep contention minimal.
///
/// # Examples
///
/// ```rust
/// use rndtoken::WordSource;
///
/// let source = WordSource::from_seed(42);
/// let a = source.next_word();
/// let b = source.next_word();
/// // Consecutive draws advance the stream.
/// assert_ne!(a, b);
/// ```
#[derive(Debug)]
pub struct WordSource {
    inner: Mutex<StdRng>,
    seed: u64,
}

impl WordSource {
    /// Creates a word source seeded with the given value.
    ///
    /// The same seed always produces the same word stream, which is what
    /// makes deterministic tests possible.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: Mutex::new(StdRng::seed_from_u64(seed)),
            seed,
        }
    }

    /// Returns the seed this source was created with.
    ///
    /// Useful when logging reproducibility information.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws the next 64-bit word from the stream.
    ///
    /// Advances the shared generator by exactly one step. Never fails once
    /// the source is constructed. The critical section cannot panic, so a
    /// poisoned lock still holds a valid generator and is recovered rather
    /// than propagated.
    #[inline]
    pub fn next_word(&self) -> u64 {
        let mut rng = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        rng.next_u64()
    }
}
