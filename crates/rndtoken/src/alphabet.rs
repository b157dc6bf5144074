//! The 64-symbol output alphabet.
//!
//! Output bytes are drawn from a fixed set of 64 distinct ASCII symbols:
//! digits, upper and lower case letters, dash and underscore. The set size
//! is exactly 2^6, so a 6-bit value indexes any entry losslessly and no
//! rejection sampling is needed.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Base symbol sequence before shuffling.
pub(crate) const BASE_SYMBOLS: &[u8; 64] =
    b"1234567890ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

/// The symbol that may be disallowed in the leading output position.
pub const SPECIAL: u8 = b'-';

/// An immutable, shuffled 64-symbol alphabet.
///
/// Built once per generator by applying a seeded uniform shuffle to
/// [`BASE_SYMBOLS`]. The shuffle is defense-in-depth: correctness only
/// requires a fixed bijection from 6-bit indices to symbols, not any
/// particular ordering.
///
/// # Examples
///
/// ```rust
/// use rndtoken::Alphabet;
///
/// let alphabet = Alphabet::shuffled(42);
/// // Any 6-bit index maps to a symbol; indices wrap at 64.
/// assert_eq!(alphabet.symbol(0), alphabet.symbol(64));
/// ```
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: [u8; 64],
    seed: u64,
}

impl Alphabet {
    /// Creates an alphabet by shuffling the base sequence with a throwaway
    /// generator seeded from `seed`.
    pub fn shuffled(seed: u64) -> Self {
        let mut symbols = *BASE_SYMBOLS;
        let mut rng = StdRng::seed_from_u64(seed);
        symbols.shuffle(&mut rng);
        Self { symbols, seed }
    }

    /// Returns the seed the shuffle was driven by.
    ///
    /// Useful when logging reproducibility information.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the symbol at the given index.
    ///
    /// Only the low 6 bits of `index` are used, so any `u64` is a valid
    /// argument and indexing cannot panic.
    #[inline]
    pub fn symbol(&self, index: u64) -> u8 {
        self.symbols[(index & 0x3f) as usize]
    }

    /// Returns true if `byte` is one of the 64 alphabet symbols.
    pub fn contains(&self, byte: u8) -> bool {
        self.symbols.contains(&byte)
    }
}
