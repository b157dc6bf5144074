//! # rndtoken: fast, concurrency-safe pseudo-random token generator
//!
//! Produces byte sequences drawn from a fixed 64-character alphabet
//! (digits, upper/lower case letters, dash and underscore), suitable as
//! opaque identifiers — map keys, request IDs, short tokens — where
//! statistical randomness is enough. A raw integer accessor shares the
//! same underlying stream.
//!
//! ## Design
//!
//! - One mutex-guarded `StdRng` hands out 64-bit words; every other piece
//!   is stateless on top of it.
//! - Each word is unpacked into ten 6-bit alphabet indices (the top 4 bits
//!   are discarded), so a fill takes roughly one lock acquisition per ten
//!   output bytes instead of one per byte.
//! - The alphabet is shuffled once at construction with a separate seed
//!   drawn from OS entropy; the mapping only has to be a fixed bijection,
//!   the shuffle is defense-in-depth.
//! - Tokens can be asked to never start with a dash; the replacement is
//!   drawn with a bounded two-tier scheme that does not bias the other
//!   positions.
//!
//! ## Not for secrets
//!
//! Outputs are statistically uniform but come from a deterministic,
//! non-cryptographic stream. Never use them where an adversary must not
//! predict outputs or recover generator state; reach for an OS-backed
//! CSPRNG instead.
//!
//! ## Usage Example
//!
//! ```rust
//! // Package-level API backed by a process-wide generator seeded from
//! // OS entropy on first use.
//! let key = rndtoken::generate_string(48, false);
//! assert_eq!(key.len(), 48);
//! assert!(!key.starts_with('-'));
//!
//! let n: i64 = rndtoken::random_int();
//! # let _ = n;
//!
//! // Explicitly constructed generator with deterministic seeds for
//! // reproducible tests.
//! use rndtoken::TokenGenerator;
//! let generator = TokenGenerator::from_seeds(1, 2);
//! assert_eq!(generator.generate(16, true).len(), 16);
//! ```

#![warn(missing_docs)]

mod alphabet;
mod error;
mod generator;
mod global;
mod source;

pub use alphabet::{Alphabet, SPECIAL};
pub use error::TokenError;
pub use generator::TokenGenerator;
pub use global::{fill, generate, generate_string, global, random_int};
pub use source::WordSource;
