//! Process-wide generator and package-level convenience functions.
//!
//! Most callers want one shared generator for the whole process. The
//! functions in this module delegate to a lazily constructed singleton
//! seeded from operating system entropy on first use.
//!
//! Seeding failure aborts via panic: there is no safe degraded mode, and a
//! silent fallback to a predictable seed would be worse than stopping.
//! Callers who prefer to handle startup failure as a value should build
//! their own [`TokenGenerator::from_entropy`] instead.

use std::sync::OnceLock;

use crate::generator::TokenGenerator;

static GLOBAL: OnceLock<TokenGenerator> = OnceLock::new();

/// Returns the process-wide generator, constructing it on first use.
///
/// # Panics
///
/// Panics if the operating system entropy source is unavailable during the
/// one-time construction.
pub fn global() -> &'static TokenGenerator {
    GLOBAL.get_or_init(|| {
        TokenGenerator::from_entropy()
            .unwrap_or_else(|err| panic!("cannot seed process-wide token generator: {err}"))
    })
}

/// Fills `buf` with random alphabet symbols from the process-wide generator.
///
/// See [`TokenGenerator::fill`] for the algorithm and the meaning of
/// `allow_leading_special`.
pub fn fill(buf: &mut [u8], allow_leading_special: bool) {
    global().fill(buf, allow_leading_special);
}

/// Returns `len` random alphabet symbols from the process-wide generator.
///
/// # Examples
///
/// ```rust
/// let key = rndtoken::generate(48, false);
/// assert_eq!(key.len(), 48);
/// assert_ne!(key[0], b'-');
/// ```
pub fn generate(len: usize, allow_leading_special: bool) -> Vec<u8> {
    global().generate(len, allow_leading_special)
}

/// Returns `len` random alphabet symbols as a `String`.
pub fn generate_string(len: usize, allow_leading_special: bool) -> String {
    global().generate_string(len, allow_leading_special)
}

/// Returns a uniformly distributed signed 64-bit integer from the
/// process-wide generator's word stream.
pub fn random_int() -> i64 {
    global().random_int()
}
