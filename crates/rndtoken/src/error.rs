//! Error types for token generator construction.

use thiserror::Error;

/// Errors that can occur while constructing a token generator.
///
/// Steady-state generation is infallible; the only failure mode is the
/// one-time seeding from the operating system entropy source. There is no
/// degraded mode: seeding from a predictable source (such as wall-clock
/// time) would defeat the purpose of the generator, so the failure is
/// surfaced instead of worked around.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The operating system entropy source could not supply seed bytes.
    #[error("operating system entropy source unavailable: {0}")]
    EntropyUnavailable(#[source] rand::Error),
}
