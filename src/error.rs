//! Error types for participant construction and key derivation.
//!
//! The digest in [`crate::keccak`] has no user-visible error surface: it is a pure
//! function of its input. Everything fallible in this crate happens in
//! [`crate::bigint`] parsing or [`crate::srp`] construction, which is why every variant
//! here names one of those two modules.

use thiserror::Error;

/// The three error kinds spec'd for the SRP-6 core: malformed input, a broken internal
/// invariant, and exhaustion of the randomness source.
#[derive(Debug, Error)]
pub enum SrpError {
    /// A hexadecimal or decimal integer literal could not be parsed.
    #[error("malformed integer literal: {0}")]
    MalformedInteger(#[from] num_bigint::ParseBigIntError),

    /// A configured bit-length, generator, or modulus was non-positive after
    /// construction. Input errors are reported at construction time, never during key
    /// derivation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// The randomness source could not satisfy a request (e.g. it was unable to fill
    /// the requested number of bytes).
    #[error("randomness source failed: {0}")]
    RandomnessSource(#[from] rand::Error),
}
