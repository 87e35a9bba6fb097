//! SRP-6 password-authenticated key agreement over a from-scratch SHA3-256 digest.
//!
//! Two building blocks compose the crate: [`keccak`], a Keccak-f\[1600\] permutation and
//! SHA3-256 sponge implemented without recourse to any platform hash; and [`srp`], the
//! SRP-6 participant state machine that uses it for identity hashing. [`bigint`] supplies
//! the narrow modular-arithmetic surface SRP needs, and [`error`] collects the failure
//! modes of participant construction and key derivation.
//!
//! This crate makes no constant-time guarantees; it is a correctness specification, not
//! a side-channel-hardened implementation. See [`srp::Participant`] for the key-agreement
//! entry points.

mod macros;

pub mod bigint;
pub mod config;
pub mod error;
pub mod keccak;
pub mod srp;

pub use bigint::Bigint;
pub use config::SrpParams;
pub use error::SrpError;
pub use srp::Participant;
