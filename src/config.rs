//! The tunable SRP parameters enumerated in the core's external interface: bit-lengths
//! for the salt, scrambler, and private keys, plus the generator `g`. The multiplier
//! `k` is not configurable -- it is fixed at 3, per this design's SRP-6 (not 6a) scope.
//!
//! There is no environment-variable or file-based configuration at the core; callers
//! construct a [`SrpParams`] value directly or use one of the two named presets.

/// Fixed SRP-6 multiplier. SRP-6a's alternate multiplier derivation (`k = H(N, g)`) is
/// out of scope for this crate.
pub const MULTIPLIER: u64 = 3;

/// Tunable parameters shared by both participants in an SRP-6 exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SrpParams {
    /// Bit-length of the randomly drawn salt.
    pub salt_bits: u32,
    /// Bit-length of the randomly drawn scrambler.
    pub scrambler_bits: u32,
    /// Bit-length of the server's private key `b`.
    pub server_private_bits: u32,
    /// Bit-length of the client's private key `a`.
    pub client_private_bits: u32,
    /// Small integer generator.
    pub g: u64,
}

impl SrpParams {
    /// The reference's conservative preset: 256-bit salt, 128-bit scrambler, 256-bit
    /// server private key, 128-bit client private key, `g = 3`.
    pub const CONSERVATIVE: SrpParams = SrpParams {
        salt_bits: 256,
        scrambler_bits: 128,
        server_private_bits: 256,
        client_private_bits: 128,
        g: 3,
    };

    /// The reference prime's preset: 512-bit salt, 256-bit scrambler, 256-bit server
    /// private key, 128-bit client private key, `g = 10`.
    pub const EXTENDED: SrpParams = SrpParams {
        salt_bits: 512,
        scrambler_bits: 256,
        server_private_bits: 256,
        client_private_bits: 128,
        g: 10,
    };
}

impl Default for SrpParams {
    fn default() -> Self {
        Self::CONSERVATIVE
    }
}
