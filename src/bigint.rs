//! The minimal arbitrary-precision integer surface the SRP-6 state machine needs:
//! construction from hex/decimal/small-integer, `add`/`sub`/`mul`, `modpow`, equality,
//! strict-greater comparison, and hex serialization. Built on [`num_bigint`] rather than
//! hand-rolled modular exponentiation — the Keccak permutation is the primitive this
//! crate reimplements from scratch, not general-purpose bignum math.

use std::fmt;

use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};

use crate::error::SrpError;

/// A signed arbitrary-precision integer, exposing only the operations SRP-6 needs.
#[derive(Clone, PartialEq, Eq)]
pub struct Bigint(BigInt);

impl Bigint {
    /// Parses an unsigned hexadecimal literal (no `0x` prefix, case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Self, SrpError> {
        let bytes = hex::decode(Self::pad_even(hex)).map_err(|_| {
            SrpError::InvalidConfiguration("modulus is not valid hexadecimal")
        })?;
        Ok(Bigint(BigInt::from_bytes_be(Sign::Plus, &bytes)))
    }

    /// Parses a signed decimal literal.
    pub fn from_dec(dec: &str) -> Result<Self, SrpError> {
        Ok(Bigint(dec.parse::<BigInt>()?))
    }

    /// Wraps a small non-negative integer.
    pub fn from_u64(n: u64) -> Self {
        Bigint(BigInt::from(n))
    }

    /// Returns zero.
    pub fn zero() -> Self {
        Bigint(BigInt::zero())
    }

    /// Interprets `bytes` as an unsigned big-endian magnitude.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        Bigint(BigInt::from_bytes_be(Sign::Plus, bytes))
    }

    /// `self + other`.
    pub fn add(&self, other: &Bigint) -> Bigint {
        Bigint(&self.0 + &other.0)
    }

    /// `self - other`, signed; the result may be negative.
    pub fn sub(&self, other: &Bigint) -> Bigint {
        Bigint(&self.0 - &other.0)
    }

    /// `self * other`.
    pub fn mul(&self, other: &Bigint) -> Bigint {
        Bigint(&self.0 * &other.0)
    }

    /// `self^exp mod modulus`, with `exp >= 0` and `modulus > 0`. A negative `self` is
    /// reduced into `[0, modulus)` before exponentiation, matching the client's
    /// `B - k*g^x` step, which can go negative as an intermediate value.
    pub fn modpow(&self, exp: &Bigint, modulus: &Bigint) -> Bigint {
        debug_assert!(!exp.0.is_negative(), "exponent must be non-negative");
        debug_assert!(modulus.0.is_positive(), "modulus must be positive");
        Bigint(self.reduce(modulus).0.modpow(&exp.0, &modulus.0))
    }

    /// Reduces `self` into `[0, modulus)`, regardless of sign or magnitude.
    pub fn reduce(&self, modulus: &Bigint) -> Bigint {
        Bigint((&self.0 % &modulus.0 + &modulus.0) % &modulus.0)
    }

    /// `self > other`.
    pub fn gt(&self, other: &Bigint) -> bool {
        self.0 > other.0
    }

    /// Whether this value is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    /// Whether this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Lowercase hex, no `0x` prefix, zero-extended to a whole number of bytes using
    /// the value's big-endian two's-complement magnitude. Negative values are rejected
    /// by the caller before reaching this method; SRP never serializes one.
    pub fn to_hex(&self) -> String {
        let (_, bytes) = self.0.to_bytes_be();
        hex::encode(bytes)
    }

    /// The big-endian byte representation of this value's magnitude, as produced by
    /// the underlying bigint library -- used for `H_SRP`'s `be_bytes(salt)` input.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.0.to_bytes_be().1
    }

    fn pad_even(hex: &str) -> String {
        if hex.len().is_multiple_of(2) {
            hex.to_string()
        } else {
            format!("0{hex}")
        }
    }
}

impl fmt::Debug for Bigint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bigint({})", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn hex_round_trip() {
        for hex in ["0", "1", "ff", "115b8b69", "20e17698"] {
            let n = Bigint::from_hex(hex).unwrap();
            let n2 = Bigint::from_hex(&n.to_hex()).unwrap();
            assert_eq!(n, n2);
        }
    }

    #[test]
    fn arithmetic() {
        let a = Bigint::from_u64(7);
        let b = Bigint::from_u64(3);
        assert_eq!(a.add(&b), Bigint::from_u64(10));
        assert_eq!(a.sub(&b), Bigint::from_u64(4));
        assert_eq!(b.sub(&a), Bigint::from_dec("-4").unwrap());
        assert_eq!(a.mul(&b), Bigint::from_u64(21));
    }

    #[test]
    fn modpow_matches_known_values() {
        let base = Bigint::from_u64(4);
        let exp = Bigint::from_u64(13);
        let modulus = Bigint::from_u64(497);
        assert_eq!(base.modpow(&exp, &modulus), Bigint::from_u64(445));
    }

    #[test]
    fn modpow_reduces_negative_base() {
        let base = Bigint::from_dec("-3").unwrap();
        let modulus = Bigint::from_u64(11);
        let exp = Bigint::from_u64(1);
        // -3 mod 11 == 8
        assert_eq!(base.modpow(&exp, &modulus), Bigint::from_u64(8));
    }

    #[test]
    fn gt_and_zero() {
        assert!(Bigint::from_u64(2).gt(&Bigint::from_u64(1)));
        assert!(!Bigint::from_u64(1).gt(&Bigint::from_u64(2)));
        assert!(Bigint::zero().is_zero());
        assert!(!Bigint::from_u64(1).is_zero());
    }

    proptest! {
        #[test]
        fn hex_round_trip_arbitrary(n in 0u64..u64::MAX) {
            let b = Bigint::from_u64(n);
            let reparsed = Bigint::from_hex(&b.to_hex()).unwrap();
            prop_assert_eq!(b, reparsed);
        }

        #[test]
        fn add_sub_are_inverse(a in 0u64..1_000_000, b in 0u64..1_000_000) {
            let a = Bigint::from_u64(a);
            let b = Bigint::from_u64(b);
            prop_assert_eq!(a.add(&b).sub(&b), a);
        }
    }
}
