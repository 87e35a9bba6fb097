//! The Keccak-f\[1600\] permutation and the SHA3-256 sponge built on top of it.
//!
//! Implemented from first principles against FIPS 202: no platform hash, no external
//! permutation crate. The state is a 5x5 matrix of 64-bit lanes flattened to a 25-element
//! array with `lanes[5*y + x]` giving `S[y][x]`, matching both the absorb lane mapping and
//! the squeeze traversal order, so neither step needs an index permutation of its own.

use byteorder::{ByteOrder, LittleEndian};

use crate::macros::bytes_to_lanes;

/// Rate of the SHA3-256 sponge, in bytes (1088-bit rate, 512-bit capacity).
const RATE: usize = 136;

/// Number of 64-bit lanes absorbed from each rate-sized block.
const RATE_LANES: usize = RATE / 8;

const RC: [u64; 24] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rotation offsets for the combined rho+pi step, indexed by `5*y + x`.
const RHO: [u32; 25] = [
    0, 1, 62, 28, 27, //
    36, 44, 6, 55, 20, //
    3, 10, 43, 25, 39, //
    41, 45, 15, 21, 8, //
    18, 2, 61, 56, 14,
];

/// Runs all 24 rounds of Keccak-f\[1600\] over a 25-lane state in place.
pub fn keccak_f1600(lanes: &mut [u64; 25]) {
    for round in RC {
        theta(lanes);
        rho_pi(lanes);
        chi(lanes);
        lanes[0] ^= round;
    }
}

#[inline]
fn theta(lanes: &mut [u64; 25]) {
    let mut c = [0u64; 5];
    for (x, cx) in c.iter_mut().enumerate() {
        *cx = lanes[x] ^ lanes[x + 5] ^ lanes[x + 10] ^ lanes[x + 15] ^ lanes[x + 20];
    }
    let mut d = [0u64; 5];
    for x in 0..5 {
        d[x] = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
    }
    for y in 0..5 {
        for x in 0..5 {
            lanes[y * 5 + x] ^= d[x];
        }
    }
}

#[inline]
fn rho_pi(lanes: &mut [u64; 25]) {
    let mut new_lanes = [0u64; 25];
    for y in 0..5 {
        for x in 0..5 {
            let dest = ((2 * x + 3 * y) % 5) * 5 + y;
            new_lanes[dest] = lanes[y * 5 + x].rotate_left(RHO[y * 5 + x]);
        }
    }
    *lanes = new_lanes;
}

#[inline]
fn chi(lanes: &mut [u64; 25]) {
    let mut new_lanes = [0u64; 25];
    for y in 0..5 {
        let row = y * 5;
        for x in 0..5 {
            new_lanes[row + x] =
                lanes[row + x] ^ ((!lanes[row + (x + 1) % 5]) & lanes[row + (x + 2) % 5]);
        }
    }
    *lanes = new_lanes;
}

/// Pads `input` to a non-zero multiple of the rate using multi-rate padding
/// (`pad10*1`): domain separator `0x06` immediately after the message, zeros, and the
/// final byte's high bit set. When exactly one byte of padding is needed the two merge
/// into `0x86`.
fn pad(input: &[u8]) -> Vec<u8> {
    let pad_len = RATE - (input.len() % RATE);
    let mut padded = vec![0u8; input.len() + pad_len];
    padded[..input.len()].copy_from_slice(input);
    padded[input.len()] ^= 0x06;
    *padded.last_mut().unwrap() |= 0x80;
    padded
}

/// Computes the SHA3-256 digest of `input`. Pure and infallible: there is no ill-formed
/// byte sequence, and the only physical failure mode (allocation failure) is not
/// represented in the return type.
pub fn sha3_256(input: &[u8]) -> [u8; 32] {
    let padded = pad(input);
    let mut lanes = [0u64; 25];

    for block in padded.chunks_exact(RATE) {
        let mut block_lanes = [0u64; RATE_LANES];
        bytes_to_lanes!(u64, block, block_lanes);
        for (lane, block_lane) in lanes.iter_mut().zip(block_lanes.iter()) {
            *lane ^= block_lane;
        }
        keccak_f1600(&mut lanes);
    }

    let mut out = [0u8; 32];
    let squeeze_lanes = &lanes[..4];
    LittleEndian::write_u64_into(squeeze_lanes, &mut out);
    out
}

/// Lowercase, unseparated hex encoding of a digest (or any byte slice).
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
