#![allow(clippy::unreadable_literal)]

use std::mem;

use crate::array_util::{words_from_be_bytes, words_to_be_bytes, wrapping_add_assign};
use crate::hash::merkle_damgard::padding::{BLOCK_LENGTH_BYTES, LengthEncoding};
use crate::hash::merkle_damgard::MerkleDamgardHash;
use crate::hash::HashValue;

const BLOCK_LENGTH_DOUBLE_WORDS: usize = BLOCK_LENGTH_BYTES / 4;

const ROUND_COUNT: usize = 64;

/// The initial state for any SHA256 hash: the first 32 bits of the fractional parts of the square roots of the first
/// 8 primes. From here, all blocks are applied.
pub const INITIAL: SHA256Hash = SHA256Hash([
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
]);

/// A SHA256 hash state. It consists out of 8 double-words, named `a` to `h` during compression.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SHA256Hash(pub [u32; 8]);

/// first 32 bits of the fractional parts of the cube roots of the first 64 primes
static ROUND_CONSTANTS: [u32; ROUND_COUNT] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

#[inline]
fn choice(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ (!e & g)
}

#[inline]
fn majority(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

#[inline]
fn upper_sigma_0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline]
fn upper_sigma_1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline]
fn lower_sigma_0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline]
fn lower_sigma_1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Expand the 16 block words into the 64 word message schedule.
fn message_schedule(block: &[u32; BLOCK_LENGTH_DOUBLE_WORDS]) -> [u32; ROUND_COUNT] {
    let mut schedule = [0_u32; ROUND_COUNT];
    schedule[..BLOCK_LENGTH_DOUBLE_WORDS].copy_from_slice(block);

    for i in BLOCK_LENGTH_DOUBLE_WORDS..ROUND_COUNT {
        schedule[i] = schedule[i - 16]
            .wrapping_add(lower_sigma_0(schedule[i - 15]))
            .wrapping_add(schedule[i - 7])
            .wrapping_add(lower_sigma_1(schedule[i - 2]));
    }

    schedule
}

/// compute one block of SHA256
///
/// # Parameters
/// ``state`` the hash state, updated in place
/// ``block`` 16 words of input data, already decoded as big endian integers
pub fn compress(state: &mut [u32; 8], block: &[u32; BLOCK_LENGTH_DOUBLE_WORDS]) {
    let schedule = message_schedule(block);
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for (round_constant, data_word) in ROUND_CONSTANTS.iter().zip(schedule.iter()) {
        let temp1 = h
            .wrapping_add(upper_sigma_1(e))
            .wrapping_add(choice(e, f, g))
            .wrapping_add(*round_constant)
            .wrapping_add(*data_word);
        let temp2 = upper_sigma_0(a).wrapping_add(majority(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(temp1);
        d = c;
        c = b;
        b = a;
        a = temp1.wrapping_add(temp2);
    }

    wrapping_add_assign(state, &[a, b, c, d, e, f, g, h]);
}

impl MerkleDamgardHash for SHA256Hash {
    const INITIAL: Self = INITIAL;

    const LENGTH_ENCODING: LengthEncoding = LengthEncoding::BigEndian;

    fn round_function(&mut self, input: &[u8]) {
        assert_eq!(input.len(), BLOCK_LENGTH_BYTES);

        let mut input_block = [0u32; BLOCK_LENGTH_DOUBLE_WORDS];
        words_from_be_bytes(&mut input_block, input);

        compress(&mut self.0, &input_block);
    }
}

impl HashValue for SHA256Hash {
    const OUTPUT_SIZE: usize = mem::size_of::<SHA256Hash>();

    /// Generates the canonical 32 byte digest: every state word in big endian byte order.
    fn raw(&self) -> Vec<u8> {
        words_to_be_bytes(&self.0)
    }
}
