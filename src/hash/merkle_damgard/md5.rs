#![allow(clippy::unreadable_literal)]
#![allow(clippy::zero_prefixed_literal)]

use std::mem;

use crate::array_util::{words_from_le_bytes, words_to_le_bytes, wrapping_add_assign};
use crate::hash::merkle_damgard::padding::{BLOCK_LENGTH_BYTES, LengthEncoding};
use crate::hash::merkle_damgard::MerkleDamgardHash;
use crate::hash::HashValue;

/// the hash block length in 32 bit integers
const BLOCK_LENGTH_DOUBLE_WORDS: usize = BLOCK_LENGTH_BYTES / 4;

/// The initial state for any MD5 hash. From here, all blocks are applied.
pub const INITIAL: MD5Hash = MD5Hash([0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476]);

/// An MD5 hash state. It consists out of 4 double-words, conventionally named `a`, `b`, `c` and `d`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MD5Hash(pub [u32; 4]);

/// bits rotated per round. Each phase of 16 rounds cycles through its own row of four amounts.
static ROUND_ROTATION_COUNT: [u32; 16] = [
    07, 12, 17, 22,
    05, 09, 14, 20,
    04, 11, 16, 23,
    06, 10, 15, 21];

/// binary floored values of |sin(i + 1)| * 2^32 where i is the array index
static MAGIC_SINUS_SCALARS: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee,
    0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be,
    0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
    0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
    0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
    0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05,
    0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039,
    0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
    0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391];

/// compute one block of MD5
///
/// # Parameters
/// ``state`` the hash state, updated in place
/// ``block`` 16 words of input data, already decoded as little endian integers
pub fn compress(state: &mut [u32; 4], block: &[u32; BLOCK_LENGTH_DOUBLE_WORDS]) {
    let [mut a, mut b, mut c, mut d] = *state;

    for i in 0..64 {
        let (scrambled_data, message_index) = match i {
            0..=15 => ((b & c) | (!b & d), i),
            16..=31 => ((b & d) | (c & !d), (5 * i + 1) % BLOCK_LENGTH_DOUBLE_WORDS),
            32..=47 => (b ^ c ^ d, (3 * i + 5) % BLOCK_LENGTH_DOUBLE_WORDS),
            48..=63 => (c ^ (b | !d), (7 * i) % BLOCK_LENGTH_DOUBLE_WORDS),
            _ => unreachable!()
        };

        let rotation = ROUND_ROTATION_COUNT[(i / 16) * 4 + i % 4];
        let mixed = a.wrapping_add(scrambled_data)
            .wrapping_add(MAGIC_SINUS_SCALARS[i])
            .wrapping_add(block[message_index]);

        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(mixed.rotate_left(rotation));
    }

    wrapping_add_assign(state, &[a, b, c, d]);
}

impl MerkleDamgardHash for MD5Hash {
    const INITIAL: Self = INITIAL;

    const LENGTH_ENCODING: LengthEncoding = LengthEncoding::LittleEndian;

    fn round_function(&mut self, input: &[u8]) {
        assert_eq!(input.len(), BLOCK_LENGTH_BYTES);

        let mut input_block = [0u32; BLOCK_LENGTH_DOUBLE_WORDS];
        words_from_le_bytes(&mut input_block, input);

        compress(&mut self.0, &input_block);
    }
}

impl HashValue for MD5Hash {
    const OUTPUT_SIZE: usize = mem::size_of::<MD5Hash>();

    /// Generates the canonical 16 byte digest: every state word in little endian byte order.
    fn raw(&self) -> Vec<u8> {
        words_to_le_bytes(&self.0)
    }
}
