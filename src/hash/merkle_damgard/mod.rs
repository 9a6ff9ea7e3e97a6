use crate::error::Result;
use crate::hash::{HashFunction, HashValue};

use self::padding::{pad, LengthEncoding, PaddedBuffer, BLOCK_LENGTH_BYTES};

pub mod md5;
pub mod padding;
pub mod sha256;

/// A hash generated from a merkle damgård construction: the message is padded to whole blocks and a compression
/// function folds every block into a fixed-size state, in message order. Hashes that implement that trait get their
/// digest function implemented automatically by this crate
pub trait MerkleDamgardHash: Sized + Copy {
    /// The state before any block has been compressed.
    const INITIAL: Self;

    /// Byte order of the message length appended during padding.
    const LENGTH_ENCODING: LengthEncoding;

    /// Compress one block of exactly ``BLOCK_LENGTH_BYTES`` bytes into this state.
    fn round_function(&mut self, input_block: &[u8]);

    /// Fold all blocks of ``padded`` into the initial state. Blocks depend on their predecessor's output, so this is
    /// strictly sequential.
    fn fold_blocks(padded: &PaddedBuffer) -> Self {
        let mut hash_state = Self::INITIAL;

        for block in padded.blocks() {
            hash_state.round_function(block);
        }

        hash_state
    }
}

impl<H> HashFunction for H
    where H: MerkleDamgardHash + HashValue {
    const BLOCK_SIZE: usize = BLOCK_LENGTH_BYTES;

    fn digest_message(input: &[u8]) -> Result<Self> {
        let padded = pad(input, Self::LENGTH_ENCODING)?;

        log::debug!("digesting {} bytes in {} blocks", input.len(), padded.block_count());

        Ok(Self::fold_blocks(&padded))
    }
}
