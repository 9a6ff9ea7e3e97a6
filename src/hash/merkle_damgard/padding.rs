//! Merkle–Damgård message padding. A message is extended by a single 1-bit, as many 0-bits as needed and the
//! message length in bits, so that the result is a whole number of 512 bit blocks.

use std::mem::size_of;
use std::slice::ChunksExact;

use crate::error::{HashError, Result};

/// the hash block length in bytes
pub const BLOCK_LENGTH_BYTES: usize = 64;

/// the length of the trailing message length field in bytes
const LENGTH_FIELD_BYTES: usize = size_of::<u64>();

/// the byte appended directly after the message: a single 1-bit followed by seven 0-bits
const MARKER_BYTE: u8 = 0x80;

/// Byte order of the trailing 64 bit length field. This is fixed by the algorithm and never mixed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LengthEncoding {
    /// High word first, each word big endian (SHA-2 family)
    BigEndian,
    /// Low word first, each word little endian (MD5)
    LittleEndian,
}

impl LengthEncoding {
    fn encode(self, bit_length: u64) -> [u8; LENGTH_FIELD_BYTES] {
        match self {
            LengthEncoding::BigEndian => bit_length.to_be_bytes(),
            LengthEncoding::LittleEndian => bit_length.to_le_bytes(),
        }
    }

    fn decode(self, field: [u8; LENGTH_FIELD_BYTES]) -> u64 {
        match self {
            LengthEncoding::BigEndian => u64::from_be_bytes(field),
            LengthEncoding::LittleEndian => u64::from_le_bytes(field),
        }
    }
}

/// Shape of the padding for a message of a given length.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PaddingLayout {
    /// number of 512 bit blocks of the padded message
    pub block_count: usize,
    /// number of 0-bits between the 1-bit marker and the length field
    pub zero_fill_bits: usize,
}

impl PaddingLayout {
    /// Computes the minimal layout for a message of ``message_len`` bytes. The marker and the length field must both
    /// fit behind the message, which adds one extra block whenever the last message block has fewer than 9 free bytes.
    /// Returns ``None`` if the padded length is not representable as ``usize``.
    pub fn for_message(message_len: usize) -> Option<PaddingLayout> {
        let minimal_length = message_len.checked_add(1 + LENGTH_FIELD_BYTES)?;
        let mut block_count = minimal_length / BLOCK_LENGTH_BYTES;
        if minimal_length % BLOCK_LENGTH_BYTES != 0 {
            block_count += 1;
        }
        block_count.checked_mul(BLOCK_LENGTH_BYTES)?;

        let free_bytes = block_count * BLOCK_LENGTH_BYTES - message_len;
        let zero_fill_bits = (free_bytes - LENGTH_FIELD_BYTES) * 8 - 1;

        Some(PaddingLayout { block_count, zero_fill_bits })
    }

    /// Length of the padded buffer in bytes.
    pub fn padded_len(&self) -> usize {
        self.block_count * BLOCK_LENGTH_BYTES
    }
}

/// A message extended to a whole number of blocks. It is created by [`pad`] and lives for one digest computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedBuffer {
    bytes: Vec<u8>,
    encoding: LengthEncoding,
}

impl PaddedBuffer {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn block_count(&self) -> usize {
        self.bytes.len() / BLOCK_LENGTH_BYTES
    }

    /// Iterates the padded message in blocks of exactly ``BLOCK_LENGTH_BYTES`` bytes, in message order.
    pub fn blocks(&self) -> ChunksExact<'_, u8> {
        self.bytes.chunks_exact(BLOCK_LENGTH_BYTES)
    }

    /// Decodes the trailing length field with the encoding it was written in.
    pub fn encoded_bit_length(&self) -> u64 {
        let mut field = [0u8; LENGTH_FIELD_BYTES];
        field.copy_from_slice(&self.bytes[self.bytes.len() - LENGTH_FIELD_BYTES..]);
        self.encoding.decode(field)
    }
}

/// Pads ``message`` to a whole number of blocks and appends its length in bits (modulo 2^64) using ``encoding``.
///
/// # Errors
/// Fails with ``AllocationFailure`` if the buffer cannot be reserved and with ``CapacityOverflow`` if its length is
/// not addressable. No digest must be produced in either case.
pub fn pad(message: &[u8], encoding: LengthEncoding) -> Result<PaddedBuffer> {
    let layout = PaddingLayout::for_message(message.len())
        .ok_or(HashError::CapacityOverflow { message_len: message.len() })?;
    let padded_len = layout.padded_len();

    log::trace!("padding {} message bytes into {} blocks with {} zero bits ({:?} length)",
                message.len(), layout.block_count, layout.zero_fill_bits, encoding);

    let mut bytes = Vec::new();
    bytes.try_reserve_exact(padded_len)
        .map_err(|source| HashError::AllocationFailure { requested: padded_len, source })?;
    bytes.resize(padded_len, 0u8);

    bytes[..message.len()].copy_from_slice(message);

    // the message is always a whole number of bytes, so the marker bit is byte aligned
    bytes[message.len()] = MARKER_BYTE;

    let bit_length = (message.len() as u64).wrapping_mul(8);
    bytes[padded_len - LENGTH_FIELD_BYTES..].copy_from_slice(&encoding.encode(bit_length));

    Ok(PaddedBuffer { bytes, encoding })
}
