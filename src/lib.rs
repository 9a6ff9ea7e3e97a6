//! Software implementations of the SHA256 and MD5 digests. Both are merkle damgård hashes: the message is padded to
//! whole 512 bit blocks, every block is compressed into a fixed-size state, and the final state is rendered as hex.
//! The granular API (padding, per-block compression) is public, so every step can be inspected on its own.
#![allow(clippy::upper_case_acronyms)]

pub use crate::error::{HashError, Result};
pub use crate::hash::merkle_damgard::md5::MD5Hash;
pub use crate::hash::merkle_damgard::padding::{pad, LengthEncoding, PaddedBuffer, PaddingLayout};
pub use crate::hash::merkle_damgard::sha256::SHA256Hash;
pub use crate::hash::{Algorithm, HashFunction, HashValue};

pub mod array_util;
pub mod error;
pub mod hash;

/// Computes the SHA256 digest of ``message`` as 64 lowercase hex characters.
pub fn sha256(message: &[u8]) -> Result<String> {
    digest(Algorithm::Sha256, message)
}

/// Computes the MD5 digest of ``message`` as 32 lowercase hex characters.
pub fn md5(message: &[u8]) -> Result<String> {
    digest(Algorithm::Md5, message)
}

/// Computes the digest of ``message`` with the given ``algorithm``.
pub fn digest(algorithm: Algorithm, message: &[u8]) -> Result<String> {
    log::debug!("computing {} of {} bytes", algorithm, message.len());
    algorithm.digest(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256() {
        assert_eq!(sha256(b"").unwrap(), "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
        assert_eq!(sha256(b"abc").unwrap(), "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
    }

    #[test]
    fn test_md5() {
        assert_eq!(md5(b"").unwrap(), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(md5(b"abc").unwrap(), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_algorithms_disagree() {
        assert_ne!(digest(Algorithm::Sha256, b"abc").unwrap()[..32], md5(b"abc").unwrap());
    }
}
