use std::fmt;
use std::str::FromStr;

use crate::error::{HashError, Result};

use self::merkle_damgard::md5::MD5Hash;
use self::merkle_damgard::sha256::SHA256Hash;

pub mod merkle_damgard;

/// Output of a `HashFunction`.
pub trait HashValue {
    /// The size of the raw digest in bytes
    const OUTPUT_SIZE: usize;

    /// Obtain the hash as a raw byte array, in the canonical byte order of the algorithm.
    fn raw(&self) -> Vec<u8>;

    /// Render the raw digest as lowercase hex, two characters per byte and no separators.
    fn to_hex(&self) -> String {
        hex::encode(self.raw())
    }
}

/// Any hash function that can digest arbitrarily sized input.
pub trait HashFunction: HashValue + Sized {
    /// The digestion block size of this hash function
    const BLOCK_SIZE: usize;

    /// Digest a full message of arbitrary size.
    /// #Parameters
    /// - `input` a slice containing a (possibly large) chunk of byte data that is to be digested.
    ///
    /// #Output
    /// Returns the hash state of the digested input data. It cannot be used to append more data, as the message
    /// length was appended to the input data for digestion.
    fn digest_message(input: &[u8]) -> Result<Self>;
}

/// The digest algorithms this crate implements. The choice is made once per computation by the caller.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sha256,
    Md5,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Sha256, Algorithm::Md5];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Sha256 => "sha256",
            Algorithm::Md5 => "md5",
        }
    }

    /// Raw digest size in bytes.
    pub fn output_size(self) -> usize {
        match self {
            Algorithm::Sha256 => SHA256Hash::OUTPUT_SIZE,
            Algorithm::Md5 => MD5Hash::OUTPUT_SIZE,
        }
    }

    /// Number of characters of the hex digest.
    pub fn hex_len(self) -> usize {
        self.output_size() * 2
    }

    /// Digest ``message`` and render it as lowercase hex.
    pub fn digest(self, message: &[u8]) -> Result<String> {
        match self {
            Algorithm::Sha256 => SHA256Hash::digest_message(message).map(|hash| hash.to_hex()),
            Algorithm::Md5 => MD5Hash::digest_message(message).map(|hash| hash.to_hex()),
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Sha256
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = HashError;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(Algorithm::Sha256),
            "md5" => Ok(Algorithm::Md5),
            _ => Err(HashError::UnsupportedAlgorithm(name.to_string())),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use rand::{thread_rng, Rng};

    use super::*;

    pub const EMPTY_MESSAGE: &str = "";

    pub const SOME_TEXT: &str = "a-very-long-message-that-can-be-digested-at-once";

    pub const LONG_TEXT: &str = "God? You'd assert that a God exhibits neither shame nor despair. And yet I stand \
unchanged; a tragic husk with bloodied hands. I surrendered my future, the prospect of a family to carry your poison. \
You misled me. I renounce your control!";

    #[test]
    fn test_md5() {
        assert_eq!(Algorithm::Md5.digest(EMPTY_MESSAGE.as_bytes()).unwrap(), "d41d8cd98f00b204e9800998ecf8427e");

        assert_eq!(Algorithm::Md5.digest(SOME_TEXT.as_bytes()).unwrap(), "9cf653b21b12797c80f769c8a753c360");
    }

    #[test]
    fn test_sha256() {
        assert_eq!(Algorithm::Sha256.digest(EMPTY_MESSAGE.as_bytes()).unwrap(),
                   "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");

        assert_eq!(Algorithm::Sha256.digest(SOME_TEXT.as_bytes()).unwrap(),
                   "cc77cc4784a3be36a1e0b6da76cf57dbbc3b8a8a1241f3680a796224b5ad45b0");
    }

    #[test]
    fn test_digest_lengths() {
        for algorithm in Algorithm::ALL.iter() {
            for message in [EMPTY_MESSAGE, SOME_TEXT, LONG_TEXT].iter() {
                let digest = algorithm.digest(message.as_bytes()).unwrap();
                assert_eq!(digest.len(), algorithm.hex_len());
                assert!(digest.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
            }
        }

        assert_eq!(Algorithm::Sha256.hex_len(), 64);
        assert_eq!(Algorithm::Md5.hex_len(), 32);
    }

    #[test]
    fn test_determinism() {
        let mut rng = thread_rng();

        for _ in 0..32 {
            let mut message = vec![0u8; rng.gen_range(0, 300)];
            rng.fill(&mut message[..]);

            for algorithm in Algorithm::ALL.iter() {
                assert_eq!(algorithm.digest(&message).unwrap(), algorithm.digest(&message).unwrap());
            }
        }
    }

    #[test]
    fn test_avalanche() {
        let mut rng = thread_rng();

        for _ in 0..32 {
            let mut message = vec![0u8; rng.gen_range(1, 300)];
            rng.fill(&mut message[..]);

            let mut flipped = message.clone();
            let bit = rng.gen_range(0, flipped.len() * 8);
            flipped[bit / 8] ^= 1 << (bit % 8);

            for algorithm in Algorithm::ALL.iter() {
                assert_ne!(algorithm.digest(&message).unwrap(), algorithm.digest(&flipped).unwrap());
            }
        }
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("sha256".parse::<Algorithm>().unwrap(), Algorithm::Sha256);
        assert_eq!("SHA-256".parse::<Algorithm>().unwrap(), Algorithm::Sha256);
        assert_eq!("MD5".parse::<Algorithm>().unwrap(), Algorithm::Md5);
        assert_eq!("sha1".parse::<Algorithm>(), Err(HashError::UnsupportedAlgorithm("sha1".to_string())));

        for algorithm in Algorithm::ALL.iter() {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), *algorithm);
        }
    }
}
