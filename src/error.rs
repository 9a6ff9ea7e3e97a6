//! Error types of the digest core.

use std::collections::TryReserveError;

use thiserror::Error;

/// Result type alias for the digest core
pub type Result<T> = std::result::Result<T, HashError>;

/// Everything that can make a digest computation fail. A failed computation never yields a partial digest.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// The padded message buffer could not be reserved.
    #[error("failed to allocate {requested} bytes for the padded message")]
    AllocationFailure {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// The padded length of the message is not addressable.
    #[error("a message of {message_len} bytes cannot be padded without overflowing the address space")]
    CapacityOverflow { message_len: usize },

    /// The requested algorithm name is not known.
    #[error("unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),
}
