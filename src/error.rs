//! Error types shared by the codec and the UUID text layer.

use thiserror::Error;

/// Result alias for b58uuid operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed collaborator input, e.g. a non-hex character in a UUID string.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Wrong number of bytes (encode) or hex digits (UUID string).
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// Malformed Base58 text.
    #[error("invalid base58 string: {0}")]
    InvalidEncoding(#[from] EncodingError),
    /// Decoded value exceeds 2^128 - 1.
    #[error("decoded value exceeds maximum UUID value (2^128 - 1)")]
    Overflow,
}

/// Why a Base58 string was rejected before any arithmetic ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("empty input")]
    Empty,
    /// Character count, not byte count.
    #[error("expected {expected} characters, got {0}", expected = crate::ENCODED_LEN)]
    Length(usize),
    /// First non-alphabet character and its character index.
    #[error("invalid character at position {pos}: {ch:?}")]
    InvalidChar { pos: usize, ch: char },
}

impl From<crate::bignum::Overflow> for Error {
    fn from(_: crate::bignum::Overflow) -> Self {
        Error::Overflow
    }
}
