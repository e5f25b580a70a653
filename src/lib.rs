//! Fixed-width Base58 codec for 128-bit UUIDs.
//! Bitcoin alphabet; every UUID encodes to exactly 22 characters and back.

/// Bitcoin Base58 alphabet. Excludes `0`, `O`, `I` and `l`.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Numeric base of the text form.
pub const BASE: u8 = 58;

/// Width of a UUID in bytes.
pub const UUID_LEN: usize = 16;

/// Width of an encoded UUID in characters (58^22 > 2^128 > 58^21).
pub const ENCODED_LEN: usize = 22;

/// Marker for a byte that is not part of [`ALPHABET`] in [`DIGIT_TO_VAL`].
pub(crate) const INVALID_DIGIT: u8 = 0xFF;

/// Byte -> digit value; [`INVALID_DIGIT`] for anything outside the alphabet.
#[allow(clippy::cast_possible_truncation)]
pub(crate) const DIGIT_TO_VAL: [u8; 256] = {
    let mut table = [INVALID_DIGIT; 256];
    let mut i = 0usize;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Digit value of `ch`, or `None` if it is not a Base58 symbol.
#[inline]
#[must_use]
pub fn digit_value(ch: char) -> Option<u8> {
    let idx = u8::try_from(ch).ok()?;
    match DIGIT_TO_VAL[idx as usize] {
        INVALID_DIGIT => None,
        val => Some(val),
    }
}

pub mod bignum;
mod decode;
mod encode;
mod error;
#[cfg(feature = "generate")]
mod generate;
mod uuid_str;

pub use bignum::{FixedUint, Overflow};
pub use decode::decode;
pub use encode::{encode, encode_bytes};
pub use error::{EncodingError, Error, Result};
#[cfg(feature = "generate")]
pub use generate::{generate, generate_bytes, generate_bytes_with};
pub use uuid_str::{decode_to_uuid, encode_uuid, format_uuid, parse_uuid_str};
#[cfg(feature = "uuid")]
pub use uuid_str::{decode_uuid_value, encode_uuid_value};
