//! Base58 decoding to 16-byte UUIDs.
//! Strict: exactly 22 alphabet characters, validated upfront (empty, length,
//! then first bad character), before any arithmetic runs.
//! Accumulation is Horner (MSB first) on a `FixedUint<16>`: each `*58` and `+d`
//! is probed for a carry out of the top byte before it is committed, so an
//! out-of-range string is rejected while the accumulator is still exact.

use crate::bignum::FixedUint;
use crate::error::{EncodingError, Error, Result};
use crate::{digit_value, BASE, ENCODED_LEN, UUID_LEN};
use log::debug;

/// Decodes a 22-character Base58 string to the 16 bytes it encodes.
///
/// # Errors
/// - `InvalidEncoding(Empty)`: empty input.
/// - `InvalidEncoding(Length(n))`: `n != 22` characters.
/// - `InvalidEncoding(InvalidChar { pos, ch })`: first non-alphabet char.
/// - `Overflow`: the value exceeds 2^128 - 1.
pub fn decode(input: &str) -> Result<[u8; UUID_LEN]> {
    let digits = digits(input).inspect_err(|e| debug!("rejecting base58 uuid {input:?}: {e}"))?;
    let mut acc = FixedUint::<UUID_LEN>::zero();
    for (pos, &val) in digits.iter().enumerate() {
        acc.checked_mul_add(BASE, val).map_err(|_| {
            debug!("base58 uuid {input:?} overflows 128 bits at position {pos}");
            Error::Overflow
        })?;
    }
    Ok(acc.to_be_bytes())
}

/// Validates `input` and maps it to digit values (MSB first).
fn digits(input: &str) -> Result<[u8; ENCODED_LEN]> {
    if input.is_empty() {
        return Err(EncodingError::Empty.into());
    }
    let len = input.chars().count();
    if len != ENCODED_LEN {
        return Err(EncodingError::Length(len).into());
    }
    let mut vals = [0u8; ENCODED_LEN];
    for (pos, ch) in input.chars().enumerate() {
        vals[pos] = digit_value(ch).ok_or(EncodingError::InvalidChar { pos, ch })?;
    }
    Ok(vals)
}
