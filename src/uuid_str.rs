//! Textual UUIDs (hex, hyphens optional) on top of the byte codec.

use crate::error::{Error, Result};
use crate::{decode, encode_bytes, UUID_LEN};
use log::debug;

const HEX_LEN: usize = UUID_LEN * 2;

/// Parses a UUID written as 32 hex digits, with or without hyphens.
///
/// Every `-` is dropped before counting, so hyphen placement is not checked.
///
/// # Errors
/// - `InvalidLength`: not 32 hex digits once hyphens are removed.
/// - `InvalidInput`: a non-hex character (position within the hyphen-free digits).
pub fn parse_uuid_str(input: &str) -> Result<[u8; UUID_LEN]> {
    let cleaned: String = input.chars().filter(|&c| c != '-').collect();
    let len = cleaned.chars().count();
    if len != HEX_LEN {
        debug!("rejecting uuid string {input:?}: {len} hex digits");
        return Err(Error::InvalidLength {
            expected: HEX_LEN,
            actual: len,
        });
    }
    if let Some((pos, ch)) = cleaned.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit()) {
        debug!("rejecting uuid string {input:?}: non-hex {ch:?}");
        return Err(Error::InvalidInput(format!(
            "invalid hex character at position {pos}: {ch}"
        )));
    }
    let mut bytes = [0u8; UUID_LEN];
    hex::decode_to_slice(&cleaned, &mut bytes).map_err(|e| Error::InvalidInput(e.to_string()))?;
    Ok(bytes)
}

/// Lowercase hyphenated form, `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`.
#[must_use]
pub fn format_uuid(bytes: &[u8; UUID_LEN]) -> String {
    let mut out = String::with_capacity(HEX_LEN + 4);
    for (i, group) in [&bytes[0..4], &bytes[4..6], &bytes[6..8], &bytes[8..10], &bytes[10..16]]
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            out.push('-');
        }
        out.push_str(&hex::encode(group));
    }
    out
}

/// Encodes a textual UUID to Base58.
///
/// # Errors
/// See [`parse_uuid_str`].
pub fn encode_uuid(input: &str) -> Result<String> {
    parse_uuid_str(input).map(encode_bytes)
}

/// Decodes Base58 to the hyphenated UUID form.
///
/// # Errors
/// See [`decode`](crate::decode()).
pub fn decode_to_uuid(input: &str) -> Result<String> {
    decode(input).map(|bytes| format_uuid(&bytes))
}

#[cfg(feature = "uuid")]
#[must_use]
pub fn encode_uuid_value(value: &uuid::Uuid) -> String {
    encode_bytes(*value.as_bytes())
}

/// # Errors
/// See [`decode`](crate::decode()).
#[cfg(feature = "uuid")]
pub fn decode_uuid_value(input: &str) -> Result<uuid::Uuid> {
    decode(input).map(uuid::Uuid::from_bytes)
}
