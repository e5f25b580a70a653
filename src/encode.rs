//! Base58 encoding of 16-byte UUIDs.
//! Fixed width: repeated in-place divmod by 58 over a `FixedUint<16>`, digits
//! written right to left into a buffer prefilled with '1', so leading zero bytes
//! survive as padding instead of collapsing.
//! Cost: at most 22 passes of 16 byte-divisions; no allocation besides the output.
use crate::bignum::FixedUint;
use crate::error::{Error, Result};
use crate::{ALPHABET, BASE, ENCODED_LEN, UUID_LEN};

/// Encodes a 16-byte UUID to its 22-character Base58 form.
///
/// # Errors
/// - `InvalidLength`: `input` is not exactly 16 bytes.
#[inline]
pub fn encode(input: &[u8]) -> Result<String> {
    let bytes: [u8; UUID_LEN] = input.try_into().map_err(|_| Error::InvalidLength {
        expected: UUID_LEN,
        actual: input.len(),
    })?;
    Ok(encode_bytes(bytes))
}

/// Infallible [`encode`] for callers that already hold exactly 16 bytes.
#[must_use]
#[inline]
pub fn encode_bytes(bytes: [u8; UUID_LEN]) -> String {
    let mut num = FixedUint::from_be_bytes(bytes);
    let mut output = [ALPHABET[0]; ENCODED_LEN];
    let mut pos = ENCODED_LEN;
    while !num.is_zero() {
        let remainder = num.div_rem_small(BASE);
        // 58^22 > 2^128, so the value runs out before the buffer does.
        debug_assert!(pos > 0);
        pos -= 1;
        output[pos] = ALPHABET[remainder as usize];
    }
    output.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    #[test]
    fn encode_known() {
        assert_eq!(
            encode(&hex!("550e8400e29b41d4a716446655440000")).unwrap(),
            "BWBeN28Vb7cMEx7Ym8AUzs"
        );
        assert_eq!(
            encode_bytes(hex!("deadbeefcafebabe0123456789abcdef")),
            "UVqy39vS4tbfPzthw5VEKg"
        );
    }
    #[test]
    fn encode_bounds() {
        assert_eq!(encode_bytes([0u8; 16]), "1".repeat(22));
        assert_eq!(encode_bytes([0xFF; 16]), "YcVfxkQb6JRzqk5kF2tNLv");
        assert_eq!(
            encode_bytes(hex!("00000000000000000000000000000001")),
            "1111111111111111111112"
        );
        assert_eq!(
            encode_bytes(hex!("00000000000000000000000000000100")),
            "111111111111111111115R"
        );
    }
    #[test]
    fn encode_length_error() {
        assert_eq!(
            encode(&[0u8; 15]),
            Err(Error::InvalidLength {
                expected: 16,
                actual: 15
            })
        );
        assert!(matches!(
            encode(&[0u8; 17]),
            Err(Error::InvalidLength { actual: 17, .. })
        ));
        assert!(matches!(
            encode(&[]),
            Err(Error::InvalidLength { actual: 0, .. })
        ));
    }
    #[test]
    fn fixed_width() {
        for shift in 0..128u32 {
            let value = 1u128 << shift;
            assert_eq!(encode_bytes(value.to_be_bytes()).len(), ENCODED_LEN);
        }
    }
}
