//! Random version-4 UUIDs, Base58-encoded.

use crate::{encode_bytes, UUID_LEN};
use log::trace;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// Fills 16 bytes from `rng` and stamps RFC 4122 version 4 and variant `10`.
pub fn generate_bytes_with<R: RngCore + CryptoRng>(rng: &mut R) -> [u8; UUID_LEN] {
    let mut bytes = [0u8; UUID_LEN];
    rng.fill_bytes(&mut bytes);
    bytes[6] = (bytes[6] & 0x0F) | 0x40;
    bytes[8] = (bytes[8] & 0x3F) | 0x80;
    bytes
}

/// Random v4 UUID bytes from the operating system's CSPRNG.
#[must_use]
pub fn generate_bytes() -> [u8; UUID_LEN] {
    generate_bytes_with(&mut OsRng)
}

/// A fresh random v4 UUID in its 22-character Base58 form.
#[must_use]
pub fn generate() -> String {
    let encoded = encode_bytes(generate_bytes());
    trace!("generated base58 uuid {encoded}");
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    #[test]
    fn version_and_variant_bits() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..256 {
            let bytes = generate_bytes_with(&mut rng);
            assert_eq!(bytes[6] >> 4, 0x4);
            assert_eq!(bytes[8] >> 6, 0b10);
        }
    }
    #[test]
    fn generated_decodes() {
        let encoded = generate();
        assert_eq!(encoded.len(), 22);
        let bytes = crate::decode(&encoded).unwrap();
        assert_eq!(bytes[6] >> 4, 0x4);
        assert_eq!(bytes[8] >> 6, 0b10);
    }
    #[test]
    fn unique() {
        assert_ne!(generate(), generate());
    }
}
