#![cfg(feature = "generate")]

use b58uuid::{decode, decode_to_uuid, generate, generate_bytes};
use std::collections::HashSet;

#[test]
fn test_generated_values_are_v4() {
    for _ in 0..200 {
        let bytes = decode(&generate()).unwrap();
        assert_eq!(bytes[6] & 0xF0, 0x40);
        assert_eq!(bytes[8] & 0xC0, 0x80);
    }
}

#[test]
fn test_generated_values_are_distinct() {
    let seen: HashSet<[u8; 16]> = (0..1000).map(|_| generate_bytes()).collect();
    assert_eq!(seen.len(), 1000);
}

#[test]
fn test_generated_formats_as_v4_uuid() {
    let text = decode_to_uuid(&generate()).unwrap();
    let parsed = uuid::Uuid::parse_str(&text).unwrap();
    assert_eq!(parsed.get_version_num(), 4);
    assert_eq!(parsed.get_variant(), uuid::Variant::RFC4122);
}
