use b58uuid::{decode, encode_bytes, encode_uuid};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hex_literal::hex;

const UUID: [u8; 16] = hex!("550e8400e29b41d4a716446655440000");

fn bench_encode(c: &mut Criterion) {
    c.bench_function("b58uuid_encode", |b| b.iter(|| encode_bytes(black_box(UUID))));
    c.bench_function("b58uuid_encode_max", |b| {
        b.iter(|| encode_bytes(black_box([0xFF; 16])))
    });
    c.bench_function("b58uuid_encode_uuid_str", |b| {
        b.iter(|| encode_uuid(black_box("550e8400-e29b-41d4-a716-446655440000")).unwrap())
    });
}

fn bench_decode(c: &mut Criterion) {
    let encoded = encode_bytes(UUID);
    c.bench_function("b58uuid_decode", |b| b.iter(|| decode(black_box(&encoded)).unwrap()));
    c.bench_function("b58uuid_decode_overflow", |b| {
        b.iter(|| decode(black_box("ZZZZZZZZZZZZZZZZZZZZZZ")).unwrap_err())
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
