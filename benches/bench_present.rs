use criterion::{black_box, criterion_group, criterion_main, Criterion};
use present_cipher::cipher::{Cipher, KeySize};

fn keyed_cipher(key_size: KeySize, rounds: usize) -> Cipher {
    let mut cipher = Cipher::new(key_size, rounds).unwrap();
    let key = vec![0x5Au8; key_size.byte_len()];
    cipher.install_key(&key).unwrap();
    cipher
}

fn encryption_benchmarks(c: &mut Criterion) {
    let full = keyed_cipher(KeySize::Bits80, 31);
    let reduced = keyed_cipher(KeySize::Bits80, 4);

    let mut group = c.benchmark_group("PRESENT single-block encryption");

    group.bench_function("PRESENT-80, 31 rounds", |b| {
        b.iter(|| full.encrypt_block(black_box(0x0123_4567_89AB_CDEF)))
    });

    group.bench_function("PRESENT-80, 4 rounds (experiment config)", |b| {
        b.iter(|| reduced.encrypt_block(black_box(0x0123_4567_89AB_CDEF)))
    });

    group.finish();
}

fn key_schedule_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("PRESENT key schedule");

    group.bench_function("80-bit, 31 rounds", |b| {
        b.iter(|| {
            present_cipher::key_schedule::generate_round_keys(
                KeySize::Bits80,
                black_box(&[0x5Au8; 10]),
                31,
            )
        })
    });

    group.bench_function("128-bit, 31 rounds", |b| {
        b.iter(|| {
            present_cipher::key_schedule::generate_round_keys(
                KeySize::Bits128,
                black_box(&[0x5Au8; 16]),
                31,
            )
        })
    });

    group.finish();
}

fn layer_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("PRESENT layers");

    group.bench_function("sBoxLayer (table-driven)", |b| {
        b.iter(|| present_cipher::sbox::sbox_layer(black_box(0x0123_4567_89AB_CDEF)))
    });
    group.bench_function("sBoxLayer (LUT realization)", |b| {
        b.iter(|| present_cipher::sbox::sbox_layer_lut(black_box(0x0123_4567_89AB_CDEF)))
    });
    group.bench_function("pLayer (bit-by-bit)", |b| {
        b.iter(|| present_cipher::perm::bit_by_bit(black_box(0x0123_4567_89AB_CDEF)))
    });
    group.bench_function("pLayer (mask-extract)", |b| {
        b.iter(|| present_cipher::perm::mask_extract(black_box(0x0123_4567_89AB_CDEF)))
    });

    group.finish();
}

criterion_group!(
    benches,
    encryption_benchmarks,
    key_schedule_benchmarks,
    layer_benchmarks
);
criterion_main!(benches);
