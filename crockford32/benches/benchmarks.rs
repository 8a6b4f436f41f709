//! Benchmarks comparing our Crockford base32 implementation with the external base32 crate.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use crockford32::{decode, decode_into, encode, encode_into, encoded_len};
use std::hint::black_box;

/// Sample data sizes for benchmarking
const SIZES: &[usize] = &[16, 64, 256, 1024, 4096, 16384];

fn generate_data(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("crockford32_encode");

    for &size in SIZES {
        let data = generate_data(size);
        let mut output = vec![0u8; encoded_len(size).unwrap()];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("our_impl", size), &data, |b, data| {
            b.iter(|| encode(black_box(data)))
        });

        group.bench_with_input(BenchmarkId::new("our_impl_into", size), &data, |b, data| {
            b.iter(|| encode_into(black_box(&mut output), black_box(data)))
        });

        group.bench_with_input(BenchmarkId::new("base32_crate", size), &data, |b, data| {
            b.iter(|| base32_external::encode(base32_external::Alphabet::Crockford, black_box(data)))
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("crockford32_decode");

    for &size in SIZES {
        let data = generate_data(size);
        let encoded = crockford32::encode_to_string(&data);
        let mut output = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("our_impl", size), &encoded, |b, encoded| {
            b.iter(|| decode(black_box(encoded.as_bytes())))
        });

        group.bench_with_input(
            BenchmarkId::new("our_impl_into", size),
            &encoded,
            |b, encoded| b.iter(|| decode_into(black_box(&mut output), black_box(encoded.as_bytes()))),
        );

        group.bench_with_input(
            BenchmarkId::new("base32_crate", size),
            &encoded,
            |b, encoded| {
                b.iter(|| {
                    base32_external::decode(base32_external::Alphabet::Crockford, black_box(encoded))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
