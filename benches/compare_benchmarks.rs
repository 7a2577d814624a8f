//! Benchmarks for the fingerprint and scoring hot paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use filesim::fingerprint::{byte_total, chunk_sums};
use filesim::similarity::{overlap_similarity, positional_similarity};

fn bench_content(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

fn bench_chunk_sums(c: &mut Criterion) {
    let content = bench_content(1 << 20);
    c.bench_function("chunk_sums_1mib", |b| {
        b.iter(|| chunk_sums(black_box(&content)))
    });
}

fn bench_byte_total(c: &mut Criterion) {
    let content = bench_content(1 << 20);
    c.bench_function("byte_total_1mib", |b| {
        b.iter(|| byte_total(black_box(&content)))
    });
}

fn bench_positional(c: &mut Criterion) {
    let left = bench_content(1 << 20);
    let mut right = left.clone();
    right[1 << 19] ^= 0xFF; // one differing block in the middle
    c.bench_function("positional_similarity_1mib", |b| {
        b.iter(|| positional_similarity(black_box(&left), black_box(&right)))
    });
}

fn bench_overlap(c: &mut Criterion) {
    let base = chunk_sums(&bench_content(1 << 18));
    let mut target = base.clone();
    target.reverse();
    c.bench_function("overlap_similarity_256kib", |b| {
        b.iter(|| overlap_similarity(black_box(&base), black_box(&target)))
    });
}

criterion_group!(
    benches,
    bench_chunk_sums,
    bench_byte_total,
    bench_positional,
    bench_overlap
);
criterion_main!(benches);
