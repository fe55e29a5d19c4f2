//! Criterion micro-benchmarks for buffer search, compare, fill, and copy.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use octet_bench::{haystack, NEEDLE};
use octet_buffer::{Buffer, Direction};
use octet_core::Arg;

const LEN: usize = 64 * 1024;

/// Benchmark: forward and backward search for a needle near the end.
fn bench_search(c: &mut Criterion) {
    let hay = haystack(11, LEN);
    c.bench_function("search_forward_64k", |b| {
        b.iter(|| black_box(hay.search(NEEDLE, 0, Direction::Forward).unwrap()));
    });
    c.bench_function("search_backward_64k", |b| {
        b.iter(|| black_box(hay.search(NEEDLE, Arg::Undefined, Direction::Backward).unwrap()));
    });
}

/// Benchmark: compare two equal 64 KiB buffers.
fn bench_compare(c: &mut Criterion) {
    let a = haystack(5, LEN);
    let b2 = Buffer::copy_from(&a);
    c.bench_function("compare_equal_64k", |b| {
        b.iter(|| black_box(a.compare(&b2)));
    });
}

/// Benchmark: fill with a 3-byte pattern.
fn bench_fill(c: &mut Criterion) {
    let buf = Buffer::alloc(LEN).unwrap();
    c.bench_function("fill_pattern_64k", |b| {
        b.iter(|| {
            buf.fill(&[1u8, 2, 3], Arg::Undefined, Arg::Undefined).unwrap();
        });
    });
}

/// Benchmark: overlapping copy within one buffer.
fn bench_overlapping_copy(c: &mut Criterion) {
    let buf = haystack(9, LEN);
    c.bench_function("copy_overlapping_64k", |b| {
        b.iter(|| black_box(buf.copy(&buf, 1, 0, LEN - 1).unwrap()));
    });
}

/// Benchmark: small pooled allocations.
fn bench_pooled_alloc(c: &mut Criterion) {
    c.bench_function("alloc_unsafe_64b", |b| {
        b.iter(|| black_box(Buffer::alloc_unsafe(64).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_search,
    bench_compare,
    bench_fill,
    bench_overlapping_copy,
    bench_pooled_alloc
);
criterion_main!(benches);
