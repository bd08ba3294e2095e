//! Benchmarks for encode (index -> coordinates) and decode (coordinates -> index).

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hilbertpath::{CurveSpec, configure};

/// Benchmark configurations: (dimension, order).
fn bench_configs() -> Vec<(u32, u32)> {
    vec![(2, 4), (2, 16), (2, 32), (3, 10), (3, 21), (4, 16), (8, 8), (16, 4)]
}

/// Benchmark `encode` at the midpoint of each curve.
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for (dim, order) in bench_configs() {
        let spec = configure(dim, order).expect("valid curve");
        let midpoint = spec.max_index() / 2;

        group.bench_function(BenchmarkId::new("u64", format!("{dim}d-{order}")), |b| {
            b.iter(|| spec.encode(black_box(midpoint)))
        });
    }

    group.finish();
}

/// Benchmark `decode` at the midpoint of each curve.
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for (dim, order) in bench_configs() {
        let spec = configure(dim, order).expect("valid curve");
        let pt = spec.encode(spec.max_index() / 2).expect("midpoint");

        group.bench_function(BenchmarkId::new("u64", format!("{dim}d-{order}")), |b| {
            b.iter(|| spec.decode(black_box(&pt)))
        });
    }

    group.finish();
}

/// Compare index word widths on the same 2D order-8 curve.
fn bench_word_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_width");

    let narrow = CurveSpec::<u16>::new(2, 8).expect("u16");
    let mid16 = narrow.max_index() / 2;
    group.bench_function("u16", |b| b.iter(|| narrow.encode(black_box(mid16))));

    let medium = CurveSpec::<u32>::new(2, 8).expect("u32");
    let mid32 = medium.max_index() / 2;
    group.bench_function("u32", |b| b.iter(|| medium.encode(black_box(mid32))));

    let wide = CurveSpec::<u64>::new(2, 8).expect("u64");
    let mid64 = wide.max_index() / 2;
    group.bench_function("u64", |b| b.iter(|| wide.encode(black_box(mid64))));

    group.finish();
}

#[allow(missing_docs, clippy::missing_docs_in_private_items)]
mod bench_defs {
    use super::*;
    criterion_group!(benches, bench_encode, bench_decode, bench_word_width);
}

pub use bench_defs::benches;
criterion_main!(benches);
