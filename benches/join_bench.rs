//! Benchmarks for bytejoin.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use bytejoin::join;

fn bench_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("join");

    for size in [64usize, 64 * 1024, 1024 * 1024] {
        // Deterministic pseudo-random data
        let left: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();
        let right: Vec<u8> = (0..size).map(|i| (i * 11 + 5) as u8).collect();

        group.throughput(Throughput::Bytes((size * 2) as u64));
        group.bench_with_input(format!("halves_{}b", size), &(left, right), |b, (l, r)| {
            b.iter(|| {
                let joined = join(Some(black_box(&l[..])), Some(black_box(&r[..]))).unwrap();
                black_box(joined.len())
            });
        });
    }

    group.finish();
}

fn bench_skewed(c: &mut Criterion) {
    let mut group = c.benchmark_group("skewed");
    let big = vec![0xABu8; 1024 * 1024];
    let empty: &[u8] = &[];

    group.bench_function("empty_first", |b| {
        b.iter(|| {
            let joined = join(Some(black_box(empty)), Some(black_box(&big[..]))).unwrap();
            black_box(joined.len())
        });
    });

    group.bench_function("empty_second", |b| {
        b.iter(|| {
            let joined = join(Some(black_box(&big[..])), Some(black_box(empty))).unwrap();
            black_box(joined.len())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_join, bench_skewed);
criterion_main!(benches);
