//! Criterion benchmarks for the levdist evaluators.
//!
//! Covers the two production paths:
//! - The rolling two-row evaluator over plain strings
//! - The full cost-table evaluator over symbol slices

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use levdist::distance::table;
use std::hint::black_box;

/// Generate a deterministic pseudo-random symbol string.
fn generate_sequence(len: usize, seed: usize) -> String {
    let alphabet = ['a', 'c', 'g', 't'];

    (0..len)
        .map(|i| alphabet[(i * 7 + seed * 13) % alphabet.len()])
        .collect()
}

fn bench_two_row_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_row_distance");

    for len in [16, 64, 256, 1024] {
        let s1 = generate_sequence(len, 1);
        let s2 = generate_sequence(len, 2);

        group.throughput(Throughput::Elements((len * len) as u64));
        group.bench_function(format!("len_{len}"), |b| {
            b.iter(|| table::distance(black_box(&s1), black_box(&s2)))
        });
    }

    group.finish();
}

fn bench_full_table_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_table_distance");

    for len in [16, 64, 256] {
        let seq1: Vec<char> = generate_sequence(len, 3).chars().collect();
        let seq2: Vec<char> = generate_sequence(len, 4).chars().collect();

        group.throughput(Throughput::Elements((len * len) as u64));
        group.bench_function(format!("len_{len}"), |b| {
            b.iter(|| {
                table::prefix_distance(black_box(&seq1), black_box(&seq2), seq1.len(), seq2.len())
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_two_row_distance, bench_full_table_distance);
criterion_main!(benches);
