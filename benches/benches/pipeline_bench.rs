//! # Pipeline Benchmarks
//!
//! Measures one amplifier chain and the full permutation search.
//!
//! Run: `cargo bench --bench pipeline_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use intcode_core::{Memory, Pipeline, best_phase_setting};

fn program() -> Memory {
    Memory::from(vec![
        3, 31, 3, 32, 1002, 32, 10, 32, 1001, 31, -2, 31, 1007, 31, 0, 33, 1002, 33, 7, 33, 1, 33,
        31, 31, 1, 32, 31, 31, 4, 31, 99, 0, 0, 0,
    ])
}

/// Benchmark a single five-stage chain
fn bench_chain(c: &mut Criterion) {
    let pipeline = Pipeline::new(program());

    c.bench_function("pipeline_five_stages", |b| {
        b.iter(|| black_box(pipeline.run(black_box(&[1, 0, 4, 3, 2]), 0)))
    });
}

/// Benchmark the 120-permutation search
fn bench_search(c: &mut Criterion) {
    let program = program();

    c.bench_function("search_0_to_4", |b| {
        b.iter(|| black_box(best_phase_setting(&program, &[0, 1, 2, 3, 4], 0)))
    });
}

criterion_group!(benches, bench_chain, bench_search);
criterion_main!(benches);
