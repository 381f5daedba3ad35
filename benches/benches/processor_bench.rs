//! # Processor Benchmarks
//!
//! Measures decode and the fetch-decode-execute loop.
//!
//! Run: `cargo bench --bench processor_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use intcode_core::instruction::Instruction;
use intcode_core::{Pipe, Processor};

/// Counts down from 10_000 using compare + jump + add
const COUNTDOWN: [i64; 14] = [
    1101, 10_000, 0, 13, // m[13] = 10000
    1001, 13, -1, 13, // m[13] -= 1
    1005, 13, 4, // if m[13] != 0 goto 4
    99, 0, 0,
];

/// Benchmark instruction decoding
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    group.bench_function("position_add", |b| {
        b.iter(|| black_box(Instruction::decode(black_box(1), 0)))
    });

    group.bench_function("mixed_modes", |b| {
        b.iter(|| black_box(Instruction::decode(black_box(1002), 0)))
    });

    group.bench_function("unknown_opcode", |b| {
        b.iter(|| black_box(Instruction::decode(black_box(42), 0)))
    });

    group.finish();
}

/// Benchmark full runs
fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("processor_run");

    group.bench_function("reference_3500", |b| {
        let program = vec![1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50];
        b.iter(|| {
            let mut cpu = Processor::new(program.clone(), Pipe::new(), Pipe::new());
            black_box(cpu.run())
        })
    });

    group.bench_function("countdown_10k", |b| {
        b.iter(|| {
            let mut cpu = Processor::new(COUNTDOWN.to_vec(), Pipe::new(), Pipe::new());
            black_box(cpu.run())
        })
    });

    group.bench_function("compare_io", |b| {
        let program = vec![3, 9, 8, 9, 10, 9, 4, 9, 99, -1, 8];
        b.iter(|| {
            let mut cpu = Processor::new(program.clone(), Pipe::seeded([8]), Pipe::new());
            black_box(cpu.run())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_decode, bench_run);
criterion_main!(benches);
