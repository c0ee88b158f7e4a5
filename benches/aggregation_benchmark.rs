// ============================================================================
// Aggregation Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Conversion - Per-operand text parsing
// 2. Sentinel Aggregation - add() over mixed sequences
// 3. Strict Aggregation - add_strict() over the same sequences
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use tally::numeric::{add, add_strict, transform_to_number, Operand};

fn mixed_operands(len: usize) -> Vec<Operand> {
    (0..len)
        .map(|i| match i % 3 {
            0 => Operand::from(i.to_string()),
            1 => Operand::from(format!("{}.25", i)),
            _ => Operand::from(i as i64),
        })
        .collect()
}

// ============================================================================
// Conversion Benchmarks
// ============================================================================

fn benchmark_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_to_number");

    for input in ["42", "-1234.5678", "2.5e-3", "0x1F", "invalid"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), &input, |b, input| {
            b.iter(|| black_box(transform_to_number(*input)))
        });
    }

    group.finish();
}

// ============================================================================
// Aggregation Benchmarks
// ============================================================================

fn benchmark_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    for len in [10, 100, 1000] {
        let operands = mixed_operands(len);

        group.bench_with_input(BenchmarkId::new("add", len), &operands, |b, operands| {
            b.iter(|| black_box(add(operands.iter().cloned())))
        });

        group.bench_with_input(BenchmarkId::new("add_strict", len), &operands, |b, operands| {
            b.iter(|| black_box(add_strict(operands.iter().cloned())))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_conversion, benchmark_aggregation);
criterion_main!(benches);
