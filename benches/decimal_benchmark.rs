// ============================================================================
// Decimal Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parsing - Literal text to scaled magnitude at several accuracies
// 2. Arithmetic - Multiplication and division cost growth with accuracy
// 3. Square Root - Hardware fast path vs. Newton-Raphson
// 4. Random - Word-based and byte-based uniform samplers
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bigfix::prelude::*;

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for accuracy in [10u32, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("decimal", accuracy),
            accuracy,
            |b, &accuracy| {
                b.iter(|| black_box(BigDecimal::new("12345.678901234", accuracy).unwrap()));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("scientific", accuracy),
            accuracy,
            |b, &accuracy| {
                b.iter(|| black_box(BigDecimal::new("1.2345678901e-7", accuracy).unwrap()));
            },
        );
    }

    group.finish();
}

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    for accuracy in [10u32, 100, 1000].iter() {
        let a = BigDecimal::new("12345.6789", *accuracy).unwrap();
        let b_val = BigDecimal::new("0.0321", *accuracy).unwrap();

        group.bench_with_input(
            BenchmarkId::new("mul", accuracy),
            &(&a, &b_val),
            |bench, (a, b_val)| {
                bench.iter(|| black_box(a.mul(*b_val).unwrap()));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("div", accuracy),
            &(&a, &b_val),
            |bench, (a, b_val)| {
                bench.iter(|| black_box(a.div(*b_val).unwrap()));
            },
        );
    }

    group.finish();
}

fn benchmark_sqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt");

    // Accuracy 5 keeps magnitude * align inside the f64 fast path; the
    // larger accuracies force Newton-Raphson iterations.
    for accuracy in [5u32, 50, 500].iter() {
        let v = BigDecimal::new("2", *accuracy).unwrap();
        group.bench_with_input(BenchmarkId::new("sqrt_2", accuracy), &v, |b, v| {
            b.iter(|| black_box(v.sqrt().unwrap()));
        });
    }

    group.finish();
}

fn benchmark_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random");

    for accuracy in [10u32, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("word_sampler", accuracy),
            accuracy,
            |b, &accuracy| {
                b.iter(|| black_box(BigDecimal::random(accuracy).unwrap()));
            },
        );

        let template = BigDecimal::zero(*accuracy).unwrap();
        group.bench_with_input(
            BenchmarkId::new("byte_sampler", accuracy),
            &template,
            |b, template| {
                b.iter(|| black_box(template.random_like()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parsing,
    benchmark_arithmetic,
    benchmark_sqrt,
    benchmark_random
);
criterion_main!(benches);
