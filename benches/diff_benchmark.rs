//! Benchmarks for the diff engine.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use logdiff::{CompareOptions, DiffEngine, DiffMode};
use std::hint::black_box;

/// Generate a log-like input with a change every `stride` lines.
fn generate_lines(count: usize, stride: usize, salt: &str) -> Vec<String> {
    (0..count)
        .map(|i| {
            if i % stride == 0 {
                format!("{i:06} WARN  worker-{} retrying {salt}", i % 8)
            } else {
                format!("{i:06} INFO  worker-{} processed batch", i % 8)
            }
        })
        .collect()
}

fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff");

    for size in [100, 1_000, 3_000] {
        let expected = generate_lines(size, 17, "a");
        let current = generate_lines(size, 23, "b");
        group.throughput(Throughput::Elements(size as u64));

        for mode in [DiffMode::Ordered, DiffMode::Unordered] {
            let engine = DiffEngine::new().with_mode(mode);
            group.bench_with_input(BenchmarkId::new(mode.name(), size), &size, |b, _| {
                b.iter(|| engine.diff(black_box(&expected), black_box(&current)));
            });
        }
    }

    group.finish();
}

fn bench_normalization(c: &mut Criterion) {
    let expected = generate_lines(1_000, 11, "x");
    let current: Vec<String> = expected
        .iter()
        .map(|line| format!("  {}  ", line.to_uppercase()))
        .collect();
    let engine = DiffEngine::new().with_options(CompareOptions::lenient());

    c.bench_function("ordered_lenient_1000", |b| {
        b.iter(|| engine.diff(black_box(&expected), black_box(&current)));
    });
}

fn bench_split_lines(c: &mut Criterion) {
    let text = generate_lines(10_000, 13, "s").join("\r\n");

    c.bench_function("split_lines_10000", |b| {
        b.iter(|| logdiff::split_lines(black_box(&text)).len());
    });
}

criterion_group!(benches, bench_modes, bench_normalization, bench_split_lines);
criterion_main!(benches);
