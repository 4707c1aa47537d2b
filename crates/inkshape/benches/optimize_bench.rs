//! Criterion benchmarks for the simplify/detect pipeline.
//! Sizes: circle traces with 32..512 samples and demo documents of 1..32 pages.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use inkshape::geom::{Rgba, ShapeCfg};
use inkshape::optimize_document;
use inkshape::simplify::simplify_stroke;
use inkshape::synth::{circle_stroke, demo_document, line_stroke, CircleTrace, ReplayToken};

fn bench_simplify(c: &mut Criterion) {
    let cfg = ShapeCfg::default();
    let mut group = c.benchmark_group("simplify");
    for &n in &[32usize, 128, 512] {
        group.bench_with_input(BenchmarkId::new("circle_trace", n), &n, |b, &n| {
            let trace = CircleTrace {
                samples: n,
                ..CircleTrace::default()
            };
            b.iter_batched(
                || circle_stroke(trace, Rgba::BLACK, 1.0, ReplayToken::new(43, n as u64)),
                |mut s| simplify_stroke(&mut s, &cfg),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("straight_line", n), &n, |b, &n| {
            b.iter_batched(
                || line_stroke((0.0, 0.0), (500.0, 80.0), n, (1.0, 1.0), Rgba::BLACK, 1.0),
                |mut s| simplify_stroke(&mut s, &cfg),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_document(c: &mut Criterion) {
    let cfg = ShapeCfg::default();
    let mut group = c.benchmark_group("optimize_document");
    for &pages in &[1usize, 8, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(pages), &pages, |b, &pages| {
            b.iter_batched(
                || demo_document(44, pages),
                |mut doc| optimize_document(&mut doc, &cfg),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_simplify, bench_document);
criterion_main!(benches);
