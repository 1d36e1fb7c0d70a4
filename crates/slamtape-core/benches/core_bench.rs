//! Criterion benchmarks for slamtape-core DSP primitives
//!
//! Run with: cargo bench -p slamtape-core
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use slamtape_core::{FloatDither, OnePole, ResonantBiquad, spiral};

const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512, 1024];

fn generate_test_signal(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| (2.0 * std::f64::consts::PI * 0.01 * i as f64).sin() * 0.5)
        .collect()
}

fn bench_biquad(c: &mut Criterion) {
    let mut group = c.benchmark_group("ResonantBiquad");

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);

        group.bench_with_input(
            BenchmarkId::new("process", block_size),
            &block_size,
            |b, _| {
                let mut biquad = ResonantBiquad::bandpass(0.0072, 0.0009);
                b.iter(|| {
                    for &sample in &input {
                        black_box(biquad.process(black_box(sample)));
                    }
                });
            },
        );
    }

    // Coefficient calculation cost
    group.bench_function("coefficient_calc", |b| {
        b.iter(|| black_box(ResonantBiquad::bandpass(black_box(0.032), black_box(0.0007))));
    });

    group.finish();
}

fn bench_one_pole(c: &mut Criterion) {
    let mut group = c.benchmark_group("OnePole");

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);

        group.bench_with_input(
            BenchmarkId::new("process", block_size),
            &block_size,
            |b, _| {
                let mut roller = OnePole::new();
                b.iter(|| {
                    for &sample in &input {
                        black_box(roller.process(black_box(sample), 0.381966));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_shapers(c: &mut Criterion) {
    let input = generate_test_signal(1024);
    let mut group = c.benchmark_group("Shapers");

    group.bench_function("spiral", |b| {
        b.iter(|| {
            for &sample in &input {
                black_box(spiral(black_box(sample * 2.0)));
            }
        });
    });

    group.bench_function("dither", |b| {
        let mut dither = FloatDither::new();
        b.iter(|| {
            for &sample in &input {
                black_box(dither.apply(black_box(sample)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_biquad, bench_one_pole, bench_shapers);
criterion_main!(benches);
