//! Zero-crossing benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (10K to 1M samples)
//! - Selection modes (all, first, last)
//! - Noisy difference curves with many crossings
//! - Incremental adapters (streaming chunks, online points)
//! - Panels of many short series
//!
//! For serial execution, use `FASTZEROCROSS_MODE=serial cargo bench`.
//! For parallel execution, use `FASTZEROCROSS_MODE=parallel cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastZerocross::prelude::*;
use rand::prelude::*;
use rand_distr::Normal;
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTZEROCROSS_MODE").ok().as_deref() {
        Some("serial") => (false, "serial"),
        Some("parallel") | _ => (true, "parallel"),
    }
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a slow oscillation with a handful of clean crossings.
fn generate_sine_data(size: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..size).map(|i| i as f64 * 20.0 / size as f64).collect();
    let y: Vec<f64> = x.iter().map(|&xi| xi.sin()).collect();
    (x, y)
}

/// Generate a difference curve that hovers around zero (many crossings).
fn generate_noisy_difference(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.05).unwrap();

    let x: Vec<f64> = (0..size).map(|i| i as f64 / size as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| 0.02 * (xi - 0.5) + noise_dist.sample(&mut rng))
        .collect();
    (x, y)
}

/// Generate a curve with one crossing near the right edge.
fn generate_late_crossing(size: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..size).map(|i| i as f64 / size as f64).collect();
    let y: Vec<f64> = x.iter().map(|&xi| xi - 0.97).collect();
    (x, y)
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scalability_{}", mode_name));
    group.sample_size(50);

    for size in [10_000, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(size as u64));
        let (x, y) = generate_sine_data(size);

        group.bench_with_input(BenchmarkId::new("batch", size), &size, |b, _| {
            let finder = ZeroCrossing::<f64>::new()
                .adapter(Batch)
                .parallel(use_parallel)
                .build()
                .unwrap();
            b.iter(|| finder.find(black_box(&x), black_box(&y)).unwrap())
        });
    }

    group.finish();
}

fn bench_modes(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("modes_{}", mode_name));
    group.sample_size(100);

    let size = 200_000;
    let (x, y) = generate_late_crossing(size);

    for mode in [All, First, Last] {
        group.bench_with_input(BenchmarkId::new("late_crossing", mode), &mode, |b, &mode| {
            let finder = ZeroCrossing::<f64>::new()
                .mode(mode)
                .adapter(Batch)
                .parallel(use_parallel)
                .build()
                .unwrap();
            b.iter(|| finder.find(black_box(&x), black_box(&y)).unwrap())
        });
    }

    group.finish();
}

fn bench_noisy(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("noisy_{}", mode_name));
    group.sample_size(50);

    for size in [10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        let (x, y) = generate_noisy_difference(size, 42);

        group.bench_with_input(BenchmarkId::new("all", size), &size, |b, _| {
            let finder = ZeroCrossing::<f64>::new()
                .adapter(Batch)
                .parallel(use_parallel)
                .build()
                .unwrap();
            b.iter(|| finder.find(black_box(&x), black_box(&y)).unwrap())
        });
    }

    group.finish();
}

fn bench_incremental(c: &mut Criterion) {
    let mut group = c.benchmark_group("incremental");
    group.sample_size(50);

    let size = 100_000;
    let (x, y) = generate_noisy_difference(size, 7);
    group.throughput(Throughput::Elements(size as u64));

    for chunk_size in [256, 4096] {
        group.bench_with_input(
            BenchmarkId::new("streaming", chunk_size),
            &chunk_size,
            |b, &chunk_size| {
                b.iter(|| {
                    let mut stream = ZeroCrossing::<f64>::new().adapter(Streaming).build().unwrap();
                    for (cx, cy) in x.chunks(chunk_size).zip(y.chunks(chunk_size)) {
                        stream.process_chunk(black_box(cx), black_box(cy)).unwrap();
                    }
                    stream.finalize()
                })
            },
        );
    }

    group.bench_function("online", |b| {
        b.iter(|| {
            let mut online = ZeroCrossing::<f64>::new().adapter(Online).build().unwrap();
            for (&xi, &yi) in x.iter().zip(&y) {
                online.add_point(black_box(xi), black_box(yi)).unwrap();
            }
            online.result()
        })
    });

    group.finish();
}

fn bench_panel(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("panel_{}", mode_name));
    group.sample_size(50);

    let size = 5_000;
    for n_series in [8, 64, 256] {
        let x: Vec<f64> = (0..size).map(|i| i as f64 / size as f64).collect();
        let ys: Vec<Vec<f64>> = (0..n_series)
            .map(|s| generate_noisy_difference(size, s as u64).1)
            .collect();
        let columns: Vec<(usize, &[f64])> = ys.iter().map(|y| y.as_slice()).enumerate().collect();

        group.throughput(Throughput::Elements((size * n_series) as u64));
        group.bench_with_input(BenchmarkId::new("columns", n_series), &n_series, |b, _| {
            let panel = ZeroCrossing::<f64>::new()
                .mode(First)
                .adapter(Panel)
                .parallel(use_parallel)
                .build()
                .unwrap();
            b.iter(|| panel.find_columns(black_box(&x), black_box(&columns)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_modes,
    bench_noisy,
    bench_incremental,
    bench_panel,
);
criterion_main!(benches);
