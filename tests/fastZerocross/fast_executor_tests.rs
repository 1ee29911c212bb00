#![cfg(all(feature = "dev", feature = "cpu"))]
//! Tests for the parallel scan pass.
//!
//! The parallel pass must be indistinguishable from the sequential one for
//! every mode, including series long enough to be split across workers.

use fastZerocross::internals::engine::executor::{scan_pass_parallel, MIN_SEGMENTS_PER_TASK};
use zerocross::internals::engine::executor::{CrossingExecutor, CrossingMode};

fn noisy_wave(n: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.01).collect();
    let y: Vec<f64> = x
        .iter()
        .enumerate()
        .map(|(i, &v)| (5.0 * v).sin() + if i % 97 == 0 { 0.0 } else { 0.01 })
        .collect();
    (x, y)
}

/// Test parallel and sequential passes agree on long series.
#[test]
fn test_parallel_matches_sequential() {
    let (x, y) = noisy_wave(10 * MIN_SEGMENTS_PER_TASK + 7);

    for mode in [CrossingMode::All, CrossingMode::First, CrossingMode::Last] {
        let sequential = CrossingExecutor::scan_pass(&x, &y, mode);
        let parallel = scan_pass_parallel(&x, &y, mode);
        assert_eq!(parallel, sequential, "mode {mode}");
    }
}

/// Test the parallel pass on short series.
#[test]
fn test_parallel_short_series() {
    let empty: [f64; 0] = [];
    assert!(scan_pass_parallel(&empty, &empty, CrossingMode::All).is_empty());
    assert!(scan_pass_parallel(&[1.0], &[0.0], CrossingMode::First).is_empty());

    let r = scan_pass_parallel(&[0.0, 1.0, 2.0, 3.0], &[-2.0, 2.0, -2.0, 2.0], CrossingMode::All);
    assert_eq!(r.xs(), vec![0.5, 1.5, 2.5]);
}

/// Test the parallel pass plugs into the core executor.
#[test]
fn test_parallel_as_custom_pass() {
    let (x, y) = noisy_wave(5000);
    let result = CrossingExecutor::run(&x, &y, CrossingMode::Last, Some(scan_pass_parallel::<f64>));

    assert_eq!(result, CrossingExecutor::scan_pass(&x, &y, CrossingMode::Last));
}
