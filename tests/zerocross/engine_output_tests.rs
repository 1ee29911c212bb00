//! Tests for crossing results and reports.
//!
//! These tests verify:
//! - The mode-shaped result and its accessors
//! - The `find_crossings` entry point and its testable properties
//! - Report construction and `Display` output
//!
//! ## Test Organization
//!
//! 1. **find_crossings** - modes, exact zeros, short series
//! 2. **Properties** - ordering, bounds, idempotence
//! 3. **Reports** - brackets, Display

use approx::assert_relative_eq;

use zerocross::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn series(x: &[f64], y: &[f64]) -> Series<f64> {
    Series::from_slices(x, y).unwrap()
}

// ============================================================================
// find_crossings Tests
// ============================================================================

/// Test a single interpolated crossing.
#[test]
fn test_single_crossing() {
    let s = series(&[0.0, 1.0, 2.0], &[-1.0, -0.5, 0.5]);
    let result = find_crossings(&s, All);

    assert_eq!(result.len(), 1);
    assert_relative_eq!(result.xs()[0], 1.5);
    assert_eq!(result.first().map(|c| c.kind), Some(Interpolated));
}

/// Test all three modes over an alternating series.
#[test]
fn test_modes() {
    let s = series(&[0.0, 1.0, 2.0, 3.0], &[-2.0, 2.0, -2.0, 2.0]);

    assert_eq!(find_crossings(&s, All).xs(), vec![0.5, 1.5, 2.5]);
    assert_eq!(find_crossings(&s, First).xs(), vec![0.5]);
    assert_eq!(find_crossings(&s, Last).xs(), vec![2.5]);
}

/// Test the result shape follows the mode.
#[test]
fn test_result_shape() {
    let s = series(&[0.0, 1.0], &[1.0, 2.0]);

    assert_eq!(find_crossings(&s, All), CrossingResult::All(vec![]));
    assert_eq!(find_crossings(&s, First), CrossingResult::Single(None));
    assert_eq!(find_crossings(&s, Last), CrossingResult::Single(None));
}

/// Test an exact zero is reported at its own x, once.
#[test]
fn test_exact_zero() {
    let s = series(&[0.0, 1.0, 2.0], &[-1.0, 0.0, 1.0]);
    let result = find_crossings(&s, All);

    assert_eq!(result.len(), 1);
    let c = result.first().copied().unwrap();
    assert_eq!(c.x, 1.0);
    assert_eq!(c.kind, Exact);
    assert_eq!(c.segment, 1);
}

/// Test a touch that does not change sign still reports the zero sample.
#[test]
fn test_exact_zero_touch() {
    let s = series(&[0.0, 1.0, 2.0], &[1.0, 0.0, 1.0]);
    assert_eq!(find_crossings(&s, All).xs(), vec![1.0]);
}

/// Test a run of zeros reports every zero except the last sample.
#[test]
fn test_zero_run() {
    let s = series(&[0.0, 1.0, 2.0, 3.0], &[0.0, 0.0, 0.0, 0.0]);
    assert_eq!(find_crossings(&s, All).xs(), vec![0.0, 1.0, 2.0]);
}

/// Test a trailing zero is never reported.
#[test]
fn test_trailing_zero() {
    let s = series(&[0.0, 1.0, 2.0], &[2.0, 1.0, 0.0]);
    assert!(find_crossings(&s, All).is_empty());
    assert_eq!(find_crossings(&s, Last), CrossingResult::Single(None));
}

/// Test short series have no crossings.
#[test]
fn test_short_series() {
    let empty: Series<f64> = Series::empty();
    assert!(find_crossings(&empty, All).is_empty());

    let one = series(&[1.0], &[0.0]);
    assert!(find_crossings(&one, All).is_empty());
    assert!(find_crossings(&one, First).is_empty());
}

/// Test tiny opposite values whose product underflows.
#[test]
fn test_tiny_magnitudes() {
    let s = series(&[0.0, 1.0], &[-1e-200, 1e-200]);
    let result = find_crossings(&s, All);

    assert_eq!(result.len(), 1);
    assert_relative_eq!(result.xs()[0], 0.5);
}

/// Test duplicate x-values with a sign change.
#[test]
fn test_duplicate_x() {
    let s = series(&[0.0, 1.0, 1.0, 2.0], &[1.0, 1.0, -1.0, -1.0]);
    assert_eq!(find_crossings(&s, All).xs(), vec![1.0]);
}

// ============================================================================
// Property Tests
// ============================================================================

/// Test crossings are ordered and lie within their segment.
#[test]
fn test_properties_ordered_and_bounded() {
    let x: Vec<f64> = (0..200).map(|i| i as f64 * 0.05).collect();
    let y: Vec<f64> = x.iter().map(|&v| (3.0 * v).sin() - 0.2).collect();
    let s = series(&x, &y);

    let result = find_crossings(&s, All);
    assert!(!result.is_empty());

    for c in &result {
        let (lo, hi) = c.bracket(s.x()).unwrap();
        assert!(lo <= c.x && c.x <= hi);
    }
    assert!(result.as_slice().windows(2).all(|w| w[0].x <= w[1].x));

    // FIRST and LAST agree with the ends of ALL
    assert_eq!(find_crossings(&s, First).first(), result.first());
    assert_eq!(find_crossings(&s, Last).first(), result.last());
}

/// Test scanning twice gives identical results.
#[test]
fn test_idempotent() {
    let s = series(&[0.0, 0.3, 0.9, 1.4], &[0.7, -0.2, 0.0, 0.4]);
    assert_eq!(find_crossings(&s, All), find_crossings(&s, All));
}

/// Test single precision.
#[test]
fn test_f32() {
    let s = Series::from_slices(&[0.0_f32, 2.0], &[-1.0, 1.0]).unwrap();
    assert_relative_eq!(find_crossings(&s, All).xs()[0], 1.0_f32);
}

// ============================================================================
// Report Tests
// ============================================================================

/// Test report brackets and summary fields.
#[test]
fn test_report_fields() {
    let s = series(&[0.0, 1.0, 2.0, 3.0, 4.0], &[-1.0, 1.0, 0.0, -2.0, -1.0]);
    let report = CrossingReport::new(&s, All, find_crossings(&s, All));

    assert_eq!(report.n_points, 5);
    assert_eq!(report.x_bounds, Some((0.0, 4.0)));
    assert!(report.has_crossings());
    assert_eq!(report.xs(), vec![0.5, 2.0]);
    assert_eq!(report.brackets, vec![(0.0, 1.0), (2.0, 3.0)]);
}

/// Test report Display lists every crossing.
#[test]
fn test_report_display() {
    let s = series(&[0.0, 1.0, 2.0, 3.0, 4.0], &[-1.0, 1.0, 0.0, -2.0, -1.0]);
    let text = CrossingReport::new(&s, All, find_crossings(&s, All)).to_string();

    assert!(text.starts_with("Summary:\n"));
    assert!(text.contains("  Data points: 5\n"));
    assert!(text.contains("  X range:     0.000000 .. 4.000000\n"));
    assert!(text.contains("  Mode:        all\n"));
    assert!(text.contains("Zero Crossings:"));
    assert!(text.contains(&"-".repeat(61)));
    assert!(text.contains("0.500000        0  interpolated     0.000000     1.000000"));
    assert!(text.contains("2.000000        2         exact     2.000000     3.000000"));
}

/// Test report Display without crossings.
#[test]
fn test_report_display_empty() {
    let s = series(&[0.0, 1.0], &[1.0, 2.0]);
    let text = CrossingReport::new(&s, First, find_crossings(&s, First)).to_string();

    assert!(text.contains("  Mode:        first\n"));
    assert!(text.contains("No sign-change zero-crossing detected."));
    assert!(!text.contains("Zero Crossings:"));
}
