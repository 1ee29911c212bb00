//! Tests for the batch adapter.
//!
//! These tests verify:
//! - Building the batch processor and validating its configuration
//! - Sorting and close-up restriction before the scan
//! - Reuse of one processor across series
//!
//! ## Test Organization
//!
//! 1. **Basic Scans** - modes, reports
//! 2. **Sorting** - sort_input on and off
//! 3. **Close-up** - x_range restriction
//! 4. **Validation** - invalid input and configuration

use approx::assert_relative_eq;

use zerocross::prelude::*;

// ============================================================================
// Basic Scan Tests
// ============================================================================

/// Test the default batch processor reports every crossing.
#[test]
fn test_batch_default_all() {
    let finder = ZeroCrossing::new().adapter(Batch).build().unwrap();
    let report = finder.find(&[0.0, 1.0, 2.0, 3.0], &[-2.0, 2.0, -2.0, 2.0]).unwrap();

    assert_eq!(finder.mode(), All);
    assert_eq!(report.mode, All);
    assert_eq!(report.xs(), vec![0.5, 1.5, 2.5]);
}

/// Test FIRST and LAST through the batch adapter.
#[test]
fn test_batch_first_last() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [-2.0, 2.0, -2.0, 2.0];

    let first = ZeroCrossing::new().mode(First).adapter(Batch).build().unwrap();
    let last = ZeroCrossing::new().mode(Last).adapter(Batch).build().unwrap();

    assert_eq!(first.find(&x, &y).unwrap().xs(), vec![0.5]);
    assert_eq!(last.find(&x, &y).unwrap().xs(), vec![2.5]);
}

/// Test setters on the batch builder itself.
#[test]
fn test_batch_adapter_setters() {
    let finder = ZeroCrossing::new()
        .adapter(Batch)
        .mode(Last)
        .x_range(0.0, 2.0)
        .build()
        .unwrap();

    let report = finder.find(&[0.0, 1.0, 2.0, 3.0], &[-2.0, 2.0, -2.0, 2.0]).unwrap();
    assert_eq!(report.xs(), vec![1.5]);
}

/// Test one processor can scan several series.
#[test]
fn test_batch_reuse() {
    let finder = ZeroCrossing::new().adapter(Batch).build().unwrap();

    let a = finder.find(&[0.0, 1.0], &[-1.0, 1.0]).unwrap();
    let b = finder.find(&[0.0, 1.0], &[1.0, 2.0]).unwrap();

    assert_eq!(a.xs(), vec![0.5]);
    assert!(!b.has_crossings());
}

/// Test scanning an existing series.
#[test]
fn test_batch_find_series() {
    let s = Series::new(vec![0.0, 4.0], vec![-1.0, 3.0]).unwrap();
    let finder = ZeroCrossing::new().adapter(Batch).build().unwrap();

    let report = finder.find_series(&s);
    assert_relative_eq!(report.xs()[0], 1.0);
    assert_eq!(report.brackets, vec![(0.0, 4.0)]);
}

/// Test empty and single-sample input yield an empty report.
#[test]
fn test_batch_short_input() {
    let finder = ZeroCrossing::new().adapter(Batch).build().unwrap();

    let empty = finder.find(&[], &[]).unwrap();
    assert_eq!(empty.n_points, 0);
    assert_eq!(empty.x_bounds, None);
    assert!(!empty.has_crossings());

    let one = finder.find(&[1.0], &[0.0]).unwrap();
    assert!(!one.has_crossings());
}

// ============================================================================
// Sorting Tests
// ============================================================================

/// Test descending x is rejected by default.
#[test]
fn test_batch_unsorted_rejected() {
    let finder = ZeroCrossing::new().adapter(Batch).build().unwrap();
    let err = finder.find(&[0.0, 2.0, 1.0], &[1.0, -1.0, 1.0]).unwrap_err();

    assert!(matches!(err, ZeroCrossError::UnsortedInput { index: 2, .. }));
}

/// Test sort_input reorders samples before scanning.
#[test]
fn test_batch_sort_input() {
    let finder = ZeroCrossing::new().sort_input().adapter(Batch).build().unwrap();
    let report = finder.find(&[3.0, 0.0, 2.0, 1.0], &[2.0, -2.0, -2.0, 2.0]).unwrap();

    assert_eq!(report.xs(), vec![0.5, 1.5, 2.5]);
}

/// Test sorting matches scanning pre-sorted data.
#[test]
fn test_batch_sort_equivalence() {
    let sorted = ZeroCrossing::new().adapter(Batch).build().unwrap();
    let sorting = ZeroCrossing::new().adapter(Batch).sort_input(true).build().unwrap();

    let x = [0.0, 0.5, 1.0, 1.5, 2.0];
    let y = [1.0, -0.5, 0.0, 0.25, -1.0];
    let x_rev: Vec<f64> = x.iter().rev().copied().collect();
    let y_rev: Vec<f64> = y.iter().rev().copied().collect();

    assert_eq!(
        sorted.find(&x, &y).unwrap(),
        sorting.find(&x_rev, &y_rev).unwrap()
    );
}

// ============================================================================
// Close-up Tests
// ============================================================================

/// Test x_range hides crossings outside the range.
#[test]
fn test_batch_x_range() {
    let finder = ZeroCrossing::new().x_range(1.0, 3.0).adapter(Batch).build().unwrap();
    let report = finder
        .find(&[0.0, 1.0, 2.0, 3.0, 4.0], &[1.0, -1.0, 1.0, -1.0, 1.0])
        .unwrap();

    assert_eq!(report.n_points, 3);
    assert_eq!(report.x_bounds, Some((1.0, 3.0)));
    assert_eq!(report.xs(), vec![1.5, 2.5]);
}

/// Test a range with no samples yields an empty report.
#[test]
fn test_batch_x_range_empty() {
    let finder = ZeroCrossing::new().x_range(0.2, 0.8).adapter(Batch).build().unwrap();
    let report = finder.find(&[0.0, 1.0], &[-1.0, 1.0]).unwrap();

    assert_eq!(report.n_points, 0);
    assert!(!report.has_crossings());
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test invalid input is rejected.
#[test]
fn test_batch_invalid_input() {
    let finder = ZeroCrossing::new().adapter(Batch).build().unwrap();

    assert!(matches!(
        finder.find(&[0.0, 1.0], &[0.0]),
        Err(ZeroCrossError::MismatchedInputs { .. })
    ));
    assert!(matches!(
        finder.find(&[0.0, 1.0], &[f64::NAN, 1.0]),
        Err(ZeroCrossError::InvalidNumericValue(_))
    ));
}

/// Test an inverted range is rejected at build time.
#[test]
fn test_batch_invalid_range() {
    let res = ZeroCrossing::<f64>::new().x_range(3.0, 1.0).adapter(Batch).build();
    assert!(matches!(res, Err(ZeroCrossError::InvalidRange { .. })));
}
