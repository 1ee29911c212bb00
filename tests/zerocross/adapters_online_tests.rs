//! Tests for the online adapter.
//!
//! ## Test Organization
//!
//! 1. **Point Updates** - add_point, add_points
//! 2. **Equivalence** - matches batch scans
//! 3. **Validation** - ordering, non-finite values, unsupported features
//! 4. **State** - counters, reset

use approx::assert_relative_eq;

use zerocross::prelude::*;

// ============================================================================
// Point Update Tests
// ============================================================================

/// Test a crossing is reported when its segment completes.
#[test]
fn test_online_add_point() {
    let mut online = ZeroCrossing::new().adapter(Online).build().unwrap();

    assert!(online.add_point(0.0, 2.0).unwrap().is_none());
    assert!(online.add_point(1.0, 1.0).unwrap().is_none());

    let c = online.add_point(2.0, -1.0).unwrap().unwrap();
    assert_relative_eq!(c.x, 1.5);
    assert_eq!(c.segment, 1);
    assert_eq!(c.kind, Interpolated);
}

/// Test FIRST settles after its crossing.
#[test]
fn test_online_first_settles() {
    let mut online = ZeroCrossing::new().mode(First).adapter(Online).build().unwrap();

    online.add_point(0.0, -1.0).unwrap();
    assert!(online.add_point(1.0, 1.0).unwrap().is_some());
    assert!(online.is_settled());
    assert!(online.add_point(2.0, -1.0).unwrap().is_none());

    assert_eq!(online.result().xs(), vec![0.5]);
}

/// Test add_points counts completed crossings.
#[test]
fn test_online_add_points() {
    let mut online = ZeroCrossing::new().adapter(Online).build().unwrap();

    let n = online
        .add_points(&[0.0, 1.0, 2.0, 3.0], &[-2.0, 2.0, -2.0, 2.0])
        .unwrap();

    assert_eq!(n, 3);
    assert_eq!(online.samples_seen(), 4);
}

// ============================================================================
// Equivalence Tests
// ============================================================================

/// Test point-by-point detection matches batch for every mode.
#[test]
fn test_online_matches_batch() {
    let x: Vec<f64> = (0..60).map(|i| i as f64 * 0.25).collect();
    let y: Vec<f64> = x.iter().map(|&v| v.sin() * (0.2 * v).cos()).collect();

    for mode in [All, First, Last] {
        let batch = ZeroCrossing::new().mode(mode).adapter(Batch).build().unwrap();
        let mut online = ZeroCrossing::new().mode(mode).adapter(Online).build().unwrap();

        for (&xi, &yi) in x.iter().zip(&y) {
            online.add_point(xi, yi).unwrap();
        }

        assert_eq!(online.result(), batch.find(&x, &y).unwrap().crossings, "mode {mode}");
    }
}

/// Test points outside x_range are skipped.
#[test]
fn test_online_x_range() {
    let mut online = ZeroCrossing::new().x_range(1.0, 2.0).adapter(Online).build().unwrap();

    online.add_points(&[0.0, 1.0, 2.0, 3.0], &[1.0, -1.0, 1.0, -1.0]).unwrap();

    assert_eq!(online.samples_seen(), 4);
    assert_eq!(online.samples_in_range(), 2);
    assert_eq!(online.result().xs(), vec![1.5]);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test a point before the previous one is rejected.
#[test]
fn test_online_rejects_descending() {
    let mut online = ZeroCrossing::new().adapter(Online).build().unwrap();
    online.add_point(1.0, 1.0).unwrap();

    assert!(matches!(
        online.add_point(0.0, -1.0),
        Err(ZeroCrossError::UnsortedInput { index: 1, .. })
    ));
}

/// Test a batch with a descending point is rejected without adding any of it.
#[test]
fn test_online_add_points_atomic() {
    let mut online = ZeroCrossing::new().adapter(Online).build().unwrap();

    let err = online.add_points(&[0.0, 1.0, 0.5], &[-1.0, 1.0, 1.0]).unwrap_err();
    assert!(matches!(err, ZeroCrossError::UnsortedInput { index: 2, .. }));
    assert_eq!(online.samples_seen(), 0);
    assert!(online.result().is_empty());

    // A batch starting below the last accepted point is rejected as a whole too
    online.add_points(&[0.0, 1.0], &[-1.0, 1.0]).unwrap();
    assert!(online.add_points(&[2.0, 0.5], &[-1.0, 1.0]).is_err());
    assert!(online.add_points(&[0.5, 2.0], &[-1.0, 1.0]).is_err());
    assert_eq!(online.samples_seen(), 2);
    assert_eq!(online.result().xs(), vec![0.5]);
}

/// Test non-finite points are rejected.
#[test]
fn test_online_rejects_non_finite() {
    let mut online = ZeroCrossing::new().adapter(Online).build().unwrap();
    assert!(matches!(
        online.add_point(f64::NAN, 1.0),
        Err(ZeroCrossError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        online.add_points(&[0.0], &[]),
        Err(ZeroCrossError::MismatchedInputs { .. })
    ));
}

/// Test sort_input is not supported.
#[test]
fn test_online_sort_input_unsupported() {
    let res = ZeroCrossing::<f64>::new().sort_input().adapter(Online).build();
    assert!(matches!(
        res,
        Err(ZeroCrossError::UnsupportedFeature {
            adapter: "Online",
            ..
        })
    ));
}

// ============================================================================
// State Tests
// ============================================================================

/// Test reset clears state.
#[test]
fn test_online_reset() {
    let mut online = ZeroCrossing::new().mode(First).adapter(Online).build().unwrap();
    online.add_points(&[0.0, 1.0], &[-1.0, 1.0]).unwrap();
    assert!(online.is_settled());

    online.reset();

    assert!(!online.is_settled());
    assert_eq!(online.samples_seen(), 0);
    assert!(online.result().is_empty());
}
