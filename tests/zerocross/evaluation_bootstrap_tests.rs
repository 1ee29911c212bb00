//! Tests for bootstrap intervals and per-x bands.
//!
//! These tests verify:
//! - Reproducibility under a fixed seed
//! - Ordering of the bounds around the mean
//! - Grouping of replicates by x
//! - Configuration and input validation
//!
//! ## Test Organization
//!
//! 1. **Estimates** - single groups of replicates
//! 2. **Bands** - grouping and the mean curve
//! 3. **Validation** - invalid levels, resamples and values

use approx::assert_relative_eq;

use zerocross::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// Paired differences for 8 seeds at each of 6 x-values, drifting upward.
fn replicates() -> (Vec<f64>, Vec<f64>) {
    let mut x = Vec::new();
    let mut d = Vec::new();
    for i in 0..6 {
        let xi = 0.002 * i as f64;
        for s in 0..8 {
            // Deterministic spread around a linear trend
            let jitter = ((s * 37 + i * 11) % 17) as f64 / 17.0 - 0.5;
            x.push(xi);
            d.push(-0.5 + 0.2 * i as f64 + 0.3 * jitter);
        }
    }
    (x, d)
}

// ============================================================================
// Estimate Tests
// ============================================================================

/// Test the same seed gives identical intervals.
#[test]
fn test_estimate_deterministic() {
    let values = [0.3, -0.1, 0.8, 0.2, 0.5, -0.4, 0.9, 0.1];
    let boot = BootstrapInterval::new(0.95).resamples(1000).seed(42);

    let a = boot.estimate(&values).unwrap();
    let b = boot.estimate(&values).unwrap();
    assert_eq!(a, b);

    let other = boot.seed(43).estimate(&values).unwrap();
    assert_eq!(other.mean, a.mean);
    assert_ne!((other.lower, other.upper), (a.lower, a.upper));
}

/// Test lower <= mean <= upper for symmetric data.
#[test]
fn test_estimate_ordering() {
    let values = [-2.0, -1.0, 0.0, 1.0, 2.0, -1.5, 1.5, -0.5, 0.5];
    let est = BootstrapInterval::default().estimate(&values).unwrap();

    assert_eq!(est.n, values.len());
    assert_relative_eq!(est.mean, 0.0);
    assert!(est.lower <= est.mean && est.mean <= est.upper);
    assert!(est.lower >= -2.0 && est.upper <= 2.0);
    assert!(est.contains(0.0));
}

/// Test a wider level gives a wider interval.
#[test]
fn test_estimate_level_widens() {
    let values = [1.0, 4.0, 2.0, 8.0, 5.0, 7.0, 3.0, 6.0];
    let narrow = BootstrapInterval::new(0.5).seed(1).estimate(&values).unwrap();
    let wide = BootstrapInterval::new(0.99).seed(1).estimate(&values).unwrap();

    assert!(wide.lower <= narrow.lower);
    assert!(wide.upper >= narrow.upper);
}

/// Test constant and single values collapse the interval.
#[test]
fn test_estimate_degenerate() {
    let constant = BootstrapInterval::new(0.95).estimate(&[0.25; 5]).unwrap();
    assert_eq!((constant.lower, constant.mean, constant.upper), (0.25, 0.25, 0.25));

    let single = BootstrapInterval::new(0.95).estimate(&[-3.0]).unwrap();
    assert_eq!((single.lower, single.upper), (-3.0, -3.0));
}

// ============================================================================
// Band Tests
// ============================================================================

/// Test replicates are grouped by x in ascending order.
#[test]
fn test_band_groups() {
    let x = [2.0, 1.0, 2.0, 1.0, 3.0];
    let v = [4.0, -1.0, 6.0, -3.0, 1.0];

    let band = BootstrapInterval::new(0.9).resamples(200).band(&x, &v).unwrap();

    assert_eq!(band.len(), 3);
    assert_eq!(band.x, vec![1.0, 2.0, 3.0]);
    assert_eq!(band.n, vec![2, 2, 1]);
    assert_eq!(band.mean, vec![-2.0, 5.0, 1.0]);

    let (x1, est) = band.get(1).unwrap();
    assert_eq!(x1, 2.0);
    assert!(est.lower >= 4.0 && est.upper <= 6.0);
    assert!(band.get(3).is_none());
}

/// Test bands are reproducible and bracket the mean at every x.
#[test]
fn test_band_deterministic_and_ordered() {
    let (x, d) = replicates();
    let boot = BootstrapInterval::new(0.95).seed(0);

    let band = boot.band(&x, &d).unwrap();
    assert_eq!(band, boot.band(&x, &d).unwrap());

    for i in 0..band.len() {
        assert!(band.lower[i] <= band.upper[i]);
        assert!(band.lower[i] <= band.mean[i] + 1e-12);
        assert!(band.mean[i] <= band.upper[i] + 1e-12);
    }
}

/// Test a group's interval depends only on its own replicates.
#[test]
fn test_band_groups_independent() {
    let (x, d) = replicates();
    let boot = BootstrapInterval::new(0.95).resamples(500).seed(9);

    let band = boot.band(&x, &d).unwrap();
    let first_group = boot.estimate(&d[..8]).unwrap();

    assert_eq!(band.get(0).unwrap().1, first_group);
}

/// Test the mean curve of a band can be scanned for its crossing.
#[test]
fn test_band_mean_crossing() {
    let (x, d) = replicates();
    let band = BootstrapInterval::new(0.95).band(&x, &d).unwrap();

    let curve = Series::from_slices(&band.x, &band.mean).unwrap();
    let first = find_crossings(&curve, First);

    assert_eq!(first.len(), 1);
    let c = first.first().unwrap();
    assert!(band.mean[c.segment] < 0.0 && band.mean[c.segment + 1] > 0.0);
}

/// Test an empty band.
#[test]
fn test_band_empty() {
    let band = BootstrapInterval::<f64>::new(0.95).band(&[], &[]).unwrap();
    assert!(band.is_empty());
    assert!(band.excludes_zero().is_empty());
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test invalid levels and resample counts are rejected.
#[test]
fn test_invalid_configuration() {
    for level in [0.0, 1.0, -0.5, f64::NAN] {
        assert!(matches!(
            BootstrapInterval::new(level).estimate(&[1.0]),
            Err(ZeroCrossError::InvalidLevel(_))
        ));
    }
    assert_eq!(
        BootstrapInterval::new(0.95).resamples(0).estimate(&[1.0]),
        Err(ZeroCrossError::InvalidResamples(0))
    );
}

/// Test invalid values are rejected.
#[test]
fn test_invalid_values() {
    let boot = BootstrapInterval::new(0.95);

    assert!(matches!(
        boot.estimate(&[]),
        Err(ZeroCrossError::InvalidInput(_))
    ));
    assert!(matches!(
        boot.estimate(&[1.0, f64::NAN]),
        Err(ZeroCrossError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        boot.band(&[0.0, 1.0], &[1.0]),
        Err(ZeroCrossError::MismatchedInputs { .. })
    ));
    assert!(matches!(
        boot.band(&[0.0, f64::INFINITY], &[1.0, 2.0]),
        Err(ZeroCrossError::InvalidNumericValue(_))
    ));
}
