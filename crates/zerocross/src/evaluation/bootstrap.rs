//! Percentile bootstrap intervals for per-x means.
//!
//! ## Purpose
//!
//! A sweep usually runs several seeds at every parameter value, and the
//! quantity of interest is the paired difference between two variants. This
//! module reduces those replicates to a mean per x together with a
//! percentile bootstrap confidence interval, giving the curve whose zero
//! crossing is estimated and the band drawn around it.
//!
//! ## Design notes
//!
//! * **Resampling**: Each estimate draws `resamples` samples of size `n` with
//!   replacement and takes their means.
//! * **Percentiles**: Bounds are the `(1 - level) / 2` and `(1 + level) / 2`
//!   quantiles of the resampled means, interpolated linearly.
//! * **Reproducibility**: Every group is resampled from a fresh generator
//!   seeded with `seed`, so a group's interval depends only on its own values
//!   and groups can be evaluated in any order or in parallel.
//!
//! ## Invariants
//!
//! * `lower <= upper` for every estimate.
//! * Band x-values are strictly ascending, one entry per distinct x.
//! * Identical inputs and seed produce identical intervals.
//!
//! ## Non-goals
//!
//! * This module does not pair replicates; callers supply the differences.
//! * This module does not provide bias-corrected (BCa) intervals.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Internal dependencies
use crate::math::quantile::{count_to_float, mean, quantile_sorted};
use crate::primitives::errors::ZeroCrossError;
use crate::primitives::sorting::sort_by_x;

// ============================================================================
// Configuration
// ============================================================================

/// Percentile bootstrap configuration for the mean of replicate values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BootstrapInterval<T> {
    /// Desired coverage (e.g., 0.95 for 95% intervals).
    pub level: T,

    /// Number of resampled means per estimate.
    pub resamples: usize,

    /// Generator seed shared by every group.
    pub seed: u64,
}

impl<T: Float> Default for BootstrapInterval<T> {
    fn default() -> Self {
        Self::new(T::from(0.95).unwrap_or_else(T::nan))
    }
}

impl<T: Float> BootstrapInterval<T> {
    /// Resamples drawn when none are specified.
    pub const DEFAULT_RESAMPLES: usize = 2000;

    /// Intervals at `level` coverage, with default resamples and seed 0.
    pub fn new(level: T) -> Self {
        Self {
            level,
            resamples: Self::DEFAULT_RESAMPLES,
            seed: 0,
        }
    }

    /// Set the number of resamples.
    pub fn resamples(mut self, resamples: usize) -> Self {
        self.resamples = resamples;
        self
    }

    /// Set the generator seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the level and resample count.
    pub fn validate(&self) -> Result<(), ZeroCrossError> {
        if !(self.level > T::zero() && self.level < T::one()) {
            return Err(ZeroCrossError::InvalidLevel(
                self.level.to_f64().unwrap_or(f64::NAN),
            ));
        }
        if self.resamples == 0 {
            return Err(ZeroCrossError::InvalidResamples(self.resamples));
        }
        Ok(())
    }

    // ========================================================================
    // Estimation
    // ========================================================================

    /// Mean of `values` with its percentile bootstrap interval.
    pub fn estimate(&self, values: &[T]) -> Result<MeanInterval<T>, ZeroCrossError> {
        self.validate()?;
        check_values(values)?;
        if values.is_empty() {
            return Err(ZeroCrossError::InvalidInput(
                "bootstrap needs at least one value".into(),
            ));
        }
        Ok(self.estimate_unchecked(values))
    }

    /// Per-x means and intervals of replicate `values` observed at `x`.
    ///
    /// `x` may be in any order and repeats once per replicate; the band has
    /// one entry per distinct x, ascending.
    pub fn band(&self, x: &[T], values: &[T]) -> Result<MeanBand<T>, ZeroCrossError> {
        self.validate()?;
        check_replicates(x, values)?;

        let groups = group_replicates(x, values);
        let band = MeanBand::from_estimates(
            groups
                .iter()
                .map(|(xg, vals)| (*xg, self.estimate_unchecked(vals))),
        );

        log::debug!(
            "bootstrap band: {} value(s) over {} x-value(s), {} resamples",
            values.len(),
            band.len(),
            self.resamples
        );

        Ok(band)
    }

    /// Estimate without validation; `values` must be non-empty and finite.
    #[doc(hidden)]
    pub fn estimate_unchecked(&self, values: &[T]) -> MeanInterval<T> {
        let n = values.len();
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut means: Vec<T> = (0..self.resamples)
            .map(|_| {
                let sum = (0..n).fold(T::zero(), |acc, _| acc + values[rng.random_range(0..n)]);
                sum / count_to_float(n)
            })
            .collect();
        means.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let two = T::one() + T::one();
        let tail = (T::one() - self.level) / two;

        MeanInterval {
            n,
            mean: mean(values),
            lower: quantile_sorted(&means, tail),
            upper: quantile_sorted(&means, T::one() - tail),
        }
    }
}

// ============================================================================
// Output Types
// ============================================================================

/// Mean of a group of replicates and its interval.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeanInterval<T> {
    /// Number of replicates.
    pub n: usize,

    /// Sample mean.
    pub mean: T,

    /// Lower interval bound.
    pub lower: T,

    /// Upper interval bound.
    pub upper: T,
}

impl<T: Float> MeanInterval<T> {
    /// Check whether `value` lies inside the interval.
    pub fn contains(&self, value: T) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Per-x means with interval bounds, one entry per distinct x.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeanBand<T> {
    /// Distinct x-values, ascending.
    pub x: Vec<T>,

    /// Replicates per x.
    pub n: Vec<usize>,

    /// Mean per x.
    pub mean: Vec<T>,

    /// Lower bound per x.
    pub lower: Vec<T>,

    /// Upper bound per x.
    pub upper: Vec<T>,
}

impl<T: Float> MeanBand<T> {
    /// Assemble a band from `(x, estimate)` pairs in ascending x.
    pub fn from_estimates<I>(estimates: I) -> Self
    where
        I: IntoIterator<Item = (T, MeanInterval<T>)>,
    {
        let mut band = Self {
            x: Vec::new(),
            n: Vec::new(),
            mean: Vec::new(),
            lower: Vec::new(),
            upper: Vec::new(),
        };
        for (x, est) in estimates {
            band.x.push(x);
            band.n.push(est.n);
            band.mean.push(est.mean);
            band.lower.push(est.lower);
            band.upper.push(est.upper);
        }
        band
    }

    /// Number of distinct x-values.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if the band is empty.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Estimate at position `i`.
    pub fn get(&self, i: usize) -> Option<(T, MeanInterval<T>)> {
        (i < self.len()).then(|| {
            (
                self.x[i],
                MeanInterval {
                    n: self.n[i],
                    mean: self.mean[i],
                    lower: self.lower[i],
                    upper: self.upper[i],
                },
            )
        })
    }

    /// x-values whose interval excludes zero.
    pub fn excludes_zero(&self) -> Vec<T> {
        (0..self.len())
            .filter(|&i| self.lower[i] > T::zero() || self.upper[i] < T::zero())
            .map(|i| self.x[i])
            .collect()
    }
}

// ============================================================================
// Grouping
// ============================================================================

/// Check replicate columns: equal lengths, finite values.
pub fn check_replicates<T: Float>(x: &[T], values: &[T]) -> Result<(), ZeroCrossError> {
    if x.len() != values.len() {
        return Err(ZeroCrossError::MismatchedInputs {
            x_len: x.len(),
            y_len: values.len(),
        });
    }
    check_values(x)?;
    check_values(values)
}

fn check_values<T: Float>(values: &[T]) -> Result<(), ZeroCrossError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(ZeroCrossError::InvalidNumericValue(format!(
            "value[{}]={}",
            i,
            values[i].to_f64().unwrap_or(f64::NAN)
        ))),
        None => Ok(()),
    }
}

/// Group `values` by equal `x`, ascending; replicates keep their input order.
pub fn group_replicates<T: Float>(x: &[T], values: &[T]) -> Vec<(T, Vec<T>)> {
    let sorted = sort_by_x(x, values);
    let mut groups: Vec<(T, Vec<T>)> = Vec::new();

    for (&xi, &vi) in sorted.x.iter().zip(sorted.y.iter()) {
        match groups.last_mut() {
            Some((xg, vals)) if *xg == xi => vals.push(vi),
            _ => groups.push((xi, vec![vi])),
        }
    }

    groups
}
