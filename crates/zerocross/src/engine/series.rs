//! Validated, immutable sampled curves.
//!
//! ## Purpose
//!
//! A [`Series`] is the input of every scan: (x, y) samples ordered ascending
//! by x with finite values. Its constructors are the only way to obtain one,
//! so a scan over a `Series` never has to re-check its preconditions.
//!
//! ## Design notes
//!
//! * **Immutable**: No method mutates a series; restricting returns a new one.
//! * **Columnar**: x and y are stored as separate vectors, matching the column
//!   layout of the tables they are read from.
//! * **Duplicates**: Equal neighbouring x-values are accepted.
//!
//! ## Invariants
//!
//! * `x.len() == y.len()`.
//! * All values are finite.
//! * x is non-decreasing.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::ZeroCrossError;
use crate::primitives::sorting::sort_by_x;
use crate::primitives::window::XRange;

// ============================================================================
// Sample
// ============================================================================

/// A single (x, y) observation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample<T> {
    /// Independent variable.
    pub x: T,

    /// Sampled value.
    pub y: T,
}

impl<T> Sample<T> {
    /// Create a sample.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Sample<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Series
// ============================================================================

/// Ascending-by-x sequence of finite samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T> {
    x: Vec<T>,
    y: Vec<T>,
}

impl<T: Float> Default for Series<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Float> Series<T> {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Series with no samples.
    pub fn empty() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    /// Build a series from owned columns that are already sorted by x.
    pub fn new(x: Vec<T>, y: Vec<T>) -> Result<Self, ZeroCrossError> {
        Validator::validate_inputs(&x, &y)?;
        Validator::validate_sorted(&x)?;
        Ok(Self { x, y })
    }

    /// Build a series from borrowed columns that are already sorted by x.
    pub fn from_slices(x: &[T], y: &[T]) -> Result<Self, ZeroCrossError> {
        Validator::validate_inputs(x, y)?;
        Validator::validate_sorted(x)?;
        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
        })
    }

    /// Build a series from columns in any order, sorting by x.
    ///
    /// The sort is stable, so samples sharing an x keep their input order.
    pub fn from_unsorted(x: &[T], y: &[T]) -> Result<Self, ZeroCrossError> {
        Validator::validate_inputs(x, y)?;
        let sorted = sort_by_x(x, y);
        Ok(Self {
            x: sorted.x,
            y: sorted.y,
        })
    }

    /// Build a series from samples already sorted by x.
    pub fn from_samples(samples: &[Sample<T>]) -> Result<Self, ZeroCrossError> {
        let (x, y): (Vec<T>, Vec<T>) = samples.iter().map(|s| (s.x, s.y)).unzip();
        Self::new(x, y)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if the series has no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Sorted x-values.
    #[inline]
    pub fn x(&self) -> &[T] {
        &self.x
    }

    /// y-values aligned with [`Series::x`].
    #[inline]
    pub fn y(&self) -> &[T] {
        &self.y
    }

    /// Sample at index `i`.
    pub fn sample(&self, i: usize) -> Option<Sample<T>> {
        Some(Sample::new(*self.x.get(i)?, *self.y.get(i)?))
    }

    /// Iterate over the samples in ascending x-order.
    pub fn samples(&self) -> impl ExactSizeIterator<Item = Sample<T>> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| Sample::new(x, y))
    }

    /// Smallest and largest x, or `None` for an empty series.
    pub fn x_bounds(&self) -> Option<(T, T)> {
        Some((*self.x.first()?, *self.x.last()?))
    }

    /// Number of segments `[i, i + 1]`.
    #[inline]
    pub fn segments(&self) -> usize {
        self.len().saturating_sub(1)
    }

    // ========================================================================
    // Derived Series
    // ========================================================================

    /// Keep only samples with `range.min <= x <= range.max`.
    pub fn restrict(&self, range: &XRange<T>) -> Self {
        let (start, end) = range.index_bounds(&self.x);
        Self {
            x: self.x[start..end].to_vec(),
            y: self.y[start..end].to_vec(),
        }
    }

    /// Split the series into its columns.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.x, self.y)
    }
}
