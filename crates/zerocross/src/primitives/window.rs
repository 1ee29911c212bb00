//! Close-up windows over sorted x-values.
//!
//! A window narrows a series to an inclusive x-interval before scanning, so
//! that crossings outside a region of interest are never reported.

// External dependencies
use num_traits::Float;

/// Inclusive x-interval `[min, max]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XRange<T> {
    /// Lower bound (inclusive).
    pub min: T,

    /// Upper bound (inclusive).
    pub max: T,
}

impl<T: Float> XRange<T> {
    /// Create a range without validation; see `Validator::validate_range`.
    #[inline]
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Check whether `x` lies inside the range.
    #[inline]
    pub fn contains(&self, x: T) -> bool {
        x >= self.min && x <= self.max
    }

    /// Index bounds `[start, end)` of the samples inside the range.
    ///
    /// `x` must be sorted ascending.
    #[inline]
    pub fn index_bounds(&self, x: &[T]) -> (usize, usize) {
        let start = x.partition_point(|&xi| xi < self.min);
        let end = x.partition_point(|&xi| xi <= self.max);
        (start, end.max(start))
    }
}
