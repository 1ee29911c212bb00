//! Sorting utilities for sampled curves.
//!
//! ## Purpose
//!
//! This module orders (x, y) sample pairs by x so that a series read from an
//! unordered table can be scanned segment by segment.
//!
//! ## Design notes
//!
//! * **Stability**: Uses stable sorting to preserve the relative order of equal x-values.
//! * **Fast path**: Already sorted input is copied without sorting.
//!
//! ## Invariants
//!
//! * Sorted x-values are non-decreasing (for finite values).
//! * Each y-value stays paired with its x-value.
//!
//! ## Non-goals
//!
//! * This module does not validate finiteness (see the validator).
//! * This module does not restore the original order; crossings refer to sorted positions.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Data Structures
// ============================================================================

/// Sample pairs ordered by x-coordinate.
pub struct SortedData<T> {
    /// Sorted x-coordinates.
    pub x: Vec<T>,

    /// Y-coordinates reordered to match sorted x-coordinates.
    pub y: Vec<T>,
}

// ============================================================================
// Sorting Functions
// ============================================================================

/// Check whether x-values are non-decreasing.
#[inline]
pub fn is_sorted<T: Float>(x: &[T]) -> bool {
    x.windows(2).all(|w| w[0] <= w[1])
}

/// Sort sample pairs by x-coordinates in ascending order.
///
/// Only `(x, index)` tuples are sorted; y is gathered afterwards.
#[inline]
pub fn sort_by_x<T: Float>(x: &[T], y: &[T]) -> SortedData<T> {
    if is_sorted(x) {
        return SortedData {
            x: x.to_vec(),
            y: y.to_vec(),
        };
    }

    let mut pairs: Vec<(T, usize)> = x.iter().enumerate().map(|(i, &xi)| (xi, i)).collect();

    // Stable sort keeps duplicate x-values in table order
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    SortedData {
        x: pairs.iter().map(|p| p.0).collect(),
        y: pairs.iter().map(|p| y[p.1]).collect(),
    }
}
