//! Crossing records produced by a scan.
//!
//! ## Purpose
//!
//! A crossing is an estimated x-location where the piecewise-linear curve
//! through a series equals zero, tagged with the segment that produced it.
//!
//! ## Key concepts
//!
//! * **Exact**: A sample lands on zero; `segment` is that sample's index.
//! * **Interpolated**: Two neighbours have strictly opposite signs; `segment`
//!   is the left index `i` of the interval `[i, i + 1]`.
//!
//! ## Invariants
//!
//! * An interpolated `x` lies inside `[x[segment], x[segment + 1]]`.
//! * A segment yields at most one crossing.

// External dependencies
use num_traits::Float;

/// How a crossing was located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossingKind {
    /// The sample itself is exactly zero.
    Exact,

    /// Linear interpolation between two samples of opposite sign.
    Interpolated,
}

/// Estimated zero of a sampled curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Crossing<T> {
    /// Estimated x-location of the zero.
    pub x: T,

    /// Index of the segment (or exact sample) that produced the crossing.
    pub segment: usize,

    /// Whether the crossing was matched exactly or interpolated.
    pub kind: CrossingKind,
}

impl<T: Float> Crossing<T> {
    /// Crossing at a sample whose value is exactly zero.
    #[inline]
    pub fn exact(x: T, segment: usize) -> Self {
        Self {
            x,
            segment,
            kind: CrossingKind::Exact,
        }
    }

    /// Crossing interpolated inside segment `[segment, segment + 1]`.
    #[inline]
    pub fn interpolated(x: T, segment: usize) -> Self {
        Self {
            x,
            segment,
            kind: CrossingKind::Interpolated,
        }
    }

    /// Check if the crossing sits exactly on a sample.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.kind == CrossingKind::Exact
    }

    /// The `(x[segment], x[segment + 1])` interval the crossing was found in.
    ///
    /// Returns `None` when `x` is not the series the crossing came from.
    pub fn bracket(&self, x: &[T]) -> Option<(T, T)> {
        let lo = *x.get(self.segment)?;
        let hi = *x.get(self.segment + 1)?;
        Some((lo, hi))
    }
}
