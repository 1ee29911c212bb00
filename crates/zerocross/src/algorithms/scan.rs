//! Segment scanning for sign changes.
//!
//! ## Purpose
//!
//! This module implements the single rule that turns a pair of neighbouring
//! samples into (at most) one crossing, and a lazy iterator that applies the
//! rule to every segment of a sorted series.
//!
//! ## Design notes
//!
//! * **Single rule**: Every execution shape (batch, streaming, online,
//!   parallel) calls [`classify_segment`], so they agree by construction.
//! * **Lazy**: [`SegmentScan`] yields crossings on demand; the first crossing
//!   is found without scanning the tail.
//! * **Double-ended**: Scanning from the back finds the last crossing without
//!   visiting the head.
//!
//! ## Key concepts
//!
//! * **Exact zero**: `y[i] == 0` reports `x[i]` and suppresses the sign test
//!   for segment `[i, i + 1]`.
//! * **Sign change**: `y[i]` and `y[i + 1]` strictly opposite in sign.
//! * **Trailing sample**: The last sample has no right neighbour and is never
//!   classified on its own.
//!
//! ## Invariants
//!
//! * Input x-values must be sorted in ascending order.
//! * Crossings are yielded in ascending segment order (front to back).
//!
//! ## Non-goals
//!
//! * This module does not sort or validate input data.
//! * This module does not apply crossing-selection modes.

// External dependencies
use core::iter::FusedIterator;
use num_traits::Float;

// Internal dependencies
use crate::math::root::linear_root;
use crate::math::sign::Sign;
use crate::primitives::crossing::Crossing;

// ============================================================================
// Segment Rule
// ============================================================================

/// Classify segment `[i, i + 1]` with endpoints `(x0, y0)` and `(x1, y1)`.
#[inline]
pub fn classify_segment<T: Float>(i: usize, x0: T, y0: T, x1: T, y1: T) -> Option<Crossing<T>> {
    let left = Sign::of(y0);

    if left == Sign::Zero {
        return Some(Crossing::exact(x0, i));
    }

    if left.is_opposite(Sign::of(y1)) {
        return Some(Crossing::interpolated(linear_root(x0, y0, x1, y1), i));
    }

    None
}

// ============================================================================
// Segment Iterator
// ============================================================================

/// Lazy iterator over the crossings of a sorted series.
#[derive(Debug, Clone)]
pub struct SegmentScan<'a, T> {
    x: &'a [T],
    y: &'a [T],

    /// Next segment to classify from the front.
    front: usize,

    /// One past the last segment left to classify from the back.
    back: usize,
}

impl<'a, T: Float> SegmentScan<'a, T> {
    /// Scan the segments of `x` and `y`, which must have equal length.
    pub fn new(x: &'a [T], y: &'a [T]) -> Self {
        debug_assert_eq!(x.len(), y.len(), "SegmentScan: x and y lengths differ");
        let n = x.len().min(y.len());
        Self {
            x,
            y,
            front: 0,
            back: n.saturating_sub(1),
        }
    }

    /// Number of segments not yet classified.
    #[inline]
    pub fn remaining_segments(&self) -> usize {
        self.back - self.front
    }

    #[inline]
    fn classify(&self, i: usize) -> Option<Crossing<T>> {
        classify_segment(i, self.x[i], self.y[i], self.x[i + 1], self.y[i + 1])
    }
}

impl<T: Float> Iterator for SegmentScan<'_, T> {
    type Item = Crossing<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.front < self.back {
            let i = self.front;
            self.front += 1;
            if let Some(crossing) = self.classify(i) {
                return Some(crossing);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining_segments()))
    }
}

impl<T: Float> DoubleEndedIterator for SegmentScan<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while self.front < self.back {
            self.back -= 1;
            if let Some(crossing) = self.classify(self.back) {
                return Some(crossing);
            }
        }
        None
    }
}

impl<T: Float> FusedIterator for SegmentScan<'_, T> {}
