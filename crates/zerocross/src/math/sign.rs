//! Sign classification of sampled values.
//!
//! A sign change is a transition between two values that are strictly
//! opposite in sign. Zero is its own class and never opposes a neighbour.

// External dependencies
use num_traits::Float;

/// Sign class of a finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Strictly below zero.
    Negative,

    /// Exactly zero (including `-0.0`).
    Zero,

    /// Strictly above zero.
    Positive,
}

impl Sign {
    /// Classify `value`. NaN falls into `Zero`; callers validate finiteness first.
    #[inline]
    pub fn of<T: Float>(value: T) -> Self {
        if value > T::zero() {
            Self::Positive
        } else if value < T::zero() {
            Self::Negative
        } else {
            Self::Zero
        }
    }

    /// True when both signs are nonzero and differ.
    ///
    /// Compares classes instead of testing `a * b < 0`, which underflows to
    /// zero for tiny magnitudes.
    #[inline]
    pub fn is_opposite(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Negative, Self::Positive) | (Self::Positive, Self::Negative)
        )
    }
}
