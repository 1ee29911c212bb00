//! Root of the line through two samples.

// External dependencies
use num_traits::Float;

/// Compute the x where the line through `(x0, y0)` and `(x1, y1)` equals zero.
///
/// ```text
/// x* = x0 + (x1 - x0) * (-y0) / (y1 - y0)
/// ```
///
/// The caller guarantees `y0 != y1`. A zero-width segment (`x0 == x1`)
/// returns `x0` exactly.
#[inline]
pub fn linear_root<T: Float>(x0: T, y0: T, x1: T, y1: T) -> T {
    x0 + (x1 - x0) * (-y0) / (y1 - y0)
}
