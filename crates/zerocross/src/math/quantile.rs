//! Sample means and quantiles.

// External dependencies
use num_traits::Float;

/// Convert a count to `T`.
#[inline]
pub fn count_to_float<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::infinity)
}

/// Arithmetic mean; NaN for an empty slice.
#[inline]
pub fn mean<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::nan();
    }
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    sum / count_to_float(values.len())
}

/// Quantile `p` of ascending `sorted` values, interpolating linearly between
/// the two nearest order statistics.
///
/// `p` is clamped to `[0, 1]`. An empty slice yields NaN.
pub fn quantile_sorted<T: Float>(sorted: &[T], p: T) -> T {
    let n = sorted.len();
    if n == 0 {
        return T::nan();
    }

    let p = p.max(T::zero()).min(T::one());
    let h = p * count_to_float::<T>(n - 1);
    let lo = h.floor().to_usize().unwrap_or(0).min(n - 1);
    let hi = (lo + 1).min(n - 1);
    let frac = h - count_to_float(lo);

    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}
