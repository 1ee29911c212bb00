//! Column types accepted by the parallel finders.
//!
//! ## Purpose
//!
//! Sweep results arrive in whatever container the caller already holds: a
//! `Vec` read from a table, a fixed-size array in a test or demo, or one
//! column of an `ndarray` matrix. This module turns each of them into the
//! contiguous slice the scan works on.
//!
//! ## Design notes
//!
//! * **Borrowed**: Every impl hands out a view of the caller's buffer.
//! * **Strided columns**: A 1-D view with a stride other than one (a column
//!   of a row-major matrix, a reversed view) is rejected with its stride in
//!   the message; the panel adapter copies such columns itself.
//!
//! ## Invariants
//!
//! * The returned slice has the same length and order as the column.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Export dependencies from zerocross crate
use zerocross::internals::primitives::errors::ZeroCrossError;

/// A column of x- or y-values that can be scanned for zero-crossings.
pub trait SeriesInput<T: Float> {
    /// Borrow the column as a contiguous slice.
    fn as_series_slice(&self) -> Result<&[T], ZeroCrossError>;
}

impl<T: Float> SeriesInput<T> for [T] {
    fn as_series_slice(&self) -> Result<&[T], ZeroCrossError> {
        Ok(self)
    }
}

impl<T: Float, const N: usize> SeriesInput<T> for [T; N] {
    fn as_series_slice(&self) -> Result<&[T], ZeroCrossError> {
        Ok(self.as_slice())
    }
}

impl<T: Float> SeriesInput<T> for Vec<T> {
    fn as_series_slice(&self) -> Result<&[T], ZeroCrossError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> SeriesInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_series_slice(&self) -> Result<&[T], ZeroCrossError> {
        self.as_slice().ok_or_else(|| {
            ZeroCrossError::InvalidInput(format!(
                "column of {} values has stride {}; pass a contiguous copy (e.g. `.to_owned()`)",
                self.len(),
                self.strides()[0]
            ))
        })
    }
}
