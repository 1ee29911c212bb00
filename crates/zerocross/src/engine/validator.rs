//! Input validation for series data and estimator configuration.
//!
//! ## Purpose
//!
//! This module provides the validation functions used before any scan:
//! matching input lengths, finite values, ascending x-order, and well-formed
//! close-up ranges.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Finite Checks**: NaN or infinite samples make interpolation undefined.
//! * **Ordering**: x must be non-decreasing; equal neighbours are allowed.
//! * **Short series**: Empty and single-sample inputs are valid; they simply
//!   have no segments.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ZeroCrossError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for series data and estimator configuration.
///
/// All methods return `Result<(), ZeroCrossError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate paired input arrays: equal lengths and finite values.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), ZeroCrossError> {
        let n = x.len();
        if n != y.len() {
            return Err(ZeroCrossError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        // Combined loop for cache locality
        for i in 0..n {
            if !x[i].is_finite() {
                return Err(ZeroCrossError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    x[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !y[i].is_finite() {
                return Err(ZeroCrossError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    y[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate that x-values are non-decreasing.
    pub fn validate_sorted<T: Float>(x: &[T]) -> Result<(), ZeroCrossError> {
        match x.windows(2).position(|w| w[1] < w[0]) {
            Some(pos) => Err(Self::unsorted(pos + 1, x[pos], x[pos + 1])),
            None => Ok(()),
        }
    }

    /// Validate that `x`, arriving at position `index`, does not go below `previous`.
    pub fn validate_next_x<T: Float>(
        previous: Option<T>,
        x: T,
        index: usize,
    ) -> Result<(), ZeroCrossError> {
        match previous {
            Some(prev) if x < prev => Err(Self::unsorted(index, prev, x)),
            _ => Ok(()),
        }
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), ZeroCrossError> {
        if !val.is_finite() {
            return Err(ZeroCrossError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate close-up range bounds.
    pub fn validate_range<T: Float>(min: T, max: T) -> Result<(), ZeroCrossError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ZeroCrossError::InvalidRange {
                min: min.to_f64().unwrap_or(f64::NAN),
                max: max.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ZeroCrossError> {
        if let Some(param) = duplicate_param {
            return Err(ZeroCrossError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn unsorted<T: Float>(index: usize, previous: T, current: T) -> ZeroCrossError {
        ZeroCrossError::UnsortedInput {
            index,
            previous: previous.to_f64().unwrap_or(f64::NAN),
            current: current.to_f64().unwrap_or(f64::NAN),
        }
    }
}
