//! Error types for zero-crossing estimation.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building a
//! series or configuring an estimator: malformed input arrays, unsorted
//! x-values, invalid close-up ranges, and adapter limitations.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (lengths, indices, bounds).
//! * **Deferred**: Builder misconfiguration is stored and reported at `build()`.
//! * **No-std**: Uses `alloc` for dynamic messages when `std` is disabled.
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Mismatched lengths, non-finite values, descending x.
//! 2. **Parameter validation**: Close-up ranges, interval settings, duplicate builder parameters.
//! 3. **Adapter constraints**: Options an execution adapter cannot honour.
//!
//! ## Non-goals
//!
//! * Absence of a crossing is never an error; it is an empty result.
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for zero-crossing operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ZeroCrossError {
    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// `x` and `y` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// x-values must be non-decreasing.
    UnsortedInput {
        /// Index of the first sample that breaks the ordering.
        index: usize,
        /// x-value of the preceding sample.
        previous: f64,
        /// x-value at `index`.
        current: f64,
    },

    /// Close-up range bounds must be finite with `min <= max`.
    InvalidRange {
        /// Lower bound provided.
        min: f64,
        /// Upper bound provided.
        max: f64,
    },

    /// Selected adapter does not support the requested feature.
    UnsupportedFeature {
        /// Name of the adapter (e.g., "Streaming", "Online").
        adapter: &'static str,
        /// Name of the unsupported feature.
        feature: &'static str,
    },

    /// Interval coverage level must satisfy `0 < level < 1`.
    InvalidLevel(f64),

    /// Bootstrap needs at least one resample.
    InvalidResamples(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ZeroCrossError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::UnsortedInput {
                index,
                previous,
                current,
            } => {
                write!(
                    f,
                    "Unsorted input: x[{index}]={current} is less than x[{}]={previous}",
                    index - 1
                )
            }
            Self::InvalidRange { min, max } => {
                write!(
                    f,
                    "Invalid x-range: [{min}, {max}] (bounds must be finite and min <= max)"
                )
            }
            Self::UnsupportedFeature { adapter, feature } => {
                write!(f, "Adapter '{adapter}' does not support feature: {feature}")
            }
            Self::InvalidLevel(level) => {
                write!(f, "Invalid interval level: {level} (must be between 0 and 1)")
            }
            Self::InvalidResamples(b) => {
                write!(f, "Invalid resample count: {b} (must be at least 1)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ZeroCrossError {}
