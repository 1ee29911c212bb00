//! Batch adapter for in-memory zero-crossing scans.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: a complete series is
//! held in memory, validated, optionally sorted and restricted to a close-up
//! range, then scanned in one pass.
//!
//! ## Design notes
//!
//! * **Processing**: Processes the entire series in a single pass.
//! * **Sorting**: Sorts by x only when `sort_input` is enabled; otherwise
//!   descending x is rejected.
//! * **Delegation**: Delegates the scan to the execution engine.
//! * **Reusable**: A built processor can be applied to any number of series.
//!
//! ## Invariants
//!
//! * Input arrays x and y must have the same length.
//! * All values must be finite.
//! * Segment indices in the report refer to the sorted, restricted series.
//!
//! ## Non-goals
//!
//! * This adapter does not handle sample streams (use streaming or online adapters).
//! * This adapter does not handle missing values.

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{CrossingExecutor, CrossingMode, ScanPassFn};
use crate::engine::output::CrossingReport;
use crate::engine::series::Series;
use crate::engine::validator::Validator;
use crate::primitives::errors::ZeroCrossError;
use crate::primitives::window::XRange;

// ============================================================================
// Batch Builder
// ============================================================================

/// Builder for the batch crossing processor.
#[derive(Debug, Clone)]
pub struct BatchCrossingBuilder<T: Float> {
    /// Crossing selection mode
    pub mode: CrossingMode,

    /// Sort input by x instead of requiring ascending order
    pub sort_input: bool,

    /// Inclusive close-up range applied before scanning
    pub x_range: Option<XRange<T>>,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<ZeroCrossError>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom scan pass function.
    #[doc(hidden)]
    pub custom_scan_pass: Option<ScanPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BatchCrossingBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchCrossingBuilder<T> {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            mode: CrossingMode::default(),
            sort_input: false,
            x_range: None,
            deferred_error: None,
            custom_scan_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the crossing selection mode.
    pub fn mode(mut self, mode: CrossingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Restrict scans to `min <= x <= max`.
    pub fn x_range(mut self, min: T, max: T) -> Self {
        self.x_range = Some(XRange::new(min, max));
        self
    }

    // ========================================================================
    // Batch-Specific Setters
    // ========================================================================

    /// Sort input by x before scanning.
    pub fn sort_input(mut self, enabled: bool) -> Self {
        self.sort_input = enabled;
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Set a custom scan pass function.
    #[doc(hidden)]
    pub fn custom_scan_pass(mut self, pass: Option<ScanPassFn<T>>) -> Self {
        self.custom_scan_pass = pass;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchCrossing<T>, ZeroCrossError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        if let Some(range) = self.x_range {
            Validator::validate_range(range.min, range.max)?;
        }

        Ok(BatchCrossing { config: self })
    }
}

// ============================================================================
// Batch Processor
// ============================================================================

/// Batch crossing processor.
#[derive(Debug, Clone)]
pub struct BatchCrossing<T: Float> {
    config: BatchCrossingBuilder<T>,
}

impl<T: Float + Debug> BatchCrossing<T> {
    /// Find the crossings of the curve sampled at `x`, `y`.
    pub fn find(&self, x: &[T], y: &[T]) -> Result<CrossingReport<T>, ZeroCrossError> {
        let series = if self.config.sort_input {
            Series::from_unsorted(x, y)?
        } else {
            Series::from_slices(x, y)?
        };

        Ok(self.find_series(&series))
    }

    /// Find the crossings of an already validated series.
    pub fn find_series(&self, series: &Series<T>) -> CrossingReport<T> {
        match &self.config.x_range {
            Some(range) => self.scan(&series.restrict(range)),
            None => self.scan(series),
        }
    }

    /// Selected crossing mode.
    pub fn mode(&self) -> CrossingMode {
        self.config.mode
    }

    /// Parallel execution hint, if any.
    #[doc(hidden)]
    pub fn parallel_hint(&self) -> Option<bool> {
        self.config.parallel
    }

    fn scan(&self, series: &Series<T>) -> CrossingReport<T> {
        let result = CrossingExecutor::run(
            series.x(),
            series.y(),
            self.config.mode,
            self.config.custom_scan_pass,
        );

        log::debug!(
            "batch scan: {} samples, {} segments, mode={}, {} crossing(s)",
            series.len(),
            series.segments(),
            self.config.mode,
            result.len()
        );

        CrossingReport::new(series, self.config.mode, result)
    }
}
