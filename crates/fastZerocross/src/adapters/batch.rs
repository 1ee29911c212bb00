//! Batch adapter with parallel scanning.
//!
//! ## Purpose
//!
//! This module wraps the `zerocross` batch adapter and plugs the parallel
//! scan pass into it. It is meant for long series (dense parameter sweeps,
//! sampled signals) where a single scan is worth splitting across cores.
//!
//! ## Design notes
//!
//! * **Delegation**: Validation, sorting, close-up and reporting are done by
//!   the base adapter; only the scan pass is replaced.
//! * **Parallelism**: On by default; `.parallel(false)` restores the
//!   sequential pass.
//! * **Inputs**: Accepts any [`SeriesInput`] (slices, vectors, ndarray).
//!
//! ## Invariants
//!
//! * Results are identical to the sequential batch adapter.
//!
//! ## Non-goals
//!
//! * This adapter does not scan several series at once (use the panel adapter).

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::scan_pass_parallel;

// External dependencies
use num_traits::Float;
use std::fmt::Debug;

// Export dependencies from zerocross crate
use zerocross::internals::adapters::batch::{BatchCrossing, BatchCrossingBuilder};
use zerocross::internals::engine::executor::{CrossingMode, ScanPassFn};
use zerocross::internals::engine::output::CrossingReport;
use zerocross::internals::engine::series::Series;
use zerocross::internals::primitives::errors::ZeroCrossError;

// Internal dependencies
use crate::input::SeriesInput;

// ============================================================================
// Extended Batch Builder
// ============================================================================

/// Builder for the batch crossing processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelBatchCrossingBuilder<T: Float> {
    /// Base builder from the zerocross crate
    pub base: BatchCrossingBuilder<T>,
}

impl<T: Float> Default for ParallelBatchCrossingBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelBatchCrossingBuilder<T> {
    /// Create a new builder; parallel scanning is enabled.
    fn new() -> Self {
        let base = BatchCrossingBuilder::default().parallel(true);
        Self { base }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    /// Set the crossing selection mode.
    pub fn mode(mut self, mode: CrossingMode) -> Self {
        self.base = self.base.mode(mode);
        self
    }

    /// Restrict scans to `min <= x <= max`.
    pub fn x_range(mut self, min: T, max: T) -> Self {
        self.base = self.base.x_range(min, max);
        self
    }

    /// Sort input by x before scanning.
    pub fn sort_input(mut self, enabled: bool) -> Self {
        self.base = self.base.sort_input(enabled);
        self
    }
}

impl<T: Float + Send + Sync> ParallelBatchCrossingBuilder<T> {
    /// Build the batch processor.
    pub fn build(self) -> Result<ParallelBatchCrossing<T>, ZeroCrossError> {
        let mut builder = self.base;

        #[cfg(feature = "cpu")]
        {
            let pass: Option<ScanPassFn<T>> = if builder.parallel.unwrap_or(true) {
                Some(scan_pass_parallel::<T>)
            } else {
                None
            };
            builder = builder.custom_scan_pass(pass);
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if cpu feature is disabled
            builder = builder.custom_scan_pass(None);
        }

        Ok(ParallelBatchCrossing {
            processor: builder.build()?,
        })
    }
}

// ============================================================================
// Extended Batch Processor
// ============================================================================

/// Batch crossing processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelBatchCrossing<T: Float> {
    processor: BatchCrossing<T>,
}

impl<T: Float + Debug + Send + Sync> ParallelBatchCrossing<T> {
    /// Find the crossings of the curve sampled at `x`, `y`.
    pub fn find<I1, I2>(&self, x: &I1, y: &I2) -> Result<CrossingReport<T>, ZeroCrossError>
    where
        I1: SeriesInput<T> + ?Sized,
        I2: SeriesInput<T> + ?Sized,
    {
        let x_slice = x.as_series_slice()?;
        let y_slice = y.as_series_slice()?;

        self.processor.find(x_slice, y_slice)
    }

    /// Find the crossings of an already validated series.
    pub fn find_series(&self, series: &Series<T>) -> CrossingReport<T> {
        self.processor.find_series(series)
    }

    /// Selected crossing mode.
    pub fn mode(&self) -> CrossingMode {
        self.processor.mode()
    }

    /// Check if the parallel scan pass is in use.
    pub fn is_parallel(&self) -> bool {
        cfg!(feature = "cpu") && self.processor.parallel_hint().unwrap_or(true)
    }
}
