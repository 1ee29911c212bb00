//! Panel adapter for scanning many series at once.
//!
//! ## Purpose
//!
//! Sweep studies rarely have a single curve: several metrics are recorded
//! over the same parameter grid, or one metric is recorded per noise level or
//! cost setting. This adapter scans such a panel of series concurrently, one
//! series per task.
//!
//! ## Design notes
//!
//! * **Layouts**: Named columns over a shared x, independent keyed groups, or
//!   the columns of a 2-D array.
//! * **Delegation**: Every series goes through the sequential batch adapter,
//!   so each report equals a standalone batch scan.
//! * **Ordering**: Output order matches input order.
//! * **Errors**: Any invalid series fails the whole call; no partial panel is returned.
//!
//! ## Invariants
//!
//! * Each series obeys the batch adapter's input rules.
//!
//! ## Non-goals
//!
//! * This adapter does not align series sampled on different grids.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use ndarray::{ArrayBase, Data, Ix2};
use num_traits::Float;
use std::fmt::Debug;

// Export dependencies from zerocross crate
use zerocross::internals::adapters::batch::{BatchCrossing, BatchCrossingBuilder};
use zerocross::internals::engine::executor::CrossingMode;
use zerocross::internals::engine::output::CrossingReport;
use zerocross::internals::primitives::errors::ZeroCrossError;

// ============================================================================
// Panel Builder
// ============================================================================

/// Builder for the panel crossing processor.
#[derive(Debug, Clone)]
pub struct PanelCrossingBuilder<T: Float> {
    /// Base builder applied to every series
    pub base: BatchCrossingBuilder<T>,
}

impl<T: Float> Default for PanelCrossingBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> PanelCrossingBuilder<T> {
    /// Create a new builder; series are scanned in parallel.
    fn new() -> Self {
        let base = BatchCrossingBuilder::default().parallel(true);
        Self { base }
    }

    /// Scan series concurrently (default) or one after another.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    /// Set the crossing selection mode.
    pub fn mode(mut self, mode: CrossingMode) -> Self {
        self.base = self.base.mode(mode);
        self
    }

    /// Restrict every series to `min <= x <= max`.
    pub fn x_range(mut self, min: T, max: T) -> Self {
        self.base = self.base.x_range(min, max);
        self
    }

    /// Sort every series by x before scanning.
    pub fn sort_input(mut self, enabled: bool) -> Self {
        self.base = self.base.sort_input(enabled);
        self
    }

    /// Build the panel processor.
    pub fn build(self) -> Result<PanelCrossing<T>, ZeroCrossError> {
        let parallel = cfg!(feature = "cpu") && self.base.parallel.unwrap_or(true);

        // Each series runs the sequential pass; parallelism is across series
        let processor = self.base.custom_scan_pass(None).build()?;

        Ok(PanelCrossing {
            processor,
            parallel,
        })
    }
}

// ============================================================================
// Panel Processor
// ============================================================================

/// Multi-series crossing processor.
#[derive(Debug, Clone)]
pub struct PanelCrossing<T: Float> {
    processor: BatchCrossing<T>,
    parallel: bool,
}

impl<T: Float + Debug + Send + Sync> PanelCrossing<T> {
    /// Scan several y-columns sampled over the same `x`.
    ///
    /// Returns one `(name, report)` pair per column, in input order.
    pub fn find_columns<K>(
        &self,
        x: &[T],
        columns: &[(K, &[T])],
    ) -> Result<Vec<(K, CrossingReport<T>)>, ZeroCrossError>
    where
        K: Clone + Send + Sync,
    {
        let reports = self.map_ordered(columns, |(name, y)| {
            self.processor.find(x, y).map(|r| (name.clone(), r))
        })?;

        log::debug!(
            "panel: {} column(s) over {} samples, {} crossing(s)",
            reports.len(),
            x.len(),
            reports.iter().map(|(_, r)| r.crossings.len()).sum::<usize>()
        );

        Ok(reports)
    }

    /// Scan independent `(key, x, y)` series.
    ///
    /// Returns one `(key, report)` pair per group, in input order.
    pub fn find_groups<K>(
        &self,
        groups: &[(K, &[T], &[T])],
    ) -> Result<Vec<(K, CrossingReport<T>)>, ZeroCrossError>
    where
        K: Clone + Send + Sync,
    {
        let reports = self.map_ordered(groups, |(key, x, y)| {
            self.processor.find(x, y).map(|r| (key.clone(), r))
        })?;

        log::debug!(
            "panel: {} group(s), {} crossing(s)",
            reports.len(),
            reports.iter().map(|(_, r)| r.crossings.len()).sum::<usize>()
        );

        Ok(reports)
    }

    /// Scan every column of `matrix` as a series over `x`.
    ///
    /// `matrix` must have one row per x-value.
    pub fn find_matrix<S>(
        &self,
        x: &[T],
        matrix: &ArrayBase<S, Ix2>,
    ) -> Result<Vec<CrossingReport<T>>, ZeroCrossError>
    where
        S: Data<Elem = T>,
    {
        if matrix.nrows() != x.len() {
            return Err(ZeroCrossError::InvalidInput(format!(
                "matrix has {} rows but x has {} values",
                matrix.nrows(),
                x.len()
            )));
        }

        // Columns of a row-major array are strided; copy them out once
        let columns: Vec<Vec<T>> = matrix.columns().into_iter().map(|c| c.to_vec()).collect();

        let reports = self.map_ordered(&columns, |y| self.processor.find(x, y))?;

        log::debug!(
            "panel: {} matrix column(s) over {} samples",
            reports.len(),
            x.len()
        );

        Ok(reports)
    }

    /// Selected crossing mode.
    pub fn mode(&self) -> CrossingMode {
        self.processor.mode()
    }

    /// Check if series are scanned concurrently.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    // Apply `f` to every item, keeping input order.
    fn map_ordered<I, R, F>(&self, items: &[I], f: F) -> Result<Vec<R>, ZeroCrossError>
    where
        I: Sync,
        R: Send,
        F: Fn(&I) -> Result<R, ZeroCrossError> + Sync + Send,
    {
        #[cfg(feature = "cpu")]
        {
            if self.parallel {
                return items.par_iter().map(f).collect();
            }
        }

        items.iter().map(f).collect()
    }
}
