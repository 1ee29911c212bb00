//! High-level API for zero-crossing detection with parallel execution.
//!
//! ## Purpose
//!
//! This module re-uses the `zerocross` builder and adds adapters that run on
//! every available CPU core: a parallel batch scan for long series and a panel
//! adapter for many series at once.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `zerocross` builder pattern.
//! * **Parallel-First**: Batch and Panel default to parallel execution.
//! * **Transparent**: Streaming and Online are the base adapters unchanged.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ZeroCrossingBuilder`] via `ZeroCrossing::new()`.
//! 2. Chain configuration methods (`.mode()`, `.x_range()`, etc.).
//! 3. Select an adapter via `.adapter(Batch)` or `.adapter(Panel)`.

// External dependencies
use num_traits::Float;

// Import base marker types for delegation
use zerocross::internals::api::Batch as BaseBatch;

// Internal dependencies
use crate::adapters::batch::ParallelBatchCrossingBuilder;
use crate::adapters::panel::PanelCrossingBuilder;

// Publicly re-exported types
pub use crate::adapters::batch::ParallelBatchCrossing;
pub use crate::adapters::panel::PanelCrossing;
pub use crate::evaluation::bootstrap::bootstrap_band;
pub use crate::input::SeriesInput;
pub use zerocross::internals::api::{
    find_crossings, BootstrapInterval, Crossing, CrossingAdapter, CrossingKind, CrossingMode,
    CrossingReport, CrossingResult, MeanBand, MeanInterval, Online, Sample, Series, Streaming,
    XRange, ZeroCrossError, ZeroCrossingBuilder,
};

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Online, Panel, Streaming};
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for parallel in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> CrossingAdapter<T> for Batch {
    type Output = ParallelBatchCrossingBuilder<T>;

    fn convert(builder: ZeroCrossingBuilder<T>) -> Self::Output {
        // Determine parallel mode: user choice OR default to true for fastZerocross Batch
        let parallel = builder.parallel.unwrap_or(true);

        // Delegate to base implementation to create base builder
        let mut base = <BaseBatch as CrossingAdapter<T>>::convert(builder);
        base = base.parallel(parallel);

        ParallelBatchCrossingBuilder { base }
    }
}

/// Marker for parallel multi-series processing.
#[derive(Debug, Clone, Copy)]
pub struct Panel;

impl<T: Float> CrossingAdapter<T> for Panel {
    type Output = PanelCrossingBuilder<T>;

    fn convert(builder: ZeroCrossingBuilder<T>) -> Self::Output {
        let parallel = builder.parallel.unwrap_or(true);

        let mut base = <BaseBatch as CrossingAdapter<T>>::convert(builder);
        base = base.parallel(parallel);

        PanelCrossingBuilder { base }
    }
}
