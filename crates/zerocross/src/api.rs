//! High-level API for zero-crossing detection.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the scan and choosing an execution adapter
//! (Batch, Streaming, or Online).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Every parameter is optional with a sensible default.
//! * **Polymorphic**: Marker types transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ZeroCrossingBuilder`] via `ZeroCrossing::new()`.
//! 2. Chain configuration methods (`.mode()`, `.x_range()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::BatchCrossingBuilder;
use crate::adapters::online::OnlineCrossingBuilder;
use crate::adapters::streaming::StreamingCrossingBuilder;
use crate::engine::executor::ScanPassFn;

// Publicly re-exported types
pub use crate::adapters::batch::BatchCrossing;
pub use crate::adapters::online::OnlineCrossing;
pub use crate::adapters::streaming::StreamingCrossing;
pub use crate::engine::executor::{find_crossings, CrossingMode};
pub use crate::engine::output::{CrossingReport, CrossingResult};
pub use crate::engine::series::{Sample, Series};
pub use crate::evaluation::bootstrap::{BootstrapInterval, MeanBand, MeanInterval};
pub use crate::primitives::crossing::{Crossing, CrossingKind};
pub use crate::primitives::errors::ZeroCrossError;
pub use crate::primitives::window::XRange;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Online, Streaming};
}

/// Fluent builder for configuring zero-crossing scans.
#[derive(Debug, Clone)]
pub struct ZeroCrossingBuilder<T> {
    /// Which crossings to report (default: All).
    pub mode: Option<CrossingMode>,

    /// Inclusive x-interval to restrict the scan to.
    pub x_range: Option<XRange<T>>,

    /// Sort input by x instead of rejecting descending x (Batch only).
    pub sort_input: Option<bool>,

    // ======================================
    // DEV
    // ======================================
    /// Custom scan pass function.
    #[doc(hidden)]
    pub custom_scan_pass: Option<ScanPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for ZeroCrossingBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ZeroCrossingBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: CrossingAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            mode: None,
            x_range: None,
            sort_input: None,
            custom_scan_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set which crossings to report.
    pub fn mode(mut self, mode: CrossingMode) -> Self {
        if self.mode.is_some() {
            self.duplicate_param = Some("mode");
        }
        self.mode = Some(mode);
        self
    }

    /// Only consider samples with `min <= x <= max`.
    pub fn x_range(mut self, min: T, max: T) -> Self {
        if self.x_range.is_some() {
            self.duplicate_param = Some("x_range");
        }
        self.x_range = Some(XRange::new(min, max));
        self
    }

    /// Sort samples by x before scanning (Batch only).
    pub fn sort_input(mut self) -> Self {
        if self.sort_input.is_some() {
            self.duplicate_param = Some("sort_input");
        }
        self.sort_input = Some(true);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set a custom scan pass function for execution (only for dev)
    #[doc(hidden)]
    pub fn custom_scan_pass(mut self, pass: ScanPassFn<T>) -> Self {
        self.custom_scan_pass = Some(pass);
        self
    }

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait CrossingAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`ZeroCrossingBuilder`] into a specialized execution builder.
    fn convert(builder: ZeroCrossingBuilder<T>) -> Self::Output;
}

/// Marker for in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> CrossingAdapter<T> for Batch {
    type Output = BatchCrossingBuilder<T>;

    fn convert(builder: ZeroCrossingBuilder<T>) -> Self::Output {
        let mut result = BatchCrossingBuilder::default();

        if let Some(mode) = builder.mode {
            result.mode = mode;
        }
        if let Some(range) = builder.x_range {
            result.x_range = Some(range);
        }
        if let Some(sort) = builder.sort_input {
            result.sort_input = sort;
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(sp) = builder.custom_scan_pass {
            result.custom_scan_pass = Some(sp);
        }
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for chunked streaming processing.
#[derive(Debug, Clone, Copy)]
pub struct Streaming;

impl<T: Float> CrossingAdapter<T> for Streaming {
    type Output = StreamingCrossingBuilder<T>;

    fn convert(builder: ZeroCrossingBuilder<T>) -> Self::Output {
        let mut result = StreamingCrossingBuilder::default();

        if let Some(mode) = builder.mode {
            result.mode = mode;
        }
        if let Some(range) = builder.x_range {
            result.x_range = Some(range);
        }
        if builder.sort_input == Some(true) {
            result.deferred_error = Some(ZeroCrossError::UnsupportedFeature {
                adapter: "Streaming",
                feature: "sort_input",
            });
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for incremental online processing.
#[derive(Debug, Clone, Copy)]
pub struct Online;

impl<T: Float> CrossingAdapter<T> for Online {
    type Output = OnlineCrossingBuilder<T>;

    fn convert(builder: ZeroCrossingBuilder<T>) -> Self::Output {
        let mut result = OnlineCrossingBuilder::default();

        if let Some(mode) = builder.mode {
            result.mode = mode;
        }
        if let Some(range) = builder.x_range {
            result.x_range = Some(range);
        }
        if builder.sort_input == Some(true) {
            result.deferred_error = Some(ZeroCrossError::UnsupportedFeature {
                adapter: "Online",
                feature: "sort_input",
            });
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
