//! Streaming adapter for chunked zero-crossing scans.
//!
//! ## Purpose
//!
//! This module provides the streaming execution adapter for series that
//! arrive in consecutive chunks, e.g. when a long simulation table is read
//! block by block. Each chunk is scanned as it arrives.
//!
//! ## Design notes
//!
//! * **Carry-over**: The last sample of a chunk is kept so that a segment
//!   spanning two chunks is still classified.
//! * **Global indices**: Segment indices count samples across all chunks.
//! * **Equivalence**: Any chunking of a series yields the same crossings as a
//!   batch scan of the whole series.
//!
//! ## Invariants
//!
//! * Chunks must be provided in ascending x-order, within and across chunks.
//! * All values must be finite.
//!
//! ## Non-goals
//!
//! * This adapter does not sort input (chunks cannot be reordered).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::CrossingMode;
use crate::engine::output::CrossingResult;
use crate::engine::tracker::CrossingTracker;
use crate::engine::validator::Validator;
use crate::primitives::crossing::Crossing;
use crate::primitives::errors::ZeroCrossError;
use crate::primitives::window::XRange;

// ============================================================================
// Streaming Builder
// ============================================================================

/// Builder for the streaming crossing processor.
#[derive(Debug, Clone)]
pub struct StreamingCrossingBuilder<T: Float> {
    /// Crossing selection mode
    pub mode: CrossingMode,

    /// Inclusive close-up range; samples outside it are skipped
    pub x_range: Option<XRange<T>>,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<ZeroCrossError>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for StreamingCrossingBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> StreamingCrossingBuilder<T> {
    fn new() -> Self {
        Self {
            mode: CrossingMode::default(),
            x_range: None,
            deferred_error: None,
            duplicate_param: None,
        }
    }

    /// Set the crossing selection mode.
    pub fn mode(mut self, mode: CrossingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Skip samples outside `min <= x <= max`.
    pub fn x_range(mut self, min: T, max: T) -> Self {
        self.x_range = Some(XRange::new(min, max));
        self
    }

    /// Build the streaming processor.
    pub fn build(self) -> Result<StreamingCrossing<T>, ZeroCrossError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        Validator::validate_no_duplicates(self.duplicate_param)?;

        if let Some(range) = self.x_range {
            Validator::validate_range(range.min, range.max)?;
        }

        Ok(StreamingCrossing {
            tracker: CrossingTracker::new(self.mode, self.x_range),
            chunks: 0,
        })
    }
}

// ============================================================================
// Streaming Processor
// ============================================================================

/// Streaming crossing processor.
#[derive(Debug, Clone)]
pub struct StreamingCrossing<T: Float> {
    tracker: CrossingTracker<T>,
    chunks: usize,
}

impl<T: Float> StreamingCrossing<T> {
    /// Scan the next chunk; returns the crossings it completed.
    ///
    /// The chunk is validated as a whole before any sample is consumed, so a
    /// rejected chunk leaves the processor unchanged.
    pub fn process_chunk(&mut self, x: &[T], y: &[T]) -> Result<Vec<Crossing<T>>, ZeroCrossError> {
        Validator::validate_inputs(x, y)?;
        Validator::validate_sorted(x)?;
        if let (Some(&first), Some(prev)) = (x.first(), self.tracker.last_x()) {
            Validator::validate_next_x(Some(prev), first, self.tracker.samples_pushed())?;
        }

        let mut completed = Vec::new();
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            if let Some(c) = self.tracker.push(xi, yi)? {
                completed.push(c);
            }
        }
        self.chunks += 1;

        log::debug!(
            "streaming chunk {}: {} samples, {} crossing(s)",
            self.chunks,
            x.len(),
            completed.len()
        );

        Ok(completed)
    }

    /// Crossings selected by the mode over every chunk processed so far.
    pub fn finalize(&self) -> CrossingResult<T> {
        self.tracker.result()
    }

    /// Number of chunks processed since the last reset.
    pub fn chunks_processed(&self) -> usize {
        self.chunks
    }

    /// Number of samples consumed since the last reset.
    pub fn samples_seen(&self) -> usize {
        self.tracker.samples_pushed()
    }

    /// Discard all state and start a new stream.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.chunks = 0;
    }
}
