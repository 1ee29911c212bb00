//! Online adapter for point-by-point zero-crossing detection.
//!
//! ## Purpose
//!
//! This module provides the online execution adapter: samples are pushed one
//! at a time (e.g. as a parameter sweep produces them) and a crossing is
//! reported as soon as the segment containing it is complete.
//!
//! ## Design notes
//!
//! * **Latency**: A crossing in `[i, i + 1]` is reported when sample `i + 1` arrives.
//! * **Memory**: Only the previous sample is retained, plus the selected crossings.
//! * **Equivalence**: Pushing a series point by point yields the same
//!   crossings as a batch scan.
//!
//! ## Invariants
//!
//! * Points must arrive in ascending x-order.
//! * All values must be finite.
//!
//! ## Non-goals
//!
//! * This adapter does not reorder late points.

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
// Online Builder
// ============================================================================

/// Builder for the online crossing detector.
#[derive(Debug, Clone)]
pub struct OnlineCrossingBuilder<T: Float> {
    /// Crossing selection mode
    pub mode: CrossingMode,

    /// Inclusive close-up range; points outside it are skipped
    pub x_range: Option<XRange<T>>,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<ZeroCrossError>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for OnlineCrossingBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> OnlineCrossingBuilder<T> {
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

    /// Skip points outside `min <= x <= max`.
    pub fn x_range(mut self, min: T, max: T) -> Self {
        self.x_range = Some(XRange::new(min, max));
        self
    }

    /// Build the online detector.
    pub fn build(self) -> Result<OnlineCrossing<T>, ZeroCrossError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        Validator::validate_no_duplicates(self.duplicate_param)?;

        if let Some(range) = self.x_range {
            Validator::validate_range(range.min, range.max)?;
        }

        Ok(OnlineCrossing {
            tracker: CrossingTracker::new(self.mode, self.x_range),
        })
    }
}

// ============================================================================
// Online Detector
// ============================================================================

/// Online crossing detector.
#[derive(Debug, Clone)]
pub struct OnlineCrossing<T: Float> {
    tracker: CrossingTracker<T>,
}

impl<T: Float> OnlineCrossing<T> {
    /// Add a new point; returns the crossing of the segment it completes.
    ///
    /// In FIRST mode, `None` is returned for every point after the first crossing.
    pub fn add_point(&mut self, x: T, y: T) -> Result<Option<Crossing<T>>, ZeroCrossError> {
        self.tracker.push(x, y)
    }

    /// Add several points in order; returns how many crossings they completed.
    ///
    /// The points are validated as a whole first; on error none of them is added.
    pub fn add_points(&mut self, x: &[T], y: &[T]) -> Result<usize, ZeroCrossError> {
        Validator::validate_inputs(x, y)?;
        Validator::validate_sorted(x)?;
        if let Some(&first) = x.first() {
            Validator::validate_next_x(self.tracker.last_x(), first, self.tracker.samples_pushed())?;
        }

        let mut completed = 0;
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            if self.add_point(xi, yi)?.is_some() {
                completed += 1;
            }
        }
        Ok(completed)
    }

    /// Crossings selected by the mode so far.
    pub fn result(&self) -> CrossingResult<T> {
        self.tracker.result()
    }

    /// Check if a FIRST-mode detector has found its crossing.
    pub fn is_settled(&self) -> bool {
        self.tracker.is_settled()
    }

    /// Number of points added since the last reset.
    pub fn samples_seen(&self) -> usize {
        self.tracker.samples_pushed()
    }

    /// Number of points inside the close-up range since the last reset.
    pub fn samples_in_range(&self) -> usize {
        self.tracker.samples_accepted()
    }

    /// Clear all state.
    pub fn reset(&mut self) {
        self.tracker.reset();
    }
}
