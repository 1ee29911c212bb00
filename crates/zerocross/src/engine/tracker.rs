//! Incremental crossing tracking for sample streams.
//!
//! ## Purpose
//!
//! The tracker consumes samples one at a time and classifies each segment as
//! soon as its right endpoint arrives. Streaming and online adapters are thin
//! wrappers around it, so they report exactly what a batch scan over the
//! concatenated samples would.
//!
//! ## Key concepts
//!
//! * **Carry**: Only the last accepted sample is retained between pushes.
//! * **Global indices**: Segment indices count accepted samples since the last reset.
//! * **Close-up**: Samples outside the configured x-range are skipped.
//!
//! ## Invariants
//!
//! * Pushed x-values are non-decreasing (including skipped ones).
//! * In FIRST mode nothing is emitted after the first crossing.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::scan::classify_segment;
use crate::engine::executor::CrossingMode;
use crate::engine::output::CrossingResult;
use crate::engine::series::Sample;
use crate::engine::validator::Validator;
use crate::primitives::crossing::Crossing;
use crate::primitives::errors::ZeroCrossError;
use crate::primitives::window::XRange;

/// Stateful segment classifier over a stream of samples.
#[derive(Debug, Clone)]
pub struct CrossingTracker<T> {
    mode: CrossingMode,
    x_range: Option<XRange<T>>,

    // Last accepted sample, left endpoint of the next segment.
    carry: Option<Sample<T>>,

    // Last pushed x, accepted or not, for ordering checks.
    last_x: Option<T>,

    // Samples pushed / accepted since the last reset.
    pushed: usize,
    accepted: usize,

    // Crossings kept for `result()`; a single entry in FIRST/LAST mode.
    found: Vec<Crossing<T>>,
}

impl<T: Float> CrossingTracker<T> {
    /// Create an empty tracker.
    pub fn new(mode: CrossingMode, x_range: Option<XRange<T>>) -> Self {
        Self {
            mode,
            x_range,
            carry: None,
            last_x: None,
            pushed: 0,
            accepted: 0,
            found: Vec::new(),
        }
    }

    /// Push the next sample; returns the crossing of the segment it closes.
    pub fn push(&mut self, x: T, y: T) -> Result<Option<Crossing<T>>, ZeroCrossError> {
        Validator::validate_scalar(x, "x")?;
        Validator::validate_scalar(y, "y")?;
        Validator::validate_next_x(self.last_x, x, self.pushed)?;

        self.last_x = Some(x);
        self.pushed += 1;

        if let Some(range) = &self.x_range {
            if !range.contains(x) {
                return Ok(None);
            }
        }

        let segment = self
            .carry
            .and_then(|prev| classify_segment(self.accepted - 1, prev.x, prev.y, x, y));

        self.carry = Some(Sample::new(x, y));
        self.accepted += 1;

        Ok(segment.and_then(|c| self.record(c)))
    }

    // Keep `c` according to the mode; returns it when it should be emitted.
    fn record(&mut self, c: Crossing<T>) -> Option<Crossing<T>> {
        match self.mode {
            CrossingMode::All => self.found.push(c),
            CrossingMode::First => {
                if !self.found.is_empty() {
                    return None;
                }
                self.found.push(c);
            }
            CrossingMode::Last => {
                self.found.clear();
                self.found.push(c);
            }
        }
        Some(c)
    }

    /// Crossings selected by the mode so far.
    pub fn result(&self) -> CrossingResult<T> {
        match self.mode {
            CrossingMode::All => CrossingResult::All(self.found.clone()),
            CrossingMode::First | CrossingMode::Last => {
                CrossingResult::Single(self.found.first().copied())
            }
        }
    }

    /// Check if FIRST mode has already found its crossing.
    pub fn is_settled(&self) -> bool {
        self.mode == CrossingMode::First && !self.found.is_empty()
    }

    /// Last pushed x-value, accepted or not.
    pub fn last_x(&self) -> Option<T> {
        self.last_x
    }

    /// Number of samples pushed since the last reset.
    pub fn samples_pushed(&self) -> usize {
        self.pushed
    }

    /// Number of samples inside the x-range since the last reset.
    pub fn samples_accepted(&self) -> usize {
        self.accepted
    }

    /// Forget all samples and crossings.
    pub fn reset(&mut self) {
        self.carry = None;
        self.last_x = None;
        self.pushed = 0;
        self.accepted = 0;
        self.found.clear();
    }
}
