//! Execution engine for zero-crossing scans.
//!
//! ## Purpose
//!
//! This module turns a sorted series into a [`CrossingResult`] for a given
//! [`CrossingMode`]. It owns the mode semantics and the seam through which an
//! alternative scan pass (e.g. a parallel one) can be plugged in.
//!
//! ## Design notes
//!
//! * **ALL** collects the lazy scan in ascending order.
//! * **FIRST** stops at the first crossing.
//! * **LAST** scans from the back; since every segment yields at most one
//!   crossing, the first hit from the back is the crossing with the greatest
//!   segment index.
//! * **Pluggable**: A [`ScanPassFn`] replaces the sequential pass when set.
//!
//! ## Invariants
//!
//! * Input x-values are sorted ascending and all values are finite.
//! * Results are deterministic for identical inputs.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not sort input data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::scan::SegmentScan;
use crate::engine::output::CrossingResult;
use crate::engine::series::Series;

// ============================================================================
// Crossing Mode
// ============================================================================

/// How many crossings a scan returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossingMode {
    /// Every crossing, in ascending x-order.
    #[default]
    All,

    /// Only the leftmost crossing.
    First,

    /// Only the crossing with the greatest segment index.
    Last,
}

impl Display for CrossingMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let name = match self {
            Self::All => "all",
            Self::First => "first",
            Self::Last => "last",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a custom scan pass.
#[doc(hidden)]
pub type ScanPassFn<T> = fn(
    &[T],         // x (sorted)
    &[T],         // y
    CrossingMode, // mode
) -> CrossingResult<T>;

// ============================================================================
// Executor
// ============================================================================

/// Stateless driver of the scan.
pub struct CrossingExecutor;

impl CrossingExecutor {
    /// Scan sorted columns sequentially.
    pub fn scan_pass<T: Float>(x: &[T], y: &[T], mode: CrossingMode) -> CrossingResult<T> {
        let mut scan = SegmentScan::new(x, y);
        match mode {
            CrossingMode::All => CrossingResult::All(scan.collect::<Vec<_>>()),
            CrossingMode::First => CrossingResult::Single(scan.next()),
            CrossingMode::Last => CrossingResult::Single(scan.next_back()),
        }
    }

    /// Scan sorted columns with an optional custom pass.
    pub fn run<T: Float>(
        x: &[T],
        y: &[T],
        mode: CrossingMode,
        custom_pass: Option<ScanPassFn<T>>,
    ) -> CrossingResult<T> {
        let result = match custom_pass {
            Some(pass) => pass(x, y, mode),
            None => Self::scan_pass(x, y, mode),
        };

        for c in result.iter() {
            log::trace!(
                "crossing at x={:?} (segment {}, {:?})",
                c.x.to_f64(),
                c.segment,
                c.kind
            );
        }

        result
    }
}

// ============================================================================
// Entry Point
// ============================================================================

/// Find the zero-crossings of `series` selected by `mode`.
///
/// # Example
///
/// ```
/// use zerocross::prelude::*;
///
/// let series = Series::new(vec![0.0, 1.0, 2.0, 3.0], vec![-2.0, 2.0, -2.0, 2.0])?;
///
/// assert_eq!(find_crossings(&series, All).xs(), vec![0.5, 1.5, 2.5]);
/// assert_eq!(find_crossings(&series, First).xs(), vec![0.5]);
/// assert_eq!(find_crossings(&series, Last).xs(), vec![2.5]);
/// # Result::<(), ZeroCrossError>::Ok(())
/// ```
pub fn find_crossings<T: Float>(series: &Series<T>, mode: CrossingMode) -> CrossingResult<T> {
    CrossingExecutor::run(series.x(), series.y(), mode, None)
}
