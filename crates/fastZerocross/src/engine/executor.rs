//! Parallel execution engine for zero-crossing scans.
//!
//! ## Purpose
//!
//! This module provides the parallel scan pass that is injected into the
//! `zerocross` crate's execution engine. Segments are independent, so a long
//! series is split across CPU cores and classified concurrently.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacement for the sequential scan pass.
//! * **Parallelism**: Uses `rayon` over segment indices.
//! * **Ordering**: ALL collects in segment order; FIRST and LAST use
//!   `find_map_first` / `find_map_last`, so results equal the sequential pass.
//! * **Granularity**: Short runs of segments stay on one thread.
//!
//! ## Invariants
//!
//! * Input x-values are sorted ascending and all values are finite.
//! * x and y have the same length.
//!
//! ## Non-goals
//!
//! * This module does not validate or sort input data.
//! * This module does not restrict to a close-up range (handled by the batch adapter).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Export dependencies from zerocross crate
use zerocross::internals::algorithms::scan::classify_segment;
use zerocross::internals::engine::executor::CrossingMode;
use zerocross::internals::engine::output::CrossingResult;

/// Minimum number of segments a worker classifies in one go.
pub const MIN_SEGMENTS_PER_TASK: usize = 1024;

// ============================================================================
// Parallel Scan Function
// ============================================================================

/// Scan sorted columns in parallel.
#[cfg(feature = "cpu")]
pub fn scan_pass_parallel<T>(x: &[T], y: &[T], mode: CrossingMode) -> CrossingResult<T>
where
    T: Float + Send + Sync,
{
    let segments = x.len().min(y.len()).saturating_sub(1);
    let classify = |i: usize| classify_segment(i, x[i], y[i], x[i + 1], y[i + 1]);

    let indices = (0..segments)
        .into_par_iter()
        .with_min_len(MIN_SEGMENTS_PER_TASK);

    match mode {
        CrossingMode::All => CrossingResult::All(indices.filter_map(classify).collect()),
        CrossingMode::First => CrossingResult::Single(indices.find_map_first(classify)),
        CrossingMode::Last => CrossingResult::Single(indices.find_map_last(classify)),
    }
}
