//! # zerocross — Zero-crossing estimation for sampled curves
//!
//! Locates the x-positions where a sampled scalar curve `y(x)` passes through
//! zero. Typical inputs are sweeps such as a spectral slope against
//! frequency, a phase margin against gain, or a residual against a tuning
//! parameter, where the interesting point is where the quantity changes sign.
//!
//! ## How crossings are found
//!
//! The curve is treated as piecewise linear between consecutive samples.
//! Each segment `[i, i + 1]` contributes at most one crossing:
//!
//! - **Exact**: `y[i] == 0` reports `x[i]` itself.
//! - **Interpolated**: `y[i]` and `y[i + 1]` have strictly opposite signs; the
//!   root of the chord through both samples is reported.
//! - Anything else (same sign, or only the right endpoint zero) reports nothing.
//!
//! A zero at the very last sample starts no segment and is therefore never
//! reported. Finding no crossing is not an error; it is an empty result.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use zerocross::prelude::*;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
//! let y = vec![-1.0, 1.0, 0.0, -2.0, -1.0];
//!
//! // Build the processor
//! let finder = ZeroCrossing::new()
//!     .mode(All)          // Report every crossing
//!     .adapter(Batch)
//!     .build()?;
//!
//! // Scan the series
//! let report = finder.find(&x, &y)?;
//!
//! assert_eq!(report.xs(), vec![0.5, 2.0]);
//! println!("{}", report);
//! # Result::<(), ZeroCrossError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 5
//!   X range:     0.000000 .. 4.000000
//!   Mode:        all
//!
//! Zero Crossings:
//!             X0  Segment          Kind         X_lo         X_hi
//!   -------------------------------------------------------------
//!       0.500000        0  interpolated     0.000000     1.000000
//!       2.000000        2         exact     2.000000     3.000000
//! ```
//!
//! ### Selecting One Crossing
//!
//! ```rust
//! use zerocross::prelude::*;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0];
//! let y = vec![-2.0, 2.0, -2.0, 2.0];
//!
//! let first = ZeroCrossing::new().mode(First).adapter(Batch).build()?;
//! let last = ZeroCrossing::new().mode(Last).adapter(Batch).build()?;
//!
//! assert_eq!(first.find(&x, &y)?.xs(), vec![0.5]);
//! assert_eq!(last.find(&x, &y)?.xs(), vec![2.5]);
//! # Result::<(), ZeroCrossError>::Ok(())
//! ```
//!
//! ### Close-up Range and Unsorted Input
//!
//! ```rust
//! use zerocross::prelude::*;
//!
//! // Samples arrive out of order
//! let x = vec![3.0, 0.0, 2.0, 1.0];
//! let y = vec![2.0, -2.0, -2.0, 2.0];
//!
//! let finder = ZeroCrossing::new()
//!     .sort_input()       // Sort by x instead of rejecting the input
//!     .x_range(1.0, 3.0)  // Only look at 1 <= x <= 3
//!     .adapter(Batch)
//!     .build()?;
//!
//! let report = finder.find(&x, &y)?;
//! assert_eq!(report.xs(), vec![1.5, 2.5]);
//! # Result::<(), ZeroCrossError>::Ok(())
//! ```
//!
//! ### Streaming and Online
//!
//! Chunked and point-by-point adapters report the same crossings a batch scan
//! of the concatenated samples would:
//!
//! ```rust
//! use zerocross::prelude::*;
//!
//! let mut stream = ZeroCrossing::new().adapter(Streaming).build()?;
//! stream.process_chunk(&[0.0, 1.0], &[-1.0, -0.5])?;
//! stream.process_chunk(&[2.0, 3.0], &[0.5, 1.0])?;
//! assert_eq!(stream.finalize().xs(), vec![1.5]);
//!
//! let mut online = ZeroCrossing::new().mode(First).adapter(Online).build()?;
//! assert!(online.add_point(0.0, 1.0)?.is_none());
//! let c = online.add_point(1.0, -1.0)?;
//! assert_eq!(c.map(|c| c.x), Some(0.5));
//! # Result::<(), ZeroCrossError>::Ok(())
//! ```
//!
//! ### Replicates and Confidence Bands
//!
//! When each x has several replicate differences (one per seed), reduce them
//! to a mean curve with percentile bootstrap bounds, then scan the mean:
//!
//! ```rust
//! use zerocross::prelude::*;
//!
//! let x = vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
//! let diff = vec![-3.0, -2.0, -1.0, 1.0, 2.0, 3.0];
//!
//! let band = BootstrapInterval::new(0.95).resamples(500).seed(7).band(&x, &diff)?;
//! assert_eq!(band.x, vec![0.0, 1.0]);
//! assert_eq!(band.mean, vec![-2.0, 2.0]);
//!
//! // Resampled means never leave the range of the replicates
//! assert_eq!(band.excludes_zero(), vec![0.0, 1.0]);
//!
//! let mean_curve = Series::from_slices(&band.x, &band.mean)?;
//! assert_eq!(find_crossings(&mean_curve, First).xs(), vec![0.5]);
//! # Result::<(), ZeroCrossError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `find` returns a `Result<CrossingReport<T>, ZeroCrossError>`:
//!
//! - **`Ok(CrossingReport<T>)`**: The selected crossings plus a summary of the scanned series.
//! - **`Err(ZeroCrossError)`**: Invalid input (mismatched lengths, NaN, descending x, ...).
//!
//! ```rust
//! use zerocross::prelude::*;
//!
//! let finder = ZeroCrossing::new().adapter(Batch).build()?;
//!
//! match finder.find(&[0.0, 2.0, 1.0], &[1.0, -1.0, 1.0]) {
//!     Ok(report) => println!("{}", report),
//!     Err(e) => eprintln!("Scan failed: {}", e),
//! }
//! # Result::<(), ZeroCrossError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with an allocator. Disable
//! default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! zerocross = { version = "0.2", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - sign classification and linear roots.
mod math;

// Layer 3: Algorithms - the crossing rule and segment scan.
mod algorithms;

// Layer 4: Evaluation - bootstrap bands for per-x means.
mod evaluation;

// Layer 5: Engine - validation, series, execution and output.
mod engine;

// Layer 6: Adapters - execution mode adapters.
mod adapters;

// Layer 7: High-level fluent API for zero-crossing detection.
mod api;

// Standard zerocross prelude.
pub mod prelude {
    pub use crate::api::{
        find_crossings,
        Adapter::{Batch, Online, Streaming},
        BootstrapInterval, Crossing, CrossingKind,
        CrossingKind::{Exact, Interpolated},
        CrossingMode,
        CrossingMode::{All, First, Last},
        CrossingReport, CrossingResult, MeanBand, MeanInterval, Sample, Series, XRange,
        ZeroCrossError, ZeroCrossingBuilder as ZeroCrossing,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
