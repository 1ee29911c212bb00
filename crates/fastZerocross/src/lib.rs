//! # fastZerocross — Parallel zero-crossing estimation
//!
//! Multi-threaded companion to the [`zerocross`] crate. The crossing rule,
//! validation and reports are those of `zerocross`; this crate adds:
//!
//! - a **parallel scan pass** (via `rayon`) for long series,
//! - a **Panel** adapter that scans many series concurrently,
//! - `ndarray` inputs for both,
//! - parallel bootstrap bands for replicate sweeps.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastZerocross::prelude::*;
//! use ndarray::Array1;
//!
//! let x = Array1::linspace(0.0, 10.0, 10_001);
//! let y = x.mapv(|v: f64| (v - 3.3).tanh());
//!
//! let finder = ZeroCrossing::<f64>::new()
//!     .mode(First)
//!     .adapter(Batch)     // Parallel by default
//!     .build()?;
//!
//! let report = finder.find(&x, &y)?;
//! assert!((report.xs()[0] - 3.3).abs() < 1e-3);
//! # Result::<(), ZeroCrossError>::Ok(())
//! ```
//!
//! ### Panels
//!
//! ```rust
//! use fastZerocross::prelude::*;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0];
//! let slope = vec![-2.0, -1.0, 1.0, 2.0];
//! let margin = vec![1.0, 0.5, 0.0, -0.5];
//!
//! let panel = ZeroCrossing::new().adapter(Panel).build()?;
//! let reports = panel.find_columns(&x, &[("slope", &slope[..]), ("margin", &margin[..])])?;
//!
//! assert_eq!(reports[0].0, "slope");
//! assert_eq!(reports[0].1.xs(), vec![1.5]);
//! assert_eq!(reports[1].1.xs(), vec![2.0]);
//! # Result::<(), ZeroCrossError>::Ok(())
//! ```
//!
//! ### Bootstrap Bands
//!
//! ```rust
//! use fastZerocross::prelude::*;
//!
//! let x = vec![0.0, 0.0, 1.0, 1.0];
//! let diff = vec![-1.0, -3.0, 2.0, 4.0];
//!
//! let method = BootstrapInterval::new(0.95).resamples(500);
//! let band = bootstrap_band(&method, &x, &diff)?;
//!
//! assert_eq!(band, method.band(&x, &diff)?);
//! assert_eq!(band.mean, vec![-2.0, 3.0]);
//! # Result::<(), ZeroCrossError>::Ok(())
//! ```

#![allow(non_snake_case)]

// Layer 4: Evaluation - parallel bootstrap bands.
mod evaluation;

// Layer 5: Engine - parallel scan pass.
mod engine;

// Layer 6: Adapters - parallel execution adapters.
mod adapters;

// Layer 7: High-level fluent API for parallel zero-crossing detection.
mod api;

// Input data handling.
mod input;

// Standard fastZerocross prelude.
pub mod prelude {
    pub use crate::api::{
        bootstrap_band, find_crossings,
        Adapter::{Batch, Online, Panel, Streaming},
        BootstrapInterval, Crossing, CrossingKind,
        CrossingKind::{Exact, Interpolated},
        CrossingMode,
        CrossingMode::{All, First, Last},
        CrossingReport, CrossingResult, MeanBand, MeanInterval, Sample, Series, SeriesInput,
        XRange, ZeroCrossError, ZeroCrossingBuilder as ZeroCrossing,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
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
