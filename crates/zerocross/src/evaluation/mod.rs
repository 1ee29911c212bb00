//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer summarises replicate measurements before they are scanned:
//! per-x means of paired differences with percentile bootstrap intervals.
//! The mean curve is what the engine scans for crossings; the interval band
//! shows where that curve is distinguishable from zero.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Percentile bootstrap intervals and bands.
pub mod bootstrap;
