//! Layer 6: Adapters
//!
//! This layer provides the parallel execution adapters:
//!
//! - **Batch**: One series, scanned with the parallel pass
//! - **Panel**: Many series, scanned concurrently
//!
//! Streaming and online scans are inherently sequential and come from the
//! `zerocross` crate unchanged.

// Parallel batch adapter.
pub mod batch;

// Multi-series panel adapter.
pub mod panel;
