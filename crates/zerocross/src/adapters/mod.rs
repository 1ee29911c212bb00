//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing processors that adapt the engine layer to
//! different ways samples become available:
//!
//! - **Batch**: Whole series in memory
//! - **Streaming**: Consecutive chunks of one long series
//! - **Online**: One point at a time
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Batch adapter for in-memory series.
pub mod batch;

/// Streaming adapter for chunked series.
pub mod streaming;

/// Online adapter for point-by-point detection.
pub mod online;
