//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates scanning: it validates and holds input series,
//! applies crossing-selection modes, tracks crossings over sample streams,
//! and shapes the output.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Scan execution and crossing modes.
pub mod executor;

/// Validated input series.
pub mod series;

/// Incremental tracking for streams.
pub mod tracker;

/// Validation utilities.
pub mod validator;

/// Output types for scans.
pub mod output;
