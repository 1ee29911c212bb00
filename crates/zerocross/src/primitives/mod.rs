//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive data structures and utility functions
//! used throughout the crate. It has zero internal dependencies within the
//! crate.
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
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Sorting utilities.
pub mod sorting;

/// Close-up x-windows.
pub mod window;

/// Shared error types.
pub mod errors;

/// Crossing records.
pub mod crossing;
