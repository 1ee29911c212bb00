//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numeric building blocks of the estimator:
//! - Sign classification of sampled values
//! - The root of the line through two samples
//! - Means and interpolated quantiles
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sign classification.
pub mod sign;

/// Linear root between two samples.
pub mod root;

/// Means and quantiles.
pub mod quantile;
