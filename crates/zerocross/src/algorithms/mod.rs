//! Layer 3: Algorithms
//!
//! This layer implements the crossing rule and the segment scan. It contains
//! the numerical logic of the estimator but is orchestrated by the engine
//! layer.

// Segment classification and lazy scanning.
pub mod scan;
