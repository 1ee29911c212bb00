//! Layer 4: Evaluation
//!
//! This layer spreads bootstrap band estimation for replicate sweeps across
//! CPU cores, one x-value group per task.

// Parallel bootstrap bands
pub mod bootstrap;
