//! Layer 5: Engine
//!
//! This layer provides the parallel scan pass that is plugged into the
//! `zerocross` execution engine.

// Parallel scan pass using CPU threads
pub mod executor;
