//! Execution timing
//!
//! Repeats a computation and reduces the per-run tick counts to a stable
//! millisecond average.

pub mod timing_harness;

pub use timing_harness::*;
