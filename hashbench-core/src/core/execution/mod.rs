//! Off-thread execution of hash runs
//!
//! The pipeline (salt → dispatch → timing → aggregation) runs on a blocking
//! worker; finished runs come back to the owning thread over a channel.

pub mod pipeline;
pub mod execution_coordinator;

pub use pipeline::*;
pub use execution_coordinator::*;
