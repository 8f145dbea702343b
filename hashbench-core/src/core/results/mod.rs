//! Result packaging and the caller-owned result log

pub mod result_aggregator;
pub mod result_log;

pub use result_aggregator::*;
pub use result_log::*;
