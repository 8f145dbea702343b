//! Infrastructure layer - configuration and logging
//! 
//! This module wires the engine to its environment: `.env` and `HASHBENCH_*`
//! configuration, JSON config files, and the `env_logger` backend.

pub mod config;
pub mod logger;

// Re-export infrastructure components
pub use config::*;
pub use logger::*;
