//! Shared types, constants, and errors
//! 
//! This module contains common types, constants, and error definitions used
//! throughout the engine.

pub mod types;
pub mod constants;
pub mod error;

// Re-export shared components
pub use types::*;
pub use constants::*;
pub use error::*;

/// Result type used across the engine
pub type HashOutcome<T> = Result<T, HashError>;
