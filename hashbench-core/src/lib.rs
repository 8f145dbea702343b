//! Hashbench Core
//! 
//! Multi-algorithm hashing benchmark engine.
//! Given a text input, an optional salt, and a hashing scheme, computes the
//! encoded output and a reproducible average execution time.
//! 
//! ## Architecture
//! 
//! - **Core**: salt resolution, algorithm dispatch, timing, results, execution
//! - **Shared**: common types, constants, and errors
//! - **Infrastructure**: configuration and logging
//! 
//! ## Algorithms
//! 
//! - SHA-256, SHA-512, MD5 over `input || salt`, Base64 encoded
//! - BCrypt with a tunable cost, self-salted
//! - Argon2id with tunable memory, iterations, and lanes; requires a salt
//! 
//! ## Usage
//! 
//! ```rust,no_run
//! use hashbench_core::{AlgorithmVariant, ExecutionCoordinator, HashRequest, ResultLog, SaltSpec};
//! 
//! # async fn demo() -> Result<(), hashbench_core::HashError> {
//! let mut coordinator = ExecutionCoordinator::default();
//! let mut log = ResultLog::new();
//! 
//! let request = HashRequest::new("hello", SaltSpec::new("world"), AlgorithmVariant::Sha256);
//! coordinator.run(request, &mut log).await?;
//! 
//! for result in log.results() {
//!     println!("{}", result);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod shared;
pub mod infrastructure;

// Re-export specific components
pub use crate::core::execution::{CoordinatorState, ExecutionCoordinator, HashPipeline, Submission};
pub use crate::core::hashing::{AlgorithmKind, AlgorithmSelection, AlgorithmVariant, Argon2Params, HashDispatcher};
pub use crate::core::results::{Completion, ResultAggregator, ResultLog, ResultSink};
pub use crate::core::salt::{Salt, SaltEncoding, SaltResolver, SaltSpec};
pub use crate::core::timing::{Measurement, TimingHarness};
pub use infrastructure::{init_logging, BenchConfig};

// Re-export shared types
pub use shared::error::{HashError, ValidationError};
pub use shared::types::{HashRequest, HashResult, OutputFormat};
pub use shared::HashOutcome;

// Version information
pub use shared::constants::{NAME, VERSION};

/// Initialize logging from configuration. Safe to call more than once.
pub fn init(config: &BenchConfig) -> HashOutcome<()> {
    config.ensure_valid()?;
    if init_logging(&config.log_level) {
        log::debug!("{} {} initialized", NAME, VERSION);
    }
    Ok(())
}
