//! Constants for the hashing engine
//! 
//! This module contains all constants used throughout the engine.

// Salt constants
pub const SALT_PLACEHOLDER: &str = "Optional salt (base64 or text)";

// Timing constants
pub const TIMING_RUNS: usize = 10;
pub const TICKS_PER_SECOND: u64 = 1_000_000_000; // Instant resolution is nanoseconds
pub const TIME_DECIMALS: i32 = 3;

// Output constants
pub const ERROR_TOKEN: &str = "Error";

// BCrypt constants
pub const DEFAULT_BCRYPT_COST: u32 = 10;
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

// Argon2id constants
pub const DEFAULT_ARGON2_MEMORY: &str = "65536"; // 64MB
pub const DEFAULT_ARGON2_ITERATIONS: &str = "3";
pub const DEFAULT_ARGON2_PARALLELISM: &str = "2";
pub const MIN_ARGON2_MEMORY_KIB: u32 = 8192; // 8MB
pub const MIN_ARGON2_ITERATIONS: u32 = 1;
pub const MIN_ARGON2_PARALLELISM: u32 = 1;
pub const MIN_ARGON2_SALT_LENGTH: usize = 8;
pub const ARGON2_OUTPUT_LENGTH: usize = 32;

// Configuration keys
pub const ENV_PREFIX: &str = "HASHBENCH_";
pub const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) { "debug" } else { "info" };

// Build information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
