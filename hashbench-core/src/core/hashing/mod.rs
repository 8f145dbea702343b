//! Hashing functionality for the engine
//!
//! This module maps an algorithm selection onto SHA-256, SHA-512, MD5, BCrypt,
//! or Argon2id and computes the encoded output.

pub mod hash_algorithm;
pub mod hash_dispatcher;

// Re-export all public items from submodules
pub use hash_algorithm::*;
pub use hash_dispatcher::*;
