//! Salt handling for the hashing engine
//!
//! Turns the free-text salt field into bytes, or into "no salt".

pub mod salt_resolver;

pub use salt_resolver::*;
