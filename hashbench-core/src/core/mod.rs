//! Core hashing engine
//! 
//! This module contains salt resolution, algorithm dispatch, timing, result
//! aggregation, and off-thread execution.

pub mod salt;
pub mod hashing;
pub mod timing;
pub mod results;
pub mod execution;
