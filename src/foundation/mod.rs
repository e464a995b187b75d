//! Shared vocabulary types, errors, and deterministic hashing.

pub mod core;
pub mod error;
pub mod math;
