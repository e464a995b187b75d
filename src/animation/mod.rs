//! The animation core: pure mappings from frame numbers to values.

pub mod ease;
pub mod interpolate;
pub mod ops;
pub mod spring;
