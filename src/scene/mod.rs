//! Scene evaluation context and the drawable output tree.

pub mod context;
pub mod tree;
