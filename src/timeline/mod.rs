//! Placement of scenes on the global frame axis.

pub mod sequencer;
