//! Frame-deterministic description of the Swiftsend launch video.
//!
//! Every frame is a pure function of its index: the animation core
//! (piecewise-linear [`interpolate`], damped-oscillator [`spring`]) feeds
//! per-scene visual trees, and the [`Timeline`] sequencer places nine scenes
//! on the global frame axis with cross-fade overlaps. The output of a frame
//! is a serializable tree of drawable nodes; rasterization and encoding are
//! a host concern.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod animation;
pub mod composition;
pub mod fingerprint;
pub mod foundation;
pub mod primitives;
pub mod scene;
pub mod scenes;
pub mod timeline;

pub use animation::{
    ease::Ease,
    interpolate::{Extrapolate, InterpOptions, interpolate},
    spring::{SpringConfig, spring},
};
pub use composition::Composition;
pub use fingerprint::{FrameFingerprint, fingerprint_tree};
pub use foundation::{
    core::{Canvas, Color, Fps, FrameIndex, FrameRange},
    error::{ReelError, ReelResult},
};
pub use scene::{context::SceneCtx, tree::Node};
pub use timeline::sequencer::{ActiveScene, Scene, Timeline, Transition, TransitionKind};
