//! The explicit clock and configuration passed to render functions.

use crate::foundation::core::{Canvas, Fps, FrameIndex};

/// Read-only clock and configuration handed to every scene and primitive.
///
/// There is no ambient/global frame state anywhere in the crate: whoever
/// needs the clock receives it as an explicit argument, which keeps every
/// render function pure and testable in isolation.
#[derive(Clone, Copy, Debug)]
pub struct SceneCtx {
    /// Frame relative to the scene's own start (what scenes animate on).
    pub local: FrameIndex,
    /// Absolute frame in the overall composition.
    pub global: FrameIndex,
    /// Composition frame rate, for frame-to-seconds conversion.
    pub fps: Fps,
    /// Output dimensions scenes lay out against.
    pub canvas: Canvas,
    /// Stable per-scene seed; all visual randomness derives from this.
    pub seed: u64,
}

impl SceneCtx {
    /// Context for testing a scene or primitive in isolation.
    pub fn standalone(local: FrameIndex, fps: Fps, canvas: Canvas, seed: u64) -> Self {
        Self {
            local,
            global: local,
            fps,
            canvas,
            seed,
        }
    }

    /// Scene-local frame as a float, the usual spring input.
    pub fn frame_f64(&self) -> f64 {
        self.local.0 as f64
    }
}
