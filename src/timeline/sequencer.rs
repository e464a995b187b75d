//! Scene sequencing.
//!
//! Scenes are laid out back to back; a transition between two adjacent
//! scenes *overlaps* them, pulling the incoming scene's window forward so
//! both are live for the transition's duration. Total composition length is
//! therefore the sum of scene durations minus the sum of transition
//! durations. All windows are computed once at construction; resolving a
//! frame is a table lookup, never a search over render state.

use crate::{
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{ReelError, ReelResult},
    },
    scene::{context::SceneCtx, tree::Node},
};

/// A scene's render function: pure in the context, fresh tree out.
pub type SceneFn = fn(&SceneCtx) -> ReelResult<Node>;

/// A time-bounded, self-contained segment of the composition.
#[derive(Clone)]
pub struct Scene {
    /// Stable identifier, also the name the scene's random seed derives from.
    pub id: String,
    /// Nominal length before transition overlap is subtracted.
    pub duration_frames: u64,
    /// The scene's render function.
    pub render: SceneFn,
}

impl Scene {
    /// Scene with the given id, duration, and render function.
    pub fn new(id: impl Into<String>, duration_frames: u64, render: SceneFn) -> Self {
        Self {
            id: id.into(),
            duration_frames,
            render,
        }
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("id", &self.id)
            .field("duration_frames", &self.duration_frames)
            .finish_non_exhaustive()
    }
}

/// Blend rule applied over a scene boundary overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// Outgoing opacity ramps 1 -> 0 while incoming ramps 0 -> 1, linear in
    /// frame.
    Fade,
}

/// A blended overlap between two adjacent scenes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Transition {
    /// Overlap length; both neighbors are live for this many frames.
    pub duration_frames: u64,
    /// Blend rule applied over the overlap.
    pub kind: TransitionKind,
}

impl Transition {
    /// Linear cross-fade of the given length.
    pub fn fade(duration_frames: u64) -> Self {
        Self {
            duration_frames,
            kind: TransitionKind::Fade,
        }
    }
}

/// One scene's contribution to a resolved frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveScene {
    /// Index into [`Timeline::scenes`].
    pub index: usize,
    /// Frame relative to the scene's own window start.
    pub local: FrameIndex,
    /// Compositing weight in `[0, 1]`; exactly 1.0 outside overlaps.
    pub blend: f64,
}

/// Precomputed scene windows over the global frame axis.
#[derive(Clone, Debug)]
pub struct Timeline {
    scenes: Vec<Scene>,
    transitions: Vec<Transition>, // transitions[i] sits between scene i and i+1
    windows: Vec<FrameRange>,
    total_frames: u64,
}

impl Timeline {
    /// Build a timeline from `(scene, transition-after)` pairs. The final
    /// scene must not declare a trailing transition.
    pub fn new(entries: Vec<(Scene, Option<Transition>)>) -> ReelResult<Self> {
        if entries.is_empty() {
            return Err(ReelError::validation("timeline needs at least one scene"));
        }

        let n = entries.len();
        let mut scenes = Vec::with_capacity(n);
        let mut transitions = Vec::with_capacity(n.saturating_sub(1));

        for (i, (scene, transition)) in entries.into_iter().enumerate() {
            if scene.duration_frames == 0 {
                return Err(ReelError::validation(format!(
                    "scene '{}' must have duration_frames > 0",
                    scene.id
                )));
            }
            if i + 1 == n {
                if transition.is_some() {
                    return Err(ReelError::validation(format!(
                        "scene '{}' is last and cannot have a trailing transition",
                        scene.id
                    )));
                }
            } else {
                transitions.push(transition.unwrap_or(Transition::fade(0)));
            }
            scenes.push(scene);
        }

        // A transition consumes frames from both neighbors, so it must fit
        // strictly inside each of them.
        for (i, tr) in transitions.iter().enumerate() {
            let before = scenes[i].duration_frames;
            let after = scenes[i + 1].duration_frames;
            if tr.duration_frames >= before || tr.duration_frames >= after {
                return Err(ReelError::validation(format!(
                    "transition between '{}' and '{}' ({} frames) must be shorter than both scenes",
                    scenes[i].id, scenes[i + 1].id, tr.duration_frames
                )));
            }
        }

        // Adjacent transitions both eat into the scene they share. If their
        // combined length exceeded it, three windows would cover one frame
        // and `resolve` could no longer report exactly two scenes inside an
        // overlap.
        for i in 1..transitions.len() {
            let combined = transitions[i - 1].duration_frames + transitions[i].duration_frames;
            if combined > scenes[i].duration_frames {
                return Err(ReelError::validation(format!(
                    "transitions around '{}' ({} + {} frames) exceed its {} frames",
                    scenes[i].id,
                    transitions[i - 1].duration_frames,
                    transitions[i].duration_frames,
                    scenes[i].duration_frames
                )));
            }
        }

        let mut windows = Vec::with_capacity(n);
        let mut start = 0u64;
        for (i, scene) in scenes.iter().enumerate() {
            let end = start + scene.duration_frames;
            windows.push(FrameRange::new(FrameIndex(start), FrameIndex(end))?);
            if i < transitions.len() {
                start = end - transitions[i].duration_frames;
            }
        }
        let total_frames = windows.last().map(|w| w.end.0).unwrap_or(0);

        Ok(Self {
            scenes,
            transitions,
            windows,
            total_frames,
        })
    }

    /// Composition length: the sum of scene durations minus overlaps.
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// The scenes in playback order.
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Absolute window of each scene, index-aligned with [`Self::scenes`].
    pub fn windows(&self) -> &[FrameRange] {
        &self.windows
    }

    /// Overlap window between scene `i` and `i + 1`; empty when the
    /// transition has zero duration.
    fn overlap(&self, i: usize) -> FrameRange {
        FrameRange {
            start: self.windows[i + 1].start,
            end: self.windows[i].end,
        }
    }

    /// Active scene(s) at `frame`: one entry with blend 1.0 outside any
    /// overlap, outgoing-then-incoming with complementary blends inside one.
    pub fn resolve(&self, frame: FrameIndex) -> ReelResult<Vec<ActiveScene>> {
        if frame.0 >= self.total_frames {
            return Err(ReelError::out_of_range(format!(
                "frame {} >= total {}",
                frame.0, self.total_frames
            )));
        }

        for i in 0..self.transitions.len() {
            let overlap = self.overlap(i);
            if overlap.contains(frame) {
                let dur = overlap.len_frames();
                let denom = dur.saturating_sub(1);
                let p = if denom == 0 {
                    1.0
                } else {
                    (frame.0 - overlap.start.0) as f64 / denom as f64
                };
                return Ok(vec![
                    self.active(i, frame, 1.0 - p),
                    self.active(i + 1, frame, p),
                ]);
            }
        }

        let i = self
            .windows
            .iter()
            .position(|w| w.contains(frame))
            .ok_or_else(|| {
                // Unreachable with validated windows; surfaced rather than
                // panicking.
                ReelError::out_of_range(format!("frame {} matched no scene window", frame.0))
            })?;
        Ok(vec![self.active(i, frame, 1.0)])
    }

    fn active(&self, index: usize, frame: FrameIndex, blend: f64) -> ActiveScene {
        ActiveScene {
            index,
            local: FrameIndex(frame.0 - self.windows[index].start.0),
            blend,
        }
    }
}
