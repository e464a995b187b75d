//! Composition registry and the per-frame render entry point.
//!
//! A composition is static configuration: output format plus a timeline of
//! scenes. Everything about it (total length, per-scene windows) is known
//! before the first frame renders, which is what export sizing needs.

use crate::{
    foundation::{
        core::{Canvas, Fps, FrameIndex},
        error::{ReelError, ReelResult},
        math::stable_hash64,
    },
    scene::{context::SceneCtx, tree::{Group, Node}},
    scenes,
    timeline::sequencer::{Scene, Timeline, Transition},
};

/// A named, fully static description of one video.
#[derive(Clone, Debug)]
pub struct Composition {
    /// Registry id.
    pub id: String,
    /// Frame rate of the output video.
    pub fps: Fps,
    /// Output dimensions in pixels.
    pub canvas: Canvas,
    /// Root seed; each scene derives its own stream from this and its id.
    pub seed: u64,
    timeline: Timeline,
}

impl Composition {
    /// The 41-second product promo: nine scenes, 15-frame cross-fades.
    pub fn promo() -> ReelResult<Self> {
        let fade = || Some(Transition::fade(15));
        let timeline = Timeline::new(vec![
            (Scene::new("hook", 90, scenes::hook::render), fade()),
            (Scene::new("problem", 120, scenes::problem::render), fade()),
            (Scene::new("solution", 150, scenes::solution::render), fade()),
            (Scene::new("dashboard", 180, scenes::dashboard::render), fade()),
            (
                Scene::new("scheduling", 180, scenes::scheduling::render),
                fade(),
            ),
            (Scene::new("features", 180, scenes::features::render), fade()),
            (
                Scene::new("use_cases", 180, scenes::use_cases::render),
                fade(),
            ),
            (Scene::new("privacy", 90, scenes::privacy::render), fade()),
            (Scene::new("cta", 180, scenes::cta::render), None),
        ])?;

        Ok(Self {
            id: "promo".to_string(),
            fps: Fps::new(30)?,
            canvas: Canvas::new(1920, 1080)?,
            seed: 0x5377_6966_7473_656e, // stable across releases
            timeline,
        })
    }

    /// Look up a registered composition by id.
    pub fn find(id: &str) -> ReelResult<Self> {
        match id {
            "promo" => Self::promo(),
            other => Err(ReelError::validation(format!(
                "unknown composition '{other}' (known: promo)"
            ))),
        }
    }

    /// Length of the composition in frames.
    pub fn total_frames(&self) -> u64 {
        self.timeline.total_frames()
    }

    /// The scene layout, for window inspection.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Evaluate one frame to a paint-ready tree.
    ///
    /// Outside transitions the result wraps a single scene; inside one it
    /// holds outgoing-then-incoming, each under a group carrying its blend
    /// weight as opacity.
    #[tracing::instrument(level = "debug", skip(self), fields(comp = %self.id))]
    pub fn render_frame(&self, frame: FrameIndex) -> ReelResult<Node> {
        let active = self.timeline.resolve(frame)?;
        tracing::debug!(scenes = active.len(), "resolved frame");

        let mut layers = Vec::with_capacity(active.len());
        for entry in active {
            let scene = &self.timeline.scenes()[entry.index];
            let ctx = SceneCtx {
                local: entry.local,
                global: frame,
                fps: self.fps,
                canvas: self.canvas,
                seed: stable_hash64(self.seed, &scene.id),
            };
            let tree = (scene.render)(&ctx)?;
            layers.push(Node::from(Group::new(vec![tree]).with_opacity(entry.blend)));
        }
        Ok(Group::new(layers).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::fingerprint_tree;

    #[test]
    fn promo_length_is_durations_minus_overlaps() {
        let comp = Composition::promo().unwrap();
        // 90+120+150+180*4+90+180 = 1350, minus 8 fades of 15.
        assert_eq!(comp.total_frames(), 1230);
    }

    #[test]
    fn promo_windows_are_precomputed() {
        let comp = Composition::promo().unwrap();
        let starts: Vec<u64> = comp.timeline().windows().iter().map(|w| w.start.0).collect();
        assert_eq!(starts, vec![0, 75, 180, 315, 480, 645, 810, 975, 1050]);
    }

    #[test]
    fn single_scene_frames_wrap_one_layer() {
        let comp = Composition::promo().unwrap();
        let Node::Group(root) = comp.render_frame(FrameIndex(30)).unwrap() else {
            panic!("expected group root");
        };
        assert_eq!(root.children.len(), 1);
        let Node::Group(layer) = &root.children[0] else {
            panic!("expected layer group");
        };
        assert_eq!(layer.opacity, 1.0);
    }

    #[test]
    fn transition_frames_blend_two_layers() {
        let comp = Composition::promo().unwrap();
        let Node::Group(root) = comp.render_frame(FrameIndex(80)).unwrap() else {
            panic!("expected group root");
        };
        assert_eq!(root.children.len(), 2);
        let weights: Vec<f64> = root
            .children
            .iter()
            .map(|n| match n {
                Node::Group(g) => g.opacity,
                other => panic!("expected group, got {other:?}"),
            })
            .collect();
        assert!((weights[0] + weights[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_frames_at_or_past_the_end() {
        let comp = Composition::promo().unwrap();
        assert!(comp.render_frame(FrameIndex(1229)).is_ok());
        assert!(matches!(
            comp.render_frame(FrameIndex(1230)),
            Err(ReelError::OutOfRange(_))
        ));
    }

    #[test]
    fn rendering_is_reproducible() {
        let comp = Composition::promo().unwrap();
        for frame in [0, 80, 333, 1000, 1229] {
            let a = fingerprint_tree(&comp.render_frame(FrameIndex(frame)).unwrap());
            let b = fingerprint_tree(&comp.render_frame(FrameIndex(frame)).unwrap());
            assert_eq!(a, b, "frame {frame}");
        }
    }

    #[test]
    fn registry_finds_known_ids_only() {
        assert!(Composition::find("promo").is_ok());
        assert!(matches!(
            Composition::find("trailer"),
            Err(ReelError::Validation(_))
        ));
    }
}
