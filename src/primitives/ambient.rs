//! Ambient background primitives.
//!
//! These never "enter": they loop or drift forever, so none of them use
//! springs. All spatial jitter comes from a per-primitive [`Rng64`] stream
//! seeded off the scene seed, which keeps every frame reproducible while
//! still looking scattered.

use kurbo::{Point, Vec2};

use crate::{
    animation::{
        interpolate::{InterpOptions, interpolate},
        ops::{cycle01, osc, pulse01},
    },
    foundation::{core::Color, error::ReelResult, math::Rng64},
    scene::{context::SceneCtx, tree::{Circle, Group, Line, Node, Stroke}},
};

/// Scattered dots swaying side to side in place.
#[derive(Clone, Debug)]
pub struct ParticleField {
    /// Number of dots.
    pub count: usize,
    /// Dot color.
    pub color: Color,
    /// Horizontal sway amplitude in pixels.
    pub sway: f64,
}

impl ParticleField {
    const SALT: u64 = 0x9e37_79b9_7f4a_7c15;

    /// Field of `count` dots with the standard 40-pixel sway.
    pub fn new(count: usize, color: Color) -> Self {
        Self {
            count,
            color,
            sway: 40.0,
        }
    }

    /// Render the field at the context's frame.
    pub fn evaluate(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let frame = ctx.local.0;
        let mut rng = Rng64::new(ctx.seed ^ Self::SALT);
        let mut children = Vec::with_capacity(self.count);
        for i in 0..self.count {
            let base_x = rng.next_f64_range(0.0, ctx.canvas.width as f64);
            let base_y = rng.next_f64_range(0.0, ctx.canvas.height as f64);
            let radius = rng.next_f64_range(1.5, 4.0);
            let phase = i as f64 * 0.5;
            let x = base_x + osc(frame, 0.02, phase) * self.sway;
            let opacity = 0.08 + osc(frame, 0.04, i as f64) * 0.05;
            children.push(Node::from(Circle {
                center: Point::new(x, base_y),
                radius,
                fill: Some(self.color),
                stroke: None,
                opacity,
                blur: 0.0,
            }));
        }
        Ok(Group::new(children).into())
    }
}

/// Dots rising steadily and wrapping at the top edge.
#[derive(Clone, Debug)]
pub struct DriftField {
    /// Number of dots.
    pub count: usize,
    /// Dot color.
    pub color: Color,
    /// Upward speed in pixels per frame.
    pub speed: f64,
}

impl DriftField {
    const SALT: u64 = 0xd6e8_feb8_6659_fd93;

    /// Field of `count` dots rising at `speed` pixels per frame.
    pub fn new(count: usize, color: Color, speed: f64) -> Self {
        Self {
            count,
            color,
            speed,
        }
    }

    /// Render the field at the context's frame.
    pub fn evaluate(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let frame = ctx.local.0;
        let height = ctx.canvas.height as f64;
        let mut rng = Rng64::new(ctx.seed ^ Self::SALT);
        let mut children = Vec::with_capacity(self.count);
        for i in 0..self.count {
            let x = rng.next_f64_range(0.0, ctx.canvas.width as f64);
            let base_y = rng.next_f64_range(0.0, height);
            let radius = rng.next_f64_range(1.0, 3.0);
            let y = (base_y - frame as f64 * self.speed).rem_euclid(height);
            let opacity = 0.05 + 0.1 * pulse01(frame, 0.05, i as f64);
            children.push(Node::from(Circle {
                center: Point::new(x, y),
                radius,
                fill: Some(self.color),
                stroke: None,
                opacity,
                blur: 0.0,
            }));
        }
        Ok(Group::new(children).into())
    }
}

/// Large blurred disc floating slowly around its anchor.
#[derive(Clone, Debug)]
pub struct GlowOrb {
    /// Anchor the orb floats around.
    pub center: Point,
    /// Rest radius in pixels.
    pub radius: f64,
    /// Fill color.
    pub color: Color,
    /// Phase offset so multiple orbs in a scene do not move in lockstep.
    pub phase: f64,
}

impl GlowOrb {
    /// Render the orb at the context's frame.
    pub fn evaluate(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let frame = ctx.local.0;
        let dx = osc(frame, 0.02, self.phase) * 30.0;
        let dy = osc(frame, 0.015, self.phase + 1.0) * 20.0;
        let pulse = 0.85 + 0.15 * osc(frame, 0.03, self.phase);
        Ok(Circle {
            center: self.center + Vec2::new(dx, dy),
            radius: self.radius * pulse,
            fill: Some(self.color),
            stroke: None,
            opacity: 0.35,
            blur: 40.0,
        }
        .into())
    }
}

/// Concentric stroked circles growing from a point and fading out, on a
/// staggered loop.
#[derive(Clone, Debug)]
pub struct ExpandingRings {
    /// Point the rings grow from.
    pub center: Point,
    /// Radius at scale 1 in pixels.
    pub base_radius: f64,
    /// Ring stroke color.
    pub color: Color,
    /// Number of concurrently cycling rings.
    pub ring_count: usize,
    /// Loop length of one ring in frames.
    pub period: u64,
}

impl ExpandingRings {
    /// Frames between successive rings starting their cycle.
    const RING_STAGGER: u64 = 25;

    /// Render the rings at the context's frame.
    pub fn evaluate(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let frame = ctx.local.0;
        let mut children = Vec::with_capacity(self.ring_count);
        for i in 0..self.ring_count {
            let t = cycle01(frame + i as u64 * Self::RING_STAGGER, self.period);
            let scale = interpolate(t, &[0.0, 1.0], &[0.6, 2.0], InterpOptions::clamp_both())?;
            let opacity = interpolate(
                t,
                &[0.0, 0.2, 1.0],
                &[0.0, 0.25, 0.0],
                InterpOptions::clamp_both(),
            )?;
            children.push(Node::from(Circle {
                center: self.center,
                radius: self.base_radius * scale,
                fill: None,
                stroke: Some(Stroke::new(self.color, 2.0)),
                opacity,
                blur: 0.0,
            }));
        }
        Ok(Group::new(children).into())
    }
}

/// Faint full-canvas grid scrolling sideways.
#[derive(Clone, Debug)]
pub struct GridLines {
    /// Line color.
    pub color: Color,
    /// Distance between lines in pixels.
    pub spacing: f64,
    /// Horizontal scroll speed in pixels per frame.
    pub speed: f64,
}

impl GridLines {
    /// Render the grid at the context's frame.
    pub fn evaluate(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let frame = ctx.local.0;
        let width = ctx.canvas.width as f64;
        let height = ctx.canvas.height as f64;
        let stroke = Stroke::new(self.color, 1.0);

        let offset = (frame as f64 * self.speed).rem_euclid(self.spacing);
        let mut children = Vec::new();
        let mut x = offset;
        while x < width {
            children.push(Node::from(Line {
                from: Point::new(x, 0.0),
                to: Point::new(x, height),
                stroke,
                opacity: 0.06,
            }));
            x += self.spacing;
        }
        // Horizontal rules stay fixed so the scroll reads as lateral motion.
        let mut y = 0.0;
        while y < height {
            children.push(Node::from(Line {
                from: Point::new(0.0, y),
                to: Point::new(width, y),
                stroke,
                opacity: 0.06,
            }));
            y += self.spacing;
        }
        Ok(Group::new(children).into())
    }
}
