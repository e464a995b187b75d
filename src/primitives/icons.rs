//! Stroke-drawn and spring-popped icon primitives.

use kurbo::{Point, Vec2};

use crate::{
    animation::{
        interpolate::{InterpOptions, interpolate},
        ops::{effective_frame, osc},
        spring::{SpringConfig, spring},
    },
    foundation::{core::Color, error::ReelResult},
    scene::{
        context::SceneCtx,
        tree::{Circle, Group, Line, Node, Polyline, Rect, Stroke},
    },
};

const WHITE: Color = Color::rgb(255, 255, 255);
const GREEN: Color = Color::rgb(34, 197, 94);

/// Green circle that pops in on a spring, then a checkmark stroke-draws
/// inside it ten frames later. Idles with a gentle scale pulse.
#[derive(Clone, Debug)]
pub struct CheckmarkBadge {
    /// Badge center.
    pub center: Point,
    /// Diameter of the badge's design box in pixels.
    pub size: f64,
    /// Frames before the circle pops in.
    pub delay_frames: u64,
}

impl CheckmarkBadge {
    /// Badge at the given center, size, and entrance delay.
    pub fn new(center: Point, size: f64, delay_frames: u64) -> Self {
        Self {
            center,
            size,
            delay_frames,
        }
    }

    /// Render the badge at the context's frame.
    pub fn evaluate(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let cfg = SpringConfig::smooth();
        let eff = effective_frame(ctx.local.0, self.delay_frames);
        let circle_progress = spring(eff, ctx.fps, &cfg);
        let check_progress = spring(eff - 10.0, ctx.fps, &cfg);

        let pulse = osc(ctx.local.0, 0.1, 0.0) * 0.05 + 1.0;
        let scale = circle_progress * pulse;

        // Geometry in a 100-unit box, scaled to `size`.
        let u = self.size / 100.0;
        let at = |x: f64, y: f64| Point::new((x - 50.0) * u, (y - 50.0) * u);

        let circle = Node::from(Circle {
            center: Point::ZERO,
            radius: 45.0 * u,
            fill: Some(GREEN),
            stroke: None,
            opacity: circle_progress.clamp(0.0, 1.0),
            blur: 3.0,
        });

        let check = Node::from(Polyline {
            points: vec![at(30.0, 50.0), at(45.0, 65.0), at(70.0, 35.0)],
            closed: false,
            stroke: Stroke::new(WHITE, 6.0 * u),
            trim: interpolate(
                check_progress,
                &[0.0, 1.0],
                &[0.0, 1.0],
                InterpOptions::clamp_both(),
            )?,
            opacity: 1.0,
        });

        Ok(Node::from(
            Group::new(vec![circle, check])
                .with_translate(self.center.to_vec2())
                .with_scale(scale),
        ))
    }
}

/// Outlined clock with continuously rotating hands.
#[derive(Clone, Debug)]
pub struct ClockFace {
    /// Clock center.
    pub center: Point,
    /// Face diameter in pixels.
    pub size: f64,
    /// Frames before the face pops in.
    pub delay_frames: u64,
    /// Outline and hand color.
    pub color: Color,
}

impl ClockFace {
    /// White clock at the given center, size, and entrance delay.
    pub fn new(center: Point, size: f64, delay_frames: u64) -> Self {
        Self {
            center,
            size,
            delay_frames,
            color: WHITE,
        }
    }

    /// Render the face and hands at the context's frame.
    pub fn evaluate(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let eff = effective_frame(ctx.local.0, self.delay_frames);
        let scale = spring(eff, ctx.fps, &SpringConfig::smooth());

        // Hands rotate linearly in the frame number; minute hand at 3
        // degrees per frame, hour hand geared down.
        let minute_deg = ctx.local.0 as f64 * 3.0;
        let hour_deg = minute_deg * 0.08;

        let r = self.size / 2.0;
        let hand = |angle_deg: f64, len: f64, width: f64| {
            let a = (angle_deg - 90.0).to_radians();
            Node::from(Line {
                from: Point::ZERO,
                to: Point::new(len * a.cos(), len * a.sin()),
                stroke: Stroke::new(self.color, width),
                opacity: 1.0,
            })
        };

        let children = vec![
            Node::from(Circle {
                center: Point::ZERO,
                radius: r * 0.85,
                fill: None,
                stroke: Some(Stroke::new(self.color, self.size * 0.08)),
                opacity: 1.0,
                blur: 0.0,
            }),
            hand(minute_deg, r * 0.45, self.size * 0.08),
            hand(hour_deg + 90.0, r * 0.35, self.size * 0.08),
            Node::from(Circle {
                center: Point::ZERO,
                radius: self.size * 0.06,
                fill: Some(self.color),
                stroke: None,
                opacity: 1.0,
                blur: 0.0,
            }),
        ];

        Ok(Node::from(
            Group::new(children)
                .with_translate(self.center.to_vec2())
                .with_scale(scale),
        ))
    }
}

/// The logo mark: a paper plane that stroke-draws while tilting upright,
/// then floats and glows once settled.
#[derive(Clone, Debug)]
pub struct PaperPlane {
    /// Plane center.
    pub center: Point,
    /// Design-box size in pixels.
    pub size: f64,
    /// Frames before the outline starts drawing.
    pub delay_frames: u64,
}

impl PaperPlane {
    /// Plane at the given center, size, and entrance delay.
    pub fn new(center: Point, size: f64, delay_frames: u64) -> Self {
        Self {
            center,
            size,
            delay_frames,
        }
    }

    /// Render the outline at the context's frame.
    pub fn evaluate(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let cfg = SpringConfig {
            damping: 18.0,
            mass: 0.6,
            stiffness: 100.0,
        };
        let eff = effective_frame(ctx.local.0, self.delay_frames);
        let progress = spring(eff, ctx.fps, &cfg);

        let scale = interpolate(
            progress,
            &[0.0, 0.7, 1.0],
            &[0.3, 1.08, 1.0],
            InterpOptions::clamp_both(),
        )?;
        let opacity = interpolate(progress, &[0.0, 0.4], &[0.0, 1.0], InterpOptions::clamp_right())?;
        let rotation = interpolate(progress, &[0.0, 1.0], &[-15.0, 0.0], InterpOptions::clamp_both())?;
        let trim = interpolate(
            progress,
            &[0.1, 0.8],
            &[0.0, 1.0],
            InterpOptions::clamp_both(),
        )?;

        // Gentle float once the entrance has mostly played out.
        let float = if eff > 30.0 {
            osc((eff - 30.0) as u64, 0.06, 0.0) * 3.0
        } else {
            0.0
        };

        // 24-unit viewbox outline: tip, tail fold, and keel.
        let u = self.size / 24.0;
        let at = |x: f64, y: f64| Point::new((x - 12.0) * u, (y - 12.0) * u);
        let outline = Node::from(Polyline {
            points: vec![
                at(22.0, 2.0),
                at(11.0, 13.0),
                at(2.0, 9.0),
                at(22.0, 2.0),
                at(15.0, 22.0),
                at(11.0, 13.0),
            ],
            closed: false,
            stroke: Stroke::new(WHITE, 2.0 * u),
            trim,
            opacity: 1.0,
        });

        Ok(Node::from(
            Group::new(vec![outline])
                .with_translate(self.center.to_vec2() + Vec2::new(0.0, float))
                .with_scale(scale)
                .with_rotation_deg(rotation)
                .with_opacity(opacity),
        ))
    }
}

/// Chat bubble that pops in with overshoot; optionally shows typing dots.
#[derive(Clone, Debug)]
pub struct MessageBubble {
    /// Bubble center.
    pub center: Point,
    /// Bubble width in pixels.
    pub size: f64,
    /// Frames before the bubble pops in.
    pub delay_frames: u64,
    /// Outline and dot color.
    pub color: Color,
    /// Whether to draw the three typing dots.
    pub with_dots: bool,
}

impl MessageBubble {
    /// Green bubble with typing dots at the given center and delay.
    pub fn new(center: Point, size: f64, delay_frames: u64) -> Self {
        Self {
            center,
            size,
            delay_frames,
            color: GREEN,
            with_dots: true,
        }
    }

    /// Render the bubble at the context's frame.
    pub fn evaluate(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let cfg = SpringConfig {
            damping: 15.0,
            mass: 0.4,
            stiffness: 120.0,
        };
        let eff = effective_frame(ctx.local.0, self.delay_frames);
        let progress = spring(eff, ctx.fps, &cfg);

        let scale = interpolate(
            progress,
            &[0.0, 0.7, 1.0],
            &[0.0, 1.15, 1.0],
            InterpOptions::clamp_both(),
        )?;
        let opacity = interpolate(progress, &[0.0, 0.5], &[0.0, 1.0], InterpOptions::clamp_right())?;
        let float = if eff > 20.0 {
            osc((eff - 20.0) as u64, 0.08, 0.0) * 4.0
        } else {
            0.0
        };

        let w = self.size;
        let h = self.size * 0.75;
        let mut children = vec![
            Node::from(Rect {
                center: Point::ZERO,
                width: w,
                height: h,
                corner_radius: self.size * 0.12,
                fill: None,
                stroke: Some(Stroke::new(self.color, self.size * 0.06)),
                opacity: 1.0,
                blur: 0.0,
            }),
            // Tail.
            Node::from(Polyline {
                points: vec![
                    Point::new(-w * 0.35, h * 0.5),
                    Point::new(-w * 0.45, h * 0.75),
                    Point::new(-w * 0.2, h * 0.5),
                ],
                closed: false,
                stroke: Stroke::new(self.color, self.size * 0.06),
                trim: 1.0,
                opacity: 1.0,
            }),
        ];

        if self.with_dots {
            for i in 0..3 {
                children.push(Node::from(Circle {
                    center: Point::new((i as f64 - 1.0) * w * 0.2, -h * 0.1),
                    radius: self.size * 0.05,
                    fill: Some(self.color),
                    stroke: None,
                    opacity: 0.8,
                    blur: 0.0,
                }));
            }
        }

        Ok(Node::from(
            Group::new(children)
                .with_translate(self.center.to_vec2() + Vec2::new(0.0, float))
                .with_scale(scale)
                .with_opacity(opacity),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::core::{Canvas, Fps, FrameIndex};

    fn ctx(local: u64) -> SceneCtx {
        SceneCtx::standalone(
            FrameIndex(local),
            Fps::new(30).unwrap(),
            Canvas::new(1920, 1080).unwrap(),
            3,
        )
    }

    fn as_group(node: Node) -> Group {
        match node {
            Node::Group(g) => g,
            other => panic!("expected group, got {other:?}"),
        }
    }

    #[test]
    fn checkmark_draws_circle_before_check() {
        let badge = CheckmarkBadge::new(Point::new(0.0, 0.0), 100.0, 0);

        // Shortly after entry the circle is visible but the check (delayed
        // ten frames) has barely started.
        let g = as_group(badge.evaluate(&ctx(8)).unwrap());
        let Node::Circle(c) = &g.children[0] else {
            panic!("expected circle");
        };
        let Node::Polyline(p) = &g.children[1] else {
            panic!("expected polyline");
        };
        assert!(c.opacity > 0.5);
        assert!(p.trim < c.opacity);

        // Fully settled: everything at rest value.
        let g = as_group(badge.evaluate(&ctx(300)).unwrap());
        let Node::Polyline(p) = &g.children[1] else {
            panic!("expected polyline");
        };
        assert_eq!(p.trim, 1.0);
    }

    #[test]
    fn checkmark_hidden_before_delay() {
        let badge = CheckmarkBadge::new(Point::new(0.0, 0.0), 100.0, 40);
        let g = as_group(badge.evaluate(&ctx(10)).unwrap());
        assert_eq!(g.scale, 0.0);
    }

    #[test]
    fn clock_hands_rotate_with_frame() {
        let clock = ClockFace::new(Point::new(0.0, 0.0), 60.0, 0);
        let hand_end = |frame: u64| {
            let g = as_group(clock.evaluate(&ctx(frame)).unwrap());
            let Node::Line(l) = &g.children[1] else {
                panic!("expected line");
            };
            l.to
        };
        let a = hand_end(10);
        let b = hand_end(20);
        assert!((a.x - b.x).abs() > 1e-6 || (a.y - b.y).abs() > 1e-6);
    }

    #[test]
    fn plane_is_transparent_before_delay_and_opaque_after() {
        let plane = PaperPlane::new(Point::new(0.0, 0.0), 110.0, 15);
        assert_eq!(as_group(plane.evaluate(&ctx(0)).unwrap()).opacity, 0.0);
        assert_eq!(as_group(plane.evaluate(&ctx(200)).unwrap()).opacity, 1.0);
    }

    #[test]
    fn plane_overshoots_scale_midway() {
        let plane = PaperPlane::new(Point::new(0.0, 0.0), 110.0, 0);
        let max_scale = (0..90)
            .map(|f| as_group(plane.evaluate(&ctx(f)).unwrap()).scale)
            .fold(f64::MIN, f64::max);
        assert!(max_scale > 1.0, "expected overshoot, max {max_scale}");
    }

    #[test]
    fn bubble_dots_are_optional() {
        let mut bubble = MessageBubble::new(Point::new(0.0, 0.0), 60.0, 0);
        assert_eq!(as_group(bubble.clone().evaluate(&ctx(30)).unwrap()).children.len(), 5);
        bubble.with_dots = false;
        assert_eq!(as_group(bubble.evaluate(&ctx(30)).unwrap()).children.len(), 2);
    }
}
