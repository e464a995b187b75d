//! The turn: big checkmark, headline, and the "works anywhere" pills.

use kurbo::Point;

use crate::{
    animation::{
        interpolate::{InterpOptions, interpolate},
        ops::effective_frame,
        spring::{SpringConfig, spring},
    },
    foundation::error::ReelResult,
    primitives::{
        ambient::{ExpandingRings, GlowOrb},
        approx_text_width,
        icons::CheckmarkBadge,
        text::{TitleReveal, UnderlineReveal},
    },
    scene::{
        context::SceneCtx,
        tree::{Group, Node, Rect, Stroke, Text},
    },
};

use super::{GREEN, MUTED, WHITE};

const PILLS: [&str; 3] = ["offline", "asleep", "on a plane"];

/// Solution scene: checkmark reveal, headline, and the popping pills.
pub fn render(ctx: &SceneCtx) -> ReelResult<Node> {
    let center = ctx.canvas.center();

    let mut layers = vec![
        GlowOrb {
            center: Point::new(400.0, 300.0),
            radius: 160.0,
            color: GREEN,
            phase: 0.0,
        }
        .evaluate(ctx)?,
        GlowOrb {
            center: Point::new(1550.0, 720.0),
            radius: 140.0,
            color: GREEN,
            phase: 2.0,
        }
        .evaluate(ctx)?,
        ExpandingRings {
            center: Point::new(center.x, 330.0),
            base_radius: 90.0,
            color: GREEN,
            ring_count: 3,
            period: 80,
        }
        .evaluate(ctx)?,
        CheckmarkBadge::new(Point::new(center.x, 330.0), 110.0, 10).evaluate(ctx)?,
        TitleReveal::new(
            "Schedule messages in seconds",
            20,
            Point::new(center.x, 520.0),
            72.0,
        )
        .evaluate(ctx)?,
        UnderlineReveal::new(45, Point::new(center.x, 580.0), 520.0).evaluate(ctx)?,
    ];

    let mut secondary = TitleReveal::new(
        "They send on time, even when you're",
        50,
        Point::new(center.x, 660.0),
        40.0,
    )
    .with_color(MUTED);
    secondary.weight = 500;
    layers.push(secondary.evaluate(ctx)?);

    for (i, pill) in PILLS.iter().enumerate() {
        let x = center.x + (i as f64 - 1.0) * 260.0;
        layers.push(pill_node(pill, 60 + i as u64 * 8, Point::new(x, 760.0), ctx)?);
    }

    Ok(Group::new(layers).into())
}

/// Rounded-outline tag popping in with overshoot.
fn pill_node(label: &str, delay: u64, center: Point, ctx: &SceneCtx) -> ReelResult<Node> {
    let cfg = SpringConfig {
        damping: 15.0,
        mass: 0.4,
        stiffness: 120.0,
    };
    let progress = spring(effective_frame(ctx.local.0, delay), ctx.fps, &cfg);
    let scale = interpolate(
        progress,
        &[0.0, 0.7, 1.0],
        &[0.0, 1.1, 1.0],
        InterpOptions::clamp_both(),
    )?;
    let opacity = interpolate(progress, &[0.0, 0.5], &[0.0, 1.0], InterpOptions::clamp_right())?;

    let size = 34.0;
    let width = approx_text_width(label, size, 0.0) + 70.0;
    let children = vec![
        Node::from(Rect {
            center: Point::ZERO,
            width,
            height: 66.0,
            corner_radius: 33.0,
            fill: None,
            stroke: Some(Stroke::new(GREEN, 2.0)),
            opacity: 0.8,
            blur: 0.0,
        }),
        Node::from(Text::new(label, Point::new(0.0, 10.0), size, WHITE).with_weight(500)),
    ];

    Ok(Node::from(
        Group::new(children)
            .with_translate(center.to_vec2())
            .with_scale(scale)
            .with_opacity(opacity),
    ))
}
