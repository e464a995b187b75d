//! Feature grid: title, then four cards sliding in from alternating sides.

use kurbo::{Point, Vec2};

use crate::{
    animation::{
        interpolate::{InterpOptions, interpolate},
        ops::effective_frame,
        spring::{SpringConfig, spring},
    },
    foundation::{core::Color, error::ReelResult},
    primitives::{
        ambient::ParticleField,
        icons::CheckmarkBadge,
        text::LetterReveal,
    },
    scene::{
        context::SceneCtx,
        tree::{Group, Node, Rect, Stroke, Text, TextAlign},
    },
};

use super::WHITE;

const FEATURES: [&str; 4] = [
    "One-time or recurring",
    "Contacts, groups & channels",
    "Auto-cancel if they reply",
    "Works from any device",
];

/// Features scene: title and a two-by-two grid of sliding cards.
pub fn render(ctx: &SceneCtx) -> ReelResult<Node> {
    let center = ctx.canvas.center();

    let mut layers = vec![
        ParticleField::new(20, WHITE).evaluate(ctx)?,
        LetterReveal::new("Key Features", 5, Point::new(center.x, 220.0), 72.0).evaluate(ctx)?,
    ];

    for (i, feature) in FEATURES.iter().enumerate() {
        let row = i / 2;
        let col = i % 2;
        let pos = Point::new(
            center.x + (col as f64 - 0.5) * 640.0,
            460.0 + row as f64 * 220.0,
        );
        let from_left = col == 0;
        layers.push(card(feature, 30 + i as u64 * 12, pos, from_left, ctx)?);
    }

    Ok(Group::new(layers).into())
}

fn card(
    title: &str,
    delay: u64,
    center: Point,
    from_left: bool,
    ctx: &SceneCtx,
) -> ReelResult<Node> {
    let cfg = SpringConfig {
        damping: 20.0,
        mass: 0.5,
        stiffness: 120.0,
    };
    let progress = spring(effective_frame(ctx.local.0, delay), ctx.fps, &cfg);

    let offset = if from_left { -120.0 } else { 120.0 };
    let slide = interpolate(progress, &[0.0, 1.0], &[offset, 0.0], InterpOptions::default())?;
    let opacity = interpolate(progress, &[0.0, 0.5], &[0.0, 1.0], InterpOptions::clamp_right())?;

    let children = vec![
        Node::from(Rect {
            center: Point::ZERO,
            width: 580.0,
            height: 170.0,
            corner_radius: 20.0,
            fill: Some(Color::rgb(24, 24, 27)),
            stroke: Some(Stroke::new(Color::rgb(63, 63, 70), 1.0)),
            opacity: 1.0,
            blur: 0.0,
        }),
        CheckmarkBadge::new(Point::new(-220.0, 0.0), 64.0, delay + 8).evaluate(ctx)?,
        Node::from(
            Text::new(title, Point::new(-160.0, 10.0), 32.0, WHITE)
                .with_weight(600)
                .with_align(TextAlign::Left),
        ),
    ];

    Ok(Node::from(
        Group::new(children)
            .with_translate(center.to_vec2() + Vec2::new(slide, 0.0))
            .with_opacity(opacity),
    ))
}
