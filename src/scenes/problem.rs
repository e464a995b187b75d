//! Pain-point montage: warning header and three struck-through failures.

use kurbo::{Point, Vec2};

use crate::{
    animation::{
        interpolate::{InterpOptions, interpolate},
        ops::{effective_frame, osc},
        spring::{SpringConfig, spring},
    },
    foundation::error::ReelResult,
    primitives::{ambient::DriftField, approx_text_width, text::GlitchText},
    scene::{
        context::SceneCtx,
        tree::{Circle, Group, Line, Node, Polyline, Stroke, Text, TextAlign},
    },
};

use super::{MUTED, RED, WHITE};

const PAIN_POINTS: [(&str, u64); 3] = [
    ("Scattered messaging", 20),
    ("Missed follow-ups", 40),
    ("Lost leads", 60),
];

/// Problem scene: glitching header over three struck-through pain points.
pub fn render(ctx: &SceneCtx) -> ReelResult<Node> {
    let center = ctx.canvas.center();
    let mut layers = vec![DriftField::new(18, RED, 0.8).evaluate(ctx)?];

    // Flickering warning header.
    let mut header = GlitchText::new("THE PROBLEM", Point::new(center.x, 260.0), 44.0);
    header.color = RED;
    let header_pulse = osc(ctx.local.0, 0.1, 0.0) * 0.2 + 0.8;
    layers.push(Node::from(
        Group::new(vec![header.evaluate(ctx)?]).with_opacity(header_pulse),
    ));

    for (i, (text, delay)) in PAIN_POINTS.iter().enumerate() {
        let y = 440.0 + i as f64 * 130.0;
        layers.push(pain_row(text, *delay, Point::new(center.x, y), ctx)?);
    }

    Ok(Group::new(layers).into())
}

/// One failure line: a crossed-out badge slides in from the left, then a
/// strike draws through the text a beat later.
fn pain_row(text: &str, delay: u64, center: Point, ctx: &SceneCtx) -> ReelResult<Node> {
    let cfg = SpringConfig {
        damping: 20.0,
        mass: 0.5,
        stiffness: 120.0,
    };
    let eff = effective_frame(ctx.local.0, delay);
    let progress = spring(eff, ctx.fps, &cfg);

    let slide = interpolate(progress, &[0.0, 1.0], &[-60.0, 0.0], InterpOptions::default())?;
    let opacity = interpolate(progress, &[0.0, 0.5], &[0.0, 1.0], InterpOptions::clamp_right())?;

    let size = 54.0;
    let width = approx_text_width(text, size, 0.0);
    let badge_x = -width / 2.0 - 70.0;

    // The X inside the badge stroke-draws shortly after the row lands.
    let x_trim = interpolate(
        spring(eff - 8.0, ctx.fps, &cfg),
        &[0.0, 1.0],
        &[0.0, 1.0],
        InterpOptions::clamp_both(),
    )?;
    let strike = interpolate(
        spring(eff - 15.0, ctx.fps, &SpringConfig::smooth()),
        &[0.0, 1.0],
        &[0.0, width],
        InterpOptions::default(),
    )?;

    let children = vec![
        Node::from(Circle {
            center: Point::new(badge_x, 0.0),
            radius: 28.0,
            fill: Some(RED),
            stroke: None,
            opacity: 0.2,
            blur: 0.0,
        }),
        Node::from(Polyline {
            points: vec![
                Point::new(badge_x - 12.0, -12.0),
                Point::new(badge_x + 12.0, 12.0),
            ],
            closed: false,
            stroke: Stroke::new(RED, 5.0),
            trim: x_trim,
            opacity: 1.0,
        }),
        Node::from(Polyline {
            points: vec![
                Point::new(badge_x + 12.0, -12.0),
                Point::new(badge_x - 12.0, 12.0),
            ],
            closed: false,
            stroke: Stroke::new(RED, 5.0),
            trim: x_trim,
            opacity: 1.0,
        }),
        Node::from(
            Text::new(text, Point::new(-width / 2.0, 0.0), size, MUTED)
                .with_weight(600)
                .with_align(TextAlign::Left),
        ),
        Node::from(Line {
            from: Point::new(-width / 2.0, -size * 0.3),
            to: Point::new(-width / 2.0 + strike, -size * 0.3),
            stroke: Stroke::new(WHITE, 4.0),
            opacity: 0.8,
        }),
    ];

    Ok(Node::from(
        Group::new(children)
            .with_translate(center.to_vec2() + Vec2::new(slide, 0.0))
            .with_opacity(opacity),
    ))
}
