//! Trust beat: a shield draws itself, then the privacy promise lands.

use kurbo::{Point, Vec2};

use crate::{
    animation::{
        interpolate::{InterpOptions, interpolate},
        ops::{effective_frame, osc},
        spring::{SpringConfig, spring},
    },
    foundation::error::ReelResult,
    primitives::{
        ambient::ExpandingRings,
        approx_text_width,
        icons::CheckmarkBadge,
        text::TitleReveal,
    },
    scene::{
        context::SceneCtx,
        tree::{Group, Node, Polyline, Stroke, Text, TextAlign},
    },
};

use super::{GREEN, WHITE};

const ASSURANCES: [(&str, u64); 3] = [
    ("End-to-end encrypted", 45),
    ("Zero data access", 53),
    ("Your data, your control", 61),
];

/// Privacy scene: shield stroke-draw and the three assurances.
pub fn render(ctx: &SceneCtx) -> ReelResult<Node> {
    let center = ctx.canvas.center();

    let mut layers = vec![
        ExpandingRings {
            center: Point::new(center.x, 280.0),
            base_radius: 80.0,
            color: GREEN,
            ring_count: 2,
            period: 80,
        }
        .evaluate(ctx)?,
        shield(Point::new(center.x, 280.0), 130.0, 0, ctx)?,
        TitleReveal::new(
            "Your messages stay private.",
            15,
            Point::new(center.x, 480.0),
            64.0,
        )
        .evaluate(ctx)?,
    ];

    // Second line pulses once it has landed.
    let line2 = TitleReveal::new("Even from us.", 35, Point::new(center.x, 570.0), 64.0)
        .with_color(GREEN)
        .evaluate(ctx)?;
    let glow = if ctx.local.0 > 55 {
        1.0 + osc(ctx.local.0 - 55, 0.1, 0.0) * 0.04
    } else {
        1.0
    };
    layers.push(Node::from(Group::new(vec![line2]).with_scale(glow)));

    for (i, (text, delay)) in ASSURANCES.iter().enumerate() {
        let x = center.x + (i as f64 - 1.0) * 420.0;
        layers.push(assurance(text, *delay, Point::new(x, 760.0), ctx)?);
    }

    Ok(Group::new(layers).into())
}

/// Shield outline stroke-draws on a spring, then holds with a faint pulse.
fn shield(center: Point, size: f64, delay: u64, ctx: &SceneCtx) -> ReelResult<Node> {
    let eff = effective_frame(ctx.local.0, delay);
    let progress = spring(eff, ctx.fps, &SpringConfig::smooth());
    let trim = interpolate(progress, &[0.0, 0.9], &[0.0, 1.0], InterpOptions::clamp_both())?;
    let opacity = interpolate(progress, &[0.0, 0.3], &[0.0, 1.0], InterpOptions::clamp_right())?;

    // 24-unit viewbox shield path.
    let u = size / 24.0;
    let at = |x: f64, y: f64| Point::new((x - 12.0) * u, (y - 12.0) * u);
    let outline = Node::from(Polyline {
        points: vec![
            at(12.0, 2.0),
            at(20.0, 6.0),
            at(20.0, 12.0),
            at(16.0, 19.0),
            at(12.0, 22.0),
            at(8.0, 19.0),
            at(4.0, 12.0),
            at(4.0, 6.0),
        ],
        closed: true,
        stroke: Stroke::new(GREEN, 2.5 * u),
        trim,
        opacity: 1.0,
    });
    // Check inside, delayed behind the outline.
    let check_trim = interpolate(
        spring(eff - 12.0, ctx.fps, &SpringConfig::smooth()),
        &[0.0, 1.0],
        &[0.0, 1.0],
        InterpOptions::clamp_both(),
    )?;
    let check = Node::from(Polyline {
        points: vec![at(8.0, 12.0), at(11.0, 15.0), at(16.0, 8.0)],
        closed: false,
        stroke: Stroke::new(WHITE, 2.5 * u),
        trim: check_trim,
        opacity: 1.0,
    });

    Ok(Node::from(
        Group::new(vec![outline, check])
            .with_translate(center.to_vec2())
            .with_opacity(opacity),
    ))
}

fn assurance(text: &str, delay: u64, center: Point, ctx: &SceneCtx) -> ReelResult<Node> {
    let cfg = SpringConfig {
        damping: 20.0,
        mass: 0.5,
        stiffness: 120.0,
    };
    let progress = spring(effective_frame(ctx.local.0, delay), ctx.fps, &cfg);
    let rise = interpolate(progress, &[0.0, 1.0], &[25.0, 0.0], InterpOptions::default())?;
    let opacity = interpolate(progress, &[0.0, 0.5], &[0.0, 1.0], InterpOptions::clamp_right())?;

    let size = 30.0;
    let half = approx_text_width(text, size, 0.0) / 2.0;
    let children = vec![
        CheckmarkBadge::new(Point::new(-half - 40.0, 0.0), 40.0, delay).evaluate(ctx)?,
        Node::from(
            Text::new(text, Point::new(-half, 10.0), size, WHITE)
                .with_weight(500)
                .with_align(TextAlign::Left),
        ),
    ];

    Ok(Node::from(
        Group::new(children)
            .with_translate(center.to_vec2() + Vec2::new(0.0, rise))
            .with_opacity(opacity),
    ))
}
