//! Closer: logo returns, the button lands, the URL holds the last beat.

use kurbo::{Point, Vec2};

use crate::{
    animation::{
        interpolate::{InterpOptions, interpolate},
        ops::{cycle01, effective_frame, osc},
        spring::{SpringConfig, spring},
    },
    foundation::{core::Color, error::ReelResult},
    primitives::{
        ambient::{ExpandingRings, GridLines, ParticleField},
        approx_text_width,
        icons::PaperPlane,
        text::LetterReveal,
    },
    scene::{
        context::SceneCtx,
        tree::{Circle, Group, Node, Rect, Text, TextAlign},
    },
};

use super::{GREEN, WHITE};

/// Closing scene: logo return, the call-to-action button, and the URL.
pub fn render(ctx: &SceneCtx) -> ReelResult<Node> {
    let center = ctx.canvas.center();

    let layers = vec![
        GridLines {
            color: WHITE,
            spacing: 140.0,
            speed: 0.25,
        }
        .evaluate(ctx)?,
        ParticleField::new(25, WHITE).evaluate(ctx)?,
        ExpandingRings {
            center: Point::new(center.x, 380.0),
            base_radius: 170.0,
            color: WHITE,
            ring_count: 3,
            period: 80,
        }
        .evaluate(ctx)?,
        PaperPlane::new(Point::new(center.x, 250.0), 100.0, 0).evaluate(ctx)?,
        LetterReveal::new("Swiftsend", 8, Point::new(center.x, 420.0), 96.0).evaluate(ctx)?,
        button("Start Free - No Card Needed", 40, Point::new(center.x, 620.0), ctx)?,
        url_line("swiftsend.app", 70, Point::new(center.x, 780.0), ctx)?,
    ];

    Ok(Group::new(layers).into())
}

/// The call-to-action pill: pops in with overshoot, then breathes while a
/// shine strip sweeps across on a loop.
fn button(label: &str, delay: u64, center: Point, ctx: &SceneCtx) -> ReelResult<Node> {
    let eff = effective_frame(ctx.local.0, delay);
    let progress = spring(eff, ctx.fps, &SpringConfig::bouncy());
    let scale = interpolate(
        progress,
        &[0.0, 1.0],
        &[0.6, 1.0],
        InterpOptions::clamp_both(),
    )?;
    let opacity = interpolate(progress, &[0.0, 0.4], &[0.0, 1.0], InterpOptions::clamp_right())?;

    let breathe = if eff > 20.0 {
        1.0 + osc((eff - 20.0) as u64, 0.06, 0.0) * 0.015
    } else {
        1.0
    };

    let size = 42.0;
    let width = approx_text_width(label, size, 0.0) + 180.0;
    let height = 110.0;

    let mut children = vec![
        Node::from(Rect {
            center: Point::ZERO,
            width,
            height,
            corner_radius: height / 2.0,
            fill: Some(WHITE),
            stroke: None,
            opacity: 1.0,
            blur: 0.0,
        }),
        Node::from(
            Text::new(label, Point::new(0.0, 14.0), size, Color::rgb(10, 10, 10))
                .with_weight(700),
        ),
    ];

    // Shine sweep, one pass per 70 frames once visible.
    if eff > 0.0 {
        let sweep = cycle01(eff as u64, 70);
        let shine_x = interpolate(
            sweep,
            &[0.0, 1.0],
            &[-width / 2.0 - 60.0, width / 2.0 + 60.0],
            InterpOptions::default(),
        )?;
        children.push(Node::from(Rect {
            center: Point::new(shine_x, 0.0),
            width: 60.0,
            height,
            corner_radius: 0.0,
            fill: Some(WHITE),
            stroke: None,
            opacity: 0.35,
            blur: 8.0,
        }));
    }

    Ok(Node::from(
        Group::new(children)
            .with_translate(center.to_vec2())
            .with_scale(scale * breathe)
            .with_opacity(opacity),
    ))
}

fn url_line(url: &str, delay: u64, center: Point, ctx: &SceneCtx) -> ReelResult<Node> {
    let cfg = SpringConfig {
        damping: 20.0,
        mass: 0.5,
        stiffness: 100.0,
    };
    let eff = effective_frame(ctx.local.0, delay);
    let progress = spring(eff, ctx.fps, &cfg);
    let rise = interpolate(progress, &[0.0, 1.0], &[30.0, 0.0], InterpOptions::default())?;
    let opacity = interpolate(progress, &[0.0, 0.5], &[0.0, 1.0], InterpOptions::clamp_right())?;

    let dot_pulse = if eff > 20.0 {
        osc((eff - 20.0) as u64, 0.15, 0.0) * 0.3 + 0.7
    } else {
        0.7
    };

    let size = 40.0;
    let half = approx_text_width(url, size, 4.0) / 2.0;
    let children = vec![
        Node::from(Circle {
            center: Point::new(-half - 30.0, 0.0),
            radius: 7.0,
            fill: Some(GREEN),
            stroke: None,
            opacity: dot_pulse,
            blur: 2.0,
        }),
        Node::from({
            let mut t = Text::new(url, Point::new(-half, 13.0), size, WHITE)
                .with_weight(500)
                .with_align(TextAlign::Left)
                .with_opacity(0.7);
            t.letter_spacing = 4.0;
            t
        }),
    ];

    Ok(Node::from(
        Group::new(children)
            .with_translate(center.to_vec2() + Vec2::new(0.0, rise))
            .with_opacity(opacity),
    ))
}
