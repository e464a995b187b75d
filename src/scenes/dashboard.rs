//! Product tour: a browser mockup settles in, a scan line sweeps the
//! dashboard, and the stats row lights up.

use kurbo::{Point, Vec2};

use crate::{
    animation::{
        interpolate::{InterpOptions, interpolate},
        ops::{effective_frame, osc},
        spring::{SpringConfig, spring},
    },
    foundation::{core::Color, error::ReelResult},
    primitives::ambient::{GlowOrb, GridLines},
    scene::{
        context::SceneCtx,
        tree::{Circle, Group, Node, Rect, Stroke, Text, TextAlign},
    },
};

use super::{GREEN, MUTED, WHITE, caption};

const FRAME_W: f64 = 1400.0;
const FRAME_H: f64 = 720.0;
const CHROME_H: f64 = 50.0;

/// Dashboard scene: browser mockup with stat tiles and a scan-line sweep.
pub fn render(ctx: &SceneCtx) -> ReelResult<Node> {
    let frame = ctx.frame_f64();
    let center = ctx.canvas.center();

    let mut layers = vec![
        GridLines {
            color: WHITE,
            spacing: 120.0,
            speed: 0.3,
        }
        .evaluate(ctx)?,
        GlowOrb {
            center: Point::new(200.0, 200.0),
            radius: 150.0,
            color: WHITE,
            phase: 0.0,
        }
        .evaluate(ctx)?,
        GlowOrb {
            center: Point::new(1700.0, 800.0),
            radius: 125.0,
            color: WHITE,
            phase: 2.5,
        }
        .evaluate(ctx)?,
    ];

    let entrance = spring(frame, ctx.fps, &SpringConfig::smooth());
    let scale = interpolate(entrance, &[0.0, 1.0], &[0.85, 1.0], InterpOptions::default())?;
    let rise = interpolate(entrance, &[0.0, 1.0], &[80.0, 0.0], InterpOptions::default())?;
    let opacity = interpolate(entrance, &[0.0, 0.3], &[0.0, 1.0], InterpOptions::clamp_right())?;
    let float = osc(ctx.local.0, 0.03, 0.0) * 5.0;

    let mut browser = vec![
        Node::from(Rect {
            center: Point::ZERO,
            width: FRAME_W,
            height: FRAME_H,
            corner_radius: 20.0,
            fill: Some(Color::rgb(26, 26, 26)),
            stroke: Some(Stroke::new(Color::rgb(60, 60, 60), 1.0)),
            opacity: 1.0,
            blur: 0.0,
        }),
        Node::from(Rect {
            center: Point::new(0.0, -FRAME_H / 2.0 + CHROME_H / 2.0),
            width: FRAME_W,
            height: CHROME_H,
            corner_radius: 20.0,
            fill: Some(Color::rgb(42, 42, 42)),
            stroke: None,
            opacity: 1.0,
            blur: 0.0,
        }),
    ];

    // Traffic-light dots pop in left to right.
    let dot_colors = [
        Color::rgb(255, 95, 87),
        Color::rgb(254, 188, 46),
        Color::rgb(40, 200, 64),
    ];
    let dot_cfg = SpringConfig {
        damping: 15.0,
        mass: 1.0,
        stiffness: 200.0,
    };
    for (i, color) in dot_colors.iter().enumerate() {
        let pop = spring(
            effective_frame(ctx.local.0, 10 + i as u64 * 3),
            ctx.fps,
            &dot_cfg,
        );
        browser.push(Node::from(
            Group::new(vec![Node::from(Circle {
                center: Point::ZERO,
                radius: 7.0,
                fill: Some(*color),
                stroke: None,
                opacity: 1.0,
                blur: 0.0,
            })])
            .with_translate(Vec2::new(
                -FRAME_W / 2.0 + 30.0 + i as f64 * 24.0,
                -FRAME_H / 2.0 + CHROME_H / 2.0,
            ))
            .with_scale(pop.max(0.0)),
        ));
    }

    // URL bar.
    browser.push(Node::from(Rect {
        center: Point::new(60.0, -FRAME_H / 2.0 + CHROME_H / 2.0),
        width: 1100.0,
        height: 32.0,
        corner_radius: 8.0,
        fill: Some(Color::rgb(20, 20, 20)),
        stroke: None,
        opacity: 1.0,
        blur: 0.0,
    }));
    browser.push(Node::from(Circle {
        center: Point::new(-80.0, -FRAME_H / 2.0 + CHROME_H / 2.0),
        radius: 4.0,
        fill: Some(GREEN),
        stroke: None,
        opacity: 1.0,
        blur: 0.0,
    }));
    browser.push(Node::from(
        Text::new(
            "app.swiftsend.app",
            Point::new(-64.0, -FRAME_H / 2.0 + CHROME_H / 2.0 + 5.0),
            14.0,
            MUTED,
        )
        .with_weight(500)
        .with_align(TextAlign::Left),
    ));

    browser.extend(dashboard_body(ctx)?);

    layers.push(Node::from(
        Group::new(browser)
            .with_translate(center.to_vec2() + Vec2::new(0.0, rise + float - 40.0))
            .with_scale(scale)
            .with_opacity(opacity),
    ));

    layers.push(caption("One dashboard to manage everything", 80, ctx)?);
    Ok(Group::new(layers).into())
}

/// Stylized page content: stats row, message list, scan sweep, highlight.
fn dashboard_body(ctx: &SceneCtx) -> ReelResult<Vec<Node>> {
    let frame = ctx.frame_f64();
    let top = -FRAME_H / 2.0 + CHROME_H;
    let mut nodes = Vec::new();

    // Four stat tiles.
    for i in 0..4 {
        nodes.push(Node::from(Rect {
            center: Point::new(-480.0 + i as f64 * 320.0, top + 110.0),
            width: 280.0,
            height: 110.0,
            corner_radius: 16.0,
            fill: Some(Color::rgb(34, 34, 34)),
            stroke: Some(Stroke::new(Color::rgb(55, 55, 55), 1.0)),
            opacity: 1.0,
            blur: 0.0,
        }));
    }

    // Scheduled-message rows.
    for i in 0..4 {
        nodes.push(Node::from(Rect {
            center: Point::new(0.0, top + 240.0 + i as f64 * 100.0),
            width: FRAME_W - 120.0,
            height: 80.0,
            corner_radius: 12.0,
            fill: Some(Color::rgb(30, 30, 30)),
            stroke: None,
            opacity: 1.0,
            blur: 0.0,
        }));
    }

    // Scan line sweeps the page once.
    let scan_y = interpolate(
        frame,
        &[60.0, 150.0],
        &[top + 60.0, top + 620.0],
        InterpOptions::clamp_both(),
    )?;
    let scan_opacity = interpolate(
        frame,
        &[60.0, 70.0, 140.0, 150.0],
        &[0.0, 0.5, 0.5, 0.0],
        InterpOptions::clamp_both(),
    )?;
    nodes.push(Node::from(Rect {
        center: Point::new(0.0, scan_y),
        width: FRAME_W - 40.0,
        height: 3.0,
        corner_radius: 1.5,
        fill: Some(GREEN),
        stroke: None,
        opacity: scan_opacity,
        blur: 4.0,
    }));

    // Pulsing highlight around the stats row.
    if (90.0..160.0).contains(&frame) {
        let pulse = osc(ctx.local.0.saturating_sub(100), 0.15, 0.0) * 0.3 + 0.7;
        nodes.push(Node::from(Rect {
            center: Point::new(-320.0, top + 110.0),
            width: 620.0,
            height: 130.0,
            corner_radius: 16.0,
            fill: None,
            stroke: Some(Stroke::new(GREEN, 2.0)),
            opacity: pulse,
            blur: 0.0,
        }));
    }

    // Data points pop onto the tiles.
    let point_cfg = SpringConfig {
        damping: 15.0,
        mass: 1.0,
        stiffness: 100.0,
    };
    for i in 0..4u64 {
        let pop = spring(
            effective_frame(ctx.local.0, 100 + i * 10),
            ctx.fps,
            &point_cfg,
        );
        nodes.push(Node::from(
            Group::new(vec![Node::from(Circle {
                center: Point::ZERO,
                radius: 6.0,
                fill: Some(GREEN),
                stroke: None,
                opacity: 1.0,
                blur: 2.0,
            })])
            .with_translate(Vec2::new(-560.0 + i as f64 * 320.0, top + 80.0))
            .with_scale(pop.max(0.0)),
        ));
    }

    Ok(nodes)
}
