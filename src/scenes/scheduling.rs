//! Scheduling walkthrough: a modal with four form fields highlighted in
//! sequence while a cursor works through them.

use kurbo::{Point, Vec2};

use crate::{
    animation::{
        interpolate::{InterpOptions, interpolate},
        ops::{effective_frame, osc},
        spring::{SpringConfig, spring},
    },
    foundation::{core::Color, error::ReelResult},
    primitives::ambient::GlowOrb,
    scene::{
        context::SceneCtx,
        tree::{Circle, Group, Node, Polyline, Rect, Stroke, Text},
    },
};

use super::{AMBER, BLUE, GREEN, PURPLE, WHITE, caption};

const MODAL_W: f64 = 900.0;
const MODAL_H: f64 = 620.0;

struct Step {
    start: u64,
    end: u64,
    color: Color,
    // Field rect in modal-local coordinates.
    center: Point,
    width: f64,
    height: f64,
}

fn steps() -> [Step; 4] {
    [
        Step {
            start: 35,
            end: 65,
            color: BLUE,
            center: Point::new(-195.0, -105.0),
            width: 460.0,
            height: 77.0,
        },
        Step {
            start: 60,
            end: 90,
            color: PURPLE,
            center: Point::new(-195.0, 30.0),
            width: 460.0,
            height: 185.0,
        },
        Step {
            start: 85,
            end: 115,
            color: GREEN,
            center: Point::new(230.0, -15.0),
            width: 390.0,
            height: 320.0,
        },
        Step {
            start: 110,
            end: 145,
            color: AMBER,
            center: Point::new(140.0, 195.0),
            width: 180.0,
            height: 85.0,
        },
    ]
}

/// Scheduling scene: form modal, sequenced highlights, and the cursor.
pub fn render(ctx: &SceneCtx) -> ReelResult<Node> {
    let frame = ctx.frame_f64();
    let center = ctx.canvas.center();

    let mut layers = vec![
        GlowOrb {
            center: Point::new(250.0, 250.0),
            radius: 125.0,
            color: BLUE,
            phase: 0.0,
        }
        .evaluate(ctx)?,
        GlowOrb {
            center: Point::new(1650.0, 750.0),
            radius: 100.0,
            color: PURPLE,
            phase: 1.5,
        }
        .evaluate(ctx)?,
    ];

    let entrance = spring(frame, ctx.fps, &SpringConfig::smooth());
    let scale = interpolate(entrance, &[0.0, 1.0], &[0.8, 1.0], InterpOptions::default())?;
    let opacity = interpolate(entrance, &[0.0, 0.5], &[0.0, 1.0], InterpOptions::clamp_right())?;
    let rise = interpolate(entrance, &[0.0, 1.0], &[50.0, 0.0], InterpOptions::default())?;
    let float = osc(ctx.local.0, 0.04, 0.0) * 4.0;

    let mut modal = vec![Node::from(Rect {
        center: Point::ZERO,
        width: MODAL_W,
        height: MODAL_H,
        corner_radius: 24.0,
        fill: Some(Color::rgb(24, 24, 27)),
        stroke: Some(Stroke::new(Color::rgb(63, 63, 70), 1.0)),
        opacity: 1.0,
        blur: 0.0,
    })];

    // Form field placeholders.
    for step in steps() {
        modal.push(Node::from(Rect {
            center: step.center,
            width: step.width - 10.0,
            height: step.height - 10.0,
            corner_radius: 10.0,
            fill: Some(Color::rgb(39, 39, 42)),
            stroke: None,
            opacity: 1.0,
            blur: 0.0,
        }));
    }

    // Sequential highlights.
    for step in steps() {
        let o = highlight_opacity(frame, step.start as f64, step.end as f64)?;
        if o > 0.0 {
            modal.push(Node::from(Rect {
                center: step.center,
                width: step.width,
                height: step.height,
                corner_radius: 12.0,
                fill: None,
                stroke: Some(Stroke::new(step.color, 2.0)),
                opacity: o,
                blur: 0.0,
            }));
        }
    }

    modal.push(cursor(ctx)?);

    // Step badges down the left edge.
    for (i, step) in steps().iter().enumerate() {
        let active = ctx.local.0 > step.start;
        let pop = spring(
            effective_frame(ctx.local.0, step.start),
            ctx.fps,
            &SpringConfig::smooth(),
        );
        let badge = Group::new(vec![
            Node::from(Circle {
                center: Point::ZERO,
                radius: 20.0,
                fill: Some(if active {
                    GREEN
                } else {
                    Color::rgb(40, 40, 40)
                }),
                stroke: None,
                opacity: 1.0,
                blur: 0.0,
            }),
            Node::from(
                Text::new(
                    (i + 1).to_string(),
                    Point::new(0.0, 6.0),
                    18.0,
                    if active {
                        Color::rgb(0, 0, 0)
                    } else {
                        Color::rgb(102, 102, 102)
                    },
                )
                .with_weight(700),
            ),
        ])
        .with_translate(Vec2::new(
            -MODAL_W / 2.0 - 80.0,
            -120.0 + i as f64 * 80.0,
        ))
        .with_scale(if active { pop } else { 1.0 });
        modal.push(badge.into());
    }

    layers.push(Node::from(
        Group::new(modal)
            .with_translate(center.to_vec2() + Vec2::new(0.0, rise + float - 30.0))
            .with_scale(scale)
            .with_opacity(opacity),
    ));

    layers.push(caption("Schedule in just a few clicks", 130, ctx)?);
    Ok(Group::new(layers).into())
}

/// Trapezoid ramp: fade in over 10 frames, hold, fade out over 15.
fn highlight_opacity(frame: f64, start: f64, end: f64) -> ReelResult<f64> {
    interpolate(
        frame,
        &[start, start + 10.0, end, end + 15.0],
        &[0.0, 1.0, 1.0, 0.0],
        InterpOptions::clamp_both(),
    )
}

/// Pointer arrow tracking the highlight sequence, with a click ring at the
/// two press moments.
fn cursor(ctx: &SceneCtx) -> ReelResult<Node> {
    let frame = ctx.frame_f64();
    let keys = [40.0, 60.0, 85.0, 110.0];
    let x = interpolate(
        frame,
        &keys,
        &[-250.0, -250.0, 150.0, 180.0],
        InterpOptions::clamp_both(),
    )?;
    let y = interpolate(
        frame,
        &keys,
        &[-140.0, -10.0, -40.0, 190.0],
        InterpOptions::clamp_both(),
    )?;
    let opacity = interpolate(
        frame,
        &[35.0, 40.0, 135.0, 145.0],
        &[0.0, 1.0, 1.0, 0.0],
        InterpOptions::clamp_both(),
    )?;

    let clicking = (58.0..65.0).contains(&frame) || (108.0..115.0).contains(&frame);
    let mut children = vec![Node::from(Polyline {
        points: vec![
            Point::new(0.0, 0.0),
            Point::new(14.0, 9.0),
            Point::new(6.0, 11.0),
            Point::new(4.0, 19.0),
        ],
        closed: true,
        stroke: Stroke::new(WHITE, 1.5),
        trim: 1.0,
        opacity: 1.0,
    })];
    if clicking {
        children.push(Node::from(Circle {
            center: Point::new(4.0, 6.0),
            radius: 20.0,
            fill: None,
            stroke: Some(Stroke::new(WHITE, 2.0)),
            opacity: 0.5,
            blur: 0.0,
        }));
    }

    Ok(Node::from(
        Group::new(children)
            .with_translate(Vec2::new(x, y))
            .with_scale(if clicking { 0.8 } else { 1.0 })
            .with_opacity(opacity),
    ))
}
