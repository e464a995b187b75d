//! Use-case roll call: "Perfect for..." plus five staggered rows and a
//! running counter.

use kurbo::{Point, Vec2};

use crate::{
    animation::{
        interpolate::{InterpOptions, interpolate},
        ops::effective_frame,
        spring::{SpringConfig, spring},
    },
    foundation::error::ReelResult,
    primitives::{
        ambient::DriftField,
        icons::{CheckmarkBadge, ClockFace},
        text::{CountUp, TitleReveal},
    },
    scene::{
        context::SceneCtx,
        tree::{Group, Node, Text, TextAlign},
    },
};

use super::{GREEN, MUTED, WHITE};

const CASES: [(&str, u64); 5] = [
    ("Appointment reminders", 25),
    ("Follow-ups at the perfect time", 38),
    ("Birthday & event messages", 51),
    ("Invoice reminders", 64),
    ("Win back quiet clients", 77),
];

/// Use-case scene: headline and counter on the left, case list on the right.
pub fn render(ctx: &SceneCtx) -> ReelResult<Node> {
    let mut layers = vec![DriftField::new(15, GREEN, 0.6).evaluate(ctx)?];

    // Split headline, second line in the accent color.
    layers.push(
        TitleReveal::new("Perfect", 5, Point::new(480.0, 340.0), 86.0).evaluate(ctx)?,
    );
    layers.push(
        TitleReveal::new("for...", 13, Point::new(480.0, 440.0), 86.0)
            .with_color(GREEN)
            .evaluate(ctx)?,
    );

    // Counter under the headline.
    let mut counter = CountUp::new(12000, "+", 40, Point::new(480.0, 600.0));
    counter.duration_frames = 45;
    counter.size = 64.0;
    counter.color = WHITE;
    layers.push(counter.evaluate(ctx)?);
    layers.push(Node::from(
        Text::new(
            "messages scheduled",
            Point::new(480.0, 650.0),
            28.0,
            MUTED,
        )
        .with_weight(500),
    ));

    for (i, (text, delay)) in CASES.iter().enumerate() {
        let y = 300.0 + i as f64 * 110.0;
        layers.push(case_row(text, *delay, Point::new(1000.0, y), i, ctx)?);
    }

    layers.push(ClockFace::new(Point::new(1700.0, 880.0), 70.0, 90).evaluate(ctx)?);

    Ok(Group::new(layers).into())
}

fn case_row(
    text: &str,
    delay: u64,
    left: Point,
    index: usize,
    ctx: &SceneCtx,
) -> ReelResult<Node> {
    let cfg = SpringConfig {
        damping: 20.0,
        mass: 0.5,
        stiffness: 120.0,
    };
    let progress = spring(effective_frame(ctx.local.0, delay), ctx.fps, &cfg);
    let slide = interpolate(progress, &[0.0, 1.0], &[80.0, 0.0], InterpOptions::default())?;
    let opacity = interpolate(progress, &[0.0, 0.5], &[0.0, 1.0], InterpOptions::clamp_right())?;

    // Rows alternate a slight size emphasis so the column reads as a list,
    // not a table.
    let size = if index % 2 == 0 { 44.0 } else { 42.0 };

    let children = vec![
        CheckmarkBadge::new(Point::new(0.0, 0.0), 52.0, delay).evaluate(ctx)?,
        Node::from(
            Text::new(text, Point::new(50.0, 14.0), size, WHITE)
                .with_weight(600)
                .with_align(TextAlign::Left),
        ),
    ];

    Ok(Node::from(
        Group::new(children)
            .with_translate(left.to_vec2() + Vec2::new(slide, 0.0))
            .with_opacity(opacity),
    ))
}
