//! Opening hook: logo mark, wordmark, tagline, underline.

use kurbo::Point;

use crate::{
    foundation::error::ReelResult,
    primitives::{
        ambient::{ExpandingRings, GlowOrb, ParticleField},
        icons::{ClockFace, MessageBubble, PaperPlane},
        text::{LetterReveal, TitleReveal, UnderlineReveal},
    },
    scene::{
        context::SceneCtx,
        tree::{Group, Node},
    },
};

use super::{GREEN, WHITE};

/// Opening scene: ambient layers, floating indicators, and the logo lockup.
pub fn render(ctx: &SceneCtx) -> ReelResult<Node> {
    let center = ctx.canvas.center();

    let orbs = [
        (Point::new(250.0, 300.0), 150.0, 0.0),
        (Point::new(1650.0, 400.0), 175.0, 1.5),
        (Point::new(300.0, 750.0), 125.0, 3.0),
        (Point::new(1600.0, 800.0), 140.0, 4.5),
    ];

    let mut layers = Vec::new();
    for (pos, radius, phase) in orbs {
        layers.push(
            GlowOrb {
                center: pos,
                radius,
                color: GREEN,
                phase,
            }
            .evaluate(ctx)?,
        );
    }
    layers.push(ParticleField::new(25, WHITE).evaluate(ctx)?);
    layers.push(
        ExpandingRings {
            center: Point::new(center.x, 400.0),
            base_radius: 150.0,
            color: WHITE,
            ring_count: 3,
            period: 80,
        }
        .evaluate(ctx)?,
    );

    // Floating indicators in the corners.
    layers.push(MessageBubble::new(Point::new(1720.0, 230.0), 60.0, 30).evaluate(ctx)?);
    let mut quiet = MessageBubble::new(Point::new(205.0, 790.0), 50.0, 40);
    quiet.color = WHITE;
    quiet.with_dots = false;
    layers.push(quiet.evaluate(ctx)?);
    layers.push(ClockFace::new(Point::new(1640.0, 770.0), 45.0, 50).evaluate(ctx)?);

    // Logo lockup, tagline, underline.
    layers.push(PaperPlane::new(Point::new(center.x - 330.0, 400.0), 110.0, 0).evaluate(ctx)?);
    layers.push(LetterReveal::new("Swiftsend", 3, Point::new(center.x + 60.0, 400.0), 100.0).evaluate(ctx)?);
    layers.push(
        TitleReveal::new(
            "Automate your messaging outreach",
            20,
            Point::new(center.x, 560.0),
            52.0,
        )
        .evaluate(ctx)?,
    );
    layers.push(UnderlineReveal::new(45, Point::new(center.x, 620.0), 450.0).evaluate(ctx)?);

    Ok(Group::new(layers).into())
}
