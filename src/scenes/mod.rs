//! The nine scenes of the promo reel.
//!
//! Scenes are plain functions from context to tree. They compose the shared
//! primitives and, where a layout is one-off (browser chrome, cursor paths),
//! drive the animation layer directly. All copy and geometry lives here;
//! nothing below this layer knows what the video is about.

pub mod cta;
pub mod dashboard;
pub mod features;
pub mod hook;
pub mod privacy;
pub mod problem;
pub mod scheduling;
pub mod solution;
pub mod use_cases;

use kurbo::Point;

use crate::{
    animation::{
        interpolate::{InterpOptions, interpolate},
        ops::effective_frame,
        spring::{SpringConfig, spring},
    },
    foundation::{core::Color, error::ReelResult},
    scene::{
        context::SceneCtx,
        tree::{Circle, Group, Node, Text},
    },
};

pub(crate) const WHITE: Color = Color::rgb(255, 255, 255);
pub(crate) const MUTED: Color = Color::rgb(163, 163, 163);
pub(crate) const GREEN: Color = Color::rgb(34, 197, 94);
pub(crate) const BLUE: Color = Color::rgb(59, 130, 246);
pub(crate) const PURPLE: Color = Color::rgb(139, 92, 246);
pub(crate) const AMBER: Color = Color::rgb(245, 158, 11);
pub(crate) const RED: Color = Color::rgb(239, 68, 68);

/// Bottom-of-frame caption rising in on a smooth spring, with the standard
/// green status dot.
pub(crate) fn caption(text: &str, delay_frames: u64, ctx: &SceneCtx) -> ReelResult<Node> {
    let progress = spring(
        effective_frame(ctx.local.0, delay_frames),
        ctx.fps,
        &SpringConfig::smooth(),
    );
    let y = interpolate(progress, &[0.0, 1.0], &[30.0, 0.0], InterpOptions::default())?;
    let opacity = interpolate(progress, &[0.0, 1.0], &[0.0, 1.0], InterpOptions::default())?;

    let baseline = ctx.canvas.height as f64 - 80.0 + y;
    let cx = ctx.canvas.center().x;
    let half = crate::primitives::approx_text_width(text, 38.0, 0.0) / 2.0;

    Ok(Group::new(vec![
        Node::from(Circle {
            center: Point::new(cx - half - 24.0, baseline - 12.0),
            radius: 4.0,
            fill: Some(GREEN),
            stroke: None,
            opacity,
            blur: 1.0,
        }),
        Node::from(
            Text::new(text, Point::new(cx, baseline), 38.0, WHITE)
                .with_weight(600)
                .with_opacity(opacity),
        ),
    ])
    .into())
}
