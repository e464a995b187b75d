//! Text reveals: staggered word/letter entrances, typewriter, glitch,
//! count-up, and underline primitives.

use kurbo::{Point, Vec2};

use crate::{
    animation::{
        ease::Ease,
        interpolate::{InterpOptions, interpolate},
        ops::{cycle01, effective_frame, osc, stagger_offset},
        spring::{SpringConfig, spring},
    },
    foundation::{core::Color, error::ReelResult, math::Rng64},
    primitives::approx_text_width,
    scene::{
        context::SceneCtx,
        tree::{Group, Node, Rect, Text, TextAlign},
    },
};

/// Word-by-word title: each word rises, fades in, and sharpens on its own
/// spring, offset five frames after the previous word.
#[derive(Clone, Debug)]
pub struct TitleReveal {
    /// Full title; split on whitespace into per-word entrances.
    pub text: String,
    /// Frames before the first word enters.
    pub delay_frames: u64,
    /// Center of the settled line.
    pub center: Point,
    /// Font size in pixels.
    pub size: f64,
    /// Font weight.
    pub weight: u16,
    /// Text color.
    pub color: Color,
    /// Entrance offset between consecutive words.
    pub stagger_frames: f64,
    /// Spring driving each word's entrance.
    pub spring: SpringConfig,
}

impl TitleReveal {
    /// Bold white title with the standard five-frame word stagger.
    pub fn new(text: impl Into<String>, delay_frames: u64, center: Point, size: f64) -> Self {
        Self {
            text: text.into(),
            delay_frames,
            center,
            size,
            weight: 700,
            color: Color::rgb(255, 255, 255),
            stagger_frames: 5.0,
            spring: SpringConfig::smooth(),
        }
    }

    /// Set the text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Render the title at the context's frame.
    pub fn evaluate(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let words: Vec<&str> = self.text.split_whitespace().collect();
        let gap = self.size * 0.35;
        let total_width: f64 = words
            .iter()
            .map(|w| approx_text_width(w, self.size, 0.0))
            .sum::<f64>()
            + gap * (words.len().saturating_sub(1)) as f64;

        let mut children = Vec::with_capacity(words.len());
        let mut x = self.center.x - total_width / 2.0;
        for (i, word) in words.iter().enumerate() {
            let eff = effective_frame(ctx.local.0, self.delay_frames)
                - stagger_offset(i, self.stagger_frames);
            let progress = spring(eff, ctx.fps, &self.spring);

            let y = interpolate(progress, &[0.0, 1.0], &[60.0, 0.0], InterpOptions::default())?;
            let opacity = interpolate(progress, &[0.0, 1.0], &[0.0, 1.0], InterpOptions::default())?;
            let blur = interpolate(progress, &[0.0, 1.0], &[10.0, 0.0], InterpOptions::default())?;

            let mut t = Text::new(*word, Point::new(x, self.center.y + y), self.size, self.color)
                .with_weight(self.weight)
                .with_align(TextAlign::Left)
                .with_opacity(opacity);
            t.blur = blur;
            children.push(Node::from(t));

            x += approx_text_width(word, self.size, 0.0) + gap;
        }

        Ok(Node::from(Group::new(children)))
    }
}

/// Per-letter reveal with a bouncier spring and overshoot scale; used for
/// the logo wordmark.
#[derive(Clone, Debug)]
pub struct LetterReveal {
    /// Text revealed one character at a time.
    pub text: String,
    /// Frames before the first letter enters.
    pub delay_frames: u64,
    /// Center of the settled run.
    pub center: Point,
    /// Font size in pixels.
    pub size: f64,
    /// Text color.
    pub color: Color,
    /// Entrance offset between consecutive letters.
    pub stagger_frames: f64,
}

impl LetterReveal {
    /// White extra-bold reveal with a 2.5-frame letter stagger.
    pub fn new(text: impl Into<String>, delay_frames: u64, center: Point, size: f64) -> Self {
        Self {
            text: text.into(),
            delay_frames,
            center,
            size,
            color: Color::rgb(255, 255, 255),
            stagger_frames: 2.5,
        }
    }

    /// Render the reveal at the context's frame.
    pub fn evaluate(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let cfg = SpringConfig {
            damping: 20.0,
            mass: 0.5,
            stiffness: 120.0,
        };
        let letters: Vec<char> = self.text.chars().collect();
        let advance = self.size * 0.56;
        let total_width = advance * letters.len() as f64;

        let mut children = Vec::with_capacity(letters.len());
        for (i, letter) in letters.iter().enumerate() {
            let eff = effective_frame(ctx.local.0, self.delay_frames)
                - stagger_offset(i, self.stagger_frames);
            let progress = spring(eff, ctx.fps, &cfg);

            let y = interpolate(progress, &[0.0, 1.0], &[50.0, 0.0], InterpOptions::default())?;
            let opacity =
                interpolate(progress, &[0.0, 0.5], &[0.0, 1.0], InterpOptions::clamp_right())?;
            let scale = interpolate(
                progress,
                &[0.0, 0.8, 1.0],
                &[0.7, 1.05, 1.0],
                InterpOptions::default(),
            )?;
            let blur =
                interpolate(progress, &[0.0, 0.5], &[10.0, 0.0], InterpOptions::clamp_right())?;

            let x = self.center.x - total_width / 2.0 + advance * i as f64;
            let mut t = Text::new(
                letter.to_string(),
                Point::ZERO,
                self.size,
                self.color,
            )
            .with_weight(800)
            .with_opacity(opacity);
            t.blur = blur;

            children.push(Node::from(
                Group::new(vec![Node::from(t)])
                    .with_translate(Vec2::new(x, self.center.y + y))
                    .with_scale(scale),
            ));
        }

        Ok(Node::from(Group::new(children)))
    }
}

/// Character-at-a-time reveal with a blinking cursor while typing.
#[derive(Clone, Debug)]
pub struct Typewriter {
    /// Text typed out character by character.
    pub text: String,
    /// Frames before typing starts.
    pub delay_frames: u64,
    /// Typing speed; lower is faster.
    pub frames_per_char: u64,
    /// Left edge of the run.
    pub pos: Point,
    /// Font size in pixels.
    pub size: f64,
    /// Text color.
    pub color: Color,
}

impl Typewriter {
    /// White run typing at two frames per character.
    pub fn new(text: impl Into<String>, delay_frames: u64, pos: Point, size: f64) -> Self {
        Self {
            text: text.into(),
            delay_frames,
            frames_per_char: 2,
            pos,
            size,
            color: Color::rgb(255, 255, 255),
        }
    }

    /// Render the typed prefix and cursor at the context's frame.
    pub fn evaluate(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let eff = effective_frame(ctx.local.0, self.delay_frames);
        if eff < 0.0 {
            return Ok(Node::from(Group::new(vec![])));
        }
        let eff = eff as u64;

        let char_count = self.text.chars().count();
        let shown = ((eff / self.frames_per_char.max(1)) as usize).min(char_count);
        let visible: String = self.text.chars().take(shown).collect();

        let mut children = vec![Node::from(
            Text::new(visible.clone(), self.pos, self.size, self.color)
                .with_weight(500)
                .with_align(TextAlign::Left),
        )];

        // Cursor blinks on a 20-frame cycle and disappears once typed out.
        if shown < char_count && eff % 20 < 10 {
            let cursor_x = self.pos.x + approx_text_width(&visible, self.size, 0.0) + 2.0;
            children.push(Node::from(Rect {
                center: Point::new(cursor_x, self.pos.y),
                width: self.size * 0.08,
                height: self.size,
                corner_radius: 1.0,
                fill: Some(self.color),
                stroke: None,
                opacity: 1.0,
                blur: 0.0,
            }));
        }

        Ok(Node::from(Group::new(children)))
    }
}

/// Periodic RGB-split jitter. The jitter amplitude is drawn from a seeded
/// generator keyed off the current frame, so re-evaluating a frame yields
/// the identical glitch.
#[derive(Clone, Debug)]
pub struct GlitchText {
    /// The text to draw.
    pub text: String,
    /// Center of the run.
    pub pos: Point,
    /// Font size in pixels.
    pub size: f64,
    /// Color of the main (non-split) layer.
    pub color: Color,
    /// Frames between glitch bursts.
    pub period_frames: u64,
    /// Burst length at the start of each period.
    pub burst_frames: u64,
}

impl GlitchText {
    /// White text glitching three frames out of every sixty.
    pub fn new(text: impl Into<String>, pos: Point, size: f64) -> Self {
        Self {
            text: text.into(),
            pos,
            size,
            color: Color::rgb(255, 255, 255),
            period_frames: 60,
            burst_frames: 3,
        }
    }

    /// Render the text, RGB-split during bursts, at the context's frame.
    pub fn evaluate(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let in_burst = ctx.local.0 % self.period_frames.max(1) < self.burst_frames;
        let (offset, main_opacity) = if in_burst {
            let mut rng = Rng64::new(ctx.seed ^ ctx.local.0.wrapping_mul(0xD6E8_FEB8_6659_FD93));
            (rng.next_f64_range(-2.0, 2.0), 0.8)
        } else {
            (0.0, 1.0)
        };

        let mut children = Vec::with_capacity(3);
        if in_burst {
            for (color, dx) in [
                (Color::rgb(255, 0, 0), offset),
                (Color::rgb(0, 255, 255), -offset),
            ] {
                children.push(Node::from(
                    Text::new(
                        self.text.clone(),
                        Point::new(self.pos.x + dx, self.pos.y),
                        self.size,
                        color,
                    )
                    .with_weight(700)
                    .with_opacity(0.5),
                ));
            }
        }
        children.push(Node::from(
            Text::new(self.text.clone(), self.pos, self.size, self.color)
                .with_weight(700)
                .with_opacity(main_opacity),
        ));

        Ok(Node::from(Group::new(children)))
    }
}

/// Integer counter easing out toward its target value.
#[derive(Clone, Debug)]
pub struct CountUp {
    /// Value the counter ends on.
    pub target: u64,
    /// Suffix appended to the number (units, "+").
    pub suffix: String,
    /// Frames before counting starts.
    pub delay_frames: u64,
    /// Frames from zero to target.
    pub duration_frames: u64,
    /// Center of the run.
    pub pos: Point,
    /// Font size in pixels.
    pub size: f64,
    /// Text color.
    pub color: Color,
}

impl CountUp {
    /// White bold counter reaching its target in thirty frames.
    pub fn new(target: u64, suffix: impl Into<String>, delay_frames: u64, pos: Point) -> Self {
        Self {
            target,
            suffix: suffix.into(),
            delay_frames,
            duration_frames: 30,
            pos,
            size: 72.0,
            color: Color::rgb(255, 255, 255),
        }
    }

    /// Render the current count at the context's frame.
    pub fn evaluate(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let eff = effective_frame(ctx.local.0, self.delay_frames);
        let eased = interpolate(
            eff,
            &[0.0, self.duration_frames.max(1) as f64],
            &[0.0, 1.0],
            InterpOptions::clamp_both().with_ease(Ease::OutCubic),
        )?;
        let current = (self.target as f64 * eased).round() as u64;

        Ok(Node::from(
            Text::new(
                format!("{current}{}", self.suffix),
                self.pos,
                self.size,
                self.color,
            )
            .with_weight(700),
        ))
    }
}

/// Spring-widening underline bar with a periodic shimmer sweep.
#[derive(Clone, Debug)]
pub struct UnderlineReveal {
    /// Frames before the bar starts growing.
    pub delay_frames: u64,
    /// Center of the settled bar.
    pub center: Point,
    /// Settled width in pixels.
    pub max_width: f64,
    /// Bar thickness in pixels.
    pub height: f64,
    /// Bar color.
    pub color: Color,
}

impl UnderlineReveal {
    /// Green 4-pixel bar growing to `max_width`.
    pub fn new(delay_frames: u64, center: Point, max_width: f64) -> Self {
        Self {
            delay_frames,
            center,
            max_width,
            height: 4.0,
            color: Color::rgb(34, 197, 94),
        }
    }

    /// Render the bar and shimmer at the context's frame.
    pub fn evaluate(&self, ctx: &SceneCtx) -> ReelResult<Node> {
        let cfg = SpringConfig {
            damping: 25.0,
            mass: 0.6,
            stiffness: 80.0,
        };
        let eff = effective_frame(ctx.local.0, self.delay_frames);
        let progress = spring(eff, ctx.fps, &cfg);

        let width = interpolate(
            progress,
            &[0.0, 1.0],
            &[0.0, self.max_width],
            InterpOptions::default(),
        )?;
        let opacity = interpolate(progress, &[0.0, 0.3], &[0.0, 1.0], InterpOptions::clamp_right())?;

        let mut children = vec![Node::from(Rect {
            center: self.center,
            width,
            height: self.height,
            corner_radius: self.height / 2.0,
            fill: Some(self.color),
            stroke: None,
            opacity,
            blur: 0.0,
        })];

        // Shimmer sweeps the full bar once every 60 frames after the
        // entrance starts.
        if eff >= 0.0 {
            let sweep = cycle01(eff as u64, 60);
            let shimmer_x = interpolate(
                sweep,
                &[0.0, 1.0],
                &[
                    self.center.x - self.max_width / 2.0 - 100.0,
                    self.center.x + self.max_width / 2.0 + 100.0,
                ],
                InterpOptions::default(),
            )?;
            children.push(Node::from(Rect {
                center: Point::new(shimmer_x, self.center.y),
                width: 80.0,
                height: self.height,
                corner_radius: self.height / 2.0,
                fill: Some(Color::rgb(255, 255, 255)),
                stroke: None,
                opacity: opacity * 0.6,
                blur: 2.0,
            }));
        }

        Ok(Node::from(Group::new(children)))
    }
}

/// Idle emphasis wobble shared by a few callers; exported for scenes that
/// roll their own text but still want the standard pulse.
pub fn glow_pulse(local_frame: u64, start_frame: u64, speed: f64) -> f64 {
    if local_frame <= start_frame {
        return 0.0;
    }
    osc(local_frame - start_frame, speed, 0.0) * 0.5 + 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::core::{Canvas, Fps, FrameIndex};

    fn ctx(local: u64) -> SceneCtx {
        SceneCtx::standalone(
            FrameIndex(local),
            Fps::new(30).unwrap(),
            Canvas::new(1920, 1080).unwrap(),
            7,
        )
    }

    fn collect_opacities(node: &Node, out: &mut Vec<f64>) {
        match node {
            Node::Group(g) => {
                for c in &g.children {
                    collect_opacities(c, out);
                }
            }
            Node::Text(t) => out.push(t.opacity),
            _ => {}
        }
    }

    #[test]
    fn title_words_are_hidden_before_delay() {
        let title = TitleReveal::new("hello brave world", 20, Point::new(960.0, 400.0), 72.0);
        let tree = title.evaluate(&ctx(5)).unwrap();
        let mut ops = Vec::new();
        collect_opacities(&tree, &mut ops);
        assert_eq!(ops.len(), 3);
        assert!(ops.iter().all(|o| *o == 0.0));
    }

    #[test]
    fn title_staggers_word_entrances() {
        let title = TitleReveal::new("one two", 0, Point::new(960.0, 400.0), 72.0);
        let tree = title.evaluate(&ctx(8)).unwrap();
        let mut ops = Vec::new();
        collect_opacities(&tree, &mut ops);
        assert_eq!(ops.len(), 2);
        assert!(ops[0] > ops[1], "first word leads: {ops:?}");
    }

    #[test]
    fn typewriter_reveals_then_drops_cursor() {
        let tw = Typewriter::new("abcd", 0, Point::new(100.0, 100.0), 36.0);

        // Mid-typing: text plus cursor (frame 4 % 20 < 10).
        let Node::Group(g) = tw.evaluate(&ctx(4)).unwrap() else {
            panic!("expected group");
        };
        assert_eq!(g.children.len(), 2);
        let Node::Text(t) = &g.children[0] else {
            panic!("expected text");
        };
        assert_eq!(t.content, "ab");

        // Long after: full text, no cursor.
        let Node::Group(g) = tw.evaluate(&ctx(200)).unwrap() else {
            panic!("expected group");
        };
        assert_eq!(g.children.len(), 1);
        let Node::Text(t) = &g.children[0] else {
            panic!("expected text");
        };
        assert_eq!(t.content, "abcd");
    }

    #[test]
    fn typewriter_hidden_before_delay() {
        let tw = Typewriter::new("abcd", 30, Point::new(100.0, 100.0), 36.0);
        let Node::Group(g) = tw.evaluate(&ctx(10)).unwrap() else {
            panic!("expected group");
        };
        assert!(g.children.is_empty());
    }

    #[test]
    fn glitch_is_deterministic_and_periodic() {
        let gl = GlitchText::new("ERROR", Point::new(960.0, 540.0), 48.0);

        let a = serde_json::to_string(&gl.evaluate(&ctx(1)).unwrap()).unwrap();
        let b = serde_json::to_string(&gl.evaluate(&ctx(1)).unwrap()).unwrap();
        assert_eq!(a, b);

        // Inside the burst: three layers. Outside: just the main run.
        let Node::Group(g) = gl.evaluate(&ctx(1)).unwrap() else {
            panic!("expected group");
        };
        assert_eq!(g.children.len(), 3);
        let Node::Group(g) = gl.evaluate(&ctx(30)).unwrap() else {
            panic!("expected group");
        };
        assert_eq!(g.children.len(), 1);
    }

    #[test]
    fn count_up_hits_target_and_holds() {
        let cu = CountUp::new(500, "+", 10, Point::new(960.0, 540.0));
        let text_at = |frame: u64| -> String {
            let Node::Text(t) = cu.evaluate(&ctx(frame)).unwrap() else {
                panic!("expected text");
            };
            t.content
        };
        assert_eq!(text_at(0), "0+");
        assert_eq!(text_at(40), "500+");
        assert_eq!(text_at(100), "500+");
    }

    #[test]
    fn underline_grows_from_zero() {
        let ul = UnderlineReveal::new(0, Point::new(960.0, 640.0), 450.0);
        let width_at = |frame: u64| -> f64 {
            let Node::Group(g) = ul.evaluate(&ctx(frame)).unwrap() else {
                panic!("expected group");
            };
            let Node::Rect(r) = &g.children[0] else {
                panic!("expected rect");
            };
            r.width
        };
        assert_eq!(width_at(0), 0.0);
        assert!(width_at(30) > 300.0);
        assert!((width_at(300) - 450.0).abs() < 1.0);
    }
}
