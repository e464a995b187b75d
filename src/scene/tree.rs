//! The evaluated visual tree.
//!
//! A frame evaluates to a fresh tree of drawable nodes with purely numeric
//! style attributes. Nothing here carries identity across frames and nothing
//! is ever mutated after construction; a host rasterizer walks the tree and
//! paints it. Rasterization, font resolution, and encoding are external.

use kurbo::{Point, Vec2};

use crate::foundation::core::Color;

/// One drawable element. A closed set: scenes pick variants by composition
/// config, not by open-ended extension.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Container applying opacity and a transform to its children.
    Group(Group),
    /// Rounded rectangle.
    Rect(Rect),
    /// Filled or stroked circle.
    Circle(Circle),
    /// Straight stroked segment.
    Line(Line),
    /// Stroked path with a trim fraction.
    Polyline(Polyline),
    /// Single text run.
    Text(Text),
}

/// Container applying an opacity and a transform to its children.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Group {
    /// Multiplied into every descendant's opacity.
    pub opacity: f64,
    /// Translation applied before scale and rotation.
    pub translate: Vec2,
    /// Uniform scale about the group origin.
    pub scale: f64,
    /// Rotation about the group origin, clockwise degrees.
    pub rotation_deg: f64,
    /// Children in paint order, first painted first.
    pub children: Vec<Node>,
}

impl Group {
    /// Group with identity transform and full opacity.
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            opacity: 1.0,
            translate: Vec2::ZERO,
            scale: 1.0,
            rotation_deg: 0.0,
            children,
        }
    }

    /// Set the group opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set the translation.
    pub fn with_translate(mut self, translate: Vec2) -> Self {
        self.translate = translate;
        self
    }

    /// Set the uniform scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the rotation in degrees.
    pub fn with_rotation_deg(mut self, deg: f64) -> Self {
        self.rotation_deg = deg;
        self
    }
}

impl From<Group> for Node {
    fn from(g: Group) -> Self {
        Node::Group(g)
    }
}

/// Axis-aligned rounded rectangle, positioned by its center.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Rect {
    /// Center point.
    pub center: Point,
    /// Full width.
    pub width: f64,
    /// Full height.
    pub height: f64,
    /// Corner rounding radius.
    pub corner_radius: f64,
    /// Fill color, if any.
    pub fill: Option<Color>,
    /// Outline stroke, if any.
    pub stroke: Option<Stroke>,
    /// Element opacity in `[0, 1]`.
    pub opacity: f64,
    /// Gaussian blur radius in pixels; 0 is sharp.
    pub blur: f64,
}

impl From<Rect> for Node {
    fn from(r: Rect) -> Self {
        Node::Rect(r)
    }
}

/// Circle, filled and/or stroked.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    /// Radius in pixels.
    pub radius: f64,
    /// Fill color, if any.
    pub fill: Option<Color>,
    /// Outline stroke, if any.
    pub stroke: Option<Stroke>,
    /// Element opacity in `[0, 1]`.
    pub opacity: f64,
    /// Gaussian blur radius in pixels; 0 is sharp.
    pub blur: f64,
}

impl From<Circle> for Node {
    fn from(c: Circle) -> Self {
        Node::Circle(c)
    }
}

/// Straight stroked segment.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Line {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
    /// Stroke color and width.
    pub stroke: Stroke,
    /// Element opacity in `[0, 1]`.
    pub opacity: f64,
}

impl From<Line> for Node {
    fn from(l: Line) -> Self {
        Node::Line(l)
    }
}

/// Open or closed stroked path. `trim` is the drawn fraction of total arc
/// length from the start, driving stroke-draw reveals (checkmarks, logos).
#[derive(Clone, Debug, serde::Serialize)]
pub struct Polyline {
    /// Vertices in stroke order.
    pub points: Vec<Point>,
    /// Whether the last vertex connects back to the first.
    pub closed: bool,
    /// Stroke color and width.
    pub stroke: Stroke,
    /// Drawn fraction of total arc length, in `[0, 1]`.
    pub trim: f64,
    /// Element opacity in `[0, 1]`.
    pub opacity: f64,
}

impl From<Polyline> for Node {
    fn from(p: Polyline) -> Self {
        Node::Polyline(p)
    }
}

/// A single run of text. Font selection and shaping belong to the host
/// rasterizer; this crate only carries the style attributes it animates.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Text {
    /// The characters to draw.
    pub content: String,
    /// Anchor point; its meaning along x depends on `align`.
    pub pos: Point,
    /// Font size in pixels.
    pub size: f64,
    /// CSS-style weight, 100-900.
    pub weight: u16,
    /// Fill color.
    pub color: Color,
    /// Horizontal anchoring of the run at `pos`.
    pub align: TextAlign,
    /// Extra advance between characters in pixels.
    pub letter_spacing: f64,
    /// Element opacity in `[0, 1]`.
    pub opacity: f64,
    /// Gaussian blur radius in pixels; 0 is sharp.
    pub blur: f64,
}

impl Text {
    /// Centered regular-weight run with no spacing, blur, or transparency.
    pub fn new(content: impl Into<String>, pos: Point, size: f64, color: Color) -> Self {
        Self {
            content: content.into(),
            pos,
            size,
            weight: 400,
            color,
            align: TextAlign::Center,
            letter_spacing: 0.0,
            opacity: 1.0,
            blur: 0.0,
        }
    }

    /// Set the font weight.
    pub fn with_weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    /// Set the horizontal alignment.
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Set the opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

impl From<Text> for Node {
    fn from(t: Text) -> Self {
        Node::Text(t)
    }
}

/// Horizontal anchoring of a text run at its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Position marks the left edge of the run.
    Left,
    /// Position marks the middle of the run.
    Center,
    /// Position marks the right edge of the run.
    Right,
}

/// Outline style shared by every stroked node.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f64,
}

impl Stroke {
    /// Stroke with the given color and width.
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

impl Node {
    /// Number of nodes in the subtree, this one included.
    pub fn count(&self) -> usize {
        match self {
            Node::Group(g) => 1 + g.children.iter().map(Node::count).sum::<usize>(),
            _ => 1,
        }
    }
}
