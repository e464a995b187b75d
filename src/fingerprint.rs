//! Order-sensitive 128-bit digest of an evaluated frame tree.
//!
//! Two independently seeded FNV streams walk the tree in paint order and
//! hash every style attribute at full f64 bit precision. Equal fingerprints
//! across runs or machines mean the frame evaluated identically; a single
//! flipped mantissa bit anywhere shows up here.

use crate::{
    foundation::{core::Color, math::Fnv1a64},
    scene::tree::{Node, Stroke, TextAlign},
};

/// 128-bit frame digest, printed as 32 hex characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameFingerprint {
    /// First FNV stream.
    pub hi: u64,
    /// Second, independently seeded FNV stream.
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Digest every node and style attribute of `tree` in paint order.
pub fn fingerprint_tree(tree: &Node) -> FrameFingerprint {
    let mut a = Fnv1a64::new(0xcbf2_9ce4_8422_2325);
    let mut b = Fnv1a64::new(0x9ae1_6a3b_2f90_404f);
    write_node(&mut a, &mut b, tree);
    FrameFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    }
}

fn write_node(a: &mut Fnv1a64, b: &mut Fnv1a64, node: &Node) {
    match node {
        Node::Group(g) => {
            write_u8(a, b, 0);
            write_f64(a, b, g.opacity);
            write_f64(a, b, g.translate.x);
            write_f64(a, b, g.translate.y);
            write_f64(a, b, g.scale);
            write_f64(a, b, g.rotation_deg);
            write_u64(a, b, g.children.len() as u64);
            for child in &g.children {
                write_node(a, b, child);
            }
        }
        Node::Rect(r) => {
            write_u8(a, b, 1);
            write_f64(a, b, r.center.x);
            write_f64(a, b, r.center.y);
            write_f64(a, b, r.width);
            write_f64(a, b, r.height);
            write_f64(a, b, r.corner_radius);
            write_color_opt(a, b, r.fill);
            write_stroke_opt(a, b, r.stroke);
            write_f64(a, b, r.opacity);
            write_f64(a, b, r.blur);
        }
        Node::Circle(c) => {
            write_u8(a, b, 2);
            write_f64(a, b, c.center.x);
            write_f64(a, b, c.center.y);
            write_f64(a, b, c.radius);
            write_color_opt(a, b, c.fill);
            write_stroke_opt(a, b, c.stroke);
            write_f64(a, b, c.opacity);
            write_f64(a, b, c.blur);
        }
        Node::Line(l) => {
            write_u8(a, b, 3);
            write_f64(a, b, l.from.x);
            write_f64(a, b, l.from.y);
            write_f64(a, b, l.to.x);
            write_f64(a, b, l.to.y);
            write_stroke(a, b, l.stroke);
            write_f64(a, b, l.opacity);
        }
        Node::Polyline(p) => {
            write_u8(a, b, 4);
            write_u64(a, b, p.points.len() as u64);
            for pt in &p.points {
                write_f64(a, b, pt.x);
                write_f64(a, b, pt.y);
            }
            write_u8(a, b, u8::from(p.closed));
            write_stroke(a, b, p.stroke);
            write_f64(a, b, p.trim);
            write_f64(a, b, p.opacity);
        }
        Node::Text(t) => {
            write_u8(a, b, 5);
            write_str(a, b, &t.content);
            write_f64(a, b, t.pos.x);
            write_f64(a, b, t.pos.y);
            write_f64(a, b, t.size);
            write_u64(a, b, u64::from(t.weight));
            write_color(a, b, t.color);
            write_u8(
                a,
                b,
                match t.align {
                    TextAlign::Left => 0,
                    TextAlign::Center => 1,
                    TextAlign::Right => 2,
                },
            );
            write_f64(a, b, t.letter_spacing);
            write_f64(a, b, t.opacity);
            write_f64(a, b, t.blur);
        }
    }
}

fn write_u8(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u8) {
    a.write_u8(v);
    b.write_u8(v);
}

fn write_u64(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u64) {
    a.write_u64(v);
    b.write_u64(v);
}

fn write_f64(a: &mut Fnv1a64, b: &mut Fnv1a64, v: f64) {
    a.write_f64(v);
    b.write_f64(v);
}

fn write_str(a: &mut Fnv1a64, b: &mut Fnv1a64, s: &str) {
    a.write_str(s);
    b.write_str(s);
}

fn write_color(a: &mut Fnv1a64, b: &mut Fnv1a64, c: Color) {
    write_u8(a, b, c.r);
    write_u8(a, b, c.g);
    write_u8(a, b, c.b);
}

fn write_color_opt(a: &mut Fnv1a64, b: &mut Fnv1a64, c: Option<Color>) {
    match c {
        Some(c) => {
            write_u8(a, b, 1);
            write_color(a, b, c);
        }
        None => write_u8(a, b, 0),
    }
}

fn write_stroke(a: &mut Fnv1a64, b: &mut Fnv1a64, s: Stroke) {
    write_color(a, b, s.color);
    write_f64(a, b, s.width);
}

fn write_stroke_opt(a: &mut Fnv1a64, b: &mut Fnv1a64, s: Option<Stroke>) {
    match s {
        Some(s) => {
            write_u8(a, b, 1);
            write_stroke(a, b, s);
        }
        None => write_u8(a, b, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::tree::Group;
    use kurbo::Point;

    fn sample(opacity: f64) -> Node {
        Node::from(
            Group::new(vec![Node::from(
                crate::scene::tree::Text::new(
                    "hi",
                    Point::new(1.0, 2.0),
                    40.0,
                    Color::rgb(255, 255, 255),
                )
                .with_opacity(opacity),
            )])
            .with_scale(1.5),
        )
    }

    #[test]
    fn same_tree_same_fingerprint() {
        assert_eq!(fingerprint_tree(&sample(1.0)), fingerprint_tree(&sample(1.0)));
    }

    #[test]
    fn attribute_change_changes_fingerprint() {
        assert_ne!(fingerprint_tree(&sample(1.0)), fingerprint_tree(&sample(0.5)));
    }

    #[test]
    fn child_order_matters() {
        let ab = Node::from(Group::new(vec![sample(0.1), sample(0.2)]));
        let ba = Node::from(Group::new(vec![sample(0.2), sample(0.1)]));
        assert_ne!(fingerprint_tree(&ab), fingerprint_tree(&ba));
    }

    #[test]
    fn display_is_32_hex_chars() {
        let fp = fingerprint_tree(&sample(1.0));
        let s = fp.to_string();
        assert_eq!(s.len(), 32);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
