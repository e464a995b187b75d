//! Frame, format, and color vocabulary types.

use crate::foundation::error::{ReelError, ReelResult};

pub use kurbo::{Point, Vec2};

/// One discrete, integer-indexed sampling instant of the animation timeline.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open frame window `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame of the window.
    pub start: FrameIndex,
    /// One past the last frame of the window.
    pub end: FrameIndex,
}

impl FrameRange {
    /// Range `[start, end)`; `start` must not exceed `end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> ReelResult<Self> {
        if start.0 > end.0 {
            return Err(ReelError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames in the window.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// Whether the window covers no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Whether `f` falls inside the window.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }
}

/// Integer frames-per-second rate. The video model fixes fps to a whole
/// number, so no rational representation is needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps(u32);

impl Fps {
    /// Non-zero frame rate.
    pub fn new(rate: u32) -> ReelResult<Self> {
        if rate == 0 {
            return Err(ReelError::validation("fps must be > 0"));
        }
        Ok(Self(rate))
    }

    /// The rate in frames per second.
    pub fn get(self) -> u32 {
        self.0
    }

    /// The rate as a float, for time arithmetic.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Seconds elapsed after `frames` frames. Accepts fractional frame counts
    /// because stagger offsets may be sub-frame.
    pub fn frames_to_secs(self, frames: f64) -> f64 {
        frames / self.as_f64()
    }
}

/// Output raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Canvas with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> ReelResult<Self> {
        if width == 0 || height == 0 {
            return Err(ReelError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Geometric center of the canvas.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// Straight (non-premultiplied) RGB. Alpha travels separately as `f64`
/// opacity on style attributes so blend ramps stay in float space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Color from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear mix toward `other`; `t` is clamped to `[0, 1]`.
    pub fn mix(self, other: Color, t: f64) -> Color {
        fn mix_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        let t = t.clamp(0.0, 1.0);
        Color {
            r: mix_u8(self.r, other.r, t),
            g: mix_u8(self.g, other.g, t),
            b: mix_u8(self.b, other.b, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_range_contains_boundaries() {
        let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
        assert!(!r.contains(FrameIndex(1)));
        assert!(r.contains(FrameIndex(2)));
        assert!(r.contains(FrameIndex(4)));
        assert!(!r.contains(FrameIndex(5)));
    }

    #[test]
    fn frame_range_rejects_inverted() {
        assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    }

    #[test]
    fn fps_converts_frames_to_secs() {
        let fps = Fps::new(30).unwrap();
        assert_eq!(fps.frames_to_secs(90.0), 3.0);
        assert_eq!(fps.frames_to_secs(15.0), 0.5);
        assert!(Fps::new(0).is_err());
    }

    #[test]
    fn canvas_center_is_half_extent() {
        let c = Canvas::new(1920, 1080).unwrap();
        assert_eq!(c.center(), Point::new(960.0, 540.0));
        assert!(Canvas::new(0, 1080).is_err());
    }

    #[test]
    fn color_mix_endpoints() {
        let a = Color::rgb(0, 0, 0);
        let b = Color::rgb(255, 100, 0);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
        assert_eq!(a.mix(b, 2.0), b);
    }
}
