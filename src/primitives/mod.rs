//! Animated primitives.
//!
//! Every primitive is a pure function of the scene context following one
//! contract: subtract its delay (plus any per-part stagger) from the scene
//! frame, drive a spring with the result, and map the spring progress onto
//! style attributes through `interpolate`. Idle motion (floats, pulses,
//! shimmer) uses the raw oscillators in [`crate::animation::ops`] instead of
//! springs and never settles.

pub mod ambient;
pub mod icons;
pub mod text;

/// Rough advance-width model for laying out word/letter runs. Real shaping
/// happens in the host rasterizer; this only needs to be deterministic and
/// visually plausible.
pub(crate) fn approx_text_width(text: &str, size: f64, letter_spacing: f64) -> f64 {
    let n = text.chars().count();
    if n == 0 {
        return 0.0;
    }
    n as f64 * size * 0.56 + letter_spacing * (n as f64 - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_width_scales_with_length_and_size() {
        assert_eq!(approx_text_width("", 40.0, 0.0), 0.0);
        let short = approx_text_width("hi", 40.0, 0.0);
        let long = approx_text_width("hello", 40.0, 0.0);
        assert!(long > short);
        assert!(approx_text_width("hi", 80.0, 0.0) > short);
    }
}
