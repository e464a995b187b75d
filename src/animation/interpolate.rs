//! Piecewise-linear range mapping with per-side extrapolation policy.

use crate::{
    animation::ease::Ease,
    foundation::error::{ReelError, ReelResult},
};

/// Behavior for inputs outside the declared input range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum Extrapolate {
    /// Continue the nearest segment's slope linearly.
    #[default]
    Extend,
    /// Pin to the nearest output endpoint.
    Clamp,
}

/// Per-call interpolation options. Call sites spell out the extrapolation
/// policy they rely on; the `Extend` default exists but entrance animations
/// almost always want a clamp on at least one side.
#[derive(Clone, Copy, Debug, Default)]
pub struct InterpOptions {
    /// Policy below the first input stop.
    pub left: Extrapolate,
    /// Policy above the last input stop.
    pub right: Extrapolate,
    /// Optional easing of the segment-local fraction. Only applied to
    /// in-range inputs; extrapolated values stay linear.
    pub ease: Option<Ease>,
}

impl InterpOptions {
    /// Clamp on both sides.
    pub fn clamp_both() -> Self {
        Self {
            left: Extrapolate::Clamp,
            right: Extrapolate::Clamp,
            ease: None,
        }
    }

    /// Extend below the range, clamp above it.
    pub fn clamp_right() -> Self {
        Self {
            left: Extrapolate::Extend,
            right: Extrapolate::Clamp,
            ease: None,
        }
    }

    /// Clamp below the range, extend above it.
    pub fn clamp_left() -> Self {
        Self {
            left: Extrapolate::Clamp,
            right: Extrapolate::Extend,
            ease: None,
        }
    }

    /// Set the easing curve.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }
}

/// Piecewise-linear mapping of `x` from `input` to `output`.
///
/// `input` must be strictly increasing with at least two finite entries and
/// `output` must have the same length; multiple segments give a multi-stop
/// mapping (e.g. `[0, 0.7, 1] -> [0.3, 1.08, 1]` for an overshoot-and-settle
/// scale). Referentially transparent: identical arguments always produce the
/// identical result.
pub fn interpolate(x: f64, input: &[f64], output: &[f64], opts: InterpOptions) -> ReelResult<f64> {
    validate_ranges(input, output)?;

    if !x.is_finite() {
        return Err(ReelError::invalid_range("interpolate input must be finite"));
    }

    let last = input.len() - 1;

    // Segment index such that input[i] <= x < input[i+1], pinned to the
    // outermost segment for out-of-range inputs.
    let i = input
        .partition_point(|v| *v <= x)
        .saturating_sub(1)
        .min(last - 1);

    let span = input[i + 1] - input[i];
    let mut t = (x - input[i]) / span;

    if x < input[0] {
        match opts.left {
            Extrapolate::Clamp => return Ok(output[0]),
            Extrapolate::Extend => {}
        }
    } else if x > input[last] {
        match opts.right {
            Extrapolate::Clamp => return Ok(output[last]),
            Extrapolate::Extend => {}
        }
    } else if let Some(ease) = opts.ease {
        t = ease.apply(t);
    }

    Ok(output[i] + (output[i + 1] - output[i]) * t)
}

fn validate_ranges(input: &[f64], output: &[f64]) -> ReelResult<()> {
    if input.len() < 2 {
        return Err(ReelError::invalid_range(
            "inputRange needs at least two stops",
        ));
    }
    if input.len() != output.len() {
        return Err(ReelError::invalid_range(format!(
            "inputRange and outputRange lengths differ ({} vs {})",
            input.len(),
            output.len()
        )));
    }
    if input.iter().chain(output).any(|v| !v.is_finite()) {
        return Err(ReelError::invalid_range("range stops must be finite"));
    }
    if !input.windows(2).all(|w| w[0] < w[1]) {
        return Err(ReelError::invalid_range(
            "inputRange must be strictly increasing",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_single_segment_linearly() {
        let v = interpolate(5.0, &[0.0, 10.0], &[0.0, 100.0], InterpOptions::default()).unwrap();
        assert_eq!(v, 50.0);
    }

    #[test]
    fn maps_multi_segment() {
        // Overshoot-and-settle scale curve.
        let opts = InterpOptions::clamp_both();
        let input = [0.0, 0.7, 1.0];
        let output = [0.3, 1.08, 1.0];
        assert_eq!(interpolate(0.0, &input, &output, opts).unwrap(), 0.3);
        assert_eq!(interpolate(0.7, &input, &output, opts).unwrap(), 1.08);
        assert_eq!(interpolate(1.0, &input, &output, opts).unwrap(), 1.0);
        let mid = interpolate(0.85, &input, &output, opts).unwrap();
        assert!((mid - 1.04).abs() < 1e-12);
    }

    #[test]
    fn boundary_clamp_vs_extend() {
        let clamp = InterpOptions::clamp_both();
        assert_eq!(
            interpolate(-5.0, &[0.0, 10.0], &[0.0, 100.0], clamp).unwrap(),
            0.0
        );
        assert_eq!(
            interpolate(-5.0, &[0.0, 10.0], &[0.0, 100.0], InterpOptions::default()).unwrap(),
            -50.0
        );
        assert_eq!(
            interpolate(15.0, &[0.0, 10.0], &[0.0, 100.0], clamp).unwrap(),
            100.0
        );
        assert_eq!(
            interpolate(15.0, &[0.0, 10.0], &[0.0, 100.0], InterpOptions::default()).unwrap(),
            150.0
        );
    }

    #[test]
    fn extend_uses_outermost_segment_slope() {
        // Segments have slopes 1 then 10; extrapolation follows the nearest.
        let input = [0.0, 1.0, 2.0];
        let output = [0.0, 1.0, 11.0];
        let opts = InterpOptions::default();
        assert_eq!(interpolate(-1.0, &input, &output, opts).unwrap(), -1.0);
        assert_eq!(interpolate(3.0, &input, &output, opts).unwrap(), 21.0);
    }

    #[test]
    fn ease_applies_to_segment_fraction_in_range_only() {
        let opts = InterpOptions::clamp_both().with_ease(Ease::InQuad);
        let v = interpolate(5.0, &[0.0, 10.0], &[0.0, 100.0], opts).unwrap();
        assert_eq!(v, 25.0); // 0.5^2 * 100

        // Out-of-range input with extend stays linear.
        let opts = InterpOptions::default().with_ease(Ease::InQuad);
        let v = interpolate(-5.0, &[0.0, 10.0], &[0.0, 100.0], opts).unwrap();
        assert_eq!(v, -50.0);
    }

    #[test]
    fn monotone_when_clamped_and_ranges_increase() {
        let opts = InterpOptions::clamp_both();
        let input = [0.0, 3.0, 10.0];
        let output = [0.0, 30.0, 50.0];
        let mut prev = f64::NEG_INFINITY;
        let mut x = -2.0;
        while x <= 12.0 {
            let v = interpolate(x, &input, &output, opts).unwrap();
            assert!(v >= prev);
            prev = v;
            x += 0.25;
        }
    }

    #[test]
    fn determinism() {
        let opts = InterpOptions::clamp_right().with_ease(Ease::OutCubic);
        let a = interpolate(3.7, &[0.0, 5.0, 9.0], &[1.0, -2.0, 4.0], opts).unwrap();
        let b = interpolate(3.7, &[0.0, 5.0, 9.0], &[1.0, -2.0, 4.0], opts).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn rejects_malformed_ranges() {
        let opts = InterpOptions::default();
        assert!(matches!(
            interpolate(0.0, &[0.0], &[0.0], opts),
            Err(ReelError::InvalidRange(_))
        ));
        assert!(matches!(
            interpolate(0.0, &[0.0, 1.0], &[0.0, 1.0, 2.0], opts),
            Err(ReelError::InvalidRange(_))
        ));
        assert!(matches!(
            interpolate(0.0, &[0.0, 0.0], &[0.0, 1.0], opts),
            Err(ReelError::InvalidRange(_))
        ));
        assert!(matches!(
            interpolate(0.0, &[1.0, 0.0], &[0.0, 1.0], opts),
            Err(ReelError::InvalidRange(_))
        ));
        assert!(matches!(
            interpolate(0.0, &[0.0, f64::NAN], &[0.0, 1.0], opts),
            Err(ReelError::InvalidRange(_))
        ));
        assert!(matches!(
            interpolate(f64::INFINITY, &[0.0, 1.0], &[0.0, 1.0], opts),
            Err(ReelError::InvalidRange(_))
        ));
    }
}
