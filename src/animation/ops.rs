//! Frame-mapping helpers shared by every animated primitive.
//!
//! Entrance animations subtract a delay (plus a per-part stagger) from the
//! scene-local frame and feed the result to a spring. Idle motions (floating
//! particles, pulsing glows) are raw trigonometric functions of the frame
//! number: intentionally unbounded and non-settling, a distinct idiom from
//! spring entrances.

use std::f64::consts::TAU;

/// Signed frames elapsed since a delayed entrance started. Negative while
/// the entrance has not begun, which springs report as progress 0.
pub fn effective_frame(local_frame: u64, delay_frames: u64) -> f64 {
    local_frame as f64 - delay_frames as f64
}

/// Delay offset for part `index` of a staggered multi-part primitive.
pub fn stagger_offset(index: usize, step_frames: f64) -> f64 {
    index as f64 * step_frames
}

/// Wrap `frame` into a repeating cycle of `period` frames. `period` must be
/// non-zero; looping callers own that as a static invariant.
pub fn loop_frame(frame: u64, period: u64) -> u64 {
    debug_assert!(period > 0);
    frame % period.max(1)
}

/// Wrap `frame` into a forward-then-backward cycle over `[0, period)`.
pub fn ping_pong(frame: u64, period: u64) -> u64 {
    debug_assert!(period > 0);
    let period = period.max(1);
    if period == 1 {
        return 0;
    }
    let cycle = 2 * (period - 1);
    let pos = frame % cycle;
    if pos < period { pos } else { cycle - pos }
}

/// Raw sine of the frame number: `sin(frame * speed + phase)` in `[-1, 1]`.
/// `speed` is radians per frame.
pub fn osc(frame: u64, speed: f64, phase: f64) -> f64 {
    (frame as f64 * speed + phase).sin()
}

/// [`osc`] remapped to `[0, 1]`, for opacity/scale pulses.
pub fn pulse01(frame: u64, speed: f64, phase: f64) -> f64 {
    0.5 + 0.5 * osc(frame, speed, phase)
}

/// Fraction through a repeating cycle of `period` frames, in `[0, 1)`.
pub fn cycle01(frame: u64, period: u64) -> f64 {
    debug_assert!(period > 0);
    let period = period.max(1);
    (frame % period) as f64 / period as f64
}

/// Full sine turn per `period` frames, handy phase-locked idle motion.
pub fn osc_period(frame: u64, period: u64, phase: f64) -> f64 {
    debug_assert!(period > 0);
    (TAU * cycle01(frame, period.max(1)) + phase).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_frame_is_signed() {
        assert_eq!(effective_frame(10, 4), 6.0);
        assert_eq!(effective_frame(2, 10), -8.0);
    }

    #[test]
    fn stagger_scales_by_index() {
        assert_eq!(stagger_offset(0, 5.0), 0.0);
        assert_eq!(stagger_offset(3, 5.0), 15.0);
        assert_eq!(stagger_offset(2, 2.5), 5.0);
    }

    #[test]
    fn loop_frame_wraps() {
        assert_eq!(loop_frame(0, 80), 0);
        assert_eq!(loop_frame(79, 80), 79);
        assert_eq!(loop_frame(80, 80), 0);
        assert_eq!(loop_frame(165, 80), 5);
    }

    #[test]
    fn ping_pong_reflects() {
        let seq: Vec<u64> = (0..8).map(|f| ping_pong(f, 4)).collect();
        assert_eq!(seq, vec![0, 1, 2, 3, 2, 1, 0, 1]);
        assert_eq!(ping_pong(123, 1), 0);
    }

    #[test]
    fn pulse_is_bounded() {
        for f in 0..200 {
            let v = pulse01(f, 0.07, 1.3);
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn cycle01_spans_unit_interval() {
        assert_eq!(cycle01(0, 80), 0.0);
        assert_eq!(cycle01(40, 80), 0.5);
        assert!(cycle01(79, 80) < 1.0);
        assert_eq!(cycle01(80, 80), 0.0);
    }
}
