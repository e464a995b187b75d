//! Closed-form damped-oscillator entrance easing.

use crate::foundation::{
    core::Fps,
    error::{ReelError, ReelResult},
};

/// Envelope threshold below which the oscillator is considered settled and
/// the reported value clamps to exactly 1.0.
const SETTLE_ENVELOPE: f64 = 1e-6;

/// Damped harmonic oscillator parameters.
///
/// The canonical entrance easing: released at displacement 1 and converging
/// to 0, reported as `1 - displacement` so the progress runs 0 -> 1. A
/// damping ratio below 1 overshoots past 1 before settling (bouncy pops);
/// at or above 1 the approach is monotone (smooth reveals).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Viscous damping coefficient `c`.
    pub damping: f64,
    /// Oscillating mass `m`.
    pub mass: f64,
    /// Spring constant `k`.
    pub stiffness: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            mass: 1.0,
            stiffness: 100.0,
        }
    }
}

impl SpringConfig {
    /// Validated config; every parameter must be finite and positive.
    pub fn new(damping: f64, mass: f64, stiffness: f64) -> ReelResult<Self> {
        let cfg = Self {
            damping,
            mass,
            stiffness,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Heavily damped, no overshoot. The workhorse config for text reveals.
    pub fn smooth() -> Self {
        Self {
            damping: 200.0,
            ..Self::default()
        }
    }

    /// Light, springy pop with visible overshoot.
    pub fn bouncy() -> Self {
        Self {
            damping: 12.0,
            mass: 0.8,
            stiffness: 180.0,
        }
    }

    /// Check that every parameter is finite and positive.
    pub fn validate(&self) -> ReelResult<()> {
        for (name, v) in [
            ("damping", self.damping),
            ("mass", self.mass),
            ("stiffness", self.stiffness),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ReelError::validation(format!(
                    "spring {name} must be finite and > 0 (got {v})"
                )));
            }
        }
        Ok(())
    }

    /// Undamped angular frequency `sqrt(k/m)` in rad/s.
    fn omega0(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio `c / (2 * sqrt(k * m))`.
    fn zeta(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Decay rate of the displacement envelope, in 1/s.
    fn decay_rate(&self) -> f64 {
        let zeta = self.zeta();
        if zeta < 1.0 {
            zeta * self.omega0()
        } else {
            self.omega0()
        }
    }
}

/// Spring progress after `elapsed_frames` frames.
///
/// Pure closed-form evaluation: no persisted state, so frame N sampled twice
/// is bit-identical and frames may be evaluated in any order. Negative
/// `elapsed_frames` means the entrance has not started and reports 0.
///
/// Damping ratios at or above 1 all use the critically-damped solution, the
/// convention of the animation solver this matches: cranking `damping` up
/// makes the motion smoother, never slower.
pub fn spring(elapsed_frames: f64, fps: Fps, cfg: &SpringConfig) -> f64 {
    if !(elapsed_frames >= 0.0) {
        return 0.0;
    }

    let t = fps.frames_to_secs(elapsed_frames);
    let w0 = cfg.omega0();
    let zeta = cfg.zeta();

    // Past the settling time the analytic tail is smaller than float noise;
    // clamp to exactly 1 so long-held elements do not shimmer.
    if (-cfg.decay_rate() * t).exp() < SETTLE_ENVELOPE {
        return 1.0;
    }

    let displacement = if zeta < 1.0 {
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * w0 * t).exp();
        envelope * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
    } else {
        (-w0 * t).exp() * (1.0 + w0 * t)
    };

    1.0 - displacement
}

/// Number of frames after which [`spring`] reports exactly 1.0.
pub fn settling_frames(fps: Fps, cfg: &SpringConfig) -> u64 {
    let t = -SETTLE_ENVELOPE.ln() / cfg.decay_rate();
    (t * fps.as_f64()).ceil() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fps30() -> Fps {
        Fps::new(30).unwrap()
    }

    #[test]
    fn negative_elapsed_reports_zero() {
        for cfg in [
            SpringConfig::default(),
            SpringConfig::smooth(),
            SpringConfig::bouncy(),
        ] {
            assert_eq!(spring(-1.0, fps30(), &cfg), 0.0);
            assert_eq!(spring(-0.001, fps30(), &cfg), 0.0);
        }
    }

    #[test]
    fn starts_at_zero_and_settles_at_one() {
        let cfg = SpringConfig::default();
        assert_eq!(spring(0.0, fps30(), &cfg), 0.0);
        for frame in [90, 120, 500, 100_000] {
            let v = spring(frame as f64, fps30(), &cfg);
            assert!((v - 1.0).abs() < 1e-3, "frame {frame} -> {v}");
        }
        assert_eq!(spring(100_000.0, fps30(), &cfg), 1.0);
    }

    #[test]
    fn default_config_overshoots() {
        // zeta = 0.5, clearly under-damped.
        let cfg = SpringConfig::default();
        let max = (0..120)
            .map(|f| spring(f as f64, fps30(), &cfg))
            .fold(f64::MIN, f64::max);
        assert!(max > 1.0);
    }

    #[test]
    fn smooth_config_is_monotone_and_quick() {
        let cfg = SpringConfig::smooth();
        let mut prev = -1.0;
        for f in 0..240 {
            let v = spring(f as f64, fps30(), &cfg);
            assert!(v >= prev, "dip at frame {f}");
            assert!(v <= 1.0 + 1e-12);
            prev = v;
        }
        // Smooth entrances finish well inside a scene.
        assert!(spring(45.0, fps30(), &cfg) > 0.99);
    }

    #[test]
    fn higher_damping_never_slows_settling() {
        let heavy = SpringConfig {
            damping: 500.0,
            ..SpringConfig::default()
        };
        assert_eq!(
            settling_frames(fps30(), &heavy),
            settling_frames(fps30(), &SpringConfig::smooth())
        );
    }

    #[test]
    fn evaluation_is_bit_identical() {
        let cfg = SpringConfig::bouncy();
        for f in [0.0, 3.5, 17.0, 44.0] {
            let a = spring(f, fps30(), &cfg);
            let b = spring(f, fps30(), &cfg);
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn settling_threshold_is_honored() {
        for cfg in [
            SpringConfig::default(),
            SpringConfig::smooth(),
            SpringConfig::bouncy(),
        ] {
            let settle = settling_frames(fps30(), &cfg);
            assert_eq!(spring(settle as f64 + 1.0, fps30(), &cfg), 1.0);
        }
    }

    #[test]
    fn config_validation_rejects_nonpositive() {
        assert!(SpringConfig::new(0.0, 1.0, 100.0).is_err());
        assert!(SpringConfig::new(10.0, -1.0, 100.0).is_err());
        assert!(SpringConfig::new(10.0, 1.0, f64::NAN).is_err());
        assert!(SpringConfig::default().validate().is_ok());
    }
}
