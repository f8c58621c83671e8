//! Easing curves

/// Acceleration curve applied to linear progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    /// Constant speed throughout
    #[default]
    Linear,
    /// Start fast, decelerate
    QuadOut,
    /// Slow at both ends (sinusoidal)
    SineInOut,
    /// Overshoot the end and settle with decaying bounces
    BounceOut,
}

impl Ease {
    /// Apply the curve to a progress value (clamped to 0.0..=1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::SineInOut => -0.5 * ((std::f32::consts::PI * t).cos() - 1.0),
            Ease::BounceOut => bounce_out(t),
        }
    }
}

/// Standard four-segment bounce (Penner)
fn bounce_out(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;

    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 4] = [Ease::Linear, Ease::QuadOut, Ease::SineInOut, Ease::BounceOut];

    #[test]
    fn test_endpoints() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-5, "{:?} at 0", ease);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-5, "{:?} at 1", ease);
        }
    }

    #[test]
    fn test_input_is_clamped() {
        for ease in ALL {
            assert_eq!(ease.apply(-3.0), ease.apply(0.0));
            assert_eq!(ease.apply(7.0), ease.apply(1.0));
        }
    }

    #[test]
    fn test_sine_in_out_midpoint() {
        assert!((Ease::SineInOut.apply(0.5) - 0.5).abs() < 1e-5);
        // Slow start
        assert!(Ease::SineInOut.apply(0.1) < 0.1);
    }

    #[test]
    fn test_bounce_stays_in_range() {
        for i in 0..=100 {
            let v = Ease::BounceOut.apply(i as f32 / 100.0);
            assert!((0.0..=1.0 + 1e-5).contains(&v));
        }
    }
}
