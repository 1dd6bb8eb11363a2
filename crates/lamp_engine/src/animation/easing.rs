//! Easing curves
//!
//! Maps linear progress in `[0, 1]` onto shaped progress. Every curve hits
//! exactly 0 at the start and exactly 1 at the end so tweens land on their
//! goal value.

use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Default elastic amplitude
pub const DEFAULT_ELASTIC_AMPLITUDE: f32 = 1.0;

/// Default elastic oscillation period (in units of progress)
pub const DEFAULT_ELASTIC_PERIOD: f32 = 0.3;

/// Named easing curve
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Identity curve
    #[default]
    Linear,
    /// Quadratic acceleration
    InQuad,
    /// Quadratic deceleration
    OutQuad,
    /// Quadratic acceleration then deceleration
    InOutQuad,
    /// Cubic deceleration
    OutCubic,
    /// Quintic deceleration
    OutQuint,
    /// Decaying sine overshoot that settles on the goal
    OutElastic {
        /// Overshoot amplitude, values below 1 are treated as 1
        #[serde(default = "default_amplitude")]
        amplitude: f32,
        /// Oscillation period
        #[serde(default = "default_period")]
        period: f32,
    },
}

const fn default_amplitude() -> f32 {
    DEFAULT_ELASTIC_AMPLITUDE
}

const fn default_period() -> f32 {
    DEFAULT_ELASTIC_PERIOD
}

impl Easing {
    /// Elastic ease-out with the default amplitude and period
    pub const fn ease_out_elastic() -> Self {
        Self::OutElastic {
            amplitude: DEFAULT_ELASTIC_AMPLITUDE,
            period: DEFAULT_ELASTIC_PERIOD,
        }
    }

    /// Quintic ease-out
    pub const fn ease_out_quint() -> Self {
        Self::OutQuint
    }

    /// Evaluate the curve at `t`, clamped to `[0, 1]`
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => t * (2.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::OutQuint => 1.0 - (1.0 - t).powi(5),
            Self::OutElastic { amplitude, period } => out_elastic(t, amplitude, period),
        }
    }
}

fn out_elastic(t: f32, amplitude: f32, period: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let period = if period > 0.0 { period } else { DEFAULT_ELASTIC_PERIOD };
    let (amplitude, shift) = if amplitude < 1.0 {
        (1.0, period / 4.0)
    } else {
        (amplitude, period / TAU * (1.0 / amplitude).asin())
    };
    amplitude * 2f32.powf(-10.0 * t) * ((t - shift) * TAU / period).sin() + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const ALL: [Easing; 7] = [
        Easing::Linear,
        Easing::InQuad,
        Easing::OutQuad,
        Easing::InOutQuad,
        Easing::OutCubic,
        Easing::OutQuint,
        Easing::ease_out_elastic(),
    ];

    #[test]
    fn test_endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert_abs_diff_eq!(easing.apply(1.0), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_input_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-2.0), easing.apply(0.0));
            assert_eq!(easing.apply(3.0), easing.apply(1.0));
        }
    }

    #[test]
    fn test_out_quint_midpoint() {
        assert_abs_diff_eq!(Easing::OutQuint.apply(0.5), 1.0 - 0.5f32.powi(5), epsilon = 1e-6);
    }

    #[test]
    fn test_out_elastic_overshoots() {
        let easing = Easing::ease_out_elastic();
        let peak = (1..100)
            .map(|i| easing.apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "elastic curve should overshoot, peak {peak}");
    }

    #[test]
    fn test_elastic_small_amplitude_is_treated_as_one() {
        let weak = Easing::OutElastic { amplitude: 0.2, period: 0.3 };
        let unit = Easing::OutElastic { amplitude: 1.0, period: 0.3 };
        assert_abs_diff_eq!(weak.apply(0.37), unit.apply(0.37), epsilon = 1e-5);
    }
}
