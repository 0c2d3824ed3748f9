//! Easing curves applied to transition progress.
//!
//! Every curve maps raw progress in `[0, 1]` to eased progress in `[0, 1]`
//! and is cheap enough to evaluate for every property on every frame.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for transition curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    EaseIn,
    /// Quadratic ease-out (fast start, slow end).
    EaseOut,
    /// Quadratic ease-in for the first half, ease-out for the second.
    EaseInOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control point.
        c1: f32,
        /// Second control point.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default curve: a soft ease-out, matching platform view transitions.
    pub const DEFAULT: Self = Self::CubicHermite { c1: 0.33, c2: 1.0 };

    /// Evaluate the curve at `t`, clamped to `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let omt = 1.0 - t;
                    1.0 - 2.0 * omt * omt
                }
            }
            Self::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_curve_hits_endpoints() {
        let curves = [
            EasingFunction::Linear,
            EasingFunction::EaseIn,
            EasingFunction::EaseOut,
            EasingFunction::EaseInOut,
            EasingFunction::DEFAULT,
        ];
        for curve in curves {
            assert!(curve.evaluate(0.0).abs() < 1e-6, "{curve:?} at 0");
            assert!((curve.evaluate(1.0) - 1.0).abs() < 1e-6, "{curve:?} at 1");
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric_at_midpoint() {
        assert_eq!(EasingFunction::EaseInOut.evaluate(0.5), 0.5);
        assert_eq!(EasingFunction::EaseInOut.evaluate(0.25), 0.125);
    }

    #[test]
    fn test_default_curve_eases_out() {
        let at_quarter = EasingFunction::default().evaluate(0.25);
        assert!(at_quarter > 0.25, "expected ease-out, got {at_quarter}");
    }

    #[test]
    fn test_input_clamping() {
        assert_eq!(EasingFunction::Linear.evaluate(-0.5), 0.0);
        assert_eq!(EasingFunction::Linear.evaluate(1.5), 1.0);
        assert_eq!(EasingFunction::EaseOut.evaluate(2.0), 1.0);
    }
}
