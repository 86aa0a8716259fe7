//! Easing functions for camera response curves.
//!
//! Each variant maps `t` in `[0, 1]` onto `[0, 1]`. They back the
//! [`ResponseCurve::Eased`](super::curve::ResponseCurve::Eased) preset and
//! the move-to-target interpolation profile.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Square root ease-out (fast start, gradual slow).
    SqrtOut,
    /// Hermite smoothstep `3t² - 2t³` (zero slope at both ends).
    SmoothStep,
    /// Cubic Bézier easing through `0, c1, c2, 1`.
    CubicHermite {
        /// First control point.
        c1: f32,
        /// Second control point.
        c2: f32,
    },
}

impl EasingFunction {
    /// Eased progress at `t`, which is clamped to `[0, 1]` first.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let rest = 1.0 - t;

        match *self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => 1.0 - rest * rest,
            Self::SqrtOut => t.sqrt(),
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            // c0 = 0 and c3 = 1 drop out of the Bernstein form
            Self::CubicHermite { c1, c2 } => {
                3.0 * t * rest * (c1 * rest + c2 * t) + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    /// Smoothstep, the profile of a move-to-target glide.
    fn default() -> Self {
        Self::SmoothStep
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_smoothstep() {
        assert_eq!(EasingFunction::default(), EasingFunction::SmoothStep);
    }

    #[test]
    fn test_smoothstep_is_symmetric() {
        let s = EasingFunction::SmoothStep;
        assert_eq!(s.evaluate(0.0), 0.0);
        assert_eq!(s.evaluate(0.5), 0.5);
        assert_eq!(s.evaluate(1.0), 1.0);
        let a = s.evaluate(0.2);
        let b = s.evaluate(0.8);
        assert!((a + b - 1.0).abs() < 1e-6);
        // Slow start
        assert!(a < 0.2);
    }

    #[test]
    fn test_cubic_hermite_ease_out_shape() {
        let hermite = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
        assert_eq!(hermite.evaluate(0.0), 0.0);
        assert!((hermite.evaluate(1.0) - 1.0).abs() < 1e-6);
        assert!(hermite.evaluate(0.25) > 0.25);
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.5), 0.75);
        assert_eq!(quad_out.evaluate(2.0), 1.0);
    }

    #[test]
    fn test_quadratic_in_and_sqrt_out() {
        assert_eq!(EasingFunction::QuadraticIn.evaluate(0.5), 0.25);
        assert!((EasingFunction::SqrtOut.evaluate(0.25) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_serializes_as_snake_case() {
        let json = serde_json::to_string(&EasingFunction::SmoothStep).unwrap();
        assert_eq!(json, "\"smooth_step\"");
    }
}
