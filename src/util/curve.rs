//! Designer-tunable response curves.
//!
//! A [`ResponseCurve`] maps a normalized input `t` onto an output value.
//! The engine uses them for fade-out shapes and for height-dependent
//! transitions (speed, tilt range, field of view).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::easing::EasingFunction;

/// A single `(time, value)` control point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Keyframe {
    /// Input position of the key.
    pub time: f32,
    /// Output value at that position.
    pub value: f32,
}

impl Keyframe {
    /// Key at `time` with `value`.
    #[must_use]
    pub const fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

/// Piecewise response curve.
///
/// TOML presets write either a keyframe list or an easing preset:
///
/// ```toml
/// [movement.fade_curve]
/// keyframes = [{ time = 0.0, value = 1.0 }, { time = 1.0, value = 0.0 }]
///
/// [tilt.transition.eased]
/// easing = "smooth_step"
/// start = 0.0
/// end = 1.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCurve {
    /// Linear interpolation between keyframes sorted by time. Inputs
    /// outside the key span hold the first/last value.
    Keyframes(Vec<Keyframe>),
    /// Easing preset rescaled to go from `start` to `end` over `[0, 1]`.
    Eased {
        /// Shape of the transition.
        easing: EasingFunction,
        /// Output at `t = 0`.
        start: f32,
        /// Output at `t = 1`.
        end: f32,
    },
}

impl ResponseCurve {
    /// Straight line from `(0, start)` to `(1, end)`.
    #[must_use]
    pub fn linear(start: f32, end: f32) -> Self {
        Self::Keyframes(vec![Keyframe::new(0.0, start), Keyframe::new(1.0, end)])
    }

    /// Curve through the given keys; they are sorted by time.
    #[must_use]
    pub fn from_keys(mut keys: Vec<Keyframe>) -> Self {
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self::Keyframes(keys)
    }

    /// Constant output.
    #[must_use]
    pub fn constant(value: f32) -> Self {
        Self::Keyframes(vec![Keyframe::new(0.0, value)])
    }

    /// Sort keyframes by time. Deserialized curves may arrive unsorted.
    pub fn sort_keys(&mut self) {
        if let Self::Keyframes(keys) = self {
            keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        }
    }

    /// Evaluate the curve at `t`.
    ///
    /// An empty keyframe list evaluates to 0.
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            Self::Keyframes(keys) => evaluate_keys(keys, t),
            Self::Eased { easing, start, end } => {
                start + (end - start) * easing.evaluate(t)
            }
        }
    }
}

impl Default for ResponseCurve {
    fn default() -> Self {
        Self::linear(0.0, 1.0)
    }
}

fn evaluate_keys(keys: &[Keyframe], t: f32) -> f32 {
    let (Some(first), Some(last)) = (keys.first(), keys.last()) else {
        return 0.0;
    };
    if t <= first.time {
        return first.value;
    }
    if t >= last.time {
        return last.value;
    }

    for pair in keys.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.time {
            let span = b.time - a.time;
            if span <= f32::EPSILON {
                return b.value;
            }
            let local = (t - a.time) / span;
            return a.value + (b.value - a.value) * local;
        }
    }
    last.value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_fade_out_goes_from_one_to_zero() {
        let curve = ResponseCurve::linear(1.0, 0.0);
        assert_eq!(curve.evaluate(0.0), 1.0);
        assert!((curve.evaluate(0.25) - 0.75).abs() < 1e-6);
        assert_eq!(curve.evaluate(1.0), 0.0);
    }

    #[test]
    fn holds_end_values_outside_key_span() {
        let curve = ResponseCurve::from_keys(vec![
            Keyframe::new(0.2, 3.0),
            Keyframe::new(0.8, 5.0),
        ]);
        assert_eq!(curve.evaluate(-1.0), 3.0);
        assert_eq!(curve.evaluate(0.0), 3.0);
        assert_eq!(curve.evaluate(2.0), 5.0);
        assert!((curve.evaluate(0.5) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn from_keys_sorts_by_time() {
        let curve = ResponseCurve::from_keys(vec![
            Keyframe::new(1.0, 10.0),
            Keyframe::new(0.0, 0.0),
            Keyframe::new(0.5, 2.0),
        ]);
        assert!((curve.evaluate(0.25) - 1.0).abs() < 1e-6);
        assert!((curve.evaluate(0.75) - 6.0).abs() < 1e-6);
    }

    #[test]
    fn empty_and_constant_curves() {
        assert_eq!(ResponseCurve::Keyframes(Vec::new()).evaluate(0.5), 0.0);
        assert_eq!(ResponseCurve::constant(0.3).evaluate(0.9), 0.3);
    }

    #[test]
    fn eased_curve_rescales_output() {
        let curve = ResponseCurve::Eased {
            easing: EasingFunction::SmoothStep,
            start: 10.0,
            end: 20.0,
        };
        assert_eq!(curve.evaluate(0.0), 10.0);
        assert_eq!(curve.evaluate(0.5), 15.0);
        assert_eq!(curve.evaluate(1.0), 20.0);
    }

    #[test]
    fn round_trips_through_toml() {
        #[derive(Serialize, Deserialize, PartialEq, Debug)]
        struct Holder {
            curve: ResponseCurve,
        }
        let holder = Holder {
            curve: ResponseCurve::linear(1.0, 0.0),
        };
        let text = toml::to_string_pretty(&holder).unwrap();
        let parsed: Holder = toml::from_str(&text).unwrap();
        assert_eq!(parsed, holder);
    }
}
