//! Closed numeric interval with interpolation helpers.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// A `[min, max]` interval of `f32` values.
///
/// Construction, [`set`](Self::set) and deserialization all sort their
/// arguments, so `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct ValueRange {
    min: f32,
    max: f32,
}

impl ValueRange {
    /// Interval spanning `a` and `b`, in either order.
    #[must_use]
    pub fn new(a: f32, b: f32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Lower bound.
    #[inline]
    #[must_use]
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound.
    #[inline]
    #[must_use]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Width of the interval (never negative).
    #[inline]
    #[must_use]
    pub fn range(&self) -> f32 {
        self.max - self.min
    }

    /// Replace both bounds, sorting them.
    pub fn set(&mut self, a: f32, b: f32) {
        *self = Self::new(a, b);
    }

    /// Point at fraction `t` from `min` to `max`. `t` is not clamped.
    #[inline]
    #[must_use]
    pub fn lerp(&self, t: f32) -> f32 {
        self.min + (self.max - self.min) * t
    }

    /// Fraction of `value` between `min` and `max`.
    ///
    /// Values outside the interval extrapolate linearly (below 0 or above
    /// 1). A zero-width interval yields 0.
    #[inline]
    #[must_use]
    pub fn inverse_lerp(&self, value: f32) -> f32 {
        let width = self.max - self.min;
        if width.abs() <= f32::EPSILON {
            0.0
        } else {
            (value - self.min) / width
        }
    }

    /// Clamp `value` into the interval.
    #[inline]
    #[must_use]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Whether `value` lies inside the interval, bounds included.
    #[inline]
    #[must_use]
    pub fn in_range(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Interpolate both bounds independently from `a` to `b`.
    #[must_use]
    pub fn lerp_ranges(a: Self, b: Self, t: f32) -> Self {
        Self::new(
            a.min + (b.min - a.min) * t,
            a.max + (b.max - a.max) * t,
        )
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Min: {:.3}, Max: {:.3}", self.min, self.max)
    }
}

impl<'de> Deserialize<'de> for ValueRange {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            min: f32,
            max: f32,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Self::new(raw.min, raw.max))
    }
}
