use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::curve::ResponseCurve;
use crate::util::value_range::ValueRange;

/// Tilt limits never pass straight up or straight down.
pub const TILT_LIMIT: f32 = 90.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Tilt", inline)]
#[serde(default)]
/// Height-dependent tilt limits, in degrees below the horizon.
pub struct TiltSettings {
    /// Tilt range at the lowest operating height.
    #[schemars(title = "Range (Low)")]
    pub range_low: ValueRange,
    /// Tilt range at the highest operating height.
    #[schemars(title = "Range (High)")]
    pub range_high: ValueRange,
    /// Maps relative height onto a blend from `range_low` to `range_high`.
    #[schemars(skip)]
    pub transition: ResponseCurve,
}

impl TiltSettings {
    /// Clamp both ranges into `[-90, 90]`.
    pub fn clamp_ranges(&mut self) {
        for range in [&mut self.range_low, &mut self.range_high] {
            range.set(
                range.min().clamp(-TILT_LIMIT, TILT_LIMIT),
                range.max().clamp(-TILT_LIMIT, TILT_LIMIT),
            );
        }
    }
}

impl Default for TiltSettings {
    fn default() -> Self {
        Self {
            range_low: ValueRange::new(-10.0, 30.0),
            range_high: ValueRange::new(10.0, 75.0),
            transition: ResponseCurve::linear(0.0, 1.0),
        }
    }
}
