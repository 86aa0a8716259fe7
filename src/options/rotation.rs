use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::curve::ResponseCurve;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Rotation", inline)]
#[serde(default)]
/// Rotation and tilt speed parameters.
pub struct RotationSettings {
    /// Maximum rotation and tilt speed in degrees per second.
    #[schemars(title = "Max Speed", range(min = 0.0, max = 720.0), extend("step" = 5.0))]
    pub max_speed: f32,
    /// Shape of the rotation fade-out over its window.
    #[schemars(skip)]
    pub fade_curve: ResponseCurve,
    /// Seconds that rotation lingers after input stops.
    #[schemars(title = "Fade Time", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub fade_time: f32,
    /// Pivot in place when an orbit finds nothing to orbit around.
    #[schemars(title = "Pivot on Failed Orbit")]
    pub allow_pivot_on_failed_orbit: bool,
}

impl Default for RotationSettings {
    fn default() -> Self {
        Self {
            max_speed: 180.0,
            fade_curve: ResponseCurve::linear(1.0, 0.0),
            fade_time: 0.2,
            allow_pivot_on_failed_orbit: true,
        }
    }
}
