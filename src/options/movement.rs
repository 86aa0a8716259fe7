use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::curve::ResponseCurve;
use crate::util::value_range::ValueRange;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Movement", inline)]
#[serde(default)]
/// Horizontal and vertical movement parameters.
pub struct MovementSettings {
    /// Maximum speed at the lowest and highest operating height, in units
    /// per second.
    #[schemars(title = "Speed Range")]
    pub speed_range: ValueRange,
    /// Maps relative height onto a position in `speed_range`.
    #[schemars(skip)]
    pub speed_transition: ResponseCurve,
    /// Shape of the movement fade-out over its window.
    #[schemars(skip)]
    pub fade_curve: ResponseCurve,
    /// Seconds that movement lingers after input stops.
    #[schemars(title = "Fade Time", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub fade_time: f32,
    /// Seconds a move-to-target animation takes.
    #[schemars(title = "Move-to-Target Time", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub move_to_target_smoothing_time: f32,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            speed_range: ValueRange::new(5.0, 20.0),
            speed_transition: ResponseCurve::linear(0.0, 1.0),
            fade_curve: ResponseCurve::linear(1.0, 0.0),
            fade_time: 0.2,
            move_to_target_smoothing_time: 0.2,
        }
    }
}
