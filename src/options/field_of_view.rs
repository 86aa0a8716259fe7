use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::curve::ResponseCurve;
use crate::util::value_range::ValueRange;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Field of View", inline)]
#[serde(default)]
/// Height-dependent field of view.
pub struct FieldOfViewSettings {
    /// Drive the field of view from the camera's relative height.
    #[schemars(title = "Dynamic")]
    pub dynamic: bool,
    /// Vertical field of view at the lowest and highest operating height,
    /// in degrees.
    #[schemars(title = "Range")]
    pub range: ValueRange,
    /// Maps relative height onto a position in `range`.
    #[schemars(skip)]
    pub transition: ResponseCurve,
}

impl Default for FieldOfViewSettings {
    fn default() -> Self {
        Self {
            dynamic: true,
            range: ValueRange::new(45.0, 80.0),
            transition: ResponseCurve::linear(0.0, 1.0),
        }
    }
}
