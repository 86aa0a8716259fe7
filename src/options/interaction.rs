use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::world::LayerMask;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "World Interaction", inline)]
#[serde(default)]
/// How the camera queries world geometry.
pub struct InteractionSettings {
    /// Layers considered for ground, ceiling, orbit and move-to-target
    /// rays.
    #[schemars(skip)]
    pub layer_mask: LayerMask,
    /// Maximum ray length for ground, ceiling and orbit queries.
    #[schemars(title = "Ray Distance", range(min = 0.0, max = 10000.0), extend("step" = 10.0))]
    pub distance: f32,
    /// Clearance kept between the camera and ground or ceiling.
    #[schemars(title = "Bubble Radius", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub bubble_radius: f32,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            layer_mask: LayerMask::default(),
            distance: 1000.0,
            bubble_radius: 1.0,
        }
    }
}
