use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::KeybindingOptions;
use crate::input::MouseButton;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[allow(clippy::struct_excessive_bools)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Mouse and keyboard mapping for the bundled input processor.
pub struct InputOptions {
    /// Key bindings for movement, orbit and cancel.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Button that moves the camera to the clicked point on double click.
    #[schemars(skip)]
    pub move_to_target_button: MouseButton,
    /// Button held to rotate and tilt with the mouse.
    #[schemars(skip)]
    pub rotation_button: MouseButton,
    /// Axis units per pixel of mouse motion for rotation and tilt.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub mouse_sensitivity: f32,
    /// Longest gap between the clicks of a double click, in seconds.
    #[schemars(title = "Double Click Time", range(min = 0.1, max = 1.0), extend("step" = 0.05))]
    pub double_click_time: f32,
    /// Width of the screen edge band that moves the camera, as a fraction
    /// of the screen size. Zero disables edge movement.
    #[schemars(title = "Screen Border Trigger", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub screen_border_trigger: f32,
    /// Keep edge movement going while the cursor is outside the window.
    #[schemars(title = "Trigger Off Screen")]
    pub trigger_off_screen: bool,
    /// Multiplier applied to scroll deltas for zooming.
    #[schemars(title = "Scroll Sensitivity", range(min = 0.0, max = 500.0), extend("step" = 5.0))]
    pub scroll_sensitivity: f32,
    /// Invert vertical mouse motion for tilt.
    #[schemars(title = "Invert Tilt")]
    pub invert_tilt: bool,
    /// Invert horizontal mouse motion for rotation.
    #[schemars(title = "Invert Rotation")]
    pub invert_rotation: bool,
    /// Invert the scroll direction for zoom.
    #[schemars(title = "Invert Zoom")]
    pub invert_zoom: bool,
    /// Rotate with every mouse motion, without holding the rotation
    /// button. Hosts typically lock and hide the cursor in this mode.
    #[schemars(title = "Always Rotating")]
    pub always_rotating: bool,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            keybindings: KeybindingOptions::default(),
            move_to_target_button: MouseButton::Left,
            rotation_button: MouseButton::Right,
            mouse_sensitivity: 0.1,
            double_click_time: 0.4,
            screen_border_trigger: 0.0,
            trigger_off_screen: false,
            scroll_sensitivity: 100.0,
            invert_tilt: true,
            invert_rotation: false,
            invert_zoom: true,
            always_rotating: false,
        }
    }
}
