use serde::{Deserialize, Serialize};

/// Camera actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [input.keybindings.bindings]
/// move_forward = "KeyW"
/// orbit = "ShiftLeft"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraAction {
    /// Push the camera forward while held.
    MoveForward,
    /// Push the camera backward while held.
    MoveBackward,
    /// Strafe left while held.
    MoveLeft,
    /// Strafe right while held.
    MoveRight,
    /// Orbit around the looked-at point instead of pivoting while held.
    Orbit,
    /// Abort a running move-to-target on press.
    Cancel,
}
