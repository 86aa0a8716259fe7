use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor), which
/// folds everything that happened during a frame into one
/// [`InputSnapshot`](super::InputSnapshot).
///
/// # Example
///
/// ```
/// use tactical_camera::input::{InputEvent, InputProcessor};
///
/// let mut input = InputProcessor::default();
/// input.handle_event(InputEvent::Key { key: "KeyW".into(), pressed: true });
/// let snapshot = input.snapshot(1.0 / 60.0, glam::Vec2::new(800.0, 600.0));
/// assert_eq!(snapshot.move_forward, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to an absolute position (top-left origin).
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Cursor left the window.
    CursorLeft,
    /// Cursor entered the window.
    CursorEntered,
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Raw relative mouse motion, independent of the cursor (keeps
    /// arriving while the cursor is locked).
    MouseMotion {
        /// Horizontal motion in pixels, positive to the right.
        dx: f32,
        /// Vertical motion in pixels, positive downward.
        dy: f32,
    },
    /// Scroll wheel, in lines (positive = away from the user).
    Scroll {
        /// Scroll amount.
        delta: f32,
    },
    /// Key pressed or released.
    Key {
        /// Physical key in `winit::keyboard::KeyCode` debug format
        /// (`"KeyW"`, `"ShiftLeft"`, `"Escape"`).
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}
