//! Input handling: the provider contract the engine reads every tick, and
//! an event-driven processor that implements it from raw window events.

/// Platform-agnostic input events.
pub mod event;
/// Bindable camera actions.
pub mod keyboard;
/// Multi-click state machine.
pub(crate) mod mouse;
/// Folds raw events into per-frame snapshots.
pub mod processor;

pub use event::{InputEvent, MouseButton};
use glam::Vec2;
pub use keyboard::CameraAction;
pub use processor::InputProcessor;

/// Per-frame input signals consumed by the camera engine.
///
/// Axis values are expected in `[-1, 1]` (zoom may exceed it; the engine
/// clamps). Action flags other than orbit are edges: true only on the
/// frame the action happened.
pub trait InputProvider {
    /// Move to the point under the cursor.
    fn move_to_target(&self) -> bool;
    /// Abort a running move-to-target.
    fn cancel_move_to_target(&self) -> bool;
    /// Orbit instead of pivoting while rotating (held).
    fn orbit_around_target(&self) -> bool;
    /// Forward (+) / backward (-) movement.
    fn move_forward(&self) -> f32;
    /// Right (+) / left (-) movement.
    fn move_sideways(&self) -> f32;
    /// Up (+) / down (-) movement.
    fn move_up(&self) -> f32;
    /// Tilt down (+) / up (-).
    fn tilt_delta(&self) -> f32;
    /// Turn right (+) / left (-).
    fn rotation_delta(&self) -> f32;
    /// Cursor in pixels, top-left origin.
    fn cursor_position(&self) -> Vec2;
}

/// Plain-data [`InputProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    /// See [`InputProvider::move_to_target`].
    pub move_to_target: bool,
    /// See [`InputProvider::cancel_move_to_target`].
    pub cancel_move_to_target: bool,
    /// See [`InputProvider::orbit_around_target`].
    pub orbit_around_target: bool,
    /// See [`InputProvider::move_forward`].
    pub move_forward: f32,
    /// See [`InputProvider::move_sideways`].
    pub move_sideways: f32,
    /// See [`InputProvider::move_up`].
    pub move_up: f32,
    /// See [`InputProvider::tilt_delta`].
    pub tilt_delta: f32,
    /// See [`InputProvider::rotation_delta`].
    pub rotation_delta: f32,
    /// See [`InputProvider::cursor_position`].
    pub cursor_position: Vec2,
}

impl InputProvider for InputSnapshot {
    fn move_to_target(&self) -> bool {
        self.move_to_target
    }

    fn cancel_move_to_target(&self) -> bool {
        self.cancel_move_to_target
    }

    fn orbit_around_target(&self) -> bool {
        self.orbit_around_target
    }

    fn move_forward(&self) -> f32 {
        self.move_forward
    }

    fn move_sideways(&self) -> f32 {
        self.move_sideways
    }

    fn move_up(&self) -> f32 {
        self.move_up
    }

    fn tilt_delta(&self) -> f32 {
        self.tilt_delta
    }

    fn rotation_delta(&self) -> f32 {
        self.rotation_delta
    }

    fn cursor_position(&self) -> Vec2 {
        self.cursor_position
    }
}
