//! Converts raw platform events into per-frame input snapshots.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! held keys, rotation drag, multi-click timing) and the input options.
//! Feed it every window event as it arrives, then call
//! [`snapshot`](InputProcessor::snapshot) once per frame before ticking
//! the camera.

use std::collections::HashSet;

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::keyboard::CameraAction;
use super::mouse::ClickTracker;
use super::InputSnapshot;
use crate::options::InputOptions;

/// Folds [`InputEvent`]s into [`InputSnapshot`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// input_processor.handle_event(event);
///
/// // Once per frame:
/// let time = clock.tick();
/// let snapshot = input_processor.snapshot(time.unscaled_delta, viewport);
/// let events = camera.tick(Some(&snapshot), &world, time);
/// ```
#[allow(clippy::struct_excessive_bools)]
pub struct InputProcessor {
    options: InputOptions,
    clicks: ClickTracker,
    /// Seconds of snapshots taken so far; timestamps clicks.
    clock: f32,
    cursor: Vec2,
    cursor_inside: bool,
    held: HashSet<CameraAction>,
    rotation_held: bool,
    /// Drop the first motion after a rotation press (cursor lock warp).
    skip_next_motion: bool,
    // Accumulated since the last snapshot
    motion: Vec2,
    scroll: f32,
    cancel_pressed: bool,
    move_to_target: bool,
}

impl InputProcessor {
    /// Create a new processor with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(InputOptions::default())
    }

    /// Create a processor with custom options.
    #[must_use]
    pub fn with_options(options: InputOptions) -> Self {
        Self {
            options,
            clicks: ClickTracker::default(),
            clock: 0.0,
            cursor: Vec2::ZERO,
            cursor_inside: true,
            held: HashSet::new(),
            rotation_held: false,
            skip_next_motion: false,
            motion: Vec2::ZERO,
            scroll: 0.0,
            cancel_pressed: false,
            move_to_target: false,
        }
    }

    /// Read-only access to the options.
    #[must_use]
    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    /// Replace the options. Held keys and buttons are released.
    pub fn set_options(&mut self, options: InputOptions) {
        self.options = options;
        self.release_all();
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn cursor_position(&self) -> Vec2 {
        self.cursor
    }

    /// Whether mouse motion currently rotates the camera.
    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.options.always_rotating || self.rotation_held
    }

    /// Forget every held key and button, e.g. when the window loses
    /// focus.
    pub fn release_all(&mut self) {
        self.held.clear();
        self.rotation_held = false;
        self.skip_next_motion = false;
        self.clicks.reset();
    }

    /// Process a raw input event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Vec2::new(x, y);
            }
            InputEvent::CursorLeft => self.cursor_inside = false,
            InputEvent::CursorEntered => self.cursor_inside = true,
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed);
            }
            InputEvent::MouseMotion { dx, dy } => self.handle_motion(dx, dy),
            InputEvent::Scroll { delta } => self.scroll += delta,
            InputEvent::Key { key, pressed } => self.handle_key(&key, pressed),
        }
    }

    fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if button == self.options.rotation_button {
            self.rotation_held = pressed;
            // Cursor locking can report a spike on the first motion
            self.skip_next_motion = pressed;
        }

        if pressed && button == self.options.move_to_target_button {
            let count = self.clicks.press(
                button,
                self.clock,
                self.options.double_click_time,
            );
            if count == 2 {
                self.move_to_target = true;
            }
        }
    }

    fn handle_motion(&mut self, dx: f32, dy: f32) {
        if !self.is_rotating() {
            return;
        }
        if self.skip_next_motion && !self.options.always_rotating {
            self.skip_next_motion = false;
            return;
        }
        self.motion += Vec2::new(dx, dy);
    }

    fn handle_key(&mut self, key: &str, pressed: bool) {
        let Some(action) = self.options.keybindings.lookup(key) else {
            return;
        };
        if pressed {
            if action == CameraAction::Cancel && !self.held.contains(&action)
            {
                self.cancel_pressed = true;
            }
            let _ = self.held.insert(action);
        } else {
            let _ = self.held.remove(&action);
        }
    }

    fn axis(&self, positive: CameraAction, negative: CameraAction) -> f32 {
        let mut value = 0.0;
        if self.held.contains(&positive) {
            value += 1.0;
        }
        if self.held.contains(&negative) {
            value -= 1.0;
        }
        value
    }

    /// Edge-scroll contribution as `(sideways, forward)`.
    fn screen_border(&self, viewport: Vec2) -> Vec2 {
        let trigger = self.options.screen_border_trigger;
        if trigger <= 0.0 || viewport.x <= 0.0 || viewport.y <= 0.0 {
            return Vec2::ZERO;
        }
        if !self.cursor_inside && !self.options.trigger_off_screen {
            return Vec2::ZERO;
        }

        let on_screen = |value: f32, extent: f32| {
            self.options.trigger_off_screen || (0.0..=extent).contains(&value)
        };
        let edge = |value: f32, extent: f32| {
            let mut out = 0.0;
            if value <= extent * trigger && on_screen(value, extent) {
                out -= 1.0;
            }
            if value >= extent * (1.0 - trigger) && on_screen(value, extent) {
                out += 1.0;
            }
            out
        };
        // Screen y grows downward; the top edge pushes forward
        Vec2::new(
            edge(self.cursor.x, viewport.x),
            -edge(self.cursor.y, viewport.y),
        )
    }

    /// Build the snapshot for a frame lasting `dt` seconds on a
    /// `viewport`-sized surface, and start accumulating the next one.
    pub fn snapshot(&mut self, dt: f32, viewport: Vec2) -> InputSnapshot {
        let border = self.screen_border(viewport);
        let forward = (self
            .axis(CameraAction::MoveForward, CameraAction::MoveBackward)
            + border.y)
            .clamp(-1.0, 1.0);
        let sideways = (self
            .axis(CameraAction::MoveRight, CameraAction::MoveLeft)
            + border.x)
            .clamp(-1.0, 1.0);

        let mut move_up = self.scroll * self.options.scroll_sensitivity;
        if self.options.invert_zoom {
            move_up = -move_up;
        }

        // Mouse y grows downward; moving the mouse up is a positive axis
        let axes = Vec2::new(self.motion.x, -self.motion.y)
            * self.options.mouse_sensitivity;
        let mut rotation = axes.x.clamp(-1.0, 1.0);
        let mut tilt = axes.y.clamp(-1.0, 1.0);
        if self.options.invert_rotation {
            rotation = -rotation;
        }
        if self.options.invert_tilt {
            tilt = -tilt;
        }

        let snapshot = InputSnapshot {
            move_to_target: self.move_to_target,
            cancel_move_to_target: self.cancel_pressed
                || forward != 0.0
                || sideways != 0.0,
            orbit_around_target: self.held.contains(&CameraAction::Orbit),
            move_forward: forward,
            move_sideways: sideways,
            move_up,
            tilt_delta: tilt,
            rotation_delta: rotation,
            cursor_position: self.cursor,
        };

        self.motion = Vec2::ZERO;
        self.scroll = 0.0;
        self.cancel_pressed = false;
        self.move_to_target = false;
        self.clock += dt.max(0.0);
        snapshot
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
