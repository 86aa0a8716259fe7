use glam::{Vec2, Vec3};

use super::core::Camera;
use super::fade::FadeState;
use super::move_to_target::{MoveToTarget, Progress};
use super::ranges::{height_range_at, OperatingRanges};
use crate::bounds::SharedBounds;
use crate::error::CameraError;
use crate::input::InputProvider;
use crate::options::CameraSettings;
use crate::util::frame_clock::FrameTime;
use crate::util::smoothing::TRACKING_SMOOTH_TIME;
use crate::util::value_range::ValueRange;
use crate::world::{Ray, WorldQuery};

/// Notifications produced while ticking the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraEvent {
    /// A move-to-target glide began toward `target`.
    MoveToTargetStarted {
        /// World point under the cursor.
        target: Vec3,
    },
    /// A move-to-target was requested but the cursor hit nothing.
    MoveToTargetFailed,
    /// The glide reached its target.
    MoveToTargetCompleted,
    /// The glide was aborted before reaching its target.
    MoveToTargetCancelled,
}

/// The five fading input axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FadeAxis {
    /// Forward / backward movement.
    Forward,
    /// Left / right movement.
    Sideways,
    /// Up / down movement.
    Up,
    /// Tilt below the horizon.
    Tilt,
    /// Turning about world up.
    Rotate,
}

/// Tactical camera engine.
///
/// Owns a [`Camera`] and moves it every [`tick`](Self::tick) from the
/// signals of an [`InputProvider`], keeping it inside height and tilt ranges
/// derived from the world and, last of all, inside optional
/// [`CameraBounds`](crate::bounds::CameraBounds).
///
/// Nothing happens until settings are bound with
/// [`set_settings`](Self::set_settings).
pub struct TacticalCamera {
    settings: Option<CameraSettings>,
    bounds: Option<SharedBounds>,
    viewport: Vec2,
    enabled: bool,
    needs_init: bool,
    rig: Rig,
}

/// Mutable per-tick state, split from the settings so both can be
/// borrowed at once.
#[derive(Debug, Clone, Default)]
struct Rig {
    camera: Camera,
    fades: AxisFades,
    ranges: OperatingRanges,
    task: Option<MoveToTarget>,
    events: Vec<CameraEvent>,
}

#[derive(Debug, Clone, Default)]
struct AxisFades {
    forward: FadeState,
    sideways: FadeState,
    up: FadeState,
    tilt: FadeState,
    rotate: FadeState,
}

/// Fade values after this tick's input.
#[derive(Debug, Clone, Copy)]
struct AxisValues {
    forward: f32,
    sideways: f32,
    up: f32,
    tilt: f32,
    rotate: f32,
}

/// Everything a tick reads but does not own.
struct Frame<'a> {
    settings: &'a CameraSettings,
    input: &'a dyn InputProvider,
    world: &'a dyn WorldQuery,
    viewport: Vec2,
    /// Step for movement, rotation and fades.
    dt: f32,
    /// Step for damped tracking.
    smoothing_dt: f32,
    smooth_time: f32,
}

impl TacticalCamera {
    /// Wrap `camera`. The engine starts enabled but idle until settings
    /// are bound.
    #[must_use]
    pub fn new(camera: Camera) -> Self {
        Self {
            settings: None,
            bounds: None,
            viewport: Vec2::new(1280.0, 720.0),
            enabled: true,
            needs_init: true,
            rig: Rig {
                camera,
                ..Rig::default()
            },
        }
    }

    /// Bind a new settings value.
    ///
    /// The settings are sanitized, then validated; every fade axis is
    /// reconfigured against them and the operating ranges are rebuilt on
    /// the next tick.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::InvalidFadeTime`] when a fade window is not
    /// positive; the previous settings stay bound.
    pub fn set_settings(
        &mut self,
        mut settings: CameraSettings,
    ) -> Result<(), CameraError> {
        settings.sanitize();
        settings.validate()?;
        let mut fades = AxisFades::default();
        fades.configure(&settings)?;
        self.rig.fades = fades;
        self.settings = Some(settings);
        self.needs_init = true;
        log::debug!("camera settings bound");
        Ok(())
    }

    /// Unbind the settings; ticks no-op until new ones are bound.
    pub fn clear_settings(&mut self) {
        if self.settings.take().is_some() {
            self.rig.fades.reset();
            let _ = self.cancel_move_to_target();
            log::debug!("camera settings cleared");
        }
    }

    /// Restrict the camera's position, or lift the restriction with `None`.
    pub fn set_bounds(&mut self, bounds: Option<SharedBounds>) {
        self.bounds = bounds;
    }

    /// Bounds currently applied after every tick.
    #[must_use]
    pub fn bounds(&self) -> Option<&SharedBounds> {
        self.bounds.as_ref()
    }

    /// Track a new viewport size in physical pixels.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Vec2::new(width as f32, height as f32);
        self.rig.camera.resize(width, height);
    }

    /// Resume ticking; operating ranges are rebuilt on the next tick.
    pub fn enable(&mut self) {
        if !self.enabled {
            log::debug!("camera enabled");
        }
        self.enabled = true;
        self.needs_init = true;
    }

    /// Stop ticking, silencing every fade and cancelling any glide.
    pub fn disable(&mut self) {
        if self.enabled {
            log::debug!("camera disabled");
        }
        self.enabled = false;
        self.rig.fades.reset();
        let _ = self.cancel_move_to_target();
    }

    /// Whether ticks are being processed.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The camera being driven.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.rig.camera
    }

    /// Mutable access for placing the camera by hand. Call
    /// [`enable`](Self::enable) afterwards to rebuild the ranges around the
    /// new pose.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.rig.camera
    }

    /// Bound settings, if any.
    #[must_use]
    pub fn settings(&self) -> Option<&CameraSettings> {
        self.settings.as_ref()
    }

    /// One of the fading input axes.
    #[must_use]
    pub fn fade(&self, axis: FadeAxis) -> &FadeState {
        self.rig.fades.get(axis)
    }

    /// Whether a move-to-target glide is running.
    #[must_use]
    pub fn is_moving_to_focus_point(&self) -> bool {
        self.rig.task.is_some()
    }

    /// The running glide, if any.
    #[must_use]
    pub fn move_to_target_task(&self) -> Option<&MoveToTarget> {
        self.rig.task.as_ref()
    }

    /// Maximum movement speed at the current height; zero without
    /// settings.
    #[must_use]
    pub fn max_movement_speed(&self) -> f32 {
        self.settings.as_ref().map_or(0.0, |settings| {
            self.rig
                .ranges
                .max_movement_speed(settings, self.current_height())
        })
    }

    /// Camera height above the world origin.
    #[must_use]
    pub fn current_height(&self) -> f32 {
        self.rig.camera.position.y
    }

    /// Signed tilt below the horizon, in degrees.
    #[must_use]
    pub fn current_tilt_angle(&self) -> f32 {
        self.rig.camera.tilt_angle()
    }

    /// Heights the camera may currently occupy.
    #[must_use]
    pub fn operating_height_range(&self) -> ValueRange {
        self.rig.ranges.height
    }

    /// Tilts the camera may currently take.
    #[must_use]
    pub fn operating_tilt_range(&self) -> ValueRange {
        self.rig.ranges.tilt
    }

    /// Tilt as a fraction of the operating tilt range.
    #[must_use]
    pub fn tilt_factor(&self) -> f32 {
        self.rig.ranges.tilt_factor
    }

    /// Start gliding toward `target`, replacing any running glide.
    ///
    /// Returns `false` without settings or while disabled. The started
    /// event is reported by the next [`tick`](Self::tick).
    pub fn move_to_target(&mut self, target: Vec3) -> bool {
        let Some(settings) = self.settings.as_ref() else {
            return false;
        };
        if !self.enabled {
            return false;
        }
        self.rig.start_task(settings, target);
        true
    }

    /// Abort the running glide, leaving the camera where it is.
    ///
    /// Returns whether a glide was running; cancelling twice is harmless.
    pub fn cancel_move_to_target(&mut self) -> bool {
        self.rig.cancel_task()
    }

    /// Advance the camera by one frame.
    ///
    /// Without settings or input, or while disabled, the pose is left
    /// alone. Events raised since the previous tick (including those from
    /// [`move_to_target`](Self::move_to_target) and
    /// [`cancel_move_to_target`](Self::cancel_move_to_target)) are returned
    /// in the order they happened.
    pub fn tick(
        &mut self,
        input: Option<&dyn InputProvider>,
        world: &dyn WorldQuery,
        time: FrameTime,
    ) -> Vec<CameraEvent> {
        let Self {
            settings,
            bounds,
            viewport,
            enabled,
            needs_init,
            rig,
        } = self;

        if let (true, Some(settings), Some(input)) =
            (*enabled, settings.as_ref(), input)
        {
            if *needs_init {
                rig.ranges.initialize(settings, &mut rig.camera, world);
                *needs_init = false;
            }

            let ignore = settings.ignore_time_scale;
            let frame = Frame {
                settings,
                input,
                world,
                viewport: *viewport,
                dt: time.camera_delta(ignore),
                smoothing_dt: time.delta,
                smooth_time: TRACKING_SMOOTH_TIME
                    * time.smoothing_scale(ignore),
            };
            rig.step(&frame);

            if let Some(bounds) = bounds {
                bounds.apply_to_camera(&mut rig.camera);
            }
        }

        std::mem::take(&mut rig.events)
    }
}

impl std::fmt::Debug for TacticalCamera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TacticalCamera")
            .field("camera", &self.rig.camera)
            .field("enabled", &self.enabled)
            .field("has_settings", &self.settings.is_some())
            .field("has_bounds", &self.bounds.is_some())
            .field("moving_to_target", &self.rig.task.is_some())
            .finish_non_exhaustive()
    }
}

impl Rig {
    fn step(&mut self, frame: &Frame<'_>) {
        let axes = self.fades.apply(frame);
        self.resolve_movement(frame, axes);
        self.resolve_rotation(frame, axes);
        self.ranges.track_tilt(
            frame.settings,
            &mut self.camera,
            frame.smooth_time,
            frame.smoothing_dt,
        );
        if frame.settings.field_of_view.dynamic {
            self.ranges.track_field_of_view(
                frame.settings,
                &mut self.camera,
                frame.smooth_time,
                frame.smoothing_dt,
            );
        }
    }

    fn start_task(&mut self, settings: &CameraSettings, target: Vec3) {
        self.task = Some(MoveToTarget::new(
            self.camera.position,
            target,
            settings.movement.move_to_target_smoothing_time,
        ));
        self.events.push(CameraEvent::MoveToTargetStarted { target });
        log::debug!("move to target started: {target}");
    }

    fn cancel_task(&mut self) -> bool {
        if self.task.take().is_none() {
            return false;
        }
        self.events.push(CameraEvent::MoveToTargetCancelled);
        log::debug!("move to target cancelled");
        true
    }

    /// Point under the cursor, if any.
    fn pick_target(&self, frame: &Frame<'_>) -> Option<Vec3> {
        let ray = self
            .camera
            .screen_point_to_ray(frame.input.cursor_position(), frame.viewport)?;
        frame
            .world
            .raycast(&ray, f32::MAX, frame.settings.interaction.layer_mask)
            .map(|hit| hit.point)
    }

    /// Cancel or start a glide, then move the camera.
    ///
    /// Free-roam direction is the ground-plane forward and right axes
    /// weighted by their fades, with its length clamped to 1 so the speed
    /// eases out along the fade curve instead of staying at full speed
    /// until the fade ends. Free-roam steps stop `bubble_radius` short of
    /// geometry; the new height is clamped into the range probed from the
    /// height before the step.
    fn resolve_movement(&mut self, frame: &Frame<'_>, axes: AxisValues) {
        let settings = frame.settings;
        let input = frame.input;
        let epsilon = settings.epsilon;

        let cancel = input.cancel_move_to_target()
            || input.move_forward().abs() > epsilon
            || input.move_sideways().abs() > epsilon;
        if self.task.is_some() && cancel {
            let _ = self.cancel_task();
        } else if input.move_to_target() {
            if let Some(target) = self.pick_target(frame) {
                self.start_task(settings, target);
            } else {
                self.events.push(CameraEvent::MoveToTargetFailed);
                log::debug!("move to target failed: nothing under cursor");
                return;
            }
        }

        let start = self.camera.position;
        let step = self.ranges.max_movement_speed(settings, start.y) * frame.dt;

        let mut delta = Vec3::Y * axes.up.clamp(-1.0, 1.0) * step;
        if self.task.is_none() {
            let direction = self.camera.ground_forward() * axes.forward
                + self.camera.ground_right() * axes.sideways;
            // Clamped rather than normalized: speed follows the fade
            let horizontal = direction.clamp_length_max(1.0) * step;
            delta += collide_horizontal(frame, start, horizontal);
        }

        let mut candidate = start + delta;
        let mut arrived = false;
        if let Some(task) = self.task.as_mut() {
            let xz = match task.advance(frame.dt) {
                Progress::Moving(xz) => xz,
                Progress::Arrived(xz) => {
                    arrived = true;
                    xz
                }
            };
            candidate.x = xz.x;
            candidate.z = xz.y;
        }
        if arrived {
            self.task = None;
            self.events.push(CameraEvent::MoveToTargetCompleted);
            log::debug!("move to target completed");
        }

        if !arrived && candidate.distance(start) < epsilon {
            return;
        }

        let range = height_range_at(settings, frame.world, candidate, start.y);
        candidate.y = range.clamp(candidate.y);
        self.ranges.height = range;
        self.camera.position = candidate;
    }

    fn resolve_rotation(&mut self, frame: &Frame<'_>, axes: AxisValues) {
        let settings = frame.settings;
        let max_speed = settings.rotation.max_speed;

        if self.fades.rotate.is_active() {
            let degrees = axes.rotate * max_speed * frame.dt;
            if frame.input.orbit_around_target() {
                match self.orbit_pivot(frame) {
                    Some(pivot) => self.camera.rotate_around(pivot, degrees),
                    None if settings.rotation.allow_pivot_on_failed_orbit => {
                        self.camera.rotate_in_place(degrees);
                    }
                    None => {}
                }
            } else {
                self.camera.rotate_in_place(degrees);
            }
        }

        if self.fades.tilt.is_active() {
            let tilt = self.camera.tilt_angle() + axes.tilt * max_speed * frame.dt;
            let tilt = self.ranges.tilt.clamp(tilt);
            self.camera.set_tilt_angle(tilt);
            self.ranges.update_tilt_factor(tilt);
        }

        self.camera.clear_roll();
    }

    /// World point straight ahead within interaction distance.
    fn orbit_pivot(&self, frame: &Frame<'_>) -> Option<Vec3> {
        let interaction = &frame.settings.interaction;
        let ray = Ray::new(self.camera.position, self.camera.forward())?;
        frame
            .world
            .raycast(&ray, interaction.distance, interaction.layer_mask)
            .map(|hit| hit.point)
    }
}

/// Shorten a horizontal step from `start` so the camera keeps
/// `bubble_radius` of clearance from whatever lies ahead.
fn collide_horizontal(frame: &Frame<'_>, start: Vec3, step: Vec3) -> Vec3 {
    let length = step.length();
    let Some(ray) = Ray::new(start, step) else {
        return step;
    };
    let interaction = &frame.settings.interaction;
    let reach = length + interaction.bubble_radius;
    frame
        .world
        .raycast(&ray, reach, interaction.layer_mask)
        .map_or(step, |hit| {
            let allowed = (hit.distance - interaction.bubble_radius).max(0.0);
            ray.direction * allowed.min(length)
        })
}

impl AxisFades {
    fn configure(&mut self, settings: &CameraSettings) -> Result<(), CameraError> {
        let movement = &settings.movement;
        for fade in [&mut self.forward, &mut self.sideways, &mut self.up] {
            fade.configure(movement.fade_time, movement.fade_curve.clone())?;
        }
        let rotation = &settings.rotation;
        for fade in [&mut self.tilt, &mut self.rotate] {
            fade.configure(rotation.fade_time, rotation.fade_curve.clone())?;
        }
        Ok(())
    }

    fn reset(&mut self) {
        for fade in [
            &mut self.forward,
            &mut self.sideways,
            &mut self.up,
            &mut self.tilt,
            &mut self.rotate,
        ] {
            fade.reset();
        }
    }

    fn apply(&mut self, frame: &Frame<'_>) -> AxisValues {
        let input = frame.input;
        let epsilon = frame.settings.epsilon;
        let dt = frame.dt;
        AxisValues {
            forward: self.forward.apply_input(input.move_forward(), epsilon, dt),
            sideways: self.sideways.apply_input(input.move_sideways(), epsilon, dt),
            up: self.up.apply_input(input.move_up(), epsilon, dt),
            tilt: self.tilt.apply_input(input.tilt_delta(), epsilon, dt),
            rotate: self.rotate.apply_input(input.rotation_delta(), epsilon, dt),
        }
    }

    fn get(&self, axis: FadeAxis) -> &FadeState {
        match axis {
            FadeAxis::Forward => &self.forward,
            FadeAxis::Sideways => &self.sideways,
            FadeAxis::Up => &self.up,
            FadeAxis::Tilt => &self.tilt,
            FadeAxis::Rotate => &self.rotate,
        }
    }
}
