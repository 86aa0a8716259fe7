//! Per-frame timing handed to the camera engine.

use web_time::Instant;

/// Elapsed time for one camera tick.
///
/// The engine never reads a global clock; hosts build one of these per
/// frame (by hand or with [`FrameClock`]) and pass it into
/// [`TacticalCamera::tick`](crate::camera::TacticalCamera::tick).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Scaled frame duration in seconds (`unscaled_delta * time_scale`).
    pub delta: f32,
    /// Wall-clock frame duration in seconds.
    pub unscaled_delta: f32,
    /// Multiplier applied to game time (1 = real time, 0 = paused).
    pub time_scale: f32,
}

impl FrameTime {
    /// Fixed step running at real time.
    #[must_use]
    pub fn fixed(delta: f32) -> Self {
        Self {
            delta,
            unscaled_delta: delta,
            time_scale: 1.0,
        }
    }

    /// Step of `unscaled_delta` wall-clock seconds under `time_scale`.
    #[must_use]
    pub fn scaled(unscaled_delta: f32, time_scale: f32) -> Self {
        Self {
            delta: unscaled_delta * time_scale,
            unscaled_delta,
            time_scale,
        }
    }

    /// Delta the camera should advance by.
    #[inline]
    #[must_use]
    pub fn camera_delta(&self, ignore_time_scale: bool) -> f32 {
        if ignore_time_scale {
            self.unscaled_delta
        } else {
            self.delta
        }
    }

    /// Factor applied to smoothing times. Damping always steps on the
    /// scaled `delta`; a camera that ignores the time scale stretches its
    /// smoothing times by the same scale to keep a wall-clock feel.
    #[inline]
    #[must_use]
    pub fn smoothing_scale(&self, ignore_time_scale: bool) -> f32 {
        if ignore_time_scale {
            self.time_scale
        } else {
            1.0
        }
    }
}

/// Frame timer producing [`FrameTime`] values and a smoothed FPS reading.
pub struct FrameClock {
    /// Last frame timestamp
    last_frame: Instant,
    /// Multiplier applied to game time
    time_scale: f32,
    /// Largest step handed out, so a stall doesn't teleport the camera
    max_delta: f32,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Clock starting now, at real time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            time_scale: 1.0,
            max_delta: 0.25,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,
        }
    }

    /// Change the game-time multiplier. Negative values are treated as 0.
    pub fn set_time_scale(&mut self, time_scale: f32) {
        self.time_scale = time_scale.max(0.0);
    }

    /// Current game-time multiplier.
    #[must_use]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Call once per frame; returns the time since the previous call.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if elapsed > 0.0 {
            let instant_fps = 1.0 / elapsed;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        FrameTime::scaled(elapsed.min(self.max_delta), self.time_scale)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_delta_respects_ignore_flag() {
        let time = FrameTime::scaled(0.1, 0.5);
        assert!((time.camera_delta(false) - 0.05).abs() < 1e-6);
        assert!((time.camera_delta(true) - 0.1).abs() < 1e-6);
        assert_eq!(time.smoothing_scale(true), 0.5);
        assert_eq!(time.smoothing_scale(false), 1.0);
    }

    #[test]
    fn clock_ticks_are_bounded_and_scaled() {
        let mut clock = FrameClock::new();
        clock.set_time_scale(-2.0);
        assert_eq!(clock.time_scale(), 0.0);
        let time = clock.tick();
        assert!(time.unscaled_delta >= 0.0);
        assert!(time.unscaled_delta <= 0.25);
        assert_eq!(time.delta, 0.0);
    }
}
