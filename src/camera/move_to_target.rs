use glam::{Vec2, Vec3};

use crate::util::easing::EasingFunction;

/// Where a [`MoveToTarget`] put the camera this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Progress {
    /// Still on the way; the camera's XZ position for this tick.
    Moving(Vec2),
    /// Reached the target; the exact target XZ.
    Arrived(Vec2),
}

/// Resumable horizontal glide toward a picked point.
///
/// Only the XZ plane is animated. The caller keeps the camera's height and
/// polls [`advance`](Self::advance) once per tick until it reports
/// [`Progress::Arrived`] or the task is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveToTarget {
    start: Vec2,
    target: Vec3,
    elapsed: f32,
    duration: f32,
}

impl MoveToTarget {
    /// Glide from `start` (world position) toward `target` over `duration`
    /// seconds.
    #[must_use]
    pub fn new(start: Vec3, target: Vec3, duration: f32) -> Self {
        Self {
            start: Vec2::new(start.x, start.z),
            target,
            elapsed: 0.0,
            duration: duration.max(0.0),
        }
    }

    /// World point the glide ends above.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Fraction of the duration elapsed, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Step the glide by `dt` seconds.
    pub fn advance(&mut self, dt: f32) -> Progress {
        self.elapsed += dt.max(0.0);
        let end = Vec2::new(self.target.x, self.target.z);
        if self.elapsed >= self.duration {
            return Progress::Arrived(end);
        }
        let t = EasingFunction::SmoothStep.evaluate(self.progress());
        Progress::Moving(self.start.lerp(end, t))
    }
}
