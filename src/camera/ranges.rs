//! Height, tilt and field-of-view ranges derived from the world.
//!
//! The operating height range comes from ground and ceiling rays and is
//! refreshed whenever the camera moves. The operating tilt range chases a
//! height-dependent target with critically damped smoothing, carrying the
//! camera's relative tilt (the tilt factor) along with it.

use glam::Vec3;

use super::core::Camera;
use crate::options::CameraSettings;
use crate::util::smoothing::{smooth_damp, smooth_damp_angle};
use crate::util::value_range::ValueRange;
use crate::world::{Ray, WorldQuery};

/// Operating ranges and the damping state that tracks them.
#[derive(Debug, Clone, Default)]
pub(crate) struct OperatingRanges {
    pub(crate) height: ValueRange,
    pub(crate) tilt: ValueRange,
    pub(crate) tilt_factor: f32,
    tilt_min_velocity: f32,
    tilt_max_velocity: f32,
    fov_velocity: f32,
}

impl OperatingRanges {
    /// Derive every range from scratch at the camera's current pose.
    pub(crate) fn initialize(
        &mut self,
        settings: &CameraSettings,
        camera: &mut Camera,
        world: &dyn WorldQuery,
    ) {
        let position = camera.position;
        self.height = height_range_at(settings, world, position, position.y);
        let relative = self.relative_height(position.y);
        self.tilt = target_tilt_range(settings, relative);
        self.update_tilt_factor(camera.tilt_angle());
        self.tilt_min_velocity = 0.0;
        self.tilt_max_velocity = 0.0;
        self.fov_velocity = 0.0;
        if settings.field_of_view.dynamic {
            camera.fovy = target_field_of_view(settings, relative);
        }
    }

    /// Height normalized into the operating height range, clamped to
    /// `[0, 1]`.
    pub(crate) fn relative_height(&self, height: f32) -> f32 {
        self.height.inverse_lerp(height).clamp(0.0, 1.0)
    }

    /// Maximum movement speed at `height`.
    pub(crate) fn max_movement_speed(
        &self,
        settings: &CameraSettings,
        height: f32,
    ) -> f32 {
        let t = settings.evaluate_movement_transition(self.relative_height(height));
        settings.movement.speed_range.lerp(t)
    }

    pub(crate) fn update_tilt_factor(&mut self, tilt: f32) {
        self.tilt_factor = self.tilt.inverse_lerp(tilt).clamp(0.0, 1.0);
    }

    /// Damp the tilt range toward its height-dependent target, then
    /// re-express the tilt factor against the moved range.
    pub(crate) fn track_tilt(
        &mut self,
        settings: &CameraSettings,
        camera: &mut Camera,
        smooth_time: f32,
        dt: f32,
    ) {
        let relative = self.relative_height(camera.position.y);
        let target = target_tilt_range(settings, relative);
        let min = smooth_damp_angle(
            self.tilt.min(),
            target.min(),
            &mut self.tilt_min_velocity,
            smooth_time,
            dt,
        );
        let max = smooth_damp_angle(
            self.tilt.max(),
            target.max(),
            &mut self.tilt_max_velocity,
            smooth_time,
            dt,
        );
        self.tilt.set(min, max);
        camera.set_tilt_angle(self.tilt.lerp(self.tilt_factor));
    }

    /// Damp the field of view toward its height-dependent target.
    pub(crate) fn track_field_of_view(
        &mut self,
        settings: &CameraSettings,
        camera: &mut Camera,
        smooth_time: f32,
        dt: f32,
    ) {
        let relative = self.relative_height(camera.position.y);
        let target = target_field_of_view(settings, relative);
        camera.fovy = smooth_damp(
            camera.fovy,
            target,
            &mut self.fov_velocity,
            smooth_time,
            dt,
        );
    }
}

/// Tilt range for a relative height.
pub(crate) fn target_tilt_range(
    settings: &CameraSettings,
    relative_height: f32,
) -> ValueRange {
    ValueRange::lerp_ranges(
        settings.tilt.range_low,
        settings.tilt.range_high,
        settings.evaluate_tilt_transition(relative_height),
    )
}

/// Field of view for a relative height.
pub(crate) fn target_field_of_view(
    settings: &CameraSettings,
    relative_height: f32,
) -> f32 {
    settings
        .field_of_view
        .range
        .lerp(settings.evaluate_field_of_view_transition(relative_height))
}

/// Heights available at `position`'s XZ location, probed from height
/// `origin`.
///
/// Both rays start at `origin`, so when the camera moves, passing its
/// height before the move keeps any surface between the old and new heights
/// in the way. Each side falls back to the absolute bound when its ray
/// finds nothing, and keeps `bubble_radius` of clearance when it does.
pub(crate) fn height_range_at(
    settings: &CameraSettings,
    world: &dyn WorldQuery,
    position: Vec3,
    origin: f32,
) -> ValueRange {
    let absolute = settings.absolute_height_range;
    let interaction = &settings.interaction;
    let reach = absolute.range().min(interaction.distance);

    let probe = |direction: Vec3| {
        let ray = Ray::new(Vec3::new(position.x, origin, position.z), direction)?;
        world.raycast(&ray, reach, interaction.layer_mask)
    };

    let min = probe(Vec3::NEG_Y).map_or(absolute.min(), |hit| {
        (hit.point.y + interaction.bubble_radius).max(absolute.min())
    });
    let max = probe(Vec3::Y).map_or(absolute.max(), |hit| {
        (hit.point.y - interaction.bubble_radius).min(absolute.max())
    });

    // Too tight to fit the bubble: the ground wins
    ValueRange::new(min, max.max(min))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::StaticWorld;

    #[test]
    fn open_sky_uses_absolute_range() {
        let settings = CameraSettings::default();
        let world = StaticWorld::new();
        let range =
            height_range_at(&settings, &world, Vec3::new(0.0, 5.0, 0.0), 5.0);
        assert_eq!(range, settings.absolute_height_range);
    }

    #[test]
    fn ground_and_ceiling_narrow_the_range() {
        let settings = CameraSettings::default();
        let world = StaticWorld::new()
            .with_ground(2.0)
            .with_box(Vec3::new(-5.0, 12.0, -5.0), Vec3::new(5.0, 14.0, 5.0));
        let range =
            height_range_at(&settings, &world, Vec3::new(0.0, 6.0, 0.0), 6.0);
        assert!((range.min() - 3.0).abs() < 1e-5);
        assert!((range.max() - 11.0).abs() < 1e-5);
    }

    #[test]
    fn surfaces_between_origin_and_target_height_stay_in_the_way() {
        let settings = CameraSettings::default();
        let world = StaticWorld::new()
            .with_ground(0.0)
            .with_box(Vec3::new(-5.0, 6.0, -5.0), Vec3::new(5.0, 8.0, 5.0));
        // Probed from below the slab, whatever height the move aims for
        let below =
            height_range_at(&settings, &world, Vec3::new(0.0, 12.0, 0.0), 5.0);
        assert!((below.max() - 5.0).abs() < 1e-5);
        assert!((below.min() - 1.0).abs() < 1e-5);
        // Probed from above it, the slab is the ground
        let above =
            height_range_at(&settings, &world, Vec3::new(0.0, 2.0, 0.0), 10.0);
        assert!((above.min() - 9.0).abs() < 1e-5);
    }

    #[test]
    fn tight_gap_collapses_to_ground() {
        let settings = CameraSettings::default();
        let world = StaticWorld::new()
            .with_ground(0.0)
            .with_box(Vec3::new(-5.0, 1.5, -5.0), Vec3::new(5.0, 3.0, 5.0));
        let range =
            height_range_at(&settings, &world, Vec3::new(0.0, 1.0, 0.0), 1.0);
        assert_eq!(range.min(), range.max());
        assert!((range.min() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn initialize_snaps_tilt_range_and_fov() {
        let settings = CameraSettings::default();
        let world = StaticWorld::new().with_ground(0.0);
        // Lowest operating height: ground plus bubble radius
        let mut camera = Camera::looking(Vec3::new(0.0, 1.0, 0.0), 0.0, 10.0);
        let mut ranges = OperatingRanges::default();
        ranges.initialize(&settings, &mut camera, &world);

        assert_eq!(ranges.tilt, settings.tilt.range_low);
        assert!((ranges.tilt_factor - 0.5).abs() < 1e-4);
        assert!((camera.fovy - 45.0).abs() < 1e-4);
        assert!((ranges.max_movement_speed(&settings, 1.0) - 5.0).abs() < 1e-4);
        assert!((ranges.max_movement_speed(&settings, 20.0) - 20.0).abs() < 1e-4);
    }

    #[test]
    fn tilt_range_follows_height_smoothly() {
        let settings = CameraSettings::default();
        let world = StaticWorld::new().with_ground(0.0);
        let mut camera = Camera::looking(Vec3::new(0.0, 1.0, 0.0), 0.0, 10.0);
        let mut ranges = OperatingRanges::default();
        ranges.initialize(&settings, &mut camera, &world);

        // Jump to the top of the range; the tilt range moves over time
        camera.position.y = 20.0;
        ranges.track_tilt(&settings, &mut camera, 0.2, 1.0 / 60.0);
        assert!(ranges.tilt.min() > -10.0 && ranges.tilt.min() < 10.0);
        for _ in 0..300 {
            ranges.track_tilt(&settings, &mut camera, 0.2, 1.0 / 60.0);
        }
        assert!((ranges.tilt.min() - 10.0).abs() < 1e-2);
        assert!((ranges.tilt.max() - 75.0).abs() < 1e-2);
        // Relative tilt is preserved
        assert!((camera.tilt_angle() - 42.5).abs() < 1e-2);
    }
}
