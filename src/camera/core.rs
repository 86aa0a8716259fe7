use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

use crate::world::Ray;

/// Below this squared length a horizontal projection is treated as
/// degenerate (camera looking straight up or down).
const DEGENERATE_EPSILON: f32 = 1e-8;

/// Perspective camera pose plus projection parameters.
///
/// World up is `+Y` and the camera looks down its local `-Z` axis. Tilt is
/// the pitch below the horizon (positive when looking down); heading is the
/// yaw about world up (positive turning right when seen from above).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// World-space orientation.
    pub orientation: Quat,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Camera at `position` facing `heading` degrees with `tilt` degrees of
    /// pitch below the horizon.
    #[must_use]
    pub fn looking(position: Vec3, heading: f32, tilt: f32) -> Self {
        Self {
            position,
            orientation: compose(heading.to_radians(), tilt.to_radians()),
            ..Self::default()
        }
    }

    /// Camera forward direction (`-Z` in local space).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Camera right direction.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// Camera up direction.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), self.up())
    }

    /// Projection matrix with a `[0, 1]` depth range.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// Update the aspect ratio for a new viewport size. Zero-sized
    /// viewports are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Ray from the near plane through a screen point.
    ///
    /// `cursor` is in pixels with the origin at the top-left corner of a
    /// `viewport`-sized surface. Returns `None` for an empty viewport or a
    /// projection that cannot be inverted.
    #[must_use]
    pub fn screen_point_to_ray(
        &self,
        cursor: Vec2,
        viewport: Vec2,
    ) -> Option<Ray> {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return None;
        }
        let view_proj = self.build_matrix();
        if view_proj.determinant().abs() <= f32::EPSILON {
            return None;
        }
        let inverse = view_proj.inverse();

        let ndc_x = 2.0 * cursor.x / viewport.x - 1.0;
        let ndc_y = 1.0 - 2.0 * cursor.y / viewport.y;
        let near = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
        Ray::new(near, far - near)
    }

    /// Heading in degrees; 0 faces `-Z`, positive values turn right.
    #[must_use]
    pub fn heading(&self) -> f32 {
        self.heading_radians().to_degrees()
    }

    fn heading_radians(&self) -> f32 {
        let flat = self.ground_forward();
        flat.x.atan2(-flat.z)
    }

    /// Forward direction projected onto the ground plane, unit length.
    ///
    /// When looking straight up or down, the projected up axis stands in
    /// for forward so the result stays meaningful.
    #[must_use]
    pub fn ground_forward(&self) -> Vec3 {
        let forward = self.forward();
        let mut flat = Vec3::new(forward.x, 0.0, forward.z);
        if flat.length_squared() < DEGENERATE_EPSILON {
            // Looking straight down the top of the frame points ahead
            let up = if forward.y < 0.0 { self.up() } else { -self.up() };
            flat = Vec3::new(up.x, 0.0, up.z);
        }
        flat.normalize_or_zero()
    }

    /// Right direction projected onto the ground plane, unit length.
    #[must_use]
    pub fn ground_right(&self) -> Vec3 {
        let right = self.right();
        Vec3::new(right.x, 0.0, right.z).normalize_or_zero()
    }

    /// Signed pitch below the horizon in degrees, in `(-180, 180]`.
    ///
    /// Orientations rolled past vertical (camera up pointing below the
    /// horizon) map beyond ±90 so that the angle stays continuous.
    #[must_use]
    pub fn tilt_angle(&self) -> f32 {
        let forward = self.forward();
        let up = self.up();
        let angle = (-forward.y).clamp(-1.0, 1.0).asin().to_degrees();
        if up.y >= 0.0 {
            angle
        } else if forward.y <= 0.0 {
            180.0 - angle
        } else {
            -180.0 - angle
        }
    }

    /// Set the pitch below the horizon, keeping heading and dropping roll.
    pub fn set_tilt_angle(&mut self, degrees: f32) {
        self.orientation =
            compose(self.heading_radians(), degrees.to_radians());
    }

    /// Turn about world up through the camera's own position.
    pub fn rotate_in_place(&mut self, degrees: f32) {
        self.orientation =
            (yaw_rotation(degrees) * self.orientation).normalize();
    }

    /// Orbit about world up through `pivot`, turning the camera with it.
    pub fn rotate_around(&mut self, pivot: Vec3, degrees: f32) {
        let rotation = yaw_rotation(degrees);
        self.position = pivot + rotation * (self.position - pivot);
        self.orientation = (rotation * self.orientation).normalize();
    }

    /// Remove any rotation about the view axis.
    pub fn clear_roll(&mut self) {
        let (yaw, pitch, _roll) = self.orientation.to_euler(EulerRot::YXZ);
        self.orientation = Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 10.0, 0.0),
            orientation: compose(0.0, 45f32.to_radians()),
            fovy: 60.0,
            aspect: 16.0 / 9.0,
            znear: 0.3,
            zfar: 1000.0,
        }
    }
}

/// Positive angles turn clockwise seen from above.
fn yaw_rotation(degrees: f32) -> Quat {
    Quat::from_rotation_y(-degrees.to_radians())
}

/// Orientation for a heading and downward pitch, both in radians, with no
/// roll.
fn compose(heading: f32, tilt: f32) -> Quat {
    Quat::from_euler(EulerRot::YXZ, -heading, -tilt, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn default_basis_is_orthonormal() {
        let camera = Camera::default();
        let (f, r, u) = (camera.forward(), camera.right(), camera.up());
        assert!((f.length() - 1.0).abs() < EPS);
        assert!(f.dot(r).abs() < EPS);
        assert!(f.dot(u).abs() < EPS);
        assert!(approx(r.cross(u), -f));
    }

    #[test]
    fn level_camera_faces_negative_z() {
        let camera = Camera::looking(Vec3::ZERO, 0.0, 0.0);
        assert!(approx(camera.forward(), Vec3::NEG_Z));
        assert!(approx(camera.right(), Vec3::X));
        assert!(camera.tilt_angle().abs() < EPS);
        assert!(camera.heading().abs() < EPS);
    }

    #[test]
    fn heading_and_tilt_round_trip() {
        let camera = Camera::looking(Vec3::ZERO, 30.0, 40.0);
        assert!((camera.heading() - 30.0).abs() < 1e-3);
        assert!((camera.tilt_angle() - 40.0).abs() < 1e-3);
        // Positive heading turns toward +X
        assert!(camera.forward().x > 0.0);
        assert!(camera.forward().y < 0.0);
    }

    #[test]
    fn straight_down_keeps_heading() {
        let mut camera = Camera::looking(Vec3::ZERO, 60.0, 10.0);
        camera.set_tilt_angle(90.0);
        assert!(approx(camera.forward(), Vec3::NEG_Y));
        assert!((camera.heading() - 60.0).abs() < 1e-2);
        camera.set_tilt_angle(20.0);
        assert!((camera.heading() - 60.0).abs() < 1e-2);
        assert!((camera.tilt_angle() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn ground_basis_is_flat_even_looking_down() {
        let camera = Camera::looking(Vec3::ZERO, 90.0, 90.0);
        assert!(approx(camera.ground_forward(), Vec3::X));
        assert!(approx(camera.ground_right(), Vec3::Z));
    }

    #[test]
    fn tilt_wraps_past_vertical() {
        let mut camera = Camera::looking(Vec3::ZERO, 0.0, 0.0);
        // Pitch 100 degrees down about the local right axis
        camera.orientation = camera.orientation
            * Quat::from_rotation_x(-100f32.to_radians());
        assert!((camera.tilt_angle() - 100.0).abs() < 1e-2);
    }

    #[test]
    fn positive_rotation_turns_right() {
        let mut camera = Camera::looking(Vec3::ZERO, 0.0, 0.0);
        camera.rotate_in_place(90.0);
        assert!(approx(camera.forward(), Vec3::X));
        assert!((camera.heading() - 90.0).abs() < 1e-3);
    }

    #[test]
    fn orbit_keeps_distance_to_pivot() {
        let pivot = Vec3::new(0.0, 0.0, -10.0);
        let mut camera = Camera::looking(Vec3::ZERO, 0.0, 0.0);
        camera.rotate_around(pivot, 90.0);
        assert!(approx(camera.position, Vec3::new(-10.0, 0.0, -10.0)));
        assert!(approx(camera.forward(), Vec3::X));
    }

    #[test]
    fn clear_roll_levels_the_horizon() {
        let mut camera = Camera::looking(Vec3::ZERO, 25.0, 35.0);
        camera.orientation *= Quat::from_rotation_z(0.3);
        camera.clear_roll();
        assert!(camera.right().y.abs() < EPS);
        assert!((camera.tilt_angle() - 35.0).abs() < 1e-2);
        assert!((camera.heading() - 25.0).abs() < 1e-2);
    }

    #[test]
    fn center_ray_follows_forward() {
        let camera = Camera::looking(Vec3::new(1.0, 5.0, 2.0), 20.0, 30.0);
        let viewport = Vec2::new(800.0, 600.0);
        let ray = camera
            .screen_point_to_ray(viewport * 0.5, viewport)
            .unwrap();
        assert!(approx(ray.direction, camera.forward()));
        let to_origin = (ray.origin - camera.position).normalize();
        assert!(approx(to_origin, camera.forward()));
    }

    #[test]
    fn top_left_ray_points_up_and_left() {
        let camera = Camera::looking(Vec3::ZERO, 0.0, 0.0);
        let viewport = Vec2::new(800.0, 600.0);
        let ray = camera.screen_point_to_ray(Vec2::ZERO, viewport).unwrap();
        assert!(ray.direction.x < 0.0);
        assert!(ray.direction.y > 0.0);
        assert!(camera.screen_point_to_ray(Vec2::ZERO, Vec2::ZERO).is_none());
    }

    #[test]
    fn resize_updates_aspect() {
        let mut camera = Camera::default();
        camera.resize(1000, 500);
        assert!((camera.aspect - 2.0).abs() < EPS);
        camera.resize(0, 500);
        assert!((camera.aspect - 2.0).abs() < EPS);
    }
}
