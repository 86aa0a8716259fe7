//! Position restrictions for the camera.
//!
//! The engine applies its bound [`CameraBounds`] as the last step of every
//! tick, so bounds have the final say on where the camera ends up.
//! Absent bounds mean the camera is unconstrained.

mod box_bounds;
mod composite;

use std::rc::Rc;

use glam::Vec3;

pub use box_bounds::BoxBounds;
pub use composite::CompositeBounds;

use crate::camera::Camera;

/// Bounds shared between the host and the engine.
pub type SharedBounds = Rc<dyn CameraBounds>;

/// A region the camera is allowed to move in.
pub trait CameraBounds {
    /// Closest admissible position to `position`. Positions already inside
    /// come back unchanged.
    fn project(&self, position: Vec3) -> Vec3;

    /// Whether `position` lies inside the region.
    fn is_within(&self, position: Vec3) -> bool;

    /// Move the camera into the region.
    fn apply_to_camera(&self, camera: &mut Camera) {
        camera.position = self.project(camera.position);
    }

    /// Whether `other` is reachable from these bounds through nested
    /// members. Leaf bounds contain nothing.
    fn references(&self, _other: &dyn CameraBounds) -> bool {
        false
    }
}

/// Whether two bounds are the same object.
pub(crate) fn same_bounds(a: &dyn CameraBounds, b: &dyn CameraBounds) -> bool {
    std::ptr::addr_eq(a, b)
}
