use std::cell::Cell;

use glam::Vec3;

use super::CameraBounds;

/// Axis-aligned box the camera must stay in.
///
/// With an anchor set, the box is expressed relative to it; moving the
/// anchor moves the box.
#[derive(Debug, Clone)]
pub struct BoxBounds {
    min: Vec3,
    max: Vec3,
    anchor: Cell<Option<Vec3>>,
}

impl BoxBounds {
    /// Box spanning the corners `a` and `b`, in any order.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
            anchor: Cell::new(None),
        }
    }

    /// Box centered on `center` with edge lengths `size`.
    #[must_use]
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self::new(center - half, center + half)
    }

    /// Make the box relative to `anchor`.
    #[must_use]
    pub fn with_anchor(self, anchor: Vec3) -> Self {
        self.anchor.set(Some(anchor));
        self
    }

    /// Move (or clear) the anchor. Takes `&self` so shared bounds can
    /// follow a moving parent.
    pub fn set_anchor(&self, anchor: Option<Vec3>) {
        self.anchor.set(anchor);
    }

    /// Current anchor, if any.
    #[must_use]
    pub fn anchor(&self) -> Option<Vec3> {
        self.anchor.get()
    }

    /// Minimum corner in world space.
    #[must_use]
    pub fn world_min(&self) -> Vec3 {
        self.min + self.offset()
    }

    /// Maximum corner in world space.
    #[must_use]
    pub fn world_max(&self) -> Vec3 {
        self.max + self.offset()
    }

    fn offset(&self) -> Vec3 {
        self.anchor.get().unwrap_or(Vec3::ZERO)
    }
}

impl Default for BoxBounds {
    fn default() -> Self {
        Self::from_center_size(Vec3::ZERO, Vec3::splat(100.0))
    }
}

impl CameraBounds for BoxBounds {
    fn project(&self, position: Vec3) -> Vec3 {
        if self.is_within(position) {
            return position;
        }
        position.clamp(self.world_min(), self.world_max())
    }

    fn is_within(&self, position: Vec3) -> bool {
        let (min, max) = (self.world_min(), self.world_max());
        position.cmpge(min).all() && position.cmple(max).all()
    }
}
