//! World geometry queries.
//!
//! The camera never simulates physics; it only asks the host's world for
//! ray intersections through [`WorldQuery`]. [`StaticWorld`] is a small
//! reference implementation over analytic shapes for hosts without a
//! physics engine, for tests, and for the demo binary.

mod static_world;

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use static_world::{Collider, Shape, StaticWorld};

/// Half-line starting at `origin` heading along a unit `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point in world space.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Ray from `origin` along `direction`, which is normalized here.
    /// Returns `None` when `direction` has no usable length.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    /// Point `distance` units along the ray.
    #[inline]
    #[must_use]
    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

/// Where a ray met world geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Intersection point in world space.
    pub point: Vec3,
    /// Surface normal at the intersection.
    pub normal: Vec3,
    /// Distance from the ray origin.
    pub distance: f32,
}

/// Bit set of collision layers a query may interact with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches nothing.
    pub const NONE: Self = Self(0);
    /// Matches every layer.
    pub const ALL: Self = Self(u32::MAX);

    /// Mask with only `layer` (0..32) set.
    #[must_use]
    pub const fn layer(layer: u32) -> Self {
        Self(1 << (layer % 32))
    }

    /// Whether the two masks share at least one layer.
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::layer(0)
    }
}

/// Ray intersection service supplied by the host.
///
/// Queries are synchronous. Returning `None` is an expected outcome (open
/// sky, no terrain under the cursor) and the camera falls back to its
/// configured defaults.
pub trait WorldQuery {
    /// Nearest hit along `ray` within `max_distance` against geometry on
    /// any layer of `mask`.
    fn raycast(
        &self,
        ray: &Ray,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit>;
}
