//! Analytic collision world: horizontal planes, boxes and spheres.

use glam::Vec3;

use super::{LayerMask, Ray, RayHit, WorldQuery};

const PARALLEL_EPSILON: f32 = 1e-6;

/// Collision shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Infinite horizontal plane at `height`, hit from either side.
    Plane {
        /// World-space Y of the plane.
        height: f32,
    },
    /// Axis-aligned box.
    Box {
        /// Minimum corner.
        min: Vec3,
        /// Maximum corner.
        max: Vec3,
    },
    /// Sphere.
    Sphere {
        /// Center point.
        center: Vec3,
        /// Radius.
        radius: f32,
    },
}

/// A shape on a collision layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// Geometry.
    pub shape: Shape,
    /// Layers the shape lives on.
    pub layer: LayerMask,
}

/// Fixed set of colliders answering [`WorldQuery::raycast`].
///
/// Rays starting inside a box or sphere ignore that shape, matching how
/// physics engines treat back faces.
#[derive(Debug, Clone, Default)]
pub struct StaticWorld {
    colliders: Vec<Collider>,
}

impl StaticWorld {
    /// Empty world; every ray misses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a ground plane on the default layer.
    #[must_use]
    pub fn with_ground(self, height: f32) -> Self {
        self.with(Shape::Plane { height }, LayerMask::default())
    }

    /// Add a box spanning `a` and `b` on the default layer.
    #[must_use]
    pub fn with_box(self, a: Vec3, b: Vec3) -> Self {
        self.with(
            Shape::Box {
                min: a.min(b),
                max: a.max(b),
            },
            LayerMask::default(),
        )
    }

    /// Add any shape on the given layer.
    #[must_use]
    pub fn with(mut self, shape: Shape, layer: LayerMask) -> Self {
        self.colliders.push(Collider { shape, layer });
        self
    }

    /// Colliders in insertion order.
    #[must_use]
    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }
}

impl WorldQuery for StaticWorld {
    fn raycast(
        &self,
        ray: &Ray,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        self.colliders
            .iter()
            .filter(|c| c.layer.intersects(mask))
            .filter_map(|c| intersect(&c.shape, ray))
            .filter(|hit| hit.distance <= max_distance)
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

fn intersect(shape: &Shape, ray: &Ray) -> Option<RayHit> {
    match *shape {
        Shape::Plane { height } => intersect_plane(height, ray),
        Shape::Box { min, max } => intersect_box(min, max, ray),
        Shape::Sphere { center, radius } => {
            intersect_sphere(center, radius, ray)
        }
    }
}

fn intersect_plane(height: f32, ray: &Ray) -> Option<RayHit> {
    if ray.direction.y.abs() < PARALLEL_EPSILON {
        return None;
    }
    let distance = (height - ray.origin.y) / ray.direction.y;
    if distance < 0.0 {
        return None;
    }
    let normal = if ray.direction.y < 0.0 {
        Vec3::Y
    } else {
        Vec3::NEG_Y
    };
    Some(RayHit {
        point: ray.at(distance),
        normal,
        distance,
    })
}

/// Slab test. Tracks which axis produced the entry distance for the normal.
fn intersect_box(min: Vec3, max: Vec3, ray: &Ray) -> Option<RayHit> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    let mut normal = Vec3::ZERO;

    for axis in 0..3 {
        let origin = ray.origin[axis];
        let dir = ray.direction[axis];
        if dir.abs() < PARALLEL_EPSILON {
            if origin < min[axis] || origin > max[axis] {
                return None;
            }
            continue;
        }

        let inv = 1.0 / dir;
        let mut t0 = (min[axis] - origin) * inv;
        let mut t1 = (max[axis] - origin) * inv;
        let mut entry_normal = Vec3::ZERO;
        entry_normal[axis] = -dir.signum();
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        if t0 > t_near {
            t_near = t0;
            normal = entry_normal;
        }
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    // Starting inside (or the box is behind the ray)
    if t_near < 0.0 {
        return None;
    }
    Some(RayHit {
        point: ray.at(t_near),
        normal,
        distance: t_near,
    })
}

fn intersect_sphere(center: Vec3, radius: f32, ray: &Ray) -> Option<RayHit> {
    let offset = ray.origin - center;
    let c = offset.length_squared() - radius * radius;
    if c <= 0.0 {
        return None;
    }
    let b = offset.dot(ray.direction);
    if b > 0.0 {
        return None;
    }
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let distance = -b - discriminant.sqrt();
    let point = ray.at(distance);
    Some(RayHit {
        point,
        normal: (point - center).normalize_or_zero(),
        distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down_from(origin: Vec3) -> Ray {
        Ray::new(origin, Vec3::NEG_Y).unwrap()
    }

    #[test]
    fn ground_plane_is_hit_from_above() {
        let world = StaticWorld::new().with_ground(2.0);
        let hit = world
            .raycast(&down_from(Vec3::new(3.0, 10.0, -4.0)), 100.0, LayerMask::ALL)
            .unwrap();
        assert!((hit.point - Vec3::new(3.0, 2.0, -4.0)).length() < 1e-5);
        assert_eq!(hit.normal, Vec3::Y);
        assert!((hit.distance - 8.0).abs() < 1e-5);
    }

    #[test]
    fn max_distance_limits_hits() {
        let world = StaticWorld::new().with_ground(0.0);
        let ray = down_from(Vec3::new(0.0, 10.0, 0.0));
        assert!(world.raycast(&ray, 5.0, LayerMask::ALL).is_none());
        assert!(world.raycast(&ray, 10.0, LayerMask::ALL).is_some());
    }

    #[test]
    fn layer_mask_filters_colliders() {
        let world = StaticWorld::new().with(
            Shape::Plane { height: 0.0 },
            LayerMask::layer(4),
        );
        let ray = down_from(Vec3::new(0.0, 10.0, 0.0));
        assert!(world.raycast(&ray, 100.0, LayerMask::layer(0)).is_none());
        assert!(world.raycast(&ray, 100.0, LayerMask::layer(4)).is_some());
    }

    #[test]
    fn nearest_collider_wins() {
        let world = StaticWorld::new()
            .with_ground(0.0)
            .with_box(Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 5.0, 1.0));
        let hit = world
            .raycast(&down_from(Vec3::new(0.0, 10.0, 0.0)), 100.0, LayerMask::ALL)
            .unwrap();
        assert!((hit.point.y - 5.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::Y);
    }

    #[test]
    fn box_side_hit_reports_side_normal() {
        let world = StaticWorld::new()
            .with_box(Vec3::new(4.0, -1.0, -1.0), Vec3::new(6.0, 1.0, 1.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::X).unwrap();
        let hit = world.raycast(&ray, 100.0, LayerMask::ALL).unwrap();
        assert!((hit.distance - 4.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::NEG_X);
    }

    #[test]
    fn rays_starting_inside_shapes_ignore_them() {
        let world = StaticWorld::new()
            .with_box(Vec3::splat(-1.0), Vec3::splat(1.0))
            .with(
                Shape::Sphere {
                    center: Vec3::ZERO,
                    radius: 3.0,
                },
                LayerMask::default(),
            );
        let ray = Ray::new(Vec3::ZERO, Vec3::Y).unwrap();
        assert!(world.raycast(&ray, 100.0, LayerMask::ALL).is_none());
    }

    #[test]
    fn sphere_hit_point_lies_on_surface() {
        let world = StaticWorld::new().with(
            Shape::Sphere {
                center: Vec3::new(0.0, 0.0, -10.0),
                radius: 2.0,
            },
            LayerMask::default(),
        );
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z).unwrap();
        let hit = world.raycast(&ray, 100.0, LayerMask::ALL).unwrap();
        assert!((hit.distance - 8.0).abs() < 1e-4);
        assert!((hit.normal - Vec3::Z).length() < 1e-4);
    }
}
