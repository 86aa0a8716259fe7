use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;

use super::{same_bounds, CameraBounds, SharedBounds};
use crate::error::CameraError;

/// Union of several bounds.
///
/// A position is admissible when any member admits it. Positions outside
/// every member are projected onto whichever member is nearest. An empty
/// composite admits nothing but leaves positions unrestricted.
#[derive(Default)]
pub struct CompositeBounds {
    members: RefCell<Vec<SharedBounds>>,
}

impl CompositeBounds {
    /// Composite with no members.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member. Adding a member that is already present does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::SelfInsertion`] when `member` is this
    /// composite or contains it through nested composites.
    pub fn add(&self, member: SharedBounds) -> Result<(), CameraError> {
        if same_bounds(member.as_ref(), self) || member.references(self) {
            return Err(CameraError::SelfInsertion);
        }
        if self.contains(member.as_ref()) {
            return Ok(());
        }
        self.members.borrow_mut().push(member);
        Ok(())
    }

    /// Remove a member, returning whether it was present.
    pub fn remove(&self, member: &SharedBounds) -> bool {
        let mut members = self.members.borrow_mut();
        let before = members.len();
        members.retain(|m| !Rc::ptr_eq(m, member));
        members.len() != before
    }

    /// Whether `member` is a direct member.
    #[must_use]
    pub fn contains(&self, member: &dyn CameraBounds) -> bool {
        self.members
            .borrow()
            .iter()
            .any(|m| same_bounds(m.as_ref(), member))
    }

    /// Number of direct members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.borrow().len()
    }

    /// Whether there are no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.borrow().is_empty()
    }

    /// Snapshot of the members in insertion order.
    #[must_use]
    pub fn members(&self) -> Vec<SharedBounds> {
        self.members.borrow().clone()
    }
}

impl CameraBounds for CompositeBounds {
    fn project(&self, position: Vec3) -> Vec3 {
        if self.is_within(position) {
            return position;
        }

        let mut best: Option<(Vec3, f32)> = None;
        for member in self.members.borrow().iter() {
            let candidate = member.project(position);
            let distance = candidate.distance_squared(position);
            // Strict comparison: the first member wins ties
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((candidate, distance));
            }
        }
        best.map_or(position, |(candidate, _)| candidate)
    }

    fn is_within(&self, position: Vec3) -> bool {
        self.members.borrow().iter().any(|m| m.is_within(position))
    }

    fn references(&self, other: &dyn CameraBounds) -> bool {
        self.members
            .borrow()
            .iter()
            .any(|m| same_bounds(m.as_ref(), other) || m.references(other))
    }
}

impl std::fmt::Debug for CompositeBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeBounds")
            .field("members", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::BoxBounds;

    fn unit_box_at(x: f32) -> SharedBounds {
        Rc::new(BoxBounds::new(
            Vec3::new(x, 0.0, 0.0),
            Vec3::new(x + 1.0, 1.0, 1.0),
        ))
    }

    fn three_boxes() -> CompositeBounds {
        let composite = CompositeBounds::new();
        composite.add(unit_box_at(0.0)).unwrap();
        composite.add(unit_box_at(10.0)).unwrap();
        composite.add(unit_box_at(20.0)).unwrap();
        composite
    }

    #[test]
    fn within_is_the_union() {
        let composite = three_boxes();
        assert!(composite.is_within(Vec3::new(0.5, 0.5, 0.5)));
        assert!(composite.is_within(Vec3::new(20.5, 0.5, 0.5)));
        assert!(!composite.is_within(Vec3::new(5.0, 0.5, 0.5)));
    }

    #[test]
    fn outside_points_project_onto_nearest_member() {
        let composite = three_boxes();
        let p = Vec3::new(13.0, 0.5, 0.5);
        assert_eq!(composite.project(p), Vec3::new(11.0, 0.5, 0.5));
        let p = Vec3::new(17.0, 2.0, 0.5);
        assert_eq!(composite.project(p), Vec3::new(20.0, 1.0, 0.5));
    }

    #[test]
    fn inside_points_are_untouched() {
        let composite = three_boxes();
        let p = Vec3::new(10.25, 0.75, 0.1);
        assert_eq!(composite.project(p), p);
    }

    #[test]
    fn empty_composite_restricts_nothing() {
        let composite = CompositeBounds::new();
        let p = Vec3::new(-4.0, 9.0, 2.0);
        assert!(!composite.is_within(p));
        assert_eq!(composite.project(p), p);
    }

    #[test]
    fn ties_go_to_the_first_member() {
        let composite = CompositeBounds::new();
        composite.add(unit_box_at(0.0)).unwrap();
        composite.add(unit_box_at(4.0)).unwrap();
        let p = Vec3::new(2.5, 0.5, 0.5);
        assert_eq!(composite.project(p), Vec3::new(1.0, 0.5, 0.5));
    }

    #[test]
    fn self_insertion_fails() {
        let composite = Rc::new(CompositeBounds::new());
        let shared: SharedBounds = composite.clone();
        assert!(matches!(
            composite.add(shared),
            Err(CameraError::SelfInsertion)
        ));
        assert!(composite.is_empty());
    }

    #[test]
    fn cycles_through_nested_composites_fail() {
        let outer = Rc::new(CompositeBounds::new());
        let inner = Rc::new(CompositeBounds::new());
        outer.add(inner.clone()).unwrap();
        assert!(matches!(
            inner.add(outer.clone()),
            Err(CameraError::SelfInsertion)
        ));
    }

    #[test]
    fn duplicate_add_is_a_no_op_and_remove_reports_presence() {
        let composite = CompositeBounds::new();
        let member = unit_box_at(0.0);
        composite.add(member.clone()).unwrap();
        composite.add(member.clone()).unwrap();
        assert_eq!(composite.len(), 1);
        assert!(composite.remove(&member));
        assert!(!composite.remove(&member));
        assert!(composite.is_empty());
    }
}
