//! Tactical camera rig.
//!
//! [`TacticalCamera`] drives a [`Camera`] pose from fading input axes,
//! keeping it within world-derived height and tilt ranges.

/// Orchestrating engine and its per-tick update.
pub mod controller;
/// Camera pose, projection and angle helpers.
pub mod core;
/// Decaying input axes.
pub mod fade;
/// Resumable move-to-target glide.
pub mod move_to_target;
/// Operating height, tilt and field-of-view ranges.
pub(crate) mod ranges;

pub use controller::{CameraEvent, FadeAxis, TacticalCamera};
pub use core::Camera;
pub use fade::FadeState;
pub use move_to_target::{MoveToTarget, Progress};
