//! Shared utilities for the camera engine.
//!
//! Numeric ranges, response curves and easing, critically damped
//! smoothing, and frame timing.

pub mod curve;
pub mod easing;
pub mod frame_clock;
pub mod smoothing;
pub mod value_range;
