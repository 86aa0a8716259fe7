// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Tactical camera rig for strategy-style 3D views.
//!
//! A [`camera::TacticalCamera`] moves a [`camera::Camera`] every frame from
//! fading input signals: forward, sideways and vertical movement, rotation
//! about world up (in place or orbiting a picked point) and tilt. Height is
//! kept between the ground and any ceiling found by raycasting the world,
//! tilt limits and field of view follow the height smoothly, and optional
//! [`bounds`] have the final say on position.
//!
//! # Key entry points
//!
//! - [`camera::TacticalCamera`] - the per-frame engine
//! - [`options::Options`] - camera settings and input mapping, loadable
//!   from TOML presets
//! - [`input::InputProcessor`] - turns window events into per-frame
//!   [`input::InputSnapshot`]s
//! - [`world::WorldQuery`] - the raycast service the engine needs from the
//!   host, with [`world::StaticWorld`] as a simple implementation
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use tactical_camera::camera::{Camera, TacticalCamera};
//! use tactical_camera::input::InputSnapshot;
//! use tactical_camera::options::CameraSettings;
//! use tactical_camera::util::frame_clock::FrameTime;
//! use tactical_camera::world::StaticWorld;
//!
//! let world = StaticWorld::new().with_ground(0.0);
//! let mut engine = TacticalCamera::new(Camera::default());
//! engine.set_settings(CameraSettings::default())?;
//!
//! let input = InputSnapshot { move_forward: 1.0, ..Default::default() };
//! let start = engine.camera().position;
//! let _events = engine.tick(Some(&input), &world, FrameTime::fixed(1.0 / 60.0));
//! assert!(engine.camera().position.z < start.z);
//! # Ok::<(), tactical_camera::error::CameraError>(())
//! ```

pub mod bounds;
pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;
pub mod world;
