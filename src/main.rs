//! Headless tactical camera demo.
//!
//! Flies the camera over a small static scene with scripted input and logs
//! the pose. Run with `RUST_LOG=info` (or `debug` for engine events); an
//! optional TOML preset path may be given as the first argument.

use std::path::Path;

use glam::{Vec2, Vec3};
use tactical_camera::bounds::BoxBounds;
use tactical_camera::camera::{Camera, TacticalCamera};
use tactical_camera::input::{InputEvent, InputProcessor, MouseButton};
use tactical_camera::options::Options;
use tactical_camera::util::frame_clock::FrameTime;
use tactical_camera::world::StaticWorld;

const FRAMES: u32 = 360;
const DT: f32 = 1.0 / 60.0;
const VIEWPORT: (u32, u32) = (1280, 720);

fn scene() -> StaticWorld {
    StaticWorld::new()
        .with_ground(0.0)
        .with_box(Vec3::new(-8.0, 0.0, -30.0), Vec3::new(8.0, 6.0, -20.0))
        .with_box(Vec3::new(20.0, 0.0, -10.0), Vec3::new(30.0, 12.0, 10.0))
        // Overhang the camera can fly under
        .with_box(Vec3::new(-40.0, 14.0, -40.0), Vec3::new(-20.0, 16.0, -20.0))
}

/// Events injected before `frame` is ticked.
fn script(frame: u32) -> Vec<InputEvent> {
    let key = |key: &str, pressed| InputEvent::Key {
        key: key.to_owned(),
        pressed,
    };
    let button = |button, pressed| InputEvent::MouseButton { button, pressed };
    let center = InputEvent::CursorMoved {
        x: VIEWPORT.0 as f32 / 2.0,
        y: VIEWPORT.1 as f32 / 2.0,
    };

    match frame {
        0 => vec![center, key("KeyW", true)],
        60 => vec![key("KeyW", false), button(MouseButton::Right, true)],
        61..=119 => vec![InputEvent::MouseMotion { dx: 6.0, dy: -2.0 }],
        120 => vec![button(MouseButton::Right, false)],
        150 | 152 => vec![button(MouseButton::Left, true)],
        151 | 153 => vec![button(MouseButton::Left, false)],
        200..=239 => vec![InputEvent::Scroll { delta: -0.02 }],
        260 => vec![key("KeyA", true), key("ShiftLeft", true)],
        300 => vec![key("KeyA", false), key("ShiftLeft", false)],
        _ => Vec::new(),
    }
}

fn load_options() -> Options {
    match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path)).unwrap_or_else(|e| {
            log::warn!("using default options: {e}");
            Options::default()
        }),
        None => Options::default(),
    }
}

fn main() {
    env_logger::init();

    let options = load_options();
    let world = scene();
    let mut input = InputProcessor::with_options(options.input);
    let mut engine = TacticalCamera::new(Camera::looking(
        Vec3::new(0.0, 10.0, 20.0),
        0.0,
        40.0,
    ));
    if let Err(e) = engine.set_settings(options.camera) {
        log::error!("invalid camera settings: {e}");
        return;
    }
    engine.resize(VIEWPORT.0, VIEWPORT.1);
    engine.set_bounds(Some(std::rc::Rc::new(BoxBounds::new(
        Vec3::new(-60.0, -10.0, -60.0),
        Vec3::new(60.0, 40.0, 60.0),
    ))));

    let viewport = Vec2::new(VIEWPORT.0 as f32, VIEWPORT.1 as f32);
    for frame in 0..FRAMES {
        for event in script(frame) {
            input.handle_event(event);
        }
        let snapshot = input.snapshot(DT, viewport);
        for event in engine.tick(Some(&snapshot), &world, FrameTime::fixed(DT))
        {
            log::info!("frame {frame}: {event:?}");
        }

        if frame % 30 == 0 {
            let camera = engine.camera();
            log::info!(
                "frame {frame}: position {:.2} heading {:.1} tilt {:.1} fov {:.1} height range {}",
                camera.position,
                camera.heading(),
                camera.tilt_angle(),
                camera.fovy,
                engine.operating_height_range(),
            );
        }
    }
}
