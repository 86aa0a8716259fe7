//! Camera and input options with TOML preset support.
//!
//! All tweakable settings (movement, rotation, tilt, field of view, world
//! interaction, input mapping) are consolidated here. Options serialize
//! to/from TOML presets; every section uses `#[serde(default)]` so partial
//! files only override what they mention.

mod camera;
mod field_of_view;
mod input;
mod interaction;
mod keybindings;
mod movement;
mod rotation;
mod tilt;

use std::path::Path;

pub use camera::CameraSettings;
pub use field_of_view::FieldOfViewSettings;
pub use input::InputOptions;
pub use interaction::InteractionSettings;
pub use keybindings::KeybindingOptions;
pub use movement::MovementSettings;
pub use rotation::RotationSettings;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use tilt::{TiltSettings, TILT_LIMIT};

use crate::error::CameraError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera engine parameters.
    pub camera: CameraSettings,
    /// Input mapping for the bundled input processor.
    pub input: InputOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults and the
    /// camera settings come back sanitized.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CameraError> {
        let content = std::fs::read_to_string(path).map_err(CameraError::Io)?;
        let mut options: Self = toml::from_str(&content)
            .map_err(|e| CameraError::SettingsParse(e.to_string()))?;
        options.camera.sanitize();
        log::info!("loaded camera options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`CameraError`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), CameraError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CameraError::SettingsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CameraError::Io)?;
        }
        std::fs::write(path, content).map_err(CameraError::Io)?;
        log::info!("saved camera options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
