use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::CameraAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping camera actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `MoveForward` → `"KeyW"`).
    pub bindings: HashMap<CameraAction, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (CameraAction::MoveForward, "KeyW".into()),
            (CameraAction::MoveBackward, "KeyS".into()),
            (CameraAction::MoveLeft, "KeyA".into()),
            (CameraAction::MoveRight, "KeyD".into()),
            (CameraAction::Orbit, "ShiftLeft".into()),
            (CameraAction::Cancel, "Escape".into()),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action bound to a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<CameraAction> {
        self.bindings
            .iter()
            .find(|(_, bound)| bound.as_str() == key)
            .map(|(action, _)| *action)
    }

    /// Key bound to `action`, if any.
    #[must_use]
    pub fn key_for(&self, action: CameraAction) -> Option<&str> {
        self.bindings.get(&action).map(String::as_str)
    }

    /// Bind `action` to `key`, replacing its previous key.
    pub fn bind(&mut self, action: CameraAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
    }
}
