//! Crate-level error types.

use std::fmt;

/// Errors produced by the tactical camera crate.
///
/// Only configuration mistakes and settings I/O surface here. Expected
/// absences at runtime (a ray that hits nothing, a missing input provider)
/// are handled by fallback policies inside the engine and never become
/// errors.
#[derive(Debug)]
pub enum CameraError {
    /// A fade time window was zero, negative, or not finite.
    InvalidFadeTime(f32),
    /// A composite bounds would end up containing itself, directly or
    /// through a nested composite.
    SelfInsertion,
    /// Generic I/O failure while reading or writing settings.
    Io(std::io::Error),
    /// TOML settings parsing/serialization failure.
    SettingsParse(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFadeTime(time) => {
                write!(f, "fade time must be larger than 0, got {time}")
            }
            Self::SelfInsertion => {
                write!(f, "composite bounds cannot contain itself")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::SettingsParse(msg) => {
                write!(f, "settings parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for CameraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CameraError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_offending_fade_time() {
        let msg = CameraError::InvalidFadeTime(-0.5).to_string();
        assert!(msg.contains("-0.5"), "unexpected message: {msg}");
    }

    #[test]
    fn io_errors_expose_their_source() {
        use std::error::Error;
        let err = CameraError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing preset",
        ));
        assert!(err.source().is_some());
        assert!(CameraError::SelfInsertion.source().is_none());
    }
}
