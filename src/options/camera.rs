use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{
    FieldOfViewSettings, InteractionSettings, MovementSettings,
    RotationSettings, TiltSettings,
};
use crate::error::CameraError;
use crate::util::value_range::ValueRange;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Everything that parameterizes the camera engine.
///
/// The engine keeps its own copy; changes take effect through
/// [`TacticalCamera::set_settings`](crate::camera::TacticalCamera::set_settings).
pub struct CameraSettings {
    /// Input magnitudes at or below this count as no input.
    #[schemars(title = "Epsilon", range(min = 0.0, max = 0.1), extend("step" = 0.001))]
    pub epsilon: f32,
    /// Run on wall-clock time regardless of the game's time scale.
    #[schemars(title = "Ignore Time Scale")]
    pub ignore_time_scale: bool,
    /// Heights the camera may ever occupy.
    #[schemars(title = "Absolute Height Range")]
    pub absolute_height_range: ValueRange,
    /// Movement speeds and fading.
    pub movement: MovementSettings,
    /// Rotation speed and fading.
    pub rotation: RotationSettings,
    /// Height-dependent tilt limits.
    pub tilt: TiltSettings,
    /// Height-dependent field of view.
    pub field_of_view: FieldOfViewSettings,
    /// World ray query parameters.
    pub interaction: InteractionSettings,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            epsilon: 0.001,
            ignore_time_scale: false,
            absolute_height_range: ValueRange::new(0.0, 20.0),
            movement: MovementSettings::default(),
            rotation: RotationSettings::default(),
            tilt: TiltSettings::default(),
            field_of_view: FieldOfViewSettings::default(),
            interaction: InteractionSettings::default(),
        }
    }
}

impl CameraSettings {
    /// Bring hand-edited values back within their invariants: tilt ranges
    /// clamped to `[-90, 90]`, curve keys sorted, and negative distances
    /// raised to zero.
    pub fn sanitize(&mut self) {
        self.tilt.clamp_ranges();
        self.movement.speed_transition.sort_keys();
        self.movement.fade_curve.sort_keys();
        self.rotation.fade_curve.sort_keys();
        self.tilt.transition.sort_keys();
        self.field_of_view.transition.sort_keys();
        self.epsilon = self.epsilon.max(0.0);
        self.interaction.distance = self.interaction.distance.max(0.0);
        self.interaction.bubble_radius =
            self.interaction.bubble_radius.max(0.0);
    }

    /// Reject values that cannot be sanitized away.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::InvalidFadeTime`] when a fade window is not
    /// positive.
    pub fn validate(&self) -> Result<(), CameraError> {
        for fade_time in [self.movement.fade_time, self.rotation.fade_time] {
            if !fade_time.is_finite() || fade_time <= 0.0 {
                return Err(CameraError::InvalidFadeTime(fade_time));
            }
        }
        Ok(())
    }

    /// Movement fade-out curve at `t`.
    #[must_use]
    pub fn evaluate_movement_fade_out(&self, t: f32) -> f32 {
        self.movement.fade_curve.evaluate(t)
    }

    /// Rotation fade-out curve at `t`.
    #[must_use]
    pub fn evaluate_rotation_fade_out(&self, t: f32) -> f32 {
        self.rotation.fade_curve.evaluate(t)
    }

    /// Speed transition at relative height `t`.
    #[must_use]
    pub fn evaluate_movement_transition(&self, t: f32) -> f32 {
        self.movement.speed_transition.evaluate(t)
    }

    /// Tilt range transition at relative height `t`.
    #[must_use]
    pub fn evaluate_tilt_transition(&self, t: f32) -> f32 {
        self.tilt.transition.evaluate(t)
    }

    /// Field of view transition at relative height `t`.
    #[must_use]
    pub fn evaluate_field_of_view_transition(&self, t: f32) -> f32 {
        self.field_of_view.transition.evaluate(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::curve::{Keyframe, ResponseCurve};

    #[test]
    fn defaults_match_documented_values() {
        let settings = CameraSettings::default();
        assert_eq!(settings.absolute_height_range, ValueRange::new(0.0, 20.0));
        assert_eq!(settings.movement.speed_range, ValueRange::new(5.0, 20.0));
        assert_eq!(settings.rotation.max_speed, 180.0);
        assert_eq!(settings.tilt.range_low, ValueRange::new(-10.0, 30.0));
        assert_eq!(settings.field_of_view.range, ValueRange::new(45.0, 80.0));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn sanitize_clamps_tilt_ranges() {
        let mut settings = CameraSettings::default();
        settings.tilt.range_low = ValueRange::new(-120.0, 30.0);
        settings.tilt.range_high = ValueRange::new(10.0, 135.0);
        settings.sanitize();
        assert_eq!(settings.tilt.range_low, ValueRange::new(-90.0, 30.0));
        assert_eq!(settings.tilt.range_high, ValueRange::new(10.0, 90.0));
    }

    #[test]
    fn sanitize_sorts_curve_keys() {
        let mut settings = CameraSettings::default();
        settings.tilt.transition = ResponseCurve::Keyframes(vec![
            Keyframe::new(1.0, 1.0),
            Keyframe::new(0.0, 0.0),
        ]);
        settings.sanitize();
        assert!((settings.evaluate_tilt_transition(0.25) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn validate_rejects_zero_fade_time() {
        let mut settings = CameraSettings::default();
        settings.rotation.fade_time = 0.0;
        assert!(matches!(
            settings.validate(),
            Err(CameraError::InvalidFadeTime(_))
        ));
    }

    #[test]
    fn evaluators_use_their_curves() {
        let settings = CameraSettings::default();
        assert!((settings.evaluate_movement_fade_out(0.0) - 1.0).abs() < 1e-6);
        assert!(settings.evaluate_rotation_fade_out(1.0).abs() < 1e-6);
        assert!((settings.evaluate_movement_transition(0.5) - 0.5).abs() < 1e-6);
        assert!(
            (settings.evaluate_field_of_view_transition(1.0) - 1.0).abs()
                < 1e-6
        );
    }
}
