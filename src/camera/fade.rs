//! Fading input axes.
//!
//! A [`FadeState`] turns bursts of directional input into a signal that
//! lingers and decays over a fixed window, shaped by a response curve.

use crate::error::CameraError;
use crate::util::curve::ResponseCurve;

/// One continuously decaying input axis.
#[derive(Debug, Clone)]
pub struct FadeState {
    fade_time: f32,
    remaining: f32,
    peak: f32,
    curve: ResponseCurve,
}

impl FadeState {
    /// Inert state with a linear 1→0 fade over 0.2 seconds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fade_time: 0.2,
            remaining: 0.0,
            peak: 0.0,
            curve: ResponseCurve::linear(1.0, 0.0),
        }
    }

    /// Bind a fade window and curve, leaving the state inert.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::InvalidFadeTime`] when `fade_time` is not a
    /// positive, finite number of seconds.
    pub fn configure(
        &mut self,
        fade_time: f32,
        curve: ResponseCurve,
    ) -> Result<(), CameraError> {
        if !fade_time.is_finite() || fade_time <= 0.0 {
            return Err(CameraError::InvalidFadeTime(fade_time));
        }
        self.fade_time = fade_time;
        self.curve = curve;
        self.remaining = 0.0;
        self.peak = 0.0;
        Ok(())
    }

    /// Length of the fade window in seconds.
    #[must_use]
    pub fn fade_time(&self) -> f32 {
        self.fade_time
    }

    /// Seconds left before the signal reaches zero.
    #[must_use]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Signed magnitude set by the last [`set_peak`](Self::set_peak).
    #[must_use]
    pub fn peak(&self) -> f32 {
        self.peak
    }

    /// Current signal strength.
    #[must_use]
    pub fn value(&self) -> f32 {
        let t = 1.0 - self.remaining / self.fade_time;
        self.curve.evaluate(t) * self.peak
    }

    /// Whether the signal is still decaying.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Restart the fade at full strength with a new peak.
    pub fn set_peak(&mut self, value: f32) {
        self.peak = value;
        self.remaining = self.fade_time;
    }

    /// Silence the signal immediately.
    pub fn reset(&mut self) {
        self.remaining = 0.0;
    }

    /// Advance the fade by `dt` seconds and return the new value.
    pub fn tick(&mut self, dt: f32) -> f32 {
        if self.remaining == 0.0 {
            return 0.0;
        }
        self.remaining = (self.remaining - dt).clamp(0.0, self.fade_time);
        self.value()
    }

    /// Feed one frame of raw input.
    ///
    /// Input within `epsilon` of zero lets the fade continue. Otherwise the
    /// new input takes over when it points the other way than the current
    /// signal (an inert signal has no direction) or is stronger; a weaker
    /// push in the same direction is ignored and the fade continues.
    pub fn apply_input(&mut self, raw: f32, epsilon: f32, dt: f32) -> f32 {
        if raw.abs() <= epsilon {
            return self.tick(dt);
        }

        let current = if self.is_active() { self.value() } else { 0.0 };
        let reverses = current == 0.0 || raw.signum() != current.signum();
        if reverses || raw.abs() > current.abs() {
            self.set_peak(raw);
            self.value()
        } else {
            self.tick(dt)
        }
    }
}

impl Default for FadeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn linear_state(fade_time: f32) -> FadeState {
        let mut state = FadeState::new();
        state
            .configure(fade_time, ResponseCurve::linear(1.0, 0.0))
            .unwrap();
        state
    }

    #[test]
    fn rejects_non_positive_fade_time() {
        let mut state = FadeState::new();
        assert!(matches!(
            state.configure(0.0, ResponseCurve::default()),
            Err(CameraError::InvalidFadeTime(_))
        ));
        assert!(state.configure(-1.0, ResponseCurve::default()).is_err());
        assert!(state.configure(f32::NAN, ResponseCurve::default()).is_err());
    }

    #[test]
    fn configure_leaves_state_inert() {
        let mut state = linear_state(0.5);
        state.set_peak(1.0);
        state.configure(0.3, ResponseCurve::linear(1.0, 0.0)).unwrap();
        assert!(!state.is_active());
        assert_eq!(state.value(), 0.0);
    }

    #[test]
    fn decays_to_zero_after_window() {
        let mut state = linear_state(0.2);
        state.set_peak(0.8);
        assert!((state.value() - 0.8).abs() < 1e-6);

        let mut elapsed = 0.0;
        while elapsed < 0.2 + DT {
            let _ = state.tick(DT);
            elapsed += DT;
        }
        assert!(state.value().abs() < 1e-4);
        assert!(!state.is_active());
        assert_eq!(state.tick(DT), 0.0);
    }

    #[test]
    fn halfway_value_follows_curve() {
        let mut state = linear_state(1.0);
        state.set_peak(-2.0);
        let v = state.tick(0.5);
        assert!((v + 1.0).abs() < 1e-5);
    }

    #[test]
    fn reset_silences_immediately() {
        let mut state = linear_state(1.0);
        state.set_peak(1.0);
        state.reset();
        assert!(!state.is_active());
        assert_eq!(state.tick(DT), 0.0);
    }

    #[test]
    fn reversal_overrides_decay() {
        let mut state = linear_state(1.0);
        state.set_peak(1.0);
        let _ = state.tick(0.5);
        let v = state.apply_input(-0.3, 0.001, DT);
        assert!((v + 0.3).abs() < 1e-6);
        assert_eq!(state.remaining(), 1.0);
    }

    #[test]
    fn stronger_input_overrides_decay() {
        let mut state = linear_state(1.0);
        state.set_peak(1.0);
        let _ = state.tick(0.5); // value 0.5
        let v = state.apply_input(0.7, 0.001, DT);
        assert!((v - 0.7).abs() < 1e-6);
    }

    #[test]
    fn weaker_same_direction_input_is_ignored() {
        let mut state = linear_state(1.0);
        state.set_peak(1.0);
        let _ = state.tick(0.5); // value 0.5
        let v = state.apply_input(0.2, 0.001, 0.1);
        assert!((v - 0.4).abs() < 1e-5);
        assert_eq!(state.peak(), 1.0);
    }

    #[test]
    fn inert_state_accepts_any_input() {
        let mut state = linear_state(1.0);
        let v = state.apply_input(0.1, 0.001, DT);
        assert!((v - 0.1).abs() < 1e-6);
        assert!(state.is_active());
    }

    #[test]
    fn input_within_epsilon_only_ticks() {
        let mut state = linear_state(1.0);
        state.set_peak(1.0);
        let v = state.apply_input(0.0005, 0.001, 0.25);
        assert!((v - 0.75).abs() < 1e-5);
    }
}
