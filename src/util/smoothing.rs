//! Critically damped smoothing.
//!
//! `smooth_damp` moves a value toward a target like a critically damped
//! spring, carrying a velocity between calls. It uses the rational
//! approximation of `exp(-x)` from Game Programming Gems 4 (ch. 1.10), so it
//! stays stable for large steps and never overshoots the target.

/// Smoothing time used when the camera tracks height-dependent targets
/// (tilt range, field of view). In seconds.
pub const TRACKING_SMOOTH_TIME: f32 = 0.2;

/// Smallest smoothing time accepted; shorter values are raised to this.
const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Move `current` toward `target` over roughly `smooth_time` seconds.
///
/// `velocity` is read and updated in place. A non-positive `dt` returns
/// `current` untouched.
#[must_use]
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // Clamp overshoot
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }

    output
}

/// [`smooth_damp`] for angles in degrees, taking the shortest way around.
#[must_use]
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let target = current + delta_angle(current, target);
    smooth_damp(current, target, velocity, smooth_time, dt)
}

/// Shortest signed difference from `current` to `target`, in degrees, in
/// `(-180, 180]`.
#[must_use]
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let mut delta = (target - current).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_without_overshoot() {
        let mut value = 0.0;
        let mut velocity = 0.0;
        let mut previous = value;
        for _ in 0..240 {
            value = smooth_damp(value, 10.0, &mut velocity, 0.2, 1.0 / 60.0);
            assert!(value <= 10.0);
            assert!(value >= previous);
            previous = value;
        }
        assert!((value - 10.0).abs() < 1e-3);
    }

    #[test]
    fn approaches_from_above() {
        let mut value = 80.0;
        let mut velocity = 0.0;
        for _ in 0..240 {
            value = smooth_damp(value, 45.0, &mut velocity, 0.2, 1.0 / 60.0);
            assert!(value >= 45.0);
        }
        assert!((value - 45.0).abs() < 1e-3);
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut velocity = 3.0;
        assert_eq!(smooth_damp(1.0, 5.0, &mut velocity, 0.2, 0.0), 1.0);
        assert_eq!(velocity, 3.0);
    }

    #[test]
    fn delta_angle_wraps() {
        assert!((delta_angle(170.0, -170.0) - 20.0).abs() < 1e-4);
        assert!((delta_angle(-170.0, 170.0) + 20.0).abs() < 1e-4);
        assert!((delta_angle(10.0, 30.0) - 20.0).abs() < 1e-4);
    }

    #[test]
    fn angle_variant_takes_short_way() {
        let mut velocity = 0.0;
        let next =
            smooth_damp_angle(170.0, -170.0, &mut velocity, 0.2, 1.0 / 60.0);
        assert!(next > 170.0);
    }
}
