//! Bearing and rotation helpers (degrees)

/// Normalize a bearing into [0, 360)
#[inline]
pub fn normalize_bearing(degrees: f64) -> f64 {
    let b = degrees.rem_euclid(360.0);
    // rem_euclid may round up to exactly 360.0 for tiny negative input
    if b >= 360.0 {
        0.0
    } else {
        b
    }
}

/// Signed shortest rotation from `previous` to `target`, in (-180, 180]
#[inline]
pub fn normalize_angle_delta(target: f64, previous: f64) -> f64 {
    let delta = normalize_bearing(target - previous);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

/// Clamp a rotation step to `max_per_frame` degrees in either direction
///
/// Non-finite steps (from degenerate bearings) become zero so the heading
/// holds instead of turning into NaN.
#[inline]
pub fn clamp_rotation(delta: f64, max_per_frame: f64) -> f64 {
    if !delta.is_finite() {
        return 0.0;
    }
    let limit = max_per_frame.abs();
    delta.clamp(-limit, limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_bearing() {
        assert!((normalize_bearing(0.0) - 0.0).abs() < 1e-12);
        assert!((normalize_bearing(360.0) - 0.0).abs() < 1e-12);
        assert!((normalize_bearing(-90.0) - 270.0).abs() < 1e-12);
        assert!((normalize_bearing(725.0) - 5.0).abs() < 1e-12);
        assert_eq!(normalize_bearing(-1e-17), 0.0);
    }

    #[test]
    fn test_delta_crosses_north() {
        // 350 -> 10 is a 20 degree right turn, not a 340 degree left spin
        assert!((normalize_angle_delta(10.0, 350.0) - 20.0).abs() < 1e-9);
        assert!((normalize_angle_delta(350.0, 10.0) + 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_delta_half_turn_is_positive() {
        assert!((normalize_angle_delta(180.0, 0.0) - 180.0).abs() < 1e-9);
        assert!((normalize_angle_delta(0.0, 180.0) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_rotation() {
        assert!((clamp_rotation(5.0, 2.0) - 2.0).abs() < 1e-12);
        assert!((clamp_rotation(-5.0, 2.0) + 2.0).abs() < 1e-12);
        assert!((clamp_rotation(1.5, 2.0) - 1.5).abs() < 1e-12);
        assert_eq!(clamp_rotation(f64::NAN, 2.0), 0.0);
        assert_eq!(clamp_rotation(f64::INFINITY, 2.0), 0.0);
    }

    proptest! {
        #[test]
        fn delta_is_in_half_open_range(target in -720.0f64..720.0, previous in -720.0f64..720.0) {
            let d = normalize_angle_delta(target, previous);
            prop_assert!(d > -180.0 && d <= 180.0, "delta {} out of range", d);
        }

        #[test]
        fn delta_takes_shorter_path(target in 0.0f64..360.0, previous in 0.0f64..360.0) {
            let d = normalize_angle_delta(target, previous);
            let raw = (target - previous).abs();
            let shorter = raw.min(360.0 - raw);
            prop_assert!((d.abs() - shorter).abs() < 1e-9);
            prop_assert!((normalize_bearing(previous + d) - target).abs() < 1e-6
                || (normalize_bearing(previous + d) - target).abs() > 360.0 - 1e-6);
        }

        #[test]
        fn clamped_rotation_is_bounded(delta in -1000.0f64..1000.0, max in 0.1f64..10.0) {
            prop_assert!(clamp_rotation(delta, max).abs() <= max);
        }
    }
}
