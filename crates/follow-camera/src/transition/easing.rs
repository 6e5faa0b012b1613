//! Easing functions for animations

/// Ease-in-out cubic function
///
/// Maps [0, 1] onto [0, 1], slow at both ends.
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ease_in_out_cubic() {
        // Start at 0
        assert!((ease_in_out_cubic(0.0) - 0.0).abs() < 1e-12);
        // End at 1
        assert!((ease_in_out_cubic(1.0) - 1.0).abs() < 1e-12);
        // Midpoint at 0.5
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-12);
        // Slow start
        assert!(ease_in_out_cubic(0.1) < 0.1);
        // Slow finish
        assert!(ease_in_out_cubic(0.9) > 0.9);
    }

    proptest! {
        #[test]
        fn ease_is_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(ease_in_out_cubic(lo) <= ease_in_out_cubic(hi) + 1e-12);
        }

        #[test]
        fn ease_stays_in_unit_range(t in 0.0f64..=1.0) {
            let e = ease_in_out_cubic(t);
            prop_assert!((-1e-12..=1.0 + 1e-12).contains(&e));
        }
    }
}
