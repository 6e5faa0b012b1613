//! Timing module
//!
//! Provides easing curves and the frame-rate gate used by the animator.

mod easing;
mod frame_gate;

pub use easing::ease_in_out_cubic;
pub use frame_gate::FrameGate;

/// Progress of a fixed-duration animation, clamped to [0, 1]
#[inline]
pub fn progress_at(start_ms: f64, now_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    ((now_ms - start_ms) / duration_ms).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_at() {
        assert!((progress_at(0.0, 0.0, 10_000.0) - 0.0).abs() < 1e-12);
        assert!((progress_at(0.0, 2_500.0, 10_000.0) - 0.25).abs() < 1e-12);
        assert!((progress_at(0.0, 10_000.0, 10_000.0) - 1.0).abs() < 1e-12);
        assert!((progress_at(0.0, 60_000.0, 10_000.0) - 1.0).abs() < 1e-12);
        // Timestamps before start never go negative
        assert!((progress_at(500.0, 0.0, 10_000.0) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_progress_at_zero_duration() {
        assert_eq!(progress_at(0.0, 0.0, 0.0), 1.0);
    }
}
