//! Frame-rate ceiling

/// Admits frames no more often than a minimum interval
///
/// A rejected frame is not lost: the caller reschedules and tries again on
/// the next host frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameGate {
    min_interval_ms: f64,
    last_ms: f64,
}

impl FrameGate {
    /// Create a gate whose reference point is `start_ms`
    pub fn new(min_interval_ms: f64, start_ms: f64) -> Self {
        Self {
            min_interval_ms: min_interval_ms.max(0.0),
            last_ms: start_ms,
        }
    }

    /// Check whether a frame at `now_ms` may be processed, and record it if so
    pub fn admit(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_ms < self.min_interval_ms {
            return false;
        }
        self.last_ms = now_ms;
        true
    }

    /// Milliseconds since the last admitted frame
    #[inline]
    pub fn gap(&self, now_ms: f64) -> f64 {
        now_ms - self.last_ms
    }

    /// Minimum interval between admitted frames
    #[inline]
    pub fn min_interval_ms(&self) -> f64 {
        self.min_interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_defers_early_frames() {
        let mut gate = FrameGate::new(16.0, 0.0);
        assert!(!gate.admit(8.0));
        assert!(!gate.admit(15.9));
        assert!(gate.admit(16.0));
        assert!(!gate.admit(20.0));
        assert!(gate.admit(32.0));
        assert!(gate.gap(32.0).abs() < 1e-12);
    }

    #[test]
    fn test_gate_rejects_time_going_backwards() {
        let mut gate = FrameGate::new(16.0, 100.0);
        assert!(!gate.admit(50.0));
        assert!(gate.gap(100.0).abs() < 1e-12);
    }

    #[test]
    fn test_gate_zero_interval_admits_everything() {
        let mut gate = FrameGate::new(0.0, 0.0);
        assert!(gate.admit(0.0));
        assert!(gate.admit(0.0));
        assert!(gate.admit(1.0));
    }

    #[test]
    fn test_gate_gap() {
        let gate = FrameGate::new(16.0, 100.0);
        assert!((gate.gap(350.0) - 250.0).abs() < 1e-12);
    }
}
