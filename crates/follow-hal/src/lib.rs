//! Host abstraction for the route follow camera
//!
//! This crate defines the [`FrameHost`] trait that lets the camera animator
//! run against different schedulers (the browser's frame loop, a native
//! render thread, or a virtual clock in tests) by abstracting time and
//! callback scheduling.
//!
//! # Platform Implementations
//!
//! - **WASM**: `requestAnimationFrame` for frames, `setTimeout` for delays, `performance.now()` for time
//! - **Tests**: `follow-hal-mock` with a manually advanced clock

#![no_std]

use core::fmt;

/// Host trait driving the animator
///
/// The host owns the single outstanding callback. Whenever a scheduled
/// callback fires, the host calls back into the animator's `tick` with the
/// current timestamp. Exactly one callback is expected to be pending at a
/// time; the animator re-submits at the end of each processed tick.
pub trait FrameHost {
    /// Handle to a scheduled callback (frame request id or timer id)
    type Handle: Copy + Eq + fmt::Debug;

    // === Time ===

    /// Current monotonic time in milliseconds
    ///
    /// On WASM: `performance.now()`
    fn now_ms(&self) -> f64;

    // === Scheduling ===

    /// Request a callback on the next available frame
    ///
    /// # Returns
    /// * `Ok(Handle)` - Callback registered
    /// * `Err(HostError::SchedulerUnavailable)` - No frame loop is available
    fn request_frame(&self) -> Result<Self::Handle, HostError>;

    /// Request a one-shot callback after `delay_ms` milliseconds
    ///
    /// # Returns
    /// * `Ok(Handle)` - Timer registered
    /// * `Err(HostError::InvalidDelay)` - Negative or non-finite delay
    fn request_timeout(&self, delay_ms: f64) -> Result<Self::Handle, HostError>;

    /// Cancel a pending callback
    ///
    /// Cancelling a handle that already fired is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

/// Host errors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostError {
    /// No frame loop or timer facility is available
    SchedulerUnavailable,
    /// The host rejected the callback registration
    RegistrationFailed,
    /// Delay was negative or not finite
    InvalidDelay,
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::SchedulerUnavailable => f.write_str("frame scheduler unavailable"),
            HostError::RegistrationFailed => f.write_str("callback registration failed"),
            HostError::InvalidDelay => f.write_str("invalid timeout delay"),
        }
    }
}

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
impl std::error::Error for HostError {}

/// Kind of callback a handle refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallbackKind {
    /// Per-frame callback
    Frame,
    /// One-shot timer
    Timeout,
}

/// A simple callback handle for hosts that use numeric IDs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NumericHandle(pub u32);

impl NumericHandle {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

/// Validate a timeout delay before handing it to a host
pub fn check_delay(delay_ms: f64) -> Result<f64, HostError> {
    if delay_ms.is_finite() && delay_ms >= 0.0 {
        Ok(delay_ms)
    } else {
        Err(HostError::InvalidDelay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_handle() {
        let handle = NumericHandle::new(7);
        assert_eq!(handle.id(), 7);
        assert_eq!(handle, NumericHandle(7));
    }

    #[test]
    fn test_check_delay() {
        assert_eq!(check_delay(0.0), Ok(0.0));
        assert_eq!(check_delay(1000.0), Ok(1000.0));
        assert_eq!(check_delay(-1.0), Err(HostError::InvalidDelay));
        assert_eq!(check_delay(f64::NAN), Err(HostError::InvalidDelay));
        assert_eq!(check_delay(f64::INFINITY), Err(HostError::InvalidDelay));
    }
}
