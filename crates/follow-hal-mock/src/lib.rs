//! Mock frame host for testing the route follow camera
//!
//! This provides a mock implementation of the [`FrameHost`] trait with a
//! virtual clock, so animator runs can be replayed deterministically
//! without a browser.
//!
//! The host is cheaply cloneable: the animator owns one clone while the test
//! keeps another to advance time and fire callbacks.

#![no_std]
extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use follow_hal::{check_delay, CallbackKind, FrameHost, HostError, NumericHandle};

/// Default virtual display refresh period (~60 Hz)
pub const DEFAULT_FRAME_PERIOD_MS: f64 = 16.0;

/// Mock host for unit and integration tests
#[derive(Clone)]
pub struct MockHost {
    inner: Rc<RefCell<MockState>>,
}

struct MockState {
    /// Virtual time in milliseconds
    now_ms: f64,
    /// Simulated display refresh period
    frame_period_ms: f64,
    /// Next handle id to assign
    next_id: u32,
    /// Callbacks waiting to fire
    pending: BTreeMap<NumericHandle, Pending>,
    /// Handles cancelled before they fired
    cancelled: Vec<NumericHandle>,
    /// Total frame requests seen
    frame_requests: usize,
    /// Total timeout requests seen
    timeout_requests: usize,
    /// Reject every registration
    fail_requests: bool,
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    kind: CallbackKind,
    due_ms: f64,
}

/// A callback that fired on the virtual clock
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fired {
    pub handle: NumericHandle,
    pub kind: CallbackKind,
    pub timestamp_ms: f64,
}

impl MockHost {
    /// Create a mock host at time zero with a 16ms frame period
    pub fn new() -> Self {
        Self::with_time(0.0)
    }

    /// Create a mock host with a specific starting time
    pub fn with_time(now_ms: f64) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MockState {
                now_ms,
                frame_period_ms: DEFAULT_FRAME_PERIOD_MS,
                next_id: 1,
                pending: BTreeMap::new(),
                cancelled: Vec::new(),
                frame_requests: 0,
                timeout_requests: 0,
                fail_requests: false,
            })),
        }
    }

    /// Set the simulated display refresh period
    pub fn with_frame_period(self, period_ms: f64) -> Self {
        self.inner.borrow_mut().frame_period_ms = period_ms;
        self
    }

    /// Advance the virtual clock without firing anything
    pub fn advance_time(&self, ms: f64) {
        self.inner.borrow_mut().now_ms += ms;
    }

    /// Set the virtual clock
    pub fn set_time(&self, now_ms: f64) {
        self.inner.borrow_mut().now_ms = now_ms;
    }

    /// Make every following registration fail (or succeed again)
    pub fn set_fail_requests(&self, fail: bool) {
        self.inner.borrow_mut().fail_requests = fail;
    }

    /// Number of callbacks waiting to fire
    pub fn pending_count(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Check whether a callback of the given kind is pending
    pub fn has_pending(&self, kind: CallbackKind) -> bool {
        self.inner.borrow().pending.values().any(|p| p.kind == kind)
    }

    /// Number of handles cancelled before firing
    pub fn cancelled_count(&self) -> usize {
        self.inner.borrow().cancelled.len()
    }

    /// Total frame requests seen
    pub fn frame_requests(&self) -> usize {
        self.inner.borrow().frame_requests
    }

    /// Total timeout requests seen
    pub fn timeout_requests(&self) -> usize {
        self.inner.borrow().timeout_requests
    }

    /// Fire the earliest pending callback
    ///
    /// The virtual clock jumps to the callback's due time (frames are due one
    /// frame period after they were requested). Returns `None` when nothing
    /// is pending.
    pub fn fire_next(&self) -> Option<Fired> {
        let mut state = self.inner.borrow_mut();
        let (handle, pending) = state
            .pending
            .iter()
            .min_by(|a, b| a.1.due_ms.total_cmp(&b.1.due_ms).then(a.0.cmp(b.0)))
            .map(|(h, p)| (*h, *p))?;
        state.pending.remove(&handle);
        if pending.due_ms > state.now_ms {
            state.now_ms = pending.due_ms;
        }
        Some(Fired {
            handle,
            kind: pending.kind,
            timestamp_ms: state.now_ms,
        })
    }

    fn register(&self, kind: CallbackKind, delay_ms: f64) -> Result<NumericHandle, HostError> {
        let mut state = self.inner.borrow_mut();
        if state.fail_requests {
            return Err(HostError::RegistrationFailed);
        }
        let handle = NumericHandle::new(state.next_id);
        state.next_id += 1;
        let due_ms = state.now_ms + delay_ms;
        state.pending.insert(handle, Pending { kind, due_ms });
        match kind {
            CallbackKind::Frame => state.frame_requests += 1,
            CallbackKind::Timeout => state.timeout_requests += 1,
        }
        Ok(handle)
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameHost for MockHost {
    type Handle = NumericHandle;

    fn now_ms(&self) -> f64 {
        self.inner.borrow().now_ms
    }

    fn request_frame(&self) -> Result<Self::Handle, HostError> {
        let period = self.inner.borrow().frame_period_ms;
        self.register(CallbackKind::Frame, period)
    }

    fn request_timeout(&self, delay_ms: f64) -> Result<Self::Handle, HostError> {
        let delay_ms = check_delay(delay_ms)?;
        self.register(CallbackKind::Timeout, delay_ms)
    }

    fn cancel(&self, handle: Self::Handle) {
        let mut state = self.inner.borrow_mut();
        if state.pending.remove(&handle).is_some() {
            state.cancelled.push(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_host_time() {
        let host = MockHost::new();
        assert_eq!(host.now_ms(), 0.0);

        host.advance_time(1000.0);
        assert_eq!(host.now_ms(), 1000.0);

        host.set_time(250.0);
        assert_eq!(host.now_ms(), 250.0);
    }

    #[test]
    fn test_frame_fires_one_period_later() {
        let host = MockHost::with_time(100.0);
        let handle = host.request_frame().unwrap();
        assert_eq!(host.pending_count(), 1);

        let fired = host.fire_next().unwrap();
        assert_eq!(fired.handle, handle);
        assert_eq!(fired.kind, CallbackKind::Frame);
        assert!((fired.timestamp_ms - 116.0).abs() < 1e-9);
        assert_eq!(host.pending_count(), 0);
        assert!(host.fire_next().is_none());
    }

    #[test]
    fn test_timeout_fires_after_delay() {
        let host = MockHost::new();
        host.request_timeout(1000.0).unwrap();
        assert!(host.has_pending(CallbackKind::Timeout));

        let fired = host.fire_next().unwrap();
        assert_eq!(fired.kind, CallbackKind::Timeout);
        assert!((fired.timestamp_ms - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_timeout_rejects_bad_delay() {
        let host = MockHost::new();
        assert_eq!(host.request_timeout(-5.0), Err(HostError::InvalidDelay));
        assert_eq!(host.pending_count(), 0);
    }

    #[test]
    fn test_cancel_removes_pending() {
        let host = MockHost::new();
        let handle = host.request_frame().unwrap();
        host.cancel(handle);
        assert_eq!(host.pending_count(), 0);
        assert_eq!(host.cancelled_count(), 1);

        // Cancelling again is a no-op
        host.cancel(handle);
        assert_eq!(host.cancelled_count(), 1);
    }

    #[test]
    fn test_fail_requests() {
        let host = MockHost::new();
        host.set_fail_requests(true);
        assert_eq!(host.request_frame(), Err(HostError::RegistrationFailed));
        host.set_fail_requests(false);
        assert!(host.request_frame().is_ok());
        assert_eq!(host.frame_requests(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let host = MockHost::new().with_frame_period(10.0);
        let other = host.clone();
        other.request_frame().unwrap();
        assert_eq!(host.pending_count(), 1);
        let fired = host.fire_next().unwrap();
        assert!((fired.timestamp_ms - 10.0).abs() < 1e-9);
        assert!((other.now_ms() - 10.0).abs() < 1e-9);
    }
}
