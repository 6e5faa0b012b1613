//! Per-frame entry point

use follow_hal::FrameHost;
use tracing::error;

use super::RouteAnimator;
use crate::follow_state::FollowState;

impl<H: FrameHost> RouteAnimator<H> {
    /// Handle a fired host callback at `now_ms`
    ///
    /// Frames arriving faster than the configured ceiling are deferred
    /// (rescheduled without work). Returns the state after the tick.
    pub fn tick(&mut self, now_ms: f64) -> FollowState {
        // The callback that brought us here has fired
        self.pending = None;

        match self.state {
            FollowState::Idle => {}
            FollowState::Running => self.tick_running(now_ms),
            FollowState::Completing => self.tick_completing(now_ms),
        }
        self.state
    }

    fn tick_running(&mut self, now_ms: f64) {
        let frame = match self.run.as_mut() {
            Some(run) => run.advance(now_ms, &self.config),
            None => {
                self.state = FollowState::Idle;
                return;
            }
        };

        let frame = match frame {
            Some(frame) => frame,
            None => {
                self.schedule_frame();
                return;
            }
        };

        self.progress = frame.progress;
        self.emit(frame.pose);

        if frame.progress < 1.0 {
            self.schedule_frame();
        } else {
            self.finalize(now_ms);
        }
    }

    fn tick_completing(&mut self, now_ms: f64) {
        let due_ms = match self.settle_due_ms {
            Some(due) => due,
            None => {
                self.restore_after_completion();
                return;
            }
        };

        if now_ms >= due_ms {
            self.restore_after_completion();
            return;
        }

        // Woken early; wait out the remainder
        match self.host.request_timeout(due_ms - now_ms) {
            Ok(handle) => self.pending = Some(handle),
            Err(_) => self.restore_after_completion(),
        }
    }

    fn schedule_frame(&mut self) {
        match self.host.request_frame() {
            Ok(handle) => self.pending = Some(handle),
            Err(err) => {
                error!(%err, "could not schedule next frame, cancelling follow");
                self.cancel();
            }
        }
    }
}
