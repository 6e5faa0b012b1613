//! Start, cancel and completion

use follow_hal::FrameHost;
use tracing::{debug, info, warn};

use super::run::AnimationRun;
use super::RouteAnimator;
use crate::error::FollowError;
use crate::follow_state::FollowState;
use crate::route::Route;

impl<H: FrameHost> RouteAnimator<H> {
    /// Start following `route`
    ///
    /// Routes with fewer than two points are ignored. Any run in flight is
    /// cancelled first (restoring its saved pose), then the map's current
    /// pose is saved, the initial follow pose is emitted and the first frame
    /// is scheduled.
    pub fn start(&mut self, route: Route) -> Result<(), FollowError> {
        if !route.is_animatable() {
            debug!(points = route.len(), "route too short to follow");
            return Ok(());
        }

        self.cancel();

        let now_ms = self.host.now_ms();
        let saved_pose = self.sink.current_pose();
        let run = AnimationRun::new(route, now_ms, &self.config);
        let initial_pose = run.initial_pose(&self.config);

        let handle = self.host.request_frame()?;
        self.pending = Some(handle);
        self.saved_pose = saved_pose;
        self.run = Some(run);
        self.progress = 0.0;
        self.state = FollowState::Running;

        info!(
            bearing = initial_pose.bearing,
            duration_ms = self.config.duration_ms,
            "route follow started"
        );
        self.notify_following(true);
        self.emit(initial_pose);
        Ok(())
    }

    /// Stop following and hand the camera back
    ///
    /// Cancels the pending callback and restores the saved pose right away.
    /// Does nothing while idle.
    pub fn cancel(&mut self) {
        if self.state.is_idle() {
            return;
        }

        if let Some(handle) = self.pending.take() {
            self.host.cancel(handle);
        }

        let was_running = self.state.is_running();
        self.run = None;
        self.settle_due_ms = None;
        self.progress = 0.0;
        self.state = FollowState::Idle;

        if was_running {
            self.notify_following(false);
        }
        if let Some(pose) = self.saved_pose.take() {
            self.apply(pose);
        }
        info!("route follow cancelled");
    }

    /// Swap the followed route without restarting the clock
    ///
    /// Returns `false` when nothing is running or the route is too short.
    pub fn replace_route(&mut self, route: Route) -> bool {
        if !route.is_animatable() || !self.state.is_running() {
            return false;
        }
        match self.run.as_mut() {
            Some(run) => {
                debug!(points = route.len(), "route replaced mid-flight");
                run.replace_route(route);
                true
            }
            None => false,
        }
    }

    /// Playback reached the end: wait for the settle delay, then restore
    pub(crate) fn finalize(&mut self, now_ms: f64) {
        self.run = None;
        self.progress = 1.0;
        self.state = FollowState::Completing;
        self.notify_following(false);
        info!("route follow completed");

        let delay_ms = self.config.settle_delay_ms;
        self.settle_due_ms = Some(now_ms + delay_ms);
        match self.host.request_timeout(delay_ms) {
            Ok(handle) => self.pending = Some(handle),
            Err(err) => {
                warn!(%err, "could not schedule settle delay, restoring now");
                self.restore_after_completion();
            }
        }
    }

    /// Restore the saved pose, never closer than the minimum restore zoom
    pub(crate) fn restore_after_completion(&mut self) {
        self.settle_due_ms = None;
        self.pending = None;
        self.state = FollowState::Idle;
        if let Some(pose) = self.saved_pose.take() {
            self.apply(pose.with_min_zoom(self.config.min_restore_zoom));
        }
        debug!("camera restored after follow");
    }
}
