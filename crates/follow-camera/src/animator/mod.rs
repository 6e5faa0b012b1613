//! Route follow animator
//!
//! This module is split into focused submodules:
//! - `run`: per-run playback state and frame math
//! - `lifecycle`: start, cancel, route replacement, completion
//! - `tick`: per-frame entry point called by the host

mod lifecycle;
mod run;
mod tick;

use follow_hal::FrameHost;
use tracing::warn;

use crate::config::FollowConfig;
use crate::error::FollowError;
use crate::follow_state::FollowState;
use crate::pose::CameraPose;
use crate::sink::{MapSink, PositionObserver};

use run::AnimationRun;

/// Drives a camera along a route, one host frame at a time
///
/// The animator owns all mutable playback state:
/// - the active run (at most one)
/// - the camera pose saved at `start`, restored on cancel or completion
/// - the single pending host callback
///
/// It never blocks; every call returns immediately and further work happens
/// in [`RouteAnimator::tick`] when the host fires the scheduled callback.
pub struct RouteAnimator<H: FrameHost> {
    /// Clock and scheduler
    pub(crate) host: H,
    /// Tunables, validated at construction
    pub(crate) config: FollowConfig,
    /// Primary map surface
    pub(crate) sink: Box<dyn MapSink>,
    /// Secondary displays (overview map, progress widgets)
    pub(crate) observers: Vec<Box<dyn PositionObserver>>,
    /// Lifecycle state
    pub(crate) state: FollowState,
    /// Active playback, present while running
    pub(crate) run: Option<AnimationRun>,
    /// Pose to restore when following ends
    pub(crate) saved_pose: Option<CameraPose>,
    /// Pending frame or settle timer
    pub(crate) pending: Option<H::Handle>,
    /// When the settle delay ends (while completing)
    pub(crate) settle_due_ms: Option<f64>,
    /// Progress of the current or last run
    pub(crate) progress: f64,
    /// Last pose sent to the sink by playback
    pub(crate) last_pose: Option<CameraPose>,
}

impl<H: FrameHost> RouteAnimator<H> {
    /// Create an animator with the default configuration
    pub fn new(host: H, sink: Box<dyn MapSink>) -> Self {
        Self {
            host,
            config: FollowConfig::default(),
            sink,
            observers: Vec::new(),
            state: FollowState::Idle,
            run: None,
            saved_pose: None,
            pending: None,
            settle_due_ms: None,
            progress: 0.0,
            last_pose: None,
        }
    }

    /// Create an animator with a custom configuration
    pub fn with_config(
        host: H,
        sink: Box<dyn MapSink>,
        config: FollowConfig,
    ) -> Result<Self, FollowError> {
        config.validate()?;
        let mut animator = Self::new(host, sink);
        animator.config = config;
        Ok(animator)
    }

    /// Register a secondary display
    pub fn add_observer(&mut self, observer: Box<dyn PositionObserver>) {
        self.observers.push(observer);
    }

    /// Replace the map surface (e.g. after the map remounts)
    pub fn set_sink(&mut self, sink: Box<dyn MapSink>) {
        self.sink = sink;
    }

    /// Current lifecycle state
    #[inline]
    pub fn state(&self) -> FollowState {
        self.state
    }

    /// Check if a run is being played back
    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Progress of the current run in [0, 1]
    ///
    /// Stays at 1.0 after natural completion, resets to 0 on cancel.
    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Progress rounded to whole percent, for display
    pub fn progress_percent(&self) -> u8 {
        (self.progress.clamp(0.0, 1.0) * 100.0).round() as u8
    }

    /// Active configuration
    pub fn config(&self) -> &FollowConfig {
        &self.config
    }

    /// Last pose produced by playback
    pub fn last_pose(&self) -> Option<CameraPose> {
        self.last_pose
    }

    /// Check whether a host callback is outstanding
    pub fn has_pending_callback(&self) -> bool {
        self.pending.is_some()
    }

    /// Send a playback pose to the sink and the position to observers
    pub(crate) fn emit(&mut self, pose: CameraPose) {
        self.last_pose = Some(pose);
        self.apply(pose);
        for observer in self.observers.iter_mut() {
            observer.position_changed(pose.position());
        }
    }

    /// Send a pose to the sink only; failures drop this pose
    pub(crate) fn apply(&mut self, pose: CameraPose) {
        if let Err(err) = self.sink.apply_pose(pose) {
            warn!(%err, "map sink dropped camera pose");
        }
    }

    pub(crate) fn notify_following(&mut self, following: bool) {
        for observer in self.observers.iter_mut() {
            observer.following_changed(following);
        }
    }
}
