//! Per-run playback state

use tracing::debug;

use crate::config::FollowConfig;
use crate::geo::{bearing, LngLat};
use crate::math::{clamp_rotation, normalize_angle_delta, normalize_bearing};
use crate::pose::CameraPose;
use crate::route::Route;
use crate::transition::{ease_in_out_cubic, progress_at, FrameGate};

/// One processed frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Frame {
    pub pose: CameraPose,
    pub progress: f64,
}

/// Transient state of one playback, from `start` to completion or cancel
#[derive(Clone, Debug)]
pub(crate) struct AnimationRun {
    /// Latest route snapshot; always has at least two points
    route: Route,
    /// Run clock origin (shifted forward after stalls)
    start_ms: f64,
    /// Frame-rate ceiling, remembers the last processed frame
    gate: FrameGate,
    /// Heading of the previous frame
    bearing: f64,
    /// Last computed progress, never decreases
    progress: f64,
}

impl AnimationRun {
    /// Create a run starting at `start_ms`
    ///
    /// The route must have at least two points.
    pub fn new(route: Route, start_ms: f64, config: &FollowConfig) -> Self {
        let initial_bearing = bearing(route.point_clamped(0), route.point_clamped(1));
        Self {
            route,
            start_ms,
            gate: FrameGate::new(config.min_frame_interval_ms, start_ms),
            bearing: initial_bearing,
            progress: 0.0,
        }
    }

    /// Pose at the first route point, facing the first segment
    pub fn initial_pose(&self, config: &FollowConfig) -> CameraPose {
        CameraPose::new(
            self.route.point_clamped(0),
            config.follow_zoom,
            config.follow_pitch,
            self.bearing,
        )
    }

    /// Swap in a new route snapshot, keeping the clock and heading
    pub fn replace_route(&mut self, route: Route) {
        if route.is_animatable() {
            self.route = route;
        }
    }

    /// Compute the frame for `now_ms`
    ///
    /// Returns `None` when the frame-rate gate defers this tick.
    pub fn advance(&mut self, now_ms: f64, config: &FollowConfig) -> Option<Frame> {
        let gap = self.gate.gap(now_ms);
        if !self.gate.admit(now_ms) {
            return None;
        }

        // A gap beyond the threshold means the host stopped delivering
        // frames (hidden tab). Playback advances by at most the threshold
        // instead of jumping ahead; slower gaps run on the wall clock.
        if config.stall_threshold_ms > 0.0 && gap > config.stall_threshold_ms {
            let skipped = gap - config.stall_threshold_ms;
            debug!(gap_ms = gap, skipped_ms = skipped, "frame stall, shifting run clock");
            self.start_ms += skipped;
        }

        let progress = progress_at(self.start_ms, now_ms, config.duration_ms).max(self.progress);
        self.progress = progress;

        let segment = self.route.locate(progress)?;
        let eased = ease_in_out_cubic(segment.fraction);

        let from = self.route.point_clamped(segment.index);
        let to = self.route.point_clamped(segment.index + 1);
        let position = LngLat::lerp(from, to, eased);

        let ahead = self
            .route
            .point_clamped(segment.index.saturating_add(config.look_ahead));
        let target = bearing(from, ahead);
        let step = clamp_rotation(
            normalize_angle_delta(target, self.bearing) * eased,
            config.max_rotation_per_frame,
        );
        self.bearing = normalize_bearing(self.bearing + step);

        Some(Frame {
            pose: CameraPose::new(position, config.follow_zoom, config.follow_pitch, self.bearing),
            progress,
        })
    }
}
