//! Follow camera configuration
//!
//! All fields are optional in JSON; missing values take the defaults below.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Total playback time of a route, independent of its length
pub const DEFAULT_DURATION_MS: f64 = 10_000.0;

/// Minimum gap between processed frames (~60 Hz)
pub const DEFAULT_MIN_FRAME_INTERVAL_MS: f64 = 16.0;

/// Maximum heading change per processed frame, in degrees
pub const DEFAULT_MAX_ROTATION_PER_FRAME: f64 = 2.0;

/// Pause after completion before the saved pose is restored
pub const DEFAULT_SETTLE_DELAY_MS: f64 = 1_000.0;

/// Zoom used while following
pub const DEFAULT_FOLLOW_ZOOM: f64 = 18.0;

/// Pitch used while following
pub const DEFAULT_FOLLOW_PITCH: f64 = 60.0;

/// Lowest zoom applied when restoring after completion
pub const DEFAULT_MIN_RESTORE_ZOOM: f64 = 15.0;

/// How many points ahead the camera steers towards
pub const DEFAULT_LOOK_AHEAD: usize = 2;

/// Frame gap treated as a stalled (backgrounded) host; also the most a
/// single frame may advance the run clock after such a stall
pub const DEFAULT_STALL_THRESHOLD_MS: f64 = 1_000.0;

/// Tunables for the route follow animation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FollowConfig {
    pub duration_ms: f64,
    pub min_frame_interval_ms: f64,
    pub max_rotation_per_frame: f64,
    pub settle_delay_ms: f64,
    pub follow_zoom: f64,
    pub follow_pitch: f64,
    pub min_restore_zoom: f64,
    pub look_ahead: usize,
    pub stall_threshold_ms: f64,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            min_frame_interval_ms: DEFAULT_MIN_FRAME_INTERVAL_MS,
            max_rotation_per_frame: DEFAULT_MAX_ROTATION_PER_FRAME,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            follow_zoom: DEFAULT_FOLLOW_ZOOM,
            follow_pitch: DEFAULT_FOLLOW_PITCH,
            min_restore_zoom: DEFAULT_MIN_RESTORE_ZOOM,
            look_ahead: DEFAULT_LOOK_AHEAD,
            stall_threshold_ms: DEFAULT_STALL_THRESHOLD_MS,
        }
    }
}

impl FollowConfig {
    /// Parse and validate a camelCase JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FollowConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the frame interval from a frame-rate ceiling in Hz
    pub fn with_frame_rate(mut self, hz: f64) -> Result<Self, ConfigError> {
        if !(hz.is_finite() && hz > 0.0) {
            return Err(ConfigError::FrameRate(hz));
        }
        self.min_frame_interval_ms = 1000.0 / hz;
        Ok(self)
    }

    /// Frame-rate ceiling implied by the frame interval (infinite when unthrottled)
    pub fn frame_rate(&self) -> f64 {
        if self.min_frame_interval_ms > 0.0 {
            1000.0 / self.min_frame_interval_ms
        } else {
            f64::INFINITY
        }
    }

    /// Check every field is in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.duration_ms.is_finite() && self.duration_ms > 0.0) {
            return Err(ConfigError::Duration(self.duration_ms));
        }
        if !(self.min_frame_interval_ms.is_finite() && self.min_frame_interval_ms >= 0.0) {
            return Err(ConfigError::FrameInterval(self.min_frame_interval_ms));
        }
        if !(self.max_rotation_per_frame.is_finite() && self.max_rotation_per_frame > 0.0) {
            return Err(ConfigError::MaxRotation(self.max_rotation_per_frame));
        }
        check_delay("settleDelayMs", self.settle_delay_ms)?;
        check_delay("stallThresholdMs", self.stall_threshold_ms)?;
        if self.look_ahead == 0 {
            return Err(ConfigError::LookAhead);
        }
        Ok(())
    }
}

fn check_delay(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Delay { field, value })
    }
}
