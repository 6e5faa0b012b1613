//! Error types for the follow camera

use follow_hal::HostError;
use thiserror::Error;

/// Errors returned by the animator's control surface
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FollowError {
    /// The host could not schedule a frame or timer
    #[error("host error: {0}")]
    Host(#[from] HostError),

    /// The configuration was rejected
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration validation errors
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Animation duration must be positive and finite
    #[error("durationMs must be positive, got {0}")]
    Duration(f64),

    /// Frame interval must be non-negative and finite
    #[error("minFrameIntervalMs must be non-negative, got {0}")]
    FrameInterval(f64),

    /// Frame-rate ceiling must be positive and finite
    #[error("frame rate must be positive, got {0}")]
    FrameRate(f64),

    /// Rotation limit must be positive and finite
    #[error("maxRotationPerFrame must be positive, got {0}")]
    MaxRotation(f64),

    /// Delays must be non-negative and finite
    #[error("{field} must be non-negative, got {value}")]
    Delay { field: &'static str, value: f64 },

    /// Look-ahead must reach at least the next point
    #[error("lookAhead must be at least 1")]
    LookAhead,

    /// The JSON document could not be parsed
    #[error("malformed config JSON: {0}")]
    Json(String),
}

/// Error from a map sink that could not take a pose
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SinkError {
    /// The map surface is not mounted or not loaded yet
    #[error("map sink unavailable")]
    Unavailable,

    /// The map surface rejected the pose
    #[error("map sink rejected pose: {0}")]
    Rejected(String),
}

/// Errors while reading route geometry from a routing response
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The document is not valid JSON for any supported shape
    #[error("malformed route JSON: {0}")]
    Json(String),

    /// The geometry is not a LineString
    #[error("unsupported geometry type: {0}")]
    GeometryType(String),

    /// A Directions response without any route
    #[error("routing response contains no routes")]
    NoRoutes,
}
