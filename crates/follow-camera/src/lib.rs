//! Route Follow Camera
//!
//! This crate animates a map camera along a route:
//! - Position interpolation along route segments with cubic easing
//! - Heading that looks ahead and turns at a bounded rate
//! - Frame-rate limiting and recovery from stalled hosts
//! - Saving the camera before a run and restoring it afterwards
//! - Reading routes from GeoJSON and Directions responses
//!
//! ## Architecture
//!
//! - [`geo`]: Geographic types (`LngLat`, `LngLatBounds`) and bearings
//! - [`math`]: Angle normalization and interpolation
//! - [`transition`]: Easing, progress clock and frame gate
//! - [`route`]: Route geometry, segment lookup and parsing
//! - [`animator`]: The [`RouteAnimator`] state machine
//!
//! The animator never touches a browser. Time and frame scheduling come from
//! a [`follow_hal::FrameHost`], and every pose goes out through a [`MapSink`].
//!
//! ## Example
//!
//! ```rust
//! use follow_camera::{DetachedSink, Route, RouteAnimator};
//! use follow_hal_mock::MockHost;
//!
//! let host = MockHost::new();
//! let mut animator = RouteAnimator::new(host.clone(), Box::new(DetachedSink));
//! animator
//!     .start(Route::from_pairs([[28.97, 41.00], [28.98, 41.01]]))
//!     .unwrap();
//!
//! while let Some(fired) = host.fire_next() {
//!     animator.tick(fired.timestamp_ms);
//! }
//! assert!(!animator.is_running());
//! ```

pub mod animator;
pub mod geo;
pub mod math;
pub mod route;
pub mod transition;

mod config;
mod error;
mod follow_state;
mod pose;
mod sink;

pub use animator::RouteAnimator;
pub use config::*;
pub use error::{ConfigError, FollowError, RouteError, SinkError};
pub use follow_state::FollowState;
pub use geo::{LngLat, LngLatBounds};
pub use pose::CameraPose;
pub use route::{Route, RoutePlan, RouteStep, RouteSummary};
pub use sink::{DetachedSink, MapSink, PositionObserver};

pub use follow_hal::{FrameHost, HostError};
