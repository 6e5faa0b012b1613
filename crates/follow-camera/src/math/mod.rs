//! Scalar math for camera animation
//!
//! Angle helpers keep bearings in compass range and pick the short way
//! around the 0/360 seam.

mod angle;

pub use angle::{clamp_rotation, normalize_angle_delta, normalize_bearing};

/// Linear interpolation between two scalars
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
