//! Longitude/latitude point

use serde::{Deserialize, Serialize};

use crate::math::lerp;

/// A geographic point in degrees
///
/// Serializes as the GeoJSON position `[lng, lat]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    /// Create a new point
    #[inline]
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Linear interpolation between two points (in degree space)
    #[inline]
    pub fn lerp(from: LngLat, to: LngLat, t: f64) -> LngLat {
        LngLat {
            lng: lerp(from.lng, to.lng, t),
            lat: lerp(from.lat, to.lat, t),
        }
    }
}

impl From<[f64; 2]> for LngLat {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<LngLat> for [f64; 2] {
    fn from(p: LngLat) -> Self {
        [p.lng, p.lat]
    }
}
