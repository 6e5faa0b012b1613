//! Camera pose handed to the map surface

use serde::{Deserialize, Serialize};

use crate::geo::LngLat;
use crate::math::normalize_bearing;

/// Camera position and orientation for one rendered frame
///
/// Poses are `Copy` and passed by value, so a sink can never mutate the
/// animator's copy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraPose {
    pub longitude: f64,
    pub latitude: f64,
    /// Map-engine zoom level
    pub zoom: f64,
    /// Tilt in degrees (0 = straight down)
    pub pitch: f64,
    /// Compass heading in degrees [0, 360)
    pub bearing: f64,
}

impl CameraPose {
    /// Create a pose, normalizing the bearing
    pub fn new(position: LngLat, zoom: f64, pitch: f64, bearing: f64) -> Self {
        Self {
            longitude: position.lng,
            latitude: position.lat,
            zoom,
            pitch,
            bearing: normalize_bearing(bearing),
        }
    }

    /// Camera position
    #[inline]
    pub fn position(&self) -> LngLat {
        LngLat::new(self.longitude, self.latitude)
    }

    /// Same pose with zoom raised to at least `min_zoom`
    #[inline]
    pub fn with_min_zoom(self, min_zoom: f64) -> Self {
        Self {
            zoom: self.zoom.max(min_zoom),
            ..self
        }
    }
}
