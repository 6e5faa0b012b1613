//! Route geometry
//!
//! A [`Route`] is the ordered point list the camera follows. It can be built
//! directly or read from the routing backend's GeoJSON (see [`RoutePlan`]).

mod geojson;
mod steps;

use serde::{Deserialize, Serialize};

use crate::geo::{LngLat, LngLatBounds};

pub use geojson::RoutePlan;
pub use steps::{RouteStep, RouteSummary};

/// Ordered route points, in travel order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    points: Vec<LngLat>,
}

/// Where on a route a progress fraction falls
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentPosition {
    /// Index of the segment start point, in [0, N-2]
    pub index: usize,
    /// Linear fraction along the segment, in [0, 1]
    pub fraction: f64,
}

impl Route {
    /// Create a route from points
    pub fn new(points: Vec<LngLat>) -> Self {
        Self { points }
    }

    /// Create a route from `[lng, lat]` pairs
    pub fn from_pairs<I: IntoIterator<Item = [f64; 2]>>(pairs: I) -> Self {
        Self::new(pairs.into_iter().map(LngLat::from).collect())
    }

    /// All points
    #[inline]
    pub fn points(&self) -> &[LngLat] {
        &self.points
    }

    /// Number of points
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the route has no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A route needs at least one segment to be followed
    #[inline]
    pub fn is_animatable(&self) -> bool {
        self.points.len() >= 2
    }

    /// Get a point, clamping the index to the last point
    ///
    /// # Panics
    /// Panics on an empty route.
    #[inline]
    pub fn point_clamped(&self, index: usize) -> LngLat {
        self.points[index.min(self.points.len() - 1)]
    }

    /// Bounding box of all points
    pub fn bounds(&self) -> Option<LngLatBounds> {
        LngLatBounds::from_points(self.points.iter().copied())
    }

    /// Map a playback fraction onto a segment
    ///
    /// Each segment gets an equal share of the playback time regardless of
    /// its length. Returns `None` for routes with fewer than two points.
    pub fn locate(&self, progress: f64) -> Option<SegmentPosition> {
        if !self.is_animatable() {
            return None;
        }
        let segments = (self.points.len() - 1) as f64;
        let scaled = progress.clamp(0.0, 1.0) * segments;
        let index = (scaled.floor() as usize).min(self.points.len() - 2);
        let fraction = (scaled - index as f64).clamp(0.0, 1.0);
        Some(SegmentPosition { index, fraction })
    }
}

impl From<Vec<LngLat>> for Route {
    fn from(points: Vec<LngLat>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_points() -> Route {
        Route::from_pairs([[0.0, 0.0], [0.0, 1.0], [1.0, 1.0]])
    }

    #[test]
    fn test_route_animatable() {
        assert!(!Route::default().is_animatable());
        assert!(!Route::from_pairs([[0.0, 0.0]]).is_animatable());
        assert!(three_points().is_animatable());
        assert_eq!(three_points().len(), 3);
    }

    #[test]
    fn test_locate_start_middle_end() {
        let route = three_points();

        let start = route.locate(0.0).unwrap();
        assert_eq!(start.index, 0);
        assert!((start.fraction - 0.0).abs() < 1e-12);

        let quarter = route.locate(0.25).unwrap();
        assert_eq!(quarter.index, 0);
        assert!((quarter.fraction - 0.5).abs() < 1e-12);

        let half = route.locate(0.5).unwrap();
        assert_eq!(half.index, 1);
        assert!((half.fraction - 0.0).abs() < 1e-12);

        // The end stays on the last segment instead of running off the route
        let end = route.locate(1.0).unwrap();
        assert_eq!(end.index, 1);
        assert!((end.fraction - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_locate_short_route() {
        assert!(Route::from_pairs([[0.0, 0.0]]).locate(0.5).is_none());
    }

    #[test]
    fn test_point_clamped() {
        let route = three_points();
        assert_eq!(route.point_clamped(1), LngLat::new(0.0, 1.0));
        assert_eq!(route.point_clamped(10), LngLat::new(1.0, 1.0));
    }

    #[test]
    fn test_route_json_is_coordinate_list() {
        let route: Route = serde_json::from_str("[[29.0, 41.0], [29.1, 41.1]]").unwrap();
        assert_eq!(route.len(), 2);
        assert_eq!(route.points()[1], LngLat::new(29.1, 41.1));
    }

    #[test]
    fn test_route_bounds() {
        let bounds = three_points().bounds().unwrap();
        assert_eq!(bounds.south_west, LngLat::new(0.0, 0.0));
        assert_eq!(bounds.north_east, LngLat::new(1.0, 1.0));
        assert!(Route::default().bounds().is_none());
    }
}
