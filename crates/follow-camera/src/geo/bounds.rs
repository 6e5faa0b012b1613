//! Geographic bounding box

use serde::{Deserialize, Serialize};

use super::LngLat;

/// South-west / north-east bounding box, used to fit a whole route in view
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LngLatBounds {
    pub south_west: LngLat,
    pub north_east: LngLat,
}

impl LngLatBounds {
    /// Bounds covering a single point
    pub fn from_point(p: LngLat) -> Self {
        Self {
            south_west: p,
            north_east: p,
        }
    }

    /// Bounds covering all points, `None` for an empty iterator
    pub fn from_points<I: IntoIterator<Item = LngLat>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let mut bounds = Self::from_point(iter.next()?);
        for p in iter {
            bounds.extend(p);
        }
        Some(bounds)
    }

    /// Grow to include a point
    pub fn extend(&mut self, p: LngLat) {
        self.south_west.lng = self.south_west.lng.min(p.lng);
        self.south_west.lat = self.south_west.lat.min(p.lat);
        self.north_east.lng = self.north_east.lng.max(p.lng);
        self.north_east.lat = self.north_east.lat.max(p.lat);
    }

    /// Center of the box
    pub fn center(&self) -> LngLat {
        LngLat::lerp(self.south_west, self.north_east, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_points() {
        let bounds = LngLatBounds::from_points([
            LngLat::new(29.0, 41.0),
            LngLat::new(28.5, 41.2),
            LngLat::new(29.3, 40.9),
        ])
        .unwrap();

        assert_eq!(bounds.south_west, LngLat::new(28.5, 40.9));
        assert_eq!(bounds.north_east, LngLat::new(29.3, 41.2));

        let c = bounds.center();
        assert!((c.lng - 28.9).abs() < 1e-9);
        assert!((c.lat - 41.05).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_empty() {
        assert!(LngLatBounds::from_points(Vec::new()).is_none());
    }
}
