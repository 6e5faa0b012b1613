//! Geographic types for routes and camera positions
//!
//! Coordinates are WGS84 degrees in GeoJSON order (longitude first).

mod bearing;
mod bounds;
mod lnglat;

pub use bearing::bearing;
pub use bounds::LngLatBounds;
pub use lnglat::LngLat;
