//! Great-circle bearing

use super::LngLat;
use crate::math::normalize_bearing;

/// Initial great-circle bearing from `from` to `to`, in degrees [0, 360)
///
/// 0 is north, clockwise positive. Identical points produce an arbitrary
/// finite angle; non-finite input propagates as NaN instead of panicking.
pub fn bearing(from: LngLat, to: LngLat) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();

    normalize_bearing(y.atan2(x).to_degrees())
}
