//! Outputs of the animator
//!
//! The map surface is a [`MapSink`]: it reports its current camera so the
//! animator can restore it later, and accepts one pose per frame. Secondary
//! displays (the overview mini-map, progress widgets) are
//! [`PositionObserver`]s that only see the moving position.

use crate::error::SinkError;
use crate::geo::LngLat;
use crate::pose::CameraPose;

/// Primary map-rendering surface
pub trait MapSink {
    /// The camera the surface is showing right now, if it has one
    fn current_pose(&self) -> Option<CameraPose>;

    /// Move the camera to `pose`
    ///
    /// Emission is best-effort: an error drops this frame only.
    fn apply_pose(&mut self, pose: CameraPose) -> Result<(), SinkError>;
}

/// Secondary display tracking the follow position
pub trait PositionObserver {
    /// The followed position moved
    fn position_changed(&mut self, position: LngLat);

    /// Following started (`true`) or ended (`false`)
    fn following_changed(&mut self, _following: bool) {}
}

/// Sink with no map attached; every pose is dropped
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedSink;

impl MapSink for DetachedSink {
    fn current_pose(&self) -> Option<CameraPose> {
        None
    }

    fn apply_pose(&mut self, _pose: CameraPose) -> Result<(), SinkError> {
        Err(SinkError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_sink() {
        let mut sink = DetachedSink;
        assert!(sink.current_pose().is_none());
        let pose = CameraPose::new(LngLat::new(0.0, 0.0), 18.0, 60.0, 0.0);
        assert_eq!(sink.apply_pose(pose), Err(SinkError::Unavailable));
    }
}
