//! Lifecycle state of the follow camera

/// The current lifecycle state of the animator
///
/// - **Idle**: no run; the map camera belongs to the user
/// - **Running**: a run is being played back frame by frame
/// - **Completing**: playback reached the end, waiting for the settle
///   delay before the saved pose is restored
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FollowState {
    #[default]
    Idle,
    Running,
    Completing,
}

impl FollowState {
    /// Check if a run is being played back
    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self, FollowState::Running)
    }

    /// Check if nothing is scheduled
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, FollowState::Idle)
    }

    /// Lowercase name, as exposed to the UI layer
    pub fn as_str(&self) -> &'static str {
        match self {
            FollowState::Idle => "idle",
            FollowState::Running => "running",
            FollowState::Completing => "completing",
        }
    }
}
