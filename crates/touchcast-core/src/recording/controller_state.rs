use std::time::Instant;

/// Recording lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Not recording.
    Idle,
    /// Capturing and uploading every tick.
    Recording,
    /// Still recording, inside the stop warning window.
    StoppingAlert {
        /// When the warning window opened.
        alert_started_at: Instant,
    },
}

impl ControllerState {
    /// Whether a session is active (recording or in its stop window).
    pub fn is_active(&self) -> bool {
        !matches!(self, ControllerState::Idle)
    }

    /// Whether the stop warning window is open.
    pub fn is_alerting(&self) -> bool {
        matches!(self, ControllerState::StoppingAlert { .. })
    }
}
