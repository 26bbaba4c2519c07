use std::time::Instant;

use uuid::Uuid;

/// The one active recording session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordingSession {
    /// Unique session ID for log correlation.
    pub session_id: Uuid,
    /// When recording started.
    pub started_at: Instant,
    /// Capture-and-upload cycles run so far.
    pub cycles: u64,
}

impl RecordingSession {
    /// Start a new session at `now`.
    pub fn start(now: Instant) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            started_at: now,
            cycles: 0,
        }
    }
}
