use crate::{CoreError, CoreResult, GestureEvent};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;

/// Gesture policy and capture sizing for [`crate::RecordingController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSettings {
    /// Minimum gesture that starts a session from idle.
    pub start_gesture: GestureEvent,
    /// Minimum gesture that opens the stop warning window.
    pub stop_gesture: GestureEvent,
    /// Length of the stop warning window.
    pub alert_window: Duration,
    /// Bytes captured and uploaded per cycle.
    pub capture_bytes: usize,
}

impl ControllerSettings {
    /// Reject policies where a gesture could never be produced.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        let reason = if self.start_gesture == GestureEvent::None {
            Some("start gesture must be a hold".to_string())
        } else if self.stop_gesture == GestureEvent::None {
            Some("stop gesture must be a hold".to_string())
        } else if self.stop_gesture <= self.start_gesture {
            Some(format!(
                "stop gesture {:?} must be longer than start gesture {:?}",
                self.stop_gesture, self.start_gesture
            ))
        } else if self.capture_bytes == 0 {
            Some("capture buffer must be non-empty".to_string())
        } else if self.alert_window.is_zero() {
            Some("alert window must be non-zero".to_string())
        } else {
            None
        };

        match reason {
            Some(reason) => Err(CoreError::InvalidSettings {
                reason,
                location: ErrorLocation::from(Location::caller()),
            }),
            None => Ok(()),
        }
    }
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            start_gesture: GestureEvent::ShortHold,
            stop_gesture: GestureEvent::LongHold,
            alert_window: Duration::from_millis(5_000),
            // 1024 signed 16-bit samples.
            capture_bytes: 1024 * 2,
        }
    }
}
