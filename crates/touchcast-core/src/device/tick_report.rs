use crate::{ControllerState, GestureEvent, IndicatorState, LinkStatus, UploadOutcome};

/// What one scheduler tick observed and did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Link status polled at the start of the tick.
    pub link: LinkStatus,
    /// Gesture classified this tick.
    pub gesture: GestureEvent,
    /// Controller state after handling the gesture.
    pub state: ControllerState,
    /// Indicator state after the indicator tick.
    pub indicator: IndicatorState,
    /// Upload outcome, if a capture cycle ran.
    pub upload: Option<UploadOutcome>,
    /// Whether the tick blocked on reconnect.
    pub reconnected: bool,
}
