use crate::LinkStatus;

/// Visual states of the single indicator light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorState {
    /// Output held high: idle and linked.
    SteadyOn,
    /// Output held low: boot state before the first request.
    SteadyOff,
    /// Repeating link-down cycle.
    LinkDownPattern,
    /// Slow blink while a session records.
    RecordingPattern,
    /// Fast blink during the stop warning window. Expires to `SteadyOn`.
    AlertBlinkPattern,
}

/// The indicator state implied by the controller's authoritative state.
///
/// Link status takes visual priority, then the stop alert, then recording.
pub fn derive_indicator_state(
    recording_active: bool,
    alerting: bool,
    link: LinkStatus,
) -> IndicatorState {
    match (link, alerting, recording_active) {
        (LinkStatus::Down, _, _) => IndicatorState::LinkDownPattern,
        (LinkStatus::Up, true, _) => IndicatorState::AlertBlinkPattern,
        (LinkStatus::Up, false, true) => IndicatorState::RecordingPattern,
        (LinkStatus::Up, false, false) => IndicatorState::SteadyOn,
    }
}
