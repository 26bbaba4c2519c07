//! Gesture-driven recording lifecycle.
//!
//! The controller is the sole owner of the [`RecordingSession`] and, with
//! the link supervisor, the only component that requests indicator states.
//! Each tick it evaluates link status first: a lost link ends the session
//! before any gesture is considered.

use crate::{
    AudioSource, ControllerSettings, ControllerState, DigitalOutput, GestureEvent,
    IndicatorDriver, IndicatorState, LinkStatus, RecordingSession, Transport, UploadAttempt,
    UploadChannel, UploadOutcome, derive_indicator_state,
};

use std::time::Instant;

use tracing::{debug, info, warn};

/// Recording lifecycle state machine.
pub struct RecordingController {
    settings: ControllerSettings,
    state: ControllerState,
    session: Option<RecordingSession>,
    /// Cleared when a session ends; set again by an observed release so a
    /// hold that outlives the session cannot immediately start another.
    armed: bool,
    capture: Vec<u8>,
}

impl RecordingController {
    /// Create an idle controller.
    pub fn new(settings: ControllerSettings) -> Self {
        Self {
            capture: vec![0; settings.capture_bytes],
            settings,
            state: ControllerState::Idle,
            session: None,
            armed: true,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&RecordingSession> {
        self.session.as_ref()
    }

    /// Whether a session is active.
    pub fn is_recording(&self) -> bool {
        self.state.is_active()
    }

    /// Indicator state implied by the controller state and `link`.
    pub fn indicator_state(&self, link: LinkStatus) -> IndicatorState {
        derive_indicator_state(self.state.is_active(), self.state.is_alerting(), link)
    }

    /// Apply this tick's gesture and link status, then request the
    /// matching indicator state.
    pub fn handle<O: DigitalOutput>(
        &mut self,
        gesture: GestureEvent,
        link: LinkStatus,
        now: Instant,
        indicator: &mut IndicatorDriver<O>,
    ) -> ControllerState {
        if link.is_up() {
            self.apply_gesture(gesture, now);
        } else if self.state.is_active() {
            warn!("Link lost while recording, stopping session");
            self.end_session(now);
        }

        indicator.set_state(self.indicator_state(link), now);
        self.state
    }

    fn apply_gesture(&mut self, gesture: GestureEvent, now: Instant) {
        if gesture == GestureEvent::None {
            self.armed = true;
        }

        match self.state {
            ControllerState::Idle if self.armed && gesture >= self.settings.start_gesture => {
                let session = RecordingSession::start(now);
                info!(session_id = %session.session_id, gesture = ?gesture, "Recording started");
                self.session = Some(session);
                self.state = ControllerState::Recording;
            }
            ControllerState::Recording if gesture >= self.settings.stop_gesture => {
                info!(
                    session_id = ?self.session.map(|s| s.session_id),
                    alert_ms = self.settings.alert_window.as_millis(),
                    "Stop requested, alert window open"
                );
                self.state = ControllerState::StoppingAlert {
                    alert_started_at: now,
                };
            }
            ControllerState::StoppingAlert { alert_started_at }
                if now.saturating_duration_since(alert_started_at)
                    >= self.settings.alert_window =>
            {
                self.end_session(now);
            }
            _ => {}
        }
    }

    fn end_session(&mut self, now: Instant) {
        if let Some(session) = self.session.take() {
            info!(
                session_id = %session.session_id,
                cycles = session.cycles,
                duration_ms = now.saturating_duration_since(session.started_at).as_millis(),
                "Recording stopped"
            );
        }
        self.state = ControllerState::Idle;
        self.armed = false;
    }

    /// Capture one buffer and upload it. Runs only while a session is
    /// active and the link is up. The first cycle of a session discards
    /// whatever the source buffered while idle.
    ///
    /// Blocks for the capture and the bounded upload. Upload failures are
    /// logged and leave the session running.
    pub fn capture_and_upload<A: AudioSource, T: Transport>(
        &mut self,
        link: LinkStatus,
        audio: &mut A,
        channel: &mut UploadChannel<T>,
    ) -> Option<UploadAttempt<'_>> {
        if !link.is_up() || !self.state.is_active() {
            return None;
        }
        let session = self.session.as_mut()?;
        if session.cycles == 0 {
            if let Err(e) = audio.reset() {
                warn!(session_id = %session.session_id, error = %e, "Failed to discard idle audio");
            }
        }
        session.cycles += 1;
        let (session_id, cycle) = (session.session_id, session.cycles);

        let captured = match audio.read(&mut self.capture) {
            Ok(n) => n.min(self.capture.len()),
            Err(e) => {
                warn!(session_id = %session_id, cycle, error = %e, "Audio capture failed, skipping cycle");
                return None;
            }
        };

        if captured == 0 {
            debug!(session_id = %session_id, cycle, "No audio captured this cycle");
            return None;
        }

        let payload = &self.capture[..captured];
        let outcome = channel.send(payload);

        match outcome {
            UploadOutcome::Sent => {
                debug!(session_id = %session_id, cycle, bytes = captured, "Upload cycle complete");
            }
            UploadOutcome::ConnectFailed | UploadOutcome::ResponseTimeout => {
                warn!(session_id = %session_id, cycle, outcome = ?outcome, "Upload failed, session continues");
            }
        }

        Some(UploadAttempt { payload, outcome })
    }
}
