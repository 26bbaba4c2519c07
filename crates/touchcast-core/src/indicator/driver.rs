//! Non-blocking indicator light state machine.
//!
//! The driver never sleeps. Each state is a deterministic level-over-time
//! function of the time elapsed since the state was entered; `tick` samples
//! that function and writes the pin only when the level changes.

use crate::{DigitalOutput, IndicatorState, IndicatorTiming};

use std::time::{Duration, Instant};

use tracing::debug;

/// Drives one [`DigitalOutput`] according to the requested [`IndicatorState`].
pub struct IndicatorDriver<O> {
    output: O,
    timing: IndicatorTiming,
    state: IndicatorState,
    /// Phase anchor. `None` until the first tick after boot.
    entered_at: Option<Instant>,
    level: Option<bool>,
}

impl<O: DigitalOutput> IndicatorDriver<O> {
    /// Create a driver in `SteadyOff` and pull the output low.
    pub fn new(mut output: O, timing: IndicatorTiming) -> Self {
        output.write(false);

        Self {
            output,
            timing,
            state: IndicatorState::SteadyOff,
            entered_at: None,
            level: Some(false),
        }
    }

    /// Currently displayed state.
    pub fn state(&self) -> IndicatorState {
        self.state
    }

    /// Last level written to the output.
    pub fn level(&self) -> bool {
        self.level.unwrap_or(false)
    }

    /// Timing constants in use.
    pub fn timing(&self) -> &IndicatorTiming {
        &self.timing
    }

    /// Request `state`. Re-anchors the phase clock at `now` on a real
    /// transition; requesting the current state keeps its phase.
    ///
    /// Returns whether a transition happened.
    pub fn set_state(&mut self, state: IndicatorState, now: Instant) -> bool {
        if state == self.state {
            return false;
        }

        debug!(from = ?self.state, to = ?state, "Indicator transition");
        self.state = state;
        self.entered_at = Some(now);
        true
    }

    /// Advance the pattern to `now` and update the output.
    pub fn tick(&mut self, now: Instant) -> bool {
        let entered_at = *self.entered_at.get_or_insert(now);
        let mut elapsed = now.saturating_duration_since(entered_at);

        if self.state == IndicatorState::AlertBlinkPattern && elapsed >= self.timing.alert_window {
            // Expiry happens at the window boundary, not at the late tick.
            let expired_at = entered_at + self.timing.alert_window;
            debug!("Alert window expired");
            self.state = IndicatorState::SteadyOn;
            self.entered_at = Some(expired_at);
            elapsed = now.saturating_duration_since(expired_at);
        }

        let level = self.level_at(elapsed);
        self.drive(level);
        level
    }

    /// Write a raw level, bypassing the pattern. Used by the link
    /// supervisor while it blocks on reconnect.
    pub(crate) fn drive(&mut self, level: bool) {
        if self.level != Some(level) {
            self.output.write(level);
            self.level = Some(level);
        }
    }

    fn level_at(&self, elapsed: Duration) -> bool {
        match self.state {
            IndicatorState::SteadyOn => true,
            IndicatorState::SteadyOff => false,
            IndicatorState::RecordingPattern => square_wave(elapsed, self.timing.recording_toggle),
            IndicatorState::AlertBlinkPattern => square_wave(elapsed, self.timing.alert_toggle),
            IndicatorState::LinkDownPattern => self.link_down_level(elapsed),
        }
    }

    fn link_down_level(&self, elapsed: Duration) -> bool {
        let cycle = self.timing.link_down_cycle().as_millis();
        if cycle == 0 {
            return true;
        }

        let mut phase = elapsed.as_millis() % cycle;
        for (index, segment) in self.timing.link_down_segments.iter().enumerate() {
            let segment = segment.as_millis();
            if phase < segment {
                return index % 2 == 0;
            }
            phase -= segment;
        }

        true
    }
}

/// High for the first half-period, then alternating.
fn square_wave(elapsed: Duration, half_period: Duration) -> bool {
    let half_period = half_period.as_millis().max(1);
    (elapsed.as_millis() / half_period) % 2 == 0
}
