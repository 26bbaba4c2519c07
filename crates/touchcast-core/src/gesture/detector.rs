//! Touch gesture classification.
//!
//! A gesture is measured only while the sensor is continuously held. Every
//! released sample re-anchors the press timer, so the reported gesture is
//! level-triggered: it names the highest threshold crossed so far in the
//! current hold and drops back to `None` on release.

use crate::{GestureEvent, GestureThresholds};

use std::time::Instant;

/// Classifies raw touch samples into [`GestureEvent`]s.
#[derive(Debug, Clone)]
pub struct GestureDetector {
    thresholds: GestureThresholds,
    press_started_at: Option<Instant>,
}

impl GestureDetector {
    /// Create a detector with the given thresholds.
    pub fn new(thresholds: GestureThresholds) -> Self {
        Self {
            thresholds,
            press_started_at: None,
        }
    }

    /// Sample the touch input at `now` and classify the current hold.
    pub fn sample(&mut self, pressed: bool, now: Instant) -> GestureEvent {
        if !pressed {
            self.press_started_at = Some(now);
            return GestureEvent::None;
        }

        // Held since boot without an observed release.
        let started_at = *self.press_started_at.get_or_insert(now);
        self.classify(now.saturating_duration_since(started_at))
    }

    fn classify(&self, held: std::time::Duration) -> GestureEvent {
        let t = &self.thresholds;
        if held >= t.extra_long_hold {
            GestureEvent::ExtraLongHold
        } else if held >= t.long_hold {
            GestureEvent::LongHold
        } else if held >= t.short_hold {
            GestureEvent::ShortHold
        } else {
            GestureEvent::None
        }
    }

    /// Thresholds in use.
    pub fn thresholds(&self) -> &GestureThresholds {
        &self.thresholds
    }
}
