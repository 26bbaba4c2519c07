use crate::{CoreError, CoreResult};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;

/// Hold durations at which a press escalates to the next [`crate::GestureEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureThresholds {
    /// Minimum hold for `ShortHold`.
    pub short_hold: Duration,
    /// Minimum hold for `LongHold`.
    pub long_hold: Duration,
    /// Minimum hold for `ExtraLongHold`.
    pub extra_long_hold: Duration,
}

impl GestureThresholds {
    /// Check that thresholds strictly increase.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.short_hold < self.long_hold && self.long_hold < self.extra_long_hold {
            return Ok(());
        }

        Err(CoreError::InvalidSettings {
            reason: format!(
                "gesture thresholds must increase: short={:?} long={:?} extra_long={:?}",
                self.short_hold, self.long_hold, self.extra_long_hold
            ),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            short_hold: Duration::from_millis(2_000),
            long_hold: Duration::from_millis(5_000),
            extra_long_hold: Duration::from_millis(10_000),
        }
    }
}
