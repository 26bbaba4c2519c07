use crate::config::{default_extra_long_hold_ms, default_long_hold_ms, default_short_hold_ms};

use std::time::Duration;

use serde::{Deserialize, Serialize};
use touchcast_core::GestureThresholds;

/// Hold thresholds in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureConfig {
    #[serde(default = "default_short_hold_ms")]
    pub short_hold_ms: u64,
    #[serde(default = "default_long_hold_ms")]
    pub long_hold_ms: u64,
    #[serde(default = "default_extra_long_hold_ms")]
    pub extra_long_hold_ms: u64,
}

impl GestureConfig {
    pub(crate) fn thresholds(&self) -> GestureThresholds {
        GestureThresholds {
            short_hold: Duration::from_millis(self.short_hold_ms),
            long_hold: Duration::from_millis(self.long_hold_ms),
            extra_long_hold: Duration::from_millis(self.extra_long_hold_ms),
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            short_hold_ms: default_short_hold_ms(),
            long_hold_ms: default_long_hold_ms(),
            extra_long_hold_ms: default_extra_long_hold_ms(),
        }
    }
}
