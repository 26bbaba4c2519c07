use crate::config::{
    default_alert_toggle_ms, default_alert_window_ms, default_link_down_segments_ms,
    default_reconnect_hold_ms, default_reconnect_toggle_ms, default_reconnect_toggles,
    default_recording_toggle_ms,
};

use std::time::Duration;

use serde::{Deserialize, Serialize};
use touchcast_core::IndicatorTiming;

/// Indicator pattern timings in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    /// Half-period of the recording blink.
    #[serde(default = "default_recording_toggle_ms")]
    pub recording_toggle_ms: u64,
    /// Half-period of the stop alert blink.
    #[serde(default = "default_alert_toggle_ms")]
    pub alert_toggle_ms: u64,
    /// Length of the stop alert, shared with the recording controller.
    #[serde(default = "default_alert_window_ms")]
    pub alert_window_ms: u64,
    /// Link-down cycle as alternating on/off segments, starting on.
    #[serde(default = "default_link_down_segments_ms")]
    pub link_down_segments_ms: Vec<u64>,
    #[serde(default = "default_reconnect_hold_ms")]
    pub reconnect_hold_ms: u64,
    #[serde(default = "default_reconnect_toggle_ms")]
    pub reconnect_toggle_ms: u64,
    #[serde(default = "default_reconnect_toggles")]
    pub reconnect_toggles: u32,
}

impl IndicatorConfig {
    pub(crate) fn timing(&self) -> IndicatorTiming {
        IndicatorTiming {
            recording_toggle: Duration::from_millis(self.recording_toggle_ms),
            alert_toggle: Duration::from_millis(self.alert_toggle_ms),
            alert_window: Duration::from_millis(self.alert_window_ms),
            link_down_segments: self
                .link_down_segments_ms
                .iter()
                .copied()
                .map(Duration::from_millis)
                .collect(),
            reconnect_hold: Duration::from_millis(self.reconnect_hold_ms),
            reconnect_toggle: Duration::from_millis(self.reconnect_toggle_ms),
            reconnect_toggles: self.reconnect_toggles,
        }
    }
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            recording_toggle_ms: default_recording_toggle_ms(),
            alert_toggle_ms: default_alert_toggle_ms(),
            alert_window_ms: default_alert_window_ms(),
            link_down_segments_ms: default_link_down_segments_ms(),
            reconnect_hold_ms: default_reconnect_hold_ms(),
            reconnect_toggle_ms: default_reconnect_toggle_ms(),
            reconnect_toggles: default_reconnect_toggles(),
        }
    }
}
