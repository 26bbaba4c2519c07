use crate::{CoreError, CoreResult};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;

/// Timing constants for every indicator pattern and the reconnect wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorTiming {
    /// Half-period of `RecordingPattern`.
    pub recording_toggle: Duration,
    /// Half-period of `AlertBlinkPattern`.
    pub alert_toggle: Duration,
    /// How long `AlertBlinkPattern` runs before expiring to `SteadyOn`.
    pub alert_window: Duration,
    /// `LinkDownPattern` segments, alternating high/low starting high.
    pub link_down_segments: Vec<Duration>,
    /// Full-brightness hold at the start of each reconnect round.
    pub reconnect_hold: Duration,
    /// Half-period of the reconnect toggles.
    pub reconnect_toggle: Duration,
    /// Low/high toggles per reconnect round.
    pub reconnect_toggles: u32,
}

impl IndicatorTiming {
    /// Total length of one `LinkDownPattern` cycle.
    pub fn link_down_cycle(&self) -> Duration {
        self.link_down_segments.iter().sum()
    }

    /// Check every period is non-zero so pattern arithmetic is defined.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        let zero = [
            ("recording_toggle", self.recording_toggle),
            ("alert_toggle", self.alert_toggle),
            ("alert_window", self.alert_window),
            ("reconnect_toggle", self.reconnect_toggle),
        ]
        .into_iter()
        .find(|(_, d)| d.is_zero());

        if let Some((name, _)) = zero {
            return Err(CoreError::InvalidSettings {
                reason: format!("indicator timing `{}` must be non-zero", name),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.link_down_cycle().is_zero() {
            return Err(CoreError::InvalidSettings {
                reason: "link-down pattern needs at least one non-zero segment".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

impl Default for IndicatorTiming {
    fn default() -> Self {
        Self {
            recording_toggle: Duration::from_millis(500),
            alert_toggle: Duration::from_millis(333),
            alert_window: Duration::from_millis(5_000),
            link_down_segments: [1_000, 500, 500, 500, 2_500]
                .into_iter()
                .map(Duration::from_millis)
                .collect(),
            reconnect_hold: Duration::from_millis(1_000),
            reconnect_toggle: Duration::from_millis(100),
            reconnect_toggles: 5,
        }
    }
}
