use crate::{
    ControllerSettings, CoreError, CoreResult, GestureThresholds, IndicatorTiming, UploadSettings,
};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;

/// Every tunable the device loop consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSettings {
    /// Gesture classification thresholds.
    pub gestures: GestureThresholds,
    /// Indicator pattern timings.
    pub indicator: IndicatorTiming,
    /// Recording policy and capture size.
    pub controller: ControllerSettings,
    /// Upload destination and timeouts.
    pub upload: UploadSettings,
    /// Sleep per tick while no session is active.
    pub tick_interval: Duration,
}

impl DeviceSettings {
    /// Validate each component's settings and their cross-constraints.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        self.gestures.validate()?;
        self.indicator.validate()?;
        self.controller.validate()?;
        self.upload.validate()?;

        if self.indicator.alert_window != self.controller.alert_window {
            return Err(CoreError::InvalidSettings {
                reason: format!(
                    "indicator alert window {:?} differs from controller alert window {:?}",
                    self.indicator.alert_window, self.controller.alert_window
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
