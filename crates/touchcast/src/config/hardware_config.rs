use crate::config::{
    default_indicator_gpio, default_network_interface, default_tick_interval_ms,
    default_touch_active_high, default_touch_gpio,
};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Host peripherals and loop pacing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareConfig {
    /// Sysfs value file of the touch sensor pin.
    #[serde(default = "default_touch_gpio")]
    pub touch_gpio: PathBuf,
    /// Sysfs value file of the indicator pin.
    #[serde(default = "default_indicator_gpio")]
    pub indicator_gpio: PathBuf,
    /// Whether a high touch pin means pressed.
    #[serde(default = "default_touch_active_high")]
    pub touch_active_high: bool,
    /// Interface whose operstate decides link status.
    #[serde(default = "default_network_interface")]
    pub network_interface: String,
    /// Idle sleep per tick.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl Default for HardwareConfig {
    fn default() -> Self {
        Self {
            touch_gpio: default_touch_gpio(),
            indicator_gpio: default_indicator_gpio(),
            touch_active_high: default_touch_active_high(),
            network_interface: default_network_interface(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}
