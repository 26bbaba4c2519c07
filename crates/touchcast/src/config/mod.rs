mod audio_config;
#[allow(clippy::module_inception)]
mod config;
mod gesture_config;
mod hardware_config;
mod indicator_config;
mod server_config;
mod upload_config;

pub(crate) use {
    audio_config::AudioConfig,
    config::Config,
    gesture_config::GestureConfig,
    hardware_config::HardwareConfig,
    indicator_config::IndicatorConfig,
    server_config::ServerConfig,
    upload_config::{FramingKind, UploadConfig},
};

use std::path::PathBuf;

pub(crate) const CONFIG_ENV: &str = "TOUCHCAST_CONFIG";

pub(crate) const DEFAULT_HOST: &str = "400.com.tw";
pub(crate) const DEFAULT_PORT: u16 = 80;
pub(crate) const DEFAULT_PATH: &str = "/api/voice.html";

pub(crate) const DEFAULT_SHORT_HOLD_MS: u64 = 2_000;
pub(crate) const DEFAULT_LONG_HOLD_MS: u64 = 5_000;
pub(crate) const DEFAULT_EXTRA_LONG_HOLD_MS: u64 = 10_000;

pub(crate) const DEFAULT_RECORDING_TOGGLE_MS: u64 = 500;
pub(crate) const DEFAULT_ALERT_TOGGLE_MS: u64 = 333;
pub(crate) const DEFAULT_ALERT_WINDOW_MS: u64 = 5_000;
pub(crate) const DEFAULT_LINK_DOWN_SEGMENTS_MS: [u64; 5] = [1_000, 500, 500, 500, 2_500];
pub(crate) const DEFAULT_RECONNECT_HOLD_MS: u64 = 1_000;
pub(crate) const DEFAULT_RECONNECT_TOGGLE_MS: u64 = 100;
pub(crate) const DEFAULT_RECONNECT_TOGGLES: u32 = 5;

pub(crate) const DEFAULT_BOUNDARY: &str = "----TouchcastBoundary";
pub(crate) const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5_000;
pub(crate) const DEFAULT_RESPONSE_TIMEOUT_MS: u64 = 5_000;
pub(crate) const DEFAULT_DRAIN_TIMEOUT_MS: u64 = 20;

pub(crate) const DEFAULT_SAMPLE_RATE: u32 = 44_100;
pub(crate) const DEFAULT_BUFFER_SAMPLES: usize = 1_024;

pub(crate) const DEFAULT_TOUCH_GPIO: &str = "/sys/class/gpio/gpio4/value";
pub(crate) const DEFAULT_INDICATOR_GPIO: &str = "/sys/class/gpio/gpio2/value";
pub(crate) const DEFAULT_TOUCH_ACTIVE_HIGH: bool = true;
pub(crate) const DEFAULT_NETWORK_INTERFACE: &str = "wlan0";
pub(crate) const DEFAULT_TICK_INTERVAL_MS: u64 = 10;

pub(crate) fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

pub(crate) fn default_port() -> u16 {
    DEFAULT_PORT
}

pub(crate) fn default_path() -> String {
    DEFAULT_PATH.to_string()
}

pub(crate) fn default_short_hold_ms() -> u64 {
    DEFAULT_SHORT_HOLD_MS
}

pub(crate) fn default_long_hold_ms() -> u64 {
    DEFAULT_LONG_HOLD_MS
}

pub(crate) fn default_extra_long_hold_ms() -> u64 {
    DEFAULT_EXTRA_LONG_HOLD_MS
}

pub(crate) fn default_recording_toggle_ms() -> u64 {
    DEFAULT_RECORDING_TOGGLE_MS
}

pub(crate) fn default_alert_toggle_ms() -> u64 {
    DEFAULT_ALERT_TOGGLE_MS
}

pub(crate) fn default_alert_window_ms() -> u64 {
    DEFAULT_ALERT_WINDOW_MS
}

pub(crate) fn default_link_down_segments_ms() -> Vec<u64> {
    DEFAULT_LINK_DOWN_SEGMENTS_MS.to_vec()
}

pub(crate) fn default_reconnect_hold_ms() -> u64 {
    DEFAULT_RECONNECT_HOLD_MS
}

pub(crate) fn default_reconnect_toggle_ms() -> u64 {
    DEFAULT_RECONNECT_TOGGLE_MS
}

pub(crate) fn default_reconnect_toggles() -> u32 {
    DEFAULT_RECONNECT_TOGGLES
}

pub(crate) fn default_boundary() -> String {
    DEFAULT_BOUNDARY.to_string()
}

pub(crate) fn default_connect_timeout_ms() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_MS
}

pub(crate) fn default_response_timeout_ms() -> u64 {
    DEFAULT_RESPONSE_TIMEOUT_MS
}

pub(crate) fn default_drain_timeout_ms() -> u64 {
    DEFAULT_DRAIN_TIMEOUT_MS
}

pub(crate) fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

pub(crate) fn default_buffer_samples() -> usize {
    DEFAULT_BUFFER_SAMPLES
}

pub(crate) fn default_touch_gpio() -> PathBuf {
    PathBuf::from(DEFAULT_TOUCH_GPIO)
}

pub(crate) fn default_indicator_gpio() -> PathBuf {
    PathBuf::from(DEFAULT_INDICATOR_GPIO)
}

pub(crate) fn default_touch_active_high() -> bool {
    DEFAULT_TOUCH_ACTIVE_HIGH
}

pub(crate) fn default_network_interface() -> String {
    DEFAULT_NETWORK_INTERFACE.to_string()
}

pub(crate) fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}
