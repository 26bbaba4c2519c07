//! Configuration management for touchcast.
//!
//! Handles loading and saving TOML configuration files with cross-platform
//! paths, an environment override, and atomic write operations.

use crate::{
    AppError, AppResult,
    config::{
        AudioConfig, CONFIG_ENV, GestureConfig, HardwareConfig, IndicatorConfig, ServerConfig,
        UploadConfig,
    },
};

use std::{
    env, fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
    time::Duration,
};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use touchcast_core::{ControllerSettings, DeviceSettings, UploadSettings};
use tracing::{debug, info, instrument, warn};

/// Bytes per uploaded sample (signed 16-bit).
const BYTES_PER_SAMPLE: usize = 2;

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Upload server destination.
    #[serde(default)]
    pub server: ServerConfig,
    /// Gesture thresholds.
    #[serde(default)]
    pub gesture: GestureConfig,
    /// Indicator light timings.
    #[serde(default)]
    pub indicator: IndicatorConfig,
    /// Upload framing and timeouts.
    #[serde(default)]
    pub upload: UploadConfig,
    /// Capture format.
    #[serde(default)]
    pub audio: AudioConfig,
    /// Host peripherals.
    #[serde(default)]
    pub hardware: HardwareConfig,
}

impl Config {
    /// Load configuration from `TOUCHCAST_CONFIG` or the platform config
    /// directory, creating a default file if none exists.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = match env::var_os(CONFIG_ENV) {
            Some(path) => PathBuf::from(path),
            None => Self::config_path()?,
        };

        Self::load_from(&config_path)
    }

    /// Load configuration from `config_path`, writing defaults there if the
    /// file does not exist.
    #[track_caller]
    #[instrument]
    pub fn load_from(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            info!(config_path = ?config_path, "No config found, creating default");
            let config = Config::default();
            config.save_to(config_path)?;
            warn!(
                host = %config.server.host,
                "Default config created. Set the upload server before deploying."
            );
            return Ok(config);
        }

        let contents = fs::read_to_string(config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration loaded");

        Ok(config)
    }

    /// Save configuration to `config_path` using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(config_dir) = config_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty() && !dir.exists())
        {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let temp_path = config_path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    /// Reject values the device could not run with.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn validate(&self) -> AppResult<()> {
        let reason = if self.audio.sample_rate == 0 {
            Some("audio.sample_rate must be non-zero".to_string())
        } else if self.audio.buffer_samples == 0 {
            Some("audio.buffer_samples must be non-zero".to_string())
        } else if self.hardware.network_interface.trim().is_empty() {
            Some("hardware.network_interface is empty".to_string())
        } else if self.hardware.tick_interval_ms == 0 {
            Some("hardware.tick_interval_ms must be non-zero".to_string())
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(AppError::ConfigError {
                reason,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.device_settings().validate()?;
        Ok(())
    }

    /// Settings consumed by [`touchcast_core::Device`].
    pub fn device_settings(&self) -> DeviceSettings {
        let indicator = self.indicator.timing();

        DeviceSettings {
            gestures: self.gesture.thresholds(),
            controller: ControllerSettings {
                alert_window: indicator.alert_window,
                capture_bytes: self.audio.buffer_samples * BYTES_PER_SAMPLE,
                ..ControllerSettings::default()
            },
            indicator,
            upload: UploadSettings {
                host: self.server.host.clone(),
                port: self.server.port,
                path: self.server.path.clone(),
                framing: self.upload.framing(),
                connect_timeout: Duration::from_millis(self.upload.connect_timeout_ms),
                response_timeout: Duration::from_millis(self.upload.response_timeout_ms),
                drain_timeout: Duration::from_millis(self.upload.drain_timeout_ms),
            },
            tick_interval: Duration::from_millis(self.hardware.tick_interval_ms),
        }
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "touchcast", "Touchcast").ok_or_else(|| {
            AppError::ConfigError {
                reason: "Failed to get config directory".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}
