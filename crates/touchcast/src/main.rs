//! Touchcast: touch-gesture controlled audio capture with streaming upload.

mod config;
mod error;
mod gpio;
mod link_probe;

pub(crate) use {
    error::{AppError, Result as AppResult},
    gpio::{SysfsInput, SysfsOutput},
    link_probe::{SYS_CLASS_NET, SysfsRadio},
};

use crate::config::Config;

use std::{env, path::Path};

use touchcast_core::{Device, DeviceParts, Microphone, SystemClock, TcpTransport};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TOUCHCAST_LOG";
const LOG_FORMAT_ENV: &str = "TOUCHCAST_LOG_FORMAT";
const DEFAULT_LOG_FILTER: &str = "touchcast=debug,touchcast_core=debug";

/// Application entry point.
fn main() {
    init_logging();

    if let Err(e) = run() {
        error!("Startup failed: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if env::var(LOG_FORMAT_ENV).is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Assemble the device from config and run it. Returns only on a startup error.
fn run() -> AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let hardware = &config.hardware;
    let touch = SysfsInput::open(&hardware.touch_gpio, hardware.touch_active_high)?;
    let indicator = SysfsOutput::open(&hardware.indicator_gpio)?;
    let radio = SysfsRadio::open(Path::new(SYS_CLASS_NET), &hardware.network_interface)?;
    let audio = Microphone::open(config.audio.sample_rate)?;

    let parts = DeviceParts {
        touch,
        indicator,
        radio,
        audio,
        transport: TcpTransport::new(),
        clock: SystemClock,
    };

    let mut device = Device::new(parts, config.device_settings())?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        sample_rate = config.audio.sample_rate,
        "Touchcast starting"
    );

    device.run()
}
