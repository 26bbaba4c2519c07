#[allow(clippy::module_inception)]
mod device;
mod device_settings;
mod tick_report;

pub use {
    device::{Device, DeviceParts},
    device_settings::DeviceSettings,
    tick_report::TickReport,
};
