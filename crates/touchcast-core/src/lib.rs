//! Touchcast Core Library
//!
//! Touch-gesture controlled audio capture and streaming upload, built as
//! three cooperating state machines (recording controller, indicator
//! light, upload channel) advanced by a single-threaded tick loop.
//!
//! # Example
//!
//! ```no_run
//! use touchcast_core::{
//!     ControllerSettings, CoreResult, Device, DeviceParts, DeviceSettings, DigitalInput,
//!     DigitalOutput, Framing, GestureThresholds, IndicatorTiming, Microphone, Radio,
//!     SystemClock, TcpTransport, UploadSettings,
//! };
//!
//! use std::time::Duration;
//!
//! struct Pin;
//! impl DigitalInput for Pin {
//!     fn read(&mut self) -> bool { false }
//! }
//! impl DigitalOutput for Pin {
//!     fn write(&mut self, _level: bool) {}
//! }
//!
//! struct Wired;
//! impl Radio for Wired {
//!     fn begin(&mut self) {}
//!     fn is_associated(&mut self) -> bool { true }
//! }
//!
//! fn main() -> CoreResult<()> {
//!     let settings = DeviceSettings {
//!         gestures: GestureThresholds::default(),
//!         indicator: IndicatorTiming::default(),
//!         controller: ControllerSettings::default(),
//!         upload: UploadSettings {
//!             host: "example.com".to_string(),
//!             port: 80,
//!             path: "/api/voice".to_string(),
//!             framing: Framing::Raw,
//!             connect_timeout: Duration::from_secs(5),
//!             response_timeout: Duration::from_secs(5),
//!             drain_timeout: Duration::from_millis(10),
//!         },
//!         tick_interval: Duration::from_millis(10),
//!     };
//!
//!     let parts = DeviceParts {
//!         touch: Pin,
//!         indicator: Pin,
//!         radio: Wired,
//!         audio: Microphone::open(44_100)?,
//!         transport: TcpTransport::new(),
//!         clock: SystemClock,
//!     };
//!
//!     Device::new(parts, settings)?.run()
//! }
//! ```

mod audio;
mod device;
mod error;
mod gesture;
mod hal;
mod indicator;
mod link;
mod recording;
mod upload;

pub use {
    audio::Microphone,
    device::{Device, DeviceParts, DeviceSettings, TickReport},
    error::{CoreError, Result as CoreResult},
    gesture::{GestureDetector, GestureEvent, GestureThresholds},
    hal::{AudioSource, Clock, DigitalInput, DigitalOutput, Radio, SystemClock},
    indicator::{IndicatorDriver, IndicatorState, IndicatorTiming, derive_indicator_state},
    link::{LinkStatus, LinkSupervisor},
    recording::{ControllerSettings, ControllerState, RecordingController, RecordingSession},
    upload::{
        Framing, ReadOutcome, TcpTransport, Transport, UploadAttempt, UploadChannel,
        UploadOutcome, UploadSettings, UploadStats,
    },
};

#[cfg(test)]
mod tests;
