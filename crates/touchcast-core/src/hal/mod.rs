//! Capability interfaces for the peripherals the device loop consumes.
//!
//! Every component is generic over these traits so the loop runs against
//! real hardware, host backends, or test fakes without code changes.

mod audio_source;
mod clock;
mod digital;
mod radio;

pub use {
    audio_source::AudioSource,
    clock::{Clock, SystemClock},
    digital::{DigitalInput, DigitalOutput},
    radio::Radio,
};
