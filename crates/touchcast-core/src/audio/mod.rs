pub(crate) mod capture;
mod microphone;
pub(crate) mod pcm;
mod resampler;

pub(crate) use {capture::AudioCapturer, resampler::Resampler};

pub use microphone::Microphone;
