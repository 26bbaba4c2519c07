use crate::{CoreError, CoreResult};

use std::{
    collections::VecDeque,
    panic::Location,
    sync::{
        atomic::{AtomicBool, Ordering},
        {Arc, Mutex},
    },
};

use cpal::{
    Device, Stream, StreamConfig,
    traits::{DeviceTrait, HostTrait, StreamTrait},
};
use error_location::ErrorLocation;
use tracing::{error, info, instrument, warn};

/// Maximum mono samples held between reads (10 seconds at 48kHz).
///
/// The loop drains every cycle; this only bounds memory while an upload
/// stalls. Oldest samples are dropped first.
pub(crate) const MAX_BUFFER_SAMPLES: usize = 48_000 * 10;

/// Live microphone stream feeding a bounded mono ring buffer.
pub struct AudioCapturer {
    device: Device,
    config: StreamConfig,
    stream: Option<Stream>,
    samples: Arc<Mutex<VecDeque<f32>>>,
    /// Set before the stream is dropped so a late callback writes nothing.
    shutdown: Arc<AtomicBool>,
}

impl AudioCapturer {
    /// Open the default input device.
    #[track_caller]
    #[instrument]
    pub fn new() -> CoreResult<Self> {
        let host = cpal::default_host();

        let device = host
            .default_input_device()
            .ok_or(CoreError::AudioSourceInitFailed {
                reason: "No microphone found".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let config = device
            .default_input_config()
            .map_err(|e| CoreError::AudioSourceInitFailed {
                reason: format!("Failed to get config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(
            device_id = ?device.id(),
            sample_rate = config.sample_rate(),
            channels = config.channels(),
            "AudioCapturer initialized"
        );

        Ok(Self {
            device,
            config: config.into(),
            stream: None,
            samples: Arc::new(Mutex::new(VecDeque::with_capacity(MAX_BUFFER_SAMPLES))),
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Start streaming into the ring buffer.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn start(&mut self) -> CoreResult<()> {
        let samples = Arc::clone(&self.samples);
        let shutdown = Arc::clone(&self.shutdown);
        let channels = usize::from(self.config.channels.max(1));

        self.shutdown.store(false, Ordering::Release);

        let stream = self
            .device
            .build_input_stream(
                &self.config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    if shutdown.load(Ordering::Acquire) {
                        return;
                    }
                    let mut buf = samples.lock().unwrap_or_else(|e| {
                        error!("Sample buffer lock poisoned, recovering: {}", e);
                        e.into_inner()
                    });
                    push_downmixed(&mut buf, data, channels);
                },
                |err| {
                    error!("Audio stream error: {}", err);
                },
                None,
            )
            .map_err(|e| CoreError::AudioSourceInitFailed {
                reason: format!("Failed to build stream: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        stream.play().map_err(|e| CoreError::AudioSourceInitFailed {
            reason: format!("Failed to start stream: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        self.stream = Some(stream);
        info!("Audio capture started");

        Ok(())
    }

    /// Take every buffered mono sample.
    #[track_caller]
    pub fn drain(&self) -> CoreResult<Vec<f32>> {
        if self.stream.is_none() {
            return Err(CoreError::AudioReadFailed {
                reason: "capture stream is not running".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut buf = self.samples.lock().unwrap_or_else(|e| {
            warn!("Sample buffer lock poisoned, recovering: {}", e);
            e.into_inner()
        });
        Ok(buf.drain(..).collect())
    }

    /// Device sample rate.
    pub fn sample_rate(&self) -> u32 {
        self.config.sample_rate
    }
}

impl Drop for AudioCapturer {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Release);
        if self.stream.take().is_some() {
            info!("Audio capture stopped");
        }
    }
}

/// Average each interleaved frame to one sample, dropping the oldest
/// samples once the buffer is full.
pub(crate) fn push_downmixed(buf: &mut VecDeque<f32>, data: &[f32], channels: usize) {
    let channels = channels.max(1);
    buf.extend(
        data.chunks_exact(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32),
    );
    while buf.len() > MAX_BUFFER_SAMPLES {
        buf.pop_front();
    }
}
