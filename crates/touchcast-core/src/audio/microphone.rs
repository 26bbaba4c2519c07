//! Default-microphone [`AudioSource`].
//!
//! Captures at the device rate, converts to the configured rate, and hands
//! out signed 16-bit little-endian mono PCM one buffer at a time.

use crate::{
    AudioSource, CoreResult,
    audio::{
        AudioCapturer, Resampler,
        pcm::{BYTES_PER_SAMPLE, encode_i16_le},
    },
};

use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use tracing::{debug, info, instrument};

const POLL_INTERVAL: Duration = Duration::from_millis(2);
const READ_SLACK: Duration = Duration::from_millis(100);

/// Microphone capture stream exposed as an [`AudioSource`].
pub struct Microphone {
    capturer: AudioCapturer,
    resampler: Option<Resampler>,
    sample_rate: u32,
    ready: VecDeque<f32>,
}

impl Microphone {
    /// Open the default input device and start streaming at `sample_rate`.
    ///
    /// # Errors
    ///
    /// Returns `AudioSourceInitFailed` if no device can be opened or started.
    #[track_caller]
    #[instrument]
    pub fn open(sample_rate: u32) -> CoreResult<Self> {
        let mut capturer = AudioCapturer::new()?;
        let device_rate = capturer.sample_rate();

        let resampler = if device_rate != sample_rate {
            debug!(input_rate = device_rate, output_rate = sample_rate, "Resampler configured");
            Some(Resampler::new(device_rate, sample_rate)?)
        } else {
            None
        };

        capturer.start()?;
        info!(sample_rate, device_rate, "Microphone ready");

        Ok(Self {
            capturer,
            resampler,
            sample_rate,
            ready: VecDeque::new(),
        })
    }

    /// Output sample rate.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn pull(&mut self) -> CoreResult<bool> {
        let fresh = self.capturer.drain()?;
        if fresh.is_empty() {
            return Ok(false);
        }

        match self.resampler.as_mut() {
            Some(resampler) => self.ready.extend(resampler.process(&fresh)?),
            None => self.ready.extend(fresh),
        }
        Ok(true)
    }
}

impl AudioSource for Microphone {
    /// Blocks until a full buffer is available or about twice the buffer
    /// duration has passed, then returns what was captured.
    fn read(&mut self, buffer: &mut [u8]) -> CoreResult<usize> {
        let wanted = buffer.len() / BYTES_PER_SAMPLE;
        let buffer_duration =
            Duration::from_secs_f64(wanted as f64 / f64::from(self.sample_rate.max(1)));
        let deadline = Instant::now() + buffer_duration * 2 + READ_SLACK;

        while self.ready.len() < wanted {
            if !self.pull()? {
                if Instant::now() >= deadline {
                    debug!(available = self.ready.len(), wanted, "Short capture buffer");
                    break;
                }
                std::thread::sleep(POLL_INTERVAL);
            }
        }

        let take = wanted.min(self.ready.len());
        Ok(encode_i16_le(self.ready.drain(..take), buffer))
    }

    fn reset(&mut self) -> CoreResult<()> {
        let stale = self.capturer.drain()?.len() + self.ready.len();
        self.ready.clear();
        if let Some(resampler) = self.resampler.as_mut() {
            resampler.reset();
        }
        debug!(discarded_samples = stale, "Capture backlog discarded");
        Ok(())
    }
}
