use crate::{CoreError, CoreResult};

use std::panic::Location;

use audioadapter_buffers::direct::InterleavedSlice;
use error_location::ErrorLocation;
use rubato::{Fft, FixedSync, Resampler as RubatoResampler};
use tracing::{debug, instrument};

const CHUNK_SIZE: usize = 1024;
const SUB_CHUNKS: usize = 2;

/// Streaming mono sample-rate converter.
///
/// Input that does not fill a whole chunk is carried over to the next
/// call instead of being zero-padded, so consecutive capture buffers join
/// without gaps.
pub struct Resampler {
    resampler: Fft<f32>,
    pending: Vec<f32>,
    output: Vec<f32>,
}

impl Resampler {
    /// Create a converter from `input_rate` to `output_rate`.
    #[track_caller]
    #[instrument]
    pub fn new(input_rate: u32, output_rate: u32) -> CoreResult<Self> {
        let resampler = Fft::<f32>::new(
            input_rate as usize,
            output_rate as usize,
            CHUNK_SIZE,
            SUB_CHUNKS,
            1,
            FixedSync::Input,
        )
        .map_err(|e| CoreError::ResamplingError {
            reason: format!("Failed to create resampler: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let output = vec![0.0; resampler.output_frames_max()];

        debug!(input_rate, output_rate, chunk_size = CHUNK_SIZE, "Resampler initialized");

        Ok(Self {
            resampler,
            pending: Vec::with_capacity(CHUNK_SIZE * 2),
            output,
        })
    }

    /// Feed `samples` and return every output sample now available.
    #[track_caller]
    pub fn process(&mut self, samples: &[f32]) -> CoreResult<Vec<f32>> {
        self.pending.extend_from_slice(samples);

        let chunk_len = self.resampler.input_frames_next();
        let mut converted = Vec::new();
        let mut consumed = 0;
        while self.pending.len() - consumed >= chunk_len {
            let chunk = &self.pending[consumed..consumed + chunk_len];

            let input_adapter = InterleavedSlice::new(chunk, 1, chunk_len).map_err(|e| {
                CoreError::ResamplingError {
                    reason: format!("Failed to create input adapter: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

            let output_frames = self.output.len();
            let mut output_adapter = InterleavedSlice::new_mut(&mut self.output, 1, output_frames)
                .map_err(|e| CoreError::ResamplingError {
                    reason: format!("Failed to create output adapter: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let (_, written) = self
                .resampler
                .process_into_buffer(&input_adapter, &mut output_adapter, None)
                .map_err(|e| CoreError::ResamplingError {
                    reason: format!("Resampling failed: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            converted.extend_from_slice(&self.output[..written]);
            consumed += chunk_len;
        }

        self.pending.drain(..consumed);
        Ok(converted)
    }

    /// Drop carried-over input and the converter's filter state.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.resampler.reset();
    }

    /// Input samples waiting for a full chunk.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
