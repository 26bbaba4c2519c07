use crate::config::{default_buffer_samples, default_sample_rate};

use serde::{Deserialize, Serialize};

/// Capture format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Upload sample rate in Hz. Capture is resampled to this rate.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Mono 16-bit samples per capture cycle.
    #[serde(default = "default_buffer_samples")]
    pub buffer_samples: usize,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            buffer_samples: default_buffer_samples(),
        }
    }
}
