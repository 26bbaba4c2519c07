use crate::config::{
    default_boundary, default_connect_timeout_ms, default_drain_timeout_ms,
    default_response_timeout_ms,
};

use serde::{Deserialize, Serialize};
use touchcast_core::Framing;

/// Wire framing selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FramingKind {
    /// Raw octet-stream body.
    #[default]
    Raw,
    /// Multipart form body.
    Multipart,
}

/// Upload framing and timeouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadConfig {
    #[serde(default)]
    pub framing: FramingKind,
    /// Multipart boundary, ignored for raw framing.
    #[serde(default = "default_boundary")]
    pub boundary: String,
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    #[serde(default = "default_response_timeout_ms")]
    pub response_timeout_ms: u64,
    #[serde(default = "default_drain_timeout_ms")]
    pub drain_timeout_ms: u64,
}

impl UploadConfig {
    pub(crate) fn framing(&self) -> Framing {
        match self.framing {
            FramingKind::Raw => Framing::Raw,
            FramingKind::Multipart => Framing::Multipart {
                boundary: self.boundary.clone(),
            },
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            framing: FramingKind::default(),
            boundary: default_boundary(),
            connect_timeout_ms: default_connect_timeout_ms(),
            response_timeout_ms: default_response_timeout_ms(),
            drain_timeout_ms: default_drain_timeout_ms(),
        }
    }
}
