use crate::{CoreError, CoreResult, Framing};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;

/// Destination and timeouts for [`crate::UploadChannel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSettings {
    /// Upload server host name, also sent as the `Host` header.
    pub host: String,
    /// Upload server port.
    pub port: u16,
    /// Request path.
    pub path: String,
    /// Body framing.
    pub framing: Framing,
    /// Bound on opening a connection and on each write.
    pub connect_timeout: Duration,
    /// Bound on waiting for the first response byte.
    pub response_timeout: Duration,
    /// Bound on each read while draining the rest of the response.
    pub drain_timeout: Duration,
}

impl UploadSettings {
    /// Reject settings that could never produce a valid request.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        let reason = if self.host.trim().is_empty() {
            Some("upload host is empty".to_string())
        } else if self.port == 0 {
            Some("upload port must be non-zero".to_string())
        } else if !self.path.starts_with('/') {
            Some(format!("upload path must start with '/': {:?}", self.path))
        } else if self.response_timeout.is_zero() || self.connect_timeout.is_zero() {
            Some("upload timeouts must be non-zero".to_string())
        } else if let Framing::Multipart { boundary } = &self.framing {
            if boundary.is_empty() || boundary.contains(['\r', '\n']) {
                Some(format!("invalid multipart boundary: {:?}", boundary))
            } else {
                None
            }
        } else {
            None
        };

        match reason {
            Some(reason) => Err(CoreError::InvalidSettings {
                reason,
                location: ErrorLocation::from(Location::caller()),
            }),
            None => Ok(()),
        }
    }
}
