use error_location::ErrorLocation;
use thiserror::Error;

/// Device errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The capture peripheral could not be brought up. Fatal at boot.
    #[error("Audio source initialization failed: {reason} {location}")]
    AudioSourceInitFailed {
        /// Description of the initialization failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Reading a capture buffer failed.
    #[error("Audio read failed: {reason} {location}")]
    AudioReadFailed {
        /// Description of the read failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Audio resampling failed.
    #[error("Resampling error: {reason} {location}")]
    ResamplingError {
        /// Description of the resampling error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Opening a connection to the upload server failed.
    #[error("Connect to {host}:{port} failed: {reason} {location}")]
    ConnectFailed {
        /// Upload server host.
        host: String,
        /// Upload server port.
        port: u16,
        /// Description of the connect failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Operation needs an open connection but none exists.
    #[error("Transport not connected {location}")]
    NotConnected {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// IO error on an open connection.
    #[error("Transport IO error: {source} {location}")]
    Io {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Component settings are inconsistent.
    #[error("Invalid settings: {reason} {location}")]
    InvalidSettings {
        /// Description of the inconsistency.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl From<std::io::Error> for CoreError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        CoreError::Io {
            source,
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
