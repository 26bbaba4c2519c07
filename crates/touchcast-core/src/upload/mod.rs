mod channel;
mod framing;
mod settings;
mod tcp_transport;
mod transport;
mod upload_attempt;

pub(crate) use channel::MAX_DRAIN_BYTES;

pub use {
    channel::{UploadChannel, UploadStats},
    framing::Framing,
    settings::UploadSettings,
    tcp_transport::TcpTransport,
    transport::{ReadOutcome, Transport},
    upload_attempt::{UploadAttempt, UploadOutcome},
};
