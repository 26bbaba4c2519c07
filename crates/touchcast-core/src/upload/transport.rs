use crate::CoreResult;

use std::time::Duration;

/// What a bounded read observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// `n` bytes were read into the buffer.
    Data(usize),
    /// Nothing arrived before the timeout.
    TimedOut,
    /// The peer closed the connection.
    Closed,
}

/// One client connection, consumed by [`crate::UploadChannel`].
///
/// Every blocking call is bounded by an explicit timeout.
pub trait Transport {
    /// Open a connection to `host:port`, replacing any previous one.
    fn connect(&mut self, host: &str, port: u16, timeout: Duration) -> CoreResult<()>;

    /// Whether an open, non-stale connection exists.
    fn connected(&mut self) -> bool;

    /// Write all of `bytes` to the open connection.
    fn write_all(&mut self, bytes: &[u8]) -> CoreResult<()>;

    /// Read whatever is available, waiting at most `timeout` for the first byte.
    fn read(&mut self, buffer: &mut [u8], timeout: Duration) -> CoreResult<ReadOutcome>;

    /// Close the connection. Closing a closed transport is a no-op.
    fn close(&mut self);
}
