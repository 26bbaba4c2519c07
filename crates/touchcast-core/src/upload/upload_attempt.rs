/// Result of one upload cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadOutcome {
    /// Request written and a response arrived.
    Sent,
    /// No usable connection: connect or write failed.
    ConnectFailed,
    /// No response arrived within the response timeout.
    ResponseTimeout,
}

/// One capture buffer and what happened to it. Lives for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadAttempt<'a> {
    /// Captured bytes handed to the channel.
    pub payload: &'a [u8],
    /// Outcome of the send.
    pub outcome: UploadOutcome,
}

impl UploadAttempt<'_> {
    /// Number of payload bytes in this attempt.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Whether the capture produced no bytes.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}
