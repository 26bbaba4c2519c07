//! One upload attempt per capture cycle over a keep-alive connection.
//!
//! `send` never retries internally: every failure closes the socket and is
//! reported as an [`UploadOutcome`], and the next call reopens. Pacing comes
//! from the capture buffer duration, so no backoff is applied here.

use crate::{ReadOutcome, Transport, UploadOutcome, UploadSettings};

use std::time::Instant;

use tracing::{debug, info, instrument, warn};

/// Size of the scratch buffer used to drain responses.
const RESPONSE_CHUNK: usize = 512;

/// Most response bytes drained per request before the connection is dropped.
pub(crate) const MAX_DRAIN_BYTES: usize = 16 * 1024;

/// Running outcome counters, for diagnostics only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadStats {
    /// Attempts that got a response.
    pub sent: u64,
    /// Attempts without a usable connection.
    pub connect_failed: u64,
    /// Attempts whose response never arrived.
    pub response_timeout: u64,
}

/// Upload protocol over a [`Transport`].
pub struct UploadChannel<T> {
    transport: T,
    settings: UploadSettings,
    response: Vec<u8>,
    stats: UploadStats,
}

impl<T: Transport> UploadChannel<T> {
    /// Create a channel. No connection is opened until the first send.
    pub fn new(transport: T, settings: UploadSettings) -> Self {
        Self {
            transport,
            settings,
            response: vec![0; RESPONSE_CHUNK],
            stats: UploadStats::default(),
        }
    }

    /// Settings in use.
    pub fn settings(&self) -> &UploadSettings {
        &self.settings
    }

    /// Outcome counters since creation.
    pub fn stats(&self) -> UploadStats {
        self.stats
    }

    /// Upload one payload and wait for the server to answer.
    #[instrument(skip(self, payload), fields(bytes = payload.len()))]
    pub fn send(&mut self, payload: &[u8]) -> UploadOutcome {
        let outcome = self.attempt(payload);

        match outcome {
            UploadOutcome::Sent => self.stats.sent += 1,
            UploadOutcome::ConnectFailed => self.stats.connect_failed += 1,
            UploadOutcome::ResponseTimeout => self.stats.response_timeout += 1,
        }

        outcome
    }

    fn attempt(&mut self, payload: &[u8]) -> UploadOutcome {
        if !self.transport.connected() {
            let s = &self.settings;
            if let Err(e) = self.transport.connect(&s.host, s.port, s.connect_timeout) {
                warn!(error = %e, "Connection to server failed");
                return UploadOutcome::ConnectFailed;
            }
            info!(host = %s.host, port = s.port, "Connected to upload server");
        }

        if let Err(e) = self.write_request(payload) {
            warn!(error = %e, "Request write failed, closing connection");
            self.transport.close();
            return UploadOutcome::ConnectFailed;
        }

        let first = match self
            .transport
            .read(&mut self.response, self.settings.response_timeout)
        {
            Ok(ReadOutcome::Data(n)) => n,
            Ok(ReadOutcome::TimedOut) => {
                warn!(
                    timeout_ms = self.settings.response_timeout.as_millis(),
                    "Response timeout"
                );
                self.transport.close();
                return UploadOutcome::ResponseTimeout;
            }
            Ok(ReadOutcome::Closed) => {
                warn!("Server closed connection without responding");
                self.transport.close();
                return UploadOutcome::ResponseTimeout;
            }
            Err(e) => {
                warn!(error = %e, "Response read failed");
                self.transport.close();
                return UploadOutcome::ResponseTimeout;
            }
        };

        let status_line = self.response[..first]
            .split(|&b| b == b'\r' || b == b'\n')
            .next()
            .map(String::from_utf8_lossy)
            .unwrap_or_default()
            .into_owned();

        let drained = first + self.drain();
        debug!(status = %status_line, response_bytes = drained, "Upload acknowledged");

        UploadOutcome::Sent
    }

    fn write_request(&mut self, payload: &[u8]) -> crate::CoreResult<()> {
        let s = &self.settings;
        let head = s.framing.request_head(&s.host, &s.path, payload.len());
        let trailer = s.framing.trailer();

        self.transport.write_all(head.as_bytes())?;
        self.transport.write_all(payload)?;
        if !trailer.is_empty() {
            self.transport.write_all(trailer.as_bytes())?;
        }
        Ok(())
    }

    /// Discard whatever else the server sent for this request.
    ///
    /// Bounded by `response_timeout` overall and by [`MAX_DRAIN_BYTES`]; a
    /// response still arriving past either bound closes the connection.
    fn drain(&mut self) -> usize {
        let deadline = Instant::now() + self.settings.response_timeout;
        let mut total = 0;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || total >= MAX_DRAIN_BYTES {
                warn!(drained = total, "Response exceeded drain bound, closing connection");
                self.transport.close();
                break;
            }

            match self
                .transport
                .read(&mut self.response, self.settings.drain_timeout.min(remaining))
            {
                Ok(ReadOutcome::Data(n)) => total += n,
                Ok(ReadOutcome::TimedOut) => break,
                Ok(ReadOutcome::Closed) => {
                    debug!("Server closed connection after responding");
                    self.transport.close();
                    break;
                }
                Err(e) => {
                    debug!(error = %e, "Drain read failed, closing connection");
                    self.transport.close();
                    break;
                }
            }
        }
        total
    }
}
