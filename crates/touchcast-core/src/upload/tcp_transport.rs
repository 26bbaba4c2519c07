//! [`Transport`] over a blocking [`TcpStream`].

use crate::{CoreError, CoreResult, ReadOutcome, Transport};

use std::{
    io::{ErrorKind, Read, Write},
    net::{Shutdown, TcpStream, ToSocketAddrs},
    panic::Location,
    time::Duration,
};

use error_location::ErrorLocation;
use tracing::{debug, instrument};

/// Socket timeouts must be non-zero.
const MIN_SOCKET_TIMEOUT: Duration = Duration::from_millis(1);

/// Keep-alive TCP client connection.
#[derive(Debug, Default)]
pub struct TcpTransport {
    stream: Option<TcpStream>,
}

impl TcpTransport {
    /// Create a transport with no open connection.
    pub fn new() -> Self {
        Self::default()
    }

    #[track_caller]
    fn stream(&mut self) -> CoreResult<&mut TcpStream> {
        self.stream.as_mut().ok_or(CoreError::NotConnected {
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

#[track_caller]
fn connect_failed(host: &str, port: u16, reason: String) -> CoreError {
    CoreError::ConnectFailed {
        host: host.to_string(),
        port,
        reason,
        location: ErrorLocation::from(Location::caller()),
    }
}

/// Non-blocking peek: a readable EOF means the peer has gone away.
fn peer_closed(stream: &TcpStream) -> bool {
    if stream.set_nonblocking(true).is_err() {
        return true;
    }

    let mut peek = [0u8; 1];
    let closed = match stream.peek(&mut peek) {
        Ok(0) => true,
        Ok(_) => false,
        Err(e) if e.kind() == ErrorKind::WouldBlock => false,
        Err(_) => true,
    };

    stream.set_nonblocking(false).is_err() || closed
}

impl Transport for TcpTransport {
    #[track_caller]
    #[instrument(skip(self))]
    fn connect(&mut self, host: &str, port: u16, timeout: Duration) -> CoreResult<()> {
        self.close();

        let addrs = match (host, port).to_socket_addrs() {
            Ok(addrs) => addrs,
            Err(e) => return Err(connect_failed(host, port, format!("Failed to resolve: {}", e))),
        };

        let timeout = timeout.max(MIN_SOCKET_TIMEOUT);
        let mut last_error = None;
        for addr in addrs {
            match TcpStream::connect_timeout(&addr, timeout) {
                Ok(stream) => {
                    stream.set_nodelay(true)?;
                    stream.set_write_timeout(Some(timeout))?;
                    debug!(peer = %addr, "TCP connection established");
                    self.stream = Some(stream);
                    return Ok(());
                }
                Err(e) => last_error = Some(e),
            }
        }

        let reason = match last_error {
            Some(e) => e.to_string(),
            None => "no addresses resolved".to_string(),
        };
        Err(connect_failed(host, port, reason))
    }

    fn connected(&mut self) -> bool {
        let stale = match &self.stream {
            Some(stream) => peer_closed(stream),
            None => return false,
        };

        if stale {
            debug!("Dropping stale connection");
            self.close();
        }

        !stale
    }

    #[track_caller]
    fn write_all(&mut self, bytes: &[u8]) -> CoreResult<()> {
        let stream = self.stream()?;
        stream.write_all(bytes)?;
        stream.flush()?;
        Ok(())
    }

    #[track_caller]
    fn read(&mut self, buffer: &mut [u8], timeout: Duration) -> CoreResult<ReadOutcome> {
        let stream = self.stream()?;
        stream.set_read_timeout(Some(timeout.max(MIN_SOCKET_TIMEOUT)))?;

        match stream.read(buffer) {
            Ok(0) => Ok(ReadOutcome::Closed),
            Ok(n) => Ok(ReadOutcome::Data(n)),
            Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                Ok(ReadOutcome::TimedOut)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn close(&mut self) {
        if let Some(stream) = self.stream.take() {
            let _ = stream.shutdown(Shutdown::Both);
        }
    }
}
