use crate::{CoreError, ReadOutcome, TcpTransport, Transport};

use std::{
    io::{Read, Write},
    net::TcpListener,
    thread,
    time::Duration,
};

const TIMEOUT: Duration = Duration::from_millis(200);

/// WHAT: Request bytes reach the server and its reply is read back
/// WHY: The transport is the only path to the upload server
#[test]
#[allow(clippy::unwrap_used)]
fn given_local_server_when_writing_and_reading_then_bytes_exchanged() {
    // Given: A server that reads 5 bytes and answers
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = [0u8; 5];
        stream.read_exact(&mut request).unwrap();
        stream.write_all(b"HTTP/1.1 200 OK\r\n\r\n").unwrap();
        request
    });

    // When: Connecting, writing and reading
    let mut transport = TcpTransport::new();
    transport.connect("127.0.0.1", port, TIMEOUT).unwrap();
    transport.write_all(b"hello").unwrap();
    let mut buffer = [0u8; 64];
    let outcome = transport.read(&mut buffer, Duration::from_secs(2)).unwrap();

    // Then: Both directions delivered
    assert_eq!(server.join().unwrap(), *b"hello");
    let n = match outcome {
        ReadOutcome::Data(n) => n,
        ReadOutcome::TimedOut | ReadOutcome::Closed => 0,
    };
    assert!(buffer[..n].starts_with(b"HTTP/1.1 200"));
}

/// WHAT: A silent server yields TimedOut, not an error
/// WHY: The channel maps timeouts to ResponseTimeout
#[test]
#[allow(clippy::unwrap_used)]
fn given_silent_server_when_reading_then_timed_out() {
    // Given: A server that accepts and holds the connection
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let server = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        thread::sleep(Duration::from_millis(500));
        drop(stream);
    });

    // When: Reading with a short timeout
    let mut transport = TcpTransport::new();
    transport.connect("127.0.0.1", port, TIMEOUT).unwrap();
    let mut buffer = [0u8; 16];
    let outcome = transport.read(&mut buffer, Duration::from_millis(50)).unwrap();

    // Then: TimedOut and still connected
    assert_eq!(outcome, ReadOutcome::TimedOut);
    assert!(transport.connected());
    server.join().unwrap();
}

/// WHAT: A connection the server closed is detected as stale
/// WHY: Writing into a closed keep-alive connection loses a payload
#[test]
#[allow(clippy::unwrap_used)]
fn given_server_closed_connection_when_checking_then_not_connected() {
    // Given: A server that closes right after accepting
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let server = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        drop(stream);
    });

    let mut transport = TcpTransport::new();
    transport.connect("127.0.0.1", port, TIMEOUT).unwrap();
    server.join().unwrap();
    thread::sleep(Duration::from_millis(100));

    // When: Checking the connection
    let connected = transport.connected();

    // Then: Stale and dropped
    assert!(!connected);
    assert!(!transport.connected());
}

/// WHAT: Connecting to a port nobody listens on fails with ConnectFailed
/// WHY: The channel reports this as a failed cycle
#[test]
#[allow(clippy::unwrap_used)]
fn given_closed_port_when_connecting_then_connect_failed() {
    // Given: A port that was just released
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    // When: Connecting
    let mut transport = TcpTransport::new();
    let result = transport.connect("127.0.0.1", port, TIMEOUT);

    // Then: ConnectFailed naming the port
    assert!(matches!(result, Err(CoreError::ConnectFailed { port: p, .. }) if p == port));
    assert!(!transport.connected());
}

/// WHAT: Writing before connecting is an error
/// WHY: The channel must connect before every request on a fresh transport
#[test]
fn given_no_connection_when_writing_then_not_connected() {
    let mut transport = TcpTransport::new();

    let result = transport.write_all(b"data");

    assert!(matches!(result, Err(CoreError::NotConnected { .. })));
}

/// WHAT: A failed connect reports where connect was called
/// WHY: Error locations point at the caller, not the transport internals
#[test]
#[allow(clippy::unwrap_used)]
fn given_closed_port_when_connecting_then_error_located_at_call_site() {
    // Given: A port that was just released
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let mut transport = TcpTransport::new();

    // When: Connecting
    let call_line = line!() + 1;
    let result = transport.connect("127.0.0.1", port, TIMEOUT);

    // Then: The location is this line of this file
    let location = match result {
        Err(CoreError::ConnectFailed { location, .. }) => Some((location.file, location.line)),
        _ => None,
    };
    assert_eq!(location, Some((file!(), call_line)));
}
