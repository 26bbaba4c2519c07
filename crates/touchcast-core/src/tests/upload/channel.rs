use crate::{
    Framing, TcpTransport, UploadChannel, UploadOutcome, UploadSettings, UploadStats,
    tests::fakes::{OK_RESPONSE, Reply, ScriptedTransport, upload_settings},
    upload::MAX_DRAIN_BYTES,
};

use std::{
    io::{Read, Write},
    net::TcpListener,
    thread,
    time::{Duration, Instant},
};

fn channel(transport: &ScriptedTransport) -> UploadChannel<ScriptedTransport> {
    UploadChannel::new(transport.clone(), upload_settings())
}

/// WHAT: A send writes head then payload, and reports Sent on a response
/// WHY: This is the happy path for every capture cycle
#[test]
fn given_server_answering_when_sending_then_request_written_and_sent() {
    // Given: A server that acknowledges
    let transport = ScriptedTransport::default();
    transport.reply_ok();
    let mut channel = channel(&transport);

    // When: Sending four bytes
    let outcome = channel.send(&[1, 2, 3, 4]);

    // Then: Sent, and the request is head plus payload
    assert_eq!(outcome, UploadOutcome::Sent);
    let mut expected = Framing::Raw
        .request_head("upload.test", "/api/voice", 4)
        .into_bytes();
    expected.extend_from_slice(&[1, 2, 3, 4]);
    assert_eq!(transport.written(), expected);
    assert!(transport.is_connected());
}

/// WHAT: Multipart sends append the closing boundary
/// WHY: The server rejects a form body without its terminator
#[test]
fn given_multipart_framing_when_sending_then_trailer_follows_payload() {
    // Given: Multipart settings
    let transport = ScriptedTransport::default();
    transport.reply_ok();
    let settings = UploadSettings {
        framing: Framing::Multipart {
            boundary: "xyz".to_string(),
        },
        ..upload_settings()
    };
    let mut channel = UploadChannel::new(transport.clone(), settings);

    // When: Sending
    channel.send(b"pcm");

    // Then: Body ends with payload and trailer
    assert!(transport.written().ends_with(b"pcm\r\n--xyz--\r\n"));
}

/// WHAT: The connection is reused across sends
/// WHY: Reconnecting every cycle would dominate the upload time
#[test]
fn given_keep_alive_when_sending_twice_then_one_connect() {
    // Given: Two acknowledgements
    let transport = ScriptedTransport::default();
    transport.reply_ok();
    transport.reply_ok();
    let mut channel = channel(&transport);

    // When: Two sends
    let first = channel.send(&[0; 8]);
    let second = channel.send(&[0; 8]);

    // Then: Both sent over one connection
    assert_eq!((first, second), (UploadOutcome::Sent, UploadOutcome::Sent));
    assert_eq!(transport.connects(), 1);
    assert_eq!(transport.closes(), 0);
}

/// WHAT: Refused connects report ConnectFailed and the next send reopens
/// WHY: No internal retry; the next cycle is the retry
#[test]
fn given_connect_refused_when_sending_then_connect_failed_and_next_send_reopens() {
    // Given: One refused connect, then an answering server
    let transport = ScriptedTransport::default();
    transport.fail_next_connects(1);
    transport.reply_ok();
    let mut channel = channel(&transport);

    // When: Two sends
    let first = channel.send(&[9; 16]);
    let second = channel.send(&[9; 16]);

    // Then: First failed without writing, second succeeded
    assert_eq!(first, UploadOutcome::ConnectFailed);
    assert_eq!(second, UploadOutcome::Sent);
    assert_eq!(transport.connects(), 2);
    assert_eq!(
        channel.stats(),
        UploadStats {
            sent: 1,
            connect_failed: 1,
            response_timeout: 0,
        }
    );
}

/// WHAT: No response within the timeout closes the socket
/// WHY: A half-open connection must not poison the next cycle
#[test]
fn given_server_silent_when_sending_then_response_timeout_and_closed() {
    // Given: A server that never answers
    let transport = ScriptedTransport::default();
    transport.reply(Reply::TimedOut);
    let mut channel = channel(&transport);

    // When: Sending
    let outcome = channel.send(&[1; 32]);

    // Then: ResponseTimeout, socket closed, first read bounded by response_timeout
    assert_eq!(outcome, UploadOutcome::ResponseTimeout);
    assert!(!transport.is_connected());
    assert_eq!(transport.closes(), 1);
    assert_eq!(
        transport.state.borrow().read_timeouts.first(),
        Some(&Duration::from_secs(5))
    );
}

/// WHAT: A peer close before any response counts as a timeout
/// WHY: No acknowledgement arrived for this payload
#[test]
fn given_peer_closes_before_response_when_sending_then_response_timeout() {
    let transport = ScriptedTransport::default();
    transport.reply(Reply::Closed);
    let mut channel = channel(&transport);

    let outcome = channel.send(&[1; 32]);

    assert_eq!(outcome, UploadOutcome::ResponseTimeout);
    assert!(!transport.is_connected());
}

/// WHAT: A write failure closes the socket and reports ConnectFailed
/// WHY: A broken pipe means the connection is unusable
#[test]
fn given_write_fails_when_sending_then_connect_failed_and_closed() {
    // Given: Writes fail after connecting
    let transport = ScriptedTransport::default();
    transport.state.borrow_mut().fail_writes = true;
    let mut channel = channel(&transport);

    // When: Sending
    let outcome = channel.send(&[1; 32]);

    // Then: ConnectFailed, closed
    assert_eq!(outcome, UploadOutcome::ConnectFailed);
    assert_eq!(transport.closes(), 1);
    assert!(!transport.is_connected());
}

/// WHAT: A connection dropped between sends is reopened
/// WHY: Servers close idle keep-alive connections
#[test]
fn given_stale_connection_when_sending_then_reconnects() {
    // Given: A successful send, then the peer goes away
    let transport = ScriptedTransport::default();
    transport.reply_ok();
    transport.reply_ok();
    let mut channel = channel(&transport);
    channel.send(&[0; 4]);
    transport.drop_connection();

    // When: Sending again
    let outcome = channel.send(&[0; 4]);

    // Then: Reconnected and sent
    assert_eq!(outcome, UploadOutcome::Sent);
    assert_eq!(transport.connects(), 2);
}

/// WHAT: Multi-chunk responses are drained before the next send
/// WHY: Leftover response bytes would be read as the next response
#[test]
fn given_chunked_response_when_sending_then_all_chunks_drained() {
    // Given: A response split into three reads
    let transport = ScriptedTransport::default();
    transport.reply(Reply::Data(b"HTTP/1.1 200 OK\r\n".to_vec()));
    transport.reply(Reply::Data(b"Content-Length: 2\r\n\r\n".to_vec()));
    transport.reply(Reply::Data(b"ok".to_vec()));
    transport.reply(Reply::TimedOut);
    transport.reply_ok();
    let mut channel = channel(&transport);

    // When: Two sends
    let first = channel.send(&[0; 4]);
    let drained_reads = transport.state.borrow().read_timeouts.len();
    let second = channel.send(&[0; 4]);

    // Then: First send consumed all three chunks plus the timed-out drain read
    assert_eq!(first, UploadOutcome::Sent);
    assert_eq!(drained_reads, 4);
    assert_eq!(second, UploadOutcome::Sent);
    assert!(transport.state.borrow().replies.is_empty());
}

/// WHAT: Peer close after the response still counts as Sent
/// WHY: The server acknowledged the payload before closing
#[test]
fn given_peer_closes_after_response_when_sending_then_sent_and_closed() {
    let transport = ScriptedTransport::default();
    transport.reply_ok();
    transport.reply(Reply::Closed);
    let mut channel = channel(&transport);

    let outcome = channel.send(&[0; 4]);

    assert_eq!(outcome, UploadOutcome::Sent);
    assert!(!transport.is_connected());
}

/// WHAT: A response that never stops arriving is cut off and the socket closed
/// WHY: Draining must not hold the tick past its byte bound
#[test]
fn given_endless_response_when_sending_then_drain_capped_and_closed() {
    // Given: A server streaming far more than the drain bound
    let transport = ScriptedTransport::default();
    let chunks = MAX_DRAIN_BYTES / 512 + 8;
    for _ in 0..chunks {
        transport.reply(Reply::Data(vec![b'x'; 512]));
    }
    let mut channel = channel(&transport);

    // When: Sending
    let outcome = channel.send(&[0; 4]);

    // Then: Acknowledged, drain stopped at the bound, connection dropped
    assert_eq!(outcome, UploadOutcome::Sent);
    assert_eq!(transport.closes(), 1);
    assert!(!transport.is_connected());
    assert_eq!(transport.state.borrow().replies.len(), 7);
}

/// WHAT: A trickling server cannot stretch a send past the response timeout
/// WHY: Every blocking step of a tick is bounded
#[test]
#[allow(clippy::unwrap_used)]
fn given_trickling_server_when_sending_then_send_returns_within_response_timeout() {
    // Given: A server that answers, then sends one byte every 5ms
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = [0u8; 256];
        let _ = stream.read(&mut request);
        let _ = stream.write_all(OK_RESPONSE);
        for _ in 0..1_000 {
            if stream.write_all(b"x").is_err() {
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }
    });
    let settings = UploadSettings {
        host: "127.0.0.1".to_string(),
        port,
        response_timeout: Duration::from_millis(500),
        drain_timeout: Duration::from_millis(20),
        ..upload_settings()
    };
    let mut channel = UploadChannel::new(TcpTransport::new(), settings);

    // When: Sending
    let started = Instant::now();
    let outcome = channel.send(&[0; 16]);

    // Then: Sent, and bounded by the response timeout rather than the server
    assert_eq!(outcome, UploadOutcome::Sent);
    assert!(started.elapsed() < Duration::from_secs(2));
}
