use crate::Framing;

/// WHAT: Raw framing produces a plain keep-alive POST
/// WHY: The upload server parses these headers for every cycle
#[test]
fn given_raw_framing_when_building_head_then_octet_stream_with_exact_length() {
    // Given: Raw framing
    let framing = Framing::Raw;

    // When: Building the head for 2048 bytes
    let head = framing.request_head("example.com", "/api/voice", 2048);

    // Then: Exact header block, no preamble, no trailer
    assert_eq!(
        head,
        "POST /api/voice HTTP/1.1\r\n\
         Host: example.com\r\n\
         Content-Type: application/octet-stream\r\n\
         Content-Length: 2048\r\n\
         Connection: keep-alive\r\n\r\n"
    );
    assert!(framing.trailer().is_empty());
}

/// WHAT: Multipart Content-Length covers preamble, payload and trailer
/// WHY: A wrong length desynchronises the keep-alive connection
#[test]
#[allow(clippy::unwrap_used)]
fn given_multipart_framing_when_building_head_then_length_counts_whole_body() {
    // Given: Multipart framing
    let framing = Framing::Multipart {
        boundary: "touchcast".to_string(),
    };

    // When: Building head and trailer for 100 bytes
    let head = framing.request_head("example.com", "/upload", 100);
    let trailer = framing.trailer();

    // Then: Body length matches the declared Content-Length
    let (headers, preamble) = head.split_once("\r\n\r\n").unwrap();
    let declared: usize = headers
        .lines()
        .find_map(|line| line.strip_prefix("Content-Length: "))
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(declared, preamble.len() + 100 + trailer.len());
    assert!(headers.contains("Content-Type: multipart/form-data; boundary=touchcast"));
    assert!(preamble.starts_with("--touchcast\r\n"));
    assert!(preamble.contains("name=\"audio\"; filename=\"audio.raw\""));
    assert!(preamble.ends_with("Content-Type: application/octet-stream\r\n\r\n"));
    assert_eq!(trailer, "\r\n--touchcast--\r\n");
}
