use crate::{AudioSource, Microphone};

const CAPTURE_BYTES: usize = 2048;

/// WHAT: The default microphone fills a capture buffer with PCM
/// WHY: Every recording cycle depends on a full buffer from the device
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
#[allow(clippy::unwrap_used)]
fn given_default_microphone_when_reading_then_whole_samples_returned() {
    // Given: The default input device at 16kHz
    let mut microphone = Microphone::open(16_000).unwrap();
    let mut buffer = vec![0u8; CAPTURE_BYTES];

    // When: Reading one buffer
    let read = microphone.read(&mut buffer).unwrap();

    // Then: Whole 16-bit samples, at most one buffer
    assert!(read > 0);
    assert!(read <= CAPTURE_BYTES);
    assert_eq!(read % 2, 0);
    assert_eq!(microphone.sample_rate(), 16_000);
}
