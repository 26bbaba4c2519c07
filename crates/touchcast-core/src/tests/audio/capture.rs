use crate::audio::capture::{MAX_BUFFER_SAMPLES, push_downmixed};

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

/// WHAT: Interleaved stereo frames are averaged to mono
/// WHY: Uploads carry a single channel
#[test]
fn given_stereo_frames_when_pushing_then_each_frame_averaged() {
    // Given: Two stereo frames
    let mut buf = VecDeque::new();
    let data = [1.0f32, 0.0, -0.5, -0.5];

    // When: Pushing as two channels
    push_downmixed(&mut buf, &data, 2);

    // Then: Two mono samples
    assert_eq!(buf, VecDeque::from(vec![0.5, -0.5]));
}

/// WHAT: A trailing partial frame is ignored
/// WHY: Half a frame cannot be downmixed
#[test]
fn given_partial_frame_when_pushing_then_dropped() {
    let mut buf = VecDeque::new();

    push_downmixed(&mut buf, &[0.25, 0.25, 0.9], 2);

    assert_eq!(buf.len(), 1);
}

/// WHAT: Buffer respects MAX_BUFFER_SAMPLES limit
/// WHY: Prevents unbounded memory growth while an upload stalls
#[test]
fn given_buffer_at_max_capacity_when_adding_samples_then_oldest_discarded() {
    // Given: A VecDeque at max capacity filled with 0.0
    let mut buf = VecDeque::with_capacity(MAX_BUFFER_SAMPLES);
    buf.extend(std::iter::repeat_n(0.0f32, MAX_BUFFER_SAMPLES));

    // When: Adding 1024 mono samples (value 1.0) beyond the limit
    push_downmixed(&mut buf, &[1.0f32; 1024], 1);

    // Then: Buffer stays at MAX_BUFFER_SAMPLES and newest samples preserved
    assert_eq!(buf.len(), MAX_BUFFER_SAMPLES);
    assert!((buf[MAX_BUFFER_SAMPLES - 1] - 1.0).abs() < f32::EPSILON);
    assert!((buf[MAX_BUFFER_SAMPLES - 1024] - 1.0).abs() < f32::EPSILON);
    assert!(buf[MAX_BUFFER_SAMPLES - 1025].abs() < f32::EPSILON);
}

/// WHAT: Concurrent callbacks leave the buffer consistent
/// WHY: The stream callback and the loop's drain share one buffer
#[test]
#[allow(clippy::unwrap_used)]
fn given_concurrent_writers_when_pushing_then_no_corruption() {
    // Given: Shared buffer simulating audio callback contention
    let buf = Arc::new(Mutex::new(VecDeque::with_capacity(MAX_BUFFER_SAMPLES)));
    let mut handles = vec![];

    // When: 4 threads push 1000 stereo batches of 48 frames each
    for i in 0..4u8 {
        let buf_clone = Arc::clone(&buf);
        handles.push(std::thread::spawn(move || {
            let batch = vec![f32::from(i); 96];
            for _ in 0..1000 {
                let mut b = buf_clone.lock().unwrap_or_else(|e| e.into_inner());
                push_downmixed(&mut b, &batch, 2);
            }
        }));
    }

    for h in handles {
        h.join().unwrap();
    }

    // Then: Every frame landed and all values are finite
    let b = buf.lock().unwrap();
    assert_eq!(b.len(), 4 * 1000 * 48);
    assert!(b.iter().all(|s| s.is_finite()));
}
