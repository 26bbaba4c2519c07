/// Bytes per signed 16-bit sample on the wire.
pub(crate) const BYTES_PER_SAMPLE: usize = 2;

/// Encode float samples as signed 16-bit little-endian PCM into `out`.
///
/// Returns the number of bytes written; stops at whichever runs out first.
pub(crate) fn encode_i16_le(samples: impl IntoIterator<Item = f32>, out: &mut [u8]) -> usize {
    let mut written = 0;
    for (slot, sample) in out.chunks_exact_mut(BYTES_PER_SAMPLE).zip(samples) {
        let value = (sample.clamp(-1.0, 1.0) * f32::from(i16::MAX)).round() as i16;
        slot.copy_from_slice(&value.to_le_bytes());
        written += BYTES_PER_SAMPLE;
    }
    written
}
