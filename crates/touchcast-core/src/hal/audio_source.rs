use crate::CoreResult;

/// Opaque synchronous source of captured PCM bytes.
///
/// One call fills at most `buffer.len()` bytes and returns how many were
/// written. Implementations may block for roughly one buffer duration.
pub trait AudioSource {
    /// Read the next capture buffer into `buffer`.
    fn read(&mut self, buffer: &mut [u8]) -> CoreResult<usize>;

    /// Discard everything captured so far, so the next `read` starts from
    /// live input.
    fn reset(&mut self) -> CoreResult<()>;
}
