/// Classified touch-hold duration produced once per tick.
///
/// Variants are ordered by hold length so callers can compare against a
/// minimum gesture (`event >= GestureEvent::LongHold`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum GestureEvent {
    /// Not touched, or touched for less than the short threshold.
    #[default]
    None,
    /// Held past the short threshold.
    ShortHold,
    /// Held past the long threshold.
    LongHold,
    /// Held past the extra-long threshold.
    ExtraLongHold,
}
