//! Date gate for the gift modal.

/// Local-time cutoff for the gift reveal, as (year, month, day, hour).
/// The front-end turns this into an epoch timestamp in the viewer's zone.
pub const GIFT_CUTOFF_LOCAL: (u32, u32, u32, u32) = (2025, 12, 27, 11);

/// The gift unlocks once the clock reaches the cutoff; a simple
/// exceeding-timestamp gate, kept pure so it is testable without a clock.
#[inline]
pub fn is_unlocked(now_ms: f64, cutoff_ms: f64) -> bool {
    now_ms >= cutoff_ms
}
