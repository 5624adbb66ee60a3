use std::time::Duration;

/// Convert an MPRIS time value in microseconds to a Duration
///
/// Negative values clamp to zero.
pub fn from_mpris_micros(micros: i64) -> Duration {
    Duration::from_micros(u64::try_from(micros).unwrap_or(0))
}
