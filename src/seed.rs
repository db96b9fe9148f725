use std::time::{SystemTime, UNIX_EPOCH};

/// A seed scrambled out of the nanosecond system clock.
///
/// Convenience entropy for callers who do not care which sequence they get.
/// The scramble is plain arithmetic, not a cryptographic mixer, and two
/// reads inside the clock's resolution produce the same seed.
pub fn time_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("valid")
        .as_nanos() as u64;

    scramble(nanos)
}

/// Fixed transform applied to the clock reading: shift-and-divide, wrapping
/// square, then shed the low decimal digits.
fn scramble(nanos: u64) -> u64 {
    let spread = (nanos << 16) / 16384;
    spread.wrapping_mul(spread) / 1000
}
