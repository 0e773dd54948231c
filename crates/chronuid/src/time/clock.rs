use crate::TimeSource;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Offset between the Gregorian reform epoch (Friday, October 15, 1582
/// 00:00:00 UTC) and the Unix epoch.
pub const GREGORIAN_EPOCH_OFFSET: Duration = Duration::from_secs(12_219_292_800);

/// A wall-clock source counting 100 ns ticks since 1582-10-15T00:00:00Z.
///
/// This is the unit the version 6 layout embeds. The tick count fits the
/// layout's 60-bit timestamp field until the year 5236.
///
/// # Panics
///
/// Panics if the system clock reports a time before the Unix epoch.
#[derive(Clone, Copy, Debug, Default)]
pub struct GregorianClock;

impl TimeSource<u64> for GregorianClock {
    fn now(&self) -> u64 {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("System clock before UNIX_EPOCH")
            + GREGORIAN_EPOCH_OFFSET;
        (since_epoch.as_nanos() / 100) as u64
    }
}

/// A wall-clock source counting whole milliseconds since 1970-01-01T00:00:00Z.
///
/// Sub-millisecond precision is discarded at the source, so repeated calls
/// within the same millisecond observe the same tick and fall through to the
/// sequence counter.
///
/// # Panics
///
/// Panics if the system clock reports a time before the Unix epoch.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnixClock;

impl TimeSource<u64> for UnixClock {
    fn now(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("System clock before UNIX_EPOCH")
            .as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2020-01-01T00:00:00Z in each clock's unit.
    const TICKS_2020: u64 = (1_577_836_800 + 12_219_292_800) * 10_000_000;
    const MILLIS_2020: u64 = 1_577_836_800_000;

    #[test]
    fn gregorian_clock_is_past_2020() {
        let now = GregorianClock.now();
        assert!(now > TICKS_2020);
        // Still fits the 60-bit timestamp field of the version 6 layout.
        assert!(now < 1 << 60);
    }

    #[test]
    fn unix_clock_is_past_2020() {
        assert!(UnixClock.now() > MILLIS_2020);
    }

    #[test]
    fn unix_clock_repeats_within_a_millisecond() {
        // Two samples taken back to back are either the same millisecond or
        // a later one, never earlier.
        let a = UnixClock.now();
        let b = UnixClock.now();
        assert!(b >= a);
    }
}
