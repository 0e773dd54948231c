use crate::{Result, mutex::Mutex};

#[derive(Debug, Default)]
struct ClockState {
    last: u64,
    sequence: u32,
}

/// The monotonicity engine shared by every layout.
///
/// A `ClockSequence` owns the last observed timestamp and a bounded counter
/// behind a mutex; only [`advance_with`] and [`advance`] are exposed, never
/// the raw fields. Each generator holds one instance, and every generation
/// call funnels through it, so calls racing on the same generator serialize
/// into a consistent order.
///
/// For any two calls observed in real time by one process, the returned
/// (timestamp, counter) pair of the later call is lexicographically greater
/// as long as the clock did not step backwards: a fresh tick resets the
/// counter to zero, and a repeated tick increments it.
///
/// [`advance_with`]: Self::advance_with
/// [`advance`]: Self::advance
#[derive(Debug, Default)]
pub struct ClockSequence {
    state: Mutex<ClockState>,
}

impl ClockSequence {
    /// Creates an engine whose state starts at timestamp zero with a zeroed
    /// counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples a timestamp inside the critical section and advances the
    /// counter.
    ///
    /// The sample is taken while the lock is held so that two racing calls
    /// can never both observe a fresh tick for the same timestamp. If the
    /// sample strictly exceeds the last observed timestamp the counter
    /// resets to zero; otherwise, including when the clock stepped
    /// backwards, the counter increments. The sample is stored as the new
    /// high-water mark before the lock is released and returned unchanged
    /// together with the counter.
    ///
    /// A backwards clock therefore yields identifiers whose timestamps also
    /// run backwards while the counter keeps climbing; ordering across a
    /// regression event is intentionally not restored by clamping.
    ///
    /// # Errors
    ///
    /// [`Error::LockPoisoned`] if another thread panicked while holding the
    /// lock (std mutex only).
    ///
    /// [`Error::LockPoisoned`]: crate::Error::LockPoisoned
    pub fn advance_with(&self, sample: impl FnOnce() -> u64) -> Result<(u64, u32)> {
        #[cfg(feature = "parking-lot")]
        let mut state = self.state.lock();
        #[cfg(not(feature = "parking-lot"))]
        let mut state = self.state.lock()?;

        let now = sample();
        state.sequence = if now > state.last {
            0
        } else {
            state.sequence.wrapping_add(1)
        };
        state.last = now;
        Ok((now, state.sequence))
    }

    /// [`Self::advance_with`] for a timestamp sampled by the caller.
    ///
    /// Prefer [`Self::advance_with`] when racing callers share the engine;
    /// pre-sampled timestamps can interleave with lock acquisition.
    ///
    /// # Errors
    ///
    /// [`Error::LockPoisoned`] if another thread panicked while holding the
    /// lock (std mutex only).
    ///
    /// [`Error::LockPoisoned`]: crate::Error::LockPoisoned
    pub fn advance(&self, now: u64) -> Result<(u64, u32)> {
        self.advance_with(|| now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_tick_resets_counter() {
        let engine = ClockSequence::new();
        assert_eq!(engine.advance(10).unwrap(), (10, 0));
        assert_eq!(engine.advance(11).unwrap(), (11, 0));
    }

    #[test]
    fn repeated_tick_increments_counter() {
        let engine = ClockSequence::new();
        assert_eq!(engine.advance(10).unwrap(), (10, 0));
        assert_eq!(engine.advance(10).unwrap(), (10, 1));
        assert_eq!(engine.advance(10).unwrap(), (10, 2));
        assert_eq!(engine.advance(11).unwrap(), (11, 0));
    }

    #[test]
    fn regressed_tick_increments_counter_and_returns_sample() {
        let engine = ClockSequence::new();
        assert_eq!(engine.advance(100).unwrap(), (100, 0));
        // The regressed sample is returned as-is, not clamped to 100.
        assert_eq!(engine.advance(50).unwrap(), (50, 1));
        // The regressed value is the new high-water mark.
        assert_eq!(engine.advance(60).unwrap(), (60, 0));
    }

    #[test]
    fn sample_runs_inside_the_critical_section() {
        use std::sync::atomic::{AtomicU64, Ordering};

        let engine = ClockSequence::new();
        let tick = AtomicU64::new(5);
        let (now, sequence) = engine
            .advance_with(|| tick.fetch_add(1, Ordering::Relaxed))
            .unwrap();
        assert_eq!((now, sequence), (5, 0));
        assert_eq!(tick.load(Ordering::Relaxed), 6);
    }
}
