use crate::{ClockSequence, FixedNode, NodeSource, Result, TimeSource, Uuid};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Generator for identifiers in the Unix-time layout (version 7).
///
/// The timestamp is the low 48 bits of whole milliseconds since
/// 1970-01-01T00:00:00Z; sub-millisecond precision is discarded by the time
/// source so repeated calls within one millisecond fall through to the
/// counter, which disambiguates up to 16384 identifiers per millisecond. The
/// top two bits of the first node byte are overwritten with the variant:
///
/// ```text
///  +------------------+------------------+--------------------------+
///  | unix_ts_ms (48)  | ver(4) seq (12)  | var(2) node (62)         |
///  +------------------+------------------+--------------------------+
/// ```
///
/// # Example
///
/// ```
/// use chronuid::{ThreadRandom, UnixClock, V7Generator};
///
/// let generator = V7Generator::new(UnixClock, ThreadRandom);
/// let a = generator.generate();
/// let b = generator.generate();
/// assert_eq!(a.version(), 7);
/// assert!(a < b);
/// ```
pub struct V7Generator<T, N>
where
    T: TimeSource<u64>,
    N: NodeSource,
{
    time: T,
    node: N,
    sequence: ClockSequence,
}

impl<T, N> V7Generator<T, N>
where
    T: TimeSource<u64>,
    N: NodeSource,
{
    /// Creates a generator that asks `node` for eight fresh node bytes per
    /// identifier.
    ///
    /// # Parameters
    ///
    /// - `time`: A [`TimeSource`] yielding whole Unix milliseconds (e.g.
    ///   [`UnixClock`]).
    /// - `node`: A [`NodeSource`] such as [`ThreadRandom`] or a bound
    ///   [`FixedNode`].
    ///
    /// [`UnixClock`]: crate::UnixClock
    /// [`ThreadRandom`]: crate::ThreadRandom
    pub fn new(time: T, node: N) -> Self {
        Self {
            time,
            node,
            sequence: ClockSequence::new(),
        }
    }

    /// Generates the next identifier.
    ///
    /// # Panics
    ///
    /// Panics if the sequence lock is poisoned. For explicitly fallible
    /// behavior, use [`Self::try_generate`] instead.
    pub fn generate(&self) -> Uuid {
        self.try_generate().unwrap()
    }

    /// A fallible version of [`Self::generate`].
    ///
    /// # Errors
    ///
    /// [`Error::LockPoisoned`] if the sequence lock is poisoned.
    ///
    /// [`Error::LockPoisoned`]: crate::Error::LockPoisoned
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_generate(&self) -> Result<Uuid> {
        let mut node = [0u8; 8];
        self.node.fill_node(&mut node);
        self.try_generate_with(node)
    }

    /// Generates the next identifier with explicit node bytes, advancing the
    /// same sequence state as [`Self::generate`].
    ///
    /// The top two bits of `node[0]` are overwritten with the variant.
    ///
    /// # Panics
    ///
    /// Panics if the sequence lock is poisoned.
    pub fn generate_with(&self, node: [u8; 8]) -> Uuid {
        self.try_generate_with(node).unwrap()
    }

    /// A fallible version of [`Self::generate_with`].
    ///
    /// # Errors
    ///
    /// [`Error::LockPoisoned`] if the sequence lock is poisoned.
    ///
    /// [`Error::LockPoisoned`]: crate::Error::LockPoisoned
    pub fn try_generate_with(&self, node: [u8; 8]) -> Result<Uuid> {
        let (millis, sequence) = self.sequence.advance_with(|| self.time.now())?;
        Ok(pack(millis, sequence, node))
    }
}

impl<T> V7Generator<T, FixedNode>
where
    T: TimeSource<u64>,
{
    /// Creates a generator pre-bound to eight fixed node bytes, so repeated
    /// calls need no node argument.
    pub fn with_node(node: [u8; 8], time: T) -> Self {
        Self::new(time, FixedNode::from(node))
    }
}

fn pack(millis: u64, sequence: u32, node: [u8; 8]) -> Uuid {
    let unix_ts_ms = millis & 0xffff_ffff_ffff;
    let clock_seq = u64::from(sequence) & 0x3fff | 0x7000;
    let node = u64::from_be_bytes(node) & !(0b11 << 62) | 0b10 << 62;

    Uuid::from_raw(
        u128::from(unix_ts_ms) << 80 | u128::from(clock_seq) << 64 | u128::from(node),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_occupies_top_forty_eight_bits() {
        let id = pack(0x0abc_def0_1234, 0, [0; 8]);
        assert_eq!((id.to_raw() >> 80) as u64, 0x0abc_def0_1234);
        assert_eq!(id.version(), 7);
    }

    #[test]
    fn millis_above_forty_eight_bits_are_dropped() {
        let id = pack(0xffff_0abc_def0_1234, 0, [0; 8]);
        assert_eq!((id.to_raw() >> 80) as u64, 0x0abc_def0_1234);
    }

    #[test]
    fn counter_sits_under_the_version_nibble() {
        let id = pack(0, 0x1234, [0; 8]);
        assert_eq!((id.to_raw() >> 64) as u16, 0x7000 | 0x1234);
    }

    #[test]
    fn variant_overwrites_top_node_bits() {
        let id = pack(0, 0, [0xff, 0, 0, 0, 0, 0, 0, 0x42]);
        assert_eq!(id.variant(), 0b10);
        // The remaining six bits of the first byte survive.
        assert_eq!((id.to_raw() >> 56) as u8, 0b1011_1111);
        assert_eq!(id.to_raw() as u8, 0x42);
    }
}
