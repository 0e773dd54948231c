use crate::{ClockSequence, FixedNode, NodeSource, Result, TimeSource, Uuid};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Generator for identifiers in the Gregorian-time layout (version 6).
///
/// The timestamp is a 60-bit count of 100 ns ticks since
/// 1582-10-15T00:00:00Z, split around the version nibble so that byte order
/// matches chronological order; the six node bytes are embedded verbatim and
/// the variant bits live in the clock-seq field:
///
/// ```text
///  +----------------+----------+-----------------+----------------+----------+
///  | time_high (32) | mid (16) | ver(4) low (12) | var(2) seq(14) | node(48) |
///  +----------------+----------+-----------------+----------------+----------+
/// ```
///
/// # Example
///
/// ```
/// use chronuid::{GregorianClock, V6Generator};
///
/// let generator = V6Generator::with_node([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff], GregorianClock);
/// let id = generator.generate();
/// assert_eq!(id.version(), 6);
/// assert_eq!(id.to_raw() & 0xffff_ffff_ffff, 0xaabb_ccdd_eeff);
/// ```
pub struct V6Generator<T, N>
where
    T: TimeSource<u64>,
    N: NodeSource,
{
    time: T,
    node: N,
    sequence: ClockSequence,
}

impl<T, N> V6Generator<T, N>
where
    T: TimeSource<u64>,
    N: NodeSource,
{
    /// Creates a generator that asks `node` for six fresh node bytes per
    /// identifier.
    ///
    /// # Parameters
    ///
    /// - `time`: A [`TimeSource`] yielding 100 ns Gregorian ticks (e.g.
    ///   [`GregorianClock`]).
    /// - `node`: A [`NodeSource`] such as [`ThreadRandom`] or a bound
    ///   [`FixedNode`].
    ///
    /// [`GregorianClock`]: crate::GregorianClock
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
        let mut node = [0u8; 6];
        self.node.fill_node(&mut node);
        self.try_generate_with(node)
    }

    /// Generates the next identifier with explicit node bytes, advancing the
    /// same sequence state as [`Self::generate`].
    ///
    /// # Panics
    ///
    /// Panics if the sequence lock is poisoned.
    pub fn generate_with(&self, node: [u8; 6]) -> Uuid {
        self.try_generate_with(node).unwrap()
    }

    /// A fallible version of [`Self::generate_with`].
    ///
    /// # Errors
    ///
    /// [`Error::LockPoisoned`] if the sequence lock is poisoned.
    ///
    /// [`Error::LockPoisoned`]: crate::Error::LockPoisoned
    pub fn try_generate_with(&self, node: [u8; 6]) -> Result<Uuid> {
        let (ticks, sequence) = self.sequence.advance_with(|| self.time.now())?;
        Ok(pack(ticks, sequence, node))
    }
}

impl<T> V6Generator<T, FixedNode>
where
    T: TimeSource<u64>,
{
    /// Creates a generator pre-bound to six fixed node bytes, so repeated
    /// calls need no node argument.
    pub fn with_node(node: [u8; 6], time: T) -> Self {
        Self::new(time, FixedNode::from(node))
    }
}

fn pack(ticks: u64, sequence: u32, node: [u8; 6]) -> Uuid {
    let time_high = ticks >> 28 & 0xffff_ffff;
    let time_mid = ticks >> 12 & 0xffff;
    let time_low = ticks & 0x0fff | 0x6000;
    let clock_seq = u64::from(sequence) & 0x3fff | 0x8000;
    let node = u64::from_be_bytes([0, 0, node[0], node[1], node[2], node[3], node[4], node[5]]);

    Uuid::from_raw(
        u128::from(time_high) << 96
            | u128::from(time_mid) << 80
            | u128::from(time_low) << 64
            | u128::from(clock_seq) << 48
            | u128::from(node),
    )
}
