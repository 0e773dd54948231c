use crate::{ClockSequence, Error, FixedNode, NodeSource, Result, ThreadRandom, TimeSource, Uuid};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Generator for identifiers in the custom-time layout (version 8).
///
/// The caller declares the timestamp width (`time_size`, 1 to 60 bits) and
/// supplies a [`TimeSource`] yielding an unsigned integer of that width in
/// caller-defined units: physical time, a hybrid logical clock, or a vector
/// clock component all work. The timestamp is left-shifted to the top of a
/// 64-bit window and split around the version nibble.
///
/// Up to 48 timestamp bits the shape matches the Unix layout, with a 12-bit
/// counter and eight node bytes:
///
/// ```text
///  +-------------------+------------------+--------------------------+
///  | time (time_size)  | ver(4) seq (12)  | var(2) node (62)         |
///  +-------------------+------------------+--------------------------+
/// ```
///
/// Past 48 bits the window spills into the field under the version nibble,
/// no room is left for a 12-bit counter there, and the remaining counter
/// bits are squeezed out of the node area instead: six counter bits follow
/// the variant in byte 8, the low two ride on top of a 6-bit node remnant
/// in byte 9, and only seven node bytes are carried:
///
/// ```text
///  +------------------+---------------------+--------+--------+----------+
///  | time (48)        | ver(4) time (12)    | var(2) | seq(2) | node(48) |
///  |                  |                     | seq(6) | node(6)|          |
///  +------------------+---------------------+--------+--------+----------+
/// ```
///
/// # Example
///
/// ```
/// use chronuid::{ClockFn, V8Generator};
///
/// let generator = V8Generator::new(ClockFn(|| 0xdead_beef_u64), 32).unwrap();
/// let id = generator.generate();
/// assert_eq!(id.version(), 8);
/// assert_eq!((id.to_raw() >> 96) as u32, 0xdead_beef);
/// ```
pub struct V8Generator<T, N>
where
    T: TimeSource<u64>,
    N: NodeSource,
{
    time: T,
    node: N,
    time_size: u8,
    sequence: ClockSequence,
}

impl<T, N> core::fmt::Debug for V8Generator<T, N>
where
    T: TimeSource<u64>,
    N: NodeSource,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("V8Generator")
            .field("time_size", &self.time_size)
            .finish_non_exhaustive()
    }
}

const fn node_width(time_size: u8) -> usize {
    if time_size > 48 { 7 } else { 8 }
}

fn check_time_size(bits: u8) -> Result<()> {
    if !(1..=60).contains(&bits) {
        return Err(Error::TimeSizeOutOfRange { bits });
    }
    Ok(())
}

impl<T> V8Generator<T, ThreadRandom>
where
    T: TimeSource<u64>,
{
    /// Creates a generator that randomizes the node bytes per identifier,
    /// sized to match `time_size` (seven bytes past 48 timestamp bits,
    /// eight otherwise).
    ///
    /// # Errors
    ///
    /// [`Error::TimeSizeOutOfRange`] if `time_size` is outside `1..=60`.
    pub fn new(time: T, time_size: u8) -> Result<Self> {
        Self::with_source(time, time_size, ThreadRandom)
    }
}

impl<T> V8Generator<T, FixedNode>
where
    T: TimeSource<u64>,
{
    /// Creates a generator pre-bound to fixed node bytes.
    ///
    /// # Errors
    ///
    /// - [`Error::TimeSizeOutOfRange`] if `time_size` is outside `1..=60`.
    /// - [`Error::InvalidNodeLength`] if `node` is not seven bytes for
    ///   `time_size > 48`, or not eight bytes otherwise.
    pub fn with_node(time: T, time_size: u8, node: &[u8]) -> Result<Self> {
        check_time_size(time_size)?;
        let expected = node_width(time_size);
        if node.len() != expected {
            return Err(Error::InvalidNodeLength {
                expected,
                actual: node.len(),
            });
        }
        Self::with_source(time, time_size, FixedNode::new(node))
    }
}

impl<T, N> V8Generator<T, N>
where
    T: TimeSource<u64>,
    N: NodeSource,
{
    /// Creates a generator over an arbitrary [`NodeSource`].
    ///
    /// The source will be asked for [`Self::node_width`] bytes per
    /// identifier.
    ///
    /// # Errors
    ///
    /// [`Error::TimeSizeOutOfRange`] if `time_size` is outside `1..=60`.
    pub fn with_source(time: T, time_size: u8, node: N) -> Result<Self> {
        check_time_size(time_size)?;
        Ok(Self {
            time,
            node,
            time_size,
            sequence: ClockSequence::new(),
        })
    }

    /// The node width implied by the declared timestamp width.
    #[must_use]
    pub const fn node_width(&self) -> usize {
        node_width(self.time_size)
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
        let node = &mut node[..self.node_width()];
        self.node.fill_node(node);
        let (clock, sequence) = self.sequence.advance_with(|| self.time.now())?;
        Ok(self.pack(clock, sequence, node))
    }

    /// Generates the next identifier with explicit node bytes, advancing the
    /// same sequence state as [`Self::generate`].
    ///
    /// # Panics
    ///
    /// Panics if `node` does not match [`Self::node_width`] or the sequence
    /// lock is poisoned.
    pub fn generate_with(&self, node: &[u8]) -> Uuid {
        self.try_generate_with(node).unwrap()
    }

    /// A fallible version of [`Self::generate_with`].
    ///
    /// The node bytes are validated before any sequence state is touched.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidNodeLength`] if `node` does not match
    ///   [`Self::node_width`].
    /// - [`Error::LockPoisoned`] if the sequence lock is poisoned.
    ///
    /// [`Error::LockPoisoned`]: crate::Error::LockPoisoned
    pub fn try_generate_with(&self, node: &[u8]) -> Result<Uuid> {
        let expected = self.node_width();
        if node.len() != expected {
            return Err(Error::InvalidNodeLength {
                expected,
                actual: node.len(),
            });
        }
        let (clock, sequence) = self.sequence.advance_with(|| self.time.now())?;
        Ok(self.pack(clock, sequence, node))
    }

    fn pack(&self, clock: u64, sequence: u32, node: &[u8]) -> Uuid {
        let window = clock << (64 - u32::from(self.time_size));
        let time_high = window >> 32;
        let time_mid = window >> 16 & 0xffff;

        if self.time_size <= 48 {
            let clock_seq = u64::from(sequence) & 0x0fff | 0x8000;
            let node = u64::from_be_bytes([
                node[0], node[1], node[2], node[3], node[4], node[5], node[6], node[7],
            ]) & !(0b11 << 62)
                | 0b10 << 62;

            Uuid::from_raw(
                u128::from(time_high) << 96
                    | u128::from(time_mid) << 80
                    | u128::from(clock_seq) << 64
                    | u128::from(node),
            )
        } else {
            let time_low = window >> 4 & 0x0fff | 0x8000;
            let seq_high = u64::from(sequence >> 2) & 0x3f | 0x80;
            let seq_low = node[0] & 0x3f | (sequence as u8) << 6;
            let tail =
                u64::from_be_bytes([0, 0, node[1], node[2], node[3], node[4], node[5], node[6]]);

            Uuid::from_raw(
                u128::from(time_high) << 96
                    | u128::from(time_mid) << 80
                    | u128::from(time_low) << 64
                    | u128::from(seq_high) << 56
                    | u128::from(seq_low) << 48
                    | u128::from(tail),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ClockFn;

    fn generator(time_size: u8) -> V8Generator<impl TimeSource<u64>, ThreadRandom> {
        V8Generator::new(ClockFn(|| 0xdead_beef_u64), time_size).unwrap()
    }

    #[test]
    fn narrow_timestamp_keeps_unix_shape() {
        let id = generator(32).pack(0xdead_beef, 0x1234, &[0; 8]);
        assert_eq!((id.to_raw() >> 96) as u32, 0xdead_beef);
        // 12 usable counter bits under the version nibble.
        assert_eq!((id.to_raw() >> 64) as u16, 0x8000 | 0x0234);
        assert_eq!(id.version(), 8);
        assert_eq!(id.variant(), 0b10);
    }

    #[test]
    fn wide_timestamp_spills_under_version_nibble() {
        let id = generator(60).pack(0x0dea_dbee_f123_4567, 0, &[0; 7]);
        let raw = id.to_raw();

        // Reassemble the 60-bit timestamp from the three fields.
        let time_high = (raw >> 96) as u64;
        let time_mid = (raw >> 80) as u64 & 0xffff;
        let time_low = (raw >> 64) as u64 & 0x0fff;
        assert_eq!(time_high << 28 | time_mid << 12 | time_low, 0x0dea_dbee_f123_4567);
        assert_eq!(id.version(), 8);
    }

    #[test]
    fn wide_timestamp_splits_counter_across_node_bytes() {
        let id = generator(60).pack(0, 0b1101_0110, &[0xff; 7]);
        let raw = id.to_raw();

        // Byte 8: variant plus counter bits 7..2.
        assert_eq!((raw >> 56) as u8, 0x80 | 0b11_0101);
        // Byte 9: counter bits 1..0 over the 6-bit node remnant.
        assert_eq!((raw >> 48) as u8, 0b10 << 6 | 0x3f);
    }

    #[test]
    fn counter_bits_beyond_eight_are_dropped_when_wide() {
        let a = generator(60).pack(0, 0x00, &[0; 7]);
        let b = generator(60).pack(0, 0x100, &[0; 7]);
        assert_eq!(a.to_raw(), b.to_raw());
    }

    #[test]
    fn node_width_follows_time_size() {
        assert_eq!(generator(48).node_width(), 8);
        assert_eq!(generator(49).node_width(), 7);
    }
}
