/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `chronuid` can produce.
///
/// Validation is eager: both variants below are raised at generator
/// construction or at the point explicit node bytes are supplied, never from
/// the packing path itself. Generation either returns a complete identifier
/// or is rejected before any sequence state is touched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The declared timestamp width for the custom layout is outside
    /// `1..=60` bits.
    #[error("timestamp width must be within 1..=60 bits, got {bits}")]
    TimeSizeOutOfRange { bits: u8 },

    /// The supplied node bytes do not match the width the active layout
    /// requires (6, 7, or 8 bytes).
    #[error("node length must be {expected} bytes for this layout, got {actual}")]
    InvalidNodeLength { expected: usize, actual: usize },

    /// A generation call observed a poisoned sequence lock.
    ///
    /// This can happen if another thread panicked while holding the lock.
    /// Not produced when the `parking-lot` feature is enabled.
    #[error("identifier sequence lock was poisoned")]
    LockPoisoned,
}

// Convert all poisoned lock errors to a simplified `LockPoisoned`
#[cfg(not(feature = "parking-lot"))]
impl<T> From<std::sync::PoisonError<std::sync::MutexGuard<'_, T>>> for Error {
    fn from(_: std::sync::PoisonError<std::sync::MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}
