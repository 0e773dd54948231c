/// A trait for time sources that return the current timestamp on demand.
///
/// This abstraction allows you to plug in a real wall clock, a logical
/// clock, or a mocked time source in tests.
///
/// The timestamp type `T` is generic (typically `u64`), and the unit is
/// whatever the consuming layout expects: 100 ns Gregorian ticks for the
/// version 6 layout, whole Unix milliseconds for version 7, and a
/// caller-defined unit for version 8.
///
/// A time source does not have to be monotonic; a backwards step is treated
/// by the sequence engine like a repeat of the previous tick.
///
/// # Example
///
/// ```
/// use chronuid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource<u64> for FixedTime {
///     fn now(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.now(), 1234);
/// ```
pub trait TimeSource<T> {
    /// Returns the current timestamp in the unit of the consuming layout.
    fn now(&self) -> T;
}

/// Adapts a zero-argument closure into a [`TimeSource`].
///
/// Useful for the version 8 layout, where the timestamp unit is
/// caller-defined and often already available as a function of some other
/// clock.
///
/// # Example
///
/// ```
/// use chronuid::{ClockFn, TimeSource};
///
/// let time = ClockFn(|| 42u64);
/// assert_eq!(time.now(), 42);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ClockFn<F>(pub F);

impl<T, F> TimeSource<T> for ClockFn<F>
where
    F: Fn() -> T,
{
    fn now(&self) -> T {
        (self.0)()
    }
}
