//! Time-ordered, globally unique 128-bit identifiers.
//!
//! `chronuid` produces identifiers in three related layouts, each packing a
//! timestamp, a monotonic sequence counter, and a trailing run of node bytes
//! into a single 128-bit value. Identifiers carry a 4-bit version tag (6, 7,
//! or 8) and the standard `10` variant bits, so other systems can introspect
//! them, and their raw 128-bit magnitudes sort in generation order even when
//! many identifiers are produced within a single timestamp tick.
//!
//! ```rust
//! use chronuid::uuid7;
//!
//! let a = uuid7();
//! let b = uuid7();
//! println!("{a}"); // e.g. "01890a5d-ac96-774b-bcce-b302099a8057"
//! assert!(a < b);
//! ```
//!
//! # Layouts
//!
//! The Gregorian layout (version 6) counts 100 ns ticks since
//! 1582-10-15T00:00:00Z and keeps the node bytes verbatim:
//!
//! ```text
//!  +------------------+----------+------------------+----------------+----------+
//!  | time_high (32)   | mid (16) | ver(4) low (12)  | var(2) seq(14) | node(48) |
//!  +------------------+----------+------------------+----------------+----------+
//! ```
//!
//! The Unix layout (version 7) counts whole milliseconds since the Unix epoch
//! and overwrites the top two node bits with the variant:
//!
//! ```text
//!  +---------------------+---------------------+--------------------------+
//!  | unix_ts_ms (48)     | ver(4) seq (12)     | var(2) node (62)         |
//!  +---------------------+---------------------+--------------------------+
//! ```
//!
//! The custom layout (version 8) accepts a caller-declared timestamp of 1 to
//! 60 bits in caller-defined units (physical time, a hybrid logical clock, a
//! vector clock component) and trades counter width for timestamp width once
//! the timestamp grows past 48 bits.
//!
//! # Generators
//!
//! Every layout is produced by a generator owning an injected [`TimeSource`],
//! an injected [`NodeSource`], and a shared [`ClockSequence`] that serializes
//! the sample-compare-update step behind a mutex. [`uuid6`] and [`uuid7`] are
//! process-wide shortcuts over the wall-clock sources; [`V8Generator`] is
//! always instance-scoped because its clock is caller-defined.
//!
//! ```rust
//! use chronuid::{ThreadRandom, UnixClock, V7Generator};
//!
//! let generator = V7Generator::new(UnixClock, ThreadRandom);
//! let id = generator.generate();
//! assert_eq!(id.version(), 7);
//! assert_eq!(id.variant(), 0b10);
//! ```

mod error;
mod generator;
mod global;
mod id;
mod mutex;
mod node;
#[cfg(feature = "serde")]
mod serde;
mod time;

pub use crate::error::*;
pub use crate::generator::*;
pub use crate::global::*;
pub use crate::id::*;
pub use crate::node::*;
pub use crate::time::*;
