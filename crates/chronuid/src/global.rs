use crate::{GregorianClock, ThreadRandom, UnixClock, Uuid, V6Generator, V7Generator};
use std::sync::OnceLock;

/// Returns the process-wide version 6 generator, creating one if none exists.
fn global_v6() -> &'static V6Generator<GregorianClock, ThreadRandom> {
    static GLOBAL: OnceLock<V6Generator<GregorianClock, ThreadRandom>> = OnceLock::new();
    GLOBAL.get_or_init(|| V6Generator::new(GregorianClock, ThreadRandom))
}

/// Returns the process-wide version 7 generator, creating one if none exists.
fn global_v7() -> &'static V7Generator<UnixClock, ThreadRandom> {
    static GLOBAL: OnceLock<V7Generator<UnixClock, ThreadRandom>> = OnceLock::new();
    GLOBAL.get_or_init(|| V7Generator::new(UnixClock, ThreadRandom))
}

/// Generates an identifier in the Gregorian-time layout (version 6) with
/// randomized node bytes.
///
/// This function employs a process-wide generator over the wall clock, so
/// identifiers generated anywhere in the process within the same 100 ns tick
/// still receive strictly increasing sequence numbers.
///
/// # Panics
///
/// Panics if the process-wide sequence lock is poisoned.
///
/// # Examples
///
/// ```rust
/// let id = chronuid::uuid6();
/// assert_eq!(id.version(), 6);
/// ```
pub fn uuid6() -> Uuid {
    global_v6().generate()
}

/// Generates a version 6 identifier with the given node bytes, advancing the
/// same process-wide sequence state as [`uuid6`].
///
/// # Panics
///
/// Panics if the process-wide sequence lock is poisoned.
///
/// # Examples
///
/// ```rust
/// let id = chronuid::uuid6_with_node([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
/// assert_eq!(id.to_raw() & 0xffff_ffff_ffff, 0xaabb_ccdd_eeff);
/// ```
pub fn uuid6_with_node(node: [u8; 6]) -> Uuid {
    global_v6().generate_with(node)
}

/// Generates an identifier in the Unix-time layout (version 7) with
/// randomized node bytes.
///
/// This function employs a process-wide generator over the wall clock and
/// guarantees the process-wide monotonic order of identifiers generated
/// within the same millisecond.
///
/// # Panics
///
/// Panics if the process-wide sequence lock is poisoned.
///
/// # Examples
///
/// ```rust
/// let id = chronuid::uuid7();
/// println!("{id}"); // e.g. "01890a5d-ac96-774b-bcce-b302099a8057"
/// assert_eq!(id.version(), 7);
/// ```
pub fn uuid7() -> Uuid {
    global_v7().generate()
}

/// Generates a version 7 identifier with the given node bytes, advancing the
/// same process-wide sequence state as [`uuid7`].
///
/// The top two bits of `node[0]` are overwritten with the variant.
///
/// # Panics
///
/// Panics if the process-wide sequence lock is poisoned.
pub fn uuid7_with_node(node: [u8; 8]) -> Uuid {
    global_v7().generate_with(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_v6_is_tagged_and_ordered() {
        let a = uuid6();
        let b = uuid6();
        assert_eq!(a.version(), 6);
        assert_eq!(a.variant(), 0b10);
        assert!(a < b);
    }

    #[test]
    fn global_v7_is_tagged_and_ordered() {
        let a = uuid7();
        let b = uuid7();
        assert_eq!(a.version(), 7);
        assert_eq!(a.variant(), 0b10);
        assert!(a < b);
    }

    #[test]
    fn global_node_round_trips() {
        let id = uuid6_with_node([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
        assert_eq!(id.to_raw() & 0xffff_ffff_ffff, 0xaabb_ccdd_eeff);

        let id = uuid7_with_node([0x01, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]);
        assert_eq!(
            id.to_raw() as u64 & 0x3fff_ffff_ffff_ffff,
            0x0122_3344_5566_7788
        );
    }

    #[test]
    fn canonical_strings_match_the_expected_shape() {
        let v6 = regex::Regex::new(
            r"^[0-9a-f]{8}-[0-9a-f]{4}-6[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$",
        )
        .unwrap();
        let v7 = regex::Regex::new(
            r"^[0-9a-f]{8}-[0-9a-f]{4}-7[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$",
        )
        .unwrap();

        for _ in 0..64 {
            assert!(v6.is_match(&uuid6().to_string()));
            assert!(v7.is_match(&uuid7().to_string()));
        }
    }
}
