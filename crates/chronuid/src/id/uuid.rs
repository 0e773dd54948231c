use core::fmt;

/// A 128-bit identifier.
///
/// The value is opaque and immutable once produced. Equality, ordering, and
/// hashing follow the raw 128-bit magnitude, so identifiers packed from a
/// later (timestamp, sequence) pair compare greater than earlier ones.
///
/// The canonical textual rendering is the hyphenated lowercase hex form with
/// groups of 8-4-4-4-12 digits, available through [`fmt::Display`]:
///
/// ```
/// use chronuid::Uuid;
///
/// let id = Uuid::from_raw(0x0123_4567_89ab_7cde_8f00_1122_3344_5566);
/// assert_eq!(id.to_string(), "01234567-89ab-7cde-8f00-112233445566");
/// assert_eq!(id.version(), 7);
/// assert_eq!(id.variant(), 0b10);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Uuid {
    id: u128,
}

impl Uuid {
    /// Converts a raw 128-bit value into this type.
    #[must_use]
    pub const fn from_raw(raw: u128) -> Self {
        Self { id: raw }
    }

    /// Converts this type into its raw 128-bit representation.
    #[must_use]
    pub const fn to_raw(&self) -> u128 {
        self.id
    }

    /// The identifier as a big-endian byte array, matching the canonical
    /// textual rendering byte for byte.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 16] {
        self.id.to_be_bytes()
    }

    /// The 4-bit version tag identifying which layout this identifier uses
    /// (6, 7, or 8 for identifiers produced by this crate).
    #[must_use]
    pub const fn version(&self) -> u8 {
        ((self.id >> 76) & 0xf) as u8
    }

    /// The two variant bits; every layout in this crate sets them to `10`.
    #[must_use]
    pub const fn variant(&self) -> u8 {
        ((self.id >> 62) & 0b11) as u8
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            (self.id >> 96) as u32,
            (self.id >> 80) as u16,
            (self.id >> 64) as u16,
            (self.id >> 48) as u16,
            self.id & 0xffff_ffff_ffff,
        )
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_struct("Uuid");
        dbg.field("id", &format_args!("{self} (0x{:032x})", self.id));
        dbg.field("version", &self.version());
        dbg.field("variant", &format_args!("0b{:02b}", self.variant()));
        dbg.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_rendering() {
        let id = Uuid::from_raw(0x0123_4567_89ab_7cde_8f00_1122_3344_5566);
        assert_eq!(id.to_string(), "01234567-89ab-7cde-8f00-112233445566");

        // Leading zeros are preserved in every group.
        let id = Uuid::from_raw(1);
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000001");
    }

    #[test]
    fn version_and_variant_extraction() {
        let id = Uuid::from_raw(0x0000_0000_0000_6000_8000_0000_0000_0000);
        assert_eq!(id.version(), 6);
        assert_eq!(id.variant(), 0b10);

        let id = Uuid::from_raw(u128::MAX);
        assert_eq!(id.version(), 0xf);
        assert_eq!(id.variant(), 0b11);
    }

    #[test]
    fn ordering_follows_raw_magnitude() {
        let a = Uuid::from_raw(41);
        let b = Uuid::from_raw(42);
        assert!(a < b);
        assert_eq!(Uuid::from_raw(b.to_raw()), b);
    }

    #[test]
    fn bytes_are_big_endian() {
        let id = Uuid::from_raw(0x0123_4567_89ab_7cde_8f00_1122_3344_5566);
        assert_eq!(id.as_bytes()[0], 0x01);
        assert_eq!(id.as_bytes()[15], 0x66);
    }
}
