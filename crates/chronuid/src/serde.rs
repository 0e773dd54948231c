//! Serde support for [`Uuid`].
//!
//! Identifiers serialize as their raw 128-bit integer in both directions.
//! Deserialization reconstructs the value without any textual parsing; the
//! canonical hyphenated rendering remains a display-only concern.

use crate::Uuid;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Uuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_raw().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Uuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u128::deserialize(deserializer).map(Uuid::from_raw)
    }
}
