//! Serde implementations for `Bitset`.
//!
//! A bitset serializes as its raw byte buffer, the same layout returned by
//! [`Bitset::get_bytes`]. Formats without a native byte string (JSON, for
//! example) see a sequence of `u8`, which deserialization accepts as well.

use core::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{SeqAccess, Visitor},
};

use crate::Bitset;

impl Serialize for Bitset {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.read())
    }
}

impl<'de> Deserialize<'de> for Bitset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BitsetVisitor;

        impl<'de> Visitor<'de> for BitsetVisitor {
            type Value = Bitset;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a byte string or a sequence of bytes")
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Bitset::from(v))
            }

            fn visit_byte_buf<E>(self, v: Vec<u8>) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Bitset::from_bytes(v))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
                while let Some(b) = seq.next_element::<u8>()? {
                    bytes.push(b);
                }
                Ok(Bitset::from_bytes(bytes))
            }
        }

        deserializer.deserialize_bytes(BitsetVisitor)
    }
}
