//! Serde integration: strands serialize as byte strings.

use core::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Strand;


impl Serialize for Strand {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.as_slice())
    }
}

struct BytesVisitor;

impl<'de> Visitor<'de> for BytesVisitor {
    type Value = Strand;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a byte string")
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Strand, E> {
        Ok(Strand::from(v))
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Strand, E> {
        Ok(Strand::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Strand, E> {
        Ok(Strand::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Strand, E> {
        Ok(Strand::from(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Strand, A::Error> {
        let mut strand = Strand::with_capacity(seq.size_hint().unwrap_or(0).saturating_add(1));
        while let Some(byte) = seq.next_element()? {
            strand.push(byte);
        }
        Ok(strand)
    }
}

impl<'de> Deserialize<'de> for Strand {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_bytes(BytesVisitor)
    }
}
