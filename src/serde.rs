//! `serde` support, enabled by the `serde` feature.
//!
//! Sets serialize as sequences and maps as maps, both in ascending order. Deserialization
//! accepts input in any order. Input that is already sorted takes the hinted fast path, one
//! append per element. Duplicate keys keep the first occurrence.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::{SortedMap, SortedSet};

/// Upper bound on capacity preallocated from an untrusted length hint.
const MAX_PREALLOCATED_ELEMENTS: usize = 4096;

fn cautious_capacity(hint: Option<usize>) -> usize {
    hint.unwrap_or(0).min(MAX_PREALLOCATED_ELEMENTS)
}

impl<T: Serialize> Serialize for SortedSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl<K: Serialize, V: Serialize> Serialize for SortedMap<K, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct SortedSetVisitor<T> {
    marker: PhantomData<fn() -> SortedSet<T>>,
}

impl<'de, T> Visitor<'de> for SortedSetVisitor<T>
where
    T: Deserialize<'de> + Ord,
{
    type Value = SortedSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = SortedSet::with_capacity(cautious_capacity(access.size_hint()));
        while let Some(value) = access.next_element()? {
            let end = set.len();
            set.insert_with_hint(end, value);
        }
        Ok(set)
    }
}

impl<'de, T> Deserialize<'de> for SortedSet<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedSetVisitor {
            marker: PhantomData,
        })
    }
}

struct SortedMapVisitor<K, V> {
    marker: PhantomData<fn() -> SortedMap<K, V>>,
}

impl<'de, K, V> Visitor<'de> for SortedMapVisitor<K, V>
where
    K: Deserialize<'de> + Ord,
    V: Deserialize<'de>,
{
    type Value = SortedMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = SortedMap::with_capacity(cautious_capacity(access.size_hint()));
        while let Some((key, value)) = access.next_entry()? {
            let end = map.len();
            map.insert_with_hint(end, key, value);
        }
        Ok(map)
    }
}

impl<'de, K, V> Deserialize<'de> for SortedMap<K, V>
where
    K: Deserialize<'de> + Ord,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(SortedMapVisitor {
            marker: PhantomData,
        })
    }
}
