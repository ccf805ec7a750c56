use crate::ordered_map::OrderedMap;
use serde::de::{Deserialize, SeqAccess, Visitor};
use std::fmt;
use std::marker::PhantomData;

/// A key-value pair stored in a node of a search tree.
///
/// The maps serialize as a sequence of entries in ascending key order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry<T, U> {
    pub key: T,
    pub value: U,
}

impl<T, U> Entry<T, U> {
    pub fn into_pair(self) -> (T, U) {
        let Entry { key, value } = self;
        (key, value)
    }
}

/// Rebuilds a map by inserting every entry of a serialized sequence. A repeated key keeps the
/// value that appears last.
pub struct EntrySeqVisitor<M> {
    marker: PhantomData<M>,
}

impl<M> EntrySeqVisitor<M> {
    pub fn new() -> Self {
        EntrySeqVisitor {
            marker: PhantomData,
        }
    }
}

impl<'de, M> Visitor<'de> for EntrySeqVisitor<M>
where
    M: OrderedMap + Default,
    M::Key: Deserialize<'de>,
    M::Value: Deserialize<'de>,
{
    type Value = M;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of map entries")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<M, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut map = M::default();
        while let Some(entry) = seq.next_element::<Entry<M::Key, M::Value>>()? {
            let (key, value) = entry.into_pair();
            map.insert(key, value);
        }
        Ok(map)
    }
}

/// Implements `Serialize` and `Deserialize` for a map type in terms of its entries.
macro_rules! impl_entry_serde {
    ($type_name:ident) => {
        impl<T, U> ::serde::Serialize for $type_name<T, U>
        where
            T: ::serde::Serialize,
            U: ::serde::Serialize,
        {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.collect_seq(
                    self.iter()
                        .map(|(key, value)| $crate::entry::Entry { key, value }),
                )
            }
        }

        impl<'de, T, U> ::serde::Deserialize<'de> for $type_name<T, U>
        where
            T: Ord + ::serde::Deserialize<'de>,
            U: ::serde::Deserialize<'de>,
        {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                deserializer.deserialize_seq($crate::entry::EntrySeqVisitor::new())
            }
        }
    };
}
