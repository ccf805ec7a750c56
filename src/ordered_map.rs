use crate::error::Result;
use std::borrow::Borrow;

/// The interface shared by every ordered map in this crate.
///
/// Each map also exposes these operations as inherent methods. The trait lets generic code treat
/// the maps interchangeably.
///
/// # Examples
///
/// ```
/// use search_trees::avl_tree::AvlMap;
/// use search_trees::bst_tree::BstMap;
/// use search_trees::OrderedMap;
///
/// fn fill<M: OrderedMap<Key = u32, Value = u32>>(map: &mut M) {
///     for key in &[5, 3, 8] {
///         map.insert(*key, key * 10);
///     }
/// }
///
/// let mut bst = BstMap::new();
/// let mut avl = AvlMap::new();
/// fill(&mut bst);
/// fill(&mut avl);
/// assert_eq!(OrderedMap::keys(&bst), OrderedMap::keys(&avl));
/// ```
pub trait OrderedMap {
    type Key: Ord;
    type Value;

    /// Inserts a key-value pair, returning the value previously associated with the key.
    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    /// Removes a key, returning the removed key-value pair. Removing a missing key is a no-op.
    fn remove<V>(&mut self, key: &V) -> Option<(Self::Key, Self::Value)>
    where
        Self::Key: Borrow<V>,
        V: Ord + ?Sized;

    /// Removes the entry with the minimum key.
    fn remove_min(&mut self) -> Result<(Self::Key, Self::Value)>;

    /// Removes the entry with the maximum key.
    fn remove_max(&mut self) -> Result<(Self::Key, Self::Value)>;

    fn get<V>(&self, key: &V) -> Option<&Self::Value>
    where
        Self::Key: Borrow<V>,
        V: Ord + ?Sized;

    fn get_mut<V>(&mut self, key: &V) -> Option<&mut Self::Value>
    where
        Self::Key: Borrow<V>,
        V: Ord + ?Sized;

    fn contains_key<V>(&self, key: &V) -> bool
    where
        Self::Key: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    fn min(&self) -> Result<&Self::Key>;

    fn max(&self) -> Result<&Self::Key>;

    /// Returns the greatest key less than or equal to `key`.
    fn floor<V>(&self, key: &V) -> Option<&Self::Key>
    where
        Self::Key: Borrow<V>,
        V: Ord + ?Sized;

    /// Returns the least key greater than or equal to `key`.
    fn ceil<V>(&self, key: &V) -> Option<&Self::Key>
    where
        Self::Key: Borrow<V>,
        V: Ord + ?Sized;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    /// Appends every key of the map, in ascending order, to `sink`.
    fn keys_into<'a, E>(&'a self, sink: &mut E)
    where
        E: Extend<&'a Self::Key>,
        Self::Key: 'a;

    /// Returns every key of the map in ascending order.
    fn keys(&self) -> Vec<&Self::Key> {
        let mut keys = Vec::with_capacity(self.len());
        self.keys_into(&mut keys);
        keys
    }
}

/// Implements `OrderedMap` for a map type by forwarding to its inherent methods.
macro_rules! impl_ordered_map {
    ($type_name:ident) => {
        impl<T, U> $crate::ordered_map::OrderedMap for $type_name<T, U>
        where
            T: Ord,
        {
            type Key = T;
            type Value = U;

            fn insert(&mut self, key: T, value: U) -> Option<U> {
                $type_name::insert(self, key, value)
            }

            fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
            where
                T: ::std::borrow::Borrow<V>,
                V: Ord + ?Sized,
            {
                $type_name::remove(self, key)
            }

            fn remove_min(&mut self) -> $crate::error::Result<(T, U)> {
                $type_name::remove_min(self)
            }

            fn remove_max(&mut self) -> $crate::error::Result<(T, U)> {
                $type_name::remove_max(self)
            }

            fn get<V>(&self, key: &V) -> Option<&U>
            where
                T: ::std::borrow::Borrow<V>,
                V: Ord + ?Sized,
            {
                $type_name::get(self, key)
            }

            fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
            where
                T: ::std::borrow::Borrow<V>,
                V: Ord + ?Sized,
            {
                $type_name::get_mut(self, key)
            }

            fn min(&self) -> $crate::error::Result<&T> {
                $type_name::min(self)
            }

            fn max(&self) -> $crate::error::Result<&T> {
                $type_name::max(self)
            }

            fn floor<V>(&self, key: &V) -> Option<&T>
            where
                T: ::std::borrow::Borrow<V>,
                V: Ord + ?Sized,
            {
                $type_name::floor(self, key)
            }

            fn ceil<V>(&self, key: &V) -> Option<&T>
            where
                T: ::std::borrow::Borrow<V>,
                V: Ord + ?Sized,
            {
                $type_name::ceil(self, key)
            }

            fn len(&self) -> usize {
                $type_name::len(self)
            }

            fn clear(&mut self) {
                $type_name::clear(self)
            }

            fn keys_into<'a, E>(&'a self, sink: &mut E)
            where
                E: Extend<&'a T>,
                T: 'a,
            {
                $type_name::keys_into(self, sink)
            }
        }
    };
}
