use crate::binary_tree;
use crate::bst_tree::node::Node;
use crate::bst_tree::tree;
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::iter::{IntoIter, Iter, IterMut};
use std::borrow::Borrow;
use std::ops::{Index, IndexMut};

/// An owning iterator for `BstMap<T, U>`.
pub type BstMapIntoIter<T, U> = IntoIter<Node<T, U>>;

/// An iterator for `BstMap<T, U>`.
pub type BstMapIter<'a, T, U> = Iter<'a, Node<T, U>>;

/// A mutable iterator for `BstMap<T, U>`.
pub type BstMapIterMut<'a, T, U> = IterMut<'a, Node<T, U>>;

/// An ordered map implemented using a binary search tree without any rebalancing.
///
/// The shape of the tree depends entirely on the order of insertions: keys inserted in sorted
/// order produce a tree whose height equals its length, and every operation is then linear in the
/// length of the map. None of the operations recurse, and neither does dropping the map, so a
/// degenerate tree costs time but never stack space.
///
/// # Examples
///
/// ```
/// use search_trees::bst_tree::BstMap;
///
/// let mut map = BstMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Ok(&0));
/// assert_eq!(map.ceil(&2), Some(&3));
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct BstMap<T, U> {
    tree: tree::Tree<T, U>,
}

impl<T, U> BstMap<T, U> {
    /// Constructs a new, empty `BstMap<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst_tree::BstMap;
    ///
    /// let map: BstMap<u32, u32> = BstMap::new();
    /// ```
    pub fn new() -> Self {
        BstMap { tree: None }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, the value is
    /// replaced and the old value is returned. The stored key is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst_tree::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some(1));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<U>
    where
        T: Ord,
    {
        tree::insert(&mut self.tree, key, value)
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst_tree::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::remove(&mut self.tree, key).map(Entry::into_pair)
    }

    /// Removes the key-value pair with the minimum key. Returns `Error::EmptyTree` if the map is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst_tree::BstMap;
    /// use search_trees::Error;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.remove_min(), Ok((1, 1)));
    /// assert_eq!(map.remove_min(), Ok((3, 3)));
    /// assert_eq!(map.remove_min(), Err(Error::EmptyTree));
    /// ```
    pub fn remove_min(&mut self) -> Result<(T, U)> {
        tree::remove_min(&mut self.tree)
            .map(Entry::into_pair)
            .ok_or_else(|| {
                debug!("remove_min called on an empty bst map");
                Error::EmptyTree
            })
    }

    /// Removes the key-value pair with the maximum key. Returns `Error::EmptyTree` if the map is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst_tree::BstMap;
    /// use search_trees::Error;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.remove_max(), Ok((3, 3)));
    /// assert_eq!(map.remove_max(), Ok((1, 1)));
    /// assert_eq!(map.remove_max(), Err(Error::EmptyTree));
    /// ```
    pub fn remove_max(&mut self) -> Result<(T, U)> {
        tree::remove_max(&mut self.tree)
            .map(Entry::into_pair)
            .ok_or_else(|| {
                debug!("remove_max called on an empty bst map");
                Error::EmptyTree
            })
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst_tree::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst_tree::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        binary_tree::get(&self.tree, key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst_tree::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        binary_tree::get_mut(&mut self.tree, key).map(|entry| &mut entry.value)
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst_tree::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        binary_tree::len(&self.tree)
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst_tree::BstMap;
    ///
    /// let map: BstMap<u32, u32> = BstMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst_tree::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        tree::clear(&mut self.tree);
    }

    /// Returns a key in the map that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst_tree::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        binary_tree::floor(&self.tree, key).map(|entry| &entry.key)
    }

    /// Returns a key in the map that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst_tree::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.ceil(&0), Some(&1));
    /// assert_eq!(map.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        binary_tree::ceil(&self.tree, key).map(|entry| &entry.key)
    }

    /// Returns the minimum key of the map. Returns `Error::EmptyTree` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst_tree::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Ok(&1));
    /// ```
    pub fn min(&self) -> Result<&T> {
        binary_tree::min(&self.tree)
            .map(|entry| &entry.key)
            .ok_or(Error::EmptyTree)
    }

    /// Returns the maximum key of the map. Returns `Error::EmptyTree` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst_tree::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Ok(&3));
    /// ```
    pub fn max(&self) -> Result<&T> {
        binary_tree::max(&self.tree)
            .map(|entry| &entry.key)
            .ok_or(Error::EmptyTree)
    }

    /// Appends the keys of the map to `sink` in ascending order. The sink collects borrowed keys,
    /// so its element type is `&T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst_tree::BstMap;
    /// use std::collections::VecDeque;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(2, 2);
    /// map.insert(1, 1);
    ///
    /// let mut keys: VecDeque<&u32> = VecDeque::new();
    /// map.keys_into(&mut keys);
    /// assert_eq!(keys, vec![&1, &2]);
    /// ```
    pub fn keys_into<'a, E>(&'a self, sink: &mut E)
    where
        E: Extend<&'a T>,
    {
        sink.extend(self.iter().map(|(key, _)| key));
    }

    /// Returns the keys of the map in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst_tree::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(3, 3);
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// assert_eq!(map.keys(), vec![&1, &2, &3]);
    /// ```
    pub fn keys(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.len());
        self.keys_into(&mut keys);
        keys
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst_tree::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> BstMapIter<T, U> {
        Iter::new(&self.tree)
    }

    /// Returns a mutable iterator over the map. The iterator will yield key-value pairs using
    /// in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::bst_tree::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// for (key, value) in &mut map {
    ///     *value += 1;
    /// }
    ///
    /// let mut iterator = map.iter_mut();
    /// assert_eq!(iterator.next(), Some((&1, &mut 2)));
    /// assert_eq!(iterator.next(), Some((&2, &mut 3)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> BstMapIterMut<T, U> {
        IterMut::new(&mut self.tree)
    }
}

impl_ordered_map!(BstMap);
impl_entry_serde!(BstMap);

impl<T, U> IntoIterator for BstMap<T, U> {
    type IntoIter = BstMapIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.tree.take())
    }
}

impl<'a, T, U> IntoIterator for &'a BstMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = BstMapIter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, U> IntoIterator for &'a mut BstMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = BstMapIterMut<'a, T, U>;
    type Item = (&'a T, &'a mut U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, U> Drop for BstMap<T, U> {
    fn drop(&mut self) {
        tree::clear(&mut self.tree);
    }
}

impl<T, U> Default for BstMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, U, V> Index<&'a V> for BstMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, T, U, V> IndexMut<&'a V> for BstMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    fn index_mut(&mut self, key: &V) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}

#[cfg(test)]
mod tests {
    use super::BstMap;
    use crate::error::Error;

    #[test]
    fn test_len_empty() {
        let map: BstMap<u32, u32> = BstMap::new();
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let map: BstMap<u32, u32> = BstMap::new();
        assert!(map.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let map: BstMap<u32, u32> = BstMap::new();
        assert_eq!(map.min(), Err(Error::EmptyTree));
        assert_eq!(map.max(), Err(Error::EmptyTree));
    }

    #[test]
    fn test_remove_min_max_empty() {
        let mut map: BstMap<u32, u32> = BstMap::new();
        assert_eq!(map.remove_min(), Err(Error::EmptyTree));
        assert_eq!(map.remove_max(), Err(Error::EmptyTree));
    }

    #[test]
    fn test_insert() {
        let mut map = BstMap::new();
        assert_eq!(map.insert(1, 1), None);
        assert!(map.contains_key(&1));
        assert_eq!(map.get(&1), Some(&1));
    }

    #[test]
    fn test_insert_replace() {
        let mut map = BstMap::new();
        assert_eq!(map.insert(1, 1), None);
        assert_eq!(map.insert(1, 3), Some(1));
        assert_eq!(map.get(&1), Some(&3));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_round_trip() {
        let mut map = BstMap::new();
        for key in &[5, 3, 8, 1, 4, 7, 9] {
            map.insert(*key, key * 2);
        }
        for key in &[5, 3, 8, 1, 4, 7, 9] {
            assert_eq!(map.get(key), Some(&(key * 2)));
        }
        assert_eq!(map.remove(&3), Some((3, 6)));
        assert_eq!(map.get(&3), None);
        assert!(!map.contains_key(&3));
        assert_eq!(map.len(), 6);
    }

    #[test]
    fn test_remove_missing() {
        let mut map = BstMap::new();
        map.insert(1, 1);
        assert_eq!(map.remove(&2), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_min_max() {
        let mut map = BstMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);

        assert_eq!(map.min(), Ok(&1));
        assert_eq!(map.max(), Ok(&5));
    }

    #[test]
    fn test_min_max_after_remove_max() {
        let mut map = BstMap::new();
        map.insert(10, 'a');
        map.insert(20, 'b');
        map.insert(30, 'c');
        assert_eq!(map.remove_max(), Ok((30, 'c')));
        assert_eq!(map.remove_max(), Ok((20, 'b')));
        assert_eq!(map.min(), Ok(&10));
        assert_eq!(map.max(), Ok(&10));
        assert_eq!(map.remove_max(), Ok((10, 'a')));
        assert_eq!(map.remove_max(), Err(Error::EmptyTree));
    }

    #[test]
    fn test_get_mut() {
        let mut map = BstMap::new();
        map.insert(1, 1);
        {
            let value = map.get_mut(&1);
            *value.unwrap() = 3;
        }
        assert_eq!(map.get(&1), Some(&3));
    }

    #[test]
    fn test_floor_ceil() {
        let mut map = BstMap::new();
        map.insert(2, 2);
        map.insert(4, 4);
        map.insert(6, 6);

        assert_eq!(map.floor(&5), Some(&4));
        assert_eq!(map.ceil(&5), Some(&6));
        assert_eq!(map.floor(&1), None);
        assert_eq!(map.ceil(&7), None);
        assert_eq!(map.floor(&4), Some(&4));
        assert_eq!(map.ceil(&4), Some(&4));
    }

    #[test]
    fn test_keys_repeatable() {
        let mut map = BstMap::new();
        for key in &[4, 2, 6, 1] {
            map.insert(*key, ());
        }
        assert_eq!(map.keys(), vec![&1, &2, &4, &6]);
        assert_eq!(map.keys(), vec![&1, &2, &4, &6]);
    }

    #[test]
    fn test_sorted_insertion() {
        let mut map = BstMap::new();
        for key in 0..1000 {
            map.insert(key, key);
        }
        assert_eq!(map.len(), 1000);
        assert_eq!(map.floor(&2000), Some(&999));
        for key in 0..1000 {
            assert_eq!(map.remove_min(), Ok((key, key)));
        }
        assert!(map.is_empty());
    }

    #[test]
    fn test_into_iter() {
        let mut map = BstMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.into_iter().collect::<Vec<(u32, u32)>>(),
            vec![(1, 2), (3, 4), (5, 6)],
        );
    }

    #[test]
    fn test_iter() {
        let mut map = BstMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &2), (&3, &4), (&5, &6)],
        );
    }

    #[test]
    fn test_iter_mut() {
        let mut map = BstMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        for (_, value) in &mut map {
            *value += 1;
        }

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &3), (&3, &5), (&5, &7)],
        );
    }

    #[test]
    fn test_degenerate_map_clear_and_drop() {
        let mut map = BstMap::new();
        for key in (0..20_000u32).rev() {
            map.insert(key, key);
        }
        assert_eq!(map.len(), 20_000);
        assert_eq!(map.min(), Ok(&0));
        assert_eq!(map.remove_min(), Ok((0, 0)));

        let mut iterator = map.into_iter();
        assert_eq!(iterator.next(), Some((1, 1)));
        assert_eq!(iterator.next(), Some((2, 2)));
        drop(iterator);

        let mut map = BstMap::new();
        for key in 0..20_000u32 {
            map.insert(key, ());
        }
        map.clear();
        assert!(map.is_empty());
        for key in 0..20_000u32 {
            map.insert(key, ());
        }
        assert_eq!(map.max(), Ok(&19_999));
    }
}
