//! Index-based access. The positional methods mirror the set's, searching by key.

use core::borrow::Borrow;
use core::ops::{Range, RangeBounds};

use super::SortedMap;

impl<K, V> SortedMap<K, V> {
    /// The entry at `position`, counting in key order.
    ///
    /// ```
    /// use sorted_vec_collections::SortedMap;
    ///
    /// let map = SortedMap::from([("c", 3), ("a", 1), ("b", 2)]);
    /// assert_eq!(map.get_at(1), Some((&"b", &2)));
    /// assert_eq!(map.get_at(map.len()), None);
    /// ```
    #[must_use]
    pub fn get_at(&self, position: usize) -> Option<(&K, &V)> {
        self.raw.get_at(position).map(|(key, value)| (key, value))
    }

    /// Like [`get_at`](SortedMap::get_at), with the value writable. The key stays read-only.
    pub fn get_at_mut(&mut self, position: usize) -> Option<(&K, &mut V)> {
        self.raw.get_at_mut(position).map(|(key, value)| (&*key, value))
    }

    /// Removes the entry at `position`. Returns `position`, which now addresses its successor.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()`.
    pub fn erase(&mut self, position: usize) -> usize {
        self.raw.remove_at(position);
        position
    }

    /// Removes the entries at `positions` with a single shift and returns where the survivors
    /// resume.
    ///
    /// # Panics
    ///
    /// Panics on an inverted range or one that ends past `len()`.
    pub fn erase_range<R>(&mut self, positions: R) -> usize
    where
        R: RangeBounds<usize>,
    {
        self.raw.remove_range(positions)
    }
}

impl<K: Ord, V> SortedMap<K, V> {
    /// Position of `key`, if present. O(log n).
    #[must_use]
    pub fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(key).ok()
    }

    /// First position whose key is `>= key`.
    #[must_use]
    pub fn lower_bound<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.lower_bound(key)
    }

    /// First position whose key is `> key`.
    #[must_use]
    pub fn upper_bound<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.upper_bound(key)
    }

    /// `lower_bound(key)..upper_bound(key)`, never longer than one.
    #[must_use]
    pub fn equal_range<Q>(&self, key: &Q) -> Range<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.equal_range(key)
    }

    /// `1` if `key` is present, `0` otherwise.
    #[must_use]
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        usize::from(self.raw.contains(key))
    }

    /// Inserts `(key, value)` expecting it to land at `hint`, and returns where the key is.
    ///
    /// A hint that is off still produces the same map as [`insert`](SortedMap::insert). See
    /// [`SortedSet::insert_with_hint`](crate::SortedSet::insert_with_hint) for the search
    /// order. An existing entry keeps its value.
    ///
    /// ```
    /// use sorted_vec_collections::SortedMap;
    ///
    /// let mut map = SortedMap::new();
    /// for (i, word) in ["ant", "bee", "cat"].into_iter().enumerate() {
    ///     let end = map.len();
    ///     assert_eq!(map.insert_with_hint(end, word, i), i);
    /// }
    /// assert_eq!(map.insert_with_hint(0, "bee", 99), 1);
    /// assert_eq!(map["bee"], 1);
    /// ```
    pub fn insert_with_hint(&mut self, hint: usize, key: K, value: V) -> usize {
        self.raw.insert_with_hint(hint, (key, value))
    }

    /// Converts `key` and `value`, then inserts them as [`insert`](SortedMap::insert) does.
    pub fn emplace<A, B>(&mut self, key: A, value: B) -> (usize, bool)
    where
        K: From<A>,
        V: From<B>,
    {
        self.raw.insert((K::from(key), V::from(value)))
    }

    /// Converts `key` and `value`, then inserts them as
    /// [`insert_with_hint`](SortedMap::insert_with_hint) does.
    pub fn emplace_hint<A, B>(&mut self, hint: usize, key: A, value: B) -> usize
    where
        K: From<A>,
        V: From<B>,
    {
        self.raw.insert_with_hint(hint, (K::from(key), V::from(value)))
    }

    /// Removes `key` and returns how many entries went, `0` or `1`.
    pub fn erase_key<Q>(&mut self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        usize::from(self.raw.remove(key).is_some())
    }
}
