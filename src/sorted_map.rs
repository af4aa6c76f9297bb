//! A map stored as one `Vec<(K, V)>` kept ascending by key.
//!
//! Entries are ordered and searched by key alone. Two maps compare entry by entry, keys first
//! and then values, so maps with equal keys but different values are different.

mod capacity;
mod position;

use alloc::vec;
use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::{Index, RangeBounds};
use core::slice;

use crate::error::{Error, Result};
use crate::raw::{ByKey, RawSortedVec};

/// An ordered map with unique keys, held in a single vector of `(key, value)` pairs.
///
/// [`insert`](SortedMap::insert) never replaces a stored value. To change a value, go through
/// [`get_mut`](SortedMap::get_mut), [`at_mut`](SortedMap::at_mut) or
/// [`get_or_insert_default`](SortedMap::get_or_insert_default).
///
/// # Examples
///
/// ```
/// use sorted_vec_collections::SortedMap;
///
/// let mut stock = SortedMap::new();
/// stock.insert("plums", 12);
/// stock.insert("apples", 3);
///
/// // The first insert for a key wins.
/// assert_eq!(stock.insert("plums", 0), (1, false));
/// assert_eq!(stock["plums"], 12);
///
/// *stock.get_or_insert_default("figs") += 7;
/// assert!(stock.keys().copied().eq(["apples", "figs", "plums"]));
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortedMap<K, V> {
    raw: RawSortedVec<(K, V), ByKey>,
}

/// Shared iterator over the entries of a [`SortedMap`], or of a key range of it.
pub struct Iter<'a, K, V> {
    inner: slice::Iter<'a, (K, V)>,
}

/// Iterator over the entries of a [`SortedMap`] with writable values.
pub struct IterMut<'a, K, V> {
    inner: slice::IterMut<'a, (K, V)>,
}

/// Owning iterator over the entries of a [`SortedMap`].
pub struct IntoIter<K, V> {
    inner: vec::IntoIter<(K, V)>,
}

/// The keys of a [`SortedMap`], ascending.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// The values of a [`SortedMap`], in key order.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// Writable values of a [`SortedMap`], in key order.
pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

impl<K, V> SortedMap<K, V> {
    /// Creates an empty map without allocating.
    #[must_use]
    pub const fn new() -> SortedMap<K, V> {
        SortedMap { raw: RawSortedVec::new() }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// The entries as a slice of pairs, ascending by key.
    #[must_use]
    pub fn as_slice(&self) -> &[(K, V)] {
        self.raw.as_slice()
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { inner: self.raw.iter() }
    }

    /// Iterates in key order, handing out each value mutably.
    ///
    /// ```
    /// use sorted_vec_collections::SortedMap;
    ///
    /// let mut map = SortedMap::from([(2, 20), (1, 10)]);
    /// for (key, value) in map.iter_mut() {
    ///     *value += key;
    /// }
    /// assert_eq!(map.as_slice(), &[(1, 11), (2, 22)]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut { inner: self.raw.iter_mut() }
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut { inner: self.iter_mut() }
    }

    /// Entry with the smallest key.
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first().map(|(key, value)| (key, value))
    }

    /// Entry with the largest key.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last().map(|(key, value)| (key, value))
    }

    /// Keeps the entries for which `keep` returns `true`. `keep` may also rewrite the value.
    ///
    /// ```
    /// use sorted_vec_collections::SortedMap;
    ///
    /// let mut map: SortedMap<u8, u8> = (0..6).map(|k| (k, k)).collect();
    /// map.retain(|key, value| {
    ///     *value *= 10;
    ///     key % 2 == 1
    /// });
    /// assert_eq!(map.as_slice(), &[(1, 10), (3, 30), (5, 50)]);
    /// ```
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.raw.retain_mut(|(key, value)| keep(&*key, value));
    }
}

impl<K: Ord, V> SortedMap<K, V> {
    /// Inserts `(key, value)` if `key` is absent.
    ///
    /// Returns the key's position and whether the pair went in. When the key is already
    /// present its value stays and `value` is dropped.
    ///
    /// ```
    /// use sorted_vec_collections::SortedMap;
    ///
    /// let mut map = SortedMap::new();
    /// assert_eq!(map.insert('b', 1), (0, true));
    /// assert_eq!(map.insert('a', 2), (0, true));
    /// assert_eq!(map.insert('b', 3), (1, false));
    /// assert_eq!(map.get(&'b'), Some(&1));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (usize, bool) {
        self.raw.insert((key, value))
    }

    /// Inserts each pair of `iter` in order and returns how many keys were new.
    pub fn insert_iter<I>(&mut self, iter: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut inserted = 0;
        for entry in iter {
            if self.raw.insert(entry).1 {
                inserted += 1;
            }
        }
        inserted
    }

    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get(key).map(|(_, value)| value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key).map(|(_, value)| value)
    }

    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.contains(key)
    }

    /// Checked lookup: the value for `key`, or [`Error::KeyNotFound`]. Never inserts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if `key` is absent.
    ///
    /// ```
    /// use sorted_vec_collections::{Error, SortedMap};
    ///
    /// let map = SortedMap::from([("one", 1)]);
    /// assert_eq!(map.at("one"), Ok(&1));
    /// assert_eq!(map.at("two"), Err(Error::KeyNotFound));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn at<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Writable form of [`at`](SortedMap::at).
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if `key` is absent.
    pub fn at_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// The value for `key`, inserting `V::default()` first if the key is absent.
    ///
    /// This is the growing counterpart of `map[key]`, which only reads.
    ///
    /// ```
    /// use sorted_vec_collections::SortedMap;
    ///
    /// let mut counts: SortedMap<char, u32> = SortedMap::new();
    /// for c in "abracadabra".chars() {
    ///     *counts.get_or_insert_default(c) += 1;
    /// }
    /// assert_eq!(counts.as_slice(), &[('a', 5), ('b', 2), ('c', 1), ('d', 1), ('r', 2)]);
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        match self.raw.search(&key) {
            Ok(position) => &mut self.raw.as_mut_slice()[position].1,
            Err(position) => &mut self.raw.insert_at(position, (key, V::default())).1,
        }
    }

    /// Removes `key` and returns its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(key).map(|(_, value)| value)
    }

    /// Iterates over the entries whose keys fall in `range`.
    ///
    /// # Panics
    ///
    /// Panics if the start of `range` lies after its end, or if both ends are the same excluded
    /// bound.
    ///
    /// ```
    /// use sorted_vec_collections::SortedMap;
    ///
    /// let map: SortedMap<u32, char> = (b'a'..=b'f').map(|b| (u32::from(b - b'a'), char::from(b))).collect();
    /// assert!(map.range(2..4).map(|(_, c)| *c).eq(['c', 'd']));
    /// ```
    pub fn range<Q, R>(&self, range: R) -> Iter<'_, K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
        R: RangeBounds<Q>,
    {
        let positions = self.raw.range_positions(&range);
        Iter {
            inner: self.raw.as_slice()[positions].iter(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SortedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for SortedMap<K, V> {
    fn default() -> Self {
        SortedMap::new()
    }
}

/// Read-only lookup. Use [`SortedMap::get_or_insert_default`] to insert on a miss.
///
/// # Panics
///
/// Panics if the key is absent.
impl<K, Q, V> Index<&Q> for SortedMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: ?Sized + Ord,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SortedMap<K, V> {
    /// Collects pairs, keeping the first value seen for each key. Ascending input is appended
    /// without searching.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = SortedMap::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            let end = map.len();
            map.insert_with_hint(end, key, value);
        }
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for SortedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.insert_iter(iter);
    }
}

impl<'a, K: Ord + Copy, V: Copy> Extend<(&'a K, &'a V)> for SortedMap<K, V> {
    fn extend<I: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: I) {
        self.insert_iter(iter.into_iter().map(|(&key, &value)| (key, value)));
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for SortedMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V> IntoIterator for SortedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.into_vec().into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a SortedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut SortedMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}

// ─── Iter ────────────────────────────────────────────────────────────────────

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key, value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter { inner: self.inner.clone() }
    }
}

impl<K, V> Default for Iter<'_, K, V> {
    fn default() -> Self {
        Iter { inner: [].iter() }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

// ─── IterMut ─────────────────────────────────────────────────────────────────

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (&*key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (&*key, value))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

impl<K, V> Default for IterMut<'_, K, V> {
    fn default() -> Self {
        IterMut { inner: [].iter_mut() }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IterMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice().iter().map(|(key, value)| (key, value))).finish()
    }
}

// ─── IntoIter ────────────────────────────────────────────────────────────────

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: Clone, V: Clone> Clone for IntoIter<K, V> {
    fn clone(&self) -> Self {
        IntoIter { inner: self.inner.clone() }
    }
}

impl<K, V> Default for IntoIter<K, V> {
    fn default() -> Self {
        IntoIter { inner: vec::IntoIter::default() }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

// ─── Keys, Values, ValuesMut ─────────────────────────────────────────────────

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys { inner: self.inner.clone() }
    }
}

impl<K, V> Default for Keys<'_, K, V> {
    fn default() -> Self {
        Keys { inner: Iter::default() }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values { inner: self.inner.clone() }
    }
}

impl<K, V> Default for Values<'_, K, V> {
    fn default() -> Self {
        Values { inner: Iter::default() }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<&'a mut V> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ValuesMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}

impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

impl<K, V> Default for ValuesMut<'_, K, V> {
    fn default() -> Self {
        ValuesMut { inner: IterMut::default() }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for ValuesMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.inner.as_slice().iter().map(|(_, value)| value)).finish()
    }
}
