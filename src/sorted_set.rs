//! A set stored as one ascending, duplicate-free `Vec`.
//!
//! [`SortedSet`] answers every query with a binary search over a contiguous slice. Iteration is
//! a plain slice walk. A mutation shifts the tail of the vector, so keep large, write-heavy
//! workloads on `BTreeSet`.

mod capacity;
mod position;

use alloc::vec;
use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::RangeBounds;
use core::slice;

use crate::raw::{Identity, RawSortedVec};

/// An ordered set of unique values held in a single sorted vector.
///
/// Values are kept strictly ascending, so [`as_slice`](SortedSet::as_slice) is always a sorted,
/// deduplicated view. Positions returned by [`find`](SortedSet::find),
/// [`lower_bound`](SortedSet::lower_bound) and [`insert`](SortedSet::insert) are indices into
/// that slice. `len()` stands for "end".
///
/// Any mutation may move values, so a position saved before an insert or erase at or before it
/// no longer names the same value afterwards.
///
/// # Examples
///
/// ```
/// use sorted_vec_collections::SortedSet;
///
/// let mut primes = SortedSet::new();
/// for p in [7, 2, 5, 3, 2] {
///     primes.insert(p);
/// }
///
/// assert_eq!(primes.as_slice(), &[2, 3, 5, 7]);
/// assert_eq!(primes.find(&5), Some(2));
/// assert_eq!(primes.lower_bound(&4), 2);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortedSet<T> {
    raw: RawSortedVec<T, Identity>,
}

/// Borrowing iterator over a [`SortedSet`] or a range of it, in ascending order.
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

/// Owning iterator over a [`SortedSet`], in ascending order.
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> SortedSet<T> {
    /// Creates an empty set without allocating.
    #[must_use]
    pub const fn new() -> SortedSet<T> {
        SortedSet { raw: RawSortedVec::new() }
    }

    /// Number of values in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Drops every value. The allocation is kept.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// The values as a sorted slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_vec_collections::SortedSet;
    ///
    /// let set: SortedSet<_> = ["pear", "apple", "fig"].into_iter().collect();
    /// assert_eq!(set.as_slice(), &["apple", "fig", "pear"]);
    /// ```
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.raw.as_slice()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.raw.iter() }
    }

    /// Smallest value, if any.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.raw.first()
    }

    /// Largest value, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.raw.last()
    }

    /// Keeps only the values for which `keep` returns `true`, in one pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_vec_collections::SortedSet;
    ///
    /// let mut set: SortedSet<u32> = (1..=10).collect();
    /// set.retain(|n| n % 3 == 0);
    /// assert_eq!(set.as_slice(), &[3, 6, 9]);
    /// ```
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.raw.retain(keep);
    }
}

impl<T: Ord> SortedSet<T> {
    /// Inserts `value` unless an equal value is already present.
    ///
    /// Returns the position of the value and whether it was inserted. An equal value already in
    /// the set is left untouched and `value` is dropped.
    ///
    /// Finding the slot is O(log n). Making room for it is O(n).
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_vec_collections::SortedSet;
    ///
    /// let mut set = SortedSet::from([10, 30]);
    /// assert_eq!(set.insert(20), (1, true));
    /// assert_eq!(set.insert(20), (1, false));
    /// assert_eq!(set.len(), 3);
    /// ```
    pub fn insert(&mut self, value: T) -> (usize, bool) {
        self.raw.insert(value)
    }

    /// Inserts every value of `iter` in order and returns how many were new.
    ///
    /// Duplicates, whether against the set or earlier in `iter`, are dropped.
    pub fn insert_iter<I>(&mut self, iter: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut inserted = 0;
        for value in iter {
            if self.raw.insert(value).1 {
                inserted += 1;
            }
        }
        inserted
    }

    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.contains(value)
    }

    /// Returns the stored value equal to `value`.
    ///
    /// Useful when `T` carries data that does not take part in the ordering.
    #[must_use]
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get(value)
    }

    /// Removes `value` and reports whether it was present.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(value).is_some()
    }

    /// Iterates over the values inside `range`, in ascending order.
    ///
    /// Both ends are located by binary search. The iterator then walks the sub-slice between
    /// them.
    ///
    /// # Panics
    ///
    /// Panics if the start of `range` lies after its end, or if both ends are the same excluded
    /// bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_vec_collections::SortedSet;
    ///
    /// let set: SortedSet<i32> = (0..20).step_by(4).collect();
    /// assert!(set.range(3..=12).copied().eq([4, 8, 12]));
    /// assert_eq!(set.range(13..).len(), 1);
    /// ```
    pub fn range<Q, R>(&self, range: R) -> Iter<'_, T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
        R: RangeBounds<Q>,
    {
        let positions = self.raw.range_positions(&range);
        Iter {
            inner: self.raw.as_slice()[positions].iter(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for SortedSet<T> {
    fn default() -> Self {
        SortedSet::new()
    }
}

impl<T: Ord> FromIterator<T> for SortedSet<T> {
    /// Builds a set from `iter`. The first of several equal values wins.
    ///
    /// Ascending input appends at the end without a search, so collecting already sorted data
    /// is O(n).
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = SortedSet::with_capacity(iter.size_hint().0);
        for value in iter {
            let end = set.len();
            set.insert_with_hint(end, value);
        }
        set
    }
}

impl<T: Ord> Extend<T> for SortedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_iter(iter);
    }
}

impl<'a, T: Ord + Copy + 'a> Extend<&'a T> for SortedSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.insert_iter(iter.into_iter().copied());
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for SortedSet<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for SortedSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.raw.into_vec().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SortedSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<&'a T> {
        self.inner.nth(n)
    }

    fn last(self) -> Option<&'a T> {
        self.inner.last()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { inner: self.inner.clone() }
    }
}

impl<T> Default for Iter<'_, T> {
    fn default() -> Self {
        Iter { inner: [].iter() }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.inner.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: Clone> Clone for IntoIter<T> {
    fn clone(&self) -> Self {
        IntoIter { inner: self.inner.clone() }
    }
}

impl<T> Default for IntoIter<T> {
    fn default() -> Self {
        IntoIter { inner: vec::IntoIter::default() }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner.as_slice()).finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec::Vec;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(SortedSet<u64>, Vec<u64>);

    #[derive(Clone, Debug)]
    enum Op {
        Insert(i16),
        Hinted(usize, i16),
        Remove(i16),
        Erase(usize),
        EraseRange(usize, usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => any::<i16>().prop_map(|v| Op::Insert(v % 200)),
            3 => (0usize..250, any::<i16>()).prop_map(|(h, v)| Op::Hinted(h, v % 200)),
            2 => any::<i16>().prop_map(|v| Op::Remove(v % 200)),
            1 => (0usize..250).prop_map(Op::Erase),
            1 => (0usize..250, 0usize..6).prop_map(|(s, n)| Op::EraseRange(s, n)),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn every_mutation_keeps_the_set_sorted(ops in prop::collection::vec(op_strategy(), 0..400)) {
            let mut set = SortedSet::new();
            for op in ops {
                match op {
                    Op::Insert(v) => {
                        set.insert(v);
                    }
                    Op::Hinted(hint, v) => {
                        let position = set.insert_with_hint(hint, v);
                        prop_assert_eq!(set.get_at(position), Some(&v));
                    }
                    Op::Remove(v) => {
                        set.remove(&v);
                        prop_assert!(!set.contains(&v));
                    }
                    Op::Erase(position) => {
                        if position < set.len() {
                            set.erase(position);
                        }
                    }
                    Op::EraseRange(start, count) => {
                        let start = start.min(set.len());
                        let end = (start + count).min(set.len());
                        prop_assert_eq!(set.erase_range(start..end), start);
                    }
                }
                set.raw.validate_invariants();
            }
        }
    }

    #[test]
    fn range_is_a_sub_slice_walk() {
        let set: SortedSet<u8> = (0..10).collect();
        let mut range = set.range(2..7);
        assert_eq!(range.len(), 5);
        assert_eq!(range.next_back(), Some(&6));
        assert_eq!(range.nth(1), Some(&3));
        assert_eq!(format!("{range:?}"), "Iter([4, 5])");
        assert_eq!(range.last(), Some(&5));
    }

    #[test]
    fn debug_prints_a_set_literal() {
        let set = SortedSet::from([3, 1, 2]);
        assert_eq!(format!("{set:?}"), "{1, 2, 3}");
        assert_eq!(format!("{:?}", set.into_iter()), "IntoIter([1, 2, 3])");
    }

    #[test]
    fn default_iterators_are_empty() {
        assert_eq!(Iter::<u8>::default().next(), None);
        assert_eq!(IntoIter::<u8>::default().len(), 0);
    }
}
