use core::borrow::Borrow;
use core::ops::{Range, RangeBounds};

use super::SortedSet;

impl<T> SortedSet<T> {
    /// Returns the value at `position` in sorted order, or `None` if `position >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_vec_collections::SortedSet;
    ///
    /// let set = SortedSet::from([10, 20, 30]);
    /// assert_eq!(set.get_at(1), Some(&20));
    /// assert!(set.get_at(3).is_none());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn get_at(&self, position: usize) -> Option<&T> {
        self.raw.get_at(position)
    }

    /// Removes the value at `position` and returns the position of the value that followed it,
    /// which is `position` itself.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()`. The end position does not name a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_vec_collections::SortedSet;
    ///
    /// let mut set = SortedSet::from([1, 2, 3]);
    /// let next = set.erase(1);
    /// assert_eq!(set.get_at(next), Some(&3));
    /// assert_eq!(set.as_slice(), &[1, 3]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn erase(&mut self, position: usize) -> usize {
        self.raw.remove_at(position);
        position
    }

    /// Removes every value whose position lies in `positions` and returns the position now
    /// holding the first value after them.
    ///
    /// # Panics
    ///
    /// Panics if the start of `positions` is greater than its end, or if the end is past `len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_vec_collections::SortedSet;
    ///
    /// let mut set = SortedSet::from([1, 2, 3, 4, 5]);
    /// assert_eq!(set.erase_range(1..3), 1);
    /// assert_eq!(set.as_slice(), &[1, 4, 5]);
    /// assert_eq!(set.erase_range(2..2), 2);
    /// assert_eq!(set.len(), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn erase_range<R>(&mut self, positions: R) -> usize
    where
        R: RangeBounds<usize>,
    {
        self.raw.remove_range(positions)
    }
}

impl<T: Ord> SortedSet<T> {
    /// Returns the position of the value equal to `value`, or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_vec_collections::SortedSet;
    ///
    /// let set = SortedSet::from([10, 20]);
    ///
    /// assert_eq!(set.find(&20), Some(1));
    /// assert_eq!(set.find(&15), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn find<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(value).ok()
    }

    /// Returns the first position whose value is not less than `value`.
    ///
    /// Returns `len()` if every value is less.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_vec_collections::SortedSet;
    ///
    /// let set = SortedSet::from([1, 3, 5]);
    /// assert_eq!(set.lower_bound(&3), 1);
    /// assert_eq!(set.lower_bound(&4), 2);
    /// assert_eq!(set.lower_bound(&9), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn lower_bound<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.lower_bound(value)
    }

    /// Returns the first position whose value is greater than `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_vec_collections::SortedSet;
    ///
    /// let set = SortedSet::from([1, 3, 5]);
    /// assert_eq!(set.upper_bound(&3), 2);
    /// assert_eq!(set.upper_bound(&0), 0);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn upper_bound<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.upper_bound(value)
    }

    /// Returns `lower_bound(value)..upper_bound(value)`. Values are unique, so the range holds
    /// at most one position.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_vec_collections::SortedSet;
    ///
    /// let set = SortedSet::from([1, 3, 5]);
    /// assert_eq!(set.equal_range(&3), 1..2);
    /// assert_eq!(set.equal_range(&4), 2..2);
    /// ```
    #[must_use]
    pub fn equal_range<Q>(&self, value: &Q) -> Range<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.equal_range(value)
    }

    /// Returns the number of values equal to `value`: `1` if present, `0` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_vec_collections::SortedSet;
    ///
    /// let set = SortedSet::from([1, 3, 5]);
    /// assert_eq!(set.count(&3), 1);
    /// assert_eq!(set.count(&4), 0);
    /// ```
    #[must_use]
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        usize::from(self.raw.contains(value))
    }

    /// Adds a value to the set, using `hint` as the expected position of the new value.
    ///
    /// Returns the position of the value in the set. A correct hint (the position just after
    /// the value's predecessor) makes the insertion skip the binary search, which is how
    /// appending ascending runs stays cheap. Any other hint still gives the right result:
    /// from `hint` the predecessors are scanned backward until one orders before `value`,
    /// falling back to a plain [`insert`] when the hint lies left of the true position.
    /// Hints past `len()` are treated as `len()`.
    ///
    /// If an equal value is already present, the set is left untouched and its position is
    /// returned.
    ///
    /// [`insert`]: SortedSet::insert
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_vec_collections::SortedSet;
    ///
    /// let mut set = SortedSet::from([1, 2, 3, 5, 6]);
    /// assert_eq!(set.insert_with_hint(3, 4), 3);
    /// assert_eq!(set.insert_with_hint(0, 7), 6);
    /// assert_eq!(set.insert_with_hint(6, 2), 1);
    /// assert_eq!(set.as_slice(), &[1, 2, 3, 4, 5, 6, 7]);
    /// ```
    ///
    /// # Complexity
    ///
    /// Amortized O(1) when the hint is exact and the value lands at the end; otherwise up to
    /// O(n) for the scan and the shift.
    pub fn insert_with_hint(&mut self, hint: usize, value: T) -> usize {
        self.raw.insert_with_hint(hint, value)
    }

    /// Builds a value from `args` and inserts it as [`insert`] does.
    ///
    /// The value is always built, even if an equal one turns out to be present.
    ///
    /// [`insert`]: SortedSet::insert
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_vec_collections::SortedSet;
    ///
    /// let mut set: SortedSet<String> = SortedSet::new();
    /// assert_eq!(set.emplace("pear"), (0, true));
    /// assert_eq!(set.emplace("apple"), (0, true));
    /// assert_eq!(set.emplace("pear"), (1, false));
    /// ```
    pub fn emplace<A>(&mut self, args: A) -> (usize, bool)
    where
        T: From<A>,
    {
        self.raw.insert(T::from(args))
    }

    /// Builds a value from `args` and inserts it as [`insert_with_hint`] does.
    ///
    /// [`insert_with_hint`]: SortedSet::insert_with_hint
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_vec_collections::SortedSet;
    ///
    /// let mut set: SortedSet<u64> = SortedSet::new();
    /// for n in 0u32..4 {
    ///     let end = set.len();
    ///     set.emplace_hint(end, n);
    /// }
    /// assert_eq!(set.as_slice(), &[0, 1, 2, 3]);
    /// ```
    pub fn emplace_hint<A>(&mut self, hint: usize, args: A) -> usize
    where
        T: From<A>,
    {
        self.raw.insert_with_hint(hint, T::from(args))
    }

    /// Removes the value equal to `value`, if any. Returns how many values were removed,
    /// which is `0` or `1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_vec_collections::SortedSet;
    ///
    /// let mut set = SortedSet::from([1, 2, 3]);
    /// assert_eq!(set.erase_key(&2), 1);
    /// assert_eq!(set.erase_key(&10), 0);
    /// assert_eq!(set.as_slice(), &[1, 3]);
    /// ```
    pub fn erase_key<Q>(&mut self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        usize::from(self.raw.remove(value).is_some())
    }
}
