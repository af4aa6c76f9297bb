use super::SortedSet;
use crate::raw::RawSortedVec;

impl<T> SortedSet<T> {
    /// Creates an empty set whose vector can take `capacity` values before growing.
    ///
    /// Pre-sizing matters more here than for a tree: every growth copies the whole sequence.
    ///
    /// ```
    /// use sorted_vec_collections::SortedSet;
    ///
    /// let mut set = SortedSet::with_capacity(3);
    /// let before = set.capacity();
    /// set.insert_iter([3, 1, 2]);
    /// assert_eq!(set.capacity(), before);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        SortedSet {
            raw: RawSortedVec::with_capacity(capacity),
        }
    }

    /// Slots allocated for values, used or not.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Grows the vector so that `additional` more values fit without reallocating.
    ///
    /// # Panics
    ///
    /// Panics if the required size overflows `isize::MAX` bytes, as `Vec::reserve` does.
    pub fn reserve(&mut self, additional: usize) {
        self.raw.reserve(additional);
    }

    /// Releases unused slots.
    pub fn shrink_to_fit(&mut self) {
        self.raw.shrink_to_fit();
    }
}
