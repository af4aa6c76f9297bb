use super::SortedMap;
use crate::raw::RawSortedVec;

impl<K, V> SortedMap<K, V> {
    /// Creates an empty map with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        SortedMap {
            raw: RawSortedVec::with_capacity(capacity),
        }
    }

    /// Entries that fit before the vector grows.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Makes room for `additional` more entries.
    ///
    /// # Panics
    ///
    /// Panics if the required size overflows `isize::MAX` bytes.
    pub fn reserve(&mut self, additional: usize) {
        self.raw.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.raw.shrink_to_fit();
    }
}
