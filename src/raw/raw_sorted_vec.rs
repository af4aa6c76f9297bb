use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Bound, Range, RangeBounds};
use core::slice;

use super::projection::Projection;

pub(crate) const SORTED_INVARIANT_PANIC_MESSAGE: &str =
    "sorted sequence invariant violated: keys must be strictly ascending";

/// Validates that the start bound does not exceed the end bound.
///
/// # Panics
///
/// Panics if `start > end` or if `start == end` and both bounds are `Excluded`.
fn validate_range_bounds<T, R>(range: &R)
where
    T: ?Sized + Ord,
    R: RangeBounds<T>,
{
    if let (Bound::Included(start) | Bound::Excluded(start), Bound::Included(end) | Bound::Excluded(end)) =
        (range.start_bound(), range.end_bound())
    {
        let valid =
            if matches!(range.start_bound(), Bound::Excluded(_)) && matches!(range.end_bound(), Bound::Excluded(_)) {
                start < end
            } else {
                start <= end
            };
        assert!(valid, "range start is greater than range end in sorted collection");
    }
}

/// The sorted sequence backing `SortedSet` and `SortedMap`.
///
/// Elements are kept strictly ascending by `P::key`, so no two elements share a key. Positions
/// are plain indices into the backing `Vec` and `len()` is the end position.
pub(crate) struct RawSortedVec<E, P> {
    elements: Vec<E>,
    _projection: PhantomData<fn() -> P>,
}

impl<E, P> RawSortedVec<E, P> {
    /// Creates a new, empty sequence.
    pub(crate) const fn new() -> Self {
        Self {
            elements: Vec::new(),
            _projection: PhantomData,
        }
    }

    /// Creates a new sequence with room for `capacity` elements.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            _projection: PhantomData,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.elements.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.elements.reserve(additional);
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.elements.shrink_to_fit();
    }

    pub(crate) fn clear(&mut self) {
        self.elements.clear();
    }

    pub(crate) fn as_slice(&self) -> &[E] {
        &self.elements
    }

    /// Returns the elements as a mutable slice.
    ///
    /// Callers must not change the ordering key of any element.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [E] {
        &mut self.elements
    }

    pub(crate) fn iter(&self) -> slice::Iter<'_, E> {
        self.elements.iter()
    }

    /// Callers must not change the ordering key of any element.
    pub(crate) fn iter_mut(&mut self) -> slice::IterMut<'_, E> {
        self.elements.iter_mut()
    }

    pub(crate) fn into_vec(self) -> Vec<E> {
        self.elements
    }

    pub(crate) fn first(&self) -> Option<&E> {
        self.elements.first()
    }

    pub(crate) fn last(&self) -> Option<&E> {
        self.elements.last()
    }

    pub(crate) fn get_at(&self, position: usize) -> Option<&E> {
        self.elements.get(position)
    }

    /// Callers must not change the ordering key of the element.
    pub(crate) fn get_at_mut(&mut self, position: usize) -> Option<&mut E> {
        self.elements.get_mut(position)
    }

    /// Removes and returns the element at `position`, shifting the tail left by one.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()`.
    pub(crate) fn remove_at(&mut self, position: usize) -> E {
        let len = self.elements.len();
        assert!(position < len, "erase position (is {position}) should be < len (is {len})");
        self.elements.remove(position)
    }

    /// Removes the elements in `range` with a single shift and returns the position that
    /// now holds the first element after the removed range.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or ends past `len()`.
    pub(crate) fn remove_range<R>(&mut self, range: R) -> usize
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        self.elements.drain(range);
        start
    }

    pub(crate) fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&E) -> bool,
    {
        // Removing elements never reorders the survivors.
        self.elements.retain(f);
    }

    /// Callers must not change the ordering key of any element.
    pub(crate) fn retain_mut<F>(&mut self, f: F)
    where
        F: FnMut(&mut E) -> bool,
    {
        self.elements.retain_mut(f);
    }
}

impl<E, P> RawSortedVec<E, P>
where
    P: Projection<E>,
    P::Key: Ord,
{
    #[inline]
    fn cmp_key<Q>(element: &E, key: &Q) -> Ordering
    where
        P::Key: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let element_key: &Q = P::key(element).borrow();
        element_key.cmp(key)
    }

    /// Binary search for `key`: `Ok(position)` if present, otherwise `Err(position)` of the
    /// slot where it would be inserted.
    pub(crate) fn search<Q>(&self, key: &Q) -> Result<usize, usize>
    where
        P::Key: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let position = self.lower_bound(key);
        match self.elements.get(position) {
            Some(element) if Self::cmp_key(element, key) == Ordering::Equal => Ok(position),
            _ => Err(position),
        }
    }

    /// First position whose key is not less than `key`.
    pub(crate) fn lower_bound<Q>(&self, key: &Q) -> usize
    where
        P::Key: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.elements.partition_point(|element| Self::cmp_key(element, key) == Ordering::Less)
    }

    /// First position whose key is greater than `key`.
    pub(crate) fn upper_bound<Q>(&self, key: &Q) -> usize
    where
        P::Key: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.elements.partition_point(|element| Self::cmp_key(element, key) != Ordering::Greater)
    }

    pub(crate) fn equal_range<Q>(&self, key: &Q) -> Range<usize>
    where
        P::Key: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let lower = self.lower_bound(key);
        // Keys are unique, so the range spans at most one element.
        let upper = match self.elements.get(lower) {
            Some(element) if Self::cmp_key(element, key) == Ordering::Equal => lower + 1,
            _ => lower,
        };
        lower..upper
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&E>
    where
        P::Key: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).ok().map(|position| &self.elements[position])
    }

    /// Callers must not change the ordering key of the element.
    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut E>
    where
        P::Key: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.search(key) {
            Ok(position) => Some(&mut self.elements[position]),
            Err(_) => None,
        }
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        P::Key: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).is_ok()
    }

    /// Inserts `element` unless an element with an equal key is present.
    ///
    /// Returns the position of the element with that key and whether `element` was inserted.
    /// An existing element is never overwritten.
    pub(crate) fn insert(&mut self, element: E) -> (usize, bool) {
        match self.search::<P::Key>(P::key(&element)) {
            Ok(position) => (position, false),
            Err(position) => {
                self.elements.insert(position, element);
                self.debug_assert_sorted_around(position);
                (position, true)
            }
        }
    }

    /// Inserts `element` at `position`, which must be the slot `search` reported for its key.
    pub(crate) fn insert_at(&mut self, position: usize, element: E) -> &mut E {
        self.elements.insert(position, element);
        self.debug_assert_sorted_around(position);
        &mut self.elements[position]
    }

    /// Inserts `element` using `hint` as the expected insertion position.
    ///
    /// The hint only speeds up the search. Starting at `hint`, the predecessors are scanned
    /// backward until one orders before `element`. A hint that is too far left falls back to
    /// binary search. A hint that is too far right degrades to a linear scan. If an element
    /// with an equal key is found, nothing is inserted and its position is returned.
    pub(crate) fn insert_with_hint(&mut self, hint: usize, element: E) -> usize {
        let hint = hint.min(self.elements.len());

        if let Some(at_hint) = self.elements.get(hint) {
            match P::key(at_hint).cmp(P::key(&element)) {
                Ordering::Equal => return hint,
                Ordering::Less => return self.insert(element).0,
                Ordering::Greater => {}
            }
        }

        let mut position = hint;
        while position > 0 {
            match P::key(&self.elements[position - 1]).cmp(P::key(&element)) {
                Ordering::Equal => return position - 1,
                Ordering::Less => {
                    self.elements.insert(position, element);
                    self.debug_assert_sorted_around(position);
                    return position;
                }
                Ordering::Greater => position -= 1,
            }
        }

        self.insert(element).0
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<E>
    where
        P::Key: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let position = self.search(key).ok()?;
        Some(self.elements.remove(position))
    }

    /// Returns the positions covered by `range`.
    ///
    /// # Panics
    ///
    /// Panics if range `start > end`, or if `start == end` and both bounds are `Excluded`.
    pub(crate) fn range_positions<Q, R>(&self, range: &R) -> Range<usize>
    where
        P::Key: Borrow<Q>,
        Q: ?Sized + Ord,
        R: RangeBounds<Q>,
    {
        validate_range_bounds(range);

        let start = match range.start_bound() {
            Bound::Included(key) => self.lower_bound(key),
            Bound::Excluded(key) => self.upper_bound(key),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(key) => self.upper_bound(key),
            Bound::Excluded(key) => self.lower_bound(key),
            Bound::Unbounded => self.elements.len(),
        };
        start..end.max(start)
    }

    #[inline]
    fn debug_assert_sorted_around(&self, position: usize) {
        debug_assert!(self.is_sorted_around(position), "{}", SORTED_INVARIANT_PANIC_MESSAGE);
    }

    /// Checks the neighbours of `position`, the only place a single mutation can break the order.
    fn is_sorted_around(&self, position: usize) -> bool {
        let start = position.saturating_sub(1);
        let end = position.saturating_add(2).min(self.elements.len());
        self.elements.get(start..end).is_none_or(|window| window.windows(2).all(|pair| P::key(&pair[0]) < P::key(&pair[1])))
    }
}

impl<E: Clone, P> Clone for RawSortedVec<E, P> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            _projection: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.elements.clone_from(&source.elements);
    }
}

impl<E: PartialEq, P> PartialEq for RawSortedVec<E, P> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<E: Eq, P> Eq for RawSortedVec<E, P> {}

impl<E: PartialOrd, P> PartialOrd for RawSortedVec<E, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.elements.as_slice().partial_cmp(other.elements.as_slice())
    }
}

impl<E: Ord, P> Ord for RawSortedVec<E, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.elements.as_slice().cmp(other.elements.as_slice())
    }
}

impl<E: Hash, P> Hash for RawSortedVec<E, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}
