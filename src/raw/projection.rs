/// Selects the part of a stored element that the sequence is ordered by.
pub(crate) trait Projection<E> {
    type Key;

    fn key(element: &E) -> &Self::Key;
}

/// Orders elements by themselves. Used by `SortedSet`.
pub(crate) enum Identity {}

impl<T> Projection<T> for Identity {
    type Key = T;

    #[inline]
    fn key(element: &T) -> &T {
        element
    }
}

/// Orders `(key, value)` tuples by `key` alone. Used by `SortedMap`.
pub(crate) enum ByKey {}

impl<K, V> Projection<(K, V)> for ByKey {
    type Key = K;

    #[inline]
    fn key(element: &(K, V)) -> &K {
        &element.0
    }
}
