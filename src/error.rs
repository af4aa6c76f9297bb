use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported by the collections in this crate.
///
/// Contract violations such as erasing past the end still panic, the way `Vec` does.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The key passed to a strict accessor such as [`SortedMap::at`] is not in the map.
    ///
    /// [`SortedMap::at`]: crate::SortedMap::at
    #[error("key not found in sorted map")]
    KeyNotFound,
}
