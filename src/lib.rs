//! Ordered set and map collections backed by a sorted `Vec`.
//!
//! This crate provides [`SortedSet`] and [`SortedMap`], which expose the observable contract of
//! the standard library's `BTreeSet` and `BTreeMap` (unique keys, ascending iteration order,
//! logarithmic lookup) while storing every element in one contiguous, sorted, duplicate-free
//! sequence instead of a tree:
//!
//! - Lookups, bounds and ranges are binary searches over a slice
//! - Insertion and removal shift the tail of the sequence, so they are O(n)
//! - Every element has a plain `usize` position, valid until the next mutation at or before it
//!
//! # Example
//!
//! ```
//! use sorted_vec_collections::SortedMap;
//!
//! let mut scores = SortedMap::new();
//! scores.insert("Alice", 100);
//! scores.insert("Bob", 85);
//! scores.insert("Carol", 92);
//!
//! // Inserting an existing key never overwrites it.
//! assert_eq!(scores.insert("Bob", 0), (1, false));
//! assert_eq!(scores.get(&"Bob"), Some(&85));
//!
//! // Strict access reports missing keys instead of inserting them.
//! assert!(scores.at(&"Dave").is_err());
//!
//! // Positions are indices into the sorted sequence.
//! assert_eq!(scores.lower_bound(&"B"), 1);
//! assert_eq!(scores.get_at(2), Some((&"Carol", &92)));
//! ```
//!
//! # Features
//!
//! - `no_std`: only `alloc` is needed
//! - The everyday `BTreeMap`/`BTreeSet` calls (`get`, `insert`, `remove`, `range`, `retain`,
//!   iteration), except that map insertion keeps the existing value
//! - Positional calls: `find`, `lower_bound`, `upper_bound`, `equal_range`, `get_at`, hinted
//!   insertion and erase by position or position range
//! - Optional `serde` support behind the `serde` feature
//!
//! # Implementation
//!
//! Both collections share a single engine that keeps a `Vec` ascending and duplicate-free under
//! every mutation. The set orders elements by themselves. The map stores `(key, value)` tuples
//! and orders them by the key alone. Comparisons between two collections are lexicographic over
//! the stored sequence.
//!
//! Any mutation may shift or reallocate the backing storage. Positions obtained before a
//! mutation at or before them must be queried again afterwards.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod raw;
#[cfg(feature = "serde")]
mod serde;

pub mod sorted_map;
pub mod sorted_set;

pub use error::{Error, Result};
pub use sorted_map::SortedMap;
pub use sorted_set::SortedSet;
