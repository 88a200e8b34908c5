//! Vector reader contract.
//!
//! Every generated table gets a `Vector<T>Reader` interface with two
//! operations: `Len()` and `Get(i)`. This module provides the Rust side of
//! that contract so readers backing generated code share one set of rules:
//!
//! - `get(i)` with `0 <= i < len()` never fails; an unset slot yields the
//!   item type's default value.
//! - `get(i)` with `i < 0` or `i >= len()` returns
//!   [`Error::VectorInvalidIndex`].

use crate::error::{Error, Result};
use std::iter::FusedIterator;

/// Read-only access to a sequence of items.
///
/// # Example
/// ```
/// use omniql_core::{SliceVector, VectorReader};
///
/// let slots = [Some(10u32), None, Some(30)];
/// let vector = SliceVector::new(&slots);
///
/// assert_eq!(vector.len(), 3);
/// assert_eq!(vector.get(1), Ok(0));
/// assert!(vector.get(3).is_err());
/// ```
pub trait VectorReader {
    /// Item type produced by [`get`](Self::get).
    type Item;

    /// Returns the current number of items.
    fn len(&self) -> usize;

    /// Returns the item at position `i`.
    ///
    /// # Errors
    /// Returns [`Error::VectorInvalidIndex`] when `i` is negative or not
    /// less than [`len`](Self::len).
    fn get(&self, i: isize) -> Result<Self::Item>;

    /// Returns true if the vector holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every item in order.
    fn iter(&self) -> VectorIter<'_, Self>
    where
        Self: Sized,
    {
        VectorIter::new(self)
    }
}

/// Vector of scalar strings (`hybrids.VectorStringReader` on the Go side).
pub trait VectorStringReader: VectorReader<Item = String> {}

impl<V: VectorReader<Item = String>> VectorStringReader for V {}

/// Validates `index` against `len`, returning it as a slot position.
///
/// # Errors
/// Returns [`Error::VectorInvalidIndex`] when the index is out of range.
pub fn check_index(index: isize, len: usize) -> Result<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or(Error::VectorInvalidIndex { index, len })
}

/// Vector reader over borrowed, possibly unset slots.
#[derive(Debug, Clone, Copy)]
pub struct SliceVector<'a, T> {
    slots: &'a [Option<T>],
}

impl<'a, T> SliceVector<'a, T> {
    /// Wraps a slice of slots.
    #[must_use]
    pub const fn new(slots: &'a [Option<T>]) -> Self {
        Self { slots }
    }
}

impl<T: Clone + Default> VectorReader for SliceVector<'_, T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.slots.len()
    }

    fn get(&self, i: isize) -> Result<T> {
        let pos = check_index(i, self.slots.len())?;
        Ok(self.slots[pos].clone().unwrap_or_default())
    }
}

/// Iterator over a [`VectorReader`].
#[derive(Debug)]
pub struct VectorIter<'a, V> {
    vector: &'a V,
    index: usize,
    len: usize,
}

impl<'a, V: VectorReader> VectorIter<'a, V> {
    fn new(vector: &'a V) -> Self {
        Self {
            vector,
            index: 0,
            len: vector.len(),
        }
    }
}

impl<V: VectorReader> Iterator for VectorIter<'_, V> {
    type Item = Result<V::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            return None;
        }
        // len() fits in isize for any slice-backed vector
        let item = self.vector.get(self.index as isize);
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<V: VectorReader> ExactSizeIterator for VectorIter<'_, V> {}

impl<V: VectorReader> FusedIterator for VectorIter<'_, V> {}
