//! Axis index resolution.
//!
//! An axis is an ordered list of identifiers. The position of an
//! identifier on its axis is the row (events) or column (states) used to
//! address the transition table.

use super::id::Identifier;

/// Find the position of `key` in `ids`.
///
/// Scans left to right and returns the index of the first element equal to
/// `key`, or `None` when no element matches. O(n) in the length of `ids`.
///
/// # Example
///
/// ```rust
/// use stm_table::core::find;
///
/// let ids = [10i16, 20, 30];
/// assert_eq!(find(&ids, 20), Some(1));
/// assert_eq!(find(&ids, 40), None);
/// ```
pub fn find<T: Identifier>(ids: &[T], key: T) -> Option<usize> {
    ids.iter().position(|id| *id == key)
}

/// Borrowed, ordered list of identifiers.
///
/// The axis never copies the caller's list, it only keeps the reference.
#[derive(Debug)]
pub struct Axis<'a, T> {
    ids: &'a [T],
}

impl<T> Clone for Axis<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Axis<'_, T> {}

impl<'a, T: Identifier> Axis<'a, T> {
    /// Wrap a caller-owned identifier list.
    pub const fn new(ids: &'a [T]) -> Self {
        Self { ids }
    }

    /// Position of `key` on this axis.
    pub fn find(&self, key: T) -> Option<usize> {
        find(self.ids, key)
    }

    /// Whether `key` appears on this axis.
    pub fn contains(&self, key: T) -> bool {
        self.find(key).is_some()
    }

    /// Identifier at `index`.
    pub fn get(&self, index: usize) -> Option<T> {
        self.ids.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.ids
    }

    /// First pair of positions `(first, second)` holding the same identifier.
    ///
    /// Resolution always returns the first match, so a duplicate silently
    /// shadows the later column or row. The check is quadratic and does not
    /// allocate.
    pub fn first_duplicate(&self) -> Option<(usize, usize)> {
        self.ids.iter().enumerate().find_map(|(second, id)| {
            find(&self.ids[..second], *id).map(|first| (first, second))
        })
    }
}
