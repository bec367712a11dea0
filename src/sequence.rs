//! Defines the operations shared by every linear sequence in this crate.

use crate::error::Result;

/// An ordered, zero-indexed sequence of `i32` supporting positional edits.
///
/// **The following operations are required to be implemented**:
///
/// - length --- [`Self::size`]
/// - positional edits --- [`Self::insert`] and [`Self::delete`]
/// - read element at index --- [`Self::get`]
/// - whole-sequence reordering --- [`Self::rotate`] and [`Self::reverse`]
/// - search --- [`Self::index_of`]
///
/// [`Self::append`], [`Self::prepend`] and [`Self::is_empty`] come for free.
///
/// Example:
/// ```
/// use intseq::{GrowableArray, Sequence, SinglyLinkedList};
/// fn fill<S: Sequence>(mut s: S) -> S {
///     s.append(2).unwrap();
///     s.append(3).unwrap();
///     s.prepend(1).unwrap();
///     s.rotate(1);
///     s
/// }
/// let a = fill(GrowableArray::default());
/// let l = fill(SinglyLinkedList::new());
/// assert_eq!(a.as_slice(), &[3, 1, 2]);
/// assert_eq!(l.iter().collect::<Vec<_>>(), vec![3, 1, 2]);
/// ```
pub trait Sequence {
    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Returns whether there are no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Inserts `elem` so that it ends up at `index`, shifting everything at or after `index`
    /// one position towards the back.
    /// Fails with [`crate::SeqError::OutOfRange`] unless `index <= size`.
    fn insert(&mut self, index: usize, elem: i32) -> Result<()>;

    /// Removes and returns the element at `index`, closing the gap.
    /// Fails with [`crate::SeqError::OutOfRange`] unless `index < size`.
    fn delete(&mut self, index: usize) -> Result<i32>;

    /// Returns the element at `index`, or `None` if the index is out of bounds.
    fn get(&self, index: usize) -> Option<i32>;

    /// Adds `elem` after the last element. Same as `insert(size, elem)`.
    fn append(&mut self, elem: i32) -> Result<()> {
        self.insert(self.size(), elem)
    }

    /// Adds `elem` before the first element. Same as `insert(0, elem)`.
    fn prepend(&mut self, elem: i32) -> Result<()> {
        self.insert(0, elem)
    }

    /// Rotates the sequence `k` positions towards the back, wrapping `k` modulo the size.
    /// No-op when the size is at most 1 or `k` is a multiple of it.
    ///
    /// Example: `rotate([A, B, C, D, E], 2) == [D, E, A, B, C]`
    fn rotate(&mut self, k: usize);

    /// Reverses the order of the elements in place.
    fn reverse(&mut self);

    /// Returns the position of the first element equal to `elem`.
    fn index_of(&self, elem: i32) -> Option<usize>;
}
