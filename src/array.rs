use alloc::{boxed::Box, vec};
use core::{
    fmt::{Debug, Formatter},
    slice,
};

use crate::{
    error::{Result, SeqError},
    growth::{ArrayConfig, GrowthFactor},
    sequence::Sequence,
};

/// A contiguous, resizable array of `i32` with a configurable growth factor.
///
/// Storage is a boxed slice whose length is the capacity; the first [`Self::size`] slots hold
/// the elements and the rest is zero filler. Capacity only ever grows, by
/// [`GrowthFactor::grow`] whenever an insertion finds the buffer full.
///
/// ## Summary of supported operations
///
/// - Insert, delete and get at index ([`Sequence`]); append is amortized O(1).
/// - Rotate and reverse in place.
/// - Merge (concatenate) and interleave with another array.
/// - Middle element, linear search, and split into two fresh arrays.
///
/// Example:
/// ```
/// use intseq::{GrowableArray, Sequence};
/// let mut a = GrowableArray::new(4, 2.0).unwrap();
/// for x in 1..=5 {
///     a.append(x).unwrap();
/// }
/// assert_eq!(a.capacity(), 8);
/// a.rotate(2);
/// assert_eq!(a.as_slice(), &[4, 5, 1, 2, 3]);
/// assert_eq!(a.get_middle(), Ok(1));
/// ```
#[derive(Clone)]
pub struct GrowableArray {
    storage: Box<[i32]>,
    size: usize,
    growth: GrowthFactor,
}

impl GrowableArray {
    /// Creates an empty array with `initial_capacity` slots.
    /// Fails if `growth_factor` is not a finite number greater than 1.
    pub fn new(initial_capacity: usize, growth_factor: f64) -> Result<Self> {
        let growth = GrowthFactor::new(growth_factor)?;
        Ok(Self::with_config(ArrayConfig::new(initial_capacity, growth)))
    }

    /// Creates an empty array as described by `config`.
    pub fn with_config(config: ArrayConfig) -> Self {
        Self::with_storage(zeroed(config.initial_capacity), 0, config.growth_factor)
    }

    fn with_storage(storage: Box<[i32]>, size: usize, growth: GrowthFactor) -> Self {
        debug_assert!(size <= storage.len());
        Self { storage, size, growth }
    }

    /// Returns how many elements fit before the next growth.
    pub fn capacity(&self) -> usize { self.storage.len() }

    /// Returns the growth factor this array was created with.
    pub fn growth_factor(&self) -> GrowthFactor { self.growth }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[i32] { &self.storage[..self.size] }

    pub fn iter(&self) -> slice::Iter<'_, i32> { self.as_slice().iter() }

    /// Removes all elements. Capacity is kept.
    pub fn clear(&mut self) { self.size = 0; }

    ////////////////////////////////////////////////////////////////////
    // combine

    /// Appends all of `other`'s elements after this array's own.
    /// `other` is left as is.
    pub fn merge(&mut self, other: &GrowableArray) {
        let required = self.size + other.size;
        self.reserve_for(required);
        self.storage[self.size..required].copy_from_slice(other.as_slice());
        self.size = required;
    }

    /// Weaves `other` into this array: afterwards position `2i` holds this array's original
    /// `i`-th element and position `2i + 1` holds `other`'s `i`-th element.
    /// Fails with [`SeqError::LengthMismatch`] unless both arrays have the same size.
    ///
    /// Example: `interleave([1, 2, 3], [7, 8, 9]) == [1, 7, 2, 8, 3, 9]`
    pub fn interleave(&mut self, other: &GrowableArray) -> Result<()> {
        if other.size != self.size {
            return Err(SeqError::LengthMismatch { left: self.size, right: other.size });
        }
        let required = self.size + other.size;
        self.reserve_for(required);
        // Back to front, so slot `i` is read before `2i` or `2i + 1` can overwrite it.
        for i in (0..self.size).rev() {
            self.storage[2 * i] = self.storage[i];
            self.storage[2 * i + 1] = other.storage[i];
        }
        self.size = required;
        Ok(())
    }

    ////////////////////////////////////////////////////////////////////
    // query

    /// Returns the element at `size / 2`.
    /// Fails with [`SeqError::EvenLength`] when the size is even (including empty).
    pub fn get_middle(&self) -> Result<i32> {
        if self.size % 2 == 0 {
            return Err(SeqError::EvenLength { len: self.size });
        }
        Ok(self.storage[self.size / 2])
    }

    /// Copies `[0, index)` and `[index, size)` into two fresh arrays, each sized exactly to its
    /// contents and sharing this array's growth factor.
    /// Fails with [`SeqError::OutOfRange`] unless `index < size`.
    pub fn split(&self, index: usize) -> Result<(GrowableArray, GrowableArray)> {
        SeqError::check_index(index, self.size)?;
        let (left, right) = self.as_slice().split_at(index);
        Ok((self.fresh(left), self.fresh(right)))
    }

    fn fresh(&self, elems: &[i32]) -> GrowableArray {
        Self::with_storage(Box::from(elems), elems.len(), self.growth)
    }

    ////////////////////////////////////////////////////////////////////
    // capacity

    /// Makes room for `required` elements, growing to `max(required, grow(capacity))`.
    fn reserve_for(&mut self, required: usize) {
        if required > self.capacity() {
            self.reallocate(self.growth.grow_to(self.capacity(), required));
        }
    }

    /// Replaces the buffer with a larger one. The new buffer is fully populated before the old
    /// one is dropped.
    fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.size);
        let mut grown = zeroed(capacity);
        grown[..self.size].copy_from_slice(self.as_slice());
        self.storage = grown;
    }
}

fn zeroed(capacity: usize) -> Box<[i32]> {
    vec![0; capacity].into_boxed_slice()
}

impl Sequence for GrowableArray {
    fn size(&self) -> usize { self.size }

    fn insert(&mut self, index: usize, elem: i32) -> Result<()> {
        SeqError::check_position(index, self.size)?;
        if self.size == self.capacity() {
            self.reallocate(self.growth.grow(self.capacity()));
        }
        self.storage.copy_within(index..self.size, index + 1);
        self.storage[index] = elem;
        self.size += 1;
        Ok(())
    }

    fn delete(&mut self, index: usize) -> Result<i32> {
        SeqError::check_index(index, self.size)?;
        let removed = self.storage[index];
        self.storage.copy_within(index + 1..self.size, index);
        self.size -= 1;
        Ok(removed)
    }

    fn get(&self, index: usize) -> Option<i32> {
        self.as_slice().get(index).copied()
    }

    fn rotate(&mut self, k: usize) {
        if self.size <= 1 || k % self.size == 0 { return; }
        let k = k % self.size;
        let elems = &mut self.storage[..self.size];
        elems.rotate_right(k);
    }

    fn reverse(&mut self) {
        self.storage[..self.size].reverse();
    }

    fn index_of(&self, elem: i32) -> Option<usize> {
        self.iter().position(|&x| x == elem)
    }
}

impl Default for GrowableArray {
    fn default() -> Self { Self::with_config(ArrayConfig::default()) }
}

// Custom eq is needed --- filler past `size` and the capacity should not take part in the comparison.
impl PartialEq for GrowableArray {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for GrowableArray {}

impl FromIterator<i32> for GrowableArray {
    fn from_iter<T: IntoIterator<Item=i32>>(iter: T) -> Self {
        let mut a = Self::default();
        a.extend(iter);
        a
    }
}

impl Extend<i32> for GrowableArray {
    fn extend<T: IntoIterator<Item=i32>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve_for(self.size.saturating_add(lower));
        for elem in iter {
            // appending is always in range
            let _ = self.append(elem);
        }
    }
}

impl<'a> IntoIterator for &'a GrowableArray {
    type Item = &'a i32;
    type IntoIter = slice::Iter<'a, i32>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl Debug for GrowableArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
