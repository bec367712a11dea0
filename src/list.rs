mod chain;

use core::{
    fmt::{Debug, Formatter},
    iter::FusedIterator,
};

use crate::{
    error::{Result, SeqError},
    sequence::Sequence,
};

use self::chain::{drop_iteratively, nth_link, reverse_onto, Link};

pub use self::chain::Node;

/// A singly linked list of `i32` with a cached length.
///
/// Each node is exclusively owned by its predecessor (the list owns the head), so splicing
/// nodes between two lists always moves them: [`Self::merge`] and [`Self::interleave`] leave
/// the donor list empty.
///
/// ## Summary of supported operations
///
/// - Insert, delete and get at index ([`Sequence`]); O(index), so prepend is O(1) and append
///   is O(size).
/// - Rotate and reverse by relinking, without allocating.
/// - Merge (concatenate) and interleave, taking over another list's nodes.
/// - Middle node, linear search, and split into two fresh lists.
///
/// Example:
/// ```
/// use intseq::{Sequence, SinglyLinkedList};
/// let mut l = SinglyLinkedList::new();
/// l.insert(0, 10).unwrap();
/// l.insert(1, 20).unwrap();
/// l.insert(0, 5).unwrap();
/// assert_eq!(l.iter().collect::<Vec<_>>(), vec![5, 10, 20]);
/// assert_eq!(l.get_middle().map(|n| n.value()), Some(10));
///
/// let mut other = [1, 2].into_iter().collect::<SinglyLinkedList>();
/// l.interleave(&mut other);
/// assert_eq!(l.iter().collect::<Vec<_>>(), vec![5, 1, 10, 2, 20]);
/// assert!(other.is_empty());
/// ```
pub struct SinglyLinkedList {
    head: Link,
    size: usize,
}

impl SinglyLinkedList {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self { head: None, size: 0 }
    }

    /// Returns an iterator over the values, front to back.
    pub fn iter(&self) -> Iter<'_> {
        Iter { next: self.head.as_deref(), remaining: self.size }
    }

    /// Removes all nodes.
    pub fn clear(&mut self) {
        let (chain, _) = self.take_chain();
        drop_iteratively(chain);
    }

    /// Detaches the whole chain, leaving this list empty.
    fn take_chain(&mut self) -> (Link, usize) {
        (self.head.take(), core::mem::take(&mut self.size))
    }

    /// Hangs `chain` (holding `len` nodes) off the current tail.
    fn splice_back(&mut self, chain: Link, len: usize) {
        *nth_link(&mut self.head, self.size) = chain;
        self.size += len;
    }

    ////////////////////////////////////////////////////////////////////
    // combine

    /// Moves all of `other`'s nodes to the end of this list; `other` is left empty.
    /// Fails with [`SeqError::EmptyReceiver`] if this list is empty, in which case neither list
    /// is touched.
    pub fn merge(&mut self, other: &mut SinglyLinkedList) -> Result<()> {
        if self.head.is_none() {
            return Err(SeqError::EmptyReceiver);
        }
        let (chain, len) = other.take_chain();
        self.splice_back(chain, len);
        Ok(())
    }

    /// Splices `other`'s nodes in after each of this list's nodes in turn, until either list
    /// runs out; whatever is left of `other` then goes at the end. `other` is left empty.
    ///
    /// Example: `interleave([1, 2, 3], [7, 8, 9, 10]) == [1, 7, 2, 8, 3, 9, 10]`
    pub fn interleave(&mut self, other: &mut SinglyLinkedList) {
        let (mut theirs, donated) = other.take_chain();
        let mut ours = self.head.take();
        // Built back to front, then flipped over in one pass.
        let mut woven: Link = None;
        while let Some(mut node) = ours {
            ours = node.next.take();
            node.next = woven;
            woven = Some(node);
            if let Some(mut donor) = theirs.take() {
                theirs = donor.next.take();
                donor.next = woven;
                woven = Some(donor);
            }
        }
        // `theirs` now holds only the donor nodes left over, already in order.
        self.head = reverse_onto(woven, theirs);
        self.size += donated;
    }

    ////////////////////////////////////////////////////////////////////
    // query

    /// Returns the node at `size / 2` (for an even size, the second of the two middle nodes),
    /// found with a slow/fast pointer walk; `None` if the list is empty.
    pub fn get_middle(&self) -> Option<&Node> {
        let mut slow = self.head.as_deref()?;
        let mut fast = self.head.as_deref();
        while let Some(node) = fast {
            let Some(ahead) = node.next() else { break };
            slow = slow.next()?;
            fast = ahead.next();
        }
        Some(slow)
    }

    /// Copies the values of `[0, index)` and `[index, size)` into two fresh lists.
    /// Fails with [`SeqError::OutOfRange`] unless `index < size`.
    pub fn split(&self, index: usize) -> Result<(SinglyLinkedList, SinglyLinkedList)> {
        SeqError::check_index(index, self.size)?;
        Ok((self.iter().take(index).collect(), self.iter().skip(index).collect()))
    }
}

impl Sequence for SinglyLinkedList {
    fn size(&self) -> usize { self.size }

    fn insert(&mut self, index: usize, elem: i32) -> Result<()> {
        SeqError::check_position(index, self.size)?;
        let link = nth_link(&mut self.head, index);
        let next = link.take();
        *link = Some(Node::boxed(elem, next));
        self.size += 1;
        Ok(())
    }

    fn delete(&mut self, index: usize) -> Result<i32> {
        SeqError::check_index(index, self.size)?;
        let link = nth_link(&mut self.head, index);
        let Some(node) = link.take() else {
            return Err(SeqError::OutOfRange { index, len: self.size });
        };
        let Node { value, next } = *node;
        *link = next;
        self.size -= 1;
        Ok(value)
    }

    fn get(&self, index: usize) -> Option<i32> {
        self.iter().nth(index)
    }

    fn rotate(&mut self, k: usize) {
        if self.size <= 1 || k % self.size == 0 { return; }
        let k = k % self.size;
        // Cut after the new tail; the last `k` nodes become the front and the old head
        // follows the old tail.
        let mut front = nth_link(&mut self.head, self.size - k).take();
        *nth_link(&mut front, k) = self.head.take();
        self.head = front;
    }

    fn reverse(&mut self) {
        replace_with::replace_with(&mut self.head, || None, |head| reverse_onto(head, None));
    }

    fn index_of(&self, elem: i32) -> Option<usize> {
        self.iter().position(|value| value == elem)
    }
}

impl Default for SinglyLinkedList {
    fn default() -> Self { Self::new() }
}

impl Drop for SinglyLinkedList {
    fn drop(&mut self) {
        drop_iteratively(self.head.take());
    }
}

impl Clone for SinglyLinkedList {
    fn clone(&self) -> Self { self.iter().collect() }
}

impl PartialEq for SinglyLinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl Eq for SinglyLinkedList {}

impl FromIterator<i32> for SinglyLinkedList {
    fn from_iter<T: IntoIterator<Item=i32>>(iter: T) -> Self {
        let mut reversed: Link = None;
        let mut size = 0;
        for elem in iter {
            reversed = Some(Node::boxed(elem, reversed));
            size += 1;
        }
        Self { head: reverse_onto(reversed, None), size }
    }
}

impl Extend<i32> for SinglyLinkedList {
    fn extend<T: IntoIterator<Item=i32>>(&mut self, iter: T) {
        let (chain, len) = iter.into_iter().collect::<Self>().take_chain();
        self.splice_back(chain, len);
    }
}

impl Debug for SinglyLinkedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "[")?;
        for (i, elem) in self.iter().enumerate() {
            if i == 0 {
                write!(f, "{:?}", elem)?;
            } else {
                write!(f, ", {:?}", elem)?;
            }
        }
        write!(f, "]")
    }
}

/// Iterator over the values of a [`SinglyLinkedList`], front to back.
#[derive(Clone)]
pub struct Iter<'a> {
    next: Option<&'a Node>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next();
        self.remaining -= 1;
        Some(node.value)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a SinglyLinkedList {
    type Item = i32;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::format;
    use std::vec;
    use std::vec::Vec;
    use super::*;

    fn list(values: &[i32]) -> SinglyLinkedList {
        values.iter().copied().collect()
    }

    fn values(l: &SinglyLinkedList) -> Vec<i32> {
        l.iter().collect()
    }

    /// Walks the chain itself rather than trusting the cached size.
    fn chain_len(l: &SinglyLinkedList) -> usize {
        let mut n = 0;
        let mut node = l.head.as_deref();
        while let Some(x) = node {
            n += 1;
            node = x.next();
        }
        n
    }

    #[test]
    fn insert_scenario() {
        let mut l = SinglyLinkedList::new();
        assert!(l.is_empty());
        l.insert(0, 10).unwrap();
        l.insert(1, 20).unwrap();
        l.insert(0, 5).unwrap();
        assert_eq!(values(&l), vec![5, 10, 20]);
        assert_eq!(l.size(), 3);
        assert_eq!(chain_len(&l), 3);
    }

    #[test]
    fn append_prepend_delete() {
        let mut l = SinglyLinkedList::new();
        l.append(2).unwrap();
        l.append(3).unwrap();
        l.prepend(1).unwrap();
        assert_eq!(values(&l), vec![1, 2, 3]);

        assert_eq!(l.delete(1), Ok(2));
        assert_eq!(values(&l), vec![1, 3]);
        assert_eq!(l.delete(1), Ok(3));
        assert_eq!(l.delete(0), Ok(1));
        assert!(l.is_empty());
        assert!(l.head.is_none());
    }

    #[test]
    fn boundary_at_size() {
        let mut l = list(&[1, 2, 3]);
        assert_eq!(l.delete(3), Err(SeqError::OutOfRange { index: 3, len: 3 }));
        assert_eq!(l.insert(4, 0), Err(SeqError::OutOfRange { index: 4, len: 3 }));
        assert_eq!(values(&l), vec![1, 2, 3]);
        l.insert(3, 4).unwrap();
        assert_eq!(values(&l), vec![1, 2, 3, 4]);
        assert_eq!(chain_len(&l), 4);
    }

    #[test]
    fn rotate() {
        let mut l = list(&[1, 2, 3, 4, 5]);
        l.rotate(2);
        assert_eq!(values(&l), vec![4, 5, 1, 2, 3]);
        l.rotate(1);
        assert_eq!(values(&l), vec![3, 4, 5, 1, 2]);
        l.rotate(4);
        assert_eq!(values(&l), vec![4, 5, 1, 2, 3]);
        l.rotate(10);
        assert_eq!(values(&l), vec![4, 5, 1, 2, 3]);
        l.rotate(8);
        assert_eq!(values(&l), vec![1, 2, 3, 4, 5]);
        assert_eq!(chain_len(&l), 5);

        let mut one = list(&[1]);
        one.rotate(1);
        assert_eq!(values(&one), vec![1]);
        let mut empty = SinglyLinkedList::new();
        empty.rotate(3);
        assert!(empty.is_empty());
    }

    #[test]
    fn reverse() {
        let mut l = list(&[1, 2, 3, 4]);
        l.reverse();
        assert_eq!(values(&l), vec![4, 3, 2, 1]);
        assert_eq!(l.size(), 4);
        let mut e = SinglyLinkedList::new();
        e.reverse();
        assert!(e.is_empty());
    }

    #[test]
    fn merge_moves_donor() {
        let mut a = list(&[1, 2]);
        let mut b = list(&[3, 4, 5]);
        a.merge(&mut b).unwrap();
        assert_eq!(values(&a), vec![1, 2, 3, 4, 5]);
        assert_eq!(a.size(), 5);
        assert_eq!(chain_len(&a), 5);
        assert!(b.is_empty());
        assert_eq!(chain_len(&b), 0);

        // the donor is a usable empty list afterwards
        b.append(9).unwrap();
        assert_eq!(values(&b), vec![9]);

        let mut e = SinglyLinkedList::new();
        a.merge(&mut e).unwrap();
        assert_eq!(a.size(), 5);
    }

    #[test]
    fn merge_into_empty_fails() {
        let mut a = SinglyLinkedList::new();
        let mut b = list(&[1, 2]);
        assert_eq!(a.merge(&mut b), Err(SeqError::EmptyReceiver));
        assert!(a.is_empty());
        assert_eq!(values(&b), vec![1, 2]);
    }

    #[test]
    fn interleave_even() {
        let mut a = list(&[1, 2, 3]);
        let mut b = list(&[7, 8, 9]);
        a.interleave(&mut b);
        assert_eq!(values(&a), vec![1, 7, 2, 8, 3, 9]);
        assert_eq!(a.size(), 6);
        assert_eq!(chain_len(&a), 6);
        assert!(b.is_empty());
    }

    #[test]
    fn interleave_leftovers() {
        let mut a = list(&[1, 2]);
        let mut b = list(&[7, 8, 9, 10]);
        a.interleave(&mut b);
        assert_eq!(values(&a), vec![1, 7, 2, 8, 9, 10]);
        assert_eq!(a.size(), 6);
        assert_eq!(chain_len(&a), 6);

        let mut c = list(&[1, 2, 3, 4]);
        let mut d = list(&[7]);
        c.interleave(&mut d);
        assert_eq!(values(&c), vec![1, 7, 2, 3, 4]);
        assert_eq!(c.size(), 5);

        let mut e = SinglyLinkedList::new();
        let mut f = list(&[5, 6]);
        e.interleave(&mut f);
        assert_eq!(values(&e), vec![5, 6]);
        assert_eq!(e.size(), 2);

        let mut g = list(&[5, 6]);
        g.interleave(&mut SinglyLinkedList::new());
        assert_eq!(values(&g), vec![5, 6]);
    }

    #[test]
    fn middle() {
        assert_eq!(list(&[1, 2, 3, 4, 5]).get_middle().map(Node::value), Some(3));
        assert_eq!(list(&[1, 2, 3, 4]).get_middle().map(Node::value), Some(3));
        assert_eq!(list(&[1, 2]).get_middle().map(Node::value), Some(2));
        assert_eq!(list(&[1]).get_middle().map(Node::value), Some(1));
        assert!(SinglyLinkedList::new().get_middle().is_none());

        let l = list(&[1, 2, 3, 4, 5]);
        let mid = l.get_middle().unwrap();
        assert_eq!(mid.next().map(Node::value), Some(4));
    }

    #[test]
    fn search() {
        let l = list(&[4, 5, 4, 6]);
        assert_eq!(l.index_of(4), Some(0));
        assert_eq!(l.index_of(6), Some(3));
        assert_eq!(l.index_of(7), None);
        assert_eq!(l.get(1), Some(5));
        assert_eq!(l.get(4), None);
    }

    #[test]
    fn split_copies() {
        let l = list(&[1, 2, 3, 4, 5]);
        let (a, b) = l.split(2).unwrap();
        assert_eq!(values(&a), vec![1, 2]);
        assert_eq!(values(&b), vec![3, 4, 5]);
        assert_eq!((a.size(), b.size()), (2, 3));
        assert_eq!(values(&l), vec![1, 2, 3, 4, 5]);

        let (a, b) = l.split(0).unwrap();
        assert!(a.is_empty());
        assert_eq!(b, l);

        assert_eq!(l.split(5).unwrap_err(), SeqError::OutOfRange { index: 5, len: 5 });
        assert!(SinglyLinkedList::new().split(0).is_err());
    }

    #[test]
    fn clone_eq_debug() {
        let l = list(&[1, 2, 3]);
        let mut c = l.clone();
        assert_eq!(c, l);
        c.delete(0).unwrap();
        assert_ne!(c, l);
        assert_eq!(format!("{:?}", l), "[1, 2, 3]");
        assert_eq!(format!("{:?}", SinglyLinkedList::new()), "[]");
        assert_eq!(format!("{:?}", l.get_middle().unwrap()), "Node { value: 2, .. }");
    }

    #[test]
    fn extend_and_clear() {
        let mut l = list(&[1]);
        l.extend([2, 3]);
        assert_eq!(values(&l), vec![1, 2, 3]);
        assert_eq!(l.iter().len(), 3);
        l.clear();
        assert!(l.is_empty());
        l.extend(4..6);
        assert_eq!(values(&l), vec![4, 5]);
        assert_eq!(chain_len(&l), 2);
    }

    #[test]
    fn long_list_drops() {
        let l = (0..200_000).collect::<SinglyLinkedList>();
        assert_eq!(l.size(), 200_000);
        drop(l);
    }
}
