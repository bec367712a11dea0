//! Node chain primitives: the link type and the relinking helpers the list is built from.
//!
//! A chain is an owned `Option<Box<Node>>`; each node owns the rest of the chain through its
//! `next` link. Everything here moves boxes between links and never copies values.

use alloc::boxed::Box;
use core::fmt::{Debug, Formatter};

/// A single element of a [`crate::SinglyLinkedList`].
pub struct Node {
    pub(crate) value: i32,
    pub(crate) next: Link,
}

pub(crate) type Link = Option<Box<Node>>;

impl Node {
    pub(crate) fn boxed(value: i32, next: Link) -> Box<Self> {
        Box::new(Self { value, next })
    }

    /// Returns the value held by this node.
    pub fn value(&self) -> i32 { self.value }

    /// Returns the node after this one, or `None` at the end of the list.
    pub fn next(&self) -> Option<&Node> { self.next.as_deref() }
}

// Only the value: printing `next` would walk the whole tail.
impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Node").field("value", &self.value).finish_non_exhaustive()
    }
}

/// Returns the link `n` steps down the chain starting at `link`: `n == 0` is `link` itself,
/// and `n == len` is the terminal (`None`) link after the last node.
/// Stops early at the terminal link if the chain is shorter than `n`.
pub(crate) fn nth_link(mut link: &mut Link, n: usize) -> &mut Link {
    for _ in 0..n {
        match link {
            Some(node) => link = &mut node.next,
            None => break,
        }
    }
    link
}

/// Reverses `chain` and hangs `onto` off its (new) end, i.e. returns
/// `reverse(chain) ++ onto`.
///
/// This is the three-pointer reversal: `chain` is the cursor, `onto` is the previous node.
pub(crate) fn reverse_onto(mut chain: Link, mut onto: Link) -> Link {
    while let Some(mut node) = chain {
        chain = node.next.take();
        node.next = onto;
        onto = Some(node);
    }
    onto
}

/// Drops a chain node by node.
/// Dropping the head box directly would recurse once per node.
pub(crate) fn drop_iteratively(mut chain: Link) {
    while let Some(mut node) = chain {
        chain = node.next.take();
    }
}
