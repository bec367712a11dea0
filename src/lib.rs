#![doc = include_str!("../README.md")]
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod array;
mod error;
mod growth;
mod list;
mod sequence;

pub use self::{
    array::GrowableArray,
    error::{Result, SeqError},
    growth::{ArrayConfig, GrowthFactor},
    list::{Iter, Node, SinglyLinkedList},
    sequence::Sequence,
};
