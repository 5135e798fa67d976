// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The container abstraction that every operation in [`crate::ops`] works against.
//!
//! There are three tiers, each one adding a capability on top of the previous one:
//!
//! | Trait              | Adds                                 | Implemented for                          |
//! |--------------------|--------------------------------------|------------------------------------------|
//! | [`Sequence`]       | length and read access by index      | `[T]`, [`Vec`], [`VecDeque`], [`SmallVec`] |
//! | [`SequenceMut`]    | swapping two elements in place       | `[T]`, [`Vec`], [`VecDeque`], [`SmallVec`] |
//! | [`SequenceResize`] | growing / shrinking at the end       | [`Vec`], [`VecDeque`], [`SmallVec`]        |
//!
//! All of the mutating algorithms are expressed in terms of
//! [`SequenceMut::swap_items`] plus [`SequenceResize::push_item`] /
//! [`SequenceResize::pop_item`]. So elements are never cloned, and no second buffer is
//! ever allocated.
//!
//! The method names differ from the inherent methods of [`Vec`] and
//! slices (`len`, `get`, `swap`, ...). Having these traits in scope never changes which
//! method a call like `vec.get(1..3)` resolves to.

use smallvec::{Array, SmallVec};
use std::collections::VecDeque;

/// Read access to an ordered, zero-indexed collection.
pub trait Sequence {
    type Item;

    fn item_count(&self) -> usize;

    fn item_at(&self, index: usize) -> Option<&Self::Item>;

    fn is_empty_seq(&self) -> bool { self.item_count() == 0 }
}

/// In place mutation that never changes the length.
pub trait SequenceMut: Sequence {
    /// # Panics
    ///
    /// Panics if either index is out of bounds. The algorithms in this crate only call
    /// this with validated indices.
    fn swap_items(&mut self, a: usize, b: usize);
}

/// Growable & shrinkable at the end.
pub trait SequenceResize: SequenceMut {
    fn push_item(&mut self, value: Self::Item);

    fn pop_item(&mut self) -> Option<Self::Item>;
}

mod slice_impl {
    use super::{Sequence, SequenceMut};

    impl<T> Sequence for [T] {
        type Item = T;

        fn item_count(&self) -> usize { <[T]>::len(self) }

        fn item_at(&self, index: usize) -> Option<&T> { <[T]>::get(self, index) }
    }

    impl<T> SequenceMut for [T] {
        fn swap_items(&mut self, a: usize, b: usize) { <[T]>::swap(self, a, b); }
    }
}

mod vec_impl {
    use super::{Sequence, SequenceMut, SequenceResize};

    impl<T> Sequence for Vec<T> {
        type Item = T;

        fn item_count(&self) -> usize { Vec::len(self) }

        fn item_at(&self, index: usize) -> Option<&T> { self.as_slice().get(index) }
    }

    impl<T> SequenceMut for Vec<T> {
        fn swap_items(&mut self, a: usize, b: usize) { self.as_mut_slice().swap(a, b); }
    }

    impl<T> SequenceResize for Vec<T> {
        fn push_item(&mut self, value: T) { Vec::push(self, value); }

        fn pop_item(&mut self) -> Option<T> { Vec::pop(self) }
    }
}

mod vec_deque_impl {
    use super::{Sequence, SequenceMut, SequenceResize, VecDeque};

    impl<T> Sequence for VecDeque<T> {
        type Item = T;

        fn item_count(&self) -> usize { VecDeque::len(self) }

        fn item_at(&self, index: usize) -> Option<&T> { VecDeque::get(self, index) }
    }

    impl<T> SequenceMut for VecDeque<T> {
        fn swap_items(&mut self, a: usize, b: usize) { VecDeque::swap(self, a, b); }
    }

    impl<T> SequenceResize for VecDeque<T> {
        fn push_item(&mut self, value: T) { VecDeque::push_back(self, value); }

        fn pop_item(&mut self) -> Option<T> { VecDeque::pop_back(self) }
    }
}

mod small_vec_impl {
    use super::{Array, Sequence, SequenceMut, SequenceResize, SmallVec};

    impl<A: Array> Sequence for SmallVec<A> {
        type Item = A::Item;

        fn item_count(&self) -> usize { SmallVec::len(self) }

        fn item_at(&self, index: usize) -> Option<&A::Item> { self.as_slice().get(index) }
    }

    impl<A: Array> SequenceMut for SmallVec<A> {
        fn swap_items(&mut self, a: usize, b: usize) { self.as_mut_slice().swap(a, b); }
    }

    impl<A: Array> SequenceResize for SmallVec<A> {
        fn push_item(&mut self, value: A::Item) { SmallVec::push(self, value); }

        fn pop_item(&mut self) -> Option<A::Item> { SmallVec::pop(self) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use smallvec::smallvec;

    fn exercise<S: SequenceResize<Item = i32> + ?Sized>(seq: &mut S) {
        assert_eq!(seq.item_count(), 3);
        assert_eq!(seq.item_at(0), Some(&1));
        assert_eq!(seq.item_at(3), None);

        seq.swap_items(0, 2);
        assert_eq!(seq.item_at(0), Some(&3));
        assert_eq!(seq.item_at(2), Some(&1));

        seq.push_item(4);
        assert_eq!(seq.item_count(), 4);
        assert_eq!(seq.pop_item(), Some(4));
        assert_eq!(seq.pop_item(), Some(1));
        assert_eq!(seq.item_count(), 2);
        assert!(!seq.is_empty_seq());
    }

    #[test]
    fn test_vec() {
        let mut it = vec![1, 2, 3];
        exercise(&mut it);
        assert_eq!(it, vec![3, 2]);
    }

    #[test]
    fn test_vec_deque() {
        let mut it: VecDeque<i32> = VecDeque::from(vec![1, 2, 3]);
        exercise(&mut it);
        assert_eq!(it, VecDeque::from(vec![3, 2]));
    }

    #[test]
    fn test_small_vec() {
        let mut it: SmallVec<[i32; 2]> = smallvec![1, 2, 3];
        exercise(&mut it);
        assert_eq!(it.as_slice(), &[3, 2]);
    }

    #[test]
    fn test_slice() {
        let mut backing = [1, 2, 3];
        let slice: &mut [i32] = &mut backing;
        assert_eq!(slice.item_count(), 3);
        slice.swap_items(0, 1);
        assert_eq!(backing, [2, 1, 3]);
    }

    #[test]
    fn test_empty() {
        let it: Vec<u8> = vec![];
        assert!(it.is_empty_seq());
        assert_eq!(it.item_at(0), None);
    }
}
