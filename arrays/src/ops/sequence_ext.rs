// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Method syntax for the free functions in [`crate::ops`]. Implemented for every
//! [`Sequence`], and the mutating methods light up when the receiver also implements
//! [`SequenceMut`] or [`SequenceResize`].
//!
//! Method names avoid the inherent methods of [`Vec`] and slices (`insert`, `remove`,
//! `reverse`, `rotate_left`, ...) so they never get shadowed.
//!
//! ```
//! use r3bl_arrays::{Scan, SequenceExt};
//!
//! let mut data = vec![0, 1, 2, 3, 4];
//! data.insert_at(-3, 9);
//! data.rotate_by(1).reverse_items();
//! assert_eq!(data, vec![9, 4, 3, 2, 1, 0]);
//!
//! assert_eq!(data.find_index_where(|it, _| *it < 3, Scan::new()), Some(3));
//! data.reverse_items();
//! assert_eq!(data.lower_bound_of(&3), 3);
//! ```

use crate::{Scan, SeqIndex, Sequence, SequenceMut, SequenceResize, find, find_index,
            for_each, insert, lower_bound, lower_bound_ord, move_item, remove,
            remove_at, reverse, reverse_range, rfind, rfind_index, rfor_each, rotate,
            upper_bound, upper_bound_ord};

/// Blanket implemented for every [`Sequence`], including unsized slices.
pub trait SequenceExt: Sequence {
    /// See [`for_each`].
    fn scan_each<U>(
        &self,
        callback: impl FnMut(&Self::Item, usize) -> Option<U>,
        scan: Scan,
    ) -> Option<U> {
        for_each(self, callback, scan)
    }

    /// See [`rfor_each`].
    fn rscan_each<U>(
        &self,
        callback: impl FnMut(&Self::Item, usize) -> Option<U>,
        scan: Scan,
    ) -> Option<U> {
        rfor_each(self, callback, scan)
    }

    /// See [`find_index`].
    fn find_index_where(
        &self,
        pred: impl FnMut(&Self::Item, usize) -> bool,
        scan: Scan,
    ) -> Option<usize> {
        find_index(self, pred, scan)
    }

    /// See [`rfind_index`].
    fn rfind_index_where(
        &self,
        pred: impl FnMut(&Self::Item, usize) -> bool,
        scan: Scan,
    ) -> Option<usize> {
        rfind_index(self, pred, scan)
    }

    /// See [`find`].
    fn find_where(
        &self,
        pred: impl FnMut(&Self::Item, usize) -> bool,
        scan: Scan,
    ) -> Option<&Self::Item> {
        find(self, pred, scan)
    }

    /// See [`rfind`].
    fn rfind_where(
        &self,
        pred: impl FnMut(&Self::Item, usize) -> bool,
        scan: Scan,
    ) -> Option<&Self::Item> {
        rfind(self, pred, scan)
    }

    /// See [`lower_bound`].
    fn lower_bound_by<U: ?Sized>(
        &self,
        value: &U,
        is_less: impl FnMut(&Self::Item, &U) -> bool,
    ) -> usize {
        lower_bound(self, value, is_less)
    }

    /// See [`upper_bound`].
    fn upper_bound_by<U: ?Sized>(
        &self,
        value: &U,
        is_less: impl FnMut(&U, &Self::Item) -> bool,
    ) -> usize {
        upper_bound(self, value, is_less)
    }

    /// See [`lower_bound_ord`].
    fn lower_bound_of(&self, value: &Self::Item) -> usize
    where
        Self::Item: PartialOrd,
    {
        lower_bound_ord(self, value)
    }

    /// See [`upper_bound_ord`].
    fn upper_bound_of(&self, value: &Self::Item) -> usize
    where
        Self::Item: PartialOrd,
    {
        upper_bound_ord(self, value)
    }

    /// See [`insert`].
    fn insert_at(&mut self, index: impl Into<SeqIndex>, value: Self::Item) -> usize
    where
        Self: SequenceResize,
    {
        insert(self, index, value)
    }

    /// See [`move_item`].
    fn move_item(&mut self, from: impl Into<SeqIndex>, to: impl Into<SeqIndex>) -> bool
    where
        Self: SequenceMut,
    {
        move_item(self, from, to)
    }

    /// See [`remove_at`].
    fn remove_at(&mut self, index: impl Into<SeqIndex>) -> Option<Self::Item>
    where
        Self: SequenceResize,
    {
        remove_at(self, index)
    }

    /// See [`remove`].
    fn remove_value(&mut self, value: &Self::Item) -> Option<usize>
    where
        Self: SequenceResize,
        Self::Item: PartialEq,
    {
        remove(self, value)
    }

    /// See [`reverse`].
    fn reverse_items(&mut self) -> &mut Self
    where
        Self: SequenceMut,
    {
        reverse(self)
    }

    /// See [`reverse_range`].
    fn reverse_range(
        &mut self,
        from: impl Into<SeqIndex>,
        to: impl Into<SeqIndex>,
    ) -> &mut Self
    where
        Self: SequenceMut,
    {
        reverse_range(self, from, to)
    }

    /// See [`rotate`].
    fn rotate_by(&mut self, delta: impl Into<SeqIndex>) -> &mut Self
    where
        Self: SequenceMut,
    {
        rotate(self, delta)
    }
}

impl<S: Sequence + ?Sized> SequenceExt for S {}
