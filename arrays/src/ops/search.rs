// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Predicate search: [`find_index`], [`rfind_index`], [`find`], [`rfind`].
//!
//! These share the visiting order of [`crate::for_each`] / [`crate::rfor_each`], and
//! the window of visited indices is fixed before the first predicate call. At most `n`
//! elements are tested.

use crate::{Scan, ScanDirection, ScanOrder, Sequence};

/// Find the index of the first element (in forward visiting order) that matches
/// `pred`.
///
/// Returns [`None`] when nothing matches or when the start index is out of range.
///
/// # Examples
///
/// ```
/// use r3bl_arrays::{Scan, find_index};
///
/// let data = vec![1, 2, 3, 4, 3, 2, 1];
/// let is_even = |it: &i32, _: usize| it % 2 == 0;
///
/// assert_eq!(find_index(&data, is_even, Scan::new()), Some(1));
/// assert_eq!(find_index(&data, is_even, Scan::at(4)), Some(5));
/// assert_eq!(find_index(&data, is_even, Scan::at(6)), None);
/// assert_eq!(find_index(&data, is_even, Scan::at(6).wrapping()), Some(1));
/// ```
#[must_use]
pub fn find_index<S>(
    seq: &S,
    pred: impl FnMut(&S::Item, usize) -> bool,
    scan: Scan,
) -> Option<usize>
where
    S: Sequence + ?Sized,
{
    search(seq, pred, scan, ScanDirection::Forward)
}

/// Find the index of the first element in reverse visiting order (ie, the last one)
/// that matches `pred`.
///
/// # Examples
///
/// ```
/// use r3bl_arrays::{Scan, rfind_index};
///
/// let data = vec![1, 2, 3, 4, 3, 2, 1];
/// let is_even = |it: &i32, _: usize| it % 2 == 0;
///
/// assert_eq!(rfind_index(&data, is_even, Scan::new()), Some(5));
/// assert_eq!(rfind_index(&data, is_even, Scan::at(4)), Some(3));
/// assert_eq!(rfind_index(&data, is_even, Scan::at(0)), None);
/// assert_eq!(rfind_index(&data, is_even, Scan::at(0).wrapping()), Some(5));
/// ```
#[must_use]
pub fn rfind_index<S>(
    seq: &S,
    pred: impl FnMut(&S::Item, usize) -> bool,
    scan: Scan,
) -> Option<usize>
where
    S: Sequence + ?Sized,
{
    search(seq, pred, scan, ScanDirection::Reverse)
}

/// Like [`find_index`], but returns a reference to the matching element.
///
/// The result distinguishes a found element whose value happens to be "falsy" (`0`,
/// `false`, `""`) from nothing found, since the latter is [`None`].
///
/// ```
/// use r3bl_arrays::{Scan, find};
///
/// let data = vec![1, 2, 3, 4, 3, 2, 1];
/// assert_eq!(find(&data, |it, _| it % 2 == 0, Scan::at(6).wrapping()), Some(&2));
/// assert_eq!(find(&data, |it, _| it % 2 == 0, Scan::at(6)), None);
/// ```
#[must_use]
pub fn find<S>(
    seq: &S,
    pred: impl FnMut(&S::Item, usize) -> bool,
    scan: Scan,
) -> Option<&S::Item>
where
    S: Sequence + ?Sized,
{
    find_index(seq, pred, scan).and_then(|index| seq.item_at(index))
}

/// Like [`rfind_index`], but returns a reference to the matching element.
///
/// ```
/// use r3bl_arrays::{Scan, rfind};
///
/// let data = vec![1, 2, 3, 4, 3, 2, 1];
/// assert_eq!(rfind(&data, |it, _| it % 2 == 0, Scan::at(4)), Some(&4));
/// assert_eq!(rfind(&data, |it, _| it % 2 == 0, Scan::at(0)), None);
/// ```
#[must_use]
pub fn rfind<S>(
    seq: &S,
    pred: impl FnMut(&S::Item, usize) -> bool,
    scan: Scan,
) -> Option<&S::Item>
where
    S: Sequence + ?Sized,
{
    rfind_index(seq, pred, scan).and_then(|index| seq.item_at(index))
}

fn search<S>(
    seq: &S,
    mut pred: impl FnMut(&S::Item, usize) -> bool,
    scan: Scan,
    direction: ScanDirection,
) -> Option<usize>
where
    S: Sequence + ?Sized,
{
    let len = seq.item_count();
    let Some(mut order) = ScanOrder::try_new(len, scan, direction) else {
        tracing::trace!(?scan, ?direction, len, "start index out of range, not found");
        return None;
    };

    order.find(|&index| seq.item_at(index).is_some_and(|item| pred(item, index)))
}
