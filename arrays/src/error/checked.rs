// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Checked variants of the operations that can be a no-op, for callers who would rather
//! propagate an error with `?` than inspect a sentinel.
//!
//! The plain operations never fail. These wrap them and turn the sentinel into an
//! [`ArrayOpsError`] inside an [`ArrayOpsResult`].

use crate::{ArrayOpsError, ArrayOpsResult, SeqIndex, Sequence, SequenceMut,
            SequenceResize, move_item, remove, remove_at};

/// Like [`move_item`], but out of range indices are an error.
///
/// # Errors
///
/// Returns [`ArrayOpsError::IndexOutOfBounds`] for the first of `from`, `to` that is
/// outside `[0, n)`. The sequence is unchanged in that case.
///
/// # Examples
///
/// ```
/// use r3bl_arrays::{ArrayOpsError, idx, try_move_item};
///
/// let mut data = vec![0, 1, 2];
/// assert!(try_move_item(&mut data, 0, 2).is_ok());
/// assert_eq!(data, vec![1, 2, 0]);
///
/// let report = try_move_item(&mut data, 0, 3).unwrap_err();
/// assert_eq!(
///     report.downcast_ref::<ArrayOpsError>(),
///     Some(&ArrayOpsError::IndexOutOfBounds { index: idx(3), len: 3 })
/// );
/// ```
pub fn try_move_item<S>(
    seq: &mut S,
    from: impl Into<SeqIndex>,
    to: impl Into<SeqIndex>,
) -> ArrayOpsResult<()>
where
    S: SequenceMut + ?Sized,
{
    let (from, to) = (from.into(), to.into());
    let len = seq.item_count();
    if move_item(seq, from, to) {
        return Ok(());
    }
    let index = if from.in_range(len).is_none() { from } else { to };
    Err(ArrayOpsError::IndexOutOfBounds { index, len }.into())
}

/// Like [`remove_at`], but an out of range index is an error.
///
/// # Errors
///
/// Returns [`ArrayOpsError::IndexOutOfBounds`] if `index` is outside `[0, n)`.
pub fn try_remove_at<S>(
    seq: &mut S,
    index: impl Into<SeqIndex>,
) -> ArrayOpsResult<S::Item>
where
    S: SequenceResize + ?Sized,
{
    let index = index.into();
    let len = seq.item_count();
    remove_at(seq, index)
        .ok_or_else(|| ArrayOpsError::IndexOutOfBounds { index, len }.into())
}

/// Like [`remove`], but a missing value is an error.
///
/// # Errors
///
/// Returns [`ArrayOpsError::ValueNotFound`] if no element is equal to `value`.
pub fn try_remove<S>(seq: &mut S, value: &S::Item) -> ArrayOpsResult<usize>
where
    S: SequenceResize + ?Sized,
    S::Item: PartialEq,
{
    remove(seq, value).ok_or_else(|| ArrayOpsError::ValueNotFound.into())
}

/// Verify that `seq` is sorted ascending according to `is_less`, which is the
/// precondition of [`crate::lower_bound`] and [`crate::upper_bound`]. Those never check
/// it themselves, since doing so costs `O(n)`.
///
/// # Errors
///
/// Returns [`ArrayOpsError::NotSorted`] with the index of the first element that is
/// less than its predecessor.
///
/// # Examples
///
/// ```
/// use r3bl_arrays::{check_sorted_by, lower_bound};
///
/// let data = vec![1, 3, 3, 8];
/// let is_less = |a: &i32, b: &i32| a < b;
/// check_sorted_by(&data, is_less)?;
/// assert_eq!(lower_bound(&data, &3, is_less), 1);
///
/// assert!(check_sorted_by(&vec![2, 1], is_less).is_err());
/// # Ok::<(), miette::Report>(())
/// ```
pub fn check_sorted_by<S>(
    seq: &S,
    mut is_less: impl FnMut(&S::Item, &S::Item) -> bool,
) -> ArrayOpsResult<()>
where
    S: Sequence + ?Sized,
{
    for index in 1..seq.item_count() {
        let (Some(prev), Some(current)) = (seq.item_at(index - 1), seq.item_at(index))
        else {
            continue;
        };
        if is_less(current, prev) {
            return Err(ArrayOpsError::NotSorted { index }.into());
        }
    }
    Ok(())
}
