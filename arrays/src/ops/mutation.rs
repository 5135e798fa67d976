// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Positional mutation: [`insert`], [`move_item`], [`remove_at`], [`remove`].
//!
//! Every shift is done with adjacent swaps, so element types need neither `Clone` nor
//! `Copy`, and the sequence is edited in place without a second buffer.
//!
//! Index policy, which differs per operation:
//!
//! | Operation     | Out of range index                        |
//! |---------------|-------------------------------------------|
//! | [`insert`]    | clamped into `[0, n]`                     |
//! | [`move_item`] | rejected, returns `false`                 |
//! | [`remove_at`] | rejected, returns [`None`]                |

use crate::{Scan, SeqIndex, SequenceMut, SequenceResize, find_index};

/// Insert `value` at `index`, shifting every element at or after it one position to
/// the right.
///
/// The index is clamped into `[0, n]`: anything past the end appends and anything
/// negative prepends. Returns the index that was actually used.
///
/// # Examples
///
/// ```
/// use r3bl_arrays::insert;
///
/// let mut data = vec![0, 1, 2, 3, 4];
/// assert_eq!(insert(&mut data, 0, 12), 0);
/// assert_eq!(insert(&mut data, 3, 42), 3);
/// assert_eq!(insert(&mut data, -9, 9), 0);
/// assert_eq!(insert(&mut data, 12, 8), 8);
/// assert_eq!(data, vec![9, 12, 0, 1, 42, 2, 3, 4, 8]);
/// ```
pub fn insert<S>(seq: &mut S, index: impl Into<SeqIndex>, value: S::Item) -> usize
where
    S: SequenceResize + ?Sized,
{
    let len = seq.item_count();
    let target = index.into().clamp_to(len);

    seq.push_item(value);
    for it in (target + 1..=len).rev() {
        seq.swap_items(it, it - 1);
    }

    target
}

/// Move the element at `from` so that it ends up at `to`.
///
/// The elements in between shift by one position to close the gap and open the target
/// slot. Elements outside of `[min(from, to), max(from, to)]` are untouched.
///
/// Returns `false`, leaving the sequence unchanged, if either index is outside
/// `[0, n)`.
///
/// ```text
/// move_item(seq, 1, 3)
///
///   before: [ a  B  c  d  e ]
///   after : [ a  c  d  B  e ]
/// ```
///
/// # Examples
///
/// ```
/// use r3bl_arrays::move_item;
///
/// let mut data = vec![0, 1, 2, 3, 4];
/// assert!(move_item(&mut data, 1, 2));
/// assert!(!move_item(&mut data, -1, 0));
/// assert!(move_item(&mut data, 4, 2));
/// assert!(!move_item(&mut data, 10, 0));
/// assert_eq!(data, vec![0, 2, 4, 1, 3]);
/// ```
pub fn move_item<S>(
    seq: &mut S,
    from: impl Into<SeqIndex>,
    to: impl Into<SeqIndex>,
) -> bool
where
    S: SequenceMut + ?Sized,
{
    let len = seq.item_count();
    let (from, to) = (from.into(), to.into());
    let (Some(from_index), Some(to_index)) = (from.in_range(len), to.in_range(len)) else {
        tracing::trace!(%from, %to, len, "move index out of range, sequence unchanged");
        return false;
    };

    if from_index > to_index {
        for it in (to_index + 1..=from_index).rev() {
            seq.swap_items(it, it - 1);
        }
    } else {
        for it in from_index..to_index {
            seq.swap_items(it, it + 1);
        }
    }

    true
}

/// Remove and return the element at `index`, shifting every following element one
/// position to the left.
///
/// Returns [`None`], leaving the sequence unchanged, if `index` is outside `[0, n)`.
///
/// # Examples
///
/// ```
/// use r3bl_arrays::remove_at;
///
/// let mut data = vec![0, 1, 2, 3, 4];
/// assert_eq!(remove_at(&mut data, 1), Some(1));
/// assert_eq!(remove_at(&mut data, 3), Some(4));
/// assert_eq!(remove_at(&mut data, 10), None);
/// assert_eq!(data, vec![0, 2, 3]);
/// ```
pub fn remove_at<S>(seq: &mut S, index: impl Into<SeqIndex>) -> Option<S::Item>
where
    S: SequenceResize + ?Sized,
{
    let len = seq.item_count();
    let requested: SeqIndex = index.into();
    let Some(index) = requested.in_range(len) else {
        tracing::trace!(%requested, len, "remove index out of range, sequence unchanged");
        return None;
    };
    close_gap_and_pop(seq, index)
}

/// Remove the first element (scanning forward from index `0`) that is equal to
/// `value`, and return the index where it was found.
///
/// Returns [`None`], leaving the sequence unchanged, if no element is equal.
///
/// # Examples
///
/// ```
/// use r3bl_arrays::remove;
///
/// let mut data = vec![0, 1, 2, 3, 4];
/// assert_eq!(remove(&mut data, &1), Some(1));
/// assert_eq!(remove(&mut data, &3), Some(2));
/// assert_eq!(remove(&mut data, &7), None);
/// assert_eq!(data, vec![0, 2, 4]);
/// ```
pub fn remove<S>(seq: &mut S, value: &S::Item) -> Option<usize>
where
    S: SequenceResize + ?Sized,
    S::Item: PartialEq,
{
    let Some(index) = find_index(&*seq, |it, _| it == value, Scan::new()) else {
        tracing::trace!(len = seq.item_count(), "value not found, sequence unchanged");
        return None;
    };
    close_gap_and_pop(seq, index).map(|_| index)
}

/// Bubble the element at `index` to the end with adjacent swaps, then pop it. `index`
/// must already be validated against the length.
fn close_gap_and_pop<S>(seq: &mut S, index: usize) -> Option<S::Item>
where
    S: SequenceResize + ?Sized,
{
    let len = seq.item_count();
    for it in index + 1..len {
        seq.swap_items(it - 1, it);
    }
    seq.pop_item()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use smallvec::{SmallVec, smallvec};
    use std::collections::VecDeque;
    use test_case::test_case;

    #[test]
    fn test_insert_sequence_of_calls() {
        let mut data = vec![0, 1, 2, 3, 4];
        assert_eq!(insert(&mut data, 0, 12), 0);
        assert_eq!(insert(&mut data, 3, 42), 3);
        assert_eq!(insert(&mut data, -9, 9), 0);
        assert_eq!(insert(&mut data, 12, 8), 8);
        assert_eq!(data, vec![9, 12, 0, 1, 42, 2, 3, 4, 8]);
    }

    #[test_case(-9, 0, vec![9, 0, 1, 2, 3, 4] ; "negative prepends")]
    #[test_case(0, 0, vec![9, 0, 1, 2, 3, 4] ; "front")]
    #[test_case(2, 2, vec![0, 1, 9, 2, 3, 4] ; "middle")]
    #[test_case(5, 5, vec![0, 1, 2, 3, 4, 9] ; "end appends")]
    #[test_case(50, 5, vec![0, 1, 2, 3, 4, 9] ; "past end appends")]
    fn test_insert_clamps(index: isize, expected_index: usize, expected: Vec<i32>) {
        let mut data = vec![0, 1, 2, 3, 4];
        assert_eq!(insert(&mut data, index, 9), expected_index);
        assert_eq!(data, expected);
    }

    #[test]
    fn test_insert_truncates_fractional_index() {
        let mut data = vec![0, 1, 2];
        assert_eq!(insert(&mut data, 1.8, 9), 1);
        assert_eq!(data, vec![0, 9, 1, 2]);
    }

    #[test]
    fn test_insert_into_empty() {
        let mut data: Vec<String> = vec![];
        assert_eq!(insert(&mut data, 3, "only".to_string()), 0);
        assert_eq!(data, vec!["only".to_string()]);
    }

    #[test]
    fn test_insert_non_clone_items() {
        #[derive(Debug, PartialEq)]
        struct Token(u8);

        let mut data = vec![Token(1), Token(3)];
        insert(&mut data, 1, Token(2));
        assert_eq!(data, vec![Token(1), Token(2), Token(3)]);
    }

    #[test]
    fn test_move_sequence_of_calls() {
        let mut data = vec![0, 1, 2, 3, 4];
        assert!(move_item(&mut data, 1, 2));
        assert!(!move_item(&mut data, -1, 0));
        assert!(move_item(&mut data, 4, 2));
        assert!(!move_item(&mut data, 10, 0));
        assert_eq!(data, vec![0, 2, 4, 1, 3]);
    }

    #[test_case(1, 3, vec![0, 2, 3, 1, 4] ; "forward block shift")]
    #[test_case(3, 1, vec![0, 3, 1, 2, 4] ; "backward block shift")]
    #[test_case(0, 4, vec![1, 2, 3, 4, 0] ; "front to back")]
    #[test_case(4, 0, vec![4, 0, 1, 2, 3] ; "back to front")]
    #[test_case(2, 2, vec![0, 1, 2, 3, 4] ; "same index")]
    fn test_move_shifts_only_the_span(from: isize, to: isize, expected: Vec<i32>) {
        let mut data = vec![0, 1, 2, 3, 4];
        assert!(move_item(&mut data, from, to));
        assert_eq!(data, expected);
    }

    #[test_case(0, 5 ; "to past end")]
    #[test_case(5, 0 ; "from past end")]
    #[test_case(0, -1 ; "negative to")]
    fn test_move_rejects_out_of_range(from: isize, to: isize) {
        let mut data = vec![0, 1, 2, 3, 4];
        assert!(!move_item(&mut data, from, to));
        assert_eq!(data, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_move_on_slice() {
        let mut backing = [0, 1, 2, 3];
        assert!(move_item(&mut backing[..], 0, 3));
        assert_eq!(backing, [1, 2, 3, 0]);
    }

    #[test]
    fn test_move_on_empty() {
        let mut data: Vec<i32> = vec![];
        assert!(!move_item(&mut data, 0, 0));
    }

    #[test]
    fn test_remove_at_sequence_of_calls() {
        let mut data = vec![0, 1, 2, 3, 4];
        assert_eq!(remove_at(&mut data, 1), Some(1));
        assert_eq!(remove_at(&mut data, 3), Some(4));
        assert_eq!(remove_at(&mut data, 10), None);
        assert_eq!(data, vec![0, 2, 3]);
    }

    #[test]
    fn test_remove_at_rejects_negative() {
        let mut data = vec![0, 1, 2];
        assert_eq!(remove_at(&mut data, -1), None);
        assert_eq!(data, vec![0, 1, 2]);
    }

    #[test]
    fn test_remove_at_falsy_value_is_found() {
        let mut data = vec![false, true];
        assert_eq!(remove_at(&mut data, 0), Some(false));
        assert_eq!(data, vec![true]);
    }

    #[test]
    fn test_remove_sequence_of_calls() {
        let mut data = vec![0, 1, 2, 3, 4];
        assert_eq!(remove(&mut data, &1), Some(1));
        assert_eq!(remove(&mut data, &3), Some(2));
        assert_eq!(remove(&mut data, &7), None);
        assert_eq!(data, vec![0, 2, 4]);
    }

    #[test]
    fn test_remove_first_occurrence_only() {
        let mut data = vec!["a", "b", "a", "c"];
        assert_eq!(remove(&mut data, &"a"), Some(0));
        assert_eq!(data, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_vec_deque_and_small_vec() {
        let mut deque: VecDeque<i32> = VecDeque::from(vec![1, 2, 3]);
        assert_eq!(insert(&mut deque, 1, 9), 1);
        assert_eq!(remove_at(&mut deque, 0), Some(1));
        assert_eq!(deque, VecDeque::from(vec![9, 2, 3]));

        let mut small: SmallVec<[i32; 4]> = smallvec![1, 2, 3];
        assert_eq!(remove(&mut small, &2), Some(1));
        assert!(move_item(&mut small, 0, 1));
        assert_eq!(small.as_slice(), &[3, 1]);
    }
}
