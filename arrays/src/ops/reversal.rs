// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! In place [`reverse`], [`reverse_range`], and [`rotate`].
//!
//! All three return the same sequence they were given, so calls can be chained.

use crate::{SeqIndex, SequenceMut};

/// Reverse the whole sequence in place.
///
/// ```
/// use r3bl_arrays::reverse;
///
/// let mut data = vec![0, 1, 2, 3, 4];
/// assert_eq!(reverse(&mut data), &vec![4, 3, 2, 1, 0]);
/// ```
pub fn reverse<S>(seq: &mut S) -> &mut S
where
    S: SequenceMut + ?Sized,
{
    let last = seq.item_count().saturating_sub(1);
    reverse_range(seq, 0, last)
}

/// Reverse the inclusive sub range `[from, to]` in place.
///
/// Both indices are clamped into `[0, n - 1]` independently, and swapped if `from`
/// ends up greater than `to`. An empty sequence is left alone.
///
/// ```text
/// reverse_range(seq, 1, 3)
///
///   before: [ 0  1  2  3  4 ]
///              └──────┘
///   after : [ 0  3  2  1  4 ]
/// ```
///
/// # Examples
///
/// ```
/// use r3bl_arrays::{reverse, reverse_range};
///
/// let mut data = vec![0, 1, 2, 3, 4];
/// reverse_range(&mut data, 1, 3);
/// assert_eq!(data, vec![0, 3, 2, 1, 4]);
///
/// reverse_range(&mut data, 3, usize::MAX);
/// assert_eq!(data, vec![0, 3, 2, 4, 1]);
///
/// reverse(&mut data);
/// assert_eq!(data, vec![1, 4, 2, 3, 0]);
/// ```
pub fn reverse_range<S>(
    seq: &mut S,
    from: impl Into<SeqIndex>,
    to: impl Into<SeqIndex>,
) -> &mut S
where
    S: SequenceMut + ?Sized,
{
    let len = seq.item_count();
    if len == 0 {
        return seq;
    }

    let last = len - 1;
    let (a, b) = (from.into().clamp_to(last), to.into().clamp_to(last));
    let (mut left, mut right) = if a <= b { (a, b) } else { (b, a) };

    while left < right {
        seq.swap_items(left, right);
        left += 1;
        right -= 1;
    }

    seq
}

/// Rotate the elements by `delta` positions in place.
///
/// A positive `delta` shifts the elements to the left, so the element at index `delta`
/// becomes the first one. A negative `delta` shifts them to the right. The shift is
/// taken modulo `n`, which means `rotate(seq, d)` and `rotate(seq, d + k * n)` are the
/// same for any `k`. Like the index arguments, a fractional `delta` is truncated
/// toward zero first.
///
/// This uses three reversals (`[0, d - 1]`, `[d, n - 1]`, then everything), which
/// takes `O(n)` time and `O(1)` extra space.
///
/// # Examples
///
/// ```
/// use r3bl_arrays::rotate;
///
/// let mut data = vec![0, 1, 2, 3, 4];
/// rotate(&mut data, 2);
/// assert_eq!(data, vec![2, 3, 4, 0, 1]);
/// rotate(&mut data, -2);
/// assert_eq!(data, vec![0, 1, 2, 3, 4]);
/// rotate(&mut data, 10);
/// assert_eq!(data, vec![0, 1, 2, 3, 4]);
/// rotate(&mut data, 9);
/// assert_eq!(data, vec![4, 0, 1, 2, 3]);
/// rotate(&mut data, 1.9);
/// assert_eq!(data, vec![0, 1, 2, 3, 4]);
/// ```
pub fn rotate<S>(seq: &mut S, delta: impl Into<SeqIndex>) -> &mut S
where
    S: SequenceMut + ?Sized,
{
    let len = seq.item_count();
    if len <= 1 {
        return seq;
    }

    let shift = normalize_shift(delta.into().as_isize(), len);
    if shift == 0 {
        return seq;
    }

    reverse_range(seq, 0, shift - 1);
    reverse_range(seq, shift, len - 1);
    reverse_range(seq, 0, len - 1)
}

/// Map `delta` into `[0, len)`. `len` must be non zero. `delta.unsigned_abs() % len`
/// is always less than `len`, so the right rotation case can't underflow.
fn normalize_shift(delta: isize, len: usize) -> usize {
    let magnitude = delta.unsigned_abs() % len;
    if delta >= 0 || magnitude == 0 {
        magnitude
    } else {
        len - magnitude
    }
}
