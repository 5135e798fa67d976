// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Binary search for the boundaries of a run of equal values in a sorted sequence.
//!
//! ```text
//! data  = [ 0  3  4  7  7  9 ]
//!                    ▲     ▲
//!                    │     └── upper_bound(7) = 5: first element > 7
//!                    └──────── lower_bound(7) = 3: first element >= 7
//! ```
//!
//! Both functions return `n` (not an error) when there is no such element, which is
//! also the index where `value` would be appended to keep the sequence sorted.
//!
//! The sequence must be sorted ascending according to the comparator. This is not
//! checked here; see [`crate::check_sorted_by`] for an explicit, opt-in check. With an
//! unsorted sequence the result is some index in `[0, n]`, but which one is
//! unspecified.

use crate::Sequence;

/// Find the index of the first element that is **not** less than `value`.
///
/// `is_less(element, value)` must return `true` when `element < value`. Runs in
/// `O(log n)` comparator calls, and returns `n` if every element is less than `value`.
///
/// # Examples
///
/// ```
/// use r3bl_arrays::lower_bound;
///
/// let data = vec![0, 3, 4, 7, 7, 9];
/// let is_less = |a: &i32, b: &i32| a < b;
///
/// assert_eq!(lower_bound(&data, &0, is_less), 0);
/// assert_eq!(lower_bound(&data, &6, is_less), 3);
/// assert_eq!(lower_bound(&data, &7, is_less), 3);
/// assert_eq!(lower_bound(&data, &-1, is_less), 0);
/// assert_eq!(lower_bound(&data, &10, is_less), 6);
/// ```
#[must_use]
pub fn lower_bound<S, U>(
    seq: &S,
    value: &U,
    mut is_less: impl FnMut(&S::Item, &U) -> bool,
) -> usize
where
    S: Sequence + ?Sized,
    U: ?Sized,
{
    partition_point(seq, |element| is_less(element, value))
}

/// Find the index of the first element that is strictly **greater** than `value`.
///
/// Note the argument order: `is_less(value, element)` must return `true` when
/// `value < element`. Runs in `O(log n)` comparator calls, and returns `n` if no element
/// is greater than `value`.
///
/// # Examples
///
/// ```
/// use r3bl_arrays::upper_bound;
///
/// let data = vec![0, 3, 4, 7, 7, 9];
/// let is_less = |a: &i32, b: &i32| a < b;
///
/// assert_eq!(upper_bound(&data, &0, is_less), 1);
/// assert_eq!(upper_bound(&data, &6, is_less), 3);
/// assert_eq!(upper_bound(&data, &7, is_less), 5);
/// assert_eq!(upper_bound(&data, &-1, is_less), 0);
/// assert_eq!(upper_bound(&data, &10, is_less), 6);
/// ```
#[must_use]
pub fn upper_bound<S, U>(
    seq: &S,
    value: &U,
    mut is_less: impl FnMut(&U, &S::Item) -> bool,
) -> usize
where
    S: Sequence + ?Sized,
    U: ?Sized,
{
    partition_point(seq, |element| !is_less(value, element))
}

/// [`lower_bound`] using the element type's own `<`.
///
/// ```
/// use r3bl_arrays::lower_bound_ord;
///
/// assert_eq!(lower_bound_ord(&[1.0, 2.5, 2.5, 4.0][..], &2.5), 1);
/// ```
#[must_use]
pub fn lower_bound_ord<S>(seq: &S, value: &S::Item) -> usize
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    lower_bound(seq, value, |element, value| element < value)
}

/// [`upper_bound`] using the element type's own `<`.
///
/// ```
/// use r3bl_arrays::upper_bound_ord;
///
/// assert_eq!(upper_bound_ord(&[1.0, 2.5, 2.5, 4.0][..], &2.5), 3);
/// ```
#[must_use]
pub fn upper_bound_ord<S>(seq: &S, value: &S::Item) -> usize
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    upper_bound(seq, value, |value, element| value < element)
}

/// Returns the index of the first element for which `pred` is `false`, given that
/// `pred` is `true` for a (possibly empty) prefix and `false` for the rest.
///
/// The candidate window is `[begin, begin + count)`. Each step probes the middle and
/// throws away the half that can't contain the boundary.
fn partition_point<S>(seq: &S, mut pred: impl FnMut(&S::Item) -> bool) -> usize
where
    S: Sequence + ?Sized,
{
    let mut begin = 0;
    let mut count = seq.item_count();

    while count > 0 {
        let half = count / 2;
        let middle = begin + half;
        let Some(element) = seq.item_at(middle) else {
            break;
        };
        if pred(element) {
            begin = middle + 1;
            count -= half + 1;
        } else {
            count = half;
        }
    }

    begin
}
