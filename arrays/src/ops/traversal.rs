// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Directional, optionally wrapping traversal with short-circuit: [`for_each`] and
//! [`rfor_each`].

use crate::{Scan, ScanDirection, ScanOrder, Sequence};

/// Invoke `callback(element, index)` for each element, walking forward from
/// [`Scan::start`] (default `0`).
///
/// - With [`crate::WrapPolicy::StopAtEdge`] the walk stops at the last element. With
///   [`crate::WrapPolicy::WrapAround`] it continues at index `0` and visits every
///   element exactly once: `start, start + 1, .., n - 1, 0, .., start - 1`.
/// - The first callback result that is [`Some`] ends the walk and is returned.
///   If every call returns [`None`] the result is [`None`].
/// - If the start index is outside `[0, n)` the callback is never invoked and the result
///   is [`None`].
///
/// The callback only gets a shared reference to each element, so the sequence can't be
/// resized while it is being walked.
///
/// # Examples
///
/// ```
/// use r3bl_arrays::{Scan, for_each};
///
/// let data = [1, 2, 3, 4];
/// let mut log = vec![];
/// let _: Option<()> = for_each(&data[..], |it, _| { log.push(*it); None }, Scan::at(2).wrapping());
/// assert_eq!(log, vec![3, 4, 1, 2]);
///
/// let found = for_each(&data[..], |it, index| (*it == 3).then_some(index), Scan::new());
/// assert_eq!(found, Some(2));
/// ```
pub fn for_each<S, U>(
    seq: &S,
    callback: impl FnMut(&S::Item, usize) -> Option<U>,
    scan: Scan,
) -> Option<U>
where
    S: Sequence + ?Sized,
{
    walk(seq, callback, scan, ScanDirection::Forward)
}

/// The mirror image of [`for_each`]: the default start is `n - 1` and the walk goes
/// toward index `0`. With wrapping, the visiting order is `start, start - 1, .., 0,
/// n - 1, .., start + 1`.
///
/// # Examples
///
/// ```
/// use r3bl_arrays::{Scan, rfor_each};
///
/// let data = vec![1, 2, 3, 4];
/// let mut log = vec![];
/// let _: Option<()> = rfor_each(&data, |it, _| { log.push(*it); None }, Scan::at(2).wrapping());
/// assert_eq!(log, vec![3, 2, 1, 4]);
/// ```
pub fn rfor_each<S, U>(
    seq: &S,
    callback: impl FnMut(&S::Item, usize) -> Option<U>,
    scan: Scan,
) -> Option<U>
where
    S: Sequence + ?Sized,
{
    walk(seq, callback, scan, ScanDirection::Reverse)
}

fn walk<S, U>(
    seq: &S,
    mut callback: impl FnMut(&S::Item, usize) -> Option<U>,
    scan: Scan,
    direction: ScanDirection,
) -> Option<U>
where
    S: Sequence + ?Sized,
{
    let len = seq.item_count();
    let Some(order) = ScanOrder::try_new(len, scan, direction) else {
        tracing::trace!(?scan, ?direction, len, "start index out of range, no-op");
        return None;
    };

    for index in order {
        let item = seq.item_at(index)?;
        if let Some(result) = callback(item, index) {
            return Some(result);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idx;
    use pretty_assertions::assert_eq;
    use std::collections::VecDeque;

    fn collect_values(scan: Scan, direction: ScanDirection) -> Vec<i32> {
        let data = vec![1, 2, 3, 4, 5];
        let mut values = vec![];
        let _unused: Option<()> = match direction {
            ScanDirection::Forward => for_each(
                &data,
                |it, _| {
                    values.push(*it);
                    None
                },
                scan,
            ),
            ScanDirection::Reverse => rfor_each(
                &data,
                |it, _| {
                    values.push(*it);
                    None
                },
                scan,
            ),
        };
        values
    }

    #[test]
    fn test_for_each_visits_every_element() {
        assert_eq!(
            collect_values(Scan::new(), ScanDirection::Forward),
            vec![1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn test_for_each_passes_index() {
        let data = vec![1, 2, 3, 4, 5];
        let mut indices = vec![];
        let _unused: Option<()> = for_each(
            &data,
            |_, index| {
                indices.push(index);
                None
            },
            Scan::new(),
        );
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_for_each_from_start_index() {
        assert_eq!(
            collect_values(Scan::at(2), ScanDirection::Forward),
            vec![3, 4, 5]
        );
    }

    #[test]
    fn test_for_each_wraps() {
        assert_eq!(
            collect_values(Scan::at(2).wrapping(), ScanDirection::Forward),
            vec![3, 4, 5, 1, 2]
        );
    }

    #[test]
    fn test_for_each_out_of_range_is_noop() {
        for scan in [
            Scan::at(-1),
            Scan::at(5),
            Scan::at(-1).wrapping(),
            Scan::at(5).wrapping(),
        ] {
            assert_eq!(collect_values(scan, ScanDirection::Forward), Vec::<i32>::new());
        }
    }

    #[test]
    fn test_for_each_returns_first_value() {
        let data = vec![1, 2, 3, 4, 5];
        let r1: Option<i32> = for_each(&data, |_, _| None, Scan::new());
        let r2 = for_each(&data, |it, _| Some(*it), Scan::new());
        assert_eq!(r1, None);
        assert_eq!(r2, Some(1));
    }

    #[test]
    fn test_for_each_terminates_on_value() {
        let data = vec![1, 2, 3, 4, 5];
        let mut values = vec![];
        let result = for_each(
            &data,
            |it, _| {
                values.push(*it);
                (*it > 3).then_some(*it)
            },
            Scan::new(),
        );
        assert_eq!(values, vec![1, 2, 3, 4]);
        assert_eq!(result, Some(4));
    }

    #[test]
    fn test_for_each_falsy_value_is_still_a_result() {
        let data = vec![1, 2, 3];
        let result = for_each(&data, |_, _| Some(false), Scan::new());
        assert_eq!(result, Some(false));
    }

    #[test]
    fn test_for_each_truncates_fractional_start() {
        assert_eq!(
            collect_values(Scan::at(3.99), ScanDirection::Forward),
            vec![4, 5]
        );
    }

    #[test]
    fn test_rfor_each_visits_every_element_in_reverse() {
        assert_eq!(
            collect_values(Scan::new(), ScanDirection::Reverse),
            vec![5, 4, 3, 2, 1]
        );
    }

    #[test]
    fn test_rfor_each_from_start_index() {
        assert_eq!(
            collect_values(Scan::at(2), ScanDirection::Reverse),
            vec![3, 2, 1]
        );
    }

    #[test]
    fn test_rfor_each_wraps() {
        assert_eq!(
            collect_values(Scan::at(2).wrapping(), ScanDirection::Reverse),
            vec![3, 2, 1, 5, 4]
        );
    }

    #[test]
    fn test_rfor_each_out_of_range_is_noop() {
        for scan in [Scan::at(idx(-1)), Scan::at(5), Scan::at(5).wrapping()] {
            assert_eq!(collect_values(scan, ScanDirection::Reverse), Vec::<i32>::new());
        }
    }

    #[test]
    fn test_rfor_each_terminates_on_value() {
        let data = vec![1, 2, 3, 4, 5];
        let mut values = vec![];
        let result = rfor_each(
            &data,
            |it, index| {
                values.push(*it);
                (*it < 3).then_some(index)
            },
            Scan::new(),
        );
        assert_eq!(values, vec![5, 4, 3, 2]);
        assert_eq!(result, Some(1));
    }

    #[test]
    fn test_empty_sequence() {
        let data: Vec<i32> = vec![];
        let mut calls = 0;
        let result: Option<()> = for_each(
            &data,
            |_, _| {
                calls += 1;
                None
            },
            Scan::new(),
        );
        let rresult: Option<()> = rfor_each(&data, |_, _| None, Scan::new().wrapping());
        assert_eq!(result, None);
        assert_eq!(rresult, None);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_vec_deque() {
        let data: VecDeque<&str> = VecDeque::from(vec!["a", "b", "c"]);
        let found = rfor_each(&data, |it, _| (*it == "a").then_some(*it), Scan::new());
        assert_eq!(found, Some("a"));
    }
}
