// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Traversal options ([`Scan`], [`WrapPolicy`]) and the visiting order they produce
//! ([`ScanOrder`]).

use super::{SeqIndex, idx};

/// What happens when a scan reaches the edge of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapPolicy {
    /// Stop at the end (forward) or at the front (reverse).
    #[default]
    StopAtEdge,
    /// Continue from the opposite end, visiting every element exactly once.
    WrapAround,
}

/// Which way a scan walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    Forward,
    Reverse,
}

/// Options for the traversal and search operations, bundling the optional start index
/// and the [`WrapPolicy`].
///
/// `Scan::default()` starts at the natural start for the direction, which is `0` for
/// forward scans and `len - 1` for reverse scans, and does not wrap.
///
/// # Examples
///
/// ```
/// use r3bl_arrays::{Scan, WrapPolicy, idx};
///
/// let scan = Scan::at(2).wrapping();
/// assert_eq!(scan.start, Some(idx(2)));
/// assert_eq!(scan.wrap, WrapPolicy::WrapAround);
///
/// assert_eq!(Scan::new(), Scan::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scan {
    pub start: Option<SeqIndex>,
    pub wrap: WrapPolicy,
}

impl Scan {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn at(arg_start: impl Into<SeqIndex>) -> Self {
        Self {
            start: Some(arg_start.into()),
            wrap: WrapPolicy::StopAtEdge,
        }
    }

    #[must_use]
    pub fn wrapping(self) -> Self { self.with_wrap(WrapPolicy::WrapAround) }

    #[must_use]
    pub fn with_wrap(mut self, wrap: WrapPolicy) -> Self {
        self.wrap = wrap;
        self
    }

    /// Resolve the start index against `len`. [`None`] means the start is out of range
    /// and the scan must be a no-op.
    #[must_use]
    pub fn resolve_start(&self, len: usize, direction: ScanDirection) -> Option<usize> {
        let start = self.start.unwrap_or_else(|| match direction {
            ScanDirection::Forward => idx(0),
            ScanDirection::Reverse => idx(SeqIndex::from(len).as_isize() - 1),
        });
        start.in_range(len)
    }
}

/// Iterator over the indices a scan visits, in visiting order.
///
/// The window is fixed when the iterator is created, so the number of indices yielded
/// never depends on what the callbacks do while the scan is running.
///
/// ```text
/// len = 5, start = 2
///
/// Forward, StopAtEdge : 2 3 4
/// Forward, WrapAround : 2 3 4 0 1
/// Reverse, StopAtEdge : 2 1 0
/// Reverse, WrapAround : 2 1 0 4 3
/// ```
#[derive(Debug, Clone)]
pub struct ScanOrder {
    len: usize,
    start: usize,
    direction: ScanDirection,
    wrap: WrapPolicy,
    step: usize,
    total: usize,
}

impl ScanOrder {
    /// Returns [`None`] if the start index in `scan` is outside `[0, len)`.
    #[must_use]
    pub fn try_new(len: usize, scan: Scan, direction: ScanDirection) -> Option<Self> {
        let start = scan.resolve_start(len, direction)?;
        let total = match (scan.wrap, direction) {
            (WrapPolicy::WrapAround, _) => len,
            (WrapPolicy::StopAtEdge, ScanDirection::Forward) => len - start,
            (WrapPolicy::StopAtEdge, ScanDirection::Reverse) => start + 1,
        };
        Some(Self {
            len,
            start,
            direction,
            wrap: scan.wrap,
            step: 0,
            total,
        })
    }

    /// Maps the step count to an index in `[0, len)`. The wrapping arithmetic stays in
    /// unsigned space: `start + len - step` can't underflow since `step < len`.
    fn index_for_step(&self, step: usize) -> usize {
        match (self.wrap, self.direction) {
            (WrapPolicy::StopAtEdge, ScanDirection::Forward) => self.start + step,
            (WrapPolicy::StopAtEdge, ScanDirection::Reverse) => self.start - step,
            (WrapPolicy::WrapAround, ScanDirection::Forward) => {
                (self.start + step) % self.len
            }
            (WrapPolicy::WrapAround, ScanDirection::Reverse) => {
                (self.start + self.len - step) % self.len
            }
        }
    }
}

impl Iterator for ScanOrder {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.step == self.total {
            return None;
        }
        let it = self.index_for_step(self.step);
        self.step += 1;
        Some(it)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.step;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScanOrder {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn order(len: usize, scan: Scan, direction: ScanDirection) -> Option<Vec<usize>> {
        ScanOrder::try_new(len, scan, direction).map(Iterator::collect)
    }

    #[test_case(Scan::new(), vec![0, 1, 2, 3, 4] ; "default")]
    #[test_case(Scan::at(2), vec![2, 3, 4] ; "from start index")]
    #[test_case(Scan::at(2).wrapping(), vec![2, 3, 4, 0, 1] ; "wrapping")]
    #[test_case(Scan::at(0).wrapping(), vec![0, 1, 2, 3, 4] ; "wrapping from zero")]
    #[test_case(Scan::at(4.9).wrapping(), vec![4, 0, 1, 2, 3] ; "fractional start")]
    fn test_forward(scan: Scan, expected: Vec<usize>) {
        assert_eq!(order(5, scan, ScanDirection::Forward), Some(expected));
    }

    #[test_case(Scan::new(), vec![4, 3, 2, 1, 0] ; "default")]
    #[test_case(Scan::at(2), vec![2, 1, 0] ; "from start index")]
    #[test_case(Scan::at(2).wrapping(), vec![2, 1, 0, 4, 3] ; "wrapping")]
    #[test_case(Scan::at(4).wrapping(), vec![4, 3, 2, 1, 0] ; "wrapping from end")]
    fn test_reverse(scan: Scan, expected: Vec<usize>) {
        assert_eq!(order(5, scan, ScanDirection::Reverse), Some(expected));
    }

    #[test_case(idx(-1) ; "negative")]
    #[test_case(idx(5) ; "past the end")]
    #[test_case(idx(isize::MAX) ; "huge")]
    fn test_out_of_range_start(start: SeqIndex) {
        for scan in [Scan::at(start), Scan::at(start).wrapping()] {
            for direction in [ScanDirection::Forward, ScanDirection::Reverse] {
                assert_eq!(order(5, scan, direction), None);
            }
        }
    }

    #[test]
    fn test_negative_fraction_truncates_into_range() {
        assert_eq!(
            order(3, Scan::at(-0.5), ScanDirection::Forward),
            Some(vec![0, 1, 2])
        );
    }

    #[test]
    fn test_empty_sequence_is_always_out_of_range() {
        assert_eq!(order(0, Scan::new(), ScanDirection::Forward), None);
        assert_eq!(order(0, Scan::new(), ScanDirection::Reverse), None);
        assert_eq!(order(0, Scan::new().wrapping(), ScanDirection::Reverse), None);
    }

    #[test]
    fn test_exact_size() {
        let it = ScanOrder::try_new(7, Scan::at(3), ScanDirection::Reverse).unwrap();
        assert_eq!(it.len(), 4);
    }
}
