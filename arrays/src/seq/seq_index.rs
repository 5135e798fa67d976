// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Signed, caller supplied index argument - see [`SeqIndex`] type.

use std::fmt::{Debug, Display, Formatter};

/// An index *argument* passed into the array operations.
///
/// Unlike a plain `usize`, a `SeqIndex` may be negative, and it may be built from a
/// float. This lets the operations accept the same loose inputs as the classic API
/// while keeping the normalization policy explicit:
///
/// 1. **Truncate**: float inputs are truncated toward zero when converted (`2.9` -> `2`,
///    `-0.5` -> `0`, `NaN` -> `0`, `±inf` saturates).
/// 2. Then each operation either **rejects** ([`SeqIndex::in_range`]) or **clamps**
///    ([`SeqIndex::clamp_to`]) the value against the current length.
///
/// ```text
/// in_range(len = 5):
///              ┌─── valid ───────────┐
///   ... -2 -1  │ 0   1   2   3   4   │  5   6 ...
///   None None  │ Some(..)            │ None None
///              └─────────────────────┘
///
/// clamp_to(max = 5):
///   -9 -> 0,  3 -> 3,  12 -> 5
/// ```
///
/// # Examples
///
/// ```
/// use r3bl_arrays::{SeqIndex, idx};
///
/// assert_eq!(idx(3), SeqIndex::from(3.7_f64));
/// assert_eq!(idx(-1).in_range(5), None);
/// assert_eq!(idx(4).in_range(5), Some(4));
/// assert_eq!(idx(-9).clamp_to(5), 0);
/// assert_eq!(idx(12).clamp_to(5), 5);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SeqIndex(pub isize);

/// Constructor fn for [`SeqIndex`].
#[must_use]
pub fn idx(arg_index: impl Into<SeqIndex>) -> SeqIndex { arg_index.into() }

impl SeqIndex {
    #[must_use]
    pub fn new(value: isize) -> Self { Self(value) }

    #[must_use]
    pub fn as_isize(self) -> isize { self.0 }

    /// Reject policy. Returns the index as a `usize` only when `0 <= self < len`.
    #[must_use]
    pub fn in_range(self, len: usize) -> Option<usize> {
        usize::try_from(self.0).ok().filter(|it| *it < len)
    }

    /// Clamp policy. Pins the index into the closed interval `[0, max]`.
    #[must_use]
    pub fn clamp_to(self, max: usize) -> usize {
        match usize::try_from(self.0) {
            Ok(it) => it.min(max),
            // Negative.
            Err(_) => 0,
        }
    }
}

impl Debug for SeqIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SeqIndex({})", self.0)
    }
}

impl Display for SeqIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

mod conversions {
    use super::SeqIndex;

    impl From<isize> for SeqIndex {
        fn from(value: isize) -> Self { Self(value) }
    }

    impl From<usize> for SeqIndex {
        fn from(value: usize) -> Self { Self(isize::try_from(value).unwrap_or(isize::MAX)) }
    }

    impl From<i32> for SeqIndex {
        fn from(value: i32) -> Self { Self::from(i64::from(value)) }
    }

    impl From<i64> for SeqIndex {
        fn from(value: i64) -> Self {
            let saturated = if value < 0 { isize::MIN } else { isize::MAX };
            Self(isize::try_from(value).unwrap_or(saturated))
        }
    }

    impl From<u32> for SeqIndex {
        fn from(value: u32) -> Self { Self(isize::try_from(value).unwrap_or(isize::MAX)) }
    }

    impl From<u16> for SeqIndex {
        fn from(value: u16) -> Self {
            Self(isize::try_from(value).unwrap_or(isize::MAX))
        }
    }

    /// Truncates toward zero. `as` is a saturating cast for floats and maps `NaN` to 0.
    #[allow(clippy::cast_possible_truncation)]
    impl From<f64> for SeqIndex {
        fn from(value: f64) -> Self { Self(value.trunc() as isize) }
    }

    #[allow(clippy::cast_possible_truncation)]
    impl From<f32> for SeqIndex {
        fn from(value: f32) -> Self { Self(value.trunc() as isize) }
    }

    impl From<SeqIndex> for isize {
        fn from(value: SeqIndex) -> Self { value.0 }
    }
}
