// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::SeqIndex;
use miette::Diagnostic;

/// Result type returned by the checked operations in [`crate::error::checked`].
pub type ArrayOpsResult<T> = miette::Result<T>;

/// Failures reported by the checked operations.
///
/// | Variant                | Raised by                                       |
/// |------------------------|-------------------------------------------------|
/// | [`IndexOutOfBounds`]   | [`crate::try_move_item`], [`crate::try_remove_at`] |
/// | [`ValueNotFound`]      | [`crate::try_remove`]                           |
/// | [`NotSorted`]          | [`crate::check_sorted_by`]                      |
///
/// These are wrapped in a [`miette::Report`]. Use [`miette::Report::downcast_ref`] to
/// get the variant back.
///
/// [`IndexOutOfBounds`]: Self::IndexOutOfBounds
/// [`ValueNotFound`]: Self::ValueNotFound
/// [`NotSorted`]: Self::NotSorted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum ArrayOpsError {
    #[error("Index {index} is out of bounds for a sequence of length {len}")]
    #[diagnostic(
        code(r3bl_arrays::index_out_of_bounds),
        help("Valid indices are in the range [0, len)")
    )]
    IndexOutOfBounds { index: SeqIndex, len: usize },

    #[error("Value not found in sequence")]
    #[diagnostic(code(r3bl_arrays::value_not_found))]
    ValueNotFound,

    #[error("Sequence is not sorted: element at index {index} is less than its predecessor")]
    #[diagnostic(
        code(r3bl_arrays::not_sorted),
        help("lower_bound and upper_bound require the sequence to be sorted ascending")
    )]
    NotSorted { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idx;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        let it = ArrayOpsError::IndexOutOfBounds {
            index: idx(-2),
            len: 4,
        };
        assert_eq!(
            it.to_string(),
            "Index -2 is out of bounds for a sequence of length 4"
        );
        assert_eq!(
            ArrayOpsError::NotSorted { index: 3 }.to_string(),
            "Sequence is not sorted: element at index 3 is less than its predecessor"
        );
    }

    #[test]
    fn test_diagnostic_code() {
        let code = ArrayOpsError::ValueNotFound.code().map(|it| it.to_string());
        assert_eq!(code.as_deref(), Some("r3bl_arrays::value_not_found"));
    }

    #[test]
    fn test_into_report_and_back() {
        let report: miette::Report = ArrayOpsError::NotSorted { index: 1 }.into();
        assert_eq!(
            report.downcast_ref::<ArrayOpsError>(),
            Some(&ArrayOpsError::NotSorted { index: 1 })
        );
    }
}
