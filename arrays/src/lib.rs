// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_arrays
//!
//! A small library of generic, in-place array algorithms with precise, allocation-free,
//! index-based semantics:
//!
//! | Group             | Operations                                                   |
//! |-------------------|--------------------------------------------------------------|
//! | Traversal         | [`for_each`], [`rfor_each`]                                  |
//! | Predicate search  | [`find_index`], [`rfind_index`], [`find`], [`rfind`]         |
//! | Mutation          | [`insert`], [`move_item`], [`remove_at`], [`remove`]         |
//! | Reverse & rotate  | [`reverse`], [`reverse_range`], [`rotate`]                   |
//! | Boundary search   | [`lower_bound`], [`upper_bound`] (and the `_ord` shorthands) |
//!
//! Every operation works on a caller owned sequence, borrowed for the duration of the
//! call. Nothing is copied, nothing is allocated (apart from the one slot that
//! [`insert`] grows the sequence by), and there is no shared or static state.
//!
//! # Sentinels instead of errors
//!
//! Out-of-range and not-found conditions are ordinary return values:
//!
//! ```text
//! ┌──────────────────────────┬──────────────────────────────────────────────┐
//! │ Operation returns        │ "Nothing happened" looks like                │
//! ├──────────────────────────┼──────────────────────────────────────────────┤
//! │ an element / a value     │ None                                         │
//! │ an index                 │ None (the `-1` of the classic API)           │
//! │ a boundary index         │ seq.len() ("insert at the end")              │
//! │ a bool (move_item)       │ false                                        │
//! └──────────────────────────┴──────────────────────────────────────────────┘
//! ```
//!
//! If you'd rather get an error, use the checked variants in [`error`] such as
//! [`try_remove_at`] and [`try_move_item`], which return [`ArrayOpsResult`].
//!
//! # Index arguments
//!
//! Index parameters are [`SeqIndex`] values (build them with [`idx`], or pass any
//! integer or float). Negative and fractional inputs are legal; fractions are truncated
//! toward zero. Each operation then applies one of two policies, and the asymmetry is
//! part of the contract:
//!
//! - **Reject**: [`for_each`], [`rfor_each`], the `find*` family, [`move_item`],
//!   [`remove_at`]. Out of range means no-op plus sentinel.
//! - **Clamp**: [`insert`] clamps into `[0, len]`, [`reverse_range`] clamps into `[0,
//!   len - 1]`.
//!
//! # Example
//!
//! ```
//! use r3bl_arrays::{Scan, find_index, insert, lower_bound_ord, rotate, upper_bound_ord};
//!
//! let mut data = vec![0, 1, 2, 3, 4];
//! assert_eq!(insert(&mut data, -9, 9), 0);
//! assert_eq!(data, vec![9, 0, 1, 2, 3, 4]);
//!
//! rotate(&mut data, 2);
//! assert_eq!(data, vec![1, 2, 3, 4, 9, 0]);
//!
//! let data = vec![1, 2, 3, 4, 3, 2, 1];
//! let is_even = |it: &i32, _: usize| it % 2 == 0;
//! assert_eq!(find_index(&data, is_even, Scan::at(6).wrapping()), Some(1));
//!
//! let sorted = vec![0, 3, 4, 7, 7, 9];
//! assert_eq!(lower_bound_ord(&sorted, &7), 3);
//! assert_eq!(upper_bound_ord(&sorted, &7), 5);
//! ```
//!
//! # Concurrency
//!
//! Every call runs to completion synchronously. The sequence is exclusively borrowed
//! by the mutating operations, so the borrow checker already serializes access from
//! safe code. Callbacks, predicates and comparators only get shared references to
//! elements and can't resize the sequence during a scan.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod error;
pub mod log;
pub mod ops;
pub mod seq;

// Re-export.
pub use error::*;
pub use log::*;
pub use ops::*;
pub use seq::*;
