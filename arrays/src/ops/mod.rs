// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod boundary_search;
pub mod mutation;
pub mod reversal;
pub mod search;
pub mod sequence_ext;
pub mod traversal;

// Re-export.
pub use boundary_search::*;
pub use mutation::*;
pub use reversal::*;
pub use search::*;
pub use sequence_ext::*;
pub use traversal::*;
