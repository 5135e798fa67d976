// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod scan;
pub mod seq_index;
pub mod sequence;

// Re-export.
pub use scan::*;
pub use seq_index::*;
pub use sequence::*;
