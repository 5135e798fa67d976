// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod array_ops_error;
pub mod checked;

// Re-export.
pub use array_ops_error::*;
pub use checked::*;
