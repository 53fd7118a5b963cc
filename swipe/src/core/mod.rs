// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod common;
pub mod decl_macros;
pub mod log;
pub mod stack_alloc_types;
pub mod units;

// Re-export.
pub use common::*;
pub use log::*;
pub use stack_alloc_types::*;
pub use units::*;
