// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod action_button;
pub mod action_spec;
pub mod actions_row;

// Re-export.
pub use action_button::*;
pub use action_spec::*;
pub use actions_row::*;
