// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod drag_tracker;
pub mod pointer_input;

// Re-export.
pub use drag_tracker::*;
pub use pointer_input::*;
