// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod action;
pub mod animator;
pub mod coordinator;
pub mod gesture;
pub mod reveal;

// Re-export.
pub use action::*;
pub use animator::*;
pub use coordinator::*;
pub use gesture::*;
pub use reveal::*;

// Tests.
pub mod test_swipe;
