// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod frame_ticker;
pub mod settle_animator;

// Re-export.
pub use frame_ticker::*;
pub use settle_animator::*;
