// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod reveal_engine_api;
pub mod reveal_engine_struct;
pub mod reveal_state;

// Re-export.
pub use reveal_engine_api::*;
pub use reveal_engine_struct::*;
pub use reveal_state::*;
