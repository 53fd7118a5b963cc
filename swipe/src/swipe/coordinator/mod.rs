// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod list_coordinator;
pub mod list_host;

// Re-export.
pub use list_coordinator::*;
pub use list_host::*;
