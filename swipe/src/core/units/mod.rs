// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod col_index;
pub mod pos;
pub mod progress;
pub mod reveal_width;
pub mod row_index;
pub mod velocity;
pub mod x_offset;

// Re-export.
pub use col_index::*;
pub use pos::*;
pub use progress::*;
pub use reveal_width::*;
pub use row_index::*;
pub use velocity::*;
pub use x_offset::*;
