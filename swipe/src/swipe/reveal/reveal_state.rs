// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::Display;

/// Lifecycle of one row's reveal. Owned by
/// [`RevealEngine`](crate::RevealEngine); transitions happen only inside
/// [`RevealEngineApi`](crate::RevealEngineApi) operations.
///
/// ```text
/// Hidden ─drag─> Dragging ─release─> SettlingOpen ──> Revealed
///    ^              │                                    │
///    │              └─release/near─> SettlingClosed      │ drag / tap
///    └──────────────────────────────────┘<───────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq)]
pub enum RevealState {
    /// Closed. The row paints normally and owns no actions.
    #[default]
    Hidden,
    /// The pointer holds the cell frame; no animation runs.
    Dragging,
    /// Released toward the actions; the spring carries the frame to the open
    /// offset.
    SettlingOpen,
    /// Released (or told to hide) toward closed.
    SettlingClosed,
    /// At rest with the actions showing.
    Revealed,
}

impl RevealState {
    #[must_use]
    pub fn is_hidden(&self) -> bool { matches!(self, RevealState::Hidden) }
}
