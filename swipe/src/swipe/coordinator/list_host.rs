// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ActionSpec, InlineVec, Pos, RevealWidth};

/// Identifies one row of the embedder's list. Stable for the life of the row
/// (survives scrolling and reordering); not an index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u64);

impl RowId {
    #[must_use]
    pub fn new(arg_id: u64) -> Self { Self(arg_id) }
}

impl From<u64> for RowId {
    fn from(val: u64) -> Self { Self(val) }
}

/// The embedder's say over what a row reveals. Consulted fresh on every reveal
/// attempt, so action lists can change between reveals without any
/// invalidation protocol.
///
/// Declining (`can_edit` false, or an empty action list) abandons the reveal
/// with no visual change.
pub trait EditActionsProvider {
    fn can_edit(&mut self, row_id: RowId) -> bool;

    /// Ordered left-to-right as the buttons will appear in the gutter.
    fn edit_actions(&mut self, row_id: RowId) -> InlineVec<ActionSpec>;

    /// Revealing a row implies it is not simultaneously selected; the engine
    /// calls this right before building the actions row.
    fn deselect_all_rows(&mut self);
}

/// Read-only geometry of the embedder's list, as currently laid out on
/// screen.
pub trait ListHostView {
    /// Rows currently on screen, in display order.
    fn visible_rows(&self) -> InlineVec<RowId>;

    /// Which row (if any) is painted at this terminal position.
    fn row_at(&self, pos: Pos) -> Option<RowId>;

    /// Width of the list viewport in columns. Bounds the overscroll cap and
    /// locates the gutter for button hit testing.
    fn visible_width(&self) -> RevealWidth;
}
