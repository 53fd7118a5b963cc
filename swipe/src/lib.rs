// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_swipe
//!
//! Swipeable list rows for terminal UIs: drag a row to the left with the mouse
//! and a strip of action buttons slides out from behind it, the way list cells
//! behave in mobile mail clients. Release and the row settles open or closed
//! on a velocity-seeded spring; tap a destructive action once to arm it and
//! again to run it; grab, scroll, or tap anywhere else and the open row gets
//! out of the way.
//!
//! The crate owns the *interaction*, not the screen. You feed it pointer
//! events and animation-frame ticks, and read back per-row geometry (how far
//! each cell frame is shifted, where each button sits) to paint however your
//! app paints. Nothing here writes to the terminal.
//!
//! ## The interaction
//!
//! - **Drag**: a mostly-horizontal leftward pull on a row claims the gesture
//!   and drags the cell frame with the pointer (damped, so it feels slightly
//!   sticky). A mostly-vertical pull is ceded to the list for scrolling. A
//!   rightward pull on a closed row is claimed but inert.
//! - **Release**: the row commits to fully open or fully closed based on the
//!   release direction, and animates there on a critically damped spring. A
//!   rightward flick seeds the spring, so flicking a row shut lands harder
//!   than a lazy drop. Releases that end within a few columns of closed snap
//!   shut instantly.
//! - **Reveal**: buttons slide out in parallel with the drag. The strip is
//!   built fresh on every reveal from your
//!   [`EditActionsProvider::edit_actions`], so it always reflects current
//!   data.
//! - **Confirm**: an action marked [`ConfirmPolicy::RequireConfirmation`]
//!   arms on the first tap, swapping to its confirm title (and sliding the
//!   cell further left if that title needs the room). Only the second tap
//!   fires the handler.
//! - **One open row**: grabbing another row, scrolling, or tapping outside
//!   the open row closes it, animated. The [`ListCoordinator`] enforces this
//!   across every attached row.
//!
//! ## Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//!
//! use r3bl_swipe::{ActionSpec, EditActionsProvider, EventPropagation, InlineVec,
//!                  ListCoordinator, ListHostView, PointerButton, PointerInput,
//!                  PointerInputKind, Pos, RevealState, RevealWidth, RowId, col,
//!                  reveal_width, row};
//!
//! /// One list row at terminal row 0, in an 80 column viewport.
//! #[derive(Debug)]
//! struct Inbox;
//!
//! impl EditActionsProvider for Inbox {
//!     fn can_edit(&mut self, _row_id: RowId) -> bool { true }
//!
//!     fn edit_actions(&mut self, _row_id: RowId) -> InlineVec<ActionSpec> {
//!         let mut specs = InlineVec::<ActionSpec>::new();
//!         specs.push(ActionSpec::new("Delete", None));
//!         specs
//!     }
//!
//!     fn deselect_all_rows(&mut self) {}
//! }
//!
//! impl ListHostView for Inbox {
//!     fn visible_rows(&self) -> InlineVec<RowId> {
//!         let mut rows = InlineVec::<RowId>::new();
//!         rows.push(RowId(0));
//!         rows
//!     }
//!
//!     fn row_at(&self, pos: Pos) -> Option<RowId> {
//!         (pos.row_index.as_u16() == 0).then_some(RowId(0))
//!     }
//!
//!     fn visible_width(&self) -> RevealWidth { reveal_width(80.0) }
//! }
//!
//! let mut inbox = Inbox;
//! let mut coordinator = ListCoordinator::default();
//! coordinator.attach_row(RowId(0));
//!
//! // Press on the row, then pull left past the claim threshold.
//! let t0 = Instant::now();
//! let press = PointerInput {
//!     pos: col(40u16) + row(0u16),
//!     kind: PointerInputKind::Down(PointerButton::Left),
//! };
//! let pull = PointerInput {
//!     pos: col(34u16) + row(0u16),
//!     kind: PointerInputKind::Drag(PointerButton::Left),
//! };
//! coordinator.apply_event(&mut inbox, press, t0).unwrap();
//! let response = coordinator
//!     .apply_event(&mut inbox, pull, t0 + Duration::from_millis(16))
//!     .unwrap();
//!
//! assert_eq!(response, EventPropagation::ConsumedRender);
//! let engine = coordinator.engine_for_row(RowId(0)).unwrap();
//! assert_eq!(engine.state, RevealState::Dragging);
//! ```
//!
//! In a real app the pointer events come off [`crossterm`]'s event stream
//! ([`PointerInput`] converts straight [`From`] a [`crossterm`] mouse event),
//! and the ticks come from a [`FrameTicker`] task. See `examples/demo.rs` for
//! the full loop: raw mode, mouse capture, painting rows shifted by
//! `frame_x`, and the gutter painted from
//! [`ActionsRow::buttons_in_paint_order`].
//!
//! ## How it is organized
//!
//! - [`mod@crate::core`]: newtypes for the units the interaction is computed
//!   in (columns, offsets, velocity, progress), error plumbing, logging
//!   setup, and stack-allocated collections.
//! - [`crate::swipe`]: the interaction itself.
//!   - `gesture`: pointer stream to tap / drag-begin / drag-change /
//!     drag-end, with release velocity estimation.
//!   - `reveal`: the per-row state machine ([`RevealEngine`] +
//!     [`RevealEngineApi`]).
//!   - `action`: [`ActionSpec`], [`ActionButton`], [`ActionsRow`] (layout,
//!     hit testing, confirm latching).
//!   - `animator`: the settle spring ([`SettleAnimator`]) and the tokio tick
//!     task ([`FrameTicker`]).
//!   - `coordinator`: [`ListCoordinator`], the one-open-row rule, and the
//!     embedder traits.
//!
//! Logging goes through [`tracing`]; call [`try_initialize_logging`] to send
//! it to a file (the terminal itself is busy being a UI).

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod core;
pub mod swipe;

// Re-export.
pub use core::*;
pub use swipe::*;
