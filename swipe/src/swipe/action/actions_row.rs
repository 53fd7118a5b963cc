// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ActionButton, ActionSpec, ConfirmOutcome, ConfirmPolicy, InlineVec,
            Progress, RevealWidth, TextMeasure, XOffset};

/// The strip of action buttons that a leftward drag uncovers behind a row.
///
/// Built fresh on every reveal from the embedder's current
/// [`ActionSpec`](crate::ActionSpec)s and dropped when the row closes, so stale
/// actions never survive a data change.
///
/// # Layout model
///
/// Buttons keep their creation order in `buttons` and paint in `stacking_order`
/// (later entries on top). Every button paints full-bleed from its
/// `current_offset_x` to the trailing edge of the gutter, so the visible slice
/// of each button falls out of paint order alone. During a reveal each button
/// follows `x = to_x * progress`, which slides the whole strip in from the edge
/// in parallel.
///
/// A confirm latch freezes this: the latched button pins itself to the leading
/// edge at the row's full width and jumps to the top of the stack, and
/// [`ActionsRow::set_progress`] becomes a no-op until the row is dropped.
#[derive(Clone, Debug)]
pub struct ActionsRow {
    pub buttons: InlineVec<ActionButton>,
    /// Total resting width of the strip. Grows (once) when a confirm title
    /// needs more room than the buttons it replaces.
    pub preferred_width: RevealWidth,
    /// Indices into `buttons`, bottom to top.
    stacking_order: InlineVec<usize>,
}

impl ActionsRow {
    pub fn new(arg_specs: InlineVec<ActionSpec>, measurer: &dyn TextMeasure) -> Self {
        let mut buttons = InlineVec::<ActionButton>::new();
        let mut stacking_order = InlineVec::<usize>::new();
        let mut running_width = RevealWidth::default();
        for (index, spec) in arg_specs.into_iter().enumerate() {
            // A button rests past every button created before it.
            let button = ActionButton::new(spec, running_width, measurer);
            running_width += button.current_width;
            stacking_order.push(index);
            buttons.push(button);
        }
        Self {
            buttons,
            preferred_width: running_width,
            stacking_order,
        }
    }

    #[must_use]
    pub fn is_confirming(&self) -> bool {
        self.buttons.iter().any(|button| button.is_confirming)
    }

    /// Moves every button to its position for the given reveal progress. Does
    /// nothing while a confirm latch holds the layout.
    pub fn set_progress(&mut self, arg_progress: Progress) {
        if self.is_confirming() {
            return;
        }
        for button in &mut self.buttons {
            button.set_progress(arg_progress);
        }
    }

    /// Handles a tap landing on the button at `arg_button_index`.
    ///
    /// - No confirm policy, or already latched: the action fires.
    /// - Confirm policy, not yet latched: the button arms itself, swaps to its
    ///   confirm title, grows the strip if that title needs the room, and moves
    ///   to the top of the stack.
    ///
    /// Returns [`None`] for an out-of-range index.
    pub fn tap(
        &mut self,
        arg_button_index: usize,
        measurer: &dyn TextMeasure,
    ) -> Option<ConfirmOutcome> {
        let button = self.buttons.get_mut(arg_button_index)?;

        if button.is_confirming {
            return Some(ConfirmOutcome::Activated);
        }

        let ConfirmPolicy::RequireConfirmation { confirm_title } =
            button.spec.confirm_policy.clone()
        else {
            return Some(ConfirmOutcome::Activated);
        };

        let confirm_width =
            measurer.measure(&confirm_title) + button.spec.horizontal_margin * 2.0;
        let requires_grow = self.preferred_width < confirm_width;
        if requires_grow {
            self.preferred_width = confirm_width;
        }
        button.latch_confirm(confirm_title, self.preferred_width);

        self.bring_to_front(arg_button_index);

        Some(ConfirmOutcome::Latched { requires_grow })
    }

    /// Once a confirm grow lands, the latched button owns the whole gutter and
    /// its siblings stop painting.
    pub fn hide_non_confirming_buttons(&mut self) {
        for button in &mut self.buttons {
            if !button.is_confirming {
                button.is_hidden = true;
            }
        }
    }

    /// Hit test at `arg_x` columns from the gutter's leading edge: the topmost
    /// visible button whose slab has slid at least that far in.
    #[must_use]
    pub fn button_at(&self, arg_x: XOffset) -> Option<usize> {
        self.stacking_order.iter().rev().copied().find(|index| {
            self.buttons.get(*index).is_some_and(|button| {
                !button.is_hidden && arg_x >= button.current_offset_x
            })
        })
    }

    /// Buttons bottom to top, the order a renderer paints them in.
    pub fn buttons_in_paint_order(&self) -> impl Iterator<Item = &ActionButton> + '_ {
        self.stacking_order
            .iter()
            .filter_map(|index| self.buttons.get(*index))
    }

    fn bring_to_front(&mut self, arg_button_index: usize) {
        self.stacking_order.retain(|it| *it != arg_button_index);
        self.stacking_order.push(arg_button_index);
    }
}
