// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ActionSpec, InlineString, Progress, RevealWidth, TextMeasure, XOffset,
            x_offset};

/// What a tap on an action button did. [`ActionsRow::tap`] produces this and
/// [`RevealEngineApi::tap_button`] translates it into cell movement and handler
/// dispatch.
///
/// [`ActionsRow::tap`]: crate::ActionsRow::tap
/// [`RevealEngineApi::tap_button`]: crate::RevealEngineApi::tap_button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The button armed itself and swapped to its confirm title. When
    /// `requires_grow` is set the confirm title needs more room than the row
    /// currently reserves, and the cell has to slide further left.
    Latched { requires_grow: bool },
    /// The action fired; the caller invokes the spec's handler.
    Activated,
}

/// One rendered action inside an [`ActionsRow`](crate::ActionsRow): the spec
/// plus the per-reveal state that moves (offset), latches (confirm), or hides
/// (after a sibling's confirm grow).
///
/// A button paints full-bleed: its background runs from `current_offset_x` to
/// the row's trailing edge, and later entries in the row's stacking order
/// overpaint it. The visible slice of each button falls out of paint order, the
/// same way overlapping subviews resolve in a retained-mode toolkit.
#[derive(Clone, Debug)]
pub struct ActionButton {
    pub spec: ActionSpec,
    /// Starts as the spec title; swaps to the confirm title when latched.
    pub displayed_title: InlineString,
    /// Resting distance from the row's leading edge: the cumulative width of
    /// every preceding button. Fixed at build time.
    pub to_x: RevealWidth,
    /// Current distance from the row's leading edge. Follows the reveal
    /// progress (`to_x * p`) until a confirm latch pins it to `0`.
    pub current_offset_x: XOffset,
    /// The slot the title centers in. Resting width at build time; the row's
    /// full (possibly grown) width once the button latches.
    pub current_width: RevealWidth,
    /// One-way latch. Never cleared for the life of the row.
    pub is_confirming: bool,
    /// Set on non-confirming siblings once a confirm grow lands.
    pub is_hidden: bool,
}

impl ActionButton {
    pub fn new(spec: ActionSpec, to_x: RevealWidth, measurer: &dyn TextMeasure) -> Self {
        let current_width = spec.resting_width(measurer);
        Self {
            displayed_title: spec.title.clone(),
            spec,
            to_x,
            current_offset_x: x_offset(0.0),
            current_width,
            is_confirming: false,
            is_hidden: false,
        }
    }

    /// Applies the parallel-reveal law `x = to_x * p` to this button.
    pub fn set_progress(&mut self, arg_progress: Progress) {
        self.current_offset_x = self.to_x * arg_progress;
    }

    /// Arms the confirm latch: swaps the displayed title, pins the button to
    /// the row's leading edge, and widens its slot to `new_width` (the row's
    /// width after any grow). The latch is one-way; only dropping the row
    /// clears it.
    pub fn latch_confirm(&mut self, confirm_title: InlineString, new_width: RevealWidth) {
        self.is_confirming = true;
        self.displayed_title = confirm_title;
        self.current_offset_x = x_offset(0.0);
        self.current_width = new_width;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{UnicodeWidthMeasure, progress, reveal_width};

    fn make_button() -> ActionButton {
        let spec = ActionSpec::new("Delete", None);
        ActionButton::new(spec, reveal_width(8.0), &UnicodeWidthMeasure)
    }

    #[test]
    fn test_new_button_rests_at_row_edge() {
        let button = make_button();
        assert_eq!(button.displayed_title.as_str(), "Delete");
        assert_eq!(button.current_offset_x, x_offset(0.0));
        assert_eq!(button.current_width, reveal_width(10.0));
        assert!(!button.is_confirming);
        assert!(!button.is_hidden);
    }

    #[test]
    fn test_set_progress_applies_parallel_reveal_law() {
        let mut button = make_button();
        button.set_progress(progress(0.5));
        assert_eq!(button.current_offset_x, x_offset(4.0));
        button.set_progress(progress(1.0));
        assert_eq!(button.current_offset_x, x_offset(8.0));
        // Overscroll keeps applying the same law.
        button.set_progress(progress(1.5));
        assert_eq!(button.current_offset_x, x_offset(12.0));
    }

    #[test]
    fn test_latch_confirm_swaps_title_and_pins_to_edge() {
        let mut button = make_button();
        button.set_progress(progress(1.0));
        button.latch_confirm("Confirm delete".into(), reveal_width(18.0));
        assert!(button.is_confirming);
        assert_eq!(button.displayed_title.as_str(), "Confirm delete");
        assert_eq!(button.current_offset_x, x_offset(0.0));
        assert_eq!(button.current_width, reveal_width(18.0));
    }
}
