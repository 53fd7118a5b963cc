// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug, sync::Arc};

use crossterm::style::Color;
use unicode_width::UnicodeWidthStr;

use crate::{InlineString, RevealWidth, reveal_width};

/// Default gap, in columns, between a button title and each of its side edges.
pub const DEFAULT_HORIZONTAL_MARGIN: f64 = 2.0;

/// Runs when an action fires: a tap on a button that needs no confirmation, or
/// the second tap on one that does. Receives the spec it was attached to, so one
/// handler can serve several actions.
pub type ActionHandlerFn = Arc<dyn Fn(&ActionSpec) + Send + Sync>;

/// Whether a button demands a second tap before its handler runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConfirmPolicy {
    #[default]
    None,
    /// The first tap arms the button and swaps its label to `confirm_title`;
    /// only the next tap runs the handler.
    RequireConfirmation { confirm_title: InlineString },
}

/// Immutable description of one revealable action, supplied by the embedder via
/// [`EditActionsProvider::edit_actions`](crate::EditActionsProvider::edit_actions).
///
/// This is pure data and cheap to clone (the handler sits behind an [`Arc`]).
/// The mutable per-reveal state lives in [`ActionButton`](crate::ActionButton).
///
/// # Example
///
/// ```rust
/// use r3bl_swipe::{ActionSpec, ConfirmPolicy, reveal_width};
///
/// let mut delete = ActionSpec::new("Delete", None);
/// delete.confirm_policy = ConfirmPolicy::RequireConfirmation {
///     confirm_title: "Confirm delete".into(),
/// };
/// delete.preferred_width = Some(reveal_width(14.0));
/// ```
#[derive(Clone)]
pub struct ActionSpec {
    pub title: InlineString,
    pub background_color: Color,
    pub title_color: Color,
    /// When `None` the button is sized from its title: display width plus
    /// [`ActionSpec::horizontal_margin`] on both sides.
    pub preferred_width: Option<RevealWidth>,
    pub horizontal_margin: RevealWidth,
    pub confirm_policy: ConfirmPolicy,
    pub maybe_handler: Option<ActionHandlerFn>,
}

impl ActionSpec {
    pub fn new(
        arg_title: impl Into<InlineString>,
        maybe_handler: Option<ActionHandlerFn>,
    ) -> Self {
        Self {
            title: arg_title.into(),
            background_color: Color::Red,
            title_color: Color::White,
            preferred_width: None,
            horizontal_margin: reveal_width(DEFAULT_HORIZONTAL_MARGIN),
            confirm_policy: ConfirmPolicy::None,
            maybe_handler,
        }
    }

    /// Resting width of this action's button: the explicit override when set,
    /// otherwise the measured title width plus the margin on both sides.
    #[must_use]
    pub fn resting_width(&self, measurer: &dyn TextMeasure) -> RevealWidth {
        match self.preferred_width {
            Some(width) => width,
            None => measurer.measure(&self.title) + self.horizontal_margin * 2.0,
        }
    }
}

impl Debug for ActionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionSpec")
            .field("title", &self.title)
            .field("background_color", &self.background_color)
            .field("title_color", &self.title_color)
            .field("preferred_width", &self.preferred_width)
            .field("horizontal_margin", &self.horizontal_margin)
            .field("confirm_policy", &self.confirm_policy)
            .field(
                "maybe_handler",
                &self.maybe_handler.as_ref().map(|_| "<function>"),
            )
            .finish()
    }
}

/// Measures the display width of button titles, in terminal columns. Injected
/// wherever button widths are computed, so tests can pin widths without
/// depending on title contents.
pub trait TextMeasure: Debug {
    fn measure(&self, text: &str) -> RevealWidth;
}

/// Default measurement: Unicode display width, so CJK and other wide glyphs
/// count as two columns.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeWidthMeasure;

impl TextMeasure for UnicodeWidthMeasure {
    #[allow(clippy::cast_precision_loss)]
    fn measure(&self, text: &str) -> RevealWidth {
        reveal_width(UnicodeWidthStr::width(text) as f64)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_resting_width_measured_from_title() {
        let spec = ActionSpec::new("Delete", None);
        // "Delete" is 6 columns wide; margin defaults to 2 on each side.
        assert_eq!(
            spec.resting_width(&UnicodeWidthMeasure),
            reveal_width(10.0)
        );
    }

    #[test]
    fn test_resting_width_prefers_explicit_override() {
        let mut spec = ActionSpec::new("Delete", None);
        spec.preferred_width = Some(reveal_width(14.0));
        assert_eq!(
            spec.resting_width(&UnicodeWidthMeasure),
            reveal_width(14.0)
        );
    }

    #[test]
    fn test_resting_width_counts_wide_glyphs_as_two_columns() {
        let spec = ActionSpec::new("删除", None);
        // Two CJK glyphs occupy 4 columns, plus 2 columns of margin per side.
        assert_eq!(spec.resting_width(&UnicodeWidthMeasure), reveal_width(8.0));
    }

    #[test]
    fn test_debug_prints_handler_as_function() {
        let spec = ActionSpec::new("Delete", Some(Arc::new(|_| {})));
        let debug = format!("{spec:?}");
        assert!(debug.contains("<function>"));
        assert!(!debug.contains("Arc"));
    }
}
