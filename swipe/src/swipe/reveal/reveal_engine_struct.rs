// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crate::{ActionsRow, RevealState, RevealWidth, SettleAnimator, TextMeasure,
            UnicodeWidthMeasure, XOffset, reveal_width, x_offset};

/// Pointer translation reaches the cell frame damped by this factor, which
/// makes the drag feel slightly sticky.
pub const DEFAULT_TRANSLATION_SCALE: f64 = 0.75;

/// The release velocity, projected over the cell's current distance from
/// closed, is damped by this factor before seeding the settle spring.
pub const DEFAULT_VELOCITY_DAMPING: f64 = 0.4;

/// The frame may overscroll left to this multiple of the host's visible width.
pub const DEFAULT_OVERSCROLL_WIDTH_MULTIPLIER: f64 = 3.0;

/// Close settles starting within this many columns of closed snap instantly.
pub const DEFAULT_SNAP_TO_CLOSED_THRESHOLD: f64 = 3.0;

/// Settle duration after a drag release.
pub const DEFAULT_RELEASE_DURATION: Duration = Duration::from_millis(400);

/// Settle duration for a programmatic (tap, scroll, sibling-exclusion) hide.
pub const DEFAULT_HIDE_DURATION: Duration = Duration::from_millis(500);

/// Settle duration for the extra leftward slide when a confirm title needs
/// more room than the row reserved.
pub const DEFAULT_CONFIRM_GROW_DURATION: Duration = Duration::from_millis(150);

/// Tunables for one row's reveal behavior. Attach a non-default set by
/// constructing the engine with [`RevealEngine::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealEngineConfigOptions {
    pub scale: f64,
    pub velocity_damping: f64,
    pub overscroll_width_multiplier: f64,
    pub snap_to_closed_threshold: f64,
    pub release_duration: Duration,
    pub hide_duration: Duration,
    pub confirm_grow_duration: Duration,
}

mod reveal_engine_config_options_impl {
    use super::*;

    impl Default for RevealEngineConfigOptions {
        fn default() -> Self {
            Self {
                scale: DEFAULT_TRANSLATION_SCALE,
                velocity_damping: DEFAULT_VELOCITY_DAMPING,
                overscroll_width_multiplier: DEFAULT_OVERSCROLL_WIDTH_MULTIPLIER,
                snap_to_closed_threshold: DEFAULT_SNAP_TO_CLOSED_THRESHOLD,
                release_duration: DEFAULT_RELEASE_DURATION,
                hide_duration: DEFAULT_HIDE_DURATION,
                confirm_grow_duration: DEFAULT_CONFIRM_GROW_DURATION,
            }
        }
    }
}

/// Per-row reveal state machine: the cell frame offset, the current actions
/// row (if revealed), and the settle spring. All mutation goes through
/// [`RevealEngineApi`](crate::RevealEngineApi); this struct just holds state,
/// like the other engines in this codebase.
#[derive(Debug)]
pub struct RevealEngine {
    pub state: RevealState,
    /// Cell frame offset from closed. `0.0` closed, negative while revealed.
    pub frame_x: XOffset,
    /// Frame offset captured when the current drag began; translations apply
    /// relative to this.
    pub origin_frame_x: XOffset,
    /// True between drag begin and drag end/cancel. Tracks the pointer, not
    /// the reveal, so [`RevealEngine::reset`] leaves it alone.
    pub is_panning: bool,
    /// Re-entrancy guard for `hide_swipe`.
    pub is_hide_in_flight: bool,
    /// Present from a successful show until the next reset.
    pub maybe_actions_row: Option<ActionsRow>,
    pub settle_animator: SettleAnimator,
    /// Leftmost allowed frame offset, captured from the host width when a drag
    /// begins.
    pub overscroll_cap: RevealWidth,
    pub config_options: RevealEngineConfigOptions,
    /// Sizes button titles. Swappable so tests can pin widths.
    pub measurer: Box<dyn TextMeasure>,
}

impl Default for RevealEngine {
    fn default() -> Self { RevealEngine::new(Default::default()) }
}

impl RevealEngine {
    pub fn new(config_options: RevealEngineConfigOptions) -> Self {
        Self {
            state: RevealState::default(),
            frame_x: x_offset(0.0),
            origin_frame_x: x_offset(0.0),
            is_panning: false,
            is_hide_in_flight: false,
            maybe_actions_row: None,
            settle_animator: SettleAnimator::new(config_options.snap_to_closed_threshold),
            overscroll_cap: reveal_width(0.0),
            config_options,
            measurer: Box::new(UnicodeWidthMeasure),
        }
    }

    /// Returns the row to fully-closed: stops any settle, zeroes the frame,
    /// drops the actions row (and any confirm latch with it). Idempotent. The
    /// pan flag tracks the pointer, not the reveal, and is left alone.
    pub fn reset(&mut self) {
        self.settle_animator.stop();
        self.frame_x = x_offset(0.0);
        self.origin_frame_x = x_offset(0.0);
        self.is_hide_in_flight = false;
        self.maybe_actions_row = None;
        self.transition_to(RevealState::Hidden);
    }

    pub(crate) fn transition_to(&mut self, next: RevealState) {
        if self.state == next {
            return;
        }
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "reveal state transition",
            from = %self.state,
            to = %next
        );
        self.state = next;
    }
}
