// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          time::{Duration, Instant}};

use crate::{ActionsRow, CommonResult, ConfirmOutcome, EditActionsProvider,
            ListHostView, RevealEngine, RevealState, RowId, SettleStartOutcome,
            SettleStartSpec, Velocity, XOffset, ok, progress, throws_with_return,
            x_offset};

/// What applying a gesture or tick to a [`RevealEngine`] did. Any variant
/// other than `Ignored` means the row needs a repaint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealEngineApplyResponse {
    /// A drag on a closed row built its actions row and entered `Dragging`.
    RowShown,
    /// A drag grabbed a settling or revealed row and picked it up where it
    /// was.
    DragResumed,
    /// The frame moved under the pointer.
    Dragged,
    /// A settle spring is running; feed ticks.
    SettleStarted,
    /// The row closed instantly (release near closed, or unanimated hide).
    SnappedClosed,
    /// A settle advanced the frame.
    SettleTicked,
    /// A settle reached its target this tick.
    SettleFinished,
    /// A tap armed a confirm button. With `requires_grow` the cell is sliding
    /// further left to fit the confirm title.
    ConfirmLatched { requires_grow: bool },
    /// The tapped action fired its handler.
    ActionActivated,
    Ignored,
}

/// Things you can do with a [`RevealEngine`].
///
/// Stateless: every operation takes the engine (and, where the embedder's
/// list is consulted, the host state) by `&mut`. Time comes in as an
/// [`Instant`] argument, never read from a clock here, so every path is
/// drivable from tests.
#[derive(Debug)]
pub struct RevealEngineApi;

impl RevealEngineApi {
    /// A drag claimed this row. Stops any in-flight settle and captures the
    /// drag origin. On a closed row this consults the host and builds the
    /// actions row; a rightward grab from closed stays inert (a rightward
    /// flick never opens).
    ///
    /// # Errors
    ///
    /// Returns an error if the event handling fails.
    pub fn on_drag_begin<S>(
        engine: &mut RevealEngine,
        mut_state: &mut S,
        arg_row_id: RowId,
        arg_initial_velocity: Velocity,
    ) -> CommonResult<RevealEngineApplyResponse>
    where
        S: EditActionsProvider + ListHostView + Debug,
    {
        throws_with_return!({
            engine.settle_animator.stop();
            engine.is_panning = true;
            engine.origin_frame_x = engine.frame_x;
            engine.overscroll_cap = mut_state.visible_width()
                * engine.config_options.overscroll_width_multiplier;

            if engine.state.is_hidden() {
                if arg_initial_velocity.is_rightward() {
                    return ok!(RevealEngineApplyResponse::Ignored);
                }
                if !internal_impl::show_actions_row(engine, mut_state, arg_row_id) {
                    return ok!(RevealEngineApplyResponse::Ignored);
                }
                engine.transition_to(RevealState::Dragging);
                RevealEngineApplyResponse::RowShown
            } else {
                // Grabbing a settling or revealed row resumes from its current
                // frame; the actions row (and any confirm latch) survives.
                engine.is_hide_in_flight = false;
                engine.transition_to(RevealState::Dragging);
                RevealEngineApplyResponse::DragResumed
            }
        });
    }

    /// The pointer moved while this row owns the drag. Applies the damped
    /// translation to the frame, clamped to `[-overscroll_cap, 0]`, and keeps
    /// the buttons in step.
    ///
    /// # Errors
    ///
    /// Returns an error if the event handling fails.
    pub fn on_drag_change(
        engine: &mut RevealEngine,
        arg_translation_x: f64,
    ) -> CommonResult<RevealEngineApplyResponse> {
        throws_with_return!({
            if engine.maybe_actions_row.is_none() {
                return ok!(RevealEngineApplyResponse::Ignored);
            }
            let scaled = x_offset(arg_translation_x * engine.config_options.scale);
            let target = engine.origin_frame_x + scaled;
            if target > x_offset(0.0) {
                // Rightward past closed pins the frame shut. The buttons keep
                // their last positions; they are fully covered anyway.
                engine.frame_x = x_offset(0.0);
            } else {
                let cap = engine.overscroll_cap.convert_to_open_offset();
                engine.frame_x = target.clamp(cap, x_offset(0.0));
                internal_impl::sync_row_progress(engine);
            }
            RevealEngineApplyResponse::Dragged
        });
    }

    /// The drag released. Picks open or closed from the release direction and
    /// starts the settle spring, seeded with the release velocity projected
    /// over the cell's current distance from closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the event handling fails.
    pub fn on_drag_end(
        engine: &mut RevealEngine,
        arg_translation_x: f64,
        arg_velocity_x: Velocity,
        arg_now: Instant,
    ) -> CommonResult<RevealEngineApplyResponse> {
        throws_with_return!({
            engine.is_panning = false;

            let Some(row) = engine.maybe_actions_row.as_ref() else {
                engine.reset();
                return ok!(RevealEngineApplyResponse::Ignored);
            };

            let scaled = x_offset(arg_translation_x * engine.config_options.scale);
            if engine.origin_frame_x + scaled >= x_offset(0.0) {
                // Dragged back to (or past) closed; nothing left to settle.
                engine.reset();
                return ok!(RevealEngineApplyResponse::SnappedClosed);
            }

            let target = if scaled < x_offset(0.0) {
                // Still moving left: commit to the full reveal.
                row.preferred_width.convert_to_open_offset()
            } else {
                x_offset(0.0)
            };
            // Spring seed: release velocity over the current distance from
            // closed, damped. A frame still at closed has nothing to project
            // against.
            let distance = engine.frame_x.abs();
            let seed = if distance < f64::EPSILON {
                0.0
            } else {
                arg_velocity_x.as_f64() / distance
                    * engine.config_options.velocity_damping
            };
            internal_impl::start_settle(
                engine,
                target,
                seed,
                engine.config_options.release_duration,
                arg_now,
            )?
        });
    }

    /// The drag was cut short (focus loss, stale gesture). Closes without
    /// animation.
    ///
    /// # Errors
    ///
    /// Returns an error if the event handling fails.
    pub fn on_drag_cancel(
        engine: &mut RevealEngine,
        arg_now: Instant,
    ) -> CommonResult<RevealEngineApplyResponse> {
        throws_with_return!({
            engine.is_panning = false;
            if Self::hide_swipe(engine, false, arg_now)? {
                RevealEngineApplyResponse::SnappedClosed
            } else {
                RevealEngineApplyResponse::Ignored
            }
        });
    }

    /// A tap landed on the revealed cell body. Closes, animated.
    ///
    /// # Errors
    ///
    /// Returns an error if the event handling fails.
    pub fn on_tap(
        engine: &mut RevealEngine,
        arg_now: Instant,
    ) -> CommonResult<RevealEngineApplyResponse> {
        throws_with_return!({
            if Self::hide_swipe(engine, true, arg_now)? {
                if engine.state.is_hidden() {
                    RevealEngineApplyResponse::SnappedClosed
                } else {
                    RevealEngineApplyResponse::SettleStarted
                }
            } else {
                RevealEngineApplyResponse::Ignored
            }
        });
    }

    /// A tap landed on the button at `arg_button_index` in the gutter.
    ///
    /// Routes through the row's confirm logic: a first tap on a confirm
    /// button latches it (and, when the confirm title needs more room than
    /// the row reserved, slides the cell further left); a confirmation-free
    /// or already-latched tap runs the action's handler.
    ///
    /// # Errors
    ///
    /// Returns an error if the event handling fails.
    pub fn tap_button(
        engine: &mut RevealEngine,
        arg_button_index: usize,
        arg_now: Instant,
    ) -> CommonResult<RevealEngineApplyResponse> {
        throws_with_return!({
            let maybe_outcome = match engine.maybe_actions_row.as_mut() {
                Some(row) => {
                    let outcome = row.tap(arg_button_index, engine.measurer.as_ref());
                    if outcome.is_none() {
                        tracing::warn!(
                            message = "tap on nonexistent action button",
                            button_index = %arg_button_index,
                            button_count = %row.buttons.len()
                        );
                    }
                    outcome
                }
                None => None,
            };
            let Some(outcome) = maybe_outcome else {
                return ok!(RevealEngineApplyResponse::Ignored);
            };

            match outcome {
                ConfirmOutcome::Latched { requires_grow } => {
                    if requires_grow {
                        let target = engine
                            .maybe_actions_row
                            .as_ref()
                            .map_or_else(
                                || x_offset(0.0),
                                |row| row.preferred_width.convert_to_open_offset(),
                            );
                        internal_impl::start_settle(
                            engine,
                            target,
                            0.0,
                            engine.config_options.confirm_grow_duration,
                            arg_now,
                        )?;
                    } else if let Some(row) = engine.maybe_actions_row.as_mut() {
                        // The confirm title fits the existing gutter; no cell
                        // movement, so the siblings drop out right away.
                        row.hide_non_confirming_buttons();
                    }
                    RevealEngineApplyResponse::ConfirmLatched { requires_grow }
                }
                ConfirmOutcome::Activated => {
                    let maybe_spec = engine
                        .maybe_actions_row
                        .as_ref()
                        .and_then(|row| row.buttons.get(arg_button_index))
                        .map(|button| button.spec.clone());
                    if let Some(spec) = maybe_spec {
                        if let Some(handler) = spec.maybe_handler.clone() {
                            handler(&spec);
                        }
                    }
                    RevealEngineApplyResponse::ActionActivated
                }
            }
        });
    }

    /// Closes the reveal. Returns whether a close actually started; a mid-pan
    /// row, an already-hidden row, and a hide already in flight all decline,
    /// so callers may fire this re-entrantly and indiscriminately.
    ///
    /// # Errors
    ///
    /// Returns an error if the event handling fails.
    pub fn hide_swipe(
        engine: &mut RevealEngine,
        arg_animated: bool,
        arg_now: Instant,
    ) -> CommonResult<bool> {
        throws_with_return!({
            if engine.is_panning
                || engine.state.is_hidden()
                || engine.is_hide_in_flight
            {
                return ok!(false);
            }
            if arg_animated {
                let response = internal_impl::start_settle(
                    engine,
                    x_offset(0.0),
                    0.0,
                    engine.config_options.hide_duration,
                    arg_now,
                )?;
                if matches!(response, RevealEngineApplyResponse::SettleStarted) {
                    engine.is_hide_in_flight = true;
                }
            } else {
                engine.reset();
            }
            true
        });
    }

    /// A frame tick while a settle runs. Samples the spring, moves the frame
    /// (clamped to bounds), keeps the buttons in step, and routes the
    /// completion exactly once: a finished close resets to `Hidden`; a
    /// finished open rests at `Revealed` (and, after a confirm grow, drops
    /// the non-confirming siblings).
    ///
    /// # Errors
    ///
    /// Returns an error if the event handling fails.
    pub fn on_settle_tick(
        engine: &mut RevealEngine,
        arg_now: Instant,
    ) -> CommonResult<RevealEngineApplyResponse> {
        throws_with_return!({
            let Some(sample) = engine.settle_animator.sample(arg_now) else {
                return ok!(RevealEngineApplyResponse::Ignored);
            };
            let cap = engine.overscroll_cap.convert_to_open_offset();
            engine.frame_x = sample.clamp(cap, x_offset(0.0));
            internal_impl::sync_row_progress(engine);

            if engine.settle_animator.take_completion_if_due(arg_now).is_none() {
                return ok!(RevealEngineApplyResponse::SettleTicked);
            }

            match engine.state {
                RevealState::SettlingClosed => {
                    engine.reset();
                }
                RevealState::SettlingOpen => {
                    engine.transition_to(RevealState::Revealed);
                    if let Some(row) = engine.maybe_actions_row.as_mut() {
                        if row.is_confirming() {
                            row.hide_non_confirming_buttons();
                        }
                    }
                }
                _ => {}
            }
            RevealEngineApplyResponse::SettleFinished
        });
    }
}

mod internal_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    /// Consults the host and builds the actions row for `arg_row_id`. Returns
    /// `false` (leaving the engine untouched and the row closed) when the
    /// host declines or supplies no actions.
    pub fn show_actions_row<S>(
        engine: &mut RevealEngine,
        mut_state: &mut S,
        arg_row_id: RowId,
    ) -> bool
    where
        S: EditActionsProvider + ListHostView + Debug,
    {
        engine.maybe_actions_row = None;

        if !mut_state.can_edit(arg_row_id) {
            tracing::debug!(
                message = "reveal declined by host",
                row_id = ?arg_row_id,
                reason = "can_edit"
            );
            return false;
        }
        let specs = mut_state.edit_actions(arg_row_id);
        if specs.is_empty() {
            tracing::debug!(
                message = "reveal declined by host",
                row_id = ?arg_row_id,
                reason = "no actions"
            );
            return false;
        }

        mut_state.deselect_all_rows();

        let row = ActionsRow::new(specs, engine.measurer.as_ref());
        tracing::debug!(
            message = "swipe actions shown",
            row_id = ?arg_row_id,
            button_count = %row.buttons.len(),
            preferred_width = ?row.preferred_width
        );
        engine.maybe_actions_row = Some(row);
        true
    }

    /// Starts (or snaps) a settle from the current frame to `arg_target`. Any
    /// new settle supersedes an in-flight hide; [`RevealEngineApi::hide_swipe`]
    /// re-arms its guard after calling this. Only a rightward (positive) seed
    /// feeds the spring; anything else rides the symmetric ease.
    pub fn start_settle(
        engine: &mut RevealEngine,
        arg_target: XOffset,
        arg_initial_velocity: f64,
        arg_duration: Duration,
        arg_now: Instant,
    ) -> CommonResult<RevealEngineApplyResponse> {
        throws_with_return!({
            engine.is_hide_in_flight = false;

            let outcome = engine.settle_animator.start(SettleStartSpec {
                from: engine.frame_x,
                to: arg_target,
                initial_velocity: arg_initial_velocity.max(0.0),
                duration: arg_duration,
                start_at: arg_now,
            });
            match outcome {
                SettleStartOutcome::Snapped => {
                    engine.reset();
                    RevealEngineApplyResponse::SnappedClosed
                }
                SettleStartOutcome::Started => {
                    if arg_target < x_offset(0.0) {
                        engine.transition_to(RevealState::SettlingOpen);
                    } else {
                        engine.transition_to(RevealState::SettlingClosed);
                    }
                    RevealEngineApplyResponse::SettleStarted
                }
            }
        });
    }

    /// Re-derives reveal progress from the frame and forwards it to the row.
    /// The row freezes itself while a confirm latch holds.
    pub fn sync_row_progress(engine: &mut RevealEngine) {
        let frame_x = engine.frame_x;
        let Some(row) = engine.maybe_actions_row.as_mut() else {
            return;
        };
        if row.preferred_width.as_f64() < f64::EPSILON {
            return;
        }
        row.set_progress(progress(frame_x.abs() / row.preferred_width.as_f64()));
    }
}




#[cfg(test)]
mod test_reveal_engine_api_confirm {
    use std::sync::{Arc,
                    atomic::{AtomicUsize, Ordering}};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ActionSpec, ConfirmPolicy, DEFAULT_CONFIRM_GROW_DURATION,
                DEFAULT_RELEASE_DURATION, reveal_width,
                test_swipe::mock_real_objects_for_swipe::{drag_open_to_revealed,
                                                          make_host,
                                                          make_host_with_script,
                                                          make_reveal_engine}};

    #[test]
    fn confirm_latch_grows_row_and_slides_cell_further_left() {
        let t0 = std::time::Instant::now();
        let mut engine = make_reveal_engine();
        // A lone "Delete" button: 10 columns, but its confirm title needs 18.
        let mut script = crate::InlineVec::<ActionSpec>::new();
        let mut delete = ActionSpec::new("Delete", None);
        delete.confirm_policy = ConfirmPolicy::RequireConfirmation {
            confirm_title: "Confirm delete".into(),
        };
        script.push(delete);
        let mut host = make_host_with_script(script);

        drag_open_to_revealed(&mut engine, &mut host, RowId(1), t0).unwrap();
        assert_eq!(engine.frame_x, x_offset(-10.0));

        let t1 = t0 + DEFAULT_RELEASE_DURATION * 2;
        let response = RevealEngineApi::tap_button(&mut engine, 0, t1).unwrap();
        assert_eq!(
            response,
            RevealEngineApplyResponse::ConfirmLatched {
                requires_grow: true
            }
        );
        assert_eq!(engine.state, RevealState::SettlingOpen);
        let row = engine.maybe_actions_row.as_ref().unwrap();
        assert_eq!(row.preferred_width, reveal_width(18.0));
        assert!(row.is_confirming());

        let response = RevealEngineApi::on_settle_tick(
            &mut engine,
            t1 + DEFAULT_CONFIRM_GROW_DURATION,
        )
        .unwrap();
        assert_eq!(response, RevealEngineApplyResponse::SettleFinished);
        assert_eq!(engine.state, RevealState::Revealed);
        assert_eq!(engine.frame_x, x_offset(-18.0));
        // The latch survives the grow settle.
        assert!(engine.maybe_actions_row.as_ref().unwrap().is_confirming());
    }

    #[test]
    fn confirm_latch_without_grow_hides_siblings_immediately() {
        let t0 = std::time::Instant::now();
        let mut engine = make_reveal_engine();
        // "Delete" + "More" reserve 18 columns, exactly what the confirm
        // title needs, so the cell does not move.
        let mut host = make_host();
        drag_open_to_revealed(&mut engine, &mut host, RowId(1), t0).unwrap();

        let t1 = t0 + DEFAULT_RELEASE_DURATION * 2;
        let response = RevealEngineApi::tap_button(&mut engine, 0, t1).unwrap();
        assert_eq!(
            response,
            RevealEngineApplyResponse::ConfirmLatched {
                requires_grow: false
            }
        );
        assert_eq!(engine.state, RevealState::Revealed);
        assert_eq!(engine.frame_x, x_offset(-18.0));
        let row = engine.maybe_actions_row.as_ref().unwrap();
        assert!(row.buttons[1].is_hidden);
        assert!(!row.buttons[0].is_hidden);
    }

    #[test]
    fn second_tap_on_latched_button_fires_handler() {
        let t0 = std::time::Instant::now();
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = fired.clone();

        let mut script = crate::InlineVec::<ActionSpec>::new();
        let mut delete = ActionSpec::new(
            "Delete",
            Some(Arc::new(move |_spec| {
                fired_clone.fetch_add(1, Ordering::SeqCst);
            })),
        );
        delete.confirm_policy = ConfirmPolicy::RequireConfirmation {
            confirm_title: "Sure?".into(),
        };
        script.push(delete);
        let mut host = make_host_with_script(script);

        let mut engine = make_reveal_engine();
        drag_open_to_revealed(&mut engine, &mut host, RowId(1), t0).unwrap();

        let t1 = t0 + DEFAULT_RELEASE_DURATION * 2;
        RevealEngineApi::tap_button(&mut engine, 0, t1).unwrap();
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        let response = RevealEngineApi::tap_button(&mut engine, 0, t1).unwrap();
        assert_eq!(response, RevealEngineApplyResponse::ActionActivated);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn tap_without_confirm_policy_fires_handler_at_once() {
        let t0 = std::time::Instant::now();
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = fired.clone();

        let mut script = crate::InlineVec::<ActionSpec>::new();
        script.push(ActionSpec::new(
            "More",
            Some(Arc::new(move |_spec| {
                fired_clone.fetch_add(1, Ordering::SeqCst);
            })),
        ));
        let mut host = make_host_with_script(script);

        let mut engine = make_reveal_engine();
        drag_open_to_revealed(&mut engine, &mut host, RowId(1), t0).unwrap();

        let response = RevealEngineApi::tap_button(
            &mut engine,
            0,
            t0 + DEFAULT_RELEASE_DURATION * 2,
        )
        .unwrap();
        assert_eq!(response, RevealEngineApplyResponse::ActionActivated);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!engine.maybe_actions_row.as_ref().unwrap().is_confirming());
    }

    #[test]
    fn tap_button_out_of_range_is_ignored() {
        let t0 = std::time::Instant::now();
        let mut engine = make_reveal_engine();
        let mut host = make_host();
        drag_open_to_revealed(&mut engine, &mut host, RowId(1), t0).unwrap();

        let response = RevealEngineApi::tap_button(&mut engine, 7, t0).unwrap();
        assert_eq!(response, RevealEngineApplyResponse::Ignored);
    }
}
