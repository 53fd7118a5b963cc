// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::HashMap, fmt::Debug, time::Instant};

use crate::{CommonResult, DragEvent, DragTracker, EditActionsProvider, ListHostView,
            PointerButton, PointerInput, PointerInputKind, RevealEngine,
            RevealEngineApi, RevealEngineApplyResponse, RevealEngineConfigOptions,
            RowId, Velocity, ok, throws_with_return, x_offset};

/// Tells the embedder what to do with a pointer event after the swipe layer
/// has seen it: whether it was consumed, and if so whether a render is
/// necessary.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum EventPropagation {
    ConsumedRender,
    Consumed,
    Propagate,
}

/// Owns the swipe interaction for a whole list: one [`RevealEngine`] per
/// attached row, plus the [`DragTracker`] that turns the raw pointer stream
/// into gestures.
///
/// The embedder feeds every pointer event through
/// [`ListCoordinator::apply_event`] and every animation frame through
/// [`ListCoordinator::tick`]. The coordinator routes gestures to the row the
/// press landed on and enforces the one-open-row rule: a fresh grab or a
/// scroll closes every other open row, so at most one row ever sits revealed.
///
/// Engines are keyed by the embedder's stable [`RowId`], so they survive
/// scrolling and reordering. Attach rows as they gain swipe actions and
/// detach them when they leave the list.
#[derive(Debug)]
pub struct ListCoordinator {
    pub config_options: RevealEngineConfigOptions,
    pub drag_tracker: DragTracker,
    rows: HashMap<RowId, RevealEngine>,
    /// The row under the most recent press. Gesture events that follow route
    /// here.
    maybe_contact_row: Option<RowId>,
}

impl Default for ListCoordinator {
    fn default() -> Self { ListCoordinator::new(Default::default()) }
}

impl ListCoordinator {
    #[must_use]
    pub fn new(config_options: RevealEngineConfigOptions) -> Self {
        Self {
            config_options,
            drag_tracker: DragTracker::default(),
            rows: HashMap::new(),
            maybe_contact_row: None,
        }
    }

    /// Gives `arg_row_id` a reveal engine (replacing any existing one, which
    /// drops its state).
    pub fn attach_row(&mut self, arg_row_id: RowId) {
        self.rows
            .insert(arg_row_id, RevealEngine::new(self.config_options));
    }

    /// Drops the engine for `arg_row_id`. Returns whether one was attached.
    pub fn detach_row(&mut self, arg_row_id: RowId) -> bool {
        self.rows.remove(&arg_row_id).is_some()
    }

    #[must_use]
    pub fn engine_for_row(&self, arg_row_id: RowId) -> Option<&RevealEngine> {
        self.rows.get(&arg_row_id)
    }

    /// Routes one pointer event.
    ///
    /// - A scroll closes every open row (animated) and propagates, so the
    ///   list still scrolls.
    /// - A press records which row was hit and propagates.
    /// - A horizontal drag is claimed for that row; a vertical one is ceded
    ///   to the list for the rest of the press.
    /// - A tap on a revealed row hits buttons in the gutter or closes the
    ///   row; a tap anywhere else closes whatever is open, or propagates if
    ///   nothing is.
    ///
    /// # Errors
    ///
    /// Returns an error if the event handling fails.
    pub fn apply_event<S>(
        &mut self,
        mut_state: &mut S,
        arg_input: PointerInput,
        arg_now: Instant,
    ) -> CommonResult<EventPropagation>
    where
        S: EditActionsProvider + ListHostView + Debug,
    {
        throws_with_return!({
            if matches!(
                arg_input.kind,
                PointerInputKind::ScrollUp
                    | PointerInputKind::ScrollDown
                    | PointerInputKind::ScrollLeft
                    | PointerInputKind::ScrollRight
            ) {
                self.on_scroll_begin(mut_state, arg_now)?;
                return ok!(EventPropagation::Propagate);
            }

            let maybe_event = self.drag_tracker.apply(arg_input, arg_now);

            if matches!(arg_input.kind, PointerInputKind::Down(PointerButton::Left)) {
                // A stale Cancel (missed release) belongs to the previous
                // contact row; route it before repointing at the new press.
                let mut did_reset = false;
                if matches!(maybe_event, Some(DragEvent::Cancel)) {
                    did_reset = internal_impl::route_cancel(self, arg_now)?;
                }
                self.maybe_contact_row = mut_state.row_at(arg_input.pos);
                return ok!(if did_reset {
                    EventPropagation::ConsumedRender
                } else {
                    EventPropagation::Propagate
                });
            }

            match maybe_event {
                Some(DragEvent::Begin {
                    translation_x,
                    translation_y,
                    initial_velocity,
                    ..
                }) => internal_impl::on_begin(
                    self,
                    mut_state,
                    translation_x,
                    translation_y,
                    initial_velocity,
                    arg_now,
                )?,
                Some(DragEvent::Change { translation_x }) => {
                    internal_impl::on_change(self, translation_x)?
                }
                Some(DragEvent::End {
                    translation_x,
                    velocity_x,
                }) => internal_impl::on_end(self, translation_x, velocity_x, arg_now)?,
                Some(DragEvent::Cancel) => {
                    if internal_impl::route_cancel(self, arg_now)? {
                        EventPropagation::ConsumedRender
                    } else {
                        EventPropagation::Consumed
                    }
                }
                Some(DragEvent::Tap { at }) => {
                    internal_impl::on_tap(self, mut_state, at, arg_now)?
                }
                None => EventPropagation::Propagate,
            }
        });
    }

    /// Advances every running settle to `arg_now`. Returns whether any frame
    /// moved, i.e. whether the embedder should repaint.
    ///
    /// # Errors
    ///
    /// Returns an error if the event handling fails.
    pub fn tick(&mut self, arg_now: Instant) -> CommonResult<bool> {
        throws_with_return!({
            let mut needs_paint = false;
            for engine in self.rows.values_mut() {
                let response = RevealEngineApi::on_settle_tick(engine, arg_now)?;
                if matches!(
                    response,
                    RevealEngineApplyResponse::SettleTicked
                        | RevealEngineApplyResponse::SettleFinished
                ) {
                    needs_paint = true;
                }
            }
            needs_paint
        });
    }

    /// Closes every open row. Returns whether any close started. For the
    /// embedder's own triggers, e.g. the list data changing under an open
    /// row.
    ///
    /// # Errors
    ///
    /// Returns an error if the event handling fails.
    pub fn hide_all(
        &mut self,
        arg_animated: bool,
        arg_now: Instant,
    ) -> CommonResult<bool> {
        internal_impl::hide_all_except(self, None, arg_animated, arg_now)
    }

    /// The host list is starting its own scroll (wheel, keyboard, scrollbar).
    /// Closes every open row: rows still on screen settle closed, rows the
    /// scroll already carried away reset instantly. Wheel events arriving
    /// through [`ListCoordinator::apply_event`] reach this on their own; call
    /// it directly for scrolls the pointer stream never sees.
    ///
    /// # Errors
    ///
    /// Returns an error if the event handling fails.
    pub fn on_scroll_begin<S>(
        &mut self,
        mut_state: &mut S,
        arg_now: Instant,
    ) -> CommonResult<bool>
    where
        S: ListHostView,
    {
        internal_impl::hide_others_for_gesture(self, mut_state, None, arg_now)
    }

    /// Abandons any claimed drag from outside the pointer stream (terminal
    /// focus loss). Returns whether a row reset and needs a repaint.
    ///
    /// # Errors
    ///
    /// Returns an error if the event handling fails.
    pub fn cancel_active_drag(&mut self, arg_now: Instant) -> CommonResult<bool> {
        throws_with_return!({
            let mut did_reset = false;
            if matches!(self.drag_tracker.cancel(), Some(DragEvent::Cancel)) {
                did_reset = internal_impl::route_cancel(self, arg_now)?;
            }
            self.maybe_contact_row = None;
            did_reset
        });
    }
}

mod internal_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;
    use crate::Pos;

    pub fn contact_engine_mut(
        coordinator: &mut ListCoordinator,
    ) -> Option<&mut RevealEngine> {
        let row_id = coordinator.maybe_contact_row?;
        coordinator.rows.get_mut(&row_id)
    }

    /// Closes every attached row other than `arg_keep`. Returns whether any
    /// close started.
    pub fn hide_all_except(
        coordinator: &mut ListCoordinator,
        arg_keep: Option<RowId>,
        arg_animated: bool,
        arg_now: Instant,
    ) -> CommonResult<bool> {
        throws_with_return!({
            let mut any_started = false;
            for (row_id, engine) in &mut coordinator.rows {
                if Some(*row_id) == arg_keep {
                    continue;
                }
                if RevealEngineApi::hide_swipe(engine, arg_animated, arg_now)? {
                    any_started = true;
                }
            }
            any_started
        });
    }

    /// Gesture-triggered variant of [`hide_all_except`]: rows the host still
    /// has on screen settle closed, rows that scrolled out of view reset
    /// instantly since nobody watches them settle.
    pub fn hide_others_for_gesture<S>(
        coordinator: &mut ListCoordinator,
        mut_state: &mut S,
        arg_keep: Option<RowId>,
        arg_now: Instant,
    ) -> CommonResult<bool>
    where
        S: ListHostView,
    {
        throws_with_return!({
            let visible = mut_state.visible_rows();
            let mut any_started = false;
            for (row_id, engine) in &mut coordinator.rows {
                if Some(*row_id) == arg_keep {
                    continue;
                }
                let animated = visible.contains(row_id);
                if RevealEngineApi::hide_swipe(engine, animated, arg_now)? {
                    any_started = true;
                }
            }
            any_started
        });
    }

    /// The drag crossed the claim threshold over the contact row: decide
    /// whether the swipe layer owns this gesture.
    pub fn on_begin<S>(
        coordinator: &mut ListCoordinator,
        mut_state: &mut S,
        arg_translation_x: f64,
        arg_translation_y: f64,
        arg_initial_velocity: Velocity,
        arg_now: Instant,
    ) -> CommonResult<EventPropagation>
    where
        S: EditActionsProvider + ListHostView + Debug,
    {
        throws_with_return!({
            let Some(contact_row) = coordinator.maybe_contact_row else {
                coordinator.drag_tracker.dismiss();
                return ok!(EventPropagation::Propagate);
            };
            if !coordinator.rows.contains_key(&contact_row) {
                coordinator.drag_tracker.dismiss();
                return ok!(EventPropagation::Propagate);
            }

            // A fresh grab on a closed row closes everything else first, even
            // if the gesture then turns out to be vertical.
            let contact_is_hidden = coordinator
                .rows
                .get(&contact_row)
                .is_some_and(|engine| engine.state.is_hidden());
            if contact_is_hidden {
                hide_others_for_gesture(
                    coordinator,
                    mut_state,
                    Some(contact_row),
                    arg_now,
                )?;
            }

            if arg_translation_y.abs() > arg_translation_x.abs() {
                // Vertical intent; the list owns the rest of this press.
                coordinator.drag_tracker.dismiss();
                return ok!(EventPropagation::Propagate);
            }

            let Some(engine) = coordinator.rows.get_mut(&contact_row) else {
                return ok!(EventPropagation::Propagate);
            };
            let response = RevealEngineApi::on_drag_begin(
                engine,
                mut_state,
                contact_row,
                arg_initial_velocity,
            )?;
            if matches!(response, RevealEngineApplyResponse::Ignored) {
                // Claimed but inert (rightward grab, or the host declined).
                // Swallow the drag so the list does not scroll under it.
                return ok!(EventPropagation::Consumed);
            }
            RevealEngineApi::on_drag_change(engine, arg_translation_x)?;
            EventPropagation::ConsumedRender
        });
    }

    pub fn on_change(
        coordinator: &mut ListCoordinator,
        arg_translation_x: f64,
    ) -> CommonResult<EventPropagation> {
        throws_with_return!({
            let Some(engine) = contact_engine_mut(coordinator) else {
                return ok!(EventPropagation::Propagate);
            };
            let response = RevealEngineApi::on_drag_change(engine, arg_translation_x)?;
            match response {
                RevealEngineApplyResponse::Ignored => EventPropagation::Consumed,
                _ => EventPropagation::ConsumedRender,
            }
        });
    }

    pub fn on_end(
        coordinator: &mut ListCoordinator,
        arg_translation_x: f64,
        arg_velocity_x: Velocity,
        arg_now: Instant,
    ) -> CommonResult<EventPropagation> {
        throws_with_return!({
            let Some(engine) = contact_engine_mut(coordinator) else {
                return ok!(EventPropagation::Propagate);
            };
            let response = RevealEngineApi::on_drag_end(
                engine,
                arg_translation_x,
                arg_velocity_x,
                arg_now,
            )?;
            match response {
                RevealEngineApplyResponse::Ignored => EventPropagation::Consumed,
                _ => EventPropagation::ConsumedRender,
            }
        });
    }

    pub fn route_cancel(
        coordinator: &mut ListCoordinator,
        arg_now: Instant,
    ) -> CommonResult<bool> {
        throws_with_return!({
            let Some(engine) = contact_engine_mut(coordinator) else {
                return ok!(false);
            };
            let response = RevealEngineApi::on_drag_cancel(engine, arg_now)?;
            matches!(response, RevealEngineApplyResponse::SnappedClosed)
        });
    }

    /// The press came back up without moving. On a revealed row, resolve the
    /// tap against the gutter (button) or the cell body (close); anywhere
    /// else a tap closes whatever is open.
    pub fn on_tap<S>(
        coordinator: &mut ListCoordinator,
        mut_state: &mut S,
        arg_at: Pos,
        arg_now: Instant,
    ) -> CommonResult<EventPropagation>
    where
        S: EditActionsProvider + ListHostView + Debug,
    {
        throws_with_return!({
            if let Some(row_id) = coordinator.maybe_contact_row {
                if let Some(engine) = coordinator.rows.get_mut(&row_id) {
                    if !engine.state.is_hidden() {
                        // The gutter starts where the shifted cell ends.
                        let gutter_start = mut_state.visible_width().as_f64()
                            + engine.frame_x.as_f64();
                        let tap_col = arg_at.col_index.as_f64();
                        let maybe_button_index = if tap_col >= gutter_start {
                            engine.maybe_actions_row.as_ref().and_then(|row| {
                                row.button_at(x_offset(tap_col - gutter_start))
                            })
                        } else {
                            None
                        };
                        let response = match maybe_button_index {
                            Some(index) => {
                                RevealEngineApi::tap_button(engine, index, arg_now)?
                            }
                            None => RevealEngineApi::on_tap(engine, arg_now)?,
                        };
                        return ok!(match response {
                            RevealEngineApplyResponse::Ignored => {
                                EventPropagation::Consumed
                            }
                            _ => EventPropagation::ConsumedRender,
                        });
                    }
                }
            }

            // Tap landed on a closed or unattached row. If anything is open
            // this tap just closes it; otherwise the embedder gets it.
            if hide_others_for_gesture(coordinator, mut_state, None, arg_now)? {
                EventPropagation::Consumed
            } else {
                EventPropagation::Propagate
            }
        });
    }
}

#[cfg(test)]
mod test_list_coordinator_drag {
    use std::time::{Duration, Instant};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{DEFAULT_RELEASE_DURATION, RevealState,
                test_swipe::mock_real_objects_for_swipe::{drag_to, make_coordinator,
                                                          make_host, press, release}};

    #[test]
    fn drag_on_closed_row_opens_it_end_to_end() {
        let t0 = Instant::now();
        let mut coordinator = make_coordinator();
        let mut host = make_host();

        let response = coordinator
            .apply_event(&mut host, press(30, 1), t0)
            .unwrap();
        assert_eq!(response, EventPropagation::Propagate);

        let response = coordinator
            .apply_event(&mut host, drag_to(26, 1), t0 + Duration::from_millis(16))
            .unwrap();
        assert_eq!(response, EventPropagation::ConsumedRender);
        let engine = coordinator.engine_for_row(RowId(1)).unwrap();
        assert_eq!(engine.state, RevealState::Dragging);
        // 4 columns of leftward travel, damped by 0.75.
        assert_eq!(engine.frame_x, x_offset(-3.0));

        let t_release = t0 + Duration::from_millis(32);
        let response = coordinator
            .apply_event(&mut host, release(22, 1), t_release)
            .unwrap();
        assert_eq!(response, EventPropagation::ConsumedRender);
        assert_eq!(
            coordinator.engine_for_row(RowId(1)).unwrap().state,
            RevealState::SettlingOpen
        );

        let did_paint = coordinator
            .tick(t_release + DEFAULT_RELEASE_DURATION)
            .unwrap();
        assert!(did_paint);
        let engine = coordinator.engine_for_row(RowId(1)).unwrap();
        assert_eq!(engine.state, RevealState::Revealed);
        assert_eq!(engine.frame_x, x_offset(-18.0));

        // Nothing left running; ticks stop asking for paints.
        let did_paint = coordinator
            .tick(t_release + DEFAULT_RELEASE_DURATION * 2)
            .unwrap();
        assert!(!did_paint);
    }

    #[test]
    fn vertical_drag_is_ceded_to_the_list() {
        let t0 = Instant::now();
        let mut coordinator = make_coordinator();
        let mut host = make_host();

        coordinator.apply_event(&mut host, press(10, 1), t0).unwrap();
        let response = coordinator
            .apply_event(&mut host, drag_to(10, 3), t0 + Duration::from_millis(16))
            .unwrap();
        assert_eq!(response, EventPropagation::Propagate);

        // The rest of the press stays with the list.
        let response = coordinator
            .apply_event(&mut host, drag_to(6, 3), t0 + Duration::from_millis(32))
            .unwrap();
        assert_eq!(response, EventPropagation::Propagate);
        let response = coordinator
            .apply_event(&mut host, release(6, 3), t0 + Duration::from_millis(48))
            .unwrap();
        assert_eq!(response, EventPropagation::Propagate);

        assert_eq!(
            coordinator.engine_for_row(RowId(1)).unwrap().state,
            RevealState::Hidden
        );
    }

    #[test]
    fn rightward_drag_on_closed_row_is_claimed_but_inert() {
        let t0 = Instant::now();
        let mut coordinator = make_coordinator();
        let mut host = make_host();

        coordinator.apply_event(&mut host, press(10, 1), t0).unwrap();
        let response = coordinator
            .apply_event(&mut host, drag_to(14, 1), t0 + Duration::from_millis(16))
            .unwrap();
        assert_eq!(response, EventPropagation::Consumed);
        let engine = coordinator.engine_for_row(RowId(1)).unwrap();
        assert_eq!(engine.state, RevealState::Hidden);
        assert!(engine.maybe_actions_row.is_none());

        let response = coordinator
            .apply_event(&mut host, release(16, 1), t0 + Duration::from_millis(32))
            .unwrap();
        assert_eq!(response, EventPropagation::Consumed);
        assert_eq!(
            coordinator.engine_for_row(RowId(1)).unwrap().state,
            RevealState::Hidden
        );
    }

    #[test]
    fn drag_on_unattached_row_propagates() {
        let t0 = Instant::now();
        let mut coordinator = make_coordinator();
        let mut host = make_host();
        assert!(coordinator.detach_row(RowId(3)));
        assert!(coordinator.engine_for_row(RowId(3)).is_none());

        coordinator.apply_event(&mut host, press(30, 3), t0).unwrap();
        let response = coordinator
            .apply_event(&mut host, drag_to(26, 3), t0 + Duration::from_millis(16))
            .unwrap();
        assert_eq!(response, EventPropagation::Propagate);
    }
}

#[cfg(test)]
mod test_list_coordinator_exclusion {
    use std::time::{Duration, Instant};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{DEFAULT_HIDE_DURATION, DEFAULT_RELEASE_DURATION, RevealState,
                test_swipe::mock_real_objects_for_swipe::{drag_to, make_coordinator,
                                                          make_host,
                                                          open_row_via_coordinator,
                                                          press, release,
                                                          scroll_down}};

    fn open_row_count(coordinator: &ListCoordinator) -> usize {
        (0u64..4)
            .filter_map(|id| coordinator.engine_for_row(RowId(id)))
            .filter(|engine| !engine.state.is_hidden())
            .count()
    }

    #[test]
    fn grabbing_a_second_row_closes_the_first() {
        let t0 = Instant::now();
        let mut coordinator = make_coordinator();
        let mut host = make_host();
        open_row_via_coordinator(&mut coordinator, &mut host, 1, t0).unwrap();
        assert_eq!(
            coordinator.engine_for_row(RowId(1)).unwrap().state,
            RevealState::Revealed
        );

        let t1 = t0 + Duration::from_secs(1);
        coordinator.apply_event(&mut host, press(30, 2), t1).unwrap();
        let response = coordinator
            .apply_event(&mut host, drag_to(26, 2), t1 + Duration::from_millis(16))
            .unwrap();
        assert_eq!(response, EventPropagation::ConsumedRender);

        // The old row is on its way out while the new drag runs.
        assert_eq!(
            coordinator.engine_for_row(RowId(1)).unwrap().state,
            RevealState::SettlingClosed
        );
        assert_eq!(
            coordinator.engine_for_row(RowId(2)).unwrap().state,
            RevealState::Dragging
        );

        coordinator
            .apply_event(&mut host, release(22, 2), t1 + Duration::from_millis(32))
            .unwrap();
        coordinator
            .tick(t1 + Duration::from_millis(32) + DEFAULT_HIDE_DURATION)
            .unwrap();
        coordinator
            .tick(t1 + Duration::from_secs(1) + DEFAULT_RELEASE_DURATION)
            .unwrap();

        assert_eq!(
            coordinator.engine_for_row(RowId(1)).unwrap().state,
            RevealState::Hidden
        );
        assert_eq!(
            coordinator.engine_for_row(RowId(2)).unwrap().state,
            RevealState::Revealed
        );
        assert_eq!(open_row_count(&coordinator), 1);
    }

    #[test]
    fn scroll_closes_everything_and_propagates() {
        let t0 = Instant::now();
        let mut coordinator = make_coordinator();
        let mut host = make_host();
        open_row_via_coordinator(&mut coordinator, &mut host, 1, t0).unwrap();

        let t1 = t0 + Duration::from_secs(1);
        let response = coordinator
            .apply_event(&mut host, scroll_down(10, 2), t1)
            .unwrap();
        assert_eq!(response, EventPropagation::Propagate);
        assert_eq!(
            coordinator.engine_for_row(RowId(1)).unwrap().state,
            RevealState::SettlingClosed
        );

        coordinator.tick(t1 + DEFAULT_HIDE_DURATION).unwrap();
        assert_eq!(open_row_count(&coordinator), 0);
    }

    #[test]
    fn scroll_begin_hook_closes_and_is_reentrant_safe() {
        let t0 = Instant::now();
        let mut coordinator = make_coordinator();
        let mut host = make_host();
        open_row_via_coordinator(&mut coordinator, &mut host, 1, t0).unwrap();

        let t1 = t0 + Duration::from_secs(1);
        assert!(coordinator.on_scroll_begin(&mut host, t1).unwrap());
        assert_eq!(
            coordinator.engine_for_row(RowId(1)).unwrap().state,
            RevealState::SettlingClosed
        );

        // The close is already in flight; asking again starts nothing.
        assert!(
            !coordinator
                .on_scroll_begin(&mut host, t1 + Duration::from_millis(50))
                .unwrap()
        );

        coordinator.tick(t1 + DEFAULT_HIDE_DURATION).unwrap();
        assert_eq!(open_row_count(&coordinator), 0);
    }

    #[test]
    fn row_scrolled_out_of_view_is_closed_instantly_not_animated() {
        let t0 = Instant::now();
        let mut coordinator = make_coordinator();
        let mut host = make_host();
        open_row_via_coordinator(&mut coordinator, &mut host, 1, t0).unwrap();

        // The list scrolled; row 1 is no longer on screen.
        host.visible.retain(|id| *id != RowId(1));

        let t1 = t0 + Duration::from_secs(1);
        assert!(coordinator.on_scroll_begin(&mut host, t1).unwrap());
        assert_eq!(
            coordinator.engine_for_row(RowId(1)).unwrap().state,
            RevealState::Hidden
        );
        assert_eq!(open_row_count(&coordinator), 0);
    }

    #[test]
    fn tap_on_another_row_closes_the_open_one() {
        let t0 = Instant::now();
        let mut coordinator = make_coordinator();
        let mut host = make_host();
        open_row_via_coordinator(&mut coordinator, &mut host, 1, t0).unwrap();

        let t1 = t0 + Duration::from_secs(1);
        coordinator.apply_event(&mut host, press(5, 3), t1).unwrap();
        let response = coordinator
            .apply_event(&mut host, release(5, 3), t1 + Duration::from_millis(40))
            .unwrap();
        assert_eq!(response, EventPropagation::Consumed);
        assert_eq!(
            coordinator.engine_for_row(RowId(1)).unwrap().state,
            RevealState::SettlingClosed
        );
    }

    #[test]
    fn tap_with_nothing_open_propagates() {
        let t0 = Instant::now();
        let mut coordinator = make_coordinator();
        let mut host = make_host();

        coordinator.apply_event(&mut host, press(5, 2), t0).unwrap();
        let response = coordinator
            .apply_event(&mut host, release(5, 2), t0 + Duration::from_millis(40))
            .unwrap();
        assert_eq!(response, EventPropagation::Propagate);
    }
}

#[cfg(test)]
mod test_list_coordinator_tap {
    use std::time::{Duration, Instant};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{RevealState,
                test_swipe::mock_real_objects_for_swipe::{make_coordinator, make_host,
                                                          open_row_via_coordinator,
                                                          press, release}};

    #[test]
    fn tap_in_the_gutter_lands_on_a_button() {
        let t0 = Instant::now();
        let mut coordinator = make_coordinator();
        let mut host = make_host();
        open_row_via_coordinator(&mut coordinator, &mut host, 1, t0).unwrap();
        // Viewport 40, frame -18: the gutter spans columns 22..40. Column 23
        // falls on "Delete", which wants confirmation.
        let t1 = t0 + Duration::from_secs(1);
        coordinator.apply_event(&mut host, press(23, 1), t1).unwrap();
        let response = coordinator
            .apply_event(&mut host, release(23, 1), t1 + Duration::from_millis(40))
            .unwrap();
        assert_eq!(response, EventPropagation::ConsumedRender);

        let engine = coordinator.engine_for_row(RowId(1)).unwrap();
        assert_eq!(engine.state, RevealState::Revealed);
        let row = engine.maybe_actions_row.as_ref().unwrap();
        assert!(row.is_confirming());
        assert_eq!(row.buttons[0].displayed_title.as_str(), "Confirm delete");
        assert!(row.buttons[1].is_hidden);
    }

    #[test]
    fn tap_on_the_cell_body_closes_the_row() {
        let t0 = Instant::now();
        let mut coordinator = make_coordinator();
        let mut host = make_host();
        open_row_via_coordinator(&mut coordinator, &mut host, 1, t0).unwrap();

        let t1 = t0 + Duration::from_secs(1);
        coordinator.apply_event(&mut host, press(5, 1), t1).unwrap();
        let response = coordinator
            .apply_event(&mut host, release(5, 1), t1 + Duration::from_millis(40))
            .unwrap();
        assert_eq!(response, EventPropagation::ConsumedRender);
        assert_eq!(
            coordinator.engine_for_row(RowId(1)).unwrap().state,
            RevealState::SettlingClosed
        );
    }
}
