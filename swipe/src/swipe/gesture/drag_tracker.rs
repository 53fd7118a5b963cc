// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::{Duration, Instant};

use crate::{InlineVec, PointerButton, PointerInput, PointerInputKind, Pos, Velocity,
            velocity};

/// How far, in columns or rows, the pointer has to travel with the button held
/// before the press stops being a tap candidate and becomes a drag.
pub const DRAG_CLAIM_THRESHOLD: f64 = 1.0;

/// Release velocity is estimated over the trailing slice of the drag, so a
/// slow start does not dilute a fast finish.
pub const VELOCITY_ESTIMATION_WINDOW: Duration = Duration::from_millis(100);

/// What the raw pointer stream meant. The [`ListCoordinator`] routes these to
/// the per-row engines.
///
/// [`ListCoordinator`]: crate::ListCoordinator
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    /// The press crossed [`DRAG_CLAIM_THRESHOLD`]. The translations say which
    /// way the gesture is headed, so the caller can decide whether it owns the
    /// gesture (mostly horizontal) or cedes it (mostly vertical).
    Begin {
        origin: Pos,
        translation_x: f64,
        translation_y: f64,
        initial_velocity: Velocity,
    },
    /// The pointer moved while a claimed drag is in flight.
    Change { translation_x: f64 },
    /// The button came up on a claimed drag. `velocity_x` is the estimated
    /// release velocity in columns per second.
    End { translation_x: f64, velocity_x: Velocity },
    /// The drag was abandoned without a release: the press reappeared with a
    /// stale drag still dangling, or the embedder canceled (focus loss).
    Cancel,
    /// The button came up without ever crossing the threshold.
    Tap { at: Pos },
}

#[derive(Clone, Copy, Debug, Default)]
enum DragPhase {
    #[default]
    Idle,
    /// Button is down, threshold not crossed yet. Still a tap candidate.
    Pending { origin: Pos },
    /// Threshold crossed; every move reports a translation.
    Panning { origin: Pos },
    /// The caller declined the gesture. Swallow everything until the button
    /// comes up.
    Dismissed,
}

#[derive(Clone, Copy, Debug)]
struct DragSample {
    at: Instant,
    pos: Pos,
}

/// Turns the terminal's pointer stream (press, cell-quantized drag positions,
/// release) into tap / drag-begin / drag-change / drag-end events, with a
/// release velocity estimate.
///
/// Only the left button participates. Time comes in from the caller with each
/// input, so tests drive the tracker with synthetic clocks.
#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    phase: DragPhase,
    samples: InlineVec<DragSample>,
}

impl DragTracker {
    pub fn apply(
        &mut self,
        arg_input: PointerInput,
        arg_now: Instant,
    ) -> Option<DragEvent> {
        match arg_input.kind {
            PointerInputKind::Down(PointerButton::Left) => {
                self.on_down(arg_input.pos, arg_now)
            }
            PointerInputKind::Drag(PointerButton::Left) => {
                self.on_moved(arg_input.pos, arg_now)
            }
            PointerInputKind::Up(PointerButton::Left) => {
                self.on_up(arg_input.pos, arg_now)
            }
            _ => None,
        }
    }

    /// Declines the in-flight gesture (vertical intent, or the press landed
    /// somewhere this crate does not own). Everything up to and including the
    /// next release is swallowed.
    pub fn dismiss(&mut self) {
        if !matches!(self.phase, DragPhase::Idle) {
            self.phase = DragPhase::Dismissed;
        }
    }

    /// Abandons the gesture from outside the pointer stream, e.g. on terminal
    /// focus loss. Reports [`DragEvent::Cancel`] if a claimed drag was cut
    /// short.
    pub fn cancel(&mut self) -> Option<DragEvent> {
        let was_panning = matches!(self.phase, DragPhase::Panning { .. });
        self.phase = DragPhase::Idle;
        self.samples.clear();
        was_panning.then_some(DragEvent::Cancel)
    }

    fn on_down(&mut self, arg_pos: Pos, arg_now: Instant) -> Option<DragEvent> {
        let was_panning = matches!(self.phase, DragPhase::Panning { .. });
        self.phase = DragPhase::Pending { origin: arg_pos };
        self.samples.clear();
        self.push_sample(arg_pos, arg_now);
        if was_panning {
            // A missed release left a drag dangling; cut it off before the new
            // press takes over.
            return Some(DragEvent::Cancel);
        }
        None
    }

    fn on_moved(&mut self, arg_pos: Pos, arg_now: Instant) -> Option<DragEvent> {
        match self.phase {
            DragPhase::Idle | DragPhase::Dismissed => None,
            DragPhase::Pending { origin } => {
                self.push_sample(arg_pos, arg_now);
                let translation_x = arg_pos.horizontal_delta_from(origin);
                let translation_y = arg_pos.vertical_delta_from(origin);
                if translation_x.abs() < DRAG_CLAIM_THRESHOLD
                    && translation_y.abs() < DRAG_CLAIM_THRESHOLD
                {
                    return None;
                }
                self.phase = DragPhase::Panning { origin };
                Some(DragEvent::Begin {
                    origin,
                    translation_x,
                    translation_y,
                    initial_velocity: self.velocity_estimate(arg_now),
                })
            }
            DragPhase::Panning { origin } => {
                self.push_sample(arg_pos, arg_now);
                Some(DragEvent::Change {
                    translation_x: arg_pos.horizontal_delta_from(origin),
                })
            }
        }
    }

    fn on_up(&mut self, arg_pos: Pos, arg_now: Instant) -> Option<DragEvent> {
        match std::mem::take(&mut self.phase) {
            DragPhase::Idle | DragPhase::Dismissed => None,
            DragPhase::Pending { .. } => Some(DragEvent::Tap { at: arg_pos }),
            DragPhase::Panning { origin } => Some(DragEvent::End {
                translation_x: arg_pos.horizontal_delta_from(origin),
                velocity_x: self.velocity_estimate(arg_now),
            }),
        }
    }

    fn push_sample(&mut self, arg_pos: Pos, arg_now: Instant) {
        self.samples.push(DragSample {
            at: arg_now,
            pos: arg_pos,
        });
        self.samples.retain(|sample| {
            arg_now.saturating_duration_since(sample.at) <= VELOCITY_ESTIMATION_WINDOW
        });
    }

    /// Secant velocity across the samples inside the estimation window.
    fn velocity_estimate(&self, arg_now: Instant) -> Velocity {
        let mut recent = self.samples.iter().filter(|sample| {
            arg_now.saturating_duration_since(sample.at) <= VELOCITY_ESTIMATION_WINDOW
        });
        let Some(first) = recent.next() else {
            return velocity(0.0);
        };
        let Some(last) = recent.last() else {
            return velocity(0.0);
        };
        let span = last.at.saturating_duration_since(first.at).as_secs_f64();
        if span < f64::EPSILON {
            return velocity(0.0);
        }
        velocity(last.pos.horizontal_delta_from(first.pos) / span)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{col, row};

    fn down(x: u16, y: u16) -> PointerInput {
        PointerInput {
            pos: col(x) + row(y),
            kind: PointerInputKind::Down(PointerButton::Left),
        }
    }

    fn drag(x: u16, y: u16) -> PointerInput {
        PointerInput {
            pos: col(x) + row(y),
            kind: PointerInputKind::Drag(PointerButton::Left),
        }
    }

    fn up(x: u16, y: u16) -> PointerInput {
        PointerInput {
            pos: col(x) + row(y),
            kind: PointerInputKind::Up(PointerButton::Left),
        }
    }

    fn at(t0: Instant, ms: u64) -> Instant { t0 + Duration::from_millis(ms) }

    #[test]
    fn test_press_and_release_in_place_is_a_tap() {
        let t0 = Instant::now();
        let mut tracker = DragTracker::default();
        assert_eq!(tracker.apply(down(5, 3), t0), None);
        assert_eq!(
            tracker.apply(up(5, 3), at(t0, 50)),
            Some(DragEvent::Tap {
                at: col(5u16) + row(3u16)
            })
        );
        // The release reset the tracker.
        assert_eq!(tracker.apply(up(5, 3), at(t0, 60)), None);
    }

    #[test]
    fn test_horizontal_drag_begins_changes_and_ends() {
        let t0 = Instant::now();
        let mut tracker = DragTracker::default();
        tracker.apply(down(10, 5), t0);

        // Same cell, under the claim threshold.
        assert_eq!(tracker.apply(drag(10, 5), at(t0, 10)), None);

        let begin = tracker.apply(drag(9, 5), at(t0, 20));
        let Some(DragEvent::Begin {
            origin,
            translation_x,
            translation_y,
            ..
        }) = begin
        else {
            panic!("expected Begin, got {begin:?}");
        };
        assert_eq!(origin, col(10u16) + row(5u16));
        assert_eq!(translation_x, -1.0);
        assert_eq!(translation_y, 0.0);

        assert_eq!(
            tracker.apply(drag(7, 5), at(t0, 40)),
            Some(DragEvent::Change {
                translation_x: -3.0
            })
        );

        let end = tracker.apply(up(6, 5), at(t0, 60));
        let Some(DragEvent::End {
            translation_x,
            velocity_x,
        }) = end
        else {
            panic!("expected End, got {end:?}");
        };
        assert_eq!(translation_x, -4.0);
        assert!(!velocity_x.is_rightward());
    }

    #[test]
    fn test_release_velocity_is_estimated_over_trailing_window() {
        let t0 = Instant::now();
        let mut tracker = DragTracker::default();
        tracker.apply(down(20, 5), t0);
        tracker.apply(drag(15, 5), at(t0, 50));
        tracker.apply(drag(10, 5), at(t0, 100));

        let end = tracker.apply(up(10, 5), at(t0, 100));
        let Some(DragEvent::End { velocity_x, .. }) = end else {
            panic!("expected End, got {end:?}");
        };
        // 10 columns leftward over 100ms.
        assert!((velocity_x.as_f64() + 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_dismissed_gesture_is_swallowed_until_release() {
        let t0 = Instant::now();
        let mut tracker = DragTracker::default();
        tracker.apply(down(10, 5), t0);

        // Mostly vertical: the caller sees the Begin, declines it, dismisses.
        let begin = tracker.apply(drag(10, 7), at(t0, 20));
        assert!(matches!(begin, Some(DragEvent::Begin { .. })));
        tracker.dismiss();

        assert_eq!(tracker.apply(drag(8, 7), at(t0, 40)), None);
        // No Tap either; the gesture was spoken for.
        assert_eq!(tracker.apply(up(8, 7), at(t0, 60)), None);

        // The next press starts clean.
        tracker.apply(down(10, 5), at(t0, 100));
        assert!(matches!(
            tracker.apply(drag(8, 5), at(t0, 120)),
            Some(DragEvent::Begin { .. })
        ));
    }

    #[test]
    fn test_stale_drag_is_canceled_by_the_next_press() {
        let t0 = Instant::now();
        let mut tracker = DragTracker::default();
        tracker.apply(down(10, 5), t0);
        tracker.apply(drag(8, 5), at(t0, 20));

        // The Up never arrived; a fresh press cuts the old drag off.
        assert_eq!(tracker.apply(down(12, 6), at(t0, 500)), Some(DragEvent::Cancel));
        assert!(matches!(
            tracker.apply(drag(10, 6), at(t0, 520)),
            Some(DragEvent::Begin { .. })
        ));
    }

    #[test]
    fn test_cancel_reports_only_when_a_drag_was_claimed() {
        let t0 = Instant::now();
        let mut tracker = DragTracker::default();
        assert_eq!(tracker.cancel(), None);

        tracker.apply(down(10, 5), t0);
        assert_eq!(tracker.cancel(), None);

        tracker.apply(down(10, 5), at(t0, 100));
        tracker.apply(drag(8, 5), at(t0, 120));
        assert_eq!(tracker.cancel(), Some(DragEvent::Cancel));
    }

    #[test]
    fn test_non_left_buttons_are_ignored() {
        let t0 = Instant::now();
        let mut tracker = DragTracker::default();
        let right_down = PointerInput {
            pos: col(5u16) + row(5u16),
            kind: PointerInputKind::Down(PointerButton::Right),
        };
        assert_eq!(tracker.apply(right_down, t0), None);
        // No press on record, so the drag goes nowhere.
        assert_eq!(tracker.apply(drag(3, 5), at(t0, 20)), None);
    }
}
