// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::{Duration, Instant};

use crate::XOffset;

/// Normalized angular frequency of the settle spring. At this stiffness the
/// residual error at the end of the nominal duration is under half a percent of
/// the travel, and the final sample lands on the target exactly.
pub const SETTLE_STIFFNESS: f64 = 8.0;

/// Everything a settle needs, captured at release time. `start_at` comes from
/// the caller so samples are a pure function of the clock and tests never have
/// to sleep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettleStartSpec {
    pub from: XOffset,
    pub to: XOffset,
    /// Release seed in travels per second: `1.0` crosses the whole settle
    /// distance in one second, positive pushes toward [`Self::to`]. Zero
    /// gives the symmetric ease.
    pub initial_velocity: f64,
    pub duration: Duration,
    pub start_at: Instant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleStartOutcome {
    /// The spring is running; sample it every tick.
    Started,
    /// Close target, and the frame was already within the snap threshold of
    /// closed. Nothing was started; the caller closes instantly.
    Snapped,
}

/// Handed out exactly once when a settle runs to completion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettleCompletion {
    pub target: XOffset,
}

/// Critically damped spring that carries the cell frame from its release
/// position to the settle target.
///
/// The spring is evaluated in closed form against caller-supplied [`Instant`]s
/// rather than integrated per tick, so a stalled or bursty tick loop cannot
/// change where the frame ends up, only how smooth the ride looks. In
/// normalized time `tau = elapsed / duration` the remaining error fraction is
///
/// ```text
/// r(tau) = (1 + (stiffness - v) * tau) * exp(-stiffness * tau)
/// ```
///
/// where `v` is the initial velocity normalized to travel per `tau`. A fling
/// past `stiffness + 1` overshoots the target and gets pulled back, which reads
/// as the bounce the release gesture deserves.
#[derive(Clone, Debug)]
pub struct SettleAnimator {
    maybe_spec: Option<SettleStartSpec>,
    /// Close settles starting within this many columns of closed skip the
    /// spring entirely.
    snap_to_closed_threshold: f64,
}

impl SettleAnimator {
    #[must_use]
    pub fn new(arg_snap_to_closed_threshold: f64) -> Self {
        Self {
            maybe_spec: None,
            snap_to_closed_threshold: arg_snap_to_closed_threshold,
        }
    }

    /// Replaces whatever settle was running. For a close target that is
    /// already within the snap threshold, nothing starts and the caller snaps
    /// the frame itself.
    pub fn start(&mut self, arg_spec: SettleStartSpec) -> SettleStartOutcome {
        self.stop();
        let is_close_target = arg_spec.to.abs() <= f64::EPSILON;
        if is_close_target
            && arg_spec.from.is_within_of_closed(self.snap_to_closed_threshold)
        {
            return SettleStartOutcome::Snapped;
        }
        self.maybe_spec = Some(arg_spec);
        SettleStartOutcome::Started
    }

    /// Interrupts the settle without a completion. Releasing into a new drag
    /// does this.
    pub fn stop(&mut self) { self.maybe_spec = None; }

    #[must_use]
    pub fn is_running(&self) -> bool { self.maybe_spec.is_some() }

    /// Frame position at `arg_now`, or [`None`] when no settle is running.
    /// From the nominal duration onward this returns the target exactly.
    #[must_use]
    pub fn sample(&self, arg_now: Instant) -> Option<XOffset> {
        let spec = self.maybe_spec.as_ref()?;

        let elapsed = arg_now.saturating_duration_since(spec.start_at);
        if elapsed >= spec.duration {
            return Some(spec.to);
        }

        let tau = elapsed.as_secs_f64() / spec.duration.as_secs_f64();
        let normalized_velocity = spec.initial_velocity * spec.duration.as_secs_f64();
        let response = (1.0 + (SETTLE_STIFFNESS - normalized_velocity) * tau)
            * (-SETTLE_STIFFNESS * tau).exp();

        Some(spec.to + (spec.from - spec.to) * response)
    }

    /// Once the settle has run its nominal duration, yields the completion
    /// (exactly once) and clears the spring.
    pub fn take_completion_if_due(&mut self, arg_now: Instant) -> Option<SettleCompletion> {
        let spec = self.maybe_spec.as_ref()?;
        let elapsed = arg_now.saturating_duration_since(spec.start_at);
        if elapsed < spec.duration {
            return None;
        }
        let target = spec.to;
        self.maybe_spec = None;
        Some(SettleCompletion { target })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::x_offset;

    const DURATION: Duration = Duration::from_millis(400);

    fn make_spec(from: f64, to: f64, velocity_value: f64, start_at: Instant) -> SettleStartSpec {
        SettleStartSpec {
            from: x_offset(from),
            to: x_offset(to),
            initial_velocity: velocity_value,
            duration: DURATION,
            start_at,
        }
    }

    #[test]
    fn test_unseeded_close_approaches_target_monotonically() {
        let t0 = Instant::now();
        let mut animator = SettleAnimator::new(3.0);
        let outcome = animator.start(make_spec(-10.0, 0.0, 0.0, t0));
        assert_eq!(outcome, SettleStartOutcome::Started);

        let at_start = animator.sample(t0).unwrap();
        assert_eq!(at_start, x_offset(-10.0));

        let mut previous = -10.0;
        for elapsed_ms in [100_u64, 200, 300] {
            let sample = animator
                .sample(t0 + Duration::from_millis(elapsed_ms))
                .unwrap();
            assert!(sample.as_f64() > previous);
            assert!(sample.as_f64() <= 0.0);
            previous = sample.as_f64();
        }

        // From the nominal duration onward the sample is the target, exactly.
        assert_eq!(animator.sample(t0 + DURATION), Some(x_offset(0.0)));
        assert_eq!(
            animator.sample(t0 + DURATION + Duration::from_secs(1)),
            Some(x_offset(0.0))
        );
    }

    #[test]
    fn test_close_within_threshold_snaps_instead_of_starting() {
        let t0 = Instant::now();
        let mut animator = SettleAnimator::new(3.0);

        let outcome = animator.start(make_spec(-2.9, 0.0, 0.0, t0));
        assert_eq!(outcome, SettleStartOutcome::Snapped);
        assert!(!animator.is_running());

        let outcome = animator.start(make_spec(-3.1, 0.0, 0.0, t0));
        assert_eq!(outcome, SettleStartOutcome::Started);
        assert!(animator.is_running());
    }

    #[test]
    fn test_open_target_near_closed_still_springs() {
        let t0 = Instant::now();
        let mut animator = SettleAnimator::new(3.0);
        // Within the threshold of closed, but the target is open, so the snap
        // shortcut does not apply.
        let outcome = animator.start(make_spec(-1.0, -14.0, 0.0, t0));
        assert_eq!(outcome, SettleStartOutcome::Started);
    }

    #[test]
    fn test_fast_fling_overshoots_then_recovers() {
        let t0 = Instant::now();
        let mut animator = SettleAnimator::new(3.0);
        // 40 travels/sec over the 400 ms duration normalizes to 16, twice the
        // stiffness, enough to cross the target.
        animator.start(make_spec(-10.0, 0.0, 40.0, t0));

        let overshot = animator
            .sample(t0 + Duration::from_millis(200))
            .unwrap();
        assert!(overshot.as_f64() > 0.0);

        assert_eq!(animator.sample(t0 + DURATION), Some(x_offset(0.0)));
    }

    #[test]
    fn test_fling_toward_open_target_is_seeded() {
        let t0 = Instant::now();
        let mut animator = SettleAnimator::new(3.0);
        let seeded = animator.start(make_spec(-2.0, -14.0, 5.0, t0));
        assert_eq!(seeded, SettleStartOutcome::Started);

        // A positive seed pushes toward the open target, so the seeded spring
        // covers more ground early than an unseeded one.
        let seeded_sample = animator
            .sample(t0 + Duration::from_millis(100))
            .unwrap();

        animator.start(make_spec(-2.0, -14.0, 0.0, t0));
        let unseeded_sample = animator
            .sample(t0 + Duration::from_millis(100))
            .unwrap();

        assert!(seeded_sample.as_f64() < unseeded_sample.as_f64());
        assert_eq!(animator.sample(t0 + DURATION), Some(x_offset(-14.0)));
    }

    #[test]
    fn test_completion_is_yielded_exactly_once() {
        let t0 = Instant::now();
        let mut animator = SettleAnimator::new(3.0);
        animator.start(make_spec(-10.0, 0.0, 0.0, t0));

        assert_eq!(animator.take_completion_if_due(t0 + Duration::from_millis(100)), None);

        let completion = animator.take_completion_if_due(t0 + DURATION);
        assert_eq!(
            completion,
            Some(SettleCompletion {
                target: x_offset(0.0)
            })
        );

        assert!(!animator.is_running());
        assert_eq!(animator.sample(t0 + DURATION), None);
        assert_eq!(animator.take_completion_if_due(t0 + DURATION), None);
    }

    #[test]
    fn test_stop_discards_settle_without_completion() {
        let t0 = Instant::now();
        let mut animator = SettleAnimator::new(3.0);
        animator.start(make_spec(-10.0, 0.0, 0.0, t0));
        animator.stop();
        assert!(!animator.is_running());
        assert_eq!(animator.take_completion_if_due(t0 + DURATION), None);
    }
}
