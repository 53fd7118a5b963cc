// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::{Duration, Instant};

use tokio::sync::mpsc::Sender;

use crate::{CommonResult, throws};

/// Drives settle animation frames: spawns a Tokio task that sends the current
/// [`Instant`] over a channel on a fixed cadence. The embedder's main loop
/// receives those instants and feeds them to
/// [`ListCoordinator::tick`](crate::ListCoordinator::tick).
///
/// Can be re-used (stopped, and restarted repeatedly).
/// - Once a task is started it can be stopped, but another task can't be
///   started.
/// - After a task is stopped, another one can be started again.
///
/// The ticker only schedules wakeups. All animation state lives in
/// [`SettleAnimator`](crate::SettleAnimator), which evaluates against the
/// instants it is handed, so a slow or paused ticker degrades smoothness but
/// never correctness.
#[derive(Debug, Default)]
pub struct FrameTicker {
    /// This is the channel that will be used to kill the tick task.
    /// - [None] means that the tick task is not running.
    /// - When a tick task is started, this will have a [Some] value in it.
    pub ticker_kill_channel: Option<Sender<()>>,
}

impl FrameTicker {
    /// Starts the tick task if one isn't already running. Ticks arrive on
    /// `tick_channel_sender` every `arg_interval`, starting one interval from
    /// now. The task exits on its own once the receiving side is dropped.
    pub fn start(&mut self, arg_interval: Duration, tick_channel_sender: Sender<Instant>) {
        if self.is_started() {
            return;
        }
        self.ticker_kill_channel =
            Some(internal_impl::spawn_tick_task(arg_interval, tick_channel_sender));
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        matches!(&self.ticker_kill_channel, Some(_sender))
    }

    /// # Errors
    ///
    /// Returns an error if the tick task cannot be stopped.
    pub fn stop(&mut self) -> CommonResult<()> {
        throws!({
            if let Some(kill_channel) = &self.ticker_kill_channel {
                let kill_channel_clone = kill_channel.clone();
                tokio::spawn(async move {
                    // We don't care about the result of this operation.
                    kill_channel_clone.send(()).await.ok();
                });
                self.ticker_kill_channel = None;
            }
        });
    }
}

mod internal_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    pub fn spawn_tick_task(
        arg_interval: Duration,
        tick_channel_sender: Sender<Instant>,
    ) -> Sender<()> {
        let (ticker_kill_channel_sender, mut ticker_kill_channel_receiver) =
            tokio::sync::mpsc::channel::<()>(1);
        let ticker_kill_channel_sender_clone = ticker_kill_channel_sender.clone();

        tokio::spawn(async move {
            // Use a tokio::time::interval instead of tokio::time::sleep because
            // we need to be able to re-use it, and call tick on it repeatedly.
            let mut interval = tokio::time::interval(arg_interval);
            // The first tick completes immediately; skip it so the cadence
            // starts one interval from now.
            interval.tick().await;

            loop {
                tokio::select! {
                    // Stop the ticker.
                    // This branch is cancel safe because recv is cancel safe.
                    _ = ticker_kill_channel_receiver.recv() => {
                        break;
                    }

                    // Deliver the next frame instant.
                    // This branch is cancel safe because tick is cancel safe.
                    _ = interval.tick() => {
                        if tick_channel_sender.send(Instant::now()).await.is_err() {
                            // Receiver is gone; the embedder's loop has ended.
                            break;
                        }
                    }
                }
            }
        });

        ticker_kill_channel_sender_clone
    }
}
