//! Periodic timers feeding the UI event loop.
//!
//! A timer never touches view state. It only sends [`TimerEvent`]s over a
//! channel that the event loop drains, so every mutation stays on the loop.
//! Dropping a [`PeriodicTask`] aborts it.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::debug;

/// Event emitted by a periodic task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Re-sample the surge multiplier.
    SurgeTick,
    /// Advance match progress for the matching episode `epoch`.
    MatchTick { epoch: u64 },
}

/// Sending half handed to each [`PeriodicTask`].
pub type TimerSender = mpsc::UnboundedSender<TimerEvent>;
/// Receiving half drained by the event loop.
pub type TimerReceiver = mpsc::UnboundedReceiver<TimerEvent>;

/// Creates the channel shared by all timers.
#[must_use]
pub fn timer_channel() -> (TimerSender, TimerReceiver) {
    mpsc::unbounded_channel()
}

/// Handle to a spawned interval loop. The first event fires one period after spawn.
#[derive(Debug)]
pub struct PeriodicTask {
    name: &'static str,
    handle: JoinHandle<()>,
}

impl PeriodicTask {
    /// Spawns a task sending `event` every `period` until cancelled or the
    /// receiver is gone.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn spawn(name: &'static str, period: Duration, event: TimerEvent, tx: TimerSender) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if tx.send(event).is_err() {
                    debug!(task = name, "Timer channel closed");
                    break;
                }
            }
        });

        debug!(task = name, period_ms = period.as_millis(), "Periodic task started");
        Self { name, handle }
    }

    /// True once the loop has stopped, e.g. because the receiver is gone.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        self.handle.abort();
        debug!(task = self.name, "Periodic task cancelled");
    }
}
