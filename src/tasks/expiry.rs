//! Expiry Timers
//!
//! One-shot background tasks that ask the coordinator to evict an entry once
//! its time-to-live has elapsed. Timers never touch the store themselves; they
//! enqueue a `Command::Expire` and let the coordinator decide.

use std::time::Duration;

use tokio::sync::mpsc::WeakUnboundedSender;
use tokio::task::AbortHandle;
use tracing::debug;

use crate::coordinator::Command;

// == Expiry Timer ==
/// Handle to a pending expiry task. Dropping it cancels the task.
#[derive(Debug)]
pub(crate) struct ExpiryTimer {
    task: AbortHandle,
}

impl ExpiryTimer {
    /// Cancels the timer. A no-op if it already fired or was cancelled.
    pub(crate) fn cancel(&self) {
        self.task.abort();
    }
}

impl Drop for ExpiryTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

// == Expiry Scheduler ==
/// Arms expiry timers that report back to a coordinator's inbound queue.
///
/// Only a weak sender is held, so pending timers never keep a coordinator
/// alive after every `CacheHandle` is gone.
pub(crate) struct ExpiryScheduler<V> {
    ttl: Option<Duration>,
    queue: WeakUnboundedSender<Command<V>>,
}

impl<V: Send + 'static> ExpiryScheduler<V> {
    pub(crate) fn new(ttl: Option<Duration>, queue: WeakUnboundedSender<Command<V>>) -> Self {
        Self { ttl, queue }
    }

    /// Arms a timer for `key` inserted under `generation`.
    ///
    /// Returns None when entries never expire. Must be called from within a
    /// tokio runtime.
    pub(crate) fn arm(&self, key: &str, generation: u64) -> Option<ExpiryTimer> {
        let ttl = self.ttl?;
        let queue = self.queue.clone();
        let key = key.to_string();

        let task = tokio::spawn(async move {
            tokio::time::sleep(ttl).await;

            let Some(sender) = queue.upgrade() else {
                debug!(key = %key, "expiry fired after cache coordinator shut down");
                return;
            };
            if sender.send(Command::Expire { key, generation }).is_err() {
                debug!("expiry fired while cache coordinator was closing");
            }
        });

        Some(ExpiryTimer {
            task: task.abort_handle(),
        })
    }
}
