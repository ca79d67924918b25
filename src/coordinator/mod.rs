//! Coordinator Module
//!
//! Serializes every cache access through one task. Callers hold a
//! [`CacheHandle`]; the task owns the store and applies commands one at a
//! time. Expiry timers feed the same queue, so an expiry can never interleave
//! with a caller's add or remove.

mod command;
mod handle;
mod server;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub(crate) use command::Command;
pub use handle::CacheHandle;

use crate::cache::CacheStore;
use crate::config::CacheConfig;
use crate::tasks::ExpiryScheduler;

// == Cache Coordinator ==
/// Entry point for starting coordinators.
pub struct CacheCoordinator;

impl CacheCoordinator {
    /// Spawns a coordinator task for `config`.
    ///
    /// Returns the first handle and the task's `JoinHandle`. The task ends once
    /// every handle has been dropped and the already-queued commands are
    /// applied; await the `JoinHandle` to wait for that. Must be called from
    /// within a tokio runtime.
    ///
    /// # Example
    /// ```
    /// use cache_coordinator::{CacheConfig, CacheCoordinator};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let (cache, task) = CacheCoordinator::spawn::<String>(CacheConfig::new(10, 60));
    /// assert!(cache.add("guid-1", "artifact".to_string()).await.unwrap());
    ///
    /// drop(cache);
    /// task.await.unwrap();
    /// # }
    /// ```
    pub fn spawn<V>(config: CacheConfig) -> (CacheHandle<V>, JoinHandle<()>)
    where
        V: Clone + Send + 'static,
    {
        let (queue, inbox) = mpsc::unbounded_channel();
        let expiry = ExpiryScheduler::new(config.ttl(), queue.downgrade());
        let store = CacheStore::new(config, expiry);

        let task = tokio::spawn(server::run(inbox, store));
        (CacheHandle::from_parts(queue, config), task)
    }
}
