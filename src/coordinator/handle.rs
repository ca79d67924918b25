//! Client Handle
//!
//! The caller-facing side of a coordinator. Every operation is a round trip:
//! build a command with a oneshot reply, enqueue it, await the answer.

use tokio::sync::{mpsc, oneshot};

use crate::cache::CacheStats;
use crate::config::CacheConfig;
use crate::coordinator::{CacheCoordinator, Command};
use crate::error::{CacheError, Result};

// == Cache Handle ==
/// Cloneable handle to a running cache coordinator.
///
/// The handle holds only the configuration and the sending side of the
/// coordinator's queue. The coordinator keeps running while any handle is
/// alive and stops once the last one is dropped.
///
/// Values are cloned out on `lookup`; store `Arc<T>` for large payloads.
pub struct CacheHandle<V> {
    queue: mpsc::UnboundedSender<Command<V>>,
    config: CacheConfig,
}

impl<V> Clone for CacheHandle<V> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue.clone(),
            config: self.config,
        }
    }
}

impl<V> std::fmt::Debug for CacheHandle<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheHandle")
            .field("config", &self.config)
            .field("closed", &self.queue.is_closed())
            .finish()
    }
}

impl<V: Clone + Send + 'static> CacheHandle<V> {
    // == Constructors ==
    /// Spawns a coordinator and returns a handle to it.
    ///
    /// A `max_size` of 0 means unbounded; a `timeout_secs` of 0 means entries
    /// never expire. Must be called from within a tokio runtime.
    pub fn new(max_size: usize, timeout_secs: u64) -> Self {
        Self::with_config(CacheConfig::new(max_size, timeout_secs))
    }

    /// Spawns a coordinator for `config` and returns a handle to it.
    pub fn with_config(config: CacheConfig) -> Self {
        let (handle, _task) = CacheCoordinator::spawn(config);
        handle
    }

    pub(crate) fn from_parts(
        queue: mpsc::UnboundedSender<Command<V>>,
        config: CacheConfig,
    ) -> Self {
        Self { queue, config }
    }

    // == Lookup ==
    /// Returns the value stored under `key`, or None if absent.
    ///
    /// Does not extend the entry's time-to-live.
    pub async fn lookup(&self, key: &str) -> Result<Option<V>> {
        let key = key.to_string();
        self.request(|reply| Command::Lookup { key, reply }).await
    }

    // == Remove ==
    /// Removes `key` and returns its value, or None if it was not present.
    ///
    /// Cancels the entry's expiry timer. Calling this for a key that already
    /// expired or was removed is not an error.
    pub async fn remove(&self, key: &str) -> Result<Option<V>> {
        let key = key.to_string();
        self.request(|reply| Command::Remove { key, reply }).await
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any existing value.
    ///
    /// Returns `Ok(false)` when the cache is full and `key` is new; the cache
    /// is left unchanged and a warning is logged. Replacing an existing key is
    /// always accepted and restarts its time-to-live.
    pub async fn add(&self, key: impl Into<String>, value: V) -> Result<bool> {
        let key = key.into();
        self.request(|reply| Command::Add { key, value, reply }).await
    }

    // == For Each ==
    /// Calls `visit` once for every entry, in no particular order.
    ///
    /// `visit` runs on the coordinator task and sees the cache as of the
    /// moment this request is handled. It must not use the cache itself: the
    /// coordinator cannot serve another request until `visit` returns. A
    /// panicking visitor stops the coordinator.
    pub async fn for_each<F>(&self, visit: F) -> Result<()>
    where
        F: FnMut(&str, &V) + Send + 'static,
    {
        let visit = Box::new(visit);
        self.request(|reply| Command::ForEach { visit, reply }).await
    }

    // == Length ==
    /// Returns the number of entries currently stored.
    pub async fn len(&self) -> Result<usize> {
        self.request(|reply| Command::Len { reply }).await
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }

    // == Stats ==
    /// Returns a snapshot of the coordinator's statistics.
    pub async fn stats(&self) -> Result<CacheStats> {
        self.request(|reply| Command::Stats { reply }).await
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> Command<V>,
    ) -> Result<T> {
        let (reply, response) = oneshot::channel();
        self.queue
            .send(command(reply))
            .map_err(|_| CacheError::CoordinatorClosed)?;
        response.await.map_err(|_| CacheError::ReplyDropped)
    }
}

impl<V> CacheHandle<V> {
    /// Returns the configuration the coordinator was started with.
    pub fn config(&self) -> CacheConfig {
        self.config
    }

    /// Maximum number of entries (0 = unbounded).
    pub fn max_size(&self) -> usize {
        self.config.max_size
    }

    /// Entry time-to-live in seconds (0 = never expire).
    pub fn timeout_secs(&self) -> u64 {
        self.config.timeout_secs
    }
}
