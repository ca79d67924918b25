//! Cache Store Module
//!
//! The coordinator's private state: a HashMap of entries with capacity
//! enforcement and timer-driven expiry. Only the coordinator task owns a
//! `CacheStore`, so none of these methods need synchronization.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::cache::{CacheEntry, CacheStats};
use crate::config::CacheConfig;
use crate::tasks::ExpiryScheduler;

// == Cache Store ==
/// Bounded key-value storage with fixed per-entry TTL.
pub(crate) struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    config: CacheConfig,
    /// Arms the timer for each accepted add
    expiry: ExpiryScheduler<V>,
    /// Id handed to the next accepted add
    next_generation: u64,
}

impl<V: Clone + Send + 'static> CacheStore<V> {
    // == Constructor ==
    pub(crate) fn new(config: CacheConfig, expiry: ExpiryScheduler<V>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            config,
            expiry,
            next_generation: 0,
        }
    }

    // == Lookup ==
    /// Returns a clone of the stored value, leaving its TTL untouched.
    pub(crate) fn lookup(&mut self, key: &str) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Remove ==
    /// Deletes an entry, cancelling its expiry timer, and returns its value.
    pub(crate) fn remove(&mut self, key: &str) -> Option<V> {
        let entry = self.entries.remove(key)?;
        self.stats.record_removal();
        self.stats.set_total_entries(self.entries.len());
        Some(entry.into_value())
    }

    // == Add ==
    /// Stores a value, replacing any existing entry for the key.
    ///
    /// A new key is rejected when the cache is full. Replacing an existing key
    /// never grows the store, so it is accepted even at capacity. Every
    /// accepted add restarts the key's TTL.
    pub(crate) fn add(&mut self, key: String, value: V) -> bool {
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && !self.has_space() {
            warn!(
                key = %key,
                max_size = self.config.max_size,
                "rejected cache add due to space constraint"
            );
            self.stats.record_rejection();
            return false;
        }

        let generation = self.next_generation;
        self.next_generation += 1;

        let timer = self.expiry.arm(&key, generation);
        // The replaced entry, if any, is dropped here and its timer cancelled
        self.entries.insert(key, CacheEntry::new(value, generation, timer));
        self.stats.set_total_entries(self.entries.len());

        true
    }

    // == Expire ==
    /// Removes the entry for `key` if it is still the one inserted under
    /// `generation`.
    ///
    /// A timer may fire just before its entry is replaced or removed; its
    /// command then arrives stale and is ignored. Returns true if an entry
    /// was evicted.
    pub(crate) fn expire(&mut self, key: &str, generation: u64) -> bool {
        match self.entries.get(key) {
            Some(entry) if entry.generation == generation => {
                self.entries.remove(key);
                self.stats.record_expiration();
                self.stats.set_total_entries(self.entries.len());
                warn!(
                    key = %key,
                    timeout_secs = self.config.timeout_secs,
                    "cache entry removed due to timeout"
                );
                true
            }
            _ => {
                debug!(key = %key, generation, "ignoring stale cache expiry");
                false
            }
        }
    }

    // == For Each ==
    /// Visits every entry once, in no particular order.
    pub(crate) fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&str, &V),
    {
        for (key, entry) in &self.entries {
            visit(key, &entry.value);
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub(crate) fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    fn has_space(&self) -> bool {
        match self.config.capacity() {
            Some(max) => self.entries.len() < max,
            None => true,
        }
    }
}
