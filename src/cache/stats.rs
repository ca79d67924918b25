//! Cache Statistics Module
//!
//! Tracks lookups, rejections, removals and expirations seen by the coordinator.

use serde::Serialize;

// == Cache Stats ==
/// Counters maintained by the coordinator for a single cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups that found a value
    pub hits: u64,
    /// Lookups for absent keys
    pub misses: u64,
    /// Adds rejected because the cache was full
    pub rejections: u64,
    /// Entries removed by their expiry timer
    pub expirations: u64,
    /// Entries removed explicitly by a caller
    pub removals: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_rejection(&mut self) {
        self.rejections += 1;
    }

    pub(crate) fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    pub(crate) fn record_removal(&mut self) {
        self.removals += 1;
    }

    pub(crate) fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.rejections, 0);
        assert_eq!(stats.expirations, 0);
        assert_eq!(stats.removals, 0);
        assert_eq!(stats.total_entries, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_eviction_counters() {
        let mut stats = CacheStats::new();
        stats.record_rejection();
        stats.record_expiration();
        stats.record_expiration();
        stats.record_removal();
        assert_eq!(stats.rejections, 1);
        assert_eq!(stats.expirations, 2);
        assert_eq!(stats.removals, 1);
    }

    #[test]
    fn test_stats_serialize() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.set_total_entries(3);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["hits"], 1);
        assert_eq!(json["total_entries"], 3);
        assert_eq!(json["rejections"], 0);
    }
}
