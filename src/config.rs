//! Configuration Module
//!
//! Capacity and time-to-live settings for a cache coordinator.

use std::env;
use std::time::Duration;

/// Default maximum number of entries
pub const DEFAULT_MAX_SIZE: usize = 1000;

/// Default entry time-to-live in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Cache configuration parameters.
///
/// A `max_size` of 0 means the cache is unbounded, and a `timeout_secs` of 0
/// means entries never expire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold (0 = unbounded)
    pub max_size: usize,
    /// Seconds after insertion before an entry is evicted (0 = never)
    pub timeout_secs: u64,
}

impl CacheConfig {
    /// Creates a configuration with explicit capacity and TTL.
    pub fn new(max_size: usize, timeout_secs: u64) -> Self {
        Self {
            max_size,
            timeout_secs,
        }
    }

    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_SIZE` - Maximum cache entries (default: 1000)
    /// - `CACHE_TIMEOUT_SECS` - Entry TTL in seconds (default: 300)
    ///
    /// Negative values are clamped to 0, so `-1` disables the limit.
    pub fn from_env() -> Self {
        Self {
            max_size: read_non_negative("CACHE_MAX_SIZE")
                .map(|v| usize::try_from(v).unwrap_or(usize::MAX))
                .unwrap_or(DEFAULT_MAX_SIZE),
            timeout_secs: read_non_negative("CACHE_TIMEOUT_SECS").unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Returns the capacity limit, or None when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        (self.max_size > 0).then_some(self.max_size)
    }

    /// Returns the entry time-to-live, or None when entries never expire.
    pub fn ttl(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn read_non_negative(name: &str) -> Option<u64> {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<i64>().ok())
        .map(|v| v.max(0) as u64)
}
