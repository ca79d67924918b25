//! Cache Entry Module
//!
//! Defines a stored value together with its pending expiry timer.

use crate::tasks::ExpiryTimer;

// == Cache Entry ==
/// A single cached value.
///
/// The entry owns its expiry timer; dropping the entry cancels the timer.
#[derive(Debug)]
pub(crate) struct CacheEntry<V> {
    /// The stored value
    pub(crate) value: V,
    /// Insertion id used to tell this entry's expiry apart from stale ones
    pub(crate) generation: u64,
    /// Pending expiry, None when entries never expire
    timer: Option<ExpiryTimer>,
}

impl<V> CacheEntry<V> {
    pub(crate) fn new(value: V, generation: u64, timer: Option<ExpiryTimer>) -> Self {
        Self {
            value,
            generation,
            timer,
        }
    }

    // == Into Value ==
    /// Cancels the expiry timer and hands back the value.
    pub(crate) fn into_value(self) -> V {
        let CacheEntry { value, timer, .. } = self;
        if let Some(timer) = timer {
            timer.cancel();
        }
        value
    }
}
