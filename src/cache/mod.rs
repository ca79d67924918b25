//! Cache Module
//!
//! The state owned by the coordinator: entries, capacity and TTL enforcement,
//! and statistics.

mod entry;
mod stats;
mod store;


pub(crate) use entry::CacheEntry;
pub use stats::CacheStats;
pub(crate) use store::CacheStore;
