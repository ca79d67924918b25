//! Cache Coordinator - a bounded, time-expiring object cache
//!
//! All reads and writes go through a single coordinator task reached by
//! message passing. Entries expire a fixed time after insertion, and adds of
//! new keys are rejected once the cache is full.
//!
//! ```
//! use cache_coordinator::CacheHandle;
//!
//! # #[tokio::main]
//! # async fn main() -> cache_coordinator::Result<()> {
//! let cache = CacheHandle::new(1, 60);
//! assert!(cache.add("a", 1u32).await?);
//! assert!(!cache.add("b", 2u32).await?);
//! assert_eq!(cache.remove("a").await?, Some(1));
//! assert_eq!(cache.lookup("a").await?, None);
//! # Ok(())
//! # }
//! ```

mod cache;
pub mod config;
pub mod coordinator;
pub mod error;
mod tasks;

pub use cache::CacheStats;
pub use config::CacheConfig;
pub use coordinator::{CacheCoordinator, CacheHandle};
pub use error::{CacheError, Result};
