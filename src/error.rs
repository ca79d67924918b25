//! Error types for the cache coordinator
//!
//! Missing keys, rejected adds and expirations are reported through return
//! values. Errors only describe a coordinator that can no longer serve requests.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The coordinator's inbound queue is closed and the command could not be sent
    #[error("Cache coordinator is closed")]
    CoordinatorClosed,

    /// The coordinator dropped the request without replying
    #[error("Cache coordinator dropped the request without replying")]
    ReplyDropped,
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
