//! Coordinator request protocol.

use tokio::sync::oneshot;

use crate::cache::CacheStats;

/// Visitor run by the coordinator for each entry during `for_each`.
pub(crate) type Visitor<V> = Box<dyn FnMut(&str, &V) + Send>;

// == Command ==
/// A unit of work for the coordinator.
///
/// Caller-issued commands carry a oneshot sender for the reply; `Expire` is
/// sent by expiry timers and expects no reply.
pub(crate) enum Command<V> {
    Lookup {
        key: String,
        reply: oneshot::Sender<Option<V>>,
    },
    Remove {
        key: String,
        reply: oneshot::Sender<Option<V>>,
    },
    Add {
        key: String,
        value: V,
        reply: oneshot::Sender<bool>,
    },
    ForEach {
        visit: Visitor<V>,
        reply: oneshot::Sender<()>,
    },
    Len {
        reply: oneshot::Sender<usize>,
    },
    Stats {
        reply: oneshot::Sender<CacheStats>,
    },
    Expire {
        key: String,
        generation: u64,
    },
}
