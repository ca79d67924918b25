//! Coordinator Loop
//!
//! The single task that owns a `CacheStore` and applies commands to it one at
//! a time, in arrival order.

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

use crate::cache::CacheStore;
use crate::coordinator::Command;

/// Runs until every strong sender of `inbox` is dropped.
///
/// Commands already queued when the last sender goes away are still applied.
/// Dropping the store on exit cancels every pending expiry timer.
pub(crate) async fn run<V>(mut inbox: UnboundedReceiver<Command<V>>, mut store: CacheStore<V>)
where
    V: Clone + Send + 'static,
{
    info!("cache coordinator started");

    while let Some(command) = inbox.recv().await {
        apply(&mut store, command);
    }

    info!(remaining_entries = store.len(), "cache coordinator stopped");
}

/// Applies a single command and sends its reply.
///
/// A failed reply send means the caller stopped waiting; the effect on the
/// store still stands.
fn apply<V>(store: &mut CacheStore<V>, command: Command<V>)
where
    V: Clone + Send + 'static,
{
    let delivered = match command {
        Command::Lookup { key, reply } => reply.send(store.lookup(&key)).is_ok(),
        Command::Remove { key, reply } => reply.send(store.remove(&key)).is_ok(),
        Command::Add { key, value, reply } => reply.send(store.add(key, value)).is_ok(),
        Command::ForEach { mut visit, reply } => {
            store.for_each(|key, value| visit(key, value));
            reply.send(()).is_ok()
        }
        Command::Len { reply } => reply.send(store.len()).is_ok(),
        Command::Stats { reply } => reply.send(store.stats()).is_ok(),
        Command::Expire { key, generation } => {
            store.expire(&key, generation);
            true
        }
    };

    if !delivered {
        debug!("cache caller went away before its reply was sent");
    }
}
