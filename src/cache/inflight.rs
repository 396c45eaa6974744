//! In-flight load registry
//!
//! Tracks the one pending producer call per key so that concurrent callers
//! join it instead of starting another.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::{BoxFuture, Shared};

/// Outcome of a producer call, cloneable so every joined caller gets it.
pub(crate) type LoadResult<V> = std::result::Result<V, Arc<anyhow::Error>>;

/// A producer call that any number of callers can await.
pub(crate) type SharedLoad<V> = Shared<BoxFuture<'static, LoadResult<V>>>;

/// A registered pending load.
pub(crate) struct InFlight<V> {
    /// Distinguishes this load from a later one registered for the same key
    pub generation: u64,
    pub load: SharedLoad<V>,
}

/// Per-key map of pending loads.
pub(crate) struct InFlightRegistry<V> {
    loads: HashMap<String, InFlight<V>>,
    next_generation: u64,
}

impl<V> Default for InFlightRegistry<V> {
    fn default() -> Self {
        Self {
            loads: HashMap::new(),
            next_generation: 0,
        }
    }
}

impl<V> InFlightRegistry<V> {
    /// Returns a handle to the pending load for `key`, if any.
    pub fn join(&self, key: &str) -> Option<SharedLoad<V>> {
        self.loads.get(key).map(|flight| flight.load.clone())
    }

    /// Reserves a generation for a load about to be registered.
    pub fn next_generation(&mut self) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        generation
    }

    pub fn register(&mut self, key: String, generation: u64, load: SharedLoad<V>) {
        self.loads.insert(key, InFlight { generation, load });
    }

    /// Removes the record for `key` only if it still belongs to `generation`.
    ///
    /// Returns false when the load was invalidated or superseded meanwhile.
    pub fn settle(&mut self, key: &str, generation: u64) -> bool {
        let current = self
            .loads
            .get(key)
            .is_some_and(|flight| flight.generation == generation);
        if current {
            self.loads.remove(key);
        }
        current
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.loads.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.loads.clear();
    }

    pub fn len(&self) -> usize {
        self.loads.len()
    }
}
