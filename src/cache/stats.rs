//! Cache Statistics Module
//!
//! Tracks hits, misses, loads, and coalesced joins for diagnostics.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of cache counters. Not load-bearing for correctness.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Reads served from a fresh entry
    pub hits: u64,
    /// Reads that found no fresh entry
    pub misses: u64,
    /// Producer invocations
    pub loads: u64,
    /// Producer invocations that failed
    pub load_failures: u64,
    /// Callers that joined an in-flight load instead of starting one
    pub coalesced: u64,
    /// Entries currently stored, expired ones included
    pub total_entries: usize,
    /// Loads currently in flight
    pub in_flight: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_load(&mut self) {
        self.loads += 1;
    }

    pub fn record_load_failure(&mut self) {
        self.load_failures += 1;
    }

    pub fn record_coalesced(&mut self) {
        self.coalesced += 1;
    }
}
