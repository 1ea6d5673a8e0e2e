//! Cache Statistics Module
//!
//! Tracks hits, misses, evictions and promotions for each tier and for the
//! chain as a whole.

use serde::Serialize;

use crate::cache::EvictionPolicy;

// == Cache Stats ==
/// Cache performance counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of lookups answered
    pub hits: u64,
    /// Number of lookups that found nothing
    pub misses: u64,
    /// Number of entries evicted by capacity pressure
    pub evictions: u64,
    /// Number of writes made to carry a hit closer to L1
    pub promotions: u64,
    /// Current number of resident entries
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
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
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

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_promotion(&mut self) {
        self.promotions += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

// == Tier Stats ==
/// Counters of one tier, labelled with its position and layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierStats {
    pub index: usize,
    pub policy: EvictionPolicy,
    pub capacity: usize,
    #[serde(flatten)]
    pub stats: CacheStats,
}

// == Stats Report ==
/// Point-in-time statistics of a whole chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    /// Chain-level lookups, promotions, and totals summed over tiers
    pub chain: CacheStats,
    pub tiers: Vec<TierStats>,
}
