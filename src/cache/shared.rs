//! Shared Tiered Cache Module
//!
//! Thread-safe handle around a `TierChain`. One exclusive lock guards the
//! whole chain and is held for the full multi-tier sequence of every
//! operation, so a lookup's scan and promotion are atomic with respect to
//! concurrent writes. Lookups take the same exclusive lock as writes because
//! a hit mutates recency and frequency state.

use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::{EvictionPolicy, StatsReport, TierChain, TierSnapshot};
use crate::error::Result;

// == Tiered Cache ==
/// Cloneable, thread-safe multi-tier cache.
#[derive(Debug)]
pub struct TieredCache<K, V> {
    chain: Arc<Mutex<TierChain<K, V>>>,
}

impl<K, V> Clone for TieredCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            chain: Arc::clone(&self.chain),
        }
    }
}

impl<K, V> TieredCache<K, V>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    /// Creates a cache with no tiers.
    pub fn new() -> Self {
        Self::from_chain(TierChain::new())
    }

    /// Wraps an existing chain.
    pub fn from_chain(chain: TierChain<K, V>) -> Self {
        Self {
            chain: Arc::new(Mutex::new(chain)),
        }
    }

    /// Appends a tier as the new last level and returns its index.
    ///
    /// The new tier is always last, so the tier count right after the add
    /// is `index + 1`.
    pub fn add_cache_level(&self, capacity: usize, policy: EvictionPolicy) -> Result<usize> {
        self.chain.lock().add_tier(capacity, policy)
    }

    /// Appends a tier whose policy is given by name (`"LRU"` or `"LFU"`).
    pub fn add_cache_level_named(&self, capacity: usize, policy: &str) -> Result<usize> {
        self.chain.lock().add_tier_named(capacity, policy)
    }

    /// Removes the tier at `index` and discards its entries.
    ///
    /// Returns the number of tiers left, read under the same lock.
    pub fn remove_cache_level(&self, index: usize) -> Result<usize> {
        self.chain.lock().remove_tier(index)
    }

    /// Looks a key up across tiers, promoting a hit towards L1.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut chain = self.chain.lock();
        let value = chain.get(key);
        if value.is_none() {
            debug!(tiers = chain.tier_count(), "Cache miss");
        }
        value
    }

    /// Writes a key into every tier. No-op without tiers.
    pub fn put(&self, key: K, value: V) {
        self.chain.lock().put(key, value);
    }

    /// Snapshots every tier.
    pub fn display_cache(&self) -> Vec<TierSnapshot<K, V>> {
        self.chain.lock().display()
    }

    pub fn stats(&self) -> StatsReport {
        self.chain.lock().stats()
    }

    pub fn tier_count(&self) -> usize {
        self.chain.lock().tier_count()
    }
}

impl<K, V> Default for TieredCache<K, V>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
