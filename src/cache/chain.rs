//! Tier Chain Module
//!
//! Ordered sequence of tier stores (index 0 = L1) with cross-tier lookup,
//! promotion and write propagation.
//!
//! The chain itself is not synchronized; `TieredCache` wraps it in a lock.

use std::fmt;
use std::hash::Hash;

use serde::Serialize;
use tracing::{debug, info};

use crate::cache::store::{build_store, BoxedStore};
use crate::cache::{CacheStats, EvictionPolicy, StatsReport, TierStats};
use crate::error::{CacheError, Result};

// == Tier Snapshot ==
/// Read-only view of one tier, in the tier's policy-defined order.
///
/// LRU tiers list entries from least to most recently used, LFU tiers in
/// insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierSnapshot<K, V> {
    pub index: usize,
    /// Display label, `tier <index>`
    pub label: String,
    pub policy: EvictionPolicy,
    pub capacity: usize,
    pub entries: Vec<(K, V)>,
}

// == Tier ==
/// One store plus its counters.
struct Tier<K, V> {
    store: BoxedStore<K, V>,
    stats: CacheStats,
}

impl<K, V> Tier<K, V> {
    fn put(&mut self, key: K, value: V) {
        if self.store.put(key, value).is_some() {
            self.stats.record_eviction();
        }
    }
}

impl<K, V> fmt::Debug for Tier<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tier")
            .field("policy", &self.store.policy())
            .field("capacity", &self.store.capacity())
            .field("len", &self.store.len())
            .field("stats", &self.stats)
            .finish()
    }
}

// == Tier Chain ==
/// Ordered tiers L1..Ln.
#[derive(Debug)]
pub struct TierChain<K, V> {
    tiers: Vec<Tier<K, V>>,
    /// Chain-level hits, misses and promotions
    stats: CacheStats,
}

impl<K, V> TierChain<K, V>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    /// Creates a chain with no tiers.
    pub fn new() -> Self {
        Self {
            tiers: Vec::new(),
            stats: CacheStats::new(),
        }
    }

    // == Add Tier ==
    /// Appends an empty tier as the new last level.
    ///
    /// Returns the index of the new tier. On error the chain is unchanged.
    pub fn add_tier(&mut self, capacity: usize, policy: EvictionPolicy) -> Result<usize> {
        let store = build_store(policy, capacity)?;
        self.tiers.push(Tier {
            store,
            stats: CacheStats::new(),
        });

        let index = self.tiers.len() - 1;
        info!(index, %policy, capacity, "Tier added");
        Ok(index)
    }

    /// Parses `policy` by name, then appends the tier.
    pub fn add_tier_named(&mut self, capacity: usize, policy: &str) -> Result<usize> {
        let policy = policy.parse::<EvictionPolicy>()?;
        self.add_tier(capacity, policy)
    }

    // == Remove Tier ==
    /// Drops the tier at `index` with all of its entries.
    ///
    /// Later tiers shift down by one. Entries are not migrated. Returns the
    /// number of tiers left.
    pub fn remove_tier(&mut self, index: usize) -> Result<usize> {
        if index >= self.tiers.len() {
            return Err(CacheError::IndexOutOfRange {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                tiers: self.tiers.len(),
            });
        }

        let removed = self.tiers.remove(index);
        info!(
            index,
            policy = %removed.store.policy(),
            dropped_entries = removed.store.len(),
            "Tier removed"
        );
        Ok(self.tiers.len())
    }

    // == Get ==
    /// Looks `key` up tier by tier, starting at L1.
    ///
    /// The value found in tier `k` is written into tiers `0..k` through each
    /// tier's own `put`, so promotion may evict in those tiers. A miss leaves
    /// every tier's entries untouched.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let mut found = None;
        for (level, tier) in self.tiers.iter_mut().enumerate() {
            match tier.store.get(key) {
                Some(value) => {
                    tier.stats.record_hit();
                    found = Some((level, value));
                    break;
                }
                None => tier.stats.record_miss(),
            }
        }

        let Some((level, value)) = found else {
            self.stats.record_miss();
            return None;
        };
        self.stats.record_hit();

        for tier in &mut self.tiers[..level] {
            tier.put(key.clone(), value.clone());
            self.stats.record_promotion();
        }
        if level > 0 {
            debug!(level, "Promoted hit into {} higher tier(s)", level);
        }

        Some(value)
    }

    // == Put ==
    /// Writes `key` into every tier, L1 first.
    ///
    /// Each tier evicts independently. A chain without tiers ignores the write.
    pub fn put(&mut self, key: K, value: V) {
        let Some((last, rest)) = self.tiers.split_last_mut() else {
            return;
        };

        for tier in rest {
            tier.put(key.clone(), value.clone());
        }
        last.put(key, value);
    }

    // == Display ==
    /// Snapshots every tier without recording any access.
    pub fn display(&self) -> Vec<TierSnapshot<K, V>> {
        self.tiers
            .iter()
            .enumerate()
            .map(|(index, tier)| TierSnapshot {
                index,
                label: format!("tier {}", index),
                policy: tier.store.policy(),
                capacity: tier.store.capacity(),
                entries: tier.store.snapshot(),
            })
            .collect()
    }

    // == Stats ==
    /// Returns chain-level and per-tier counters.
    pub fn stats(&self) -> StatsReport {
        let tiers: Vec<TierStats> = self
            .tiers
            .iter()
            .enumerate()
            .map(|(index, tier)| {
                let mut stats = tier.stats.clone();
                stats.set_total_entries(tier.store.len());
                TierStats {
                    index,
                    policy: tier.store.policy(),
                    capacity: tier.store.capacity(),
                    stats,
                }
            })
            .collect();

        let mut chain = self.stats.clone();
        chain.evictions = tiers.iter().map(|t| t.stats.evictions).sum();
        chain.set_total_entries(tiers.iter().map(|t| t.stats.total_entries).sum());

        StatsReport { chain, tiers }
    }

    /// Number of tiers.
    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

impl<K, V> Default for TierChain<K, V>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(snapshot: &TierSnapshot<&'static str, i32>) -> Vec<(&'static str, i32)> {
        snapshot.entries.clone()
    }

    fn lru3_lfu2() -> TierChain<&'static str, i32> {
        let mut chain = TierChain::new();
        chain.add_tier(3, EvictionPolicy::Lru).unwrap();
        chain.add_tier(2, EvictionPolicy::Lfu).unwrap();
        chain
    }

    #[test]
    fn test_empty_chain() {
        let mut chain = TierChain::<&str, i32>::new();
        chain.put("a", 1);

        assert!(chain.is_empty());
        assert_eq!(chain.get(&"a"), None);
        assert!(chain.display().is_empty());
    }

    #[test]
    fn test_add_tier_errors_leave_chain_unchanged() {
        let mut chain = lru3_lfu2();

        let result = chain.add_tier(0, EvictionPolicy::Lru);
        assert!(matches!(result, Err(CacheError::InvalidConfiguration(_))));

        let result = chain.add_tier_named(4, "ARC");
        assert_eq!(result, Err(CacheError::UnsupportedPolicy("ARC".to_string())));

        assert_eq!(chain.tier_count(), 2);
        assert_eq!(chain.add_tier_named(4, "lru"), Ok(2));
    }

    #[test]
    fn test_remove_tier_out_of_range() {
        let mut chain = lru3_lfu2();
        chain.put("a", 1);

        let result = chain.remove_tier(2);
        assert_eq!(
            result,
            Err(CacheError::IndexOutOfRange { index: 2, tiers: 2 })
        );
        assert_eq!(chain.tier_count(), 2);
        assert_eq!(chain.display()[1].entries, vec![("a", 1)]);
    }

    #[test]
    fn test_remove_tier_shifts_indices() {
        let mut chain = lru3_lfu2();
        chain.add_tier(5, EvictionPolicy::Lru).unwrap();

        assert_eq!(chain.remove_tier(0), Ok(2));

        let display = chain.display();
        assert_eq!(display.len(), 2);
        assert_eq!(display[0].policy, EvictionPolicy::Lfu);
        assert_eq!(display[0].label, "tier 0");
        assert_eq!(display[1].capacity, 5);
    }

    #[test]
    fn test_put_propagates_to_every_tier() {
        let mut chain = lru3_lfu2();
        chain.put("a", 1);
        chain.put("b", 2);

        for snapshot in chain.display() {
            assert_eq!(entries(&snapshot), vec![("a", 1), ("b", 2)]);
        }
    }

    #[test]
    fn test_get_promotes_into_higher_tiers() {
        let mut chain = TierChain::new();
        chain.add_tier(1, EvictionPolicy::Lru).unwrap();
        chain.add_tier(1, EvictionPolicy::Lru).unwrap();
        chain.add_tier(4, EvictionPolicy::Lru).unwrap();

        chain.put("a", 1);
        chain.put("b", 2);

        // a only survives in the last tier
        assert_eq!(chain.get(&"a"), Some(1));

        let display = chain.display();
        assert_eq!(entries(&display[0]), vec![("a", 1)]);
        assert_eq!(entries(&display[1]), vec![("a", 1)]);
        // the hit touched a in its own tier
        assert_eq!(entries(&display[2]), vec![("b", 2), ("a", 1)]);
        assert_eq!(chain.stats().tiers[0].stats.evictions, 2);

        let stats = chain.stats();
        assert_eq!(stats.chain.hits, 1);
        assert_eq!(stats.chain.promotions, 2);
        assert_eq!(stats.tiers[0].stats.misses, 1);
        assert_eq!(stats.tiers[2].stats.hits, 1);
    }

    #[test]
    fn test_miss_leaves_tiers_untouched() {
        let mut chain = lru3_lfu2();
        chain.put("a", 1);
        chain.put("b", 2);
        let before = chain.display();

        assert_eq!(chain.get(&"zzz"), None);
        assert_eq!(chain.display(), before);
        assert_eq!(chain.stats().chain.misses, 1);
    }

    #[test]
    fn test_stats_counts_evictions_per_tier() {
        let mut chain = lru3_lfu2();
        for (key, value) in [("a", 1), ("b", 2), ("c", 3), ("d", 4)] {
            chain.put(key, value);
        }

        let stats = chain.stats();
        assert_eq!(stats.tiers[0].stats.evictions, 1);
        assert_eq!(stats.tiers[1].stats.evictions, 2);
        assert_eq!(stats.chain.evictions, 3);
        assert_eq!(stats.chain.total_entries, 5);
    }
}
