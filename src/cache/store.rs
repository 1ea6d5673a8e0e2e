//! Eviction Store Module
//!
//! Capability interface shared by every single-tier store, plus the factory
//! resolving an `EvictionPolicy` into a concrete engine.

use std::hash::Hash;

use crate::cache::{EvictionPolicy, LfuStore, LruStore};
use crate::error::{CacheError, Result};

// == Eviction Store Trait ==
/// A bounded key-value container enforcing one eviction discipline.
///
/// `get` takes `&mut self` because a hit updates recency or frequency
/// bookkeeping.
pub trait EvictionStore<K, V> {
    /// Returns the value for `key` and records the access, or `None` on a miss.
    fn get(&mut self, key: &K) -> Option<V>;

    /// Inserts or updates `key`.
    ///
    /// Returns the entry evicted to make room, if any.
    fn put(&mut self, key: K, value: V) -> Option<(K, V)>;

    /// Removes the entry the policy would evict next.
    fn evict_one(&mut self) -> Option<(K, V)>;

    /// Returns the resident entries in policy-defined order without touching them.
    fn snapshot(&self) -> Vec<(K, V)>;

    /// Checks residency without recording an access.
    fn contains(&self, key: &K) -> bool;

    /// Number of resident entries.
    fn len(&self) -> usize;

    /// Maximum number of resident entries.
    fn capacity(&self) -> usize;

    /// Eviction discipline this store runs.
    fn policy(&self) -> EvictionPolicy;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Boxed store as held by a tier.
pub type BoxedStore<K, V> = Box<dyn EvictionStore<K, V> + Send>;

// == Capacity Validation ==
/// Rejects a zero capacity.
pub(crate) fn validate_capacity(capacity: usize) -> Result<()> {
    if capacity == 0 {
        return Err(CacheError::InvalidConfiguration(
            "Tier capacity must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

// == Factory ==
/// Builds an empty store running `policy` with the given capacity.
pub fn build_store<K, V>(policy: EvictionPolicy, capacity: usize) -> Result<BoxedStore<K, V>>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    let store: BoxedStore<K, V> = match policy {
        EvictionPolicy::Lru => Box::new(LruStore::new(capacity)?),
        EvictionPolicy::Lfu => Box::new(LfuStore::new(capacity)?),
    };
    Ok(store)
}
