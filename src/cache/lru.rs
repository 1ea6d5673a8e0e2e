//! LRU Module
//!
//! Least Recently Used recency tracking and the LRU tier store built on it.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use crate::cache::store::validate_capacity;
use crate::cache::{EvictionPolicy, EvictionStore};
use crate::error::Result;

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Keys are stored in a VecDeque where:
/// - Front = Most recently used
/// - Back = Least recently used
#[derive(Debug)]
pub struct LruTracker<K> {
    /// Order of keys by access time
    order: VecDeque<K>,
}

impl<K: PartialEq + Clone> LruTracker<K> {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Touch ==
    /// Marks a key as recently used (moves to front).
    pub fn touch(&mut self, key: &K) {
        self.remove(key);
        self.order.push_front(key.clone());
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: &K) {
        self.order.retain(|k| k != key);
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<K> {
        self.order.pop_back()
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.order.back()
    }

    /// Iterates keys from least to most recently used.
    pub fn iter_oldest_first(&self) -> impl Iterator<Item = &K> {
        self.order.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<K: PartialEq + Clone> Default for LruTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

// == LRU Store ==
/// Bounded tier store evicting the least recently used entry.
#[derive(Debug)]
pub struct LruStore<K, V> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// Recency order
    lru: LruTracker<K>,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<K, V> LruStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates an empty store. Fails on a zero capacity.
    pub fn new(capacity: usize) -> Result<Self> {
        validate_capacity(capacity)?;
        Ok(Self {
            entries: HashMap::with_capacity(capacity),
            lru: LruTracker::new(),
            capacity,
        })
    }

    /// Returns the key that would be evicted next.
    pub fn peek_lru(&self) -> Option<&K> {
        self.lru.peek_oldest()
    }
}

impl<K, V> EvictionStore<K, V> for LruStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn get(&mut self, key: &K) -> Option<V> {
        let value = self.entries.get(key)?.clone();
        self.lru.touch(key);
        Some(value)
    }

    fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = value;
            self.lru.touch(&key);
            return None;
        }

        let evicted = if self.entries.len() >= self.capacity {
            self.evict_one()
        } else {
            None
        };

        self.lru.touch(&key);
        self.entries.insert(key, value);
        evicted
    }

    fn evict_one(&mut self) -> Option<(K, V)> {
        let key = self.lru.evict_oldest()?;
        let value = self.entries.remove(&key)?;
        Some((key, value))
    }

    fn snapshot(&self) -> Vec<(K, V)> {
        self.lru
            .iter_oldest_first()
            .filter_map(|key| self.entries.get(key).map(|v| (key.clone(), v.clone())))
            .collect()
    }

    fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn policy(&self) -> EvictionPolicy {
        EvictionPolicy::Lru
    }
}
