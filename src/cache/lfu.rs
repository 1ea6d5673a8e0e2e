//! LFU Module
//!
//! Least Frequently Used tier store.
//!
//! Every resident key carries an access counter and the sequence number of
//! its insertion. The victim is the key with the lowest counter; among equal
//! counters the earliest inserted resident key goes first. Snapshots list
//! entries in insertion order.

use std::collections::HashMap;
use std::hash::Hash;

use crate::cache::store::validate_capacity;
use crate::cache::{EvictionPolicy, EvictionStore};
use crate::error::Result;

// == LFU Slot ==
#[derive(Debug, Clone)]
struct LfuSlot<V> {
    value: V,
    /// Starts at 1, +1 per get hit or update
    frequency: u64,
    /// Insertion sequence number, unique within the store
    inserted: u64,
}

// == LFU Store ==
/// Bounded tier store evicting the least frequently used entry.
#[derive(Debug)]
pub struct LfuStore<K, V> {
    entries: HashMap<K, LfuSlot<V>>,
    capacity: usize,
    next_seq: u64,
}

impl<K, V> LfuStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates an empty store. Fails on a zero capacity.
    pub fn new(capacity: usize) -> Result<Self> {
        validate_capacity(capacity)?;
        Ok(Self {
            entries: HashMap::with_capacity(capacity),
            capacity,
            next_seq: 0,
        })
    }

    /// Returns the access counter of a resident key.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.entries.get(key).map(|slot| slot.frequency)
    }

    /// Returns the key that would be evicted next.
    pub fn peek_lfu(&self) -> Option<&K> {
        self.entries
            .iter()
            .min_by_key(|(_, slot)| (slot.frequency, slot.inserted))
            .map(|(key, _)| key)
    }
}

impl<K, V> EvictionStore<K, V> for LfuStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn get(&mut self, key: &K) -> Option<V> {
        let slot = self.entries.get_mut(key)?;
        slot.frequency += 1;
        Some(slot.value.clone())
    }

    fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(slot) = self.entries.get_mut(&key) {
            slot.value = value;
            slot.frequency += 1;
            return None;
        }

        let evicted = if self.entries.len() >= self.capacity {
            self.evict_one()
        } else {
            None
        };

        let inserted = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(
            key,
            LfuSlot {
                value,
                frequency: 1,
                inserted,
            },
        );
        evicted
    }

    fn evict_one(&mut self) -> Option<(K, V)> {
        let victim = self.peek_lfu()?.clone();
        let slot = self.entries.remove(&victim)?;
        Some((victim, slot.value))
    }

    fn snapshot(&self) -> Vec<(K, V)> {
        let mut slots: Vec<(&K, &LfuSlot<V>)> = self.entries.iter().collect();
        slots.sort_by_key(|(_, slot)| slot.inserted);
        slots
            .into_iter()
            .map(|(key, slot)| (key.clone(), slot.value.clone()))
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
        EvictionPolicy::Lfu
    }
}
