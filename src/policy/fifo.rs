//! First-in-first-out cache engine, the comparison baseline for LRU.
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────┐
//!   │                     FifoEngine<K, V>                     │
//!   │                                                          │
//!   │   FxHashMap<K, FifoEntry>       VecDeque<K>              │
//!   │   key → { value, id }           [k1] [k2] [k3] [k4]      │
//!   │                                  ↑              ↑        │
//!   │                                oldest         newest     │
//!   │                                EVICT          insert     │
//!   └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Deliberately implemented independently of [`LruEngine`] so the two
//! policies stay obviously different under identical input: a `get` never
//! reorders anything, a `put` for an existing key updates the value in place
//! without touching the queue, and overflow always evicts the queue front
//! (earliest inserted) no matter how recently it was accessed.
//!
//! Because keys are unique and never removed mid-queue, the queue holds
//! exactly the live keys in insertion order, with no stale entries and no
//! tombstone scanning.
//!
//! [`LruEngine`]: crate::policy::lru::LruEngine

use std::collections::VecDeque;
use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::InvariantError;
use crate::snapshot::{CacheSnapshot, EntryId, EvictedEntry, IndexEntry, SnapshotEntry};
use crate::traits::{CacheEngine, PolicyKind};

#[derive(Debug)]
struct FifoEntry<V> {
    value: V,
    id: EntryId,
}

/// FIFO cache engine: hash index + insertion-order queue.
#[derive(Debug)]
pub struct FifoEngine<K, V>
where
    K: Copy + Eq + Hash,
{
    index: FxHashMap<K, FifoEntry<V>>,
    queue: VecDeque<K>,
    capacity: usize,
    next_entry_id: u64,
}

impl<K, V> FifoEngine<K, V>
where
    K: Copy + Eq + Hash,
{
    /// Creates an engine with `capacity` clamped to at least 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            queue: VecDeque::with_capacity(capacity),
            capacity,
            next_entry_id: 0,
        }
    }

    fn mint_entry_id(&mut self) -> EntryId {
        let id = EntryId(self.next_entry_id);
        self.next_entry_id += 1;
        id
    }

    /// Removes the earliest-inserted entry and unindexes it.
    fn evict_oldest(&mut self) -> Option<EvictedEntry<K, V>> {
        let key = self.queue.pop_front()?;
        let entry = self.index.remove(&key)?;
        Some(EvictedEntry {
            id: entry.id,
            key,
            value: entry.value,
        })
    }

    /// Verifies index/queue consistency: same size, every queued key
    /// indexed, no duplicate keys in the queue.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.queue.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys, queue holds {}",
                self.index.len(),
                self.queue.len()
            )));
        }
        let mut seen = FxHashSet::default();
        for key in &self.queue {
            if !self.index.contains_key(key) {
                return Err(InvariantError::new("queue holds an unindexed key"));
            }
            if !seen.insert(*key) {
                return Err(InvariantError::new("queue holds a duplicate key"));
            }
        }
        Ok(())
    }

    fn debug_validate(&self) {
        #[cfg(debug_assertions)]
        if let Err(err) = self.check_invariants() {
            panic!("fifo engine invariant violated: {err}");
        }
    }
}

impl<K, V> CacheEngine<K, V> for FifoEngine<K, V>
where
    K: Copy + Eq + Hash,
    V: Clone,
{
    /// O(1) index lookup; never changes insertion order.
    fn get(&mut self, key: &K) -> Option<&V> {
        self.index.get(key).map(|entry| &entry.value)
    }

    /// O(1). An existing key is updated in place, position unchanged; a new
    /// key is appended to the queue, evicting the front entry when full.
    fn put(&mut self, key: K, value: V) -> Option<EvictedEntry<K, V>> {
        if let Some(entry) = self.index.get_mut(&key) {
            entry.value = value;
            return None;
        }

        let evicted = if self.queue.len() >= self.capacity {
            self.evict_oldest()
        } else {
            None
        };

        let id = self.mint_entry_id();
        self.index.insert(key, FifoEntry { value, id });
        self.queue.push_back(key);
        self.debug_validate();
        evicted
    }

    fn set_capacity(&mut self, capacity: usize) -> Vec<EvictedEntry<K, V>> {
        self.capacity = capacity.max(1);
        let mut evicted = Vec::new();
        while self.queue.len() > self.capacity {
            if let Some(entry) = self.evict_oldest() {
                evicted.push(entry);
            } else {
                break;
            }
        }
        self.debug_validate();
        evicted
    }

    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        self.index.clear();
        self.queue.clear();
    }

    fn reset(&mut self) {
        self.clear();
        self.next_entry_id = 0;
    }

    /// O(len) walk of the queue, earliest-inserted first (position 0).
    fn snapshot(&self) -> CacheSnapshot<K, V> {
        let size = self.queue.len();
        let entries = self
            .queue
            .iter()
            .enumerate()
            .filter_map(|(position, key)| {
                self.index.get(key).map(|entry| SnapshotEntry {
                    id: entry.id,
                    key: *key,
                    value: entry.value.clone(),
                    position,
                    is_head: position == 0,
                    is_tail: position + 1 == size,
                })
            })
            .collect();
        let index_entries = self
            .index
            .iter()
            .map(|(&key, entry)| IndexEntry { key, id: entry.id })
            .collect();
        CacheSnapshot {
            entries,
            capacity: self.capacity,
            size,
            index_entries,
        }
    }

    fn policy(&self) -> PolicyKind {
        PolicyKind::Fifo
    }
}
