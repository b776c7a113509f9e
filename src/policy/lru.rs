//! Least-recently-used cache engine.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────────────────────────────────────┐
//!   │                      LruEngine<K, V>                        │
//!   │                                                             │
//!   │   FxHashMap<K, SlotId>          RecencyList<LruEntry>       │
//!   │   ┌───────┬────────┐            (arena-backed, SlotId links)│
//!   │   │  key  │ SlotId ├──────►  front ─► [C] ◄─► [A] ◄─► [B]   │
//!   │   └───────┴────────┘                 MRU             LRU    │
//!   └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The hash index maps keys to list handles; the list keeps entries in
//! recency order, most recent at the front. A hit relinks the node at the
//! front; overflow pops the back. Both are O(1) because the list nodes live
//! in a slot arena and link by index, so a "move" is three handle rewrites.
//!
//! Every entry carries a stable [`EntryId`] assigned at creation. The id is
//! what external consumers track across snapshots: it survives promotion and
//! value updates, and is retired with the entry on eviction.
//!
//! ## Capacity
//!
//! Capacities below 1 are clamped to 1 in [`LruEngine::new`] and
//! [`set_capacity`](CacheEngine::set_capacity). The clamp is deliberate
//! behavior compatibility with the system this engine models, which never
//! rejects a capacity.
//!
//! ## Example
//!
//! ```
//! use cachelens::policy::lru::LruEngine;
//! use cachelens::traits::CacheEngine;
//!
//! let mut engine = LruEngine::new(2);
//! engine.put(1, 10);
//! engine.put(2, 20);
//! engine.get(&1);
//!
//! // Key 2 is now least recently used and gets evicted.
//! let evicted = engine.put(3, 30).expect("cache was full");
//! assert_eq!(evicted.key, 2);
//! assert!(engine.contains(&1));
//! ```

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::{RecencyList, SlotId};
use crate::error::InvariantError;
use crate::snapshot::{CacheSnapshot, EntryId, EvictedEntry, IndexEntry, SnapshotEntry};
use crate::traits::{CacheEngine, PolicyKind};

#[derive(Debug)]
struct LruEntry<K, V> {
    key: K,
    value: V,
    id: EntryId,
}

/// LRU cache engine: hash index + arena-backed recency list.
#[derive(Debug)]
pub struct LruEngine<K, V>
where
    K: Copy + Eq + Hash,
{
    index: FxHashMap<K, SlotId>,
    list: RecencyList<LruEntry<K, V>>,
    capacity: usize,
    next_entry_id: u64,
}

impl<K, V> LruEngine<K, V>
where
    K: Copy + Eq + Hash,
{
    /// Creates an engine with `capacity` clamped to at least 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            list: RecencyList::with_capacity(capacity),
            capacity,
            next_entry_id: 0,
        }
    }

    fn mint_entry_id(&mut self) -> EntryId {
        let id = EntryId(self.next_entry_id);
        self.next_entry_id += 1;
        id
    }

    /// Removes the least-recently-used entry and unindexes it.
    fn evict_lru(&mut self) -> Option<EvictedEntry<K, V>> {
        let entry = self.list.pop_back()?;
        self.index.remove(&entry.key);
        Some(EvictedEntry {
            id: entry.id,
            key: entry.key,
            value: entry.value,
        })
    }

    /// Verifies index/list consistency.
    ///
    /// Checks that the index and list agree on size, that every indexed
    /// handle resolves to an entry with the same key, and that the list
    /// chain itself is doubly consistent.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys, list holds {} nodes",
                self.index.len(),
                self.list.len()
            )));
        }
        for (key, &slot) in &self.index {
            match self.list.get(slot) {
                Some(entry) if entry.key == *key => {}
                Some(_) => {
                    return Err(InvariantError::new("index maps a key to a foreign node"));
                }
                None => return Err(InvariantError::new("index maps a key to a freed slot")),
            }
        }
        self.list.check_invariants()
    }

    fn debug_validate(&self) {
        #[cfg(debug_assertions)]
        if let Err(err) = self.check_invariants() {
            panic!("lru engine invariant violated: {err}");
        }
    }
}

impl<K, V> CacheEngine<K, V> for LruEngine<K, V>
where
    K: Copy + Eq + Hash,
    V: Clone,
{
    /// O(1): index lookup plus a constant-cost relink to the front.
    fn get(&mut self, key: &K) -> Option<&V> {
        let slot = *self.index.get(key)?;
        self.list.move_to_front(slot);
        self.debug_validate();
        self.list.get(slot).map(|entry| &entry.value)
    }

    /// O(1). An existing key is updated in place and promoted; a new key is
    /// inserted at the front, evicting the back entry first when full.
    fn put(&mut self, key: K, value: V) -> Option<EvictedEntry<K, V>> {
        if let Some(&slot) = self.index.get(&key) {
            if let Some(entry) = self.list.get_mut(slot) {
                entry.value = value;
            }
            self.list.move_to_front(slot);
            self.debug_validate();
            return None;
        }

        let evicted = if self.index.len() >= self.capacity {
            self.evict_lru()
        } else {
            None
        };

        let id = self.mint_entry_id();
        let slot = self.list.push_front(LruEntry { key, value, id });
        self.index.insert(key, slot);
        self.debug_validate();
        evicted
    }

    fn set_capacity(&mut self, capacity: usize) -> Vec<EvictedEntry<K, V>> {
        self.capacity = capacity.max(1);
        let mut evicted = Vec::new();
        while self.index.len() > self.capacity {
            if let Some(entry) = self.evict_lru() {
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
        self.list.clear();
    }

    fn reset(&mut self) {
        self.clear();
        self.next_entry_id = 0;
    }

    /// O(len) walk of the recency list, most-recently-used first.
    fn snapshot(&self) -> CacheSnapshot<K, V> {
        let size = self.list.len();
        let entries = self
            .list
            .iter()
            .enumerate()
            .map(|(position, entry)| SnapshotEntry {
                id: entry.id,
                key: entry.key,
                value: entry.value.clone(),
                position,
                is_head: position == 0,
                is_tail: position + 1 == size,
            })
            .collect();
        let index_entries = self
            .index
            .iter()
            .filter_map(|(&key, &slot)| {
                self.list.get(slot).map(|entry| IndexEntry { key, id: entry.id })
            })
            .collect();
        CacheSnapshot {
            entries,
            capacity: self.capacity,
            size,
            index_entries,
        }
    }

    fn policy(&self) -> PolicyKind {
        PolicyKind::Lru
    }
}
