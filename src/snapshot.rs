//! Point-in-time engine state for external consumers.
//!
//! A [`CacheSnapshot`] is an owned, read-only copy of everything a display
//! layer needs to render an engine: the live entries in policy order (most
//! recent / newest-relevant first position 0), the capacity and size gauges,
//! and the key index so the hash-map side of the structure can be drawn too.
//!
//! Entries are tagged with a stable [`EntryId`] assigned when the entry was
//! created. The id survives promotions and value updates, which is what lets
//! a frontend animate the same visual node across consecutive snapshots; a
//! key that is evicted and later re-inserted gets a fresh id.
//!
//! Field names serialize in camelCase so the exported document matches the
//! format downstream consumers already parse.

use serde::Serialize;

/// Stable identity of a cache entry, assigned at creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntryId(pub(crate) u64);

impl EntryId {
    /// Returns the raw id value.
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// An entry removed from an engine to satisfy a capacity bound.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvictedEntry<K, V> {
    pub id: EntryId,
    pub key: K,
    pub value: V,
}

/// One live entry in a snapshot, in policy order.
///
/// `position` is 0-based from the head of the ordering structure: for LRU the
/// most-recently-used entry, for FIFO the earliest-inserted entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotEntry<K, V> {
    pub id: EntryId,
    pub key: K,
    pub value: V,
    pub position: usize,
    pub is_head: bool,
    pub is_tail: bool,
}

/// One key → entry-id pair from the engine's hash index.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry<K> {
    pub key: K,
    pub id: EntryId,
}

/// Read-only, point-in-time representation of engine state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheSnapshot<K, V> {
    /// Live entries head-to-tail in policy order.
    pub entries: Vec<SnapshotEntry<K, V>>,
    pub capacity: usize,
    pub size: usize,
    /// Hash-index view; iteration order is unspecified.
    pub index_entries: Vec<IndexEntry<K>>,
}

impl<K: PartialEq, V> CacheSnapshot<K, V> {
    /// Finds the snapshot entry for `key`, if present.
    pub fn entry(&self, key: &K) -> Option<&SnapshotEntry<K, V>> {
        self.entries.iter().find(|entry| entry.key == *key)
    }

    /// Returns the 0-based position of `key` in policy order.
    pub fn position_of(&self, key: &K) -> Option<usize> {
        self.entry(key).map(|entry| entry.position)
    }
}
