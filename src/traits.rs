//! Common interface shared by the cache engines.
//!
//! Both engines, [`LruEngine`](crate::policy::lru::LruEngine) and
//! [`FifoEngine`](crate::policy::fifo::FifoEngine), expose the same
//! operation set behind [`CacheEngine`], so the instrumentation layer, the
//! builder and the comparison driver can treat the eviction policy as a
//! pluggable detail. Only the *meaning* of the ordering differs:
//!
//! | Operation        | LRU                             | FIFO                        |
//! |------------------|---------------------------------|-----------------------------|
//! | `get` hit        | promotes to most-recently-used  | no order change             |
//! | `put` (existing) | updates value + promotes        | updates value only          |
//! | `put` (new, full)| evicts least-recently-used      | evicts earliest-inserted    |
//! | `set_capacity`   | shrink evicts LRU-first         | shrink evicts oldest-first  |
//!
//! Misses are reported as `None` rather than an in-band sentinel value, so
//! every value in the domain (including negatives) is legal.

use crate::snapshot::{CacheSnapshot, EvictedEntry};

/// Which eviction policy an engine implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// Least-recently-used: evicts the entry touched longest ago.
    Lru,
    /// First-in-first-out: evicts the entry inserted longest ago.
    Fifo,
}

impl PolicyKind {
    /// Human-readable description of the entry this policy evicts first.
    pub fn victim_label(self) -> &'static str {
        match self {
            PolicyKind::Lru => "least recently used",
            PolicyKind::Fifo => "first inserted",
        }
    }
}

/// Operations every cache engine supports.
///
/// Single-threaded and synchronous: every call completes before returning
/// and no call suspends. Engines exclusively own their entries; callers only
/// ever receive copies via snapshots and eviction reports.
///
/// # Example
///
/// ```
/// use cachelens::policy::lru::LruEngine;
/// use cachelens::traits::CacheEngine;
///
/// fn warm<E: CacheEngine<u64, i64>>(engine: &mut E, data: &[(u64, i64)]) {
///     for &(key, value) in data {
///         engine.put(key, value);
///     }
/// }
///
/// let mut engine = LruEngine::new(8);
/// warm(&mut engine, &[(1, 10), (2, 20)]);
/// assert_eq!(engine.len(), 2);
/// ```
pub trait CacheEngine<K, V> {
    /// Looks up `key`, applying the policy's access side effect on a hit.
    ///
    /// Returns `None` on a miss; a miss has no structural side effect.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Inserts or updates `key`, evicting one entry first when a new key
    /// would exceed capacity. Returns the evicted entry, if any.
    fn put(&mut self, key: K, value: V) -> Option<EvictedEntry<K, V>>;

    /// Changes the capacity, clamping to at least 1, and evicts
    /// policy-oldest entries until `len() <= capacity()`.
    ///
    /// Returns the evicted entries in eviction order (oldest evicted first).
    fn set_capacity(&mut self, capacity: usize) -> Vec<EvictedEntry<K, V>>;

    /// Checks presence without any access side effect.
    fn contains(&self, key: &K) -> bool;

    /// Number of live entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries (always at least 1).
    fn capacity(&self) -> usize;

    /// Removes all entries; capacity is unchanged.
    fn clear(&mut self);

    /// Removes all entries and restarts entry-identity assignment, as if the
    /// engine had been freshly constructed with its current capacity.
    fn reset(&mut self);

    /// Produces an ordered copy of the current state in O(len) without
    /// mutating the engine.
    fn snapshot(&self) -> CacheSnapshot<K, V>;

    /// The eviction policy this engine implements.
    fn policy(&self) -> PolicyKind;
}
