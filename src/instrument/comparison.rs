//! Side-by-side LRU vs FIFO driver.
//!
//! Feeds identical operations to an instrumented [`LruEngine`] and an
//! instrumented [`FifoEngine`] so a consumer can render the two policies
//! diverging under the same workload. Each side keeps its own history,
//! statistics and animation hints.
//!
//! [`LruEngine`]: crate::policy::lru::LruEngine
//! [`FifoEngine`]: crate::policy::fifo::FifoEngine

use std::fmt::Debug;
use std::hash::Hash;

use crate::instrument::instrumented::{InstrumentedCache, InstrumentedFifo, InstrumentedLru};
use crate::policy::{FifoEngine, LruEngine};
use crate::snapshot::EvictedEntry;

/// Two instrumented engines, one per policy, driven in lockstep.
#[derive(Debug)]
pub struct PolicyComparison<K, V>
where
    K: Copy + Eq + Hash,
{
    lru: InstrumentedLru<K, V>,
    fifo: InstrumentedFifo<K, V>,
}

impl<K, V> PolicyComparison<K, V>
where
    K: Copy + Eq + Hash + Debug,
    V: Clone + Debug,
{
    /// Creates both sides with the same capacity (clamped to at least 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            lru: InstrumentedCache::new(LruEngine::new(capacity)),
            fifo: InstrumentedCache::new(FifoEngine::new(capacity)),
        }
    }

    /// Looks up `key` on both sides; returns `(lru result, fifo result)`.
    pub fn get(&mut self, key: K) -> (Option<V>, Option<V>) {
        (self.lru.get(key), self.fifo.get(key))
    }

    /// Writes `key` on both sides; returns the evictions each side made.
    pub fn put(
        &mut self,
        key: K,
        value: V,
    ) -> (Option<EvictedEntry<K, V>>, Option<EvictedEntry<K, V>>) {
        (self.lru.put(key, value.clone()), self.fifo.put(key, value))
    }

    /// Resizes both sides; returns the evictions each side made.
    pub fn set_capacity(
        &mut self,
        capacity: usize,
    ) -> (Vec<EvictedEntry<K, V>>, Vec<EvictedEntry<K, V>>) {
        (
            self.lru.set_capacity(capacity),
            self.fifo.set_capacity(capacity),
        )
    }

    /// Resets both sides, optionally changing capacity.
    pub fn reset(&mut self, capacity: Option<usize>) {
        self.lru.reset(capacity);
        self.fifo.reset(capacity);
    }

    pub fn lru(&self) -> &InstrumentedLru<K, V> {
        &self.lru
    }

    pub fn fifo(&self) -> &InstrumentedFifo<K, V> {
        &self.fifo
    }

    pub fn lru_mut(&mut self) -> &mut InstrumentedLru<K, V> {
        &mut self.lru
    }

    pub fn fifo_mut(&mut self) -> &mut InstrumentedFifo<K, V> {
        &mut self.fifo
    }

    /// Keys currently cached by exactly one side, i.e. where the policies
    /// have diverged under the workload so far.
    pub fn divergent_keys(&self) -> Vec<K> {
        let lru_snap = self.lru.snapshot();
        let fifo_snap = self.fifo.snapshot();
        let mut keys: Vec<K> = lru_snap
            .entries
            .iter()
            .map(|e| e.key)
            .filter(|key| fifo_snap.entry(key).is_none())
            .collect();
        keys.extend(
            fifo_snap
                .entries
                .iter()
                .map(|e| e.key)
                .filter(|key| lru_snap.entry(key).is_none()),
        );
        keys
    }
}
