//! Unified cache builder for runtime policy selection.
//!
//! Frontends switch between eviction policies dynamically, so the builder
//! produces a policy-erased [`Cache`] that implements [`CacheEngine`] by
//! delegating to whichever engine was chosen.
//!
//! ## Example
//!
//! ```
//! use cachelens::builder::{CacheBuilder, CachePolicy};
//! use cachelens::traits::CacheEngine;
//!
//! let mut cache = CacheBuilder::new(100).build::<u64, String>(CachePolicy::Lru);
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! ```

use std::hash::Hash;

use crate::policy::fifo::FifoEngine;
use crate::policy::lru::LruEngine;
use crate::snapshot::{CacheSnapshot, EvictedEntry};
use crate::traits::{CacheEngine, PolicyKind};

/// Available eviction policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Least recently used eviction.
    Lru,
    /// First in, first out eviction.
    Fifo,
}

/// Builder carrying shared construction parameters.
#[derive(Debug, Clone, Copy)]
pub struct CacheBuilder {
    capacity: usize,
}

impl CacheBuilder {
    /// Starts a builder for caches of the given capacity (clamped to ≥ 1 by
    /// the engines).
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Builds an engine for `policy`.
    pub fn build<K, V>(&self, policy: CachePolicy) -> Cache<K, V>
    where
        K: Copy + Eq + Hash,
        V: Clone,
    {
        let inner = match policy {
            CachePolicy::Lru => CacheInner::Lru(LruEngine::new(self.capacity)),
            CachePolicy::Fifo => CacheInner::Fifo(FifoEngine::new(self.capacity)),
        };
        Cache { inner }
    }
}

/// Policy-erased cache engine selected at runtime.
#[derive(Debug)]
pub struct Cache<K, V>
where
    K: Copy + Eq + Hash,
{
    inner: CacheInner<K, V>,
}

#[derive(Debug)]
enum CacheInner<K, V>
where
    K: Copy + Eq + Hash,
{
    Lru(LruEngine<K, V>),
    Fifo(FifoEngine<K, V>),
}

impl<K, V> CacheEngine<K, V> for Cache<K, V>
where
    K: Copy + Eq + Hash,
    V: Clone,
{
    fn get(&mut self, key: &K) -> Option<&V> {
        match &mut self.inner {
            CacheInner::Lru(engine) => engine.get(key),
            CacheInner::Fifo(engine) => engine.get(key),
        }
    }

    fn put(&mut self, key: K, value: V) -> Option<EvictedEntry<K, V>> {
        match &mut self.inner {
            CacheInner::Lru(engine) => engine.put(key, value),
            CacheInner::Fifo(engine) => engine.put(key, value),
        }
    }

    fn set_capacity(&mut self, capacity: usize) -> Vec<EvictedEntry<K, V>> {
        match &mut self.inner {
            CacheInner::Lru(engine) => engine.set_capacity(capacity),
            CacheInner::Fifo(engine) => engine.set_capacity(capacity),
        }
    }

    fn contains(&self, key: &K) -> bool {
        match &self.inner {
            CacheInner::Lru(engine) => engine.contains(key),
            CacheInner::Fifo(engine) => engine.contains(key),
        }
    }

    fn len(&self) -> usize {
        match &self.inner {
            CacheInner::Lru(engine) => engine.len(),
            CacheInner::Fifo(engine) => engine.len(),
        }
    }

    fn capacity(&self) -> usize {
        match &self.inner {
            CacheInner::Lru(engine) => engine.capacity(),
            CacheInner::Fifo(engine) => engine.capacity(),
        }
    }

    fn clear(&mut self) {
        match &mut self.inner {
            CacheInner::Lru(engine) => engine.clear(),
            CacheInner::Fifo(engine) => engine.clear(),
        }
    }

    fn reset(&mut self) {
        match &mut self.inner {
            CacheInner::Lru(engine) => engine.reset(),
            CacheInner::Fifo(engine) => engine.reset(),
        }
    }

    fn snapshot(&self) -> CacheSnapshot<K, V> {
        match &self.inner {
            CacheInner::Lru(engine) => engine.snapshot(),
            CacheInner::Fifo(engine) => engine.snapshot(),
        }
    }

    fn policy(&self) -> PolicyKind {
        match &self.inner {
            CacheInner::Lru(engine) => engine.policy(),
            CacheInner::Fifo(engine) => engine.policy(),
        }
    }
}
