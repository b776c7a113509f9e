//! Engine wrapper that records operations, animation hints and statistics.

use std::fmt::Debug;
use std::hash::Hash;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::instrument::operation::{AnimationStep, Operation, OperationKind, StepKind};
use crate::instrument::stats::CacheStats;
use crate::policy::{FifoEngine, LruEngine};
use crate::snapshot::{CacheSnapshot, EntryId, EvictedEntry};
use crate::traits::{CacheEngine, PolicyKind};

/// Instrumented LRU engine.
pub type InstrumentedLru<K, V> = InstrumentedCache<K, V, LruEngine<K, V>>;
/// Instrumented FIFO engine.
pub type InstrumentedFifo<K, V> = InstrumentedCache<K, V, FifoEngine<K, V>>;

/// Wraps a [`CacheEngine`], recording an operation history, hit/miss/eviction
/// statistics, and a lazily-consumed queue of animation hints.
///
/// The wrapper never changes what the engine does; it only observes. All
/// records are produced synchronously as part of the triggering call.
///
/// # Example
///
/// ```
/// use cachelens::instrument::InstrumentedLru;
/// use cachelens::policy::lru::LruEngine;
///
/// let mut cache: InstrumentedLru<i64, i64> = InstrumentedLru::new(LruEngine::new(2));
/// cache.put(1, 10);
/// cache.put(2, 20);
/// assert_eq!(cache.get(1), Some(10));
/// assert_eq!(cache.get(9), None);
///
/// let stats = cache.stats();
/// assert_eq!(stats.total_operations, 4);
/// assert_eq!(stats.hits, 1);
/// assert_eq!(stats.misses, 3); // both inserts count as misses
/// ```
#[derive(Debug)]
pub struct InstrumentedCache<K, V, E> {
    engine: E,
    operations: Vec<Operation<K, V>>,
    animations: Vec<AnimationStep>,
    stats: CacheStats,
    next_record_id: u64,
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl<K, V, E> InstrumentedCache<K, V, E>
where
    K: Copy + Eq + Hash + Debug,
    V: Clone + Debug,
    E: CacheEngine<K, V>,
{
    /// Wraps `engine`, starting with an empty history.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            operations: Vec::new(),
            animations: Vec::new(),
            stats: CacheStats::default(),
            next_record_id: 0,
        }
    }

    fn next_id(&mut self, prefix: &str) -> String {
        let id = self.next_record_id;
        self.next_record_id += 1;
        format!("{prefix}-{id}")
    }

    #[allow(clippy::too_many_arguments)]
    fn push_step(
        &mut self,
        kind: StepKind,
        target: Option<EntryId>,
        from_position: Option<usize>,
        to_position: Option<usize>,
        description: String,
        duration_ms: u64,
    ) {
        let id = self.next_id("step");
        self.animations.push(AnimationStep {
            id,
            kind,
            target,
            from_position,
            to_position,
            description,
            duration_ms,
        });
    }

    /// Finds the stable id and current position of `key` via a snapshot.
    fn locate(&self, key: &K) -> Option<(EntryId, usize)> {
        let snapshot = self.engine.snapshot();
        snapshot.entry(key).map(|entry| (entry.id, entry.position))
    }

    /// Looks up `key` through the engine, logging one `get` record.
    ///
    /// On a hit, an LRU engine also yields a `Move` hint when the entry was
    /// not already at the front, followed by a hit `Highlight`; a miss
    /// yields a miss `Highlight` only.
    pub fn get(&mut self, key: K) -> Option<V> {
        let pre = self.locate(&key);
        let result = self.engine.get(&key).cloned();
        let is_hit = result.is_some();

        match &result {
            Some(value) => {
                if let Some((target, from)) = pre {
                    if self.engine.policy() == PolicyKind::Lru && from > 0 {
                        let description =
                            format!("Moving key {key:?} to head (most recently used)");
                        self.push_step(
                            StepKind::Move,
                            Some(target),
                            Some(from),
                            Some(0),
                            description,
                            600,
                        );
                    }
                }
                let description = format!("Cache HIT! Retrieved value {value:?} for key {key:?}");
                self.push_step(
                    StepKind::Highlight,
                    pre.map(|(target, _)| target),
                    None,
                    None,
                    description,
                    400,
                );
            }
            None => {
                let description = format!("Cache MISS! Key {key:?} not found");
                self.push_step(StepKind::Highlight, None, None, None, description, 400);
            }
        }

        self.stats.record_access(is_hit);
        let id = self.next_id("op");
        self.operations.push(Operation {
            id,
            kind: OperationKind::Get,
            key,
            value: None,
            result: result.clone(),
            timestamp: now_ms(),
            is_hit,
            evicted_key: None,
            evicted_value: None,
            label: None,
            category: None,
        });
        result
    }

    /// Writes `key` through the engine, logging one `put` record.
    ///
    /// An imminent overflow eviction yields an `Evict` hint targeting the
    /// policy's victim before the write, then an `Insert` or `Update` hint.
    /// The record carries the evicted key/value when an eviction happened.
    pub fn put(&mut self, key: K, value: V) -> Option<EvictedEntry<K, V>> {
        let updating = self.engine.contains(&key);
        let will_evict = !updating && self.engine.len() >= self.engine.capacity();

        if will_evict {
            let snapshot = self.engine.snapshot();
            let victim = match self.engine.policy() {
                PolicyKind::Lru => snapshot.entries.last(),
                PolicyKind::Fifo => snapshot.entries.first(),
            };
            if let Some(victim) = victim {
                let description = format!(
                    "Evicting {} entry: key {:?}, value {:?}",
                    self.engine.policy().victim_label(),
                    victim.key,
                    victim.value
                );
                let (target, position) = (victim.id, victim.position);
                self.push_step(
                    StepKind::Evict,
                    Some(target),
                    Some(position),
                    None,
                    description,
                    700,
                );
            }
        }

        let evicted = self.engine.put(key, value.clone());

        if updating {
            let description = format!("Updated key {key:?} with new value {value:?}");
            self.push_step(StepKind::Update, None, None, None, description, 400);
        } else {
            let description = format!("Inserted new entry: key {key:?}, value {value:?}");
            self.push_step(StepKind::Insert, None, None, None, description, 500);
        }

        self.stats.record_access(updating);
        if evicted.is_some() {
            self.stats.record_eviction();
        }

        let id = self.next_id("op");
        self.operations.push(Operation {
            id,
            kind: OperationKind::Put,
            key,
            value: Some(value),
            result: None,
            timestamp: now_ms(),
            is_hit: updating,
            evicted_key: evicted.as_ref().map(|e| e.key),
            evicted_value: evicted.as_ref().map(|e| e.value.clone()),
            label: None,
            category: None,
        });
        evicted
    }

    /// Changes capacity (clamped to at least 1). Each shrink-evicted entry
    /// is logged as an `evict` record and counted as an eviction, but does
    /// not count toward `total_operations`.
    pub fn set_capacity(&mut self, capacity: usize) -> Vec<EvictedEntry<K, V>> {
        let evicted = self.engine.set_capacity(capacity);
        for entry in &evicted {
            self.stats.record_eviction();
            let id = self.next_id("op");
            self.operations.push(Operation {
                id,
                kind: OperationKind::Evict,
                key: entry.key,
                value: Some(entry.value.clone()),
                result: None,
                timestamp: now_ms(),
                is_hit: false,
                evicted_key: None,
                evicted_value: None,
                label: None,
                category: None,
            });
        }
        evicted
    }

    /// Discards all entries, history, hints and statistics; optionally
    /// changes capacity. Equivalent to constructing a fresh cache.
    pub fn reset(&mut self, capacity: Option<usize>) {
        self.engine.reset();
        if let Some(capacity) = capacity {
            self.engine.set_capacity(capacity);
        }
        self.operations.clear();
        self.animations.clear();
        self.stats = CacheStats::default();
        self.next_record_id = 0;
    }

    /// Attaches display metadata to every logged operation matching `key`.
    ///
    /// Cosmetic only; no effect on cache state or statistics.
    pub fn annotate_key(&mut self, key: K, label: Option<&str>, category: Option<&str>) {
        for op in self.operations.iter_mut().filter(|op| op.key == key) {
            if let Some(label) = label {
                op.label = Some(label.to_string());
            }
            if let Some(category) = category {
                op.category = Some(category.to_string());
            }
        }
    }

    /// Clears the operation history; entries, stats and hints are kept.
    pub fn clear_history(&mut self) {
        self.operations.clear();
    }

    pub fn snapshot(&self) -> CacheSnapshot<K, V> {
        self.engine.snapshot()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn operations(&self) -> &[Operation<K, V>] {
        &self.operations
    }

    pub fn animation_queue(&self) -> &[AnimationStep] {
        &self.animations
    }

    pub fn clear_animation_queue(&mut self) {
        self.animations.clear();
    }

    pub fn contains(&self, key: &K) -> bool {
        self.engine.contains(key)
    }

    pub fn len(&self) -> usize {
        self.engine.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engine.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.engine.capacity()
    }

    pub fn policy(&self) -> PolicyKind {
        self.engine.policy()
    }

    /// Read access to the wrapped engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }
}
