//! JSON export of instrumented cache state.
//!
//! The exported document has three top-level fields, `state` (the engine
//! snapshot), `operations` (the full history) and `stats`, with camelCase
//! leaf fields throughout. The layout is fixed: downstream consumers parse
//! this exact shape. Import is intentionally not provided.

use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

use crate::instrument::instrumented::InstrumentedCache;
use crate::instrument::operation::Operation;
use crate::instrument::stats::CacheStats;
use crate::snapshot::CacheSnapshot;
use crate::traits::CacheEngine;

#[derive(Debug, Serialize)]
struct ExportedState<'a, K, V> {
    state: CacheSnapshot<K, V>,
    operations: &'a [Operation<K, V>],
    stats: CacheStats,
}

impl<K, V, E> InstrumentedCache<K, V, E>
where
    K: Copy + Eq + Hash + Debug + Serialize,
    V: Clone + Debug + Serialize,
    E: CacheEngine<K, V>,
{
    /// Serializes `{ state, operations, stats }` as pretty-printed JSON.
    ///
    /// # Example
    ///
    /// ```
    /// use cachelens::instrument::InstrumentedLru;
    /// use cachelens::policy::lru::LruEngine;
    ///
    /// let mut cache: InstrumentedLru<i64, i64> = InstrumentedLru::new(LruEngine::new(2));
    /// cache.put(1, 10);
    ///
    /// let json = cache.export_state();
    /// assert!(json.contains("\"state\""));
    /// assert!(json.contains("\"operations\""));
    /// assert!(json.contains("\"stats\""));
    /// ```
    pub fn export_state(&self) -> String {
        let doc = ExportedState {
            state: self.snapshot(),
            operations: self.operations(),
            stats: self.stats(),
        };
        serde_json::to_string_pretty(&doc)
            .expect("export document contains only plain serializable data")
    }
}
