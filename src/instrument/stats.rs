//! Running hit/miss/eviction counters.

use serde::Serialize;

/// Monotonically accumulating operation statistics.
///
/// `total_operations` counts caller-issued gets and puts; shrink evictions
/// bump `evictions` without counting as operations. A `put` on an existing
/// key counts as a hit (the key was found), matching the operation log's
/// `is_hit` flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub total_operations: u64,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    /// `hits / total_operations * 100`; 0 when no operations yet.
    pub hit_rate: f64,
}

impl CacheStats {
    /// Records one get/put outcome and refreshes the hit rate.
    pub(crate) fn record_access(&mut self, is_hit: bool) {
        self.total_operations += 1;
        if is_hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        self.hit_rate = (self.hits as f64 / self.total_operations as f64) * 100.0;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }
}
