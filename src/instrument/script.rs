//! Canned operation sequences for demos and tests.
//!
//! A [`ScriptedOp`] is pure data; [`replay`] runs a slice of them through an
//! instrumented cache synchronously. Pacing between steps is a presentation
//! concern and deliberately absent here.

use std::fmt::Debug;
use std::hash::Hash;

use crate::instrument::instrumented::InstrumentedCache;
use crate::traits::CacheEngine;

/// One scripted cache operation, with optional display metadata.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptedOp<K, V> {
    Get(K),
    Put(K, V),
    /// `Put` that also annotates the key's records with a label/category.
    LabeledPut {
        key: K,
        value: V,
        label: &'static str,
        category: &'static str,
    },
    /// `Get` that also annotates the key's records with a label.
    LabeledGet { key: K, label: &'static str },
}

/// Runs `script` through `cache` in order.
pub fn replay<K, V, E>(script: &[ScriptedOp<K, V>], cache: &mut InstrumentedCache<K, V, E>)
where
    K: Copy + Eq + Hash + Debug,
    V: Clone + Debug,
    E: CacheEngine<K, V>,
{
    for op in script {
        match op {
            ScriptedOp::Get(key) => {
                cache.get(*key);
            }
            ScriptedOp::Put(key, value) => {
                cache.put(*key, value.clone());
            }
            ScriptedOp::LabeledPut {
                key,
                value,
                label,
                category,
            } => {
                cache.put(*key, value.clone());
                cache.annotate_key(*key, Some(label), Some(category));
            }
            ScriptedOp::LabeledGet { key, label } => {
                cache.get(*key);
                cache.annotate_key(*key, Some(label), None);
            }
        }
    }
}

/// Simple puts followed by gets.
pub fn basic_operations() -> Vec<ScriptedOp<i64, i64>> {
    vec![
        ScriptedOp::Put(1, 100),
        ScriptedOp::Put(2, 200),
        ScriptedOp::Put(3, 300),
        ScriptedOp::Get(1),
        ScriptedOp::Get(2),
    ]
}

/// Shows eviction once capacity (3) is exceeded.
pub fn eviction_demo() -> Vec<ScriptedOp<i64, i64>> {
    vec![
        ScriptedOp::Put(1, 10),
        ScriptedOp::Put(2, 20),
        ScriptedOp::Put(3, 30),
        ScriptedOp::Get(1),
        ScriptedOp::Put(4, 40),
        ScriptedOp::Put(5, 50),
    ]
}

/// Updating existing keys moves them to the front under LRU.
pub fn update_demo() -> Vec<ScriptedOp<i64, i64>> {
    vec![
        ScriptedOp::Put(1, 100),
        ScriptedOp::Put(2, 200),
        ScriptedOp::Put(3, 300),
        ScriptedOp::Put(1, 150),
        ScriptedOp::Get(3),
        ScriptedOp::Put(2, 250),
    ]
}

/// Temporal locality workload (capacity 5) where LRU keeps the hot key and
/// FIFO repeatedly drops it.
pub fn locality_demo() -> Vec<ScriptedOp<i64, i64>> {
    vec![
        ScriptedOp::Put(1, 100),
        ScriptedOp::Put(2, 200),
        ScriptedOp::Put(3, 300),
        ScriptedOp::Put(4, 400),
        ScriptedOp::Put(5, 500),
        ScriptedOp::Get(1),
        ScriptedOp::Put(6, 600),
        ScriptedOp::Get(1),
        ScriptedOp::Get(1),
        ScriptedOp::Put(7, 700),
        ScriptedOp::Get(1),
    ]
}

/// Browser-asset caching walkthrough (capacity 5) with labeled entries.
pub fn browser_cache_demo() -> Vec<ScriptedOp<i64, i64>> {
    vec![
        ScriptedOp::LabeledPut {
            key: 101,
            value: 1200,
            label: "hero-banner.jpg",
            category: "image",
        },
        ScriptedOp::LabeledPut {
            key: 102,
            value: 450,
            label: "main-style.css",
            category: "style",
        },
        ScriptedOp::LabeledPut {
            key: 103,
            value: 800,
            label: "app-logic.js",
            category: "script",
        },
        ScriptedOp::LabeledPut {
            key: 104,
            value: 300,
            label: "logo-vector.svg",
            category: "image",
        },
        ScriptedOp::LabeledPut {
            key: 105,
            value: 1500,
            label: "user-gallery-1.png",
            category: "image",
        },
        ScriptedOp::LabeledGet {
            key: 101,
            label: "hero-banner.jpg",
        },
        ScriptedOp::LabeledPut {
            key: 106,
            value: 2200,
            label: "heavy-video-intro.mp4",
            category: "video",
        },
        ScriptedOp::LabeledGet {
            key: 103,
            label: "app-logic.js",
        },
        ScriptedOp::LabeledPut {
            key: 107,
            value: 600,
            label: "nav-icons.woff2",
            category: "font",
        },
        ScriptedOp::LabeledGet {
            key: 101,
            label: "hero-banner.jpg",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::instrumented::{InstrumentedCache, InstrumentedLru};
    use crate::policy::lru::LruEngine;

    fn lru(capacity: usize) -> InstrumentedLru<i64, i64> {
        InstrumentedCache::new(LruEngine::new(capacity))
    }

    #[test]
    fn basic_script_ends_with_two_hits() {
        let mut cache = lru(3);
        replay(&basic_operations(), &mut cache);
        let stats = cache.stats();
        assert_eq!(stats.total_operations, 5);
        assert_eq!(stats.hits, 2);
    }

    #[test]
    fn locality_demo_keeps_hot_key_under_lru() {
        let mut cache = lru(5);
        replay(&locality_demo(), &mut cache);
        // Every get targets key 1, which LRU keeps resident throughout.
        assert!(cache.contains(&1));
        assert_eq!(cache.stats().hits, 4);
    }

    #[test]
    fn browser_demo_attaches_labels() {
        let mut cache = lru(5);
        replay(&browser_cache_demo(), &mut cache);
        let labeled = cache
            .operations()
            .iter()
            .filter(|op| op.label.is_some())
            .count();
        assert_eq!(labeled, cache.operations().len());
        let hero = cache
            .operations()
            .iter()
            .find(|op| op.key == 101)
            .expect("key 101 was scripted");
        assert_eq!(hero.label.as_deref(), Some("hero-banner.jpg"));
        assert_eq!(hero.category.as_deref(), Some("image"));
    }
}
