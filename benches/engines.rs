//! Micro-operation benchmarks for both cache engines.
//!
//! Run with: `cargo bench --bench engines`
//!
//! Measures per-operation latency (nanoseconds) for get and put operations,
//! plus the bookkeeping overhead of the instrumentation wrapper.

use std::hint::black_box;
use std::time::{Duration, Instant};

use cachelens::instrument::InstrumentedCache;
use cachelens::policy::fifo::FifoEngine;
use cachelens::policy::lru::LruEngine;
use cachelens::traits::CacheEngine;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CAPACITY: usize = 16_384;
const OPS: u64 = 100_000;

// ============================================================================
// Get Hit Latency (ns/op)
// ============================================================================

fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_hit_ns");
    group.throughput(Throughput::Elements(OPS));

    // LRU
    group.bench_function("lru", |b| {
        b.iter_custom(|iters| {
            let mut cache: LruEngine<u64, u64> = LruEngine::new(CAPACITY);
            for i in 0..CAPACITY as u64 {
                cache.put(i, i);
            }
            let start = Instant::now();
            for _ in 0..iters {
                for i in 0..OPS {
                    let key = i % (CAPACITY as u64);
                    black_box(cache.get(&key));
                }
            }
            start.elapsed()
        })
    });

    // FIFO
    group.bench_function("fifo", |b| {
        b.iter_custom(|iters| {
            let mut cache: FifoEngine<u64, u64> = FifoEngine::new(CAPACITY);
            for i in 0..CAPACITY as u64 {
                cache.put(i, i);
            }
            let start = Instant::now();
            for _ in 0..iters {
                for i in 0..OPS {
                    let key = i % (CAPACITY as u64);
                    black_box(cache.get(&key));
                }
            }
            start.elapsed()
        })
    });

    group.finish();
}

// ============================================================================
// Put with Eviction (ns/op)
// ============================================================================

fn bench_put_evict(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_evict_ns");
    group.throughput(Throughput::Elements(OPS));

    // LRU
    group.bench_function("lru", |b| {
        b.iter_custom(|iters| {
            let mut total = Duration::ZERO;
            for _ in 0..iters {
                let mut cache: LruEngine<u64, u64> = LruEngine::new(CAPACITY);
                for i in 0..CAPACITY as u64 {
                    cache.put(i, i);
                }
                let start = Instant::now();
                for i in 0..OPS {
                    let key = CAPACITY as u64 + i;
                    black_box(cache.put(key, key));
                }
                total += start.elapsed();
            }
            total
        })
    });

    // FIFO
    group.bench_function("fifo", |b| {
        b.iter_custom(|iters| {
            let mut total = Duration::ZERO;
            for _ in 0..iters {
                let mut cache: FifoEngine<u64, u64> = FifoEngine::new(CAPACITY);
                for i in 0..CAPACITY as u64 {
                    cache.put(i, i);
                }
                let start = Instant::now();
                for i in 0..OPS {
                    let key = CAPACITY as u64 + i;
                    black_box(cache.put(key, key));
                }
                total += start.elapsed();
            }
            total
        })
    });

    group.finish();
}

// ============================================================================
// Mixed Workload (get + put, seeded random keys)
// ============================================================================

fn bench_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_ops_ns");
    group.throughput(Throughput::Elements(OPS));

    // 80% of keys land in the resident range, the rest miss and insert.
    group.bench_function("lru", |b| {
        b.iter_custom(|iters| {
            let mut total = Duration::ZERO;
            for _ in 0..iters {
                let mut cache: LruEngine<u64, u64> = LruEngine::new(CAPACITY);
                for i in 0..CAPACITY as u64 {
                    cache.put(i, i);
                }
                let mut rng = StdRng::seed_from_u64(42);
                let start = Instant::now();
                for _ in 0..OPS {
                    let key = rng.gen_range(0..(CAPACITY as u64 * 5 / 4));
                    if cache.get(&key).is_none() {
                        cache.put(key, key);
                    }
                }
                total += start.elapsed();
            }
            total
        })
    });

    group.bench_function("fifo", |b| {
        b.iter_custom(|iters| {
            let mut total = Duration::ZERO;
            for _ in 0..iters {
                let mut cache: FifoEngine<u64, u64> = FifoEngine::new(CAPACITY);
                for i in 0..CAPACITY as u64 {
                    cache.put(i, i);
                }
                let mut rng = StdRng::seed_from_u64(42);
                let start = Instant::now();
                for _ in 0..OPS {
                    let key = rng.gen_range(0..(CAPACITY as u64 * 5 / 4));
                    if cache.get(&key).is_none() {
                        cache.put(key, key);
                    }
                }
                total += start.elapsed();
            }
            total
        })
    });

    group.finish();
}

// ============================================================================
// Instrumentation Overhead (log + stats + animation bookkeeping)
// ============================================================================

fn bench_instrumented(c: &mut Criterion) {
    let mut group = c.benchmark_group("instrumented_ns");
    // Smaller op count: each op appends to the history.
    let ops = 10_000u64;
    group.throughput(Throughput::Elements(ops));

    group.bench_function("lru_get_hit", |b| {
        b.iter_custom(|iters| {
            let mut total = Duration::ZERO;
            for _ in 0..iters {
                let mut cache = InstrumentedCache::new(LruEngine::<u64, u64>::new(CAPACITY));
                for i in 0..CAPACITY as u64 {
                    cache.put(i, i);
                }
                cache.clear_history();
                let start = Instant::now();
                for i in 0..ops {
                    let key = i % (CAPACITY as u64);
                    black_box(cache.get(key));
                }
                total += start.elapsed();
            }
            total
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_get_hit,
    bench_put_evict,
    bench_mixed,
    bench_instrumented
);
criterion_main!(benches);
