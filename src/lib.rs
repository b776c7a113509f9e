//! cachelens: instrumented LRU/FIFO cache engines for visualization frontends.
//!
//! The crate has three layers:
//!
//! - [`ds`]: a slot arena and an arena-backed doubly linked list with stable
//!   handles instead of raw pointers.
//! - [`policy`]: the cache engines. [`policy::lru::LruEngine`] composes a
//!   hash index with the recency list; [`policy::fifo::FifoEngine`] is an
//!   independently implemented insertion-order baseline.
//! - [`instrument`]: wraps an engine to record an operation history,
//!   hit/miss/eviction statistics and advisory animation hints, and exports
//!   the whole state as JSON for an external display layer.
//!
//! Everything is single-threaded and synchronous; [`traits::CacheEngine`]
//! documents the per-policy semantics of each operation.

pub mod builder;
pub mod ds;
pub mod error;
pub mod instrument;
pub mod policy;
pub mod prelude;
pub mod snapshot;
pub mod traits;
