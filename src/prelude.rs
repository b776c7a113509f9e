pub use crate::builder::{Cache, CacheBuilder, CachePolicy};
pub use crate::ds::{Arena, RecencyList, SlotId};
pub use crate::error::InvariantError;
pub use crate::instrument::{
    AnimationStep, CacheStats, InstrumentedCache, InstrumentedFifo, InstrumentedLru, Operation,
    OperationKind, PolicyComparison, StepKind,
};
pub use crate::policy::{FifoEngine, LruEngine};
pub use crate::snapshot::{CacheSnapshot, EntryId, EvictedEntry, IndexEntry, SnapshotEntry};
pub use crate::traits::{CacheEngine, PolicyKind};
