//! Instrumentation layer: operation history, statistics, animation hints,
//! comparison driving, and JSON export around the cache engines.

pub mod comparison;
pub mod export;
pub mod instrumented;
pub mod operation;
pub mod script;
pub mod stats;

pub use comparison::PolicyComparison;
pub use instrumented::{InstrumentedCache, InstrumentedFifo, InstrumentedLru};
pub use operation::{AnimationStep, Operation, OperationKind, StepKind};
pub use script::{replay, ScriptedOp};
pub use stats::CacheStats;
