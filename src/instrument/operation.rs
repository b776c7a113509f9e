//! Operation records and advisory animation steps.
//!
//! An [`Operation`] is one immutable entry in the append-only history kept by
//! [`InstrumentedCache`](crate::instrument::InstrumentedCache). The only
//! mutation ever applied after the fact is attaching display metadata
//! (`label`/`category`) to records matching a key; that is cosmetic and has
//! no effect on cache semantics.
//!
//! An [`AnimationStep`] is a purely descriptive hint for a presentation
//! layer: a step kind, an optional target entry, optional from/to positions
//! and a suggested duration. Steps are plain appended data; nothing in this
//! crate schedules, waits on, or otherwise interprets them.

use serde::Serialize;

use crate::snapshot::EntryId;

/// What a logged operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Get,
    Put,
    /// Eviction forced by a capacity shrink (overflow evictions are folded
    /// into the triggering `Put` record instead).
    Evict,
}

/// One immutable entry in the operation history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation<K, V> {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: OperationKind,
    pub key: K,
    /// Value written by a `put`, or carried by an `evict` record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<V>,
    /// Value returned by a `get` hit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<V>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    /// `get`: key was present. `put`: key already existed (update).
    pub is_hit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evicted_key: Option<K>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evicted_value: Option<V>,
    /// Display metadata, attachable post-hoc by key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Kind of state transition an animation step describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Highlight,
    Move,
    Insert,
    Evict,
    Update,
}

/// Advisory display hint describing one visual state transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationStep {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: StepKind,
    /// Entry the step refers to; `None` for e.g. a miss highlight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<EntryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_position: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_position: Option<usize>,
    pub description: String,
    /// Suggested duration in milliseconds.
    pub duration_ms: u64,
}
