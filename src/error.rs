//! Error types for the cachelens library.
//!
//! The public cache API never fails for correct use: lookup misses are
//! `None` and out-of-range capacities are clamped (see the engine docs).
//! The only error type is [`InvariantError`], returned by the debug-oriented
//! `check_invariants` methods on the engines and the recency list.

use std::fmt;

/// Error returned when internal cache invariants are violated.
///
/// Produced by `check_invariants` methods on cache types (e.g.
/// [`LruEngine::check_invariants`](crate::policy::lru::LruEngine::check_invariants)).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}
