//! State machine behind the incremental product search.
//!
//! Keystrokes mutate the raw filter synchronously; the debounced filter
//! settles later, and lookups complete later still, possibly out of order
//! across keystrokes. The machine stamps every issued lookup with a
//! generation token and applies a completion only while its token is still
//! current, so a slow early response can never overwrite a newer one.

use super::models::Product;

/// Correlation token stamped onto an in-flight catalog lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryToken(u64);

/// Outcome of a completed search query. `Absent` means the service reported
/// not-found, which is distinct from a query that matched nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    Matches(Vec<Product>),
    Absent,
}

/// Where the search currently stands, as rendered by the UI.
///
/// `Idle` is the no-query-yet state shown for an empty filter; it must never
/// be confused with a settled query that found nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPhase {
    Idle,
    Pending,
    Settled(QueryResult),
}

/// Tracks one search input's query lifecycle.
///
/// Single-owner: one instance belongs to one search surface, driven from one
/// logical execution queue. There is no locking because there is no
/// parallelism; correctness rests on the generation check alone.
#[derive(Debug)]
pub struct SearchLifecycle {
    generation: u64,
    phase: SearchPhase,
}

impl Default for SearchLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchLifecycle {
    pub fn new() -> Self {
        Self {
            generation: 0,
            phase: SearchPhase::Idle,
        }
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    /// The raw filter changed. Invalidates any in-flight lookup; an empty
    /// (or whitespace-only) filter parks the machine back in `Idle`.
    pub fn input_changed(&mut self, filter: &str) {
        self.generation += 1;
        self.phase = if filter.trim().is_empty() {
            SearchPhase::Idle
        } else {
            SearchPhase::Pending
        };
    }

    /// The debounced filter settled and a lookup is about to be issued.
    /// Returns the token to resolve it with, or `None` for an empty filter
    /// (no query is issued while idle).
    pub fn query_started(&mut self, filter: &str) -> Option<QueryToken> {
        if filter.trim().is_empty() {
            return None;
        }
        self.generation += 1;
        self.phase = SearchPhase::Pending;
        Some(QueryToken(self.generation))
    }

    /// A lookup completed. The result is applied only if `token` is still
    /// current; a stale completion is discarded and leaves the phase
    /// untouched. Returns whether the result was applied.
    pub fn query_resolved(&mut self, token: QueryToken, result: QueryResult) -> bool {
        if token.0 != self.generation {
            return false;
        }
        self.phase = SearchPhase::Settled(result);
        true
    }
}
