//! Bounding and cancelling searches.
//!
//! Longest-path search is exponential in the worst case and shortest-path
//! searches on huge graphs can run long, so every engine accepts a
//! [`Limits`] value that is checked once per expansion.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::outcome::SearchError;

/// A shared flag that asks running searches to stop.
///
/// Clones share the same flag, so one clone can be handed to a search and
/// another kept by whoever decides to cancel it (possibly another thread).
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create an untripped token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every search holding this token to stop.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Optional bounds on a single search.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    max_expanded: Option<usize>,
    cancel: Option<CancelToken>,
}

impl Limits {
    /// No bounds at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Stop after `max` expansions (visits, for longest-path search).
    pub fn max_expanded(mut self, max: usize) -> Self {
        self.max_expanded = Some(max);
        self
    }

    /// Stop as soon as `token` is cancelled.
    pub fn cancel_on(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// The expansion budget, if any.
    pub fn expansion_budget(&self) -> Option<usize> {
        self.max_expanded
    }

    /// Called before each expansion with the number done so far.
    pub(crate) fn check(&self, expanded: usize) -> Result<(), SearchError> {
        let over_budget = self.max_expanded.is_some_and(|max| expanded >= max);
        let cancelled = self.cancel.as_ref().is_some_and(CancelToken::is_cancelled);
        if over_budget || cancelled {
            log::debug!("search interrupted after {expanded} expansions");
            return Err(SearchError::Interrupted { expanded });
        }
        Ok(())
    }
}
