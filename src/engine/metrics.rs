//! Dispatch run metrics.
//!
//! `Dispatcher::dispatch` returns only the reply. `Dispatcher::dispatch_with_metrics`
//! also reports which rule answered, what its wildcards bound, and where the
//! time went. The CLI uses this for `--trace`.
//!
//! ## Design notes
//!
//! - `matching` covers template alignment for every rule tried, including the
//!   one that matched; `handler` is usually dominated by the document fetch.

use crate::{Binding, Reply};
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct DispatchMetrics {
    /// Total elapsed time for the dispatch.
    pub total: Duration,
    /// Time spent aligning templates.
    pub matching: Duration,
    /// Time spent in the matched rule's handler.
    pub handler: Duration,
    /// Number of rules whose template was tried.
    pub rules_tried: usize,
}

/// The rule that answered and its binding.
#[derive(Debug, Clone)]
pub struct MatchTrace {
    pub rule: &'static str,
    pub template: String,
    pub binding: Binding,
}

/// Dispatcher output bundled with trace and timing information.
#[derive(Debug, Clone)]
pub struct DispatchResult {
    pub reply: Reply,
    /// `None` when no rule matched.
    pub trace: Option<MatchTrace>,
    pub metrics: DispatchMetrics,
}
