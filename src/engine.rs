//! Question matching and dispatch engine.
//!
//! Answering a question is a short pipeline:
//!
//! ```text
//! "what is the capital of %"  ── Template::parse      (template.rs)
//!                                     │
//! query tokens ──────────────┐        │
//!                            v        v
//!                     Dispatcher::dispatch            (dispatcher.rs)
//!                       for each rule, in order:
//!                         match_template              (matcher.rs)
//!                           - literals compare case-insensitively
//!                           - wildcards bind 1+ tokens, shortest first
//!                           - backtrack on failure
//!                       first match ──▶ handler(binding, source)
//!                                     │
//!                                     v
//!                                   Reply
//! ```
//!
//! ## Responsibilities by module
//!
//! - `template.rs`: parses template text into `Segment`s and rejects
//!   ill-formed templates up front.
//! - `matcher.rs`: the backtracking aligner producing a `Binding`.
//! - `dispatcher.rs`: first-match-wins iteration over an ordered rule table,
//!   plus the two placeholder replies.
//! - `metrics.rs`: timing and trace data for verbose runs.
//!
//! ## Adding questions
//!
//! New questions are a new `Rule` in `src/rules/questions.rs`; neither the
//! matcher nor the dispatcher needs to change.
//!
//! ## Debugging
//!
//! Set `FACTOID_LOG=factoid=trace` to see every split the matcher tries.

#[path = "engine/dispatcher.rs"]
mod dispatcher;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/template.rs"]
mod template;

pub use dispatcher::{Dispatcher, NO_ANSWERS, NOT_UNDERSTOOD};
pub use matcher::match_template;
pub use metrics::{DispatchMetrics, DispatchResult, MatchTrace};
pub use template::{Segment, Template, WILDCARD};
